use crate::cpu_65c816::*;
use crate::opcodes::Mode;

/// Load the accumulator
/// Function: A:={adr}
/// Flags: N Z
pub fn lda_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    cpu.c = set_lo(cpu.c, operand);
    cpu.update_nz8(operand);
}

pub fn lda_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.c = operand;
    cpu.update_nz16(operand);
}

/// Load X
/// Function: X:={adr}
/// Flags: N Z
pub fn ldx_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    cpu.x = operand as u16;
    cpu.update_nz8(operand);
}

pub fn ldx_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.x = operand;
    cpu.update_nz16(operand);
}

/// Load Y
/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    cpu.y = operand as u16;
    cpu.update_nz8(operand);
}

pub fn ldy_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.y = operand;
    cpu.update_nz16(operand);
}

/// Store the accumulator
/// Function: {adr}:=A
/// Flags:
pub fn sta_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (eal, _) = cpu.effective_address(mode);
    cpu.write_u8(eal, lo(cpu.c));
}

pub fn sta_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let (eal, eah) = cpu.effective_address(mode);
    cpu.write_word(eal, eah, cpu.c);
}

/// Store X
/// Function: {adr}:=X
/// Flags:
pub fn stx_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (eal, _) = cpu.effective_address(mode);
    cpu.write_u8(eal, lo(cpu.x));
}

pub fn stx_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let (eal, eah) = cpu.effective_address(mode);
    cpu.write_word(eal, eah, cpu.x);
}

/// Store Y
/// Function: {adr}:=Y
/// Flags:
pub fn sty_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (eal, _) = cpu.effective_address(mode);
    cpu.write_u8(eal, lo(cpu.y));
}

pub fn sty_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let (eal, eah) = cpu.effective_address(mode);
    cpu.write_word(eal, eah, cpu.y);
}

/// Store zero
/// Function: {adr}:=0
/// Flags:
pub fn stz_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (eal, _) = cpu.effective_address(mode);
    cpu.write_u8(eal, 0);
}

pub fn stz_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let (eal, eah) = cpu.effective_address(mode);
    cpu.write_word(eal, eah, 0);
}

/// Transfer A to X
/// Function: X:=A
/// Flags: N Z
pub fn tax_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.c);
    cpu.x = result as u16;
    cpu.update_nz8(result);
}

pub fn tax_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.x = cpu.c;
    cpu.update_nz16(cpu.x);
}

/// Transfer A to Y
/// Function: Y:=A
/// Flags: N Z
pub fn tay_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.c);
    cpu.y = result as u16;
    cpu.update_nz8(result);
}

pub fn tay_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.y = cpu.c;
    cpu.update_nz16(cpu.y);
}

/// Transfer X to A
/// Function: A:=X
/// Flags: N Z
pub fn txa_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.x);
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn txa_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.c = cpu.x;
    cpu.update_nz16(cpu.c);
}

/// Transfer Y to A
/// Function: A:=Y
/// Flags: N Z
pub fn tya_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.y);
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn tya_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.c = cpu.y;
    cpu.update_nz16(cpu.c);
}

/// Transfer SP to X
/// Function: X:=S
/// Flags: N Z
pub fn tsx_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.sp);
    cpu.x = result as u16;
    cpu.update_nz8(result);
}

pub fn tsx_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.x = cpu.sp;
    cpu.update_nz16(cpu.x);
}

/// Transfer X to SP. In emulation mode the stack stays in page $01.
/// Function: S:=X
/// Flags:
pub fn txs(cpu: &mut Cpu65C816, _mode: Mode) {
    if cpu.e {
        cpu.sp = 0x0100 | lo(cpu.x) as u16;
    } else {
        cpu.sp = cpu.x;
    }
}

/// Transfer X to Y
/// Function: Y:=X
/// Flags: N Z
pub fn txy_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.x);
    cpu.y = result as u16;
    cpu.update_nz8(result);
}

pub fn txy_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.y = cpu.x;
    cpu.update_nz16(cpu.y);
}

/// Transfer Y to X
/// Function: X:=Y
/// Flags: N Z
pub fn tyx_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.y);
    cpu.x = result as u16;
    cpu.update_nz8(result);
}

pub fn tyx_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.x = cpu.y;
    cpu.update_nz16(cpu.x);
}

/*
 * The 16-bit transfers below always move the full word, whatever M and X
 * say.
 */

/// Transfer C to SP. Emulation mode takes only the low byte.
/// Function: S:=C
/// Flags:
pub fn tcs(cpu: &mut Cpu65C816, _mode: Mode) {
    if cpu.e {
        cpu.sp = 0x0100 | lo(cpu.c) as u16;
    } else {
        cpu.sp = cpu.c;
    }
}

/// Transfer C to the direct page base
/// Function: D:=C
/// Flags: N Z
pub fn tcd(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.dp = cpu.c;
    cpu.update_nz16(cpu.dp);
}

/// Transfer the direct page base to C
/// Function: C:=D
/// Flags: N Z
pub fn tdc(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.c = cpu.dp;
    cpu.update_nz16(cpu.c);
}

/// Transfer SP to C
/// Function: C:=S
/// Flags: N Z
pub fn tsc(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.c = cpu.sp;
    cpu.update_nz16(cpu.c);
}

/// Exchange the two halves of the accumulator.
/// Function: C:=(B:A -> A:B)
/// Flags: N Z
pub fn xba(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.c = cpu.c.rotate_right(8);
    cpu.update_nz8(lo(cpu.c));
}

/// One byte of a block move. The whole instruction re-dispatches itself by
/// rewinding PC until the count in C runs out past $FFFF, so the outer
/// loop regains control between bytes.
fn block_move(cpu: &mut Cpu65C816, step_up: bool) {
    let dst_bank = cpu.next_u8();
    let src_bank = cpu.next_u8();

    let value = cpu.read_u8(bank_addr(src_bank, cpu.x));
    cpu.write_u8(bank_addr(dst_bank, cpu.y), value);
    cpu.dbr = dst_bank;

    let delta: u16 = if step_up { 1 } else { 0xffff };
    if cpu.e {
        // Index registers are 8-bit here.
        cpu.x = lo(cpu.x).wrapping_add(delta as u8) as u16;
        cpu.y = lo(cpu.y).wrapping_add(delta as u8) as u16;
    } else {
        cpu.x = cpu.x.wrapping_add(delta);
        cpu.y = cpu.y.wrapping_add(delta);
        cpu.truncate_index_registers();
    }

    cpu.c = cpu.c.wrapping_sub(1);
    if cpu.c != 0xffff {
        cpu.pc = cpu.pc.wrapping_sub(3);
    }
}

/// Block move, ascending addresses.
/// Function: {dst:Y}:={src:X} X:=X+1 Y:=Y+1 C:=C-1
/// Flags:
pub fn mvn(cpu: &mut Cpu65C816, _mode: Mode) {
    block_move(cpu, true);
}

/// Block move, descending addresses.
/// Function: {dst:Y}:={src:X} X:=X-1 Y:=Y-1 C:=C-1
/// Flags:
pub fn mvp(cpu: &mut Cpu65C816, _mode: Mode) {
    block_move(cpu, false);
}
