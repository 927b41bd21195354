use crate::cpu_65c816::*;
use crate::opcodes::Mode;

/// Push the accumulator
/// Function: (S)-:=A
/// Flags:
pub fn pha_b(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.push_u8(lo(cpu.c));
}

pub fn pha_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.cycles += 1;
    cpu.push_u16(cpu.c);
}

/// Pull the accumulator
/// Function: A:=+(S)
/// Flags: N Z
pub fn pla_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = cpu.pull_u8();
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn pla_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.cycles += 1;
    cpu.c = cpu.pull_u16();
    cpu.update_nz16(cpu.c);
}

/// Push X
/// Function: (S)-:=X
/// Flags:
pub fn phx_b(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.push_u8(lo(cpu.x));
}

pub fn phx_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.cycles += 1;
    cpu.push_u16(cpu.x);
}

/// Pull X
/// Function: X:=+(S)
/// Flags: N Z
pub fn plx_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = cpu.pull_u8();
    cpu.x = result as u16;
    cpu.update_nz8(result);
}

pub fn plx_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.cycles += 1;
    cpu.x = cpu.pull_u16();
    cpu.update_nz16(cpu.x);
}

/// Push Y
/// Function: (S)-:=Y
/// Flags:
pub fn phy_b(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.push_u8(lo(cpu.y));
}

pub fn phy_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.cycles += 1;
    cpu.push_u16(cpu.y);
}

/// Pull Y
/// Function: Y:=+(S)
/// Flags: N Z
pub fn ply_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = cpu.pull_u8();
    cpu.y = result as u16;
    cpu.update_nz8(result);
}

pub fn ply_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.cycles += 1;
    cpu.y = cpu.pull_u16();
    cpu.update_nz16(cpu.y);
}

/// Push the status register. The emulation-mode image carries bits 4-5
/// high, as the 6502 did.
/// Function: (S)-:=P
/// Flags:
pub fn php(cpu: &mut Cpu65C816, _mode: Mode) {
    let value = if cpu.e { cpu.p | UNUSED_BITS } else { cpu.p };
    cpu.push_u8(value);
}

/// Pull the status register. A pull that lands X=1 truncates the index
/// registers, and the dispatch table is re-selected either way.
/// Function: P:=+(S)
/// Flags: N V M X D I Z C
pub fn plp(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.p = cpu.pull_u8();
    if cpu.e {
        cpu.p |= UNUSED_BITS;
    }
    cpu.truncate_index_registers();
    cpu.update_dispatch();
}

/// Push the data bank register
/// Function: (S)-:=DBR
/// Flags:
pub fn phb(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.push_u8(cpu.dbr);
}

/// Pull the data bank register
/// Function: DBR:=+(S)
/// Flags: N Z
pub fn plb(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.dbr = cpu.pull_u8();
    cpu.update_nz8(cpu.dbr);
}

/// Push the program bank register
/// Function: (S)-:=PBR
/// Flags:
pub fn phk(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.push_u8(cpu.pbr);
}

/// Push the direct page base
/// Function: (S)-:=D
/// Flags:
pub fn phd(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.push_u16(cpu.dp);
}

/// Pull the direct page base
/// Function: D:=+(S)
/// Flags: N Z
pub fn pld(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.dp = cpu.pull_u16();
    cpu.update_nz16(cpu.dp);
}

/// Push an immediate word.
/// Function: (S)-:={imm16}
/// Flags:
pub fn pea(cpu: &mut Cpu65C816, _mode: Mode) {
    let value = cpu.next_u16();
    cpu.push_u16(value);
}

/// Push the word found at a direct-page address: the pointer that (dp)
/// would chase.
/// Function: (S)-:={dp}
/// Flags:
pub fn pei(cpu: &mut Cpu65C816, mode: Mode) {
    let (eal, eah) = cpu.effective_address(mode);
    let value = cpu.read_word(eal, eah);
    cpu.push_u16(value);
}

/// Push PC plus a 16-bit offset, for position-independent code.
/// Function: (S)-:=PC+{off16}
/// Flags:
pub fn per(cpu: &mut Cpu65C816, _mode: Mode) {
    let offset = cpu.next_u16();
    let value = cpu.pc.wrapping_add(offset);
    cpu.push_u16(value);
}
