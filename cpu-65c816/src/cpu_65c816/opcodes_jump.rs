use crate::constants::vectors;
use crate::cpu_65c816::*;
use crate::opcodes::Mode;

/// Shared by every conditional branch. A taken branch costs one extra
/// cycle, and one more in emulation mode when the target sits in a
/// different 256-byte page than the instruction after the branch.
fn branch(cpu: &mut Cpu65C816, do_branch: bool) {
    let offset = cpu.next_u8() as i8;
    if do_branch {
        let base = cpu.pc;
        let target = base.wrapping_add(offset as u16);
        cpu.cycles += 1;
        if cpu.e && (base & 0xff00) != (target & 0xff00) {
            cpu.cycles += 1;
        }
        cpu.pc = target;
    }
}

/// Branch if plus
/// Function: branch on N=0
/// Flags:
pub fn bpl(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if minus
/// Function: branch on N=1
/// Flags:
pub fn bmi(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if Overflow Clear
/// Function: branch on V=0
/// Flags:
pub fn bvc(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if Overflow Set
/// Function: branch on V=1
/// Flags:
pub fn bvs(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if Carry Clear
/// Function: branch on C=0
/// Flags:
pub fn bcc(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if Carry Set
/// Function: branch on C=1
/// Flags:
pub fn bcs(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if Not Equal
/// Function: branch on Z=0
/// Flags:
pub fn bne(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Branch if Equal
/// Function: branch on Z=1
/// Flags:
pub fn beq(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Branch always
/// Function: PC:=PC+{off}
/// Flags:
pub fn bra(cpu: &mut Cpu65C816, _mode: Mode) {
    branch(cpu, true);
}

/// Branch always, 16-bit offset. No page penalty.
/// Function: PC:=PC+{off16}
/// Flags:
pub fn brl(cpu: &mut Cpu65C816, _mode: Mode) {
    let offset = cpu.next_u16();
    cpu.pc = cpu.pc.wrapping_add(offset);
}

/// Jump within the program bank.
/// Function: PC:={adr}
/// Flags:
pub fn jmp(cpu: &mut Cpu65C816, mode: Mode) {
    match mode {
        Mode::AbsoluteProgram => {
            cpu.pc = cpu.next_u16();
        }
        // The pointer is always read from bank 0, whatever PBR is, and
        // without the 6502's xxFF page-wrap bug.
        Mode::AbsoluteIndirect => {
            let ptr = cpu.next_u16();
            cpu.pc = cpu.read_word(ptr as u32, ptr.wrapping_add(1) as u32);
        }
        // Here the pointer lives in the program bank instead.
        Mode::AbsoluteIndexedIndirect => {
            let ptr = cpu.next_u16().wrapping_add(cpu.x);
            cpu.pc = cpu.read_word(
                bank_addr(cpu.pbr, ptr),
                bank_addr(cpu.pbr, ptr.wrapping_add(1)),
            );
        }
        _ => panic!("JMP dispatched with a non-jump addressing mode."),
    }
}

/// Jump long: loads PBR along with PC.
/// Function: PB:PC:={adr24}
/// Flags:
pub fn jml(cpu: &mut Cpu65C816, mode: Mode) {
    match mode {
        Mode::AbsoluteLong => {
            let lo = cpu.next_u8();
            let hi = cpu.next_u8();
            let bank = cpu.next_u8();
            cpu.pc = u16::from_le_bytes([lo, hi]);
            cpu.pbr = bank;
        }
        Mode::AbsoluteIndirectLong => {
            let ptr = cpu.next_u16();
            cpu.pc = cpu.read_word(ptr as u32, ptr.wrapping_add(1) as u32);
            cpu.pbr = cpu.read_u8(ptr.wrapping_add(2) as u32);
        }
        _ => panic!("JML dispatched with a non-jump addressing mode."),
    }
}

/// Jump to subroutine. The address of the instruction's last byte goes on
/// the stack, so RTS can pull-and-increment.
/// Function: (S)-:=PC PC:={adr}
/// Flags:
pub fn jsr(cpu: &mut Cpu65C816, mode: Mode) {
    match mode {
        Mode::AbsoluteProgram => {
            let target = cpu.next_u16();
            cpu.push_u16(cpu.pc.wrapping_sub(1));
            cpu.pc = target;
        }
        Mode::AbsoluteIndexedIndirect => {
            let ptr = cpu.next_u16().wrapping_add(cpu.x);
            cpu.push_u16(cpu.pc.wrapping_sub(1));
            cpu.pc = cpu.read_word(
                bank_addr(cpu.pbr, ptr),
                bank_addr(cpu.pbr, ptr.wrapping_add(1)),
            );
        }
        _ => panic!("JSR dispatched with a non-jump addressing mode."),
    }
}

/// Jump to subroutine long: PBR goes on the stack before the PC.
/// Function: (S)-:=PB,PC PB:PC:={adr24}
/// Flags:
pub fn jsl(cpu: &mut Cpu65C816, _mode: Mode) {
    let lo = cpu.next_u8();
    let hi = cpu.next_u8();
    let bank = cpu.next_u8();
    cpu.push_u8(cpu.pbr);
    cpu.push_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = u16::from_le_bytes([lo, hi]);
    cpu.pbr = bank;
}

/// Return from subroutine
/// Function: PC:=+(S)+1
/// Flags:
pub fn rts(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.pc = cpu.pull_u16().wrapping_add(1);
}

/// Return from subroutine long
/// Function: PC:=+(S)+1 PB:=+(S)
/// Flags:
pub fn rtl(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.pc = cpu.pull_u16().wrapping_add(1);
    cpu.pbr = cpu.pull_u8();
}

/// Return from interrupt. The emulation-mode frame has no bank byte, pins
/// the unused P bits high and, like the 6502, comes back with interrupts
/// re-enabled.
/// Function: P,PC[,PB]:=+(S)
/// Flags: N V M X D I Z C
pub fn rti(cpu: &mut Cpu65C816, _mode: Mode) {
    if cpu.e {
        cpu.p = cpu.pull_u8() | UNUSED_BITS;
        cpu.pc = cpu.pull_u16();
        cpu.set_status_flag(StatusFlag::InterruptDisable, false);
    } else {
        cpu.cycles += 1;
        cpu.p = cpu.pull_u8();
        cpu.pc = cpu.pull_u16();
        cpu.pbr = cpu.pull_u8();
        cpu.truncate_index_registers();
    }
    cpu.update_dispatch();
}

/// Software break. Two bytes: the opcode and a signature; the stacked
/// return address is past both. The emulation-mode frame pushes P with the
/// break bit set so the handler can tell it from an IRQ.
/// Function: (S)-:=PC,P PC:=(vector)
/// Flags: B I D
pub fn brk(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.next_u8();
    if !cpu.e {
        cpu.cycles += 1;
    }
    let pushed = cpu.p | UNUSED_BITS;
    cpu.exception(vectors::IRQ_BRK_EMULATION, vectors::BRK_NATIVE, pushed);
}

/// Coprocessor escape. Like BRK but with its own vector and the break bit
/// clear in the pushed P.
/// Function: (S)-:=PC,P PC:=(vector)
/// Flags: I D
pub fn cop(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.next_u8();
    if !cpu.e {
        cpu.cycles += 1;
    }
    let pushed = (cpu.p | UNUSED_BITS) & !BREAK_BIT;
    cpu.exception(vectors::COP_EMULATION, vectors::COP_NATIVE, pushed);
}

/// Clear Carry flag
/// Function: C:=0
/// Flags: C
pub fn clc(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Set Carry flag
/// Function: C:=1
/// Flags: C
pub fn sec(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Clear Decimal flag
/// Function: D:=0
/// Flags: D
pub fn cld(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Set Decimal flag
/// Function: D:=1
/// Flags: D
pub fn sed(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Clear Interrupt disable
/// Function: I:=0
/// Flags: I
pub fn cli(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Set Interrupt disable
/// Function: I:=1
/// Flags: I
pub fn sei(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow flag
/// Function: V:=0
/// Flags: V
pub fn clv(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}
