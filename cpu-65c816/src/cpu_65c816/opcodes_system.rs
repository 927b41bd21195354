use crate::cpu_65c816::*;
use crate::opcodes::Mode;

/// Reset status bits. In emulation mode M and X snap straight back to 1.
/// Function: P:=P&~{imm}
/// Flags: N V M X D I Z C
pub fn rep(cpu: &mut Cpu65C816, mode: Mode) {
    let mask = cpu.get_operand_b(mode);
    cpu.p &= !mask;
    if cpu.e {
        cpu.p |= UNUSED_BITS;
    }
    cpu.truncate_index_registers();
    cpu.update_dispatch();
}

/// Set status bits. Setting X truncates the index registers.
/// Function: P:=P or {imm}
/// Flags: N V M X D I Z C
pub fn sep(cpu: &mut Cpu65C816, mode: Mode) {
    let mask = cpu.get_operand_b(mode);
    cpu.p |= mask;
    if cpu.e {
        cpu.p |= UNUSED_BITS;
    }
    cpu.truncate_index_registers();
    cpu.update_dispatch();
}

/// Exchange the carry with the emulation flag. This is the only door in
/// and out of emulation mode.
/// Function: C<->E
/// Flags: C M X
pub fn xce(cpu: &mut Cpu65C816, _mode: Mode) {
    let carry = cpu.get_carry() != 0;
    cpu.set_status_flag(StatusFlag::Carry, cpu.e);
    cpu.set_emulation(carry);
}

/// The host escape. The signature byte selects a command against the
/// interrupt registers or the host serial channel; anything unrecognized
/// is ignored.
/// Function: host command {imm}
/// Flags:
pub fn wdm(cpu: &mut Cpu65C816, _mode: Mode) {
    let command = cpu.next_u8();
    match command {
        0x00 => cpu.c = cpu.ier,
        0x01 => cpu.ier = cpu.c,
        0x02 => cpu.ier |= cpu.c,
        0x03 => cpu.ier &= !cpu.c,
        0x04 => cpu.c = cpu.ifr,
        0x05 => cpu.ifr = cpu.c,
        0x06 => cpu.ifr |= cpu.c,
        0x07 => cpu.ifr &= !cpu.c,
        0x08 => {
            let value = cpu.host.serial_rx();
            cpu.c = set_lo(cpu.c, value);
        }
        0x09 => cpu.host.serial_tx(lo(cpu.c)),
        0xff => cpu.stopped = true,
        _ => {}
    }
}

/// Stop the clock. Only a reset clears this; PC stays on the opcode.
/// Function: stopped:=1
/// Flags:
pub fn stp(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.stopped = true;
    cpu.pc = cpu.pc.wrapping_sub(1);
}

/// Wait for an interrupt. The step loop idles until something pends, then
/// continues with the next instruction (or the interrupt handler, if the
/// interrupt is unmasked).
/// Function: waiting:=1
/// Flags:
pub fn wai(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.waiting = true;
}

/// No operation
/// Function:
/// Flags:
pub fn nop(_cpu: &mut Cpu65C816, _mode: Mode) {}
