use crate::cpu_65c816::*;
use crate::opcodes::Mode;

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let result = lo(cpu.c) | operand;
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn ora_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.c |= operand;
    cpu.update_nz16(cpu.c);
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let result = lo(cpu.c) & operand;
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn and_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.c &= operand;
    cpu.update_nz16(cpu.c);
}

/// Logical Exclusive OR
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let result = lo(cpu.c) ^ operand;
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn eor_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.c ^= operand;
    cpu.update_nz16(cpu.c);
}

/// Decimal-mode addition, one nibble at a time from the least significant
/// upward, as a single carry chain: any nibble over 9 is bumped by 6 and
/// the overflow carries into the next nibble. Leaves the carry flag set
/// from the final nibble. N, V and Z come from the returned binary result.
fn decimal_add(cpu: &mut Cpu65C816, a: u32, data: u32, nibbles: u32) -> u32 {
    let mut result = 0;
    let mut carry = cpu.get_carry() as u32;
    for i in 0..nibbles {
        let shift = 4 * i;
        let mut sum = ((a >> shift) & 0xf) + ((data >> shift) & 0xf) + carry;
        if sum > 0x9 {
            sum += 0x6;
        }
        carry = (sum > 0xf) as u32;
        result |= (sum & 0xf) << shift;
    }
    cpu.set_status_flag(StatusFlag::Carry, carry != 0);
    result
}

/// The subtractive half: the data arrives one's-complemented nibble by
/// nibble, and nibbles left over 9 by the binary sum are pulled back by 6.
/// The correction does not feed the carry chain.
fn decimal_subtract(cpu: &mut Cpu65C816, a: u32, data: u32, nibbles: u32) -> u32 {
    let mut result = 0;
    let mut carry = cpu.get_carry() as u32;
    for i in 0..nibbles {
        let shift = 4 * i;
        let sum = ((a >> shift) & 0xf) + ((!data >> shift) & 0xf) + carry;
        carry = (sum > 0xf) as u32;
        let mut nibble = sum & 0xf;
        if nibble > 0x9 {
            nibble -= 0x6;
        }
        result |= nibble << shift;
    }
    cpu.set_status_flag(StatusFlag::Carry, carry != 0);
    result
}

/// Add with Carry
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let a = lo(cpu.c);
    let result = if cpu.is_status_flag_set(StatusFlag::Decimal) {
        decimal_add(cpu, a as u32, operand as u32, 2) as u8
    } else {
        let sum = a as u16 + operand as u16 + cpu.get_carry();
        cpu.set_status_flag(StatusFlag::Carry, sum > 0xff);
        sum as u8
    };
    cpu.set_status_flag(
        StatusFlag::Overflow,
        (!(a ^ operand) & (a ^ result)) & 0x80 != 0,
    );
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn adc_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    let a = cpu.c;
    let result = if cpu.is_status_flag_set(StatusFlag::Decimal) {
        decimal_add(cpu, a as u32, operand as u32, 4) as u16
    } else {
        let sum = a as u32 + operand as u32 + cpu.get_carry() as u32;
        cpu.set_status_flag(StatusFlag::Carry, sum > 0xffff);
        sum as u16
    };
    cpu.set_status_flag(
        StatusFlag::Overflow,
        (!(a ^ operand) & (a ^ result)) & 0x8000 != 0,
    );
    cpu.c = result;
    cpu.update_nz16(result);
}

/// Subtract with Carry. The same adder with the data one's-complemented;
/// a set carry is the usual "no borrow" starting point.
/// Function: A:=A-{adr}+C-1
/// Flags: N V Z C
pub fn sbc_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let a = lo(cpu.c);
    let result = if cpu.is_status_flag_set(StatusFlag::Decimal) {
        decimal_subtract(cpu, a as u32, operand as u32, 2) as u8
    } else {
        let sum = a as u16 + !operand as u16 + cpu.get_carry();
        cpu.set_status_flag(StatusFlag::Carry, sum > 0xff);
        sum as u8
    };
    cpu.set_status_flag(
        StatusFlag::Overflow,
        ((a ^ operand) & (a ^ result)) & 0x80 != 0,
    );
    cpu.c = set_lo(cpu.c, result);
    cpu.update_nz8(result);
}

pub fn sbc_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    let a = cpu.c;
    let result = if cpu.is_status_flag_set(StatusFlag::Decimal) {
        decimal_subtract(cpu, a as u32, operand as u32, 4) as u16
    } else {
        let sum = a as u32 + !operand as u32 + cpu.get_carry() as u32;
        cpu.set_status_flag(StatusFlag::Carry, sum > 0xffff);
        sum as u16
    };
    cpu.set_status_flag(
        StatusFlag::Overflow,
        ((a ^ operand) & (a ^ result)) & 0x8000 != 0,
    );
    cpu.c = result;
    cpu.update_nz16(result);
}

/// Compare A with source. Always binary, even in decimal mode.
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let a = lo(cpu.c);
    cpu.update_nz8(a.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, a >= operand);
}

pub fn cmp_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.update_nz16(cpu.c.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.c >= operand);
}

/// Compare X with source
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let x = lo(cpu.x);
    cpu.update_nz8(x.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, x >= operand);
}

pub fn cpx_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.update_nz16(cpu.x.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.x >= operand);
}

/// Compare Y with source
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy_b(cpu: &mut Cpu65C816, mode: Mode) {
    let operand = cpu.get_operand_b(mode);
    let y = lo(cpu.y);
    cpu.update_nz8(y.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, y >= operand);
}

pub fn cpy_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let operand = cpu.get_operand_w(mode);
    cpu.update_nz16(cpu.y.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.y >= operand);
}

/// Bit test. The immediate form touches only Z.
/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit_b(cpu: &mut Cpu65C816, mode: Mode) {
    let immediate = mode == Mode::ImmediateM;
    let operand = cpu.get_operand_b(mode);
    cpu.set_status_flag(StatusFlag::Zero, lo(cpu.c) & operand == 0);
    if !immediate {
        cpu.set_status_flag(StatusFlag::Negative, operand & 0x80 != 0);
        cpu.set_status_flag(StatusFlag::Overflow, operand & 0x40 != 0);
    }
}

pub fn bit_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 1;
    let immediate = mode == Mode::ImmediateM;
    let operand = cpu.get_operand_w(mode);
    cpu.set_status_flag(StatusFlag::Zero, cpu.c & operand == 0);
    if !immediate {
        cpu.set_status_flag(StatusFlag::Negative, operand & 0x8000 != 0);
        cpu.set_status_flag(StatusFlag::Overflow, operand & 0x4000 != 0);
    }
}

/// Arithmetic shift left
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    let result = operand << 1;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x80 != 0);
    cpu.update_nz8(result);
    cpu.write_back_b(address, result);
}

pub fn asl_w(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    if address.is_some() {
        cpu.cycles += 2;
    }
    let result = operand << 1;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x8000 != 0);
    cpu.update_nz16(result);
    cpu.write_back_w(address, result);
}

/// Logical shift right
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    let result = operand >> 1;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x01 != 0);
    cpu.update_nz8(result);
    cpu.write_back_b(address, result);
}

pub fn lsr_w(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    if address.is_some() {
        cpu.cycles += 2;
    }
    let result = operand >> 1;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x0001 != 0);
    cpu.update_nz16(result);
    cpu.write_back_w(address, result);
}

/// Rotate left through the carry
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    let result = (operand << 1) | cpu.get_carry() as u8;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x80 != 0);
    cpu.update_nz8(result);
    cpu.write_back_b(address, result);
}

pub fn rol_w(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    if address.is_some() {
        cpu.cycles += 2;
    }
    let result = (operand << 1) | cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x8000 != 0);
    cpu.update_nz16(result);
    cpu.write_back_w(address, result);
}

/// Rotate right through the carry
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    let result = (operand >> 1) | (cpu.get_carry() as u8) << 7;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x01 != 0);
    cpu.update_nz8(result);
    cpu.write_back_b(address, result);
}

pub fn ror_w(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    if address.is_some() {
        cpu.cycles += 2;
    }
    let result = (operand >> 1) | cpu.get_carry() << 15;
    cpu.set_status_flag(StatusFlag::Carry, operand & 0x0001 != 0);
    cpu.update_nz16(result);
    cpu.write_back_w(address, result);
}

/// Increment at an address or the accumulator
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    let result = operand.wrapping_add(1);
    cpu.update_nz8(result);
    cpu.write_back_b(address, result);
}

pub fn inc_w(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    if address.is_some() {
        cpu.cycles += 2;
    }
    let result = operand.wrapping_add(1);
    cpu.update_nz16(result);
    cpu.write_back_w(address, result);
}

/// Decrement at an address or the accumulator
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    let result = operand.wrapping_sub(1);
    cpu.update_nz8(result);
    cpu.write_back_b(address, result);
}

pub fn dec_w(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    if address.is_some() {
        cpu.cycles += 2;
    }
    let result = operand.wrapping_sub(1);
    cpu.update_nz16(result);
    cpu.write_back_w(address, result);
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.x).wrapping_add(1);
    cpu.x = result as u16;
    cpu.update_nz8(result);
}

pub fn inx_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_nz16(cpu.x);
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.y).wrapping_add(1);
    cpu.y = result as u16;
    cpu.update_nz8(result);
}

pub fn iny_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_nz16(cpu.y);
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.x).wrapping_sub(1);
    cpu.x = result as u16;
    cpu.update_nz8(result);
}

pub fn dex_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_nz16(cpu.x);
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey_b(cpu: &mut Cpu65C816, _mode: Mode) {
    let result = lo(cpu.y).wrapping_sub(1);
    cpu.y = result as u16;
    cpu.update_nz8(result);
}

pub fn dey_w(cpu: &mut Cpu65C816, _mode: Mode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_nz16(cpu.y);
}

/// Test and set bits. Z reflects the AND before the memory is updated.
/// Function: Z:=A&{adr} {adr}:={adr} or A
/// Flags: Z
pub fn tsb_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    cpu.set_status_flag(StatusFlag::Zero, lo(cpu.c) & operand == 0);
    let result = operand | lo(cpu.c);
    cpu.write_back_b(address, result);
}

pub fn tsb_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 2;
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    cpu.set_status_flag(StatusFlag::Zero, cpu.c & operand == 0);
    let result = operand | cpu.c;
    cpu.write_back_w(address, result);
}

/// Test and reset bits.
/// Function: Z:=A&{adr} {adr}:={adr}&~A
/// Flags: Z
pub fn trb_b(cpu: &mut Cpu65C816, mode: Mode) {
    let (address, operand) = cpu.get_address_and_maybe_operand_b(mode);
    cpu.set_status_flag(StatusFlag::Zero, lo(cpu.c) & operand == 0);
    let result = operand & !lo(cpu.c);
    cpu.write_back_b(address, result);
}

pub fn trb_w(cpu: &mut Cpu65C816, mode: Mode) {
    cpu.cycles += 2;
    let (address, operand) = cpu.get_address_and_maybe_operand_w(mode);
    cpu.set_status_flag(StatusFlag::Zero, cpu.c & operand == 0);
    let result = operand & !cpu.c;
    cpu.write_back_w(address, result);
}
