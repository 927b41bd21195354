use crate::cpu_65c816::{bank_addr, lo, wrap24, Cpu65C816, StatusFlag};
use crate::opcodes::{operand_count, Mode, ADDRESSING_MODE_TABLE, OPCODE_STRING_TABLE};

/// Format the one-line trace for the instruction PC currently points at:
///
/// `BB:PPPP OO oo oo oo MNE {EALEAL,EAHEAH} E=e P=NVMXDIZC C=.. X=.. Y=..
///  DP=.... SP=[....] { .. .. .. .. } DBR=..`
///
/// Everything is computed by peeking; registers, memory and the cycle
/// counter are left untouched. Operand slots that the instruction does not
/// use show as spaces, flag letters are upper case when set, and the
/// register fields follow the current widths.
pub fn format_instruction(cpu: &Cpu65C816) -> String {
    let opcode = cpu.bus.borrow().read_u8(bank_addr(cpu.pbr, cpu.pc));
    let mode = ADDRESSING_MODE_TABLE[opcode as usize];
    let m8 = cpu.is_status_flag_set(StatusFlag::MemoryWidth);
    let x8 = cpu.is_status_flag_set(StatusFlag::IndexWidth);
    let count = operand_count(mode, cpu.e, m8, x8);

    let mut operands = [0u8; 3];
    for (i, slot) in operands.iter_mut().enumerate().take(count) {
        let addr = bank_addr(cpu.pbr, cpu.pc.wrapping_add(1 + i as u16));
        *slot = cpu.bus.borrow().read_u8(addr);
    }

    let mut bytes_field = format!("{:02X}", opcode);
    for (i, operand) in operands.iter().enumerate() {
        if i < count {
            bytes_field.push_str(&format!(" {:02X}", operand));
        } else {
            bytes_field.push_str("   ");
        }
    }

    let ea_field = match peek_effective_address(cpu, mode, &operands[..count]) {
        Some((eal, eah)) => format!("{:06X},{:06X}", eal, eah),
        None => " ".repeat(13),
    };

    let accumulator = if cpu.e || m8 {
        format!("{:02X}", lo(cpu.c))
    } else {
        format!("{:04X}", cpu.c)
    };
    let (x_field, y_field) = if cpu.e || x8 {
        (format!("{:02X}", lo(cpu.x)), format!("{:02X}", lo(cpu.y)))
    } else {
        (format!("{:04X}", cpu.x), format!("{:04X}", cpu.y))
    };

    let mut stack_field = String::new();
    for k in 1..=4u16 {
        if k > 1 {
            stack_field.push(' ');
        }
        let value = cpu.bus.borrow().read_u8(cpu.sp.wrapping_add(k) as u32);
        stack_field.push_str(&format!("{:02X}", value));
    }

    format!(
        "{:02X}:{:04X} {} {} {{{}}} E={} P={} C={} X={} Y={} DP={:04X} SP=[{:04X}] {{ {} }} DBR={:02X}",
        cpu.pbr,
        cpu.pc,
        bytes_field,
        OPCODE_STRING_TABLE[opcode as usize],
        ea_field,
        cpu.e as u8,
        flags_string(cpu.p),
        accumulator,
        x_field,
        y_field,
        cpu.dp,
        cpu.sp,
        stack_field,
        cpu.dbr,
    )
}

/// Each flag as its letter when set, `.` when clear, N down to C.
fn flags_string(p: u8) -> String {
    "NVMXDIZC"
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            if p & (0x80 >> i) != 0 {
                letter
            } else {
                '.'
            }
        })
        .collect()
}

/// A side-effect-free mirror of the addressing-mode evaluator, for the
/// display of data effective addresses. Control-flow and immediate modes
/// have no memory operand to show.
fn peek_effective_address(cpu: &Cpu65C816, mode: Mode, operands: &[u8]) -> Option<(u32, u32)> {
    let op8 = operands.first().copied().unwrap_or(0) as u16;
    let op16 = u16::from_le_bytes([
        operands.first().copied().unwrap_or(0),
        operands.get(1).copied().unwrap_or(0),
    ]);
    let op24 = (operands.get(2).copied().unwrap_or(0) as u32) << 16 | op16 as u32;

    let pair = |base: u32| Some((wrap24(base), wrap24(base + 1)));
    let dp_pair = |offset: u16| {
        Some((
            cpu.direct_page_byte_addr(offset, 0),
            cpu.direct_page_byte_addr(offset, 1),
        ))
    };
    let read_dp_word = |offset: u16| {
        cpu.bus.borrow().read_word(
            cpu.direct_page_byte_addr(offset, 0),
            cpu.direct_page_byte_addr(offset, 1),
        )
    };
    let read_dp_long = |offset: u16| {
        let bus = cpu.bus.borrow();
        let lo = bus.read_u8(cpu.direct_page_byte_addr(offset, 0)) as u32;
        let hi = bus.read_u8(cpu.direct_page_byte_addr(offset, 1)) as u32;
        let bank = bus.read_u8(cpu.direct_page_byte_addr(offset, 2)) as u32;
        (bank << 16) | (hi << 8) | lo
    };

    match mode {
        Mode::Absolute => pair(bank_addr(cpu.dbr, op16)),
        Mode::AbsoluteIndexedX => pair(bank_addr(cpu.dbr, op16) + cpu.x as u32),
        Mode::AbsoluteIndexedY => pair(bank_addr(cpu.dbr, op16) + cpu.y as u32),
        Mode::AbsoluteLong => pair(op24),
        Mode::AbsoluteLongX => pair(op24 + cpu.x as u32),
        Mode::DirectPage => dp_pair(op8),
        Mode::DirectPageX => dp_pair(op8.wrapping_add(cpu.x)),
        Mode::DirectPageY => dp_pair(op8.wrapping_add(cpu.y)),
        Mode::DirectPageIndirect => pair(bank_addr(cpu.dbr, read_dp_word(op8))),
        Mode::DirectPageIndirectX => {
            pair(bank_addr(cpu.dbr, read_dp_word(op8.wrapping_add(cpu.x))))
        }
        Mode::DirectPageIndirectY => {
            pair(bank_addr(cpu.dbr, read_dp_word(op8)) + cpu.y as u32)
        }
        Mode::DirectPageIndirectLong => pair(read_dp_long(op8)),
        Mode::DirectPageIndirectLongY => pair(read_dp_long(op8) + cpu.y as u32),
        Mode::StackRelative => {
            let base = cpu.sp.wrapping_add(op8);
            Some((base as u32, base.wrapping_add(1) as u32))
        }
        Mode::StackRelativeIndirectY => {
            let base = cpu.sp.wrapping_add(op8);
            let ptr = cpu
                .bus
                .borrow()
                .read_word(base as u32, base.wrapping_add(1) as u32);
            pair(bank_addr(cpu.dbr, ptr) + cpu.y as u32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cpu_65c816::test_helpers::make_cpu;
    use insta::assert_snapshot;

    #[test]
    fn immediate_load_line() {
        let cpu = make_cpu(&[0xa9, 0x42]);
        assert_snapshot!(format_instruction(&cpu), @"00:2000 A9 42       LDA {             } E=1 P=..MX.I.. C=00 X=00 Y=00 DP=0000 SP=[0100] { 00 00 00 00 } DBR=00");
    }

    #[test]
    fn absolute_mode_shows_the_effective_pair() {
        let cpu = make_cpu(&[0xad, 0x34, 0x12]);
        assert_snapshot!(format_instruction(&cpu), @"00:2000 AD 34 12    LDA {001234,001235} E=1 P=..MX.I.. C=00 X=00 Y=00 DP=0000 SP=[0100] { 00 00 00 00 } DBR=00");
    }

    #[test]
    fn register_widths_follow_the_mode() {
        let mut cpu = make_cpu(&[0x18, 0xfb, 0xc2, 0x30, 0xa9, 0x34, 0x12]);
        for _ in 0..3 {
            cpu.step();
        }
        assert_snapshot!(format_instruction(&cpu), @"00:2004 A9 34 12    LDA {             } E=0 P=.....I.C C=0000 X=0000 Y=0000 DP=0000 SP=[0100] { 00 00 00 00 } DBR=00");
    }

    #[test]
    fn formatting_leaves_the_machine_untouched() {
        let cpu = make_cpu(&[0xa5, 0x10]);
        let pc = cpu.pc;
        let cycles = cpu.total_cycles;
        let first = format_instruction(&cpu);
        let second = format_instruction(&cpu);
        assert_eq!(first, second);
        assert_eq!(cpu.pc, pc);
        assert_eq!(cpu.total_cycles, cycles);
    }
}
