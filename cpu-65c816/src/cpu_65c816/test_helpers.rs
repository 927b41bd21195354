#![macro_use]

use crate::bus::Bus;
use crate::cpu_65c816::*;

pub const P: u8 = RESET_STATUS_FLAG;
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const X: u8 = StatusFlag::IndexWidth as u8;
pub const M: u8 = StatusFlag::MemoryWidth as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// Where test programs are loaded in bank 0.
pub const PROGRAM_BASE: u32 = 0x002000;

/// A WDM #$FF pair: the conventional test-program halt.
pub const HALT: [u8; 2] = [0x42, 0xff];

/// Build a machine with the conventional test map: 256 KiB of RAM (banks
/// $00-$03), the program at $00:2000, and the reset vector pointing at it.
pub fn make_cpu(program: &[u8]) -> Cpu65C816 {
    let bus = Bus::new_shared_bus();
    {
        let mut bus = bus.borrow_mut();
        bus.add_ram(0x000000, 0x40000);
        for (index, value) in program.iter().enumerate() {
            bus.load_u8(PROGRAM_BASE + index as u32, *value);
        }
        bus.load_u8(0x00fffc, PROGRAM_BASE as u8);
        bus.load_u8(0x00fffd, (PROGRAM_BASE >> 8) as u8);
    }
    let mut cpu = Cpu65C816::new(bus);
    cpu.reset();
    cpu
}

/// Run a program to its WDM halt. The halt is appended automatically.
pub fn run_program(program: &[u8]) -> Cpu65C816 {
    let mut bytes = program.to_vec();
    bytes.extend_from_slice(&HALT);
    let mut cpu = make_cpu(&bytes);
    run_with_invariants(&mut cpu);
    cpu
}

/// Step until halted, checking the universal invariants after every step.
pub fn run_with_invariants(cpu: &mut Cpu65C816) {
    let mut previous_total = cpu.total_cycles;
    while !cpu.stopped {
        cpu.step();
        assert_invariants(cpu);
        assert!(cpu.total_cycles >= previous_total, "cycle counter went backwards");
        previous_total = cpu.total_cycles;
    }
}

/// The invariants of §"hold after every step": emulation mode forces the
/// widths and the stack page, and 8-bit index registers have clear high
/// bytes.
pub fn assert_invariants(cpu: &Cpu65C816) {
    if cpu.e {
        assert!(cpu.is_status_flag_set(StatusFlag::MemoryWidth), "E=1 requires M=1");
        assert!(cpu.is_status_flag_set(StatusFlag::IndexWidth), "E=1 requires X=1");
        assert_eq!(cpu.sp & 0xff00, 0x0100, "E=1 requires SP in page $01");
    }
    if cpu.is_status_flag_set(StatusFlag::IndexWidth) {
        assert_eq!(cpu.x & 0xff00, 0, "X=1 requires X.h = 0");
        assert_eq!(cpu.y & 0xff00, 0, "X=1 requires Y.h = 0");
    }
}

pub fn assert_accumulator(program: &[u8], value: u16, status: u8) {
    let cpu = run_program(program);
    let accumulator = if cpu.e || cpu.is_status_flag_set(StatusFlag::MemoryWidth) {
        lo(cpu.c) as u16
    } else {
        cpu.c
    };
    if accumulator != value {
        panic!(
            "\nExpected the accumulator to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            value, value, accumulator, accumulator
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_x(program: &[u8], value: u16, status: u8) {
    let cpu = run_program(program);
    if cpu.x != value {
        panic!(
            "\nExpected register X to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            value, value, cpu.x, cpu.x
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_y(program: &[u8], value: u16, status: u8) {
    let cpu = run_program(program);
    if cpu.y != value {
        panic!(
            "\nExpected register Y to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            value, value, cpu.y, cpu.y
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_status(cpu: &Cpu65C816, value: u8) {
    if cpu.p == value {
        return;
    }
    let names = [
        ("Negative", N),
        ("Overflow", V),
        ("MemoryWidth", M),
        ("IndexWidth", X),
        ("Decimal", D),
        ("InterruptDisable", I),
        ("Zero", Z),
        ("Carry", C),
    ];
    let mut result = String::new();
    for (name, mask) in names {
        let expected = value & mask == mask;
        let actual = cpu.p & mask == mask;
        if expected != actual {
            result.push_str(&format!(
                "Expected StatusFlag::{} to be {} but received {}\n",
                name, expected, actual
            ));
        }
    }
    panic!(
        "\nExpected cpu status 0b{:08b} to match 0b{:08b}\n{}",
        cpu.p, value, result
    );
}

#[macro_export]
macro_rules! register_c {
    ($name:ident, $c:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_accumulator(&$program, $c, $p);
        }
    };
}

#[macro_export]
macro_rules! register_x {
    ($name:ident, $x:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_x(&$program, $x, $p);
        }
    };
}

#[macro_export]
macro_rules! register_y {
    ($name:ident, $y:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_y(&$program, $y, $p);
        }
    };
}

#[macro_export]
macro_rules! status {
    ($name:ident, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program(&$program);
            assert_status(&cpu, $p);
        }
    };
}
