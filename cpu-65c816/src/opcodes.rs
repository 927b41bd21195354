use crate::cpu_65c816::opcodes_alu::*;
use crate::cpu_65c816::opcodes_jump::*;
use crate::cpu_65c816::opcodes_move::*;
use crate::cpu_65c816::opcodes_stack::*;
use crate::cpu_65c816::opcodes_system::*;
use crate::cpu_65c816::Cpu65C816;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Implied,                 // impl
    Accumulator,             // acc
    ImmediateByte,           // immb
    ImmediateWord,           // immw
    ImmediateM,              // immm - width follows the M flag
    ImmediateX,              // immx - width follows the X flag
    Relative,                // rela
    RelativeLong,            // lrel
    Absolute,                // absl - data bank
    AbsoluteIndexedX,        // absx
    AbsoluteIndexedY,        // absy
    AbsoluteProgram,         // absp - program bank, JMP/JSR only
    AbsoluteIndirect,        // absi - (abs)
    AbsoluteIndexedIndirect, // abxi - (abs,X)
    AbsoluteIndirectLong,    // abil - [abs]
    AbsoluteLong,            // alng
    AbsoluteLongX,           // alnx
    DirectPage,              // dpag
    DirectPageX,             // dpgx
    DirectPageY,             // dpgy
    DirectPageIndirect,      // dpgi - (dp)
    DirectPageIndirectX,     // dpix - (dp,X)
    DirectPageIndirectY,     // dpiy - (dp),Y
    DirectPageIndirectLong,  // dpil - [dp]
    DirectPageIndirectLongY, // dily - [dp],Y
    StackRelative,           // srel - off,S
    StackRelativeIndirectY,  // sriy - (off,S),Y
    BlockMove,               // MVN/MVP bank pair
}

/// How many operand bytes follow the opcode, given the current widths.
pub fn operand_count(mode: Mode, e: bool, m8: bool, x8: bool) -> usize {
    match mode {
        Mode::Implied | Mode::Accumulator => 0,
        Mode::ImmediateByte
        | Mode::Relative
        | Mode::DirectPage
        | Mode::DirectPageX
        | Mode::DirectPageY
        | Mode::DirectPageIndirect
        | Mode::DirectPageIndirectX
        | Mode::DirectPageIndirectY
        | Mode::DirectPageIndirectLong
        | Mode::DirectPageIndirectLongY
        | Mode::StackRelative
        | Mode::StackRelativeIndirectY => 1,
        Mode::ImmediateWord
        | Mode::RelativeLong
        | Mode::Absolute
        | Mode::AbsoluteIndexedX
        | Mode::AbsoluteIndexedY
        | Mode::AbsoluteProgram
        | Mode::AbsoluteIndirect
        | Mode::AbsoluteIndexedIndirect
        | Mode::AbsoluteIndirectLong
        | Mode::BlockMove => 2,
        Mode::AbsoluteLong | Mode::AbsoluteLongX => 3,
        Mode::ImmediateM => {
            if e || m8 {
                1
            } else {
                2
            }
        }
        Mode::ImmediateX => {
            if e || x8 {
                1
            } else {
                2
            }
        }
    }
}

pub type OperationFn = fn(&mut Cpu65C816, Mode);

// Base cycle counts for the 8-bit register widths. The 16-bit kernels add
// their own extra cycles, the addressing evaluator adds the non-zero-DP.l
// penalty, and the branch kernels add the taken/page penalties.
#[rustfmt::skip]
pub const CYCLES_TABLE: [u8; 256] = [
    7, 6, 7, 4, 5, 3, 5, 6, 3, 2, 2, 4, 6, 4, 6, 5, // 0x00
    2, 5, 5, 7, 5, 4, 6, 6, 2, 4, 2, 2, 6, 4, 7, 5, // 0x10
    6, 6, 8, 4, 3, 3, 5, 6, 4, 2, 2, 5, 4, 4, 6, 5, // 0x20
    2, 5, 5, 7, 4, 4, 6, 6, 2, 4, 2, 2, 4, 4, 7, 5, // 0x30
    6, 6, 3, 4, 7, 3, 5, 6, 3, 2, 2, 3, 3, 4, 6, 5, // 0x40
    2, 5, 5, 7, 7, 4, 6, 6, 2, 4, 3, 2, 4, 4, 7, 5, // 0x50
    6, 6, 6, 4, 3, 3, 5, 6, 4, 2, 2, 6, 5, 4, 6, 5, // 0x60
    2, 5, 5, 7, 4, 4, 6, 6, 2, 4, 4, 2, 6, 4, 7, 5, // 0x70
    2, 6, 4, 4, 3, 3, 3, 6, 2, 2, 2, 3, 4, 4, 4, 5, // 0x80
    2, 6, 5, 7, 4, 4, 4, 6, 2, 5, 2, 2, 4, 5, 5, 5, // 0x90
    2, 6, 2, 4, 3, 3, 3, 6, 2, 2, 2, 4, 4, 4, 4, 5, // 0xa0
    2, 5, 5, 7, 4, 4, 4, 6, 2, 4, 2, 2, 4, 4, 4, 5, // 0xb0
    2, 6, 3, 4, 3, 3, 5, 6, 2, 2, 2, 3, 4, 4, 6, 5, // 0xc0
    2, 5, 5, 7, 6, 4, 6, 6, 2, 4, 3, 3, 6, 4, 7, 5, // 0xd0
    2, 6, 3, 4, 3, 3, 5, 6, 2, 2, 2, 3, 4, 4, 6, 5, // 0xe0
    2, 5, 5, 7, 5, 4, 6, 6, 2, 4, 4, 2, 8, 4, 7, 5, // 0xf0
];

#[rustfmt::skip]
pub const OPCODE_STRING_TABLE: [&str; 256] = [
    "BRK", "ORA", "COP", "ORA", "TSB", "ORA", "ASL", "ORA", // 0x00
    "PHP", "ORA", "ASL", "PHD", "TSB", "ORA", "ASL", "ORA",
    "BPL", "ORA", "ORA", "ORA", "TRB", "ORA", "ASL", "ORA", // 0x10
    "CLC", "ORA", "INC", "TCS", "TRB", "ORA", "ASL", "ORA",
    "JSR", "AND", "JSL", "AND", "BIT", "AND", "ROL", "AND", // 0x20
    "PLP", "AND", "ROL", "PLD", "BIT", "AND", "ROL", "AND",
    "BMI", "AND", "AND", "AND", "BIT", "AND", "ROL", "AND", // 0x30
    "SEC", "AND", "DEC", "TSC", "BIT", "AND", "ROL", "AND",
    "RTI", "EOR", "WDM", "EOR", "MVP", "EOR", "LSR", "EOR", // 0x40
    "PHA", "EOR", "LSR", "PHK", "JMP", "EOR", "LSR", "EOR",
    "BVC", "EOR", "EOR", "EOR", "MVN", "EOR", "LSR", "EOR", // 0x50
    "CLI", "EOR", "PHY", "TCD", "JML", "EOR", "LSR", "EOR",
    "RTS", "ADC", "PER", "ADC", "STZ", "ADC", "ROR", "ADC", // 0x60
    "PLA", "ADC", "ROR", "RTL", "JMP", "ADC", "ROR", "ADC",
    "BVS", "ADC", "ADC", "ADC", "STZ", "ADC", "ROR", "ADC", // 0x70
    "SEI", "ADC", "PLY", "TDC", "JMP", "ADC", "ROR", "ADC",
    "BRA", "STA", "BRL", "STA", "STY", "STA", "STX", "STA", // 0x80
    "DEY", "BIT", "TXA", "PHB", "STY", "STA", "STX", "STA",
    "BCC", "STA", "STA", "STA", "STY", "STA", "STX", "STA", // 0x90
    "TYA", "STA", "TXS", "TXY", "STZ", "STA", "STZ", "STA",
    "LDY", "LDA", "LDX", "LDA", "LDY", "LDA", "LDX", "LDA", // 0xa0
    "TAY", "LDA", "TAX", "PLB", "LDY", "LDA", "LDX", "LDA",
    "BCS", "LDA", "LDA", "LDA", "LDY", "LDA", "LDX", "LDA", // 0xb0
    "CLV", "LDA", "TSX", "TYX", "LDY", "LDA", "LDX", "LDA",
    "CPY", "CMP", "REP", "CMP", "CPY", "CMP", "DEC", "CMP", // 0xc0
    "INY", "CMP", "DEX", "WAI", "CPY", "CMP", "DEC", "CMP",
    "BNE", "CMP", "CMP", "CMP", "PEI", "CMP", "DEC", "CMP", // 0xd0
    "CLD", "CMP", "PHX", "STP", "JML", "CMP", "DEC", "CMP",
    "CPX", "SBC", "SEP", "SBC", "CPX", "SBC", "INC", "SBC", // 0xe0
    "INX", "SBC", "NOP", "XBA", "CPX", "SBC", "INC", "SBC",
    "BEQ", "SBC", "SBC", "SBC", "PEA", "SBC", "INC", "SBC", // 0xf0
    "SED", "SBC", "PLX", "XCE", "JSR", "SBC", "INC", "SBC",
];

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    // 0x00
    Mode::ImmediateByte,           // BRK signature
    Mode::DirectPageIndirectX,     // ORA (dp,X)
    Mode::ImmediateByte,           // COP signature
    Mode::StackRelative,           // ORA off,S
    Mode::DirectPage,              // TSB dp
    Mode::DirectPage,              // ORA dp
    Mode::DirectPage,              // ASL dp
    Mode::DirectPageIndirectLong,  // ORA [dp]
    Mode::Implied,                 // PHP
    Mode::ImmediateM,              // ORA #
    Mode::Accumulator,             // ASL A
    Mode::Implied,                 // PHD
    Mode::Absolute,                // TSB abs
    Mode::Absolute,                // ORA abs
    Mode::Absolute,                // ASL abs
    Mode::AbsoluteLong,            // ORA long
    // 0x10
    Mode::Relative,                // BPL
    Mode::DirectPageIndirectY,     // ORA (dp),Y
    Mode::DirectPageIndirect,      // ORA (dp)
    Mode::StackRelativeIndirectY,  // ORA (off,S),Y
    Mode::DirectPage,              // TRB dp
    Mode::DirectPageX,             // ORA dp,X
    Mode::DirectPageX,             // ASL dp,X
    Mode::DirectPageIndirectLongY, // ORA [dp],Y
    Mode::Implied,                 // CLC
    Mode::AbsoluteIndexedY,        // ORA abs,Y
    Mode::Accumulator,             // INC A
    Mode::Implied,                 // TCS
    Mode::Absolute,                // TRB abs
    Mode::AbsoluteIndexedX,        // ORA abs,X
    Mode::AbsoluteIndexedX,        // ASL abs,X
    Mode::AbsoluteLongX,           // ORA long,X
    // 0x20
    Mode::AbsoluteProgram,         // JSR abs
    Mode::DirectPageIndirectX,     // AND (dp,X)
    Mode::AbsoluteLong,            // JSL long
    Mode::StackRelative,           // AND off,S
    Mode::DirectPage,              // BIT dp
    Mode::DirectPage,              // AND dp
    Mode::DirectPage,              // ROL dp
    Mode::DirectPageIndirectLong,  // AND [dp]
    Mode::Implied,                 // PLP
    Mode::ImmediateM,              // AND #
    Mode::Accumulator,             // ROL A
    Mode::Implied,                 // PLD
    Mode::Absolute,                // BIT abs
    Mode::Absolute,                // AND abs
    Mode::Absolute,                // ROL abs
    Mode::AbsoluteLong,            // AND long
    // 0x30
    Mode::Relative,                // BMI
    Mode::DirectPageIndirectY,     // AND (dp),Y
    Mode::DirectPageIndirect,      // AND (dp)
    Mode::StackRelativeIndirectY,  // AND (off,S),Y
    Mode::DirectPageX,             // BIT dp,X
    Mode::DirectPageX,             // AND dp,X
    Mode::DirectPageX,             // ROL dp,X
    Mode::DirectPageIndirectLongY, // AND [dp],Y
    Mode::Implied,                 // SEC
    Mode::AbsoluteIndexedY,        // AND abs,Y
    Mode::Accumulator,             // DEC A
    Mode::Implied,                 // TSC
    Mode::AbsoluteIndexedX,        // BIT abs,X
    Mode::AbsoluteIndexedX,        // AND abs,X
    Mode::AbsoluteIndexedX,        // ROL abs,X
    Mode::AbsoluteLongX,           // AND long,X
    // 0x40
    Mode::Implied,                 // RTI
    Mode::DirectPageIndirectX,     // EOR (dp,X)
    Mode::ImmediateByte,           // WDM signature
    Mode::StackRelative,           // EOR off,S
    Mode::BlockMove,               // MVP
    Mode::DirectPage,              // EOR dp
    Mode::DirectPage,              // LSR dp
    Mode::DirectPageIndirectLong,  // EOR [dp]
    Mode::Implied,                 // PHA
    Mode::ImmediateM,              // EOR #
    Mode::Accumulator,             // LSR A
    Mode::Implied,                 // PHK
    Mode::AbsoluteProgram,         // JMP abs
    Mode::Absolute,                // EOR abs
    Mode::Absolute,                // LSR abs
    Mode::AbsoluteLong,            // EOR long
    // 0x50
    Mode::Relative,                // BVC
    Mode::DirectPageIndirectY,     // EOR (dp),Y
    Mode::DirectPageIndirect,      // EOR (dp)
    Mode::StackRelativeIndirectY,  // EOR (off,S),Y
    Mode::BlockMove,               // MVN
    Mode::DirectPageX,             // EOR dp,X
    Mode::DirectPageX,             // LSR dp,X
    Mode::DirectPageIndirectLongY, // EOR [dp],Y
    Mode::Implied,                 // CLI
    Mode::AbsoluteIndexedY,        // EOR abs,Y
    Mode::Implied,                 // PHY
    Mode::Implied,                 // TCD
    Mode::AbsoluteLong,            // JML long
    Mode::AbsoluteIndexedX,        // EOR abs,X
    Mode::AbsoluteIndexedX,        // LSR abs,X
    Mode::AbsoluteLongX,           // EOR long,X
    // 0x60
    Mode::Implied,                 // RTS
    Mode::DirectPageIndirectX,     // ADC (dp,X)
    Mode::RelativeLong,            // PER
    Mode::StackRelative,           // ADC off,S
    Mode::DirectPage,              // STZ dp
    Mode::DirectPage,              // ADC dp
    Mode::DirectPage,              // ROR dp
    Mode::DirectPageIndirectLong,  // ADC [dp]
    Mode::Implied,                 // PLA
    Mode::ImmediateM,              // ADC #
    Mode::Accumulator,             // ROR A
    Mode::Implied,                 // RTL
    Mode::AbsoluteIndirect,        // JMP (abs)
    Mode::Absolute,                // ADC abs
    Mode::Absolute,                // ROR abs
    Mode::AbsoluteLong,            // ADC long
    // 0x70
    Mode::Relative,                // BVS
    Mode::DirectPageIndirectY,     // ADC (dp),Y
    Mode::DirectPageIndirect,      // ADC (dp)
    Mode::StackRelativeIndirectY,  // ADC (off,S),Y
    Mode::DirectPageX,             // STZ dp,X
    Mode::DirectPageX,             // ADC dp,X
    Mode::DirectPageX,             // ROR dp,X
    Mode::DirectPageIndirectLongY, // ADC [dp],Y
    Mode::Implied,                 // SEI
    Mode::AbsoluteIndexedY,        // ADC abs,Y
    Mode::Implied,                 // PLY
    Mode::Implied,                 // TDC
    Mode::AbsoluteIndexedIndirect, // JMP (abs,X)
    Mode::AbsoluteIndexedX,        // ADC abs,X
    Mode::AbsoluteIndexedX,        // ROR abs,X
    Mode::AbsoluteLongX,           // ADC long,X
    // 0x80
    Mode::Relative,                // BRA
    Mode::DirectPageIndirectX,     // STA (dp,X)
    Mode::RelativeLong,            // BRL
    Mode::StackRelative,           // STA off,S
    Mode::DirectPage,              // STY dp
    Mode::DirectPage,              // STA dp
    Mode::DirectPage,              // STX dp
    Mode::DirectPageIndirectLong,  // STA [dp]
    Mode::Implied,                 // DEY
    Mode::ImmediateM,              // BIT #
    Mode::Implied,                 // TXA
    Mode::Implied,                 // PHB
    Mode::Absolute,                // STY abs
    Mode::Absolute,                // STA abs
    Mode::Absolute,                // STX abs
    Mode::AbsoluteLong,            // STA long
    // 0x90
    Mode::Relative,                // BCC
    Mode::DirectPageIndirectY,     // STA (dp),Y
    Mode::DirectPageIndirect,      // STA (dp)
    Mode::StackRelativeIndirectY,  // STA (off,S),Y
    Mode::DirectPageX,             // STY dp,X
    Mode::DirectPageX,             // STA dp,X
    Mode::DirectPageY,             // STX dp,Y
    Mode::DirectPageIndirectLongY, // STA [dp],Y
    Mode::Implied,                 // TYA
    Mode::AbsoluteIndexedY,        // STA abs,Y
    Mode::Implied,                 // TXS
    Mode::Implied,                 // TXY
    Mode::Absolute,                // STZ abs
    Mode::AbsoluteIndexedX,        // STA abs,X
    Mode::AbsoluteIndexedX,        // STZ abs,X
    Mode::AbsoluteLongX,           // STA long,X
    // 0xa0
    Mode::ImmediateX,              // LDY #
    Mode::DirectPageIndirectX,     // LDA (dp,X)
    Mode::ImmediateX,              // LDX #
    Mode::StackRelative,           // LDA off,S
    Mode::DirectPage,              // LDY dp
    Mode::DirectPage,              // LDA dp
    Mode::DirectPage,              // LDX dp
    Mode::DirectPageIndirectLong,  // LDA [dp]
    Mode::Implied,                 // TAY
    Mode::ImmediateM,              // LDA #
    Mode::Implied,                 // TAX
    Mode::Implied,                 // PLB
    Mode::Absolute,                // LDY abs
    Mode::Absolute,                // LDA abs
    Mode::Absolute,                // LDX abs
    Mode::AbsoluteLong,            // LDA long
    // 0xb0
    Mode::Relative,                // BCS
    Mode::DirectPageIndirectY,     // LDA (dp),Y
    Mode::DirectPageIndirect,      // LDA (dp)
    Mode::StackRelativeIndirectY,  // LDA (off,S),Y
    Mode::DirectPageX,             // LDY dp,X
    Mode::DirectPageX,             // LDA dp,X
    Mode::DirectPageY,             // LDX dp,Y
    Mode::DirectPageIndirectLongY, // LDA [dp],Y
    Mode::Implied,                 // CLV
    Mode::AbsoluteIndexedY,        // LDA abs,Y
    Mode::Implied,                 // TSX
    Mode::Implied,                 // TYX
    Mode::AbsoluteIndexedX,        // LDY abs,X
    Mode::AbsoluteIndexedX,        // LDA abs,X
    Mode::AbsoluteIndexedY,        // LDX abs,Y
    Mode::AbsoluteLongX,           // LDA long,X
    // 0xc0
    Mode::ImmediateX,              // CPY #
    Mode::DirectPageIndirectX,     // CMP (dp,X)
    Mode::ImmediateByte,           // REP #
    Mode::StackRelative,           // CMP off,S
    Mode::DirectPage,              // CPY dp
    Mode::DirectPage,              // CMP dp
    Mode::DirectPage,              // DEC dp
    Mode::DirectPageIndirectLong,  // CMP [dp]
    Mode::Implied,                 // INY
    Mode::ImmediateM,              // CMP #
    Mode::Implied,                 // DEX
    Mode::Implied,                 // WAI
    Mode::Absolute,                // CPY abs
    Mode::Absolute,                // CMP abs
    Mode::Absolute,                // DEC abs
    Mode::AbsoluteLong,            // CMP long
    // 0xd0
    Mode::Relative,                // BNE
    Mode::DirectPageIndirectY,     // CMP (dp),Y
    Mode::DirectPageIndirect,      // CMP (dp)
    Mode::StackRelativeIndirectY,  // CMP (off,S),Y
    Mode::DirectPage,              // PEI dp
    Mode::DirectPageX,             // CMP dp,X
    Mode::DirectPageX,             // DEC dp,X
    Mode::DirectPageIndirectLongY, // CMP [dp],Y
    Mode::Implied,                 // CLD
    Mode::AbsoluteIndexedY,        // CMP abs,Y
    Mode::Implied,                 // PHX
    Mode::Implied,                 // STP
    Mode::AbsoluteIndirectLong,    // JML [abs]
    Mode::AbsoluteIndexedX,        // CMP abs,X
    Mode::AbsoluteIndexedX,        // DEC abs,X
    Mode::AbsoluteLongX,           // CMP long,X
    // 0xe0
    Mode::ImmediateX,              // CPX #
    Mode::DirectPageIndirectX,     // SBC (dp,X)
    Mode::ImmediateByte,           // SEP #
    Mode::StackRelative,           // SBC off,S
    Mode::DirectPage,              // CPX dp
    Mode::DirectPage,              // SBC dp
    Mode::DirectPage,              // INC dp
    Mode::DirectPageIndirectLong,  // SBC [dp]
    Mode::Implied,                 // INX
    Mode::ImmediateM,              // SBC #
    Mode::Implied,                 // NOP
    Mode::Implied,                 // XBA
    Mode::Absolute,                // CPX abs
    Mode::Absolute,                // SBC abs
    Mode::Absolute,                // INC abs
    Mode::AbsoluteLong,            // SBC long
    // 0xf0
    Mode::Relative,                // BEQ
    Mode::DirectPageIndirectY,     // SBC (dp),Y
    Mode::DirectPageIndirect,      // SBC (dp)
    Mode::StackRelativeIndirectY,  // SBC (off,S),Y
    Mode::ImmediateWord,           // PEA
    Mode::DirectPageX,             // SBC dp,X
    Mode::DirectPageX,             // INC dp,X
    Mode::DirectPageIndirectLongY, // SBC [dp],Y
    Mode::Implied,                 // SED
    Mode::AbsoluteIndexedY,        // SBC abs,Y
    Mode::Implied,                 // PLX
    Mode::Implied,                 // XCE
    Mode::AbsoluteIndexedIndirect, // JSR (abs,X)
    Mode::AbsoluteIndexedX,        // SBC abs,X
    Mode::AbsoluteIndexedX,        // INC abs,X
    Mode::AbsoluteLongX,           // SBC long,X
];

// Pick the 8- or 16-bit kernel for the accumulator width of a table.
macro_rules! sel_m {
    (m8, $b:expr, $w:expr) => {
        $b
    };
    (m16, $b:expr, $w:expr) => {
        $w
    };
}

// Pick the 8- or 16-bit kernel for the index width of a table.
macro_rules! sel_x {
    (x8, $b:expr, $w:expr) => {
        $b
    };
    (x16, $b:expr, $w:expr) => {
        $w
    };
}

/// Build one 256-entry executor table for a fixed (M, X) width pair. The
/// width-sensitive opcodes bind their concrete kernel here, statically, so
/// the kernels themselves never test the mode bits.
macro_rules! dispatch_table {
    ($m:tt, $x:tt) => {
        [
            /* 0x00 */ brk,
            /* 0x01 */ sel_m!($m, ora_b, ora_w),
            /* 0x02 */ cop,
            /* 0x03 */ sel_m!($m, ora_b, ora_w),
            /* 0x04 */ sel_m!($m, tsb_b, tsb_w),
            /* 0x05 */ sel_m!($m, ora_b, ora_w),
            /* 0x06 */ sel_m!($m, asl_b, asl_w),
            /* 0x07 */ sel_m!($m, ora_b, ora_w),
            /* 0x08 */ php,
            /* 0x09 */ sel_m!($m, ora_b, ora_w),
            /* 0x0a */ sel_m!($m, asl_b, asl_w),
            /* 0x0b */ phd,
            /* 0x0c */ sel_m!($m, tsb_b, tsb_w),
            /* 0x0d */ sel_m!($m, ora_b, ora_w),
            /* 0x0e */ sel_m!($m, asl_b, asl_w),
            /* 0x0f */ sel_m!($m, ora_b, ora_w),
            /* 0x10 */ bpl,
            /* 0x11 */ sel_m!($m, ora_b, ora_w),
            /* 0x12 */ sel_m!($m, ora_b, ora_w),
            /* 0x13 */ sel_m!($m, ora_b, ora_w),
            /* 0x14 */ sel_m!($m, trb_b, trb_w),
            /* 0x15 */ sel_m!($m, ora_b, ora_w),
            /* 0x16 */ sel_m!($m, asl_b, asl_w),
            /* 0x17 */ sel_m!($m, ora_b, ora_w),
            /* 0x18 */ clc,
            /* 0x19 */ sel_m!($m, ora_b, ora_w),
            /* 0x1a */ sel_m!($m, inc_b, inc_w),
            /* 0x1b */ tcs,
            /* 0x1c */ sel_m!($m, trb_b, trb_w),
            /* 0x1d */ sel_m!($m, ora_b, ora_w),
            /* 0x1e */ sel_m!($m, asl_b, asl_w),
            /* 0x1f */ sel_m!($m, ora_b, ora_w),
            /* 0x20 */ jsr,
            /* 0x21 */ sel_m!($m, and_b, and_w),
            /* 0x22 */ jsl,
            /* 0x23 */ sel_m!($m, and_b, and_w),
            /* 0x24 */ sel_m!($m, bit_b, bit_w),
            /* 0x25 */ sel_m!($m, and_b, and_w),
            /* 0x26 */ sel_m!($m, rol_b, rol_w),
            /* 0x27 */ sel_m!($m, and_b, and_w),
            /* 0x28 */ plp,
            /* 0x29 */ sel_m!($m, and_b, and_w),
            /* 0x2a */ sel_m!($m, rol_b, rol_w),
            /* 0x2b */ pld,
            /* 0x2c */ sel_m!($m, bit_b, bit_w),
            /* 0x2d */ sel_m!($m, and_b, and_w),
            /* 0x2e */ sel_m!($m, rol_b, rol_w),
            /* 0x2f */ sel_m!($m, and_b, and_w),
            /* 0x30 */ bmi,
            /* 0x31 */ sel_m!($m, and_b, and_w),
            /* 0x32 */ sel_m!($m, and_b, and_w),
            /* 0x33 */ sel_m!($m, and_b, and_w),
            /* 0x34 */ sel_m!($m, bit_b, bit_w),
            /* 0x35 */ sel_m!($m, and_b, and_w),
            /* 0x36 */ sel_m!($m, rol_b, rol_w),
            /* 0x37 */ sel_m!($m, and_b, and_w),
            /* 0x38 */ sec,
            /* 0x39 */ sel_m!($m, and_b, and_w),
            /* 0x3a */ sel_m!($m, dec_b, dec_w),
            /* 0x3b */ tsc,
            /* 0x3c */ sel_m!($m, bit_b, bit_w),
            /* 0x3d */ sel_m!($m, and_b, and_w),
            /* 0x3e */ sel_m!($m, rol_b, rol_w),
            /* 0x3f */ sel_m!($m, and_b, and_w),
            /* 0x40 */ rti,
            /* 0x41 */ sel_m!($m, eor_b, eor_w),
            /* 0x42 */ wdm,
            /* 0x43 */ sel_m!($m, eor_b, eor_w),
            /* 0x44 */ mvp,
            /* 0x45 */ sel_m!($m, eor_b, eor_w),
            /* 0x46 */ sel_m!($m, lsr_b, lsr_w),
            /* 0x47 */ sel_m!($m, eor_b, eor_w),
            /* 0x48 */ sel_m!($m, pha_b, pha_w),
            /* 0x49 */ sel_m!($m, eor_b, eor_w),
            /* 0x4a */ sel_m!($m, lsr_b, lsr_w),
            /* 0x4b */ phk,
            /* 0x4c */ jmp,
            /* 0x4d */ sel_m!($m, eor_b, eor_w),
            /* 0x4e */ sel_m!($m, lsr_b, lsr_w),
            /* 0x4f */ sel_m!($m, eor_b, eor_w),
            /* 0x50 */ bvc,
            /* 0x51 */ sel_m!($m, eor_b, eor_w),
            /* 0x52 */ sel_m!($m, eor_b, eor_w),
            /* 0x53 */ sel_m!($m, eor_b, eor_w),
            /* 0x54 */ mvn,
            /* 0x55 */ sel_m!($m, eor_b, eor_w),
            /* 0x56 */ sel_m!($m, lsr_b, lsr_w),
            /* 0x57 */ sel_m!($m, eor_b, eor_w),
            /* 0x58 */ cli,
            /* 0x59 */ sel_m!($m, eor_b, eor_w),
            /* 0x5a */ sel_x!($x, phy_b, phy_w),
            /* 0x5b */ tcd,
            /* 0x5c */ jml,
            /* 0x5d */ sel_m!($m, eor_b, eor_w),
            /* 0x5e */ sel_m!($m, lsr_b, lsr_w),
            /* 0x5f */ sel_m!($m, eor_b, eor_w),
            /* 0x60 */ rts,
            /* 0x61 */ sel_m!($m, adc_b, adc_w),
            /* 0x62 */ per,
            /* 0x63 */ sel_m!($m, adc_b, adc_w),
            /* 0x64 */ sel_m!($m, stz_b, stz_w),
            /* 0x65 */ sel_m!($m, adc_b, adc_w),
            /* 0x66 */ sel_m!($m, ror_b, ror_w),
            /* 0x67 */ sel_m!($m, adc_b, adc_w),
            /* 0x68 */ sel_m!($m, pla_b, pla_w),
            /* 0x69 */ sel_m!($m, adc_b, adc_w),
            /* 0x6a */ sel_m!($m, ror_b, ror_w),
            /* 0x6b */ rtl,
            /* 0x6c */ jmp,
            /* 0x6d */ sel_m!($m, adc_b, adc_w),
            /* 0x6e */ sel_m!($m, ror_b, ror_w),
            /* 0x6f */ sel_m!($m, adc_b, adc_w),
            /* 0x70 */ bvs,
            /* 0x71 */ sel_m!($m, adc_b, adc_w),
            /* 0x72 */ sel_m!($m, adc_b, adc_w),
            /* 0x73 */ sel_m!($m, adc_b, adc_w),
            /* 0x74 */ sel_m!($m, stz_b, stz_w),
            /* 0x75 */ sel_m!($m, adc_b, adc_w),
            /* 0x76 */ sel_m!($m, ror_b, ror_w),
            /* 0x77 */ sel_m!($m, adc_b, adc_w),
            /* 0x78 */ sei,
            /* 0x79 */ sel_m!($m, adc_b, adc_w),
            /* 0x7a */ sel_x!($x, ply_b, ply_w),
            /* 0x7b */ tdc,
            /* 0x7c */ jmp,
            /* 0x7d */ sel_m!($m, adc_b, adc_w),
            /* 0x7e */ sel_m!($m, ror_b, ror_w),
            /* 0x7f */ sel_m!($m, adc_b, adc_w),
            /* 0x80 */ bra,
            /* 0x81 */ sel_m!($m, sta_b, sta_w),
            /* 0x82 */ brl,
            /* 0x83 */ sel_m!($m, sta_b, sta_w),
            /* 0x84 */ sel_x!($x, sty_b, sty_w),
            /* 0x85 */ sel_m!($m, sta_b, sta_w),
            /* 0x86 */ sel_x!($x, stx_b, stx_w),
            /* 0x87 */ sel_m!($m, sta_b, sta_w),
            /* 0x88 */ sel_x!($x, dey_b, dey_w),
            /* 0x89 */ sel_m!($m, bit_b, bit_w),
            /* 0x8a */ sel_m!($m, txa_b, txa_w),
            /* 0x8b */ phb,
            /* 0x8c */ sel_x!($x, sty_b, sty_w),
            /* 0x8d */ sel_m!($m, sta_b, sta_w),
            /* 0x8e */ sel_x!($x, stx_b, stx_w),
            /* 0x8f */ sel_m!($m, sta_b, sta_w),
            /* 0x90 */ bcc,
            /* 0x91 */ sel_m!($m, sta_b, sta_w),
            /* 0x92 */ sel_m!($m, sta_b, sta_w),
            /* 0x93 */ sel_m!($m, sta_b, sta_w),
            /* 0x94 */ sel_x!($x, sty_b, sty_w),
            /* 0x95 */ sel_m!($m, sta_b, sta_w),
            /* 0x96 */ sel_x!($x, stx_b, stx_w),
            /* 0x97 */ sel_m!($m, sta_b, sta_w),
            /* 0x98 */ sel_m!($m, tya_b, tya_w),
            /* 0x99 */ sel_m!($m, sta_b, sta_w),
            /* 0x9a */ txs,
            /* 0x9b */ sel_x!($x, txy_b, txy_w),
            /* 0x9c */ sel_m!($m, stz_b, stz_w),
            /* 0x9d */ sel_m!($m, sta_b, sta_w),
            /* 0x9e */ sel_m!($m, stz_b, stz_w),
            /* 0x9f */ sel_m!($m, sta_b, sta_w),
            /* 0xa0 */ sel_x!($x, ldy_b, ldy_w),
            /* 0xa1 */ sel_m!($m, lda_b, lda_w),
            /* 0xa2 */ sel_x!($x, ldx_b, ldx_w),
            /* 0xa3 */ sel_m!($m, lda_b, lda_w),
            /* 0xa4 */ sel_x!($x, ldy_b, ldy_w),
            /* 0xa5 */ sel_m!($m, lda_b, lda_w),
            /* 0xa6 */ sel_x!($x, ldx_b, ldx_w),
            /* 0xa7 */ sel_m!($m, lda_b, lda_w),
            /* 0xa8 */ sel_x!($x, tay_b, tay_w),
            /* 0xa9 */ sel_m!($m, lda_b, lda_w),
            /* 0xaa */ sel_x!($x, tax_b, tax_w),
            /* 0xab */ plb,
            /* 0xac */ sel_x!($x, ldy_b, ldy_w),
            /* 0xad */ sel_m!($m, lda_b, lda_w),
            /* 0xae */ sel_x!($x, ldx_b, ldx_w),
            /* 0xaf */ sel_m!($m, lda_b, lda_w),
            /* 0xb0 */ bcs,
            /* 0xb1 */ sel_m!($m, lda_b, lda_w),
            /* 0xb2 */ sel_m!($m, lda_b, lda_w),
            /* 0xb3 */ sel_m!($m, lda_b, lda_w),
            /* 0xb4 */ sel_x!($x, ldy_b, ldy_w),
            /* 0xb5 */ sel_m!($m, lda_b, lda_w),
            /* 0xb6 */ sel_x!($x, ldx_b, ldx_w),
            /* 0xb7 */ sel_m!($m, lda_b, lda_w),
            /* 0xb8 */ clv,
            /* 0xb9 */ sel_m!($m, lda_b, lda_w),
            /* 0xba */ sel_x!($x, tsx_b, tsx_w),
            /* 0xbb */ sel_x!($x, tyx_b, tyx_w),
            /* 0xbc */ sel_x!($x, ldy_b, ldy_w),
            /* 0xbd */ sel_m!($m, lda_b, lda_w),
            /* 0xbe */ sel_x!($x, ldx_b, ldx_w),
            /* 0xbf */ sel_m!($m, lda_b, lda_w),
            /* 0xc0 */ sel_x!($x, cpy_b, cpy_w),
            /* 0xc1 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xc2 */ rep,
            /* 0xc3 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xc4 */ sel_x!($x, cpy_b, cpy_w),
            /* 0xc5 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xc6 */ sel_m!($m, dec_b, dec_w),
            /* 0xc7 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xc8 */ sel_x!($x, iny_b, iny_w),
            /* 0xc9 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xca */ sel_x!($x, dex_b, dex_w),
            /* 0xcb */ wai,
            /* 0xcc */ sel_x!($x, cpy_b, cpy_w),
            /* 0xcd */ sel_m!($m, cmp_b, cmp_w),
            /* 0xce */ sel_m!($m, dec_b, dec_w),
            /* 0xcf */ sel_m!($m, cmp_b, cmp_w),
            /* 0xd0 */ bne,
            /* 0xd1 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xd2 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xd3 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xd4 */ pei,
            /* 0xd5 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xd6 */ sel_m!($m, dec_b, dec_w),
            /* 0xd7 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xd8 */ cld,
            /* 0xd9 */ sel_m!($m, cmp_b, cmp_w),
            /* 0xda */ sel_x!($x, phx_b, phx_w),
            /* 0xdb */ stp,
            /* 0xdc */ jml,
            /* 0xdd */ sel_m!($m, cmp_b, cmp_w),
            /* 0xde */ sel_m!($m, dec_b, dec_w),
            /* 0xdf */ sel_m!($m, cmp_b, cmp_w),
            /* 0xe0 */ sel_x!($x, cpx_b, cpx_w),
            /* 0xe1 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xe2 */ sep,
            /* 0xe3 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xe4 */ sel_x!($x, cpx_b, cpx_w),
            /* 0xe5 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xe6 */ sel_m!($m, inc_b, inc_w),
            /* 0xe7 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xe8 */ sel_x!($x, inx_b, inx_w),
            /* 0xe9 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xea */ nop,
            /* 0xeb */ xba,
            /* 0xec */ sel_x!($x, cpx_b, cpx_w),
            /* 0xed */ sel_m!($m, sbc_b, sbc_w),
            /* 0xee */ sel_m!($m, inc_b, inc_w),
            /* 0xef */ sel_m!($m, sbc_b, sbc_w),
            /* 0xf0 */ beq,
            /* 0xf1 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xf2 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xf3 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xf4 */ pea,
            /* 0xf5 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xf6 */ sel_m!($m, inc_b, inc_w),
            /* 0xf7 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xf8 */ sed,
            /* 0xf9 */ sel_m!($m, sbc_b, sbc_w),
            /* 0xfa */ sel_x!($x, plx_b, plx_w),
            /* 0xfb */ xce,
            /* 0xfc */ jsr,
            /* 0xfd */ sel_m!($m, sbc_b, sbc_w),
            /* 0xfe */ sel_m!($m, inc_b, inc_w),
            /* 0xff */ sel_m!($m, sbc_b, sbc_w),
        ]
    };
}

// The five operating modes: emulation, plus the four native (M, X) width
// combinations. The executor tables only differ in the width bindings; the
// handful of kernels whose behavior depends on E itself (stack wrap, branch
// page penalty, interrupt frames) consult the E flag, which is not a width.
pub static DISPATCH_E11: [OperationFn; 256] = dispatch_table!(m8, x8);
pub static DISPATCH_N00: [OperationFn; 256] = dispatch_table!(m16, x16);
pub static DISPATCH_N01: [OperationFn; 256] = dispatch_table!(m16, x8);
pub static DISPATCH_N10: [OperationFn; 256] = dispatch_table!(m8, x16);
pub static DISPATCH_N11: [OperationFn; 256] = dispatch_table!(m8, x8);
