use crate::bus::SharedBus;
use crate::constants::{interrupt_bits, vectors};
use crate::host::{HostPort, NullHost};
use crate::opcodes::{self, Mode, OperationFn};
use crate::trace;

pub mod opcodes_alu;
pub mod opcodes_jump;
pub mod opcodes_move;
pub mod opcodes_stack;
pub mod opcodes_system;

#[cfg(test)]
pub mod test_helpers;

// Test must be after test_helpers, rust format tries to move things around.
#[cfg(test)]
mod test;

/// P after a reset: memory and index registers 8-bit, IRQs disabled,
/// decimal mode off. The remaining bits are undefined on real silicon.
pub const RESET_STATUS_FLAG: u8 = 0b0011_0100;

#[rustfmt::skip]
#[derive(Clone, Copy)]
pub enum StatusFlag {
  Carry            = 0b00000001,
  Zero             = 0b00000010,
  InterruptDisable = 0b00000100,
  Decimal          = 0b00001000,
  IndexWidth       = 0b00010000,
  MemoryWidth      = 0b00100000,
  Overflow         = 0b01000000,
  Negative         = 0b10000000,
}

// In emulation mode bit 4 is the break flag on pushed copies of P, and
// bit 5 reads as set. The raw masks are used where that matters.
pub const BREAK_BIT: u8 = 0b0001_0000;
pub const UNUSED_BITS: u8 = 0b0011_0000;

#[inline]
pub fn lo(word: u16) -> u8 {
    word as u8
}

#[inline]
pub fn hi(word: u16) -> u8 {
    (word >> 8) as u8
}

#[inline]
pub fn set_lo(word: u16, value: u8) -> u16 {
    (word & 0xff00) | value as u16
}

#[inline]
pub fn set_hi(word: u16, value: u8) -> u16 {
    (word & 0x00ff) | ((value as u16) << 8)
}

/// Join an 8-bit bank with a 16-bit offset into a 24-bit address.
#[inline]
pub fn bank_addr(bank: u8, offset: u16) -> u32 {
    ((bank as u32) << 16) | offset as u32
}

/// Truncate address arithmetic to the 24-bit bus.
#[inline]
pub fn wrap24(addr: u32) -> u32 {
    addr & 0x00ff_ffff
}

/// This struct implements the WDC 65C816 central processing unit: a 6502
/// grown a 24-bit address space, switchable 8/16-bit register widths, and a
/// backwards-compatible emulation mode.
///
/// https://en.wikipedia.org/wiki/WDC_65C816
pub struct Cpu65C816 {
    // The bus is what holds all the memory access for the program.
    pub bus: SharedBus,

    /// "PC" - Program counter within the current program bank.
    pub pc: u16,
    /// "PBR" - Program bank register, the upper 8 bits of instruction
    /// fetches. The CPU never carries PC overflow into it.
    pub pbr: u8,
    /// "DBR" - Data bank register, the upper 8 bits of most data accesses.
    pub dbr: u8,
    /// "DP" - Direct page base. The 6502's zero page, relocated.
    pub dp: u16,
    /// "SP" - Stack pointer. The high byte is pinned to $01 in emulation
    /// mode, where the 6502's single stack page lives.
    pub sp: u16,

    /// "C" - The 16-bit accumulator. When the M flag selects 8-bit width
    /// only the low byte is the accumulator; the high byte ("B") is
    /// preserved and reachable through XBA.
    pub c: u16,
    /// "X" register. The high byte is forced to zero while the X flag
    /// selects 8-bit index registers.
    pub x: u16,
    /// "Y" register.
    pub y: u16,

    /// "P" - Status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVMX DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// ||++------ Index width / Accumulator width (B and unused when E=1)
    /// |+-------- Overflow
    /// +--------- Negative
    pub p: u8,
    /// "E" - Emulation flag. Not addressable through P; exchanged with the
    /// carry by XCE.
    pub e: bool,

    /// Interrupt enable mask, owned by the interpreter and manipulated
    /// through WDM.
    pub ier: u16,
    /// Pending interrupt flags. The host ORs bits in between steps.
    pub ifr: u16,
    /// A level-triggered IRQ line for hosts that bypass the IFR model.
    pub irq_line: bool,

    /// Set by STP or a host halt; `step` refuses to run while set.
    pub stopped: bool,
    /// Set by WAI; cleared by any pending interrupt.
    pub waiting: bool,

    /// When enabled, one formatted line is printed per executed
    /// instruction.
    pub trace: bool,

    /// Cycles charged by the instruction currently executing.
    pub cycles: u32,
    /// Monotonic total across the life of the interpreter.
    pub total_cycles: u64,

    // The 256-entry executor table for the current (E, M, X) combination.
    // Re-selected whenever one of those bits changes.
    dispatch: &'static [OperationFn; 256],

    /// The WDM host escape collaborator.
    pub host: Box<dyn HostPort>,
}

impl Cpu65C816 {
    pub fn new(bus: SharedBus) -> Cpu65C816 {
        Cpu65C816 {
            bus,
            pc: 0,
            pbr: 0,
            dbr: 0,
            dp: 0,
            sp: 0x0100,
            c: 0,
            x: 0,
            y: 0,
            p: RESET_STATUS_FLAG,
            e: true,
            ier: 0,
            ifr: 0,
            irq_line: false,
            stopped: false,
            waiting: false,
            trace: false,
            cycles: 0,
            total_cycles: 0,
            dispatch: &opcodes::DISPATCH_E11,
            host: Box::new(NullHost),
        }
    }

    /// The sole legitimate initializer. Loads PC from the reset vector and
    /// drops the processor into emulation mode, exactly as a RES pulse
    /// does.
    pub fn reset(&mut self) {
        self.pc = self
            .bus
            .borrow()
            .read_word(vectors::RESET, vectors::RESET + 1);
        self.sp = 0x0100;
        self.dp = 0;
        self.pbr = 0;
        self.dbr = 0;
        self.p = RESET_STATUS_FLAG;
        self.e = true;
        self.stopped = false;
        self.waiting = false;
        self.truncate_index_registers();
        self.update_dispatch();
    }

    /// Does one operational step of the CPU: samples interrupts, then
    /// fetches and executes a single instruction. Returns the elapsed
    /// cycles, or zero when halted or waiting.
    pub fn step(&mut self) -> u32 {
        if self.stopped {
            return 0;
        }
        self.cycles = 0;

        // Interrupts are sampled only between instructions.
        if self.host.rx_ready() {
            self.ifr |= interrupt_bits::SERIAL_RX;
        }
        if self.host.tx_ready() {
            self.ifr |= interrupt_bits::SERIAL_TX;
        }
        let pending = (self.ier & self.ifr) != 0 || self.irq_line;

        if pending && !self.is_status_flag_set(StatusFlag::InterruptDisable) {
            self.waiting = false;
            // A hardware interrupt pushes P with the break bit clear so the
            // handler can tell it apart from BRK.
            let pushed = (self.p | UNUSED_BITS) & !BREAK_BIT;
            self.exception(vectors::IRQ_BRK_EMULATION, vectors::IRQ_NATIVE, pushed);
            self.cycles += if self.e { 7 } else { 8 };
            self.total_cycles += self.cycles as u64;
            return self.cycles;
        }

        if self.waiting {
            if !pending {
                return 0;
            }
            // The CPU was waiting for exactly this; resume with the
            // instruction after WAI.
            self.waiting = false;
        }

        if self.trace {
            println!("{}", trace::format_instruction(self));
        }

        let opcode = self.next_u8() as usize;
        self.cycles += opcodes::CYCLES_TABLE[opcode] as u32;
        let mode = opcodes::ADDRESSING_MODE_TABLE[opcode];
        let operation = self.dispatch[opcode];
        operation(self, mode);

        self.total_cycles += self.cycles as u64;
        self.cycles
    }

    /// Run until STP or a host halt.
    pub fn run(&mut self) {
        while !self.stopped {
            self.step();
        }
    }

    /// This function is useful for testing the emulator. It will only run
    /// while the predicate is true.
    pub fn run_until<F>(&mut self, predicate: F)
    where
        F: Fn(&Cpu65C816) -> bool,
    {
        while !predicate(self) {
            self.step();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// OR bits into the pending-interrupt flags. Hosts call this between
    /// steps, e.g. from a timer check.
    pub fn assert_interrupt(&mut self, bits: u16) {
        self.ifr |= bits;
    }

    pub fn clear_interrupt(&mut self, bits: u16) {
        self.ifr &= !bits;
    }

    pub fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    /// A non-maskable interrupt, entered immediately. Hosts call this
    /// between steps.
    pub fn nmi(&mut self) -> u32 {
        self.waiting = false;
        let pushed = (self.p | UNUSED_BITS) & !BREAK_BIT;
        self.exception(vectors::NMI_EMULATION, vectors::NMI_NATIVE, pushed);
        let cycles = if self.e { 7 } else { 8 };
        self.total_cycles += cycles as u64;
        cycles
    }

    /// An abort, entered immediately. Hosts call this between steps.
    pub fn abort(&mut self) -> u32 {
        self.waiting = false;
        let pushed = (self.p | UNUSED_BITS) & !BREAK_BIT;
        self.exception(vectors::ABORT_EMULATION, vectors::ABORT_NATIVE, pushed);
        let cycles = if self.e { 7 } else { 8 };
        self.total_cycles += cycles as u64;
        cycles
    }

    /// The common exception entry: stack the return state, load the vector,
    /// and adjust the mode bits. Callers charge the cycles. BRK and COP
    /// route through here too, with their own pushed-P image.
    pub(crate) fn exception(&mut self, emulation_vector: u32, native_vector: u32, pushed_p: u8) {
        let vector = if self.e {
            self.push_u16(self.pc);
            self.push_u8(pushed_p);
            emulation_vector
        } else {
            self.push_u8(self.pbr);
            self.push_u16(self.pc);
            self.push_u8(self.p);
            native_vector
        };
        self.set_status_flag(StatusFlag::InterruptDisable, true);
        self.set_status_flag(StatusFlag::Decimal, false);
        self.pbr = 0;
        self.pc = self.bus.borrow().read_word(vector, vector + 1);
    }

    /// Re-select the executor table after E, M or X changed.
    pub(crate) fn update_dispatch(&mut self) {
        self.dispatch = if self.e {
            &opcodes::DISPATCH_E11
        } else {
            let m8 = self.is_status_flag_set(StatusFlag::MemoryWidth);
            let x8 = self.is_status_flag_set(StatusFlag::IndexWidth);
            match (m8, x8) {
                (false, false) => &opcodes::DISPATCH_N00,
                (false, true) => &opcodes::DISPATCH_N01,
                (true, false) => &opcodes::DISPATCH_N10,
                (true, true) => &opcodes::DISPATCH_N11,
            }
        };
    }

    /// Enter or leave emulation mode. Entering forces 8-bit widths and
    /// pins the stack to page $01.
    pub(crate) fn set_emulation(&mut self, value: bool) {
        self.e = value;
        if value {
            self.set_status_flag(StatusFlag::MemoryWidth, true);
            self.set_status_flag(StatusFlag::IndexWidth, true);
            self.truncate_index_registers();
            self.sp = 0x0100 | (self.sp & 0x00ff);
        }
        self.update_dispatch();
    }

    /// On any transition into 8-bit index registers, their high bytes are
    /// forced to zero and stay there.
    pub(crate) fn truncate_index_registers(&mut self) {
        if self.e || self.is_status_flag_set(StatusFlag::IndexWidth) {
            self.x &= 0x00ff;
            self.y &= 0x00ff;
        }
    }

    /*
     * Flag helpers.
     */

    pub fn set_status_flag(&mut self, status_flag: StatusFlag, value: bool) {
        if value {
            self.p |= status_flag as u8;
        } else {
            self.p &= !(status_flag as u8);
        }
    }

    pub fn is_status_flag_set(&self, status_flag: StatusFlag) -> bool {
        let flag = status_flag as u8;
        self.p & flag == flag
    }

    /// The carry as a 0/1 value, ready to feed an adder.
    pub(crate) fn get_carry(&self) -> u16 {
        (self.p & StatusFlag::Carry as u8) as u16
    }

    /// These flags are commonly set together.
    pub(crate) fn update_nz8(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0x80 != 0);
    }

    pub(crate) fn update_nz16(&mut self, value: u16) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0x8000 != 0);
    }

    /*
     * Bus access.
     */

    pub(crate) fn read_u8(&self, addr: u32) -> u8 {
        self.bus.borrow().read_u8(addr)
    }

    pub(crate) fn write_u8(&mut self, addr: u32, value: u8) {
        self.bus.borrow_mut().write_u8(addr, value);
    }

    pub(crate) fn read_word(&self, lo_addr: u32, hi_addr: u32) -> u16 {
        self.bus.borrow().read_word(lo_addr, hi_addr)
    }

    pub(crate) fn write_word(&mut self, lo_addr: u32, hi_addr: u32, value: u16) {
        self.bus.borrow_mut().write_word(lo_addr, hi_addr, value);
    }

    /// Increment the program counter and read the next u8 value following
    /// the current pc. PC wraps within the program bank.
    pub(crate) fn next_u8(&mut self) -> u8 {
        let value = self.read_u8(bank_addr(self.pbr, self.pc));
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Increment the program counter and read the next u16 value following
    /// the current pc.
    pub(crate) fn next_u16(&mut self) -> u16 {
        let lo = self.next_u8();
        let hi = self.next_u8();
        u16::from_le_bytes([lo, hi])
    }

    /*
     * Stack access. The 65C816 uses a descending stack; in emulation mode
     * only the low byte of SP moves, keeping the stack inside page $01.
     */

    pub(crate) fn push_u8(&mut self, value: u8) {
        self.write_u8(self.sp as u32, value);
        if self.e {
            self.sp = 0x0100 | (self.sp as u8).wrapping_sub(1) as u16;
        } else {
            self.sp = self.sp.wrapping_sub(1);
        }
    }

    pub(crate) fn pull_u8(&mut self) -> u8 {
        if self.e {
            self.sp = 0x0100 | (self.sp as u8).wrapping_add(1) as u16;
        } else {
            self.sp = self.sp.wrapping_add(1);
        }
        self.read_u8(self.sp as u32)
    }

    /// Push high byte first, so that a pull reads low then high.
    pub(crate) fn push_u16(&mut self, value: u16) {
        self.push_u8(hi(value));
        self.push_u8(lo(value));
    }

    pub(crate) fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    /*
     * Addressing modes.
     */

    /// Compute a byte address inside the direct page. In emulation mode
    /// with DP.l == 0 the offset wraps within 8 bits, reproducing the
    /// 6502's zero-page behavior; otherwise it forms a full 16-bit sum.
    /// Always bank 0.
    pub(crate) fn direct_page_byte_addr(&self, offset: u16, k: u16) -> u32 {
        if self.e && lo(self.dp) == 0 {
            (self.dp | (offset.wrapping_add(k) & 0x00ff)) as u32
        } else {
            self.dp.wrapping_add(offset).wrapping_add(k) as u32
        }
    }

    /// The (EAL, EAH) pair for a direct-page access at `offset` (operand
    /// plus any index, already combined). Charges the non-zero-DP.l cycle.
    fn direct_page_pair(&mut self, offset: u16) -> (u32, u32) {
        if lo(self.dp) != 0 {
            self.cycles += 1;
        }
        (
            self.direct_page_byte_addr(offset, 0),
            self.direct_page_byte_addr(offset, 1),
        )
    }

    /// Read a 24-bit pointer out of the direct page for the long-indirect
    /// modes.
    fn direct_page_pointer_long(&mut self, offset: u16) -> u32 {
        if lo(self.dp) != 0 {
            self.cycles += 1;
        }
        let lo = self.read_u8(self.direct_page_byte_addr(offset, 0)) as u32;
        let hi = self.read_u8(self.direct_page_byte_addr(offset, 1)) as u32;
        let bank = self.read_u8(self.direct_page_byte_addr(offset, 2)) as u32;
        (bank << 16) | (hi << 8) | lo
    }

    /// Each addressing mode resolves to a pair of 24-bit byte addresses:
    /// the address of the operand's low byte and of its high byte. Byte
    /// operations use only the first. The pair is computed as a pair
    /// because the two bytes do not always sit next to each other; see
    /// the direct-page and bank-wrap rules.
    pub(crate) fn effective_address(&mut self, mode: Mode) -> (u32, u32) {
        match mode {
            Mode::ImmediateByte => {
                let eal = bank_addr(self.pbr, self.pc);
                self.pc = self.pc.wrapping_add(1);
                (eal, 0)
            }
            Mode::ImmediateWord => {
                let eal = bank_addr(self.pbr, self.pc);
                let eah = bank_addr(self.pbr, self.pc.wrapping_add(1));
                self.pc = self.pc.wrapping_add(2);
                (eal, eah)
            }
            // Data-bank absolute. The +1 carries into the bank byte.
            Mode::Absolute => {
                let base = bank_addr(self.dbr, self.next_u16());
                (base, wrap24(base + 1))
            }
            Mode::AbsoluteIndexedX => {
                let base = bank_addr(self.dbr, self.next_u16()) + self.x as u32;
                (wrap24(base), wrap24(base + 1))
            }
            Mode::AbsoluteIndexedY => {
                let base = bank_addr(self.dbr, self.next_u16()) + self.y as u32;
                (wrap24(base), wrap24(base + 1))
            }
            Mode::AbsoluteLong => {
                let lo = self.next_u8() as u32;
                let hi = self.next_u8() as u32;
                let bank = self.next_u8() as u32;
                let base = (bank << 16) | (hi << 8) | lo;
                (base, wrap24(base + 1))
            }
            // The 16-bit index adds into the full 24-bit base.
            Mode::AbsoluteLongX => {
                let lo = self.next_u8() as u32;
                let hi = self.next_u8() as u32;
                let bank = self.next_u8() as u32;
                let base = ((bank << 16) | (hi << 8) | lo) + self.x as u32;
                (wrap24(base), wrap24(base + 1))
            }
            Mode::DirectPage => {
                let offset = self.next_u8() as u16;
                self.direct_page_pair(offset)
            }
            Mode::DirectPageX => {
                let offset = (self.next_u8() as u16).wrapping_add(self.x);
                self.direct_page_pair(offset)
            }
            Mode::DirectPageY => {
                let offset = (self.next_u8() as u16).wrapping_add(self.y);
                self.direct_page_pair(offset)
            }
            // The indirection resolves into the data bank, not the program
            // bank.
            Mode::DirectPageIndirect => {
                let offset = self.next_u8() as u16;
                let (pl, ph) = self.direct_page_pair(offset);
                let base = bank_addr(self.dbr, self.read_word(pl, ph));
                (base, wrap24(base + 1))
            }
            Mode::DirectPageIndirectX => {
                let offset = (self.next_u8() as u16).wrapping_add(self.x);
                let (pl, ph) = self.direct_page_pair(offset);
                let base = bank_addr(self.dbr, self.read_word(pl, ph));
                (base, wrap24(base + 1))
            }
            Mode::DirectPageIndirectY => {
                let offset = self.next_u8() as u16;
                let (pl, ph) = self.direct_page_pair(offset);
                let base = bank_addr(self.dbr, self.read_word(pl, ph)) + self.y as u32;
                (wrap24(base), wrap24(base + 1))
            }
            Mode::DirectPageIndirectLong => {
                let offset = self.next_u8() as u16;
                let base = self.direct_page_pointer_long(offset);
                (base, wrap24(base + 1))
            }
            Mode::DirectPageIndirectLongY => {
                let offset = self.next_u8() as u16;
                let base = self.direct_page_pointer_long(offset) + self.y as u32;
                (wrap24(base), wrap24(base + 1))
            }
            // A 16-bit sum with SP, always bank 0.
            Mode::StackRelative => {
                let offset = self.next_u8() as u16;
                let base = self.sp.wrapping_add(offset);
                (base as u32, base.wrapping_add(1) as u32)
            }
            Mode::StackRelativeIndirectY => {
                let offset = self.next_u8() as u16;
                let base = self.sp.wrapping_add(offset);
                let ptr = self.read_word(base as u32, base.wrapping_add(1) as u32);
                let target = bank_addr(self.dbr, ptr) + self.y as u32;
                (wrap24(target), wrap24(target + 1))
            }
            Mode::Implied
            | Mode::Accumulator
            | Mode::ImmediateM
            | Mode::ImmediateX
            | Mode::Relative
            | Mode::RelativeLong
            | Mode::AbsoluteProgram
            | Mode::AbsoluteIndirect
            | Mode::AbsoluteIndexedIndirect
            | Mode::AbsoluteIndirectLong
            | Mode::BlockMove => {
                panic!("Attempting to get the effective address of a control-flow mode.")
            }
        }
    }

    /*
     * Operand access for the opcode kernels. The width-specific kernels
     * resolve the width-by-M/width-by-X immediates here, statically.
     */

    pub(crate) fn get_operand_b(&mut self, mode: Mode) -> u8 {
        match mode {
            Mode::ImmediateByte | Mode::ImmediateM | Mode::ImmediateX => self.next_u8(),
            Mode::Accumulator => lo(self.c),
            _ => {
                let (eal, _) = self.effective_address(mode);
                self.read_u8(eal)
            }
        }
    }

    pub(crate) fn get_operand_w(&mut self, mode: Mode) -> u16 {
        match mode {
            Mode::ImmediateWord | Mode::ImmediateM | Mode::ImmediateX => self.next_u16(),
            Mode::Accumulator => self.c,
            _ => {
                let (eal, eah) = self.effective_address(mode);
                self.read_word(eal, eah)
            }
        }
    }

    pub(crate) fn get_address_and_maybe_operand_b(&mut self, mode: Mode) -> (Option<(u32, u32)>, u8) {
        if let Mode::Accumulator = mode {
            return (None, lo(self.c));
        }
        let pair = self.effective_address(mode);
        (Some(pair), self.read_u8(pair.0))
    }

    pub(crate) fn get_address_and_maybe_operand_w(&mut self, mode: Mode) -> (Option<(u32, u32)>, u16) {
        if let Mode::Accumulator = mode {
            return (None, self.c);
        }
        let pair = self.effective_address(mode);
        (Some(pair), self.read_word(pair.0, pair.1))
    }

    /// Finish a read-modify-write: the result goes back to the address it
    /// came from, or into the accumulator for the register form.
    pub(crate) fn write_back_b(&mut self, address: Option<(u32, u32)>, value: u8) {
        match address {
            Some((eal, _)) => self.write_u8(eal, value),
            None => self.c = set_lo(self.c, value),
        }
    }

    pub(crate) fn write_back_w(&mut self, address: Option<(u32, u32)>, value: u16) {
        match address {
            Some((eal, eah)) => self.write_word(eal, eah, value),
            None => self.c = value,
        }
    }
}
