/// Exception vectors live at the top of bank 0. The emulation-mode set is
/// the classic 65C02 layout; native mode has its own block just below it.
pub mod vectors {
    pub const COP_NATIVE: u32 = 0x00FFE4;
    pub const BRK_NATIVE: u32 = 0x00FFE6;
    pub const ABORT_NATIVE: u32 = 0x00FFE8;
    pub const NMI_NATIVE: u32 = 0x00FFEA;
    pub const IRQ_NATIVE: u32 = 0x00FFEE;

    pub const COP_EMULATION: u32 = 0x00FFF4;
    pub const ABORT_EMULATION: u32 = 0x00FFF8;
    pub const NMI_EMULATION: u32 = 0x00FFFA;
    // A reset always lands in emulation mode, so there is only one of these.
    pub const RESET: u32 = 0x00FFFC;
    pub const IRQ_BRK_EMULATION: u32 = 0x00FFFE;
}

/// Bit assignments inside the IER/IFR register pair. Hosts may define more
/// bits; the interpreter treats every bit identically.
pub mod interrupt_bits {
    /// Periodic 10 ms wall-clock timer, asserted by the host driver.
    pub const TIMER: u16 = 0x0001;
    /// Serial receive data available.
    pub const SERIAL_RX: u16 = 0x0002;
    /// Serial transmit buffer space available.
    pub const SERIAL_TX: u16 = 0x0004;
}
