/// The host escape port behind the WDM instruction: a single-byte serial
/// channel plus readiness lines for the serial IFR bits. Interrupt enable
/// and flag manipulation stay inside the interpreter; only the outside
/// world's half lives here.
pub trait HostPort {
    /// Receive one byte from the host serial channel. Blocking here is the
    /// host's choice.
    fn serial_rx(&mut self) -> u8 {
        0
    }

    /// Transmit one byte to the host serial channel.
    fn serial_tx(&mut self, _value: u8) {}

    /// True when `serial_rx` would return data without blocking.
    fn rx_ready(&self) -> bool {
        false
    }

    /// True when the transmit side can accept a byte.
    fn tx_ready(&self) -> bool {
        false
    }
}

/// A host with nothing attached. Reads return zero, writes disappear.
pub struct NullHost;

impl HostPort for NullHost {}
