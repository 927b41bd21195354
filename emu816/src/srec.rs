use cpu_65c816::bus::SharedBus;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug)]
pub enum SrecLoadError {
    IoError(io::Error),
}

impl From<io::Error> for SrecLoadError {
    fn from(error: io::Error) -> Self {
        SrecLoadError::IoError(error)
    }
}

#[derive(Debug, Default)]
pub struct LoadSummary {
    pub records: usize,
    pub bytes: usize,
}

/// Load a Motorola S-record file into memory. Only S1 (16-bit address) and
/// S2 (24-bit address) data records are honored; header and terminator
/// records are ignored, and malformed lines are skipped silently.
pub fn load_srec_file(path: &Path, bus: &SharedBus) -> Result<LoadSummary, SrecLoadError> {
    let file = File::open(path)?;
    load_srec(BufReader::new(file), bus)
}

pub fn load_srec<R: BufRead>(reader: R, bus: &SharedBus) -> Result<LoadSummary, SrecLoadError> {
    let mut summary = LoadSummary::default();
    for line in reader.lines() {
        let line = line?;
        if let Some((address, data)) = parse_record(line.trim()) {
            let mut bus = bus.borrow_mut();
            for (index, value) in data.iter().enumerate() {
                bus.load_u8(address + index as u32, *value);
            }
            summary.records += 1;
            summary.bytes += data.len();
        }
    }
    Ok(summary)
}

/// Decode one data record: `S{type}{count}{addr}{data...}{checksum}` in
/// ASCII hex. Returns None for anything that is not a well-formed S1/S2
/// data record.
fn parse_record(line: &str) -> Option<(u32, Vec<u8>)> {
    let bytes = line.as_bytes();
    if bytes.first() != Some(&b'S') {
        return None;
    }
    let addr_chars = match bytes.get(1) {
        Some(b'1') => 4,
        Some(b'2') => 6,
        // S0 headers, S3 records and the S7/8/9 terminators are ignored.
        _ => return None,
    };

    // The count covers the address, the data and the checksum byte.
    let count = hex_byte(bytes, 2)? as usize;
    let addr_bytes = addr_chars / 2;
    if count < addr_bytes + 1 {
        return None;
    }
    let data_count = count - addr_bytes - 1;
    if bytes.len() < 4 + addr_chars + data_count * 2 + 2 {
        return None;
    }

    let mut address = 0u32;
    for i in 0..addr_bytes {
        address = (address << 8) | hex_byte(bytes, 4 + 2 * i)? as u32;
    }

    let mut data = Vec::with_capacity(data_count);
    for i in 0..data_count {
        data.push(hex_byte(bytes, 4 + addr_chars + 2 * i)?);
    }
    Some((address, data))
}

fn hex_byte(bytes: &[u8], index: usize) -> Option<u8> {
    let high = hex_nibble(*bytes.get(index)?)?;
    let low = hex_nibble(*bytes.get(index + 1)?)?;
    Some((high << 4) | low)
}

fn hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cpu_65c816::bus::Bus;
    use std::io::Cursor;

    fn ram_bus() -> SharedBus {
        let bus = Bus::new_shared_bus();
        bus.borrow_mut().add_ram(0x000000, 0x40000);
        bus
    }

    #[test]
    fn loads_an_s1_record() {
        let bus = ram_bus();
        // One data byte, $AB at $2000.
        let summary = load_srec(Cursor::new("S1042000AB30\n"), &bus).unwrap();
        assert_eq!(summary.records, 1);
        assert_eq!(summary.bytes, 1);
        assert_eq!(bus.borrow().read_u8(0x002000), 0xab);
    }

    #[test]
    fn loads_an_s2_record_with_a_24_bit_address() {
        let bus = ram_bus();
        let summary = load_srec(Cursor::new("S205012000CD0C\n"), &bus).unwrap();
        assert_eq!(summary.records, 1);
        assert_eq!(bus.borrow().read_u8(0x012000), 0xcd);
    }

    #[test]
    fn loads_multiple_data_bytes() {
        let bus = ram_bus();
        // Four bytes $01 $02 $03 $04 at $1000.
        load_srec(Cursor::new("S1071000010203 04"), &bus).ok();
        // The spaced line above is malformed, so nothing landed.
        assert_eq!(bus.borrow().read_u8(0x001000), 0);

        load_srec(Cursor::new("S107100001020304DE\n"), &bus).unwrap();
        for i in 0..4 {
            assert_eq!(bus.borrow().read_u8(0x001000 + i), i as u8 + 1);
        }
    }

    #[test]
    fn ignores_headers_terminators_and_junk() {
        let bus = ram_bus();
        let text = "S00600004844521B\n\
                    ; a comment line\n\
                    garbage\n\
                    S9030000FC\n\
                    S1042000AB30\n";
        let summary = load_srec(Cursor::new(text), &bus).unwrap();
        assert_eq!(summary.records, 1);
        assert_eq!(bus.borrow().read_u8(0x002000), 0xab);
    }

    #[test]
    fn skips_truncated_records() {
        let bus = ram_bus();
        // The count promises more data than the line carries.
        let summary = load_srec(Cursor::new("S1102000AB\n"), &bus).unwrap();
        assert_eq!(summary.records, 0);
        assert_eq!(bus.borrow().read_u8(0x002000), 0);
    }
}
