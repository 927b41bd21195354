use clap::Parser;
use colored::Colorize;
use cpu_65c816::bus::Bus;
use cpu_65c816::constants::interrupt_bits;
use cpu_65c816::cpu_65c816::Cpu65C816;
use cpu_65c816::host::HostPort;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

mod srec;

const RAM_BASE: u32 = 0x000000;
const RAM_SIZE: u32 = 0x040000; // 256 KiB from the bottom
const ROM_BASE: u32 = 0xfc0000;
const ROM_SIZE: u32 = 0x040000; // 256 KiB up against the top

/// How many instructions to run between wall-clock checks for the 10 ms
/// timer interrupt.
const TIMER_CHECK_INTERVAL: u32 = 2048;

/// A cycle-counted WDC 65C816 emulator. Loads Motorola S-record images,
/// resets, and runs until the firmware stops the clock.
#[derive(Parser)]
#[command(name = "emu816", version, about, long_about = None)]
struct Cli {
    /// Print one trace line per executed instruction
    #[arg(short = 't')]
    trace: bool,
    /// S-record files to load before reset
    #[arg(required = true, value_name = "file")]
    files: Vec<PathBuf>,
}

/// The WDM host port, wired to this process's stdin and stdout.
struct StdioHost;

impl HostPort for StdioHost {
    fn serial_rx(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        match io::stdin().read(&mut byte) {
            Ok(1) => byte[0],
            _ => 0,
        }
    }

    fn serial_tx(&mut self, value: u8) {
        let mut stdout = io::stdout();
        stdout.write_all(&[value]).ok();
        stdout.flush().ok();
    }

    fn tx_ready(&self) -> bool {
        true
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            error.print().ok();
            process::exit(1);
        }
    };

    let bus = Bus::new_shared_bus();
    {
        let mut bus = bus.borrow_mut();
        bus.add_ram(RAM_BASE, RAM_SIZE);
        bus.add_rom(ROM_BASE, ROM_SIZE);
    }

    for path in &cli.files {
        match srec::load_srec_file(path, &bus) {
            Ok(summary) => {
                eprintln!(
                    "Loaded {} bytes from {} records in {}",
                    summary.bytes,
                    summary.records,
                    path.display()
                );
            }
            Err(srec::SrecLoadError::IoError(error)) => {
                eprintln!("{} {}: {}", "error:".red().bold(), path.display(), error);
                process::exit(1);
            }
        }
    }

    let mut cpu = Cpu65C816::new(bus);
    cpu.host = Box::new(StdioHost);
    cpu.trace = cli.trace;
    cpu.reset();

    let started = Instant::now();
    let mut next_timer = started + Duration::from_millis(10);
    let mut check_countdown = TIMER_CHECK_INTERVAL;
    while !cpu.is_stopped() {
        cpu.step();

        // The core never consults the clock itself; the driver feeds the
        // 10 ms timer bit into IFR between steps.
        check_countdown -= 1;
        if check_countdown == 0 {
            check_countdown = TIMER_CHECK_INTERVAL;
            let now = Instant::now();
            if now >= next_timer {
                cpu.assert_interrupt(interrupt_bits::TIMER);
                next_timer = now + Duration::from_millis(10);
            }
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    let cycles = cpu.total_cycles;
    eprintln!(
        "{} cycles in {:.3} s, {:.3} MHz effective",
        cycles,
        elapsed,
        cycles as f64 / elapsed.max(f64::EPSILON) / 1e6
    );
}
