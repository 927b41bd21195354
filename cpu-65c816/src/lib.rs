// Clippy rules to disable.
#![allow(clippy::new_without_default)]

pub mod bus;
pub mod constants;
pub mod cpu_65c816;
pub mod host;
pub mod opcodes;
pub mod trace;
