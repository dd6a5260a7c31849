//! Emulator for the LS-8, an 8-bit register machine with 256 bytes of memory.
//!
//! Load a program with [`Program`](crate::core::program::Program), hand it to a
//! [`Processor`](crate::core::processor::Processor) and call `run`. Output written by `PRN`/`PRA`
//! collects in the processor's console buffer.

pub mod consts;
pub mod core;
pub mod errors;
pub mod external;
mod utils;
