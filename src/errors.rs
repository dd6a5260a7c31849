use std::path::PathBuf;
use thiserror::Error;

/// Faults raised while the processor executes a program. All of them are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("unsupported opcode {0:#010b}")]
    UnsupportedOpcode(u8),
    #[error("unsupported ALU operation {0:#010b}")]
    UnsupportedAluOperation(u8),
    #[error("memory access out of bounds at address {0:#06X}")]
    OutOfBoundsAccess(u16),
    #[error("invalid register R{0}")]
    InvalidRegister(u8),
    #[error("stack overflow")]
    StackOverflow,
    #[error("stack underflow")]
    StackUnderflow,
    #[error("program of {0} bytes does not fit in memory")]
    ProgramTooLarge(usize),
}

/// Errors produced while reading an `.ls8` program.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} not found", .0.display())]
    ProgramNotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid binary literal '{text}'")]
    InvalidLiteral { line: usize, text: String },
    #[error("program of {0} bytes does not fit in memory")]
    ProgramTooLarge(usize),
}
