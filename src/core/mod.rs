pub mod alu;
pub mod opcode;
pub mod processor;
pub mod program;
pub mod ram;
pub mod registers;
