pub const RAM_BYTES: usize = 256;
pub const REG_COUNT: usize = 8;
pub const STACK_START: u8 = 0xF4;
pub const MAX_OPERANDS: usize = 2;

// Opcode layout: AABCDDDD
pub const OPERAND_COUNT_MASK: u8 = 0b1100_0000;
pub const OPERAND_COUNT_SHIFT: u8 = 6;
pub const ALU_MASK: u8 = 0b0010_0000;

pub const FLAG_EQUAL: u8 = 0b0000_0001;
pub const FLAG_GREATER: u8 = 0b0000_0010;
pub const FLAG_LESS: u8 = 0b0000_0100;

pub const LITERAL_BITS: usize = 8;
pub const COMMENT_CHAR: char = '#';
