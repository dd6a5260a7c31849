use crate::consts;

/// Splits an opcode into (operand count, is ALU).
pub fn opcode_split(ir: u8) -> (u8, bool) {
    (
        (ir & consts::OPERAND_COUNT_MASK) >> consts::OPERAND_COUNT_SHIFT,
        ir & consts::ALU_MASK != 0,
    )
}

pub fn bounds_check(address: usize, size: usize) -> bool {
    address < size
}
