use crate::core::registers::Flags;
use crate::errors::CpuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    Cmp,
    And,
    Not,
    Or,
    Xor,
    Shl,
    Shr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutput {
    /// New value for the first operand register.
    Value(u8),
    Flags(Flags),
}

impl AluOp {
    pub fn from_opcode(ir: u8) -> Result<Self, CpuError> {
        let op = match ir {
            0b1010_0000 => AluOp::Add,
            0b1010_0001 => AluOp::Sub,
            0b1010_0010 => AluOp::Mul,
            0b1010_0011 => AluOp::Div,
            0b1010_0100 => AluOp::Mod,
            0b0110_0101 => AluOp::Inc,
            0b0110_0110 => AluOp::Dec,
            0b1010_0111 => AluOp::Cmp,
            0b1010_1000 => AluOp::And,
            0b0110_1001 => AluOp::Not,
            0b1010_1010 => AluOp::Or,
            0b1010_1011 => AluOp::Xor,
            0b1010_1100 => AluOp::Shl,
            0b1010_1101 => AluOp::Shr,
            _ => return Err(CpuError::UnsupportedAluOperation(ir)),
        };
        Ok(op)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
            AluOp::Div => "DIV",
            AluOp::Mod => "MOD",
            AluOp::Inc => "INC",
            AluOp::Dec => "DEC",
            AluOp::Cmp => "CMP",
            AluOp::And => "AND",
            AluOp::Not => "NOT",
            AluOp::Or => "OR",
            AluOp::Xor => "XOR",
            AluOp::Shl => "SHL",
            AluOp::Shr => "SHR",
        }
    }
}

/// Applies `op` to the values of the two operand registers. Unary operations ignore `b`.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput, CpuError> {
    let value = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => a.checked_div(b).ok_or(CpuError::DivisionByZero)?,
        AluOp::Mod => a.checked_rem(b).ok_or(CpuError::DivisionByZero)?,
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        AluOp::Cmp => return Ok(AluOutput::Flags(Flags::from_ordering(a.cmp(&b)))),
        AluOp::And => a & b,
        AluOp::Not => !a,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Shl => a.checked_shl(b as u32).unwrap_or(0),
        AluOp::Shr => a.checked_shr(b as u32).unwrap_or(0),
    };
    Ok(AluOutput::Value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn value(op: AluOp, a: u8, b: u8) -> u8 {
        match execute(op, a, b) {
            Ok(AluOutput::Value(v)) => v,
            other => panic!("expected value from {:?}, got {:?}", op, other),
        }
    }

    #[test]
    fn test_wrapping_arithmetic() {
        assert_eq!(value(AluOp::Add, 8, 9), 17);
        assert_eq!(value(AluOp::Add, 200, 100), 44);
        assert_eq!(value(AluOp::Sub, 3, 5), 254);
        assert_eq!(value(AluOp::Mul, 16, 17), 16);
        assert_eq!(value(AluOp::Inc, 255, 0), 0);
        assert_eq!(value(AluOp::Dec, 0, 0), 255);
    }

    #[test]
    fn test_add_sub_inverse() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a: u8 = rng.gen();
            let b: u8 = rng.gen();
            let sum = value(AluOp::Add, a, b);
            assert_eq!(value(AluOp::Sub, sum, b), a);
        }
    }

    #[test]
    fn test_division() {
        assert_eq!(value(AluOp::Div, 17, 5), 3);
        assert_eq!(value(AluOp::Mod, 17, 5), 2);
        assert_eq!(execute(AluOp::Div, 17, 0), Err(CpuError::DivisionByZero));
        assert_eq!(execute(AluOp::Mod, 17, 0), Err(CpuError::DivisionByZero));
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(value(AluOp::And, 0b1100, 0b1010), 0b1000);
        assert_eq!(value(AluOp::Or, 0b1100, 0b1010), 0b1110);
        assert_eq!(value(AluOp::Xor, 0b1100, 0b1010), 0b0110);
        assert_eq!(value(AluOp::Not, 0b1111_0000, 0), 0b0000_1111);
        assert_eq!(value(AluOp::Shl, 0b0000_0011, 2), 0b0000_1100);
        assert_eq!(value(AluOp::Shr, 0b1100_0000, 6), 0b0000_0011);
        assert_eq!(value(AluOp::Shl, 0xFF, 8), 0);
        assert_eq!(value(AluOp::Shr, 0xFF, 200), 0);
    }

    #[test]
    fn test_compare() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a: u8 = rng.gen();
            let b: u8 = rng.gen();
            let flags = match execute(AluOp::Cmp, a, b) {
                Ok(AluOutput::Flags(f)) => f,
                other => panic!("expected flags, got {:?}", other),
            };
            assert_eq!(flags.equal(), a == b);
            assert_eq!(flags.greater(), a > b);
            assert_eq!(flags.less(), a < b);
        }
    }

    #[test]
    fn test_from_opcode() {
        assert_eq!(AluOp::from_opcode(0b1010_0000), Ok(AluOp::Add));
        assert_eq!(AluOp::from_opcode(0b1010_0111), Ok(AluOp::Cmp));
        assert_eq!(AluOp::from_opcode(0b0110_1001), Ok(AluOp::Not));
        assert_eq!(
            AluOp::from_opcode(0b1010_1111),
            Err(CpuError::UnsupportedAluOperation(0b1010_1111))
        );
    }
}
