use crate::core::alu::AluOp;
use crate::errors::CpuError;
use crate::utils;

/// A decoded opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Nop,
    Hlt,
    Ret,
    Push,
    Pop,
    Prn,
    Pra,
    Call,
    Jmp,
    Jeq,
    Jne,
    Jgt,
    Jlt,
    Jle,
    Jge,
    Ldi,
    Ld,
    St,
    Alu(AluOp),
}

impl Instruction {
    pub fn decode(ir: u8) -> Result<Self, CpuError> {
        let (_, is_alu) = utils::opcode_split(ir);
        if is_alu {
            return AluOp::from_opcode(ir).map(Instruction::Alu);
        }
        let instruction = match ir {
            0b0000_0000 => Instruction::Nop,
            0b0000_0001 => Instruction::Hlt,
            0b0001_0001 => Instruction::Ret,
            0b0100_0101 => Instruction::Push,
            0b0100_0110 => Instruction::Pop,
            0b0100_0111 => Instruction::Prn,
            0b0100_1000 => Instruction::Pra,
            0b0101_0000 => Instruction::Call,
            0b0101_0100 => Instruction::Jmp,
            0b0101_0101 => Instruction::Jeq,
            0b0101_0110 => Instruction::Jne,
            0b0101_0111 => Instruction::Jgt,
            0b0101_1000 => Instruction::Jlt,
            0b0101_1001 => Instruction::Jle,
            0b0101_1010 => Instruction::Jge,
            0b1000_0010 => Instruction::Ldi,
            0b1000_0011 => Instruction::Ld,
            0b1000_0100 => Instruction::St,
            _ => return Err(CpuError::UnsupportedOpcode(ir)),
        };
        Ok(instruction)
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Nop => "NOP",
            Instruction::Hlt => "HLT",
            Instruction::Ret => "RET",
            Instruction::Push => "PUSH",
            Instruction::Pop => "POP",
            Instruction::Prn => "PRN",
            Instruction::Pra => "PRA",
            Instruction::Call => "CALL",
            Instruction::Jmp => "JMP",
            Instruction::Jeq => "JEQ",
            Instruction::Jne => "JNE",
            Instruction::Jgt => "JGT",
            Instruction::Jlt => "JLT",
            Instruction::Jle => "JLE",
            Instruction::Jge => "JGE",
            Instruction::Ldi => "LDI",
            Instruction::Ld => "LD",
            Instruction::St => "ST",
            Instruction::Alu(op) => op.mnemonic(),
        }
    }
}
