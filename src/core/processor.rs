use crate::consts;
use crate::core::alu::{self, AluOutput};
use crate::core::opcode::Instruction;
use crate::core::program::Program;
use crate::core::ram;
use crate::core::registers::Registers;
use crate::errors::CpuError;
use crate::external::trace::{TraceFrame, TraceSink};
use crate::utils;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    FlushOutput,
    Continue,
    Halted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Faulted(CpuError),
}

/// Where the program counter goes after an instruction.
enum Flow {
    Advance,
    Jump(u16),
    Halt,
}

#[derive(Debug)]
pub struct Processor {
    pub registers: Registers,
    pub pc: u16,
    pub ram: ram::Ram,
    pub console: Rc<RefCell<ram::ConsoleBuffer>>,
    state: State,
}

impl Default for Processor {
    fn default() -> Self {
        Processor {
            registers: Registers::default(),
            pc: 0,
            ram: ram::Ram::default(),
            console: Rc::new(RefCell::new(ram::ConsoleBuffer::default())),
            state: State::Running,
        }
    }
}

impl Processor {
    pub fn new(ram_: ram::Ram, console_: ram::ConsoleBuffer) -> Self {
        Processor {
            ram: ram_,
            console: Rc::new(RefCell::new(console_)),
            ..Default::default()
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn init_ram(&mut self, program: &Program) -> Result<(), CpuError> {
        self.ram.load(&program.buffer)
    }

    /// Runs until HLT. The console buffer is left for the caller to drain.
    pub fn run(&mut self) -> Result<(), CpuError> {
        while self.cycle()? != CycleStatus::Halted {}
        Ok(())
    }

    pub fn run_traced(&mut self, sink: &mut dyn TraceSink) -> Result<(), CpuError> {
        loop {
            if self.state == State::Running {
                sink.record(&self.trace_frame());
            }
            if self.cycle()? == CycleStatus::Halted {
                return Ok(());
            }
        }
    }

    pub fn trace_frame(&self) -> TraceFrame {
        TraceFrame {
            pc: self.pc,
            ir: self.ram.peek(self.pc).unwrap_or(0),
            operand_a: self.ram.peek(self.pc.wrapping_add(1)).unwrap_or(0),
            operand_b: self.ram.peek(self.pc.wrapping_add(2)).unwrap_or(0),
            registers: self.registers.general,
        }
    }

    /// Assembly name of the instruction at the PC, or `???` if it does not decode.
    pub fn current_mnemonic(&self) -> &'static str {
        self.ram
            .peek(self.pc)
            .and_then(|ir| Instruction::decode(ir).ok())
            .map_or("???", Instruction::mnemonic)
    }

    pub fn cycle(&mut self) -> Result<CycleStatus, CpuError> {
        match &self.state {
            State::Halted => return Ok(CycleStatus::Halted),
            State::Faulted(err) => return Err(err.clone()),
            State::Running => {}
        }
        match self.step() {
            Ok(status) => {
                if status == CycleStatus::Halted {
                    log::debug!("halted at {:#04X} ({})", self.pc, self.current_mnemonic());
                    self.state = State::Halted;
                }
                Ok(status)
            }
            Err(err) => {
                log::debug!(
                    "fault at {:#04X} ({}): {}",
                    self.pc,
                    self.current_mnemonic(),
                    err
                );
                self.state = State::Faulted(err.clone());
                Err(err)
            }
        }
    }

    fn step(&mut self) -> Result<CycleStatus, CpuError> {
        let ir = self.ram.read(self.pc)?;
        let (operand_count, _) = utils::opcode_split(ir);
        let instruction = Instruction::decode(ir)?;
        log::trace!("{:#04X} {}", self.pc, instruction.mnemonic());

        let mut operand_buf = [0u8; consts::MAX_OPERANDS];
        for (i, slot) in operand_buf
            .iter_mut()
            .enumerate()
            .take(operand_count as usize)
        {
            *slot = self.ram.read(self.pc + 1 + i as u16)?;
        }
        let operands = &operand_buf[..operand_count as usize];
        let mut status = CycleStatus::Continue;

        let flow = match (instruction, operands) {
            (Instruction::Nop, []) => Flow::Advance,
            (Instruction::Hlt, []) => Flow::Halt,

            // Loads and stores
            (Instruction::Ldi, &[reg, value]) => {
                self.registers.set(reg, value)?;
                Flow::Advance
            }
            (Instruction::Ld, &[reg_a, reg_b]) => {
                let address = self.registers.get(reg_b)?;
                let value = self.ram.read(address as u16)?;
                self.registers.set(reg_a, value)?;
                Flow::Advance
            }
            (Instruction::St, &[reg_a, reg_b]) => {
                let address = self.registers.get(reg_a)?;
                let value = self.registers.get(reg_b)?;
                self.ram.write(address as u16, value)?;
                Flow::Advance
            }

            // Console output
            (Instruction::Prn, &[reg]) => {
                let value = self.registers.get(reg)?;
                let mut console = self.console.borrow_mut();
                console.buffer.extend_from_slice(value.to_string().as_bytes());
                console.buffer.push(b'\n');
                status = CycleStatus::FlushOutput;
                Flow::Advance
            }
            (Instruction::Pra, &[reg]) => {
                let value = self.registers.get(reg)?;
                // One raw byte, not a UTF-8 encoded char
                self.console.borrow_mut().buffer.push(value);
                status = CycleStatus::FlushOutput;
                Flow::Advance
            }

            // Stack
            (Instruction::Push, &[reg]) => {
                let value = self.registers.get(reg)?;
                self.push(value)?;
                Flow::Advance
            }
            (Instruction::Pop, &[reg]) => {
                self.registers.get(reg)?;
                let value = self.pop()?;
                self.registers.set(reg, value)?;
                Flow::Advance
            }

            // Subroutines: enter and exit
            (Instruction::Call, &[reg]) => {
                let target = self.registers.get(reg)?;
                let return_address = self.pc + 2;
                let return_byte = u8::try_from(return_address)
                    .map_err(|_| CpuError::OutOfBoundsAccess(return_address))?;
                self.push(return_byte)?;
                Flow::Jump(target as u16)
            }
            (Instruction::Ret, []) => Flow::Jump(self.pop()? as u16),

            // Jumps
            (Instruction::Jmp, &[reg]) => Flow::Jump(self.registers.get(reg)? as u16),
            (Instruction::Jeq, &[reg]) => self.branch(reg, self.registers.flags.equal())?,
            (Instruction::Jne, &[reg]) => self.branch(reg, !self.registers.flags.equal())?,
            (Instruction::Jgt, &[reg]) => self.branch(reg, self.registers.flags.greater())?,
            (Instruction::Jlt, &[reg]) => self.branch(reg, self.registers.flags.less())?,
            (Instruction::Jle, &[reg]) => {
                let flags = self.registers.flags;
                self.branch(reg, flags.less() || flags.equal())?
            }
            (Instruction::Jge, &[reg]) => {
                let flags = self.registers.flags;
                self.branch(reg, flags.greater() || flags.equal())?
            }

            // Arithmetic and logic
            (Instruction::Alu(op), &[reg_a]) => {
                let a = self.registers.get(reg_a)?;
                self.apply_alu(op, reg_a, a, 0)?;
                Flow::Advance
            }
            (Instruction::Alu(op), &[reg_a, reg_b]) => {
                let a = self.registers.get(reg_a)?;
                let b = self.registers.get(reg_b)?;
                self.apply_alu(op, reg_a, a, b)?;
                Flow::Advance
            }

            // Operand count disagrees with the decoded instruction
            (_, _) => return Err(CpuError::UnsupportedOpcode(ir)),
        };

        match flow {
            Flow::Advance => self.pc += 1 + operand_count as u16,
            Flow::Jump(target) => self.pc = target,
            Flow::Halt => return Ok(CycleStatus::Halted),
        }
        Ok(status)
    }

    fn apply_alu(&mut self, op: alu::AluOp, reg_a: u8, a: u8, b: u8) -> Result<(), CpuError> {
        match alu::execute(op, a, b)? {
            AluOutput::Value(value) => self.registers.set(reg_a, value),
            AluOutput::Flags(flags) => {
                self.registers.flags = flags;
                Ok(())
            }
        }
    }

    fn branch(&self, reg: u8, taken: bool) -> Result<Flow, CpuError> {
        let target = self.registers.get(reg)?;
        if taken {
            Ok(Flow::Jump(target as u16))
        } else {
            Ok(Flow::Advance)
        }
    }

    fn push(&mut self, value: u8) -> Result<(), CpuError> {
        let sp = self
            .registers
            .stack_pointer
            .checked_sub(1)
            .ok_or(CpuError::StackOverflow)?;
        self.ram.write(sp as u16, value)?;
        self.registers.stack_pointer = sp;
        Ok(())
    }

    fn pop(&mut self) -> Result<u8, CpuError> {
        let sp = self.registers.stack_pointer;
        let next = sp.checked_add(1).ok_or(CpuError::StackUnderflow)?;
        let value = self.ram.read(sp as u16)?;
        self.registers.stack_pointer = next;
        Ok(value)
    }
}
