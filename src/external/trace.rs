use std::fmt;

/// Processor state just before an instruction executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceFrame {
    pub pc: u16,
    pub ir: u8,
    pub operand_a: u8,
    pub operand_b: u8,
    pub registers: [u8; crate::consts::REG_COUNT],
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.ir, self.operand_a, self.operand_b
        )?;
        for value in self.registers {
            write!(f, " {:02X}", value)?;
        }
        Ok(())
    }
}

pub trait TraceSink {
    fn record(&mut self, frame: &TraceFrame);
}

/// Forwards frames to the `log` facade at trace level.
#[derive(Default, Debug)]
pub struct LogTracer;

impl TraceSink for LogTracer {
    fn record(&mut self, frame: &TraceFrame) {
        log::trace!("{}", frame);
    }
}

impl TraceSink for Vec<TraceFrame> {
    fn record(&mut self, frame: &TraceFrame) {
        self.push(*frame);
    }
}
