use crate::consts;
use crate::errors::CpuError;
use std::cmp::Ordering;

/// Comparison result of the last CMP. At most one bit is ever set.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags(pub u8);

impl Flags {
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Equal => Flags(consts::FLAG_EQUAL),
            Ordering::Greater => Flags(consts::FLAG_GREATER),
            Ordering::Less => Flags(consts::FLAG_LESS),
        }
    }

    pub fn equal(self) -> bool {
        self.0 & consts::FLAG_EQUAL != 0
    }

    pub fn greater(self) -> bool {
        self.0 & consts::FLAG_GREATER != 0
    }

    pub fn less(self) -> bool {
        self.0 & consts::FLAG_LESS != 0
    }
}

#[derive(Debug)]
pub struct Registers {
    pub general: [u8; consts::REG_COUNT],
    pub stack_pointer: u8,
    pub flags: Flags,
}

impl Default for Registers {
    fn default() -> Self {
        Registers {
            general: [0; consts::REG_COUNT],
            stack_pointer: consts::STACK_START,
            flags: Flags::default(),
        }
    }
}

impl Registers {
    pub fn get(&self, index: u8) -> Result<u8, CpuError> {
        self.general
            .get(index as usize)
            .copied()
            .ok_or(CpuError::InvalidRegister(index))
    }

    pub fn set(&mut self, index: u8, value: u8) -> Result<(), CpuError> {
        let slot = self
            .general
            .get_mut(index as usize)
            .ok_or(CpuError::InvalidRegister(index))?;
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let regs = Registers::default();
        assert_eq!(regs.general, [0; consts::REG_COUNT]);
        assert_eq!(regs.stack_pointer, 0xF4);
        assert_eq!(regs.flags, Flags(0));
    }

    #[test]
    fn test_register_index() -> Result<(), CpuError> {
        let mut regs = Registers::default();
        regs.set(7, 99)?;
        assert_eq!(regs.get(7)?, 99);
        assert_eq!(regs.get(8), Err(CpuError::InvalidRegister(8)));
        assert_eq!(regs.set(200, 1), Err(CpuError::InvalidRegister(200)));
        Ok(())
    }

    #[test]
    fn test_flags_exclusive() {
        let eq = Flags::from_ordering(Ordering::Equal);
        assert!(eq.equal() && !eq.greater() && !eq.less());
        let gt = Flags::from_ordering(Ordering::Greater);
        assert!(!gt.equal() && gt.greater() && !gt.less());
        let lt = Flags::from_ordering(Ordering::Less);
        assert!(!lt.equal() && !lt.greater() && lt.less());
    }
}
