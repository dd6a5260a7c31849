use crate::consts;
use crate::errors::CpuError;
use crate::utils;

#[derive(Debug)]
pub struct Ram {
    pub buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        Ram {
            buffer: [0; consts::RAM_BYTES],
        }
    }
}

impl Ram {
    pub fn read(&self, address: u16) -> Result<u8, CpuError> {
        self.peek(address)
            .ok_or(CpuError::OutOfBoundsAccess(address))
    }

    pub fn write(&mut self, address: u16, value: u8) -> Result<(), CpuError> {
        if !utils::bounds_check(address as usize, consts::RAM_BYTES) {
            return Err(CpuError::OutOfBoundsAccess(address));
        }
        self.buffer[address as usize] = value;
        Ok(())
    }

    /// Non-failing read for diagnostics.
    pub fn peek(&self, address: u16) -> Option<u8> {
        self.buffer.get(address as usize).copied()
    }

    /// Copies `bytes` to the start of memory and clears the rest.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), CpuError> {
        if bytes.len() > consts::RAM_BYTES {
            return Err(CpuError::ProgramTooLarge(bytes.len()));
        }
        self.buffer = [0; consts::RAM_BYTES];
        self.buffer[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

/// Raw bytes written by PRN/PRA, waiting to be drained by the console driver.
#[derive(Default, Debug)]
pub struct ConsoleBuffer {
    pub buffer: Vec<u8>,
}

impl ConsoleBuffer {
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() -> Result<(), CpuError> {
        let mut ram = Ram::default();
        assert_eq!(ram.read(0)?, 0);
        ram.write(0xFF, 42)?;
        assert_eq!(ram.read(0xFF)?, 42);
        Ok(())
    }

    #[test]
    fn test_out_of_bounds() {
        let mut ram = Ram::default();
        assert_eq!(ram.read(256), Err(CpuError::OutOfBoundsAccess(256)));
        assert_eq!(ram.write(300, 1), Err(CpuError::OutOfBoundsAccess(300)));
        assert_eq!(ram.peek(256), None);
        assert!(ram.buffer.iter().all(|x| *x == 0));
    }

    #[test]
    fn test_load() -> Result<(), CpuError> {
        let mut ram = Ram::default();
        ram.write(10, 0xAA)?;
        ram.load(&[1, 2, 3])?;
        assert_eq!(ram.buffer[0..4], [1, 2, 3, 0]);
        assert_eq!(ram.read(10)?, 0);

        let too_big = vec![0; consts::RAM_BYTES + 1];
        assert_eq!(
            ram.load(&too_big),
            Err(CpuError::ProgramTooLarge(consts::RAM_BYTES + 1))
        );
        Ok(())
    }

    #[test]
    fn test_console_take() {
        let mut console = ConsoleBuffer::default();
        console.buffer.extend_from_slice(b"17\n");
        assert_eq!(console.take(), b"17\n");
        assert!(console.buffer.is_empty());
    }
}
