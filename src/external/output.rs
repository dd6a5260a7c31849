use crate::core::ram::ConsoleBuffer;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Drains the processor's console buffer into a writer.
pub struct ConsoleDriver<W: Write> {
    pub screen: W,
    pub console_buffer: Rc<RefCell<ConsoleBuffer>>,
}

impl ConsoleDriver<io::Stdout> {
    pub fn stdout(console_buffer_: &Rc<RefCell<ConsoleBuffer>>) -> Self {
        ConsoleDriver::new(io::stdout(), console_buffer_)
    }
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(screen: W, console_buffer_: &Rc<RefCell<ConsoleBuffer>>) -> Self {
        ConsoleDriver {
            screen,
            console_buffer: Rc::clone(console_buffer_),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        let bytes = self.console_buffer.borrow_mut().take();
        if bytes.is_empty() {
            return Ok(());
        }
        self.screen.write_all(&bytes)?;
        self.screen.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_drains_buffer() -> io::Result<()> {
        let console = Rc::new(RefCell::new(ConsoleBuffer::default()));
        let mut driver = ConsoleDriver::new(Vec::new(), &console);

        console.borrow_mut().buffer.extend_from_slice(b"17\n");
        driver.flush()?;
        console.borrow_mut().buffer.push(b'A');
        driver.flush()?;
        driver.flush()?;

        assert_eq!(driver.screen, b"17\nA");
        assert!(console.borrow().buffer.is_empty());
        Ok(())
    }
}
