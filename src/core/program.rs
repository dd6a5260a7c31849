use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::consts;
use crate::errors::LoadError;

/// Machine code parsed from the `.ls8` text format.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub buffer: Vec<u8>,
}

impl Program {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::ProgramNotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let program = Self::parse(&source)?;
        log::debug!("loaded {} bytes from {}", program.buffer.len(), path.display());
        Ok(program)
    }

    /// Each line holding an instruction starts with an 8-digit binary literal.
    /// Anything after `#` is a comment; lines not starting with `0` or `1` are skipped.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut data = Program::default();
        for (index, raw_line) in source.lines().enumerate() {
            // Indented literals still count as instructions
            let line = match raw_line.split_once(consts::COMMENT_CHAR) {
                Some((code, _)) => code.trim(),
                None => raw_line.trim(),
            };
            if !line.starts_with(['0', '1']) {
                continue;
            }
            let literal = line.split_whitespace().next().unwrap_or_default();
            if literal.len() != consts::LITERAL_BITS {
                return Err(LoadError::InvalidLiteral {
                    line: index + 1,
                    text: literal.to_string(),
                });
            }
            let byte = u8::from_str_radix(literal, 2).map_err(|_| LoadError::InvalidLiteral {
                line: index + 1,
                text: literal.to_string(),
            })?;
            data.buffer.push(byte);
        }
        if data.buffer.len() > consts::RAM_BYTES {
            return Err(LoadError::ProgramTooLarge(data.buffer.len()));
        }
        Ok(data)
    }
}
