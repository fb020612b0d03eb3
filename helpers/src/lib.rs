pub mod input_reader;
pub mod red;

use std::fmt;

#[derive(Debug)]
pub enum ReadError {
    Io(std::io::Error),
    /// `line` is 1-based, 0 when the source has no notion of lines
    Parse { line: usize, token: String },
    UnexpectedEof,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "io error: {}", e),
            ReadError::Parse { line: 0, token } => write!(f, "can't parse token {:?}", token),
            ReadError::Parse { line, token } => {
                write!(f, "line {}: can't parse token {:?}", line, token)
            }
            ReadError::UnexpectedEof => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Io(e)
    }
}
