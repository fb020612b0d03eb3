use std::io::BufRead;
use std::str::FromStr;

use crate::ReadError;

pub struct InputReader<R: BufRead> {
    reader: R,
    s: String,
    line: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            s: String::new(),
            line: 0,
        }
    }

    /// 1-based number of the last line handed out, blank lines included
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next non-blank line split into values, `None` once the input is exhausted.
    pub fn ints_from_line<T: FromStr>(&mut self) -> Result<Option<Vec<T>>, ReadError> {
        loop {
            self.s.clear();
            if self.reader.read_line(&mut self.s)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            if self.s.trim().is_empty() {
                continue;
            }

            let line = self.line;
            let res = self
                .s
                .split_whitespace()
                .map(|token| {
                    T::from_str(token).map_err(|_| ReadError::Parse {
                        line,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            return Ok(Some(res));
        }
    }
}

pub trait SliceToTuple<U: Copy> {
    fn tuple_6(&self) -> Option<(U, U, U, U, U, U)>;
}

impl<T, U> SliceToTuple<U> for T
where
    T: AsRef<[U]> + ?Sized,
    U: Copy,
{
    fn tuple_6(&self) -> Option<(U, U, U, U, U, U)> {
        match self.as_ref() {
            [a, b, c, d, e, f] => Some((*a, *b, *c, *d, *e, *f)),
            _ => None,
        }
    }
}
