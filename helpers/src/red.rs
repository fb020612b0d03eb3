use std::iter::Iterator;
use std::str::FromStr;

use crate::ReadError;

fn read_token<B>(iter: &mut B) -> Option<Vec<u8>>
where
    B: Iterator<Item = u8>,
{
    #[derive(Copy, Clone)]
    enum State {
        SkipWhiteSpace,
        CopyCharacters,
    }

    let mut state = State::SkipWhiteSpace;

    let mut buf = Vec::with_capacity(20);
    for c in iter {
        match state {
            State::SkipWhiteSpace => {
                if !(c as char).is_ascii_whitespace() {
                    buf.push(c);

                    state = State::CopyCharacters;
                }
            }
            State::CopyCharacters => {
                if (c as char).is_ascii_whitespace() {
                    break;
                }

                buf.push(c);
            }
        }
    }

    match state {
        State::SkipWhiteSpace => None,
        State::CopyCharacters => Some(buf),
    }
}

pub struct Red<B: Iterator<Item = u8>> {
    iter: B,
}

impl<B: Iterator<Item = u8>> Red<B> {
    pub fn new(iter: B) -> Self {
        Self { iter }
    }

    /// `Ok(None)` when only whitespace is left.
    pub fn read<T: FromStr>(&mut self) -> Result<Option<T>, ReadError> {
        let buf = match read_token(&mut self.iter) {
            Some(buf) => buf,
            None => return Ok(None),
        };

        let token = String::from_utf8_lossy(&buf);
        T::from_str(&token)
            .map(Some)
            .map_err(|_| ReadError::Parse {
                line: 0,
                token: token.into_owned(),
            })
    }

    pub fn read_vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>, ReadError> {
        // n comes from the input, don't trust it for the allocation
        let mut res = Vec::with_capacity(n.min(1024));
        for _ in 0..n {
            res.push(self.read::<T>()?.ok_or(ReadError::UnexpectedEof)?);
        }
        Ok(res)
    }
}
