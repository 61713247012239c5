//! Token sources for exercise input.
//!
//! Tokens are separated by whitespace, commas, or both, so `1,2, 3` and
//! `1 2 3` read the same.
//!
//! ```
//! use input::{OnceSource, Readable};
//!
//! let mut src = OnceSource::from("3\n1, 5 2");
//! let n = usize::read(&mut src).unwrap();
//! let a = src.read_n::<i64>(n).unwrap();
//! assert_eq!(a, [1, 5, 2]);
//! assert!(src.is_exhausted());
//! ```

use std::any::type_name;
use std::io::BufRead;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("unexpected end of input")]
    Exhausted,
    #[error("cannot read `{token}` as `{ty}`: {reason}")]
    Parse { token: String, ty: &'static str, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub trait Source {
    fn next_token(&mut self) -> Option<String>;
}

impl<S: Source + ?Sized> Source for &'_ mut S {
    fn next_token(&mut self) -> Option<String> { (**self).next_token() }
}

/// Reads the whole input up front and hands out its tokens.
pub struct OnceSource {
    tokens: std::vec::IntoIter<String>,
}

impl OnceSource {
    pub fn new<R: BufRead>(mut source: R) -> Result<Self, ReadError> {
        let mut context = String::new();
        source.read_to_string(&mut context)?;
        Ok(Self::from(context.as_str()))
    }

    pub fn is_exhausted(&self) -> bool { self.tokens.as_slice().is_empty() }

    pub fn read_n<T: Readable>(
        &mut self,
        n: usize,
    ) -> Result<Vec<T::Output>, ReadError> {
        (0..n).map(|_| T::read(self)).collect()
    }

    /// Reads every remaining token.
    pub fn read_rest<T: Readable>(&mut self) -> Result<Vec<T::Output>, ReadError> {
        let n = self.tokens.len();
        self.read_n::<T>(n)
    }
}

impl From<&str> for OnceSource {
    fn from(s: &str) -> Self {
        let tokens: Vec<_> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_owned())
            .collect();
        Self { tokens: tokens.into_iter() }
    }
}

impl Source for OnceSource {
    fn next_token(&mut self) -> Option<String> { self.tokens.next() }
}

pub trait Readable {
    type Output;
    fn read<S: Source>(source: &mut S) -> Result<Self::Output, ReadError>;
}

impl<T: FromStr> Readable for T
where
    T::Err: std::fmt::Display,
{
    type Output = T;
    fn read<S: Source>(source: &mut S) -> Result<T, ReadError> {
        let token = source.next_token().ok_or(ReadError::Exhausted)?;
        token.parse().map_err(|e: T::Err| ReadError::Parse {
            reason: e.to_string(),
            ty: type_name::<T>(),
            token,
        })
    }
}

/// Parses a whole string as a list of `T`.
pub fn parse_list<T: Readable>(s: &str) -> Result<Vec<T::Output>, ReadError> {
    OnceSource::from(s).read_rest::<T>()
}
