//! Scoped output mirroring.
//!
//! A [`Console`] normally passes text through. While a [`LookingGlass`]
//! guard is alive the console reverses everything written to it; dropping
//! the guard restores the previous mode on every exit path, unwinding
//! included.
//!
//! ```
//! use looking_glass::{with_looking_glass, Console};
//!
//! let mut console = Console::new(vec![]);
//! let what = with_looking_glass(&mut console, |console, what| {
//!     console.write_line("Alice, Kitty and Snowdrop")?;
//!     Ok(what.to_owned())
//! })
//! .unwrap();
//! console.write_line("back to normal").unwrap();
//!
//! assert_eq!(what.as_deref(), Some("JABBERWOCKY"));
//! assert_eq!(
//!     String::from_utf8(console.into_inner()).unwrap(),
//!     "pordwonS dna yttiK ,ecilA\nback to normal\n",
//! );
//! ```

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

use tracing::trace;

/// Value handed to the body of [`with_looking_glass`].
pub const JABBERWOCKY: &str = "JABBERWOCKY";

/// Written in plain orientation when the body divides by zero.
pub const DIVIDE_BY_ZERO_NOTICE: &str = "Please DO NOT divide by zero!";

#[derive(Debug, thiserror::Error)]
pub enum GlassError {
    #[error("attempt to divide by zero")]
    DivideByZero,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Plain,
    Mirrored,
}

pub struct Console<W> {
    sink: W,
    mode: Mode,
}

impl<W: Write> Console<W> {
    pub fn new(sink: W) -> Self { Self { sink, mode: Mode::Plain } }
    pub fn mode(&self) -> Mode { self.mode }
    pub fn into_inner(self) -> W { self.sink }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        match self.mode {
            Mode::Plain => self.sink.write_all(text.as_bytes()),
            Mode::Mirrored => {
                let mirrored: String = text.chars().rev().collect();
                self.sink.write_all(mirrored.as_bytes())
            }
        }
    }

    /// The line break is written separately, so mirrored lines still end
    /// with it.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    pub fn looking_glass(&mut self) -> LookingGlass<'_, W> {
        let previous = std::mem::replace(&mut self.mode, Mode::Mirrored);
        trace!(?previous, "looking glass entered");
        LookingGlass { console: self, previous }
    }
}

pub struct LookingGlass<'a, W: Write> {
    console: &'a mut Console<W>,
    previous: Mode,
}

impl<W: Write> Deref for LookingGlass<'_, W> {
    type Target = Console<W>;
    fn deref(&self) -> &Console<W> { &*self.console }
}

impl<W: Write> DerefMut for LookingGlass<'_, W> {
    fn deref_mut(&mut self) -> &mut Console<W> { &mut *self.console }
}

impl<W: Write> Drop for LookingGlass<'_, W> {
    fn drop(&mut self) {
        self.console.mode = self.previous;
        trace!(restored = ?self.previous, "looking glass left");
    }
}

/// Runs `body` behind a looking glass.
///
/// [`GlassError::DivideByZero`] is swallowed: the notice is written once the
/// console is restored and the result is `Ok(None)`. Every other error is
/// returned as is, also after restoring.
pub fn with_looking_glass<W, T, F>(
    console: &mut Console<W>,
    body: F,
) -> Result<Option<T>, GlassError>
where
    W: Write,
    F: FnOnce(&mut Console<W>, &str) -> Result<T, GlassError>,
{
    let res = {
        let mut glass = console.looking_glass();
        body(&mut glass, JABBERWOCKY)
    };
    match res {
        Ok(v) => Ok(Some(v)),
        Err(GlassError::DivideByZero) => {
            console.write_line(DIVIDE_BY_ZERO_NOTICE)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Division that reports a zero divisor as [`GlassError::DivideByZero`].
pub fn checked_div(a: i64, b: i64) -> Result<i64, GlassError> {
    if b == 0 {
        return Err(GlassError::DivideByZero);
    }
    a.checked_div(b)
        .ok_or_else(|| GlassError::Other(format!("{a} / {b} overflows")))
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn guard() {
        let mut console = Console::new(vec![]);
        {
            let mut glass = console.looking_glass();
            assert_eq!(glass.mode(), Mode::Mirrored);
            glass.write_str("abc").unwrap();
            {
                let mut inner = glass.looking_glass();
                inner.write_str("def").unwrap();
            }
            assert_eq!(glass.mode(), Mode::Mirrored);
        }
        assert_eq!(console.mode(), Mode::Plain);
        console.write_str("ghi").unwrap();
        assert_eq!(output(console), "cbafedghi");
    }

    #[test]
    fn divide_by_zero() {
        let mut console = Console::new(vec![]);
        let res = with_looking_glass(&mut console, |console, _| {
            console.write_line("before")?;
            let q = checked_div(1, 0)?;
            console.write_line("unreachable")?;
            Ok(q)
        });
        assert!(matches!(res, Ok(None)));
        assert_eq!(console.mode(), Mode::Plain);
        assert_eq!(output(console), "erofeb\nPlease DO NOT divide by zero!\n");
    }

    #[test]
    fn other_errors() {
        let mut console = Console::new(vec![]);
        let res: Result<Option<()>, _> =
            with_looking_glass(&mut console, |_, what| {
                Err(GlassError::Other(format!("no {what}")))
            });
        match res {
            Err(GlassError::Other(msg)) => assert_eq!(msg, "no JABBERWOCKY"),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(console.mode(), Mode::Plain);
        assert!(output(console).is_empty());
    }

    #[test]
    fn unwinding() {
        let mut console = Console::new(vec![]);
        let res = catch_unwind(AssertUnwindSafe(|| {
            let mut glass = console.looking_glass();
            glass.write_str("xy").unwrap();
            panic!("through the glass");
        }));
        assert!(res.is_err());
        assert_eq!(console.mode(), Mode::Plain);
        assert_eq!(output(console), "yx");
    }

    #[test]
    fn quotient() {
        assert_eq!(checked_div(7, 2).unwrap(), 3);
        assert!(matches!(checked_div(7, 0), Err(GlassError::DivideByZero)));
        assert!(matches!(checked_div(i64::MIN, -1), Err(GlassError::Other(_))));
    }
}
