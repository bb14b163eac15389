//! # numerus-scan
//!
//! A small single-pass cursor over text, shared by the fraction and vector
//! parsers.
//!
//! The scanner behaves like formatted stream extraction: number reads skip
//! leading whitespace, character checks do not, and a failed read leaves the
//! cursor where it was before the call.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;

pub use error::{ScanError, ScanErrorKind};

use std::str::FromStr;

use log::trace;

/// Cursor over a borrowed string.
///
/// The cursor only ever advances over ASCII bytes, so [`Scanner::rest`] is
/// always a valid `&str`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `src`.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread part of the input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Returns true if the whole input has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The next byte, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Advances past any ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consumes `byte` if it is the very next byte. Whitespace is not skipped.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skips whitespace and consumes `byte`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanErrorKind::Expected`] if the next non-whitespace byte is
    /// not `byte`. The cursor is not moved in that case.
    pub fn expect(&mut self, byte: u8) -> Result<(), ScanError> {
        let start = self.pos;
        self.skip_whitespace();

        if self.eat(byte) {
            Ok(())
        } else {
            let position = self.pos;
            self.pos = start;
            trace!("expected {:?} at byte {position}", char::from(byte));
            Err(ScanError::new(ScanErrorKind::Expected(char::from(byte)), position))
        }
    }

    /// Reads a signed decimal integer after skipping whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ScanErrorKind::MissingNumber`] if no digits follow, or
    /// [`ScanErrorKind::InvalidNumber`] if the digits do not fit in `T`.
    pub fn integer<T: FromStr>(&mut self) -> Result<T, ScanError> {
        let src = self.src;
        let start = self.pos;
        self.skip_whitespace();
        let token_start = self.pos;

        self.sign();

        if self.digits() == 0 {
            return Err(self.rewind(start, ScanErrorKind::MissingNumber, token_start));
        }

        let token = &src[token_start..self.pos];
        token.parse::<T>().map_err(|_| {
            self.rewind(start, ScanErrorKind::InvalidNumber(token.to_owned()), token_start)
        })
    }

    /// Reads a floating-point number after skipping whitespace.
    ///
    /// Accepts an optional sign, digits with an optional fractional part and
    /// an optional exponent, or one of the words `inf`, `infinity` and `nan`
    /// in any case. An `e` that is not followed by exponent digits is left
    /// unread.
    ///
    /// # Errors
    ///
    /// Returns [`ScanErrorKind::MissingNumber`] if no number starts here.
    pub fn float(&mut self) -> Result<f64, ScanError> {
        let src = self.src;
        let start = self.pos;
        self.skip_whitespace();
        let token_start = self.pos;

        self.sign();

        if !self.special_word() {
            let mut digits = self.digits();

            if self.eat(b'.') {
                digits += self.digits();
            }

            if digits == 0 {
                return Err(self.rewind(start, ScanErrorKind::MissingNumber, token_start));
            }

            self.exponent();
        }

        let token = &src[token_start..self.pos];
        token.parse::<f64>().map_err(|_| {
            self.rewind(start, ScanErrorKind::InvalidNumber(token.to_owned()), token_start)
        })
    }

    fn rewind(&mut self, start: usize, kind: ScanErrorKind, position: usize) -> ScanError {
        self.pos = start;
        trace!("{kind} at byte {position}");
        ScanError::new(kind, position)
    }

    fn sign(&mut self) {
        if !self.eat(b'-') {
            self.eat(b'+');
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;

        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        self.pos - start
    }

    fn exponent(&mut self) {
        let mark = self.pos;

        if !(self.eat(b'e') || self.eat(b'E')) {
            return;
        }

        self.sign();

        if self.digits() == 0 {
            self.pos = mark;
        }
    }

    fn special_word(&mut self) -> bool {
        // longest first, so `infinity` is not cut at `inf`
        for word in ["infinity", "inf", "nan"] {
            let rest = self.rest().as_bytes();

            if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
                self.pos += word.len();
                return true;
            }
        }

        false
    }
}
