// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Whitespace-delimited token extraction from text streams.
//!
//! `Scanner` reads any `BufRead` line by line and hands out one token per call,
//! where a token is a maximal run of non-whitespace characters. Leading blanks
//! and line breaks are skipped. Each token is parsed with the target type's
//! `FromStr`, so a value is read exactly the way that type parses itself; the
//! scanner adds no framing of its own.
//!
//! ```rust
//! use strongtype_core::io::Scanner;
//!
//! let mut sc = Scanner::new("  3   -7\n\n 2.5 ".as_bytes());
//! assert_eq!(sc.next::<u8>().unwrap(), 3);
//! assert_eq!(sc.next::<i32>().unwrap(), -7);
//! assert_eq!(sc.next::<f64>().unwrap(), 2.5);
//! assert_eq!(sc.try_next::<f64>().unwrap(), None);
//! ```

use std::{
    fmt::{Debug, Display},
    io::BufRead,
    str::FromStr,
};

/// The error type for token extraction.
#[derive(Debug)]
pub enum ScanError<E> {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// A token was read but could not be parsed into the requested type.
    Parse {
        /// The offending token.
        token: String,
        /// The parser's own error.
        source: E,
    },
    /// The input ended before a token was found.
    UnexpectedEof,
}

impl<E> Display for ScanError<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "I/O error: {}", e),
            ScanError::Parse { token, source } => {
                write!(f, "failed to parse token '{}': {}", token, source)
            }
            ScanError::UnexpectedEof => write!(f, "unexpected end of input"),
        }
    }
}

impl<E> std::error::Error for ScanError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            ScanError::Parse { source, .. } => Some(source),
            ScanError::UnexpectedEof => None,
        }
    }
}

impl<E> From<std::io::Error> for ScanError<E> {
    fn from(e: std::io::Error) -> Self {
        ScanError::Io(e)
    }
}

/// A token reader over a buffered text source.
///
/// # Examples
///
/// ```rust
/// # use strongtype_core::io::{ScanError, Scanner};
///
/// let mut sc = Scanner::new("12 twelve".as_bytes());
/// assert_eq!(sc.next::<u32>().unwrap(), 12);
///
/// match sc.next::<u32>() {
///     Err(ScanError::Parse { token, .. }) => assert_eq!(token, "twelve"),
///     other => panic!("expected a parse error, got {:?}", other),
/// }
/// ```
#[derive(Debug)]
pub struct Scanner<B> {
    rdr: B,
    buf: String,
    pos: usize,
}

impl<B> Scanner<B>
where
    B: BufRead,
{
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    pub fn new(rdr: B) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Reads and parses the next token.
    ///
    /// Returns `ScanError::UnexpectedEof` if the input holds no further token.
    pub fn next<V>(&mut self) -> Result<V, ScanError<V::Err>>
    where
        V: FromStr,
    {
        self.try_next::<V>()?.ok_or(ScanError::UnexpectedEof)
    }

    /// Reads and parses the next token, returning `Ok(None)` at the end of input.
    pub fn try_next<V>(&mut self) -> Result<Option<V>, ScanError<V::Err>>
    where
        V: FromStr,
    {
        let Some((start, end)) = self.advance_token()? else {
            return Ok(None);
        };

        let token = &self.buf[start..end];
        match token.parse::<V>() {
            Ok(v) => Ok(Some(v)),
            Err(source) => Err(ScanError::Parse {
                token: token.to_string(),
                source,
            }),
        }
    }

    /// Consumes the scanner and returns the underlying reader.
    ///
    /// Any part of the current line that has not been tokenized yet is lost.
    #[inline]
    pub fn into_inner(self) -> B {
        self.rdr
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data was read, `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Positions the scanner past the next token and returns its byte range in `buf`.
    fn advance_token(&mut self) -> std::io::Result<Option<(usize, usize)>> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let remainder = &self.buf[self.pos..];
            let trimmed = remainder.trim_start();
            self.pos += remainder.len() - trimmed.len();

            // Blank remainder: move on to the next line.
            if trimmed.is_empty() {
                continue;
            }

            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let start = self.pos;
            self.pos += len;

            debug_assert!(self.pos <= self.buf.len());
            return Ok(Some((start, self.pos)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_tokens_across_lines() {
        let input = "1 2\n\n   3\t4\r\n5";
        let mut sc = Scanner::new(input.as_bytes());
        let mut values = Vec::new();
        while let Some(v) = sc.try_next::<i64>().unwrap() {
            values.push(v);
        }
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let mut sc = Scanner::new("".as_bytes());
        assert!(matches!(sc.try_next::<u8>(), Ok(None)));

        let mut sc = Scanner::new(" \n\t\n  ".as_bytes());
        assert!(matches!(sc.next::<u8>(), Err(ScanError::UnexpectedEof)));
    }

    #[test]
    fn test_parse_error_keeps_token() {
        let mut sc = Scanner::new("7 3.5 9".as_bytes());
        assert_eq!(sc.next::<u32>().unwrap(), 7);

        match sc.next::<u32>() {
            Err(ScanError::Parse { token, source }) => {
                assert_eq!(token, "3.5");
                assert_eq!(source, "3.5".parse::<u32>().unwrap_err());
            }
            other => panic!("expected parse error, got {:?}", other),
        }

        // The bad token is consumed; scanning continues after it.
        assert_eq!(sc.next::<u32>().unwrap(), 9);
    }

    #[test]
    fn test_parses_like_from_str() {
        let tokens = ["-0", "1e3", "inf", "NaN", "0.1"];
        let input = tokens.join(" ");
        let mut sc = Scanner::new(input.as_bytes());
        for t in tokens {
            let scanned: f64 = sc.next().unwrap();
            let parsed: f64 = t.parse().unwrap();
            assert_eq!(scanned.to_bits(), parsed.to_bits());
        }
    }

    #[test]
    fn test_non_ascii_whitespace() {
        let mut sc = Scanner::new("4\u{00A0}5\u{2003}6".as_bytes());
        assert_eq!(sc.next::<u8>().unwrap(), 4);
        assert_eq!(sc.next::<u8>().unwrap(), 5);
        assert_eq!(sc.next::<u8>().unwrap(), 6);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn test_io_error_is_reported() {
        let mut sc = Scanner::new(io::BufReader::new(FailingReader));
        match sc.next::<u8>() {
            Err(ScanError::Io(e)) => assert_eq!(e.to_string(), "boom"),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display_and_source() {
        use std::error::Error;

        let err: ScanError<std::num::ParseIntError> = ScanError::Parse {
            token: "x".to_string(),
            source: "x".parse::<i32>().unwrap_err(),
        };
        assert!(err.to_string().starts_with("failed to parse token 'x'"));
        assert!(err.source().is_some());

        let eof: ScanError<std::num::ParseIntError> = ScanError::UnexpectedEof;
        assert_eq!(eof.to_string(), "unexpected end of input");
        assert!(eof.source().is_none());
    }
}
