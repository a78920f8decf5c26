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

//! Text formatting and parsing for strong values.
//!
//! `Display`, `LowerExp`, `UpperExp` and `FromStr` forward to the representation
//! type, formatter flags included, so a strong value is written and read exactly
//! like its raw value. `Debug` prefixes the tag name, in the way a tuple newtype
//! would print.
//!
//! ```rust
//! use strongtype::{Strong, strong_tags};
//! use strongtype::io::Scanner;
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! type Length = Strong<Meters, f64>;
//!
//! let len = Length::new(2.5);
//! assert_eq!(format!("{}", len), "2.5");
//! assert_eq!(format!("{:>8.3}", len), format!("{:>8.3}", 2.5));
//! assert_eq!(format!("{:?}", len), "Meters(2.5)");
//!
//! let parsed: Length = "1e3".parse().unwrap();
//! assert_eq!(parsed.get(), 1000.0);
//!
//! let mut sc = Scanner::new("  4.25\n-1".as_bytes());
//! assert_eq!(sc.next::<Length>().unwrap(), Length::new(4.25));
//! assert_eq!(sc.next::<Length>().unwrap(), Length::new(-1.0));
//! ```

use crate::{strong::Strong, tag::Tag};
use std::{
    fmt::{Debug, Display, Formatter, LowerExp, Result, UpperExp},
    str::FromStr,
};
use strongtype_core::num::repr::Arithmetic;

impl<T, R> Debug for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple(T::NAME).field(&self.get()).finish()
    }
}

impl<T, R> Display for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.get(), f)
    }
}

impl<T, R> LowerExp for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerExp::fmt(&self.get(), f)
    }
}

impl<T, R> UpperExp for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        UpperExp::fmt(&self.get(), f)
    }
}

impl<T, R> FromStr for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    type Err = R::Err;

    #[inline]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<R>().map(Self::new)
    }
}
