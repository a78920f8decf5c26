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

//! # Representation Bound
//!
//! `Arithmetic` is the bound every representation type of a strong value must
//! satisfy. It is sealed: downstream crates cannot implement it, so the set of
//! admissible representations is exactly the integer and floating-point
//! primitives.
//!
//! ## Highlights
//!
//! - Requires `Num + NumAssignOps` from `num_traits`, giving `+ - * / %`, their
//!   compound forms, and the `zero()`/`one()` constants used for summation and
//!   increments.
//! - Requires `Copy + PartialOrd`, so comparisons follow the primitive's own
//!   (partial) order, NaN included.
//! - Requires `Display + Debug + FromStr`, so text formatting and parsing can be
//!   forwarded verbatim.
//! - A non-primitive representation is rejected at compile time with a
//!   dedicated diagnostic.
//!
//! ## Usage
//!
//! ```rust
//! use strongtype_core::num::repr::Arithmetic;
//!
//! fn triple<R: Arithmetic>(r: R) -> R {
//!     r + r + r
//! }
//!
//! assert_eq!(triple(7u8), 21);
//! assert_eq!(triple(0.5f64), 1.5);
//! ```
//!
//! ```compile_fail
//! use strongtype_core::num::repr::Arithmetic;
//!
//! fn requires_arithmetic<R: Arithmetic>(_: R) {}
//!
//! requires_arithmetic(String::from("12"));
//! ```

use num_traits::{Num, NumAssignOps};
use std::{
    fmt::{Debug, Display, LowerExp, UpperExp},
    str::FromStr,
};

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer or floating-point type usable as the representation of
/// a strong value.
///
/// This trait is sealed and implemented for `i8`, `i16`, `i32`, `i64`, `i128`,
/// `isize`, `u8`, `u16`, `u32`, `u64`, `u128`, `usize`, `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use strongtype_core::num::repr::Arithmetic;
///
/// fn midpoint<R: Arithmetic>(a: R, b: R) -> R {
///     (a + b) / (R::one() + R::one())
/// }
///
/// assert_eq!(midpoint(3.0f32, 4.0), 3.5);
/// assert_eq!(midpoint(3u64, 4), 3);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an arithmetic primitive",
    label = "strong values can only wrap integer or floating-point primitives",
    note = "`Arithmetic` is implemented for `i8`..`i128`, `isize`, `u8`..`u128`, `usize`, `f32` and `f64`"
)]
pub trait Arithmetic:
    sealed::Sealed
    + Num
    + NumAssignOps
    + Copy
    + PartialOrd
    + Debug
    + Display
    + LowerExp
    + UpperExp
    + FromStr
    + Send
    + Sync
    + 'static
{
}

macro_rules! impl_arithmetic {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {}
        )+
    };
}

impl_arithmetic!(i8, i16, i32, i64, i128, isize);
impl_arithmetic!(u8, u16, u32, u64, u128, usize);
impl_arithmetic!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_all<R: Arithmetic>(values: &[R]) -> R {
        values.iter().fold(R::zero(), |acc, &v| acc + v)
    }

    #[test]
    fn test_parse_and_format_available() {
        fn reformat<R: Arithmetic>(s: &str) -> Option<String> {
            s.parse::<R>().ok().map(|r| r.to_string())
        }

        assert_eq!(reformat::<i8>("-12").as_deref(), Some("-12"));
        assert_eq!(reformat::<u128>("+7").as_deref(), Some("7"));
        assert_eq!(reformat::<f64>("2.50").as_deref(), Some("2.5"));
        assert_eq!(reformat::<usize>("-1"), None);
    }

    #[test]
    fn test_generic_arithmetic_matches_primitive() {
        assert_eq!(sum_all(&[1i32, 2, 3, -4]), 2);
        assert_eq!(sum_all(&[250u8, 5]), 255);
        assert_eq!(sum_all(&[0.25f64, 0.5]), 0.75);
    }

    #[test]
    fn test_assign_ops_available() {
        fn bump<R: Arithmetic>(mut r: R) -> R {
            r += R::one();
            r *= R::one() + R::one();
            r
        }

        assert_eq!(bump(4u16), 10);
        assert_eq!(bump(-1i64), 0);
        assert_eq!(bump(0.5f32), 3.0);
    }
}
