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

//! # Literal Comparisons
//!
//! A strong value can be compared against a bare primitive only when that
//! primitive is a constant: a literal, a `const` item, or any other expression
//! the compiler promotes to `'static`. The comparison is written against a
//! borrow of the constant, in either operand order:
//!
//! ```rust
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! const LIMIT: f64 = 100.0;
//!
//! let len = Strong::<Meters, f64>::new(42.0);
//!
//! assert!(len == &42.0);
//! assert!(len != &0.0);
//! assert!(len < &LIMIT);
//! assert!(&LIMIT > len);
//! assert!(&42.0 >= len);
//! ```
//!
//! A run-time variable of the representation type does not live for `'static`,
//! so comparing against it is rejected. The caller has to either wrap it in the
//! strong type or unwrap the strong value explicitly:
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let len = Strong::<Meters, f64>::new(42.0);
//! let raw = 42.0;
//! assert!(len == &raw);
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let len = Strong::<Meters, f64>::new(42.0);
//! let raw = 42.0;
//! assert!(&raw < len);
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! // Comparing against an owned primitive is not offered at all.
//! let len = Strong::<Meters, f64>::new(42.0);
//! assert!(len == 42.0);
//! ```
//!
//! The same applies to any value computed at run time, even a temporary that
//! is never bound to a name: `&(x * 2.0)` borrows a stack temporary, not a
//! promoted constant, and fails to borrow-check with E0716. Only constant
//! expressions qualify as literals here.
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let len = Strong::<Meters, f64>::new(4.0);
//! let x = 2.0;
//! assert!(len == &(x * 2.0));
//! ```
//!
//! Run-time values are compared by stating which side is raw, either by
//! wrapping the value or by unwrapping the strong one:
//!
//! ```rust
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let len = Strong::<Meters, f64>::new(4.0);
//! let x = 2.0;
//! assert!(len == Strong::new(x * 2.0));
//! assert!(len.get() == x * 2.0);
//! assert!(len < Strong::new(x * 3.0));
//! ```

use crate::{strong::Strong, tag::Tag};
use std::cmp::Ordering;
use strongtype_core::num::repr::Arithmetic;

impl<T, R> PartialEq<&'static R> for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline(always)]
    fn eq(&self, other: &&'static R) -> bool {
        self.get() == **other
    }
}

impl<T, R> PartialOrd<&'static R> for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &&'static R) -> Option<Ordering> {
        self.get().partial_cmp(*other)
    }
}

// The reversed order needs one impl per primitive, with the borrow as `Self`.
macro_rules! impl_reversed_literal_cmp {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<T> PartialEq<Strong<T, $t>> for &'static $t
            where
                T: Tag,
            {
                #[inline(always)]
                fn eq(&self, other: &Strong<T, $t>) -> bool {
                    **self == other.get()
                }
            }

            impl<T> PartialOrd<Strong<T, $t>> for &'static $t
            where
                T: Tag,
            {
                #[inline(always)]
                fn partial_cmp(&self, other: &Strong<T, $t>) -> Option<Ordering> {
                    (**self).partial_cmp(&other.get())
                }
            }
        )+
    };
}

impl_reversed_literal_cmp!(i8, i16, i32, i64, i128, isize);
impl_reversed_literal_cmp!(u8, u16, u32, u64, u128, usize);
impl_reversed_literal_cmp!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    crate::strong_tags! {
        enum Quantity { Meters, Items }
    }

    type Length = Strong<Meters, f64>;
    type Count = Strong<Items, u32>;

    const FIVE: u32 = 5;
    static SEVEN: u32 = 7;

    #[test]
    fn test_strong_against_literal() {
        let c = Count::new(5);

        assert!(c == &5);
        assert!(c != &6);
        assert!(c < &6);
        assert!(c <= &5);
        assert!(c > &4);
        assert!(c >= &5);
        assert!(!(c < &5));
        assert!(!(c > &5));
    }

    #[test]
    fn test_literal_against_strong() {
        let c = Count::new(5);

        assert!(&5 == c);
        assert!(&6 != c);
        assert!(&4 < c);
        assert!(&5 <= c);
        assert!(&6 > c);
        assert!(&5 >= c);
    }

    #[test]
    fn test_constants_and_statics() {
        let c = Count::new(5);

        assert!(c == &FIVE);
        assert!(&FIVE == c);
        assert!(c < &SEVEN);
        assert!(&SEVEN > c);
    }

    #[test]
    fn test_float_literal_order_matches_primitive() {
        let len = Length::new(-0.0);

        assert!(len == &0.0);
        assert!(&0.0 == len);
        assert!(len <= &0.0);
        assert!(len > &-1.5);
        assert!(len < &f64::INFINITY);
        assert_eq!(len.partial_cmp(&&0.5), Some(Ordering::Less));
    }

    #[test]
    fn test_runtime_values_compare_through_wrap_or_get() {
        let c = Count::new(10);
        let half = std::hint::black_box(5u32);

        assert!(c == Count::new(half * 2));
        assert!(c.get() == half * 2);
        assert!(c > Count::new(half));
        assert!(c.get() >= half + 5);
    }

    #[test]
    fn test_nan_against_literal() {
        let nan = Length::new(f64::NAN);

        assert!(nan != &1.0);
        assert!(!(nan == &1.0));
        assert_eq!(nan.partial_cmp(&&f64::NAN), None);
        assert!(!(nan < &1.0));
        assert!(!(&1.0 >= nan));
        assert_eq!(nan.partial_cmp(&&1.0), None);
    }
}
