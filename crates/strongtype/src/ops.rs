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

//! # Arithmetic Operators
//!
//! Operator implementations for `Strong<T, R>`. Every operator forwards to the
//! same operator on `R`, so overflow, rounding and division by zero behave
//! exactly as for the bare primitive.
//!
//! ## Operators
//!
//! - `Strong ⊗ Strong` for `+ - * / %` and their compound forms, both operands
//!   with the same tag and representation.
//! - Scalar scaling by a bare `R`: `Strong * R`, `R * Strong`, `Strong / R`,
//!   `*=` and `/=`. `R / Strong` is not provided, since it is not a scaling.
//! - Unary `-` when `R` has it (signed integers and floats).
//! - `Sum` over owned and borrowed values.
//!
//! ```rust
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! type Length = Strong<Meters, f64>;
//!
//! let a = Length::new(3.0);
//! let b = Length::new(1.5);
//!
//! assert_eq!((a + b).get(), 4.5);
//! assert_eq!((a - b).get(), 1.5);
//! assert_eq!((a * 2.0).get(), 6.0);
//! assert_eq!((2.0 * a).get(), 6.0);
//! assert_eq!((a / 4.0).get(), 0.75);
//! assert_eq!((-a).get(), -3.0);
//!
//! let total: Length = [a, b, b].into_iter().sum();
//! assert_eq!(total.get(), 6.0);
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! // Dividing a bare scalar by a strong value is not a scaling.
//! let _ = 1.0 / Strong::<Meters, f64>::new(2.0);
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! // Adding a bare scalar would silently promote it to a length.
//! let _ = Strong::<Meters, f64>::new(2.0) + 1.0;
//! ```

use crate::{strong::Strong, tag::Tag};
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};
use strongtype_core::num::repr::Arithmetic;

macro_rules! impl_strong_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $assign_op:tt) => {
        impl<T, R> $trait_name for Strong<T, R>
        where
            T: Tag,
            R: Arithmetic,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.get() $op rhs.get())
            }
        }

        impl<T, R> $assign_trait for Strong<T, R>
        where
            T: Tag,
            R: Arithmetic,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self.get_mut() $assign_op rhs.get();
            }
        }
    };
}

impl_strong_op!(Add, add, AddAssign, add_assign, +, +=);
impl_strong_op!(Sub, sub, SubAssign, sub_assign, -, -=);
impl_strong_op!(Mul, mul, MulAssign, mul_assign, *, *=);
impl_strong_op!(Div, div, DivAssign, div_assign, /, /=);
impl_strong_op!(Rem, rem, RemAssign, rem_assign, %, %=);

macro_rules! impl_scalar_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $assign_op:tt) => {
        impl<T, R> $trait_name<R> for Strong<T, R>
        where
            T: Tag,
            R: Arithmetic,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: R) -> Self::Output {
                Self::new(self.get() $op rhs)
            }
        }

        impl<T, R> $assign_trait<R> for Strong<T, R>
        where
            T: Tag,
            R: Arithmetic,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: R) {
                *self.get_mut() $assign_op rhs;
            }
        }
    };
}

impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *, *=);
impl_scalar_op!(Div, div, DivAssign, div_assign, /, /=);

// `R * Strong` has to name each primitive: a blanket `impl Mul<Strong<T, R>> for R`
// would leave `R` uncovered.
macro_rules! impl_commuted_scale {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<T> Mul<Strong<T, $t>> for $t
            where
                T: Tag,
            {
                type Output = Strong<T, $t>;

                #[inline(always)]
                fn mul(self, rhs: Strong<T, $t>) -> Self::Output {
                    Strong::new(rhs.get() * self)
                }
            }
        )+
    };
}

impl_commuted_scale!(i8, i16, i32, i64, i128, isize);
impl_commuted_scale!(u8, u16, u32, u64, u128, usize);
impl_commuted_scale!(f32, f64);

impl<T, R> Neg for Strong<T, R>
where
    T: Tag,
    R: Arithmetic + Neg<Output = R>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.get())
    }
}

impl<T, R> Sum for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(R::zero()), |acc, x| acc + x)
    }
}

impl<'a, T, R> Sum<&'a Strong<T, R>> for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::new(R::zero()), |acc, x| acc + *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    crate::strong_tags! {
        enum Quantity { Meters, Items }
    }

    type Length = Strong<Meters, f64>;
    type Count = Strong<Items, i32>;
    type Stock = Strong<Items, u8>;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_arithmetic_ops() {
        let a = Count::new(17);
        let b = Count::new(5);

        assert_eq!((a + b).get(), 22);
        assert_eq!((a - b).get(), 12);
        assert_eq!((a * b).get(), 85);
        assert_eq!((a / b).get(), 3);
        assert_eq!((a % b).get(), 2);
        assert_eq!((-a).get(), -17);
    }

    #[test]
    fn test_assignment_ops() {
        let mut c = Count::new(10);

        c += Count::new(5);
        assert_eq!(c.get(), 15);

        c -= Count::new(5);
        assert_eq!(c.get(), 10);

        c *= Count::new(2);
        assert_eq!(c.get(), 20);

        c /= Count::new(4);
        assert_eq!(c.get(), 5);

        c %= Count::new(2);
        assert_eq!(c.get(), 1);
    }

    #[test]
    fn test_float_homomorphism() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let a: f64 = rng.random_range(-1.0e3..1.0e3);
            let b: f64 = rng.random_range(-1.0e3..1.0e3);
            let (sa, sb) = (Length::new(a), Length::new(b));

            assert_eq!((sa + sb).get().to_bits(), (a + b).to_bits());
            assert_eq!((sa - sb).get().to_bits(), (a - b).to_bits());
            assert_eq!((sa * sb).get().to_bits(), (a * b).to_bits());
            assert_eq!((sa / sb).get().to_bits(), (a / b).to_bits());

            let mut acc = sa;
            let mut raw = a;
            acc += sb;
            raw += b;
            acc *= sb;
            raw *= b;
            acc -= sb;
            raw -= b;
            acc /= sb;
            raw /= b;
            assert_eq!(acc.get().to_bits(), raw.to_bits());
        }
    }

    #[test]
    fn test_integer_homomorphism() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let a: i32 = rng.random_range(-10_000..10_000);
            let b: i32 = rng.random_range(1..10_000);
            let (sa, sb) = (Count::new(a), Count::new(b));

            assert_eq!((sa + sb).get(), a + b);
            assert_eq!((sa - sb).get(), a - b);
            assert_eq!((sa * sb).get(), a * b);
            assert_eq!((sa / sb).get(), a / b);
            assert_eq!((sa % sb).get(), a % b);
        }
    }

    #[test]
    fn test_scalar_scaling() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let a: f64 = rng.random_range(-1.0e3..1.0e3);
            let k: f64 = rng.random_range(-10.0..10.0);
            let s = Length::new(a);

            assert_eq!((s * k).get().to_bits(), (a * k).to_bits());
            assert_eq!((k * s).get().to_bits(), (a * k).to_bits());
            assert_eq!((s / k).get().to_bits(), (a / k).to_bits());
        }

        let mut c = Count::new(6);
        c *= 7;
        assert_eq!(c.get(), 42);
        c /= 4;
        assert_eq!(c.get(), 10);
        assert_eq!((3 * c).get(), 30);
    }

    #[test]
    fn test_float_division_by_zero_follows_ieee() {
        assert_eq!((Length::new(1.0) / 0.0).get(), f64::INFINITY);
        assert_eq!((Length::new(-1.0) / Length::new(0.0)).get(), f64::NEG_INFINITY);
        assert!((Length::new(0.0) / 0.0).get().is_nan());
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_integer_division_by_zero_panics_like_primitive() {
        let zero = std::hint::black_box(0);
        let _ = Count::new(1) / zero;
    }

    #[test]
    fn test_unsigned_boundaries() {
        let s = Stock::new(u8::MAX - 5);
        assert_eq!((s + Stock::new(5)).get(), u8::MAX);
        assert_eq!((Stock::new(5) - Stock::new(5)).get(), 0);
        assert_eq!((Stock::new(200) / 3).get(), 66);
    }

    #[test]
    fn test_sum() {
        let values = [Count::new(1), Count::new(-2), Count::new(40)];
        let owned: Count = values.into_iter().sum();
        let borrowed: Count = values.iter().sum();
        assert_eq!(owned.get(), 39);
        assert_eq!(borrowed, owned);

        let empty: Length = std::iter::empty::<Length>().sum();
        assert_eq!(empty.get(), 0.0);
    }
}
