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

//! # Strong Values (Zero-Cost)
//!
//! `Strong<T, R>` wraps a primitive `R` and tags it with `T` at the type level,
//! so that two quantities sharing a representation (say, a length and a
//! duration, both `f64`) become distinct types. The tag is a phantom: it is
//! never stored, and `Strong<T, R>` is `#[repr(transparent)]` over `R`.
//!
//! ## Highlights
//!
//! - Construction is explicit only: `Strong::new(r)`. There is no `From<R>`
//!   and no `Default`.
//! - Conversion back is explicit only: `get`, `get_mut`, and `From<Strong<T, R>>`
//!   for each primitive `R`.
//! - Equality, ordering and hashing delegate to `R` and never look at the tag.
//! - `StrongValue` exposes the tag and representation as associated types for
//!   generic code; `ReprOf<S>` names the representation directly.
//!
//! ## Usage
//!
//! ```rust
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters, Seconds }
//! }
//!
//! type Length = Strong<Meters, f64>;
//! type Duration = Strong<Seconds, f64>;
//!
//! let mut run = Length::new(400.0);
//! *run.get_mut() += 100.0;
//! assert_eq!(run.get(), 500.0);
//!
//! let lap = Duration::new(61.5);
//! assert_eq!(f64::from(lap), 61.5);
//! ```
//!
//! Values with different tags do not mix:
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters, Seconds }
//! }
//!
//! let length = Strong::<Meters, f64>::new(10.0);
//! let duration = Strong::<Seconds, f64>::new(2.0);
//! let _ = length + duration;
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters, Seconds }
//! }
//!
//! let length = Strong::<Meters, f64>::new(10.0);
//! let duration = Strong::<Seconds, f64>::new(2.0);
//! let _ = length < duration;
//! ```
//!
//! Nor do values with the same tag but a different representation:
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let a = Strong::<Meters, f64>::new(1.0);
//! let b = Strong::<Meters, f32>::new(1.0);
//! let _ = a == b;
//! ```
//!
//! And there is no implicit conversion in either direction:
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let raw: f64 = Strong::<Meters, f64>::new(1.0);
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! let length: Strong<Meters, f64> = 1.0.into();
//! ```
//!
//! ```compile_fail
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     pub enum Quantity { Meters }
//! }
//!
//! // `String` is not an arithmetic primitive.
//! let _ = Strong::<Meters, String>::new(String::new());
//! ```

use crate::tag::Tag;
use std::{cmp::Ordering, hash::Hash, marker::PhantomData};
use strongtype_core::num::repr::Arithmetic;

/// A primitive value of representation `R`, tagged with `T`.
///
/// # Examples
///
/// ```rust
/// # use strongtype::{Strong, strong_tags};
///
/// strong_tags! {
///     pub enum Stock { Apples, Pears }
/// }
///
/// let apples = Strong::<Apples, u32>::new(3);
/// let pears = Strong::<Pears, u32>::new(3);
///
/// assert_eq!(apples.get(), pears.get());
/// assert_eq!(std::mem::size_of_val(&apples), std::mem::size_of::<u32>());
/// ```
#[repr(transparent)]
pub struct Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    value: R,
    _tag: PhantomData<fn() -> T>,
}

impl<T, R> Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    /// Creates a new strong value holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Quantity { Meters } }
    ///
    /// let length = Strong::<Meters, f64>::new(2.5);
    /// assert_eq!(length.get(), 2.5);
    /// ```
    #[inline(always)]
    pub const fn new(value: R) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns the underlying primitive value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Quantity { Meters } }
    ///
    /// let length = Strong::<Meters, i64>::new(-7);
    /// assert_eq!(length.get(), -7);
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> R {
        self.value
    }

    /// Returns a mutable reference to the underlying primitive value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Quantity { Meters } }
    ///
    /// let mut length = Strong::<Meters, u16>::new(1);
    /// *length.get_mut() = 9;
    /// assert_eq!(length.get(), 9);
    /// ```
    #[inline(always)]
    pub const fn get_mut(&mut self) -> &mut R {
        &mut self.value
    }

    /// Adds one unit to the value and returns the new value.
    ///
    /// Overflow behaves as `+= 1` on `R` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Counter { Hits } }
    ///
    /// let mut hits = Strong::<Hits, u8>::new(4);
    /// assert_eq!(hits.pre_increment().get(), 5);
    /// assert_eq!(hits.get(), 5);
    /// ```
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        self.value += R::one();
        *self
    }

    /// Adds one unit to the value and returns the value it held before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Counter { Hits } }
    ///
    /// let mut hits = Strong::<Hits, u8>::new(4);
    /// assert_eq!(hits.post_increment().get(), 4);
    /// assert_eq!(hits.get(), 5);
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.value += R::one();
        prior
    }

    /// Subtracts one unit from the value and returns the new value.
    ///
    /// Underflow behaves as `-= 1` on `R` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Counter { Hits } }
    ///
    /// let mut hits = Strong::<Hits, i32>::new(0);
    /// assert_eq!(hits.pre_decrement().get(), -1);
    /// ```
    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        self.value -= R::one();
        *self
    }

    /// Subtracts one unit from the value and returns the value it held before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongtype::{Strong, strong_tags};
    /// # strong_tags! { pub enum Counter { Hits } }
    ///
    /// let mut hits = Strong::<Hits, f32>::new(0.5);
    /// assert_eq!(hits.post_decrement().get(), 0.5);
    /// assert_eq!(hits.get(), -0.5);
    /// ```
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let prior = *self;
        self.value -= R::one();
        prior
    }
}

impl<T, R> Clone for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
}

impl<T, R> PartialEq for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, R> Eq for Strong<T, R>
where
    T: Tag,
    R: Arithmetic + Eq,
{
}

impl<T, R> PartialOrd for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }

    #[inline(always)]
    fn lt(&self, other: &Self) -> bool {
        self.value < other.value
    }

    #[inline(always)]
    fn le(&self, other: &Self) -> bool {
        self.value <= other.value
    }

    #[inline(always)]
    fn gt(&self, other: &Self) -> bool {
        self.value > other.value
    }

    #[inline(always)]
    fn ge(&self, other: &Self) -> bool {
        self.value >= other.value
    }
}

impl<T, R> Ord for Strong<T, R>
where
    T: Tag,
    R: Arithmetic + Ord,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T, R> Hash for Strong<T, R>
where
    T: Tag,
    R: Arithmetic + Hash,
{
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Generic access to a strong value's tag and representation.
///
/// # Examples
///
/// ```rust
/// # use strongtype::{ReprOf, Strong, StrongValue, strong_tags};
/// # strong_tags! { pub enum Quantity { Meters } }
///
/// fn halve<S: StrongValue>(s: S, two: ReprOf<S>) -> S {
///     S::from_repr(s.to_repr() / two)
/// }
///
/// let length = Strong::<Meters, f64>::new(3.0);
/// assert_eq!(halve(length, 2.0).get(), 1.5);
/// ```
pub trait StrongValue: Copy {
    /// The tag of the value.
    type Tag: Tag;
    /// The primitive the value is stored as.
    type Repr: Arithmetic;

    /// Wraps a primitive.
    fn from_repr(value: Self::Repr) -> Self;

    /// Unwraps the primitive.
    fn to_repr(&self) -> Self::Repr;
}

impl<T, R> StrongValue for Strong<T, R>
where
    T: Tag,
    R: Arithmetic,
{
    type Tag = T;
    type Repr = R;

    #[inline(always)]
    fn from_repr(value: R) -> Self {
        Self::new(value)
    }

    #[inline(always)]
    fn to_repr(&self) -> R {
        self.value
    }
}

/// The representation type of the strong value `S`.
pub type ReprOf<S> = <S as StrongValue>::Repr;

/// The tag of the strong value `S`.
pub type TagOf<S> = <S as StrongValue>::Tag;

macro_rules! impl_from_strong {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<T> From<Strong<T, $t>> for $t
            where
                T: Tag,
            {
                #[inline(always)]
                fn from(value: Strong<T, $t>) -> Self {
                    value.value
                }
            }
        )+
    };
}

impl_from_strong!(i8, i16, i32, i64, i128, isize);
impl_from_strong!(u8, u16, u32, u64, u128, usize);
impl_from_strong!(f32, f64);
