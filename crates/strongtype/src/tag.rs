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

//! # Tags and Tag Families
//!
//! A tag is a zero-sized marker type that discriminates strong values at the
//! type level. Tags are grouped into families: the family plays the role of an
//! enumeration and each tag the role of one of its variants. Neither carries
//! any data, and neither is ever stored inside a strong value.
//!
//! Tags are declared with [`strong_tags!`](crate::strong_tags), which emits an
//! uninhabited family enum plus one unit struct per tag:
//!
//! ```rust
//! use strongtype::{Tag, TagFamily, strong_tags};
//!
//! strong_tags! {
//!     /// Physical quantities.
//!     pub enum Quantity {
//!         /// Length in meters.
//!         Meters,
//!         /// Duration in seconds.
//!         Seconds,
//!     }
//! }
//!
//! assert_eq!(<Meters as Tag>::NAME, "Meters");
//! assert_eq!(<<Seconds as Tag>::Family as TagFamily>::NAME, "Quantity");
//! ```
//!
//! Only declared tags are accepted. An arbitrary type is rejected when a
//! strong value is named with it:
//!
//! ```compile_fail
//! use strongtype::Strong;
//!
//! struct NotATag;
//! type Bad = Strong<NotATag, f64>;
//! let _ = Bad::new(1.0);
//! ```

/// A family of tags, the type-level counterpart of an enumeration.
///
/// Families are uninhabited enums generated by
/// [`strong_tags!`](crate::strong_tags); they exist only so that generic code
/// can be restricted to the tags of one family.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a tag family",
    note = "declare tag families with `strongtype::strong_tags!`"
)]
pub trait TagFamily: 'static {
    /// The name of the family, as written in its declaration.
    const NAME: &'static str;
}

/// A type-level discriminator for strong values.
///
/// # Examples
///
/// ```rust
/// # use strongtype::{Strong, Tag, strong_tags};
///
/// strong_tags! {
///     pub enum Currency { Euro, Dollar }
/// }
///
/// // Accepts any amount whose tag belongs to `Currency`.
/// fn doubled<T>(amount: Strong<T, i64>) -> Strong<T, i64>
/// where
///     T: Tag<Family = Currency>,
/// {
///     amount * 2
/// }
///
/// assert_eq!(doubled(Strong::<Euro, i64>::new(21)).get(), 42);
/// assert_eq!(doubled(Strong::<Dollar, i64>::new(-4)).get(), -8);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a strong value tag",
    label = "this type was not declared as a tag",
    note = "declare tags with `strongtype::strong_tags!`"
)]
pub trait Tag: 'static {
    /// The family this tag belongs to.
    type Family: TagFamily;

    /// The name of the tag, as written in its declaration. Used by `Debug`.
    const NAME: &'static str;
}

/// Declares a tag family and its tags.
///
/// The family becomes an uninhabited `enum` implementing
/// [`TagFamily`](crate::TagFamily); every listed tag becomes a unit struct
/// implementing [`Tag`](crate::Tag) with that family. Attributes (including
/// doc comments) on the family and on each tag are forwarded.
///
/// # Examples
///
/// ```rust
/// use strongtype::{Strong, strong_tags};
///
/// strong_tags! {
///     pub(crate) enum Axis { X, Y, Z }
/// }
///
/// let x = Strong::<X, f32>::new(1.5);
/// let y = Strong::<Y, f32>::new(1.5);
/// assert_eq!(x.get(), y.get());
/// ```
#[macro_export]
macro_rules! strong_tags {
    (
        $(#[$family_meta:meta])*
        $vis:vis enum $family:ident {
            $(
                $(#[$tag_meta:meta])*
                $tag:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$family_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $family {}

        impl $crate::TagFamily for $family {
            const NAME: &'static str = ::core::stringify!($family);
        }

        $(
            $(#[$tag_meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            $vis struct $tag;

            impl $crate::Tag for $tag {
                type Family = $family;
                const NAME: &'static str = ::core::stringify!($tag);
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::strong_tags! {
        enum Fruit { Apples, Pears }
    }

    crate::strong_tags! {
        /// Doc comments are forwarded.
        enum Single {
            /// The only tag.
            Alone,
        }
    }

    fn family_name<T: Tag>() -> &'static str {
        <T::Family as TagFamily>::NAME
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(Apples::NAME, "Apples");
        assert_eq!(Pears::NAME, "Pears");
        assert_eq!(Alone::NAME, "Alone");
    }

    #[test]
    fn test_family_names() {
        assert_eq!(Fruit::NAME, "Fruit");
        assert_eq!(family_name::<Apples>(), "Fruit");
        assert_eq!(family_name::<Pears>(), "Fruit");
        assert_eq!(family_name::<Alone>(), "Single");
    }

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Apples>(), 0);
        assert_eq!(std::mem::size_of::<Fruit>(), 0);
    }
}
