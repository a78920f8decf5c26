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

//! # Strongtype
//!
//! Zero-overhead strong types over arithmetic primitives. A `Strong<T, R>`
//! stores a single primitive `R` and carries a tag `T` only in its type, so two
//! quantities that share a representation cannot be mixed by accident, while
//! arithmetic, comparison and text I/O still behave exactly as they do for `R`.
//!
//! ## Modules
//!
//! - `tag`: The `Tag` and `TagFamily` traits and the `strong_tags!` macro that
//!   declares a family of zero-sized tags.
//! - `strong`: The `Strong<T, R>` value type, explicit construction and
//!   conversion, increment/decrement, equality, ordering and hashing, and the
//!   `StrongValue` trait for generic code.
//! - `ops`: Same-tag arithmetic, scalar scaling by a bare `R`, negation and
//!   summation.
//! - `literal`: Comparisons against constants of the representation type.
//! - `text`: `Display`, `Debug`, `LowerExp`, `UpperExp` and `FromStr`.
//! - `io`: Re-export of the token `Scanner` from `strongtype_core`.
//!
//! ## Usage
//!
//! ```rust
//! use strongtype::{Strong, strong_tags};
//!
//! strong_tags! {
//!     /// Physical quantities.
//!     pub enum Quantity {
//!         Meters,
//!         Seconds,
//!     }
//! }
//!
//! type Length = Strong<Meters, f64>;
//! type Duration = Strong<Seconds, f64>;
//!
//! let leg = Length::new(1200.0);
//! let route = leg * 3.0 + Length::new(150.0);
//! assert_eq!(route.get(), 3750.0);
//! assert!(route > leg);
//! assert!(route < &5000.0);
//!
//! let split = Duration::new(95.0);
//! assert_eq!(format!("{}", split), "95");
//! ```
//!
//! Refer to each module for detailed APIs and examples.

pub mod literal;
pub mod ops;
pub mod strong;
pub mod tag;
pub mod text;

pub mod io {
    //! Text-stream extraction, re-exported from `strongtype_core::io`.
    pub use strongtype_core::io::{ScanError, Scanner};
}

pub use strong::{ReprOf, Strong, StrongValue, TagOf};
pub use strongtype_core::num::repr::Arithmetic;
pub use tag::{Tag, TagFamily};
