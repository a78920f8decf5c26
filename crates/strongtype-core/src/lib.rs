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

//! # Strongtype Core
//!
//! Foundations shared by the `strongtype` crates. This crate holds the pieces
//! that do not depend on tags: the bound that admits a primitive as the
//! representation of a strong value, and the token scanner that reads values
//! from text streams.
//!
//! ## Modules
//!
//! - `num`: The sealed `Arithmetic` trait, implemented for every integer and
//!   floating-point primitive and nothing else.
//! - `io`: A whitespace-delimited token `Scanner` over any `BufRead`, with a
//!   descriptive `ScanError`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod io;
pub mod num;
