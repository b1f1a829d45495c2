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

//! # Numeric Foundations
//!
//! Pure helper functions and by-value traits over the primitive numeric
//! types. This module collects sign and rounding conventions that are easy
//! to get subtly wrong when written ad hoc at every call site.
//!
//! ## Submodules
//!
//! - `sign`: By-value `SignVal` (−1/0/+1) and `AbsVal` traits implemented
//!   for all integer and float primitives, plus `is_odd`/`is_even` parity
//!   helpers.
//! - `round`: `round_simple` (`floor(x + 0.5)`, floor-biased for negative
//!   operands by design) and `round_half_to_even` (banker's rounding).
//! - `div`: Truncated, floored, and Euclidean division–modulus families
//!   for integral (`div::int`) and floating-point (`div::float`) operands,
//!   each satisfying `n == d * div(n, d) + modulus(n, d)` exactly.
//!
//! ## Motivation
//!
//! Different callers legitimately need different division conventions
//! (hardware truncation, calendar-style flooring, always-non-negative
//! Euclidean residues). Naming each convention explicitly keeps the choice
//! visible in the code instead of buried in operator semantics.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod div;
pub mod round;
pub mod sign;
