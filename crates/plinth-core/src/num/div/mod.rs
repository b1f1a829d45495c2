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

//! # Division–Modulus Convention Families
//!
//! Combined division and modulus under three explicit rounding
//! conventions. Every pair in a family satisfies the exact identity
//! `dividend == divisor * div(dividend, divisor) + modulus(dividend, divisor)`
//! for all non-zero divisors.
//!
//! ## Conventions
//!
//! - **truncated**: quotient rounds toward zero; the modulus takes the
//!   sign of the dividend. This matches the `/` and `%` operators on
//!   Rust's primitive integers.
//! - **floored**: quotient rounds toward negative infinity; the modulus
//!   takes the sign of the divisor.
//! - **Euclidean**: the modulus is always non-negative regardless of
//!   operand signs; the quotient adjusts accordingly.
//!
//! ## Submodules
//!
//! - `int`: Integral forms, generic over `num_traits::PrimInt`. The
//!   panicking functions assert a non-zero divisor; `checked_*` variants
//!   return `Option<T>` instead (`None` on a zero divisor or on the
//!   overflowing `MIN / -1` case).
//! - `float`: Floating-point forms, generic over `num_traits::Float`.
//!   Floating division does not truncate implicitly, so the intermediate
//!   quotient is floored/truncated/adjusted explicitly.
//!
//! ## Motivation
//!
//! The operator convention baked into a language rarely matches every
//! caller's need: calendars and grids want flooring, residue arithmetic
//! wants Euclidean, hardware-faithful code wants truncation. Spelling the
//! convention out at the call site removes a common source of
//! sign-handling bugs.
//!
//! Refer to each submodule for examples and the full function list.

pub mod float;
pub mod int;
