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

//! # Plinth Core
//!
//! Foundational numeric, ownership, and typing utilities. This crate
//! consolidates small, independent building blocks focused on correctness
//! and ergonomic, zero-cost APIs.
//!
//! ## Modules
//!
//! - `num`: Sign/absolute-value/parity helpers, rounding conventions
//!   (`round_simple`, `round_half_to_even`), and the three internally
//!   consistent division–modulus convention families (truncated, floored,
//!   Euclidean) in both integral and floating-point forms, with checked
//!   (`Option<T>`) variants for the integral operations.
//! - `ptr`: A value-semantic owning pointer (`DeepPtr<T>`) that copies by
//!   invoking the owned value's own cloning behavior through the
//!   `CloneBoxed<T>` capability, so a pointer declared against an
//!   interface reproduces the concrete runtime type on every copy.
//! - `utils`: The `BooleanTest` truthiness capability (boolean-context
//!   usability without stray conversions) and the `ScopedEnum<E>` adapter
//!   that confines comparison to a single enumeration family while
//!   allowing explicit conversion to the underlying integer.
//!
//! ## Purpose
//!
//! These primitives reduce accidental bugs (sign-convention mix-ups,
//! aliasing where deep copies were intended, cross-family enum
//! comparison) while keeping runtime overhead minimal.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod ptr;
pub mod utils;
