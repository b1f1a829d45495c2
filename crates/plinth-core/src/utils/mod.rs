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

//! # Core Utilities
//!
//! Zero-cost, type-safe wrappers that improve correctness in
//! condition-heavy and enum-heavy code.
//!
//! ## Submodules
//!
//! - `boolean`: The `BooleanTest` capability, granting a type
//!   boolean-context usability (a named truthiness predicate plus the `!`
//!   operator via `impl_boolean_not!`) without any other implicit
//!   conversions.
//! - `scoped_enum`: The `EnumFamily` tag trait and `ScopedEnum<E>`
//!   adapter that confine equality to a single enumeration family, allow
//!   explicit conversion to the underlying integer, and make cross-family
//!   comparison a compile-time type error.
//!
//! ## Motivation
//!
//! Truthiness and enumeration comparisons are two places where implicit
//! conversions silently change meaning. These wrappers make both
//! capabilities explicit, named, and impossible to mix across domains.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod boolean;
pub mod scoped_enum;
