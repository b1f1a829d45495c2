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

//! # Owning Pointers with Value Semantics
//!
//! A smart pointer that owns a heap value and copies it by *deep clone*
//! rather than by aliasing. Where `Rc` shares and `Box` refuses to clone
//! trait objects, `DeepPtr<T>` reproduces the owned value's concrete
//! runtime type on every copy, even when the pointer itself is declared
//! against an interface (`DeepPtr<dyn Trait>`).
//!
//! ## Submodules
//!
//! - `deep`: The `CloneBoxed<T>` cloning capability, the `deep_cloneable!`
//!   macro that wires the capability up for a trait-object interface, and
//!   `DeepPtr<T>` itself with its equality, reset, and swap operations.
//!
//! ## Motivation
//!
//! Polymorphic members with value semantics are a recurring need: a struct
//! that owns "some shape" and wants plain `Clone`/`PartialEq` behavior
//! without sharing mutable state between copies. Packaging the
//! clone-through-interface pattern once keeps every use site free of
//! hand-rolled boxed-clone boilerplate.
//!
//! Refer to the `deep` module for detailed APIs and examples.

pub mod deep;

pub use deep::{CloneBoxed, DeepPtr};
