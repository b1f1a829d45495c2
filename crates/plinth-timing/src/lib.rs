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

//! # Plinth Timing
//!
//! Lightweight elapsed-time measurement bound to call sites. A timer
//! accumulates min/max/total wall time and a call count for one location
//! in the code, and hands the finished record to a pluggable reporter
//! when it is dropped.
//!
//! ## Modules
//!
//! - `elapsed`: `ElapsedStats` (the accumulator), `ElapsedTimer` (stats
//!   bound to a `{file, line, function}` call site, reporting on drop),
//!   and `TimedScope` (a guard that records the wall time of one scope).
//! - `reporter`: The `ElapsedReporter` trait and the stdout
//!   `ConsoleReporter`.
//!
//! ## Usage
//!
//! ```rust
//! use plinth_timing::{elapsed_timer, TimedScope};
//!
//! fn hot_path() {
//!     let mut timer = elapsed_timer!();
//!     for _ in 0..3 {
//!         let _scope = TimedScope::new(&mut timer);
//!         // measured work
//!     }
//!     assert_eq!(timer.stats().count(), 3);
//! }
//! hot_path();
//! ```

pub mod elapsed;
pub mod reporter;

pub use elapsed::{ElapsedStats, ElapsedTimer, TimedScope};
pub use reporter::{ConsoleReporter, ElapsedReporter};
