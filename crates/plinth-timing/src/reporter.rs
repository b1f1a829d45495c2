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

//! # Elapsed-Time Reporters
//!
//! The reporting seam of the timing facility. An
//! [`ElapsedTimer`](crate::elapsed::ElapsedTimer) hands itself to its
//! reporter exactly once, when it is dropped; swapping the reporter
//! redirects where the finished record goes without touching measurement
//! code.

use crate::elapsed::ElapsedTimer;

/// A sink for finished timer records.
///
/// Called once per timer, from the timer's `Drop` impl. Implementations
/// must not panic; a panic here would abort an unwind already in flight.
pub trait ElapsedReporter {
    /// Consumes the finished record of `timer`.
    fn report(&self, timer: &ElapsedTimer);
}

/// A reporter printing one column-formatted line per timer on stdout.
///
/// # Examples
///
/// ```rust
/// use plinth_timing::{ConsoleReporter, ElapsedTimer};
///
/// let mut timer = ElapsedTimer::with_reporter(
///     file!(),
///     line!(),
///     "demo",
///     Box::new(ConsoleReporter),
/// );
/// timer.record(std::time::Duration::from_millis(5));
/// // Prints the record when `timer` drops.
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ElapsedReporter for ConsoleReporter {
    fn report(&self, timer: &ElapsedTimer) {
        let stats = timer.stats();
        println!(
            "{:<40} {:>10} calls | total {:>12.6}s | avg {:>12.9}s | min {:>12.9}s | max {:>12.9}s  ({}:{})",
            timer.function(),
            stats.count(),
            stats.total().as_secs_f64(),
            stats.average().as_secs_f64(),
            stats.min().as_secs_f64(),
            stats.max().as_secs_f64(),
            timer.file(),
            timer.line(),
        );
    }
}
