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

//! # Elapsed-Time Accumulation
//!
//! The measurement side of the timing facility.
//!
//! ## Highlights
//!
//! - `ElapsedStats`: min/max/total wall time plus a saturating call
//!   count. Pure data, no clock access.
//! - `ElapsedTimer`: an `ElapsedStats` bound to a `{file, line,
//!   function}` call site and a boxed
//!   [`ElapsedReporter`](crate::reporter::ElapsedReporter). Hands the
//!   finished record to the reporter exactly once, on drop.
//! - `TimedScope`: a guard borrowing a timer; records the wall time
//!   between its construction and its drop.
//! - [`elapsed_timer!`](crate::elapsed_timer) and
//!   [`function_path!`](crate::function_path): capture the call site
//!   without spelling out `file!()`/`line!()` by hand.

use crate::reporter::{ConsoleReporter, ElapsedReporter};
use std::time::{Duration, Instant};

/// Accumulated wall-time statistics for one call site.
///
/// `record` folds one observed duration into the aggregate. The count
/// saturates rather than wrapping, and the minimum is only meaningful
/// once at least one duration has been recorded.
///
/// # Examples
///
/// ```rust
/// use plinth_timing::ElapsedStats;
/// use std::time::Duration;
///
/// let mut stats = ElapsedStats::new();
/// stats.record(Duration::from_millis(4));
/// stats.record(Duration::from_millis(10));
///
/// assert_eq!(stats.count(), 2);
/// assert_eq!(stats.min(), Duration::from_millis(4));
/// assert_eq!(stats.max(), Duration::from_millis(10));
/// assert_eq!(stats.total(), Duration::from_millis(14));
/// assert_eq!(stats.average(), Duration::from_millis(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedStats {
    min: Duration,
    max: Duration,
    total: Duration,
    count: u64,
}

impl ElapsedStats {
    /// Creates an empty aggregate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
            total: Duration::ZERO,
            count: 0,
        }
    }

    /// Folds one observed duration into the aggregate.
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.min = if self.count == 0 {
            elapsed
        } else {
            self.min.min(elapsed)
        };
        self.max = self.max.max(elapsed);
        self.total = self.total.saturating_add(elapsed);
        self.count = self.count.saturating_add(1);
    }

    /// Returns the shortest recorded duration, or zero if the aggregate
    /// is empty.
    #[inline]
    pub const fn min(&self) -> Duration {
        self.min
    }

    /// Returns the longest recorded duration, or zero if the aggregate
    /// is empty.
    #[inline]
    pub const fn max(&self) -> Duration {
        self.max
    }

    /// Returns the sum of all recorded durations.
    #[inline]
    pub const fn total(&self) -> Duration {
        self.total
    }

    /// Returns the number of recorded durations.
    #[inline]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the mean recorded duration, or zero if the aggregate is
    /// empty.
    #[inline]
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.total / u32::try_from(self.count).unwrap_or(u32::MAX)
        }
    }

    /// Resets the aggregate to empty.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for ElapsedStats {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// An [`ElapsedStats`] bound to one call site.
///
/// Created once per instrumented location, usually through
/// [`elapsed_timer!`](crate::elapsed_timer), and fed by
/// [`TimedScope`] guards or direct [`record`](ElapsedTimer::record)
/// calls. When the timer drops with at least one recorded duration, it
/// hands itself to its reporter. Nothing is reported while a panic is
/// unwinding.
///
/// # Examples
///
/// ```rust
/// use plinth_timing::{elapsed_timer, TimedScope};
///
/// let mut timer = elapsed_timer!();
/// {
///     let _scope = TimedScope::new(&mut timer);
///     // measured work
/// }
/// assert_eq!(timer.stats().count(), 1);
/// ```
pub struct ElapsedTimer {
    file: &'static str,
    line: u32,
    function: &'static str,
    stats: ElapsedStats,
    reporter: Box<dyn ElapsedReporter>,
}

impl ElapsedTimer {
    /// Creates a timer for the given call site, reporting to stdout via
    /// [`ConsoleReporter`].
    #[inline]
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self::with_reporter(file, line, function, Box::new(ConsoleReporter))
    }

    /// Creates a timer for the given call site with a custom reporter.
    #[inline]
    pub fn with_reporter(
        file: &'static str,
        line: u32,
        function: &'static str,
        reporter: Box<dyn ElapsedReporter>,
    ) -> Self {
        Self {
            file,
            line,
            function,
            stats: ElapsedStats::new(),
            reporter,
        }
    }

    /// Returns the source file the timer is bound to.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the source line the timer is bound to.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the function path the timer is bound to.
    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the accumulated statistics.
    #[inline]
    pub const fn stats(&self) -> &ElapsedStats {
        &self.stats
    }

    /// Folds one observed duration into the timer's statistics.
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.stats.record(elapsed);
    }

    /// Replaces the reporter the finished record goes to.
    #[inline]
    pub fn set_reporter(&mut self, reporter: Box<dyn ElapsedReporter>) {
        self.reporter = reporter;
    }

    /// Resets the accumulated statistics to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.stats.clear();
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        // Empty timers stay silent, and nothing is reported while an
        // unwind is in flight.
        if self.stats.count() > 0 && !std::thread::panicking() {
            self.reporter.report(self);
        }
    }
}

impl std::fmt::Debug for ElapsedTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElapsedTimer")
            .field("file", &self.file)
            .field("line", &self.line)
            .field("function", &self.function)
            .field("stats", &self.stats)
            .finish()
    }
}

/// A guard recording the wall time of one scope into a borrowed timer.
///
/// The measurement runs from construction to drop. Because the guard
/// borrows the timer mutably, the timer cannot be touched (or dropped)
/// while a scope is still open.
///
/// # Examples
///
/// ```rust
/// use plinth_timing::{elapsed_timer, TimedScope};
///
/// let mut timer = elapsed_timer!();
/// for _ in 0..4 {
///     let _scope = TimedScope::new(&mut timer);
///     // measured work
/// }
/// assert_eq!(timer.stats().count(), 4);
/// ```
#[derive(Debug)]
pub struct TimedScope<'a> {
    timer: &'a mut ElapsedTimer,
    start: Instant,
}

impl<'a> TimedScope<'a> {
    /// Starts measuring; the elapsed time is recorded when the guard
    /// drops.
    #[inline]
    pub fn new(timer: &'a mut ElapsedTimer) -> Self {
        Self {
            timer,
            start: Instant::now(),
        }
    }
}

impl Drop for TimedScope<'_> {
    #[inline]
    fn drop(&mut self) {
        self.timer.record(self.start.elapsed());
    }
}

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// # Examples
///
/// ```rust
/// use plinth_timing::function_path;
///
/// fn sample() -> &'static str {
///     function_path!()
/// }
///
/// assert!(sample().ends_with("sample"));
/// ```
#[macro_export]
macro_rules! function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Expands to an [`ElapsedTimer`] bound to the expansion site.
///
/// With no arguments the timer reports to stdout via
/// [`ConsoleReporter`](crate::reporter::ConsoleReporter); an optional
/// argument supplies a custom reporter.
///
/// # Examples
///
/// ```rust
/// use plinth_timing::{elapsed_timer, ConsoleReporter};
///
/// let quiet = elapsed_timer!();
/// let loud = elapsed_timer!(ConsoleReporter);
/// assert_eq!(quiet.file(), loud.file());
/// ```
#[macro_export]
macro_rules! elapsed_timer {
    () => {
        $crate::elapsed::ElapsedTimer::new(::std::file!(), ::std::line!(), $crate::function_path!())
    };
    ($reporter:expr) => {
        $crate::elapsed::ElapsedTimer::with_reporter(
            ::std::file!(),
            ::std::line!(),
            $crate::function_path!(),
            ::std::boxed::Box::new($reporter),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Captures each reported record for later inspection.
    #[derive(Clone, Default)]
    struct CapturingReporter {
        records: Arc<Mutex<Vec<(String, u64, Duration)>>>,
    }

    impl ElapsedReporter for CapturingReporter {
        fn report(&self, timer: &ElapsedTimer) {
            self.records.lock().unwrap().push((
                timer.function().to_string(),
                timer.stats().count(),
                timer.stats().total(),
            ));
        }
    }

    #[test]
    fn test_stats_record_updates_aggregate() {
        let mut stats = ElapsedStats::new();
        stats.record(Duration::from_millis(6));
        stats.record(Duration::from_millis(2));
        stats.record(Duration::from_millis(10));

        assert_eq!(stats.count(), 3);
        assert_eq!(stats.min(), Duration::from_millis(2));
        assert_eq!(stats.max(), Duration::from_millis(10));
        assert_eq!(stats.total(), Duration::from_millis(18));
        assert_eq!(stats.average(), Duration::from_millis(6));
    }

    #[test]
    fn test_stats_empty_aggregate() {
        let stats = ElapsedStats::new();

        assert_eq!(stats.count(), 0);
        assert_eq!(stats.min(), Duration::ZERO);
        assert_eq!(stats.max(), Duration::ZERO);
        assert_eq!(stats.total(), Duration::ZERO);
        assert_eq!(stats.average(), Duration::ZERO);
    }

    #[test]
    fn test_stats_first_record_sets_min_and_max() {
        let mut stats = ElapsedStats::new();
        stats.record(Duration::from_secs(3));

        assert_eq!(stats.min(), Duration::from_secs(3));
        assert_eq!(stats.max(), Duration::from_secs(3));
        assert_eq!(stats.average(), Duration::from_secs(3));
    }

    #[test]
    fn test_stats_clear() {
        let mut stats = ElapsedStats::new();
        stats.record(Duration::from_secs(1));
        stats.clear();

        assert_eq!(stats, ElapsedStats::new());
    }

    #[test]
    fn test_timer_reports_on_drop() {
        let reporter = CapturingReporter::default();
        let records = Arc::clone(&reporter.records);

        {
            let mut timer =
                ElapsedTimer::with_reporter(file!(), line!(), "timed_job", Box::new(reporter));
            timer.record(Duration::from_millis(3));
            timer.record(Duration::from_millis(5));
        }

        let records = records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "timed_job");
        assert_eq!(records[0].1, 2);
        assert_eq!(records[0].2, Duration::from_millis(8));
    }

    #[test]
    fn test_timer_stays_silent_when_empty() {
        let reporter = CapturingReporter::default();
        let records = Arc::clone(&reporter.records);

        {
            let _timer =
                ElapsedTimer::with_reporter(file!(), line!(), "untouched", Box::new(reporter));
        }

        assert!(records.lock().unwrap().is_empty());
    }

    #[test]
    fn test_timed_scope_records_into_timer() {
        let reporter = CapturingReporter::default();
        let records = Arc::clone(&reporter.records);

        {
            let mut timer =
                ElapsedTimer::with_reporter(file!(), line!(), "scoped", Box::new(reporter));
            for _ in 0..3 {
                let _scope = TimedScope::new(&mut timer);
            }
            assert_eq!(timer.stats().count(), 3);
        }

        assert_eq!(records.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_timer_clear_resets_stats() {
        let mut timer = elapsed_timer!();
        timer.record(Duration::from_millis(1));
        timer.clear();

        assert_eq!(timer.stats().count(), 0);
        // An empty timer produces no report when it drops.
    }

    #[test]
    fn test_elapsed_timer_macro_captures_call_site() {
        let timer = elapsed_timer!();

        assert!(timer.file().ends_with("elapsed.rs"));
        assert!(timer.line() > 0);
        assert!(timer
            .function()
            .ends_with("test_elapsed_timer_macro_captures_call_site"));
    }

    #[test]
    fn test_function_path_macro() {
        fn inner() -> &'static str {
            function_path!()
        }

        assert!(inner().ends_with("inner"));
        assert!(!inner().ends_with("::f"));
    }
}
