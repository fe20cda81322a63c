// ============================================================================
// Call Timing
// Measure how long a unit of work takes and report it at DEBUG level
// ============================================================================
//
// Every timed call follows the same steps: take an Instant just before the
// work, run it, and on the normal-return path compute the elapsed time and
// emit one record:
//
//     Function <name> took <minutes, 3 decimals> min
//
// A panic, an `Err` from `try_time_it`, or a `ScopedTimer` dropped without
// `finish()` produces no record. Installing a subscriber is up to the caller.
//
// # Usage
//
// ```ignore
// use numeric_utils::utils::{time_it, ScopedTimer, TimedCall};
//
// let total = time_it("sum", || (0..1_000u64).sum::<u64>());
//
// let square = TimedCall::new("square", |x: u64| x * x);
// assert_eq!(square.call(7), 49);
//
// let timer = ScopedTimer::start("load");
// load()?;
// timer.finish();
// ```
// ============================================================================

use std::time::{Duration, Instant};

/// Build the record text for a call named `name` that took `elapsed`.
pub fn format_elapsed(name: &str, elapsed: Duration) -> String {
    format!(
        "Function {} took {:.3} min",
        name,
        elapsed.as_secs_f64() / 60.0
    )
}

fn report(name: &str, elapsed: Duration) {
    tracing::debug!(
        function = name,
        elapsed_ms = elapsed.as_millis() as u64,
        "{}",
        format_elapsed(name, elapsed)
    );
}

/// Timer covering one unit of work.
///
/// `finish()` reports the elapsed time. Dropping the timer without calling
/// it reports nothing, so an early `?` return or an unwinding panic leaves
/// no partial record.
#[derive(Debug)]
#[must_use = "a ScopedTimer reports nothing unless finish() is called"]
pub struct ScopedTimer<'a> {
    name: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    /// Start timing the work called `name`.
    #[inline]
    pub fn start(name: &'a str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Name reported by this timer.
    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Time elapsed since `start`, without reporting.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer, emit the record and return the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        report(self.name, elapsed);
        elapsed
    }
}

/// Run `f`, report how long it took, and return its result unchanged.
///
/// If `f` panics the panic propagates and nothing is reported.
#[inline]
pub fn time_it<R, F>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let timer = ScopedTimer::start(name);
    let ret = f();
    timer.finish();
    ret
}

/// Like [`time_it`] for fallible work: only an `Ok` result is reported.
/// An `Err` is returned unchanged.
#[inline]
pub fn try_time_it<T, E, F>(name: &str, f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let timer = ScopedTimer::start(name);
    let ret = f()?;
    timer.finish();
    Ok(ret)
}

/// A callable paired with the name its timing records are reported under.
///
/// Arguments are passed as a single value; use a tuple for several.
#[derive(Debug, Clone)]
pub struct TimedCall<F> {
    name: String,
    func: F,
}

impl<F> TimedCall<F> {
    /// Wrap `func` under `name`.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    /// Name of the wrapped callable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unwrap the callable.
    pub fn into_inner(self) -> F {
        self.func
    }

    /// Invoke the callable with `args`, timing the call.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        time_it(&self.name, || (self.func)(args))
    }

    /// Invoke a stateful callable with `args`, timing the call.
    pub fn call_mut<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let func = &mut self.func;
        time_it(&self.name, || func(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::capture::capture_events;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use tracing::Level;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(
            format_elapsed("load", Duration::from_secs(90)),
            "Function load took 1.500 min"
        );
        assert_eq!(
            format_elapsed("fast", Duration::from_millis(10)),
            "Function fast took 0.000 min"
        );
        assert_eq!(
            format_elapsed("slow", Duration::from_secs(3600)),
            "Function slow took 60.000 min"
        );
    }

    #[test]
    fn test_time_it_returns_result_and_logs_once() {
        let (value, events) = capture_events(|| time_it("answer", || 42));

        assert_eq!(value, 42);
        assert_eq!(events.len(), 1);
        assert!(events[0].message.starts_with("Function answer took "));
        assert!(events[0].message.ends_with(" min"));
        assert_eq!(events[0].level, Level::DEBUG);
        assert_eq!(events[0].fields["function"], "answer");
        assert!(events[0].fields["elapsed_ms"].parse::<u64>().is_ok());
    }

    #[test]
    fn test_time_it_panic_propagates_without_record() {
        let (result, events) = capture_events(|| {
            catch_unwind(AssertUnwindSafe(|| {
                time_it("boom", || -> u32 { panic!("failure inside timed call") })
            }))
        });

        assert!(result.is_err());
        assert!(events.is_empty());
    }

    #[test]
    fn test_try_time_it() {
        let (ok, events) = capture_events(|| try_time_it("ok", || Ok::<_, String>(7)));
        assert_eq!(ok, Ok(7));
        assert_eq!(events.len(), 1);

        let (err, events) =
            capture_events(|| try_time_it("err", || Err::<u32, _>("bad input".to_string())));
        assert_eq!(err, Err("bad input".to_string()));
        assert!(events.is_empty());
    }

    #[test]
    fn test_scoped_timer_drop_does_not_report() {
        let ((), events) = capture_events(|| {
            let timer = ScopedTimer::start("abandoned");
            assert_eq!(timer.name(), "abandoned");
            drop(timer);
        });
        assert!(events.is_empty());

        let (elapsed, events) = capture_events(|| ScopedTimer::start("done").finish());
        assert!(elapsed < Duration::from_secs(60));
        assert_eq!(events.len(), 1);
        assert!(events[0].message.starts_with("Function done took "));
        assert_eq!(events[0].level, Level::DEBUG);
        assert_eq!(events[0].fields["function"], "done");
        let elapsed_ms: u64 = events[0].fields["elapsed_ms"].parse().unwrap();
        assert_eq!(u128::from(elapsed_ms), elapsed.as_millis());
    }

    #[test]
    fn test_timed_call() {
        let square = TimedCall::new("square", |x: u64| x * x);
        assert_eq!(square.name(), "square");

        let (value, events) = capture_events(|| square.call(7));
        assert_eq!(value, 49);
        assert_eq!(events.len(), 1);
        assert!(events[0].message.starts_with("Function square took "));

        let add = TimedCall::new("add", |(a, b): (i32, i32)| a + b);
        let (sum, events) = capture_events(|| add.call((2, 3)));
        assert_eq!(sum, 5);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_timed_call_mut() {
        let mut calls = 0;
        let mut counter = TimedCall::new("counter", |step: u32| {
            calls += step;
            calls
        });

        let (last, events) = capture_events(|| {
            counter.call_mut(1);
            counter.call_mut(2)
        });
        assert_eq!(last, 3);
        assert_eq!(events.len(), 2);
    }
}
