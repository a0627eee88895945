// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reporters: where failed assertions are sent
//!
//! [`Reporter`] is the capability injected into
//! [`Expectation::assert`](crate::Expectation::assert) and
//! [`Expectation::require`](crate::Expectation::require). Two implementations
//! ship with the crate:
//!
//! - [`LibtestReporter`] for plain `#[test]` functions
//! - [`Recorder`] for testing assertion helpers built on top of this crate

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::error;

/// The test-framework object that records diagnostics and outcomes
pub trait Reporter {
    /// Mark the calling frame as a helper frame
    ///
    /// Location tracking in Rust is done with `#[track_caller]`, so the
    /// default does nothing.
    fn helper(&self) {}

    /// Record a diagnostic message
    fn log(&self, message: &str);

    /// Record a formatted diagnostic message
    fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(&args.to_string());
    }

    /// Mark the test as failed and keep going
    fn fail(&self);

    /// Mark the test as failed and stop it
    fn fail_now(&self) -> !;
}

/// Unwind payload used to stop a test without a panic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestAborted;

impl TestAborted {
    /// Unwind the current test with a `TestAborted` payload
    ///
    /// Uses [`std::panic::resume_unwind`], so the panic hook is not invoked.
    pub fn raise() -> ! {
        std::panic::resume_unwind(Box::new(TestAborted))
    }

    /// Whether a payload caught by `catch_unwind` is this signal
    ///
    /// Pass the unboxed payload (`&*payload`), not the `Box` itself.
    #[must_use]
    pub fn is_payload(payload: &(dyn Any + Send)) -> bool {
        payload.is::<TestAborted>()
    }
}

/// A single call made on a [`Recorder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// `helper` was called
    Helper,
    /// A message was logged
    Log(String),
    /// `fail` was called
    Fail,
    /// `fail_now` was called
    FailNow,
}

/// Reporter that records every call
///
/// `fail_now` records [`ReportEvent::FailNow`] and then unwinds with
/// [`TestAborted`]; wrap the code under test in `catch_unwind` to observe it.
#[derive(Debug, Default)]
pub struct Recorder {
    events: RefCell<Vec<ReportEvent>>,
}

impl Recorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in call order
    #[must_use]
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.borrow().clone()
    }

    /// All logged messages, in call order
    #[must_use]
    pub fn logs(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Log(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `fail` and `fail_now` calls
    #[must_use]
    pub fn failures(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ReportEvent::Fail | ReportEvent::FailNow))
            .count()
    }

    /// Check if the test was marked failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failures() > 0
    }

    /// Check if the test was stopped
    #[must_use]
    pub fn aborted(&self) -> bool {
        self.events.borrow().contains(&ReportEvent::FailNow)
    }

    fn record(&self, event: ReportEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Reporter for Recorder {
    fn helper(&self) {
        self.record(ReportEvent::Helper);
    }

    fn log(&self, message: &str) {
        self.record(ReportEvent::Log(message.to_string()));
    }

    fn fail(&self) {
        self.record(ReportEvent::Fail);
    }

    fn fail_now(&self) -> ! {
        self.record(ReportEvent::FailNow);
        TestAborted::raise()
    }
}

/// Reporter for `#[test]` functions run by the standard harness
///
/// Logged lines are buffered and emitted as `tracing` events. A failing
/// `fail_now` panics with the buffered lines. After `fail`, the test keeps
/// running and the reporter panics when it is dropped or [`finish`]ed, so
/// several soft assertions can be collected in one run.
///
/// ```should_panic
/// use testerr::{Expectation, LibtestReporter};
///
/// let t = LibtestReporter::new();
/// Expectation::nil().assert(&t, Some(&std::fmt::Error), &[]);
/// Expectation::nil().assert(&t, None, &[]);
/// t.finish();
/// ```
///
/// [`finish`]: LibtestReporter::finish
#[derive(Debug, Default)]
pub struct LibtestReporter {
    logs: RefCell<Vec<String>>,
    failed: Cell<bool>,
    finished: Cell<bool>,
}

impl LibtestReporter {
    /// Create a reporter with no failures
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any assertion has failed so far
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed.get()
    }

    /// Lines logged so far
    #[must_use]
    pub fn logs(&self) -> Vec<String> {
        self.logs.borrow().clone()
    }

    /// Panic if any assertion failed
    #[track_caller]
    pub fn finish(self) {
        self.finished.set(true);
        if self.failed.get() {
            panic!("{}", self.report());
        }
    }

    fn report(&self) -> String {
        let logs = self.logs.borrow();
        if logs.is_empty() {
            "error assertion failed".to_string()
        } else {
            logs.join("\n")
        }
    }
}

impl Reporter for LibtestReporter {
    fn log(&self, message: &str) {
        error!(target: "testerr", "{message}");
        self.logs.borrow_mut().push(message.to_string());
    }

    fn fail(&self) {
        self.failed.set(true);
    }

    #[track_caller]
    fn fail_now(&self) -> ! {
        self.failed.set(true);
        self.finished.set(true);
        panic!("{}", self.report());
    }
}

impl Drop for LibtestReporter {
    fn drop(&mut self) {
        if self.failed.get() && !self.finished.get() && !std::thread::panicking() {
            panic!("{}", self.report());
        }
    }
}
