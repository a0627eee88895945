//! Expectations: checkers wired to a reporter
//!
//! # Example
//!
//! ```
//! use testerr::{Expectation, LibtestReporter, actual};
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("not found")]
//! struct NotFound;
//!
//! fn lookup(key: &str) -> Result<u32, NotFound> {
//!     if key == "answer" { Ok(42) } else { Err(NotFound) }
//! }
//!
//! let t = LibtestReporter::new();
//! Expectation::nil().require(&t, actual(&lookup("answer")), &[]);
//! Expectation::is(NotFound).require(&t, actual(&lookup("question")), &[]);
//! t.finish();
//! ```

use std::error::Error;
use std::fmt;

use tracing::debug;

use crate::checker::{Checker, Comparable};
use crate::error::Mismatch;
use crate::reporter::Reporter;

/// A [`Checker`] plus assertions that report to a test framework
///
/// An expectation without a checker (see [`Default`]) behaves like
/// [`Expectation::nil`].
#[derive(Debug, Default)]
pub struct Expectation {
    checker: Option<Checker>,
}

impl Expectation {
    /// Expect no error at all
    #[must_use]
    pub fn nil() -> Self {
        Self::from(Checker::Nil)
    }

    /// Expect `expected`, possibly wrapped by other errors
    pub fn is<E: Comparable>(expected: E) -> Self {
        Self::from(Checker::is(expected))
    }

    /// Expect an error of type `T`, possibly wrapped by other errors
    #[must_use]
    pub fn as_kind<T: Error + 'static>() -> Self {
        Self::from(Checker::as_kind::<T>())
    }

    /// The checker backing this expectation, if one was set
    #[must_use]
    pub fn checker(&self) -> Option<&Checker> {
        self.checker.as_ref()
    }

    /// Check `actual` without reporting anything
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] if `actual` is not in the expected state.
    pub fn check(&self, actual: Option<&(dyn Error + 'static)>) -> Result<(), Mismatch> {
        match &self.checker {
            Some(checker) => checker.check(actual),
            None => Checker::Nil.check(actual),
        }
    }

    /// Fail the test if `actual` isn't what was expected
    ///
    /// The test keeps running after a failure. `extra` values are logged
    /// after the mismatch, joined by spaces; see [`log_extra`]. Returns
    /// whether the check passed.
    #[track_caller]
    pub fn assert<R>(
        &self,
        t: &R,
        actual: Option<&(dyn Error + 'static)>,
        extra: &[&dyn fmt::Display],
    ) -> bool
    where
        R: Reporter + ?Sized,
    {
        t.helper();
        match self.check(actual) {
            Ok(()) => true,
            Err(mismatch) => {
                report(t, &mismatch);
                log_extra(t, extra);
                t.fail();
                false
            }
        }
    }

    /// Like [`assert`](Self::assert), logging a formatted message on failure
    #[track_caller]
    pub fn assertf<R>(
        &self,
        t: &R,
        actual: Option<&(dyn Error + 'static)>,
        args: fmt::Arguments<'_>,
    ) -> bool
    where
        R: Reporter + ?Sized,
    {
        t.helper();
        match self.check(actual) {
            Ok(()) => true,
            Err(mismatch) => {
                report(t, &mismatch);
                t.log_fmt(args);
                t.fail();
                false
            }
        }
    }

    /// Fail and stop the test if `actual` isn't what was expected
    ///
    /// On failure this ends with [`Reporter::fail_now`], which never
    /// returns, so no later assertion in the test is evaluated.
    #[track_caller]
    pub fn require<R>(
        &self,
        t: &R,
        actual: Option<&(dyn Error + 'static)>,
        extra: &[&dyn fmt::Display],
    ) where
        R: Reporter + ?Sized,
    {
        t.helper();
        if let Err(mismatch) = self.check(actual) {
            report(t, &mismatch);
            log_extra(t, extra);
            t.fail_now();
        }
    }

    /// Like [`require`](Self::require), logging a formatted message on failure
    #[track_caller]
    pub fn requiref<R>(
        &self,
        t: &R,
        actual: Option<&(dyn Error + 'static)>,
        args: fmt::Arguments<'_>,
    ) where
        R: Reporter + ?Sized,
    {
        t.helper();
        if let Err(mismatch) = self.check(actual) {
            report(t, &mismatch);
            t.log_fmt(args);
            t.fail_now();
        }
    }
}

impl From<Checker> for Expectation {
    fn from(checker: Checker) -> Self {
        Self {
            checker: Some(checker),
        }
    }
}

/// Shorthand for [`Expectation::nil`]
#[must_use]
pub fn nil() -> Expectation {
    Expectation::nil()
}

/// Shorthand for [`Expectation::is`]
pub fn is<E: Comparable>(expected: E) -> Expectation {
    Expectation::is(expected)
}

/// Shorthand for [`Expectation::as_kind`]
#[must_use]
pub fn as_kind<T: Error + 'static>() -> Expectation {
    Expectation::as_kind::<T>()
}

/// Log caller-supplied values as a single line
///
/// Nothing is logged for an empty slice. Format strings are handled by
/// [`assert_error!`](crate::assert_error) and
/// [`require_error!`](crate::require_error) at compile time.
pub fn log_extra<R>(t: &R, extra: &[&dyn fmt::Display])
where
    R: Reporter + ?Sized,
{
    t.helper();
    if extra.is_empty() {
        return;
    }
    let line = extra
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    t.log(&line);
}

fn report<R>(t: &R, mismatch: &Mismatch)
where
    R: Reporter + ?Sized,
{
    debug!(kind = %mismatch.kind(), "error assertion failed: {mismatch}");
    t.log(&mismatch.to_string());
}
