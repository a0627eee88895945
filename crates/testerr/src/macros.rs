//! Assertion macros with optional trailing messages
//!
//! Both macros accept the same trailing forms:
//!
//! - nothing: only the mismatch is logged
//! - a single value: logged as-is
//! - a literal followed by arguments: logged as a format string
//! - several values with a non-literal first: logged joined by spaces
//!
//! Any literal in first position followed by more values is taken as the
//! format string, so it must be a string literal. To log values starting
//! with a number, bind the number to a variable first.

/// Fail the test, but keep running, if an error isn't what was expected
///
/// Expands to [`Expectation::assert`](crate::Expectation::assert) or
/// [`Expectation::assertf`](crate::Expectation::assertf) and evaluates to
/// whether the check passed.
///
/// ```
/// use testerr::{Recorder, actual, assert_error};
///
/// let t = Recorder::new();
/// let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
/// assert_error!(testerr::nil(), &t, actual(&result), "writing row {}", 3);
/// assert_eq!(t.logs().last().map(String::as_str), Some("writing row 3"));
/// assert!(t.failed());
/// ```
#[macro_export]
macro_rules! assert_error {
    ($expectation:expr, $t:expr, $actual:expr $(,)?) => {
        $crate::Expectation::assert(&$expectation, $t, $actual, &[])
    };
    ($expectation:expr, $t:expr, $actual:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::Expectation::assertf(
            &$expectation,
            $t,
            $actual,
            ::std::format_args!($fmt, $($arg)+),
        )
    };
    ($expectation:expr, $t:expr, $actual:expr, $($extra:expr),+ $(,)?) => {
        $crate::Expectation::assert(&$expectation, $t, $actual, &[$(&$extra),+])
    };
}

/// Fail and stop the test if an error isn't what was expected
///
/// Expands to [`Expectation::require`](crate::Expectation::require) or
/// [`Expectation::requiref`](crate::Expectation::requiref).
#[macro_export]
macro_rules! require_error {
    ($expectation:expr, $t:expr, $actual:expr $(,)?) => {
        $crate::Expectation::require(&$expectation, $t, $actual, &[])
    };
    ($expectation:expr, $t:expr, $actual:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::Expectation::requiref(
            &$expectation,
            $t,
            $actual,
            ::std::format_args!($fmt, $($arg)+),
        )
    };
    ($expectation:expr, $t:expr, $actual:expr, $($extra:expr),+ $(,)?) => {
        $crate::Expectation::require(&$expectation, $t, $actual, &[$(&$extra),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::reporter::{Recorder, ReportEvent};
    use crate::{Expectation, is, nil};
    use similar_asserts::assert_eq;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("denied")]
    struct Denied;

    #[test]
    fn test_assert_error_no_extra() {
        let t = Recorder::new();
        let passed = assert_error!(nil(), &t, Some(&Denied));
        assert!(!passed);
        assert_eq!(t.logs().len(), 1);
    }

    #[test]
    fn test_assert_error_single_literal_is_plain() {
        let t = Recorder::new();
        assert_error!(is(Denied), &t, None, "100% literal {}");
        assert_eq!(t.logs()[1], "100% literal {}");
    }

    #[test]
    fn test_assert_error_format_string() {
        let t = Recorder::new();
        let user = "root";
        assert_error!(is(Denied), &t, None, "user {} id {}", user, 0);
        assert_eq!(t.logs()[1], "user root id 0");
    }

    #[test]
    fn test_assert_error_values_joined() {
        let t = Recorder::new();
        let attempt = 2;
        assert_error!(is(Denied), &t, None, attempt, "of", 5);
        assert_eq!(t.logs()[1], "2 of 5");
    }

    #[test]
    fn test_assert_error_single_number_literal_is_plain() {
        let t = Recorder::new();
        assert_error!(is(Denied), &t, None, 404);
        assert_eq!(t.logs()[1], "404");
    }

    #[test]
    fn test_assert_error_number_binding_joined() {
        let t = Recorder::new();
        let status = 404;
        assert_error!(is(Denied), &t, None, status, "x");
        assert_eq!(t.logs()[1], "404 x");
    }

    #[test]
    fn test_assert_error_pass_is_silent() {
        let t = Recorder::new();
        let expectation = Expectation::as_kind::<Denied>();
        assert!(assert_error!(expectation, &t, Some(&Denied), "never {}", "logged"));
        assert_eq!(t.events(), vec![ReportEvent::Helper]);
    }

    #[test]
    fn test_require_error_stops() {
        let t = Recorder::new();
        let mut after = false;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            require_error!(nil(), &t, Some(&Denied), "step {}", 1);
            after = true;
        }));
        assert!(outcome.is_err());
        assert!(!after);
        assert_eq!(t.logs()[1], "step 1");
        assert!(t.aborted());
    }

    #[test]
    fn test_require_error_pass() {
        let t = Recorder::new();
        require_error!(nil(), &t, None);
        require_error!(is(Denied), &t, Some(&Denied), "context");
        assert!(!t.failed());
    }
}
