// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! testerr: assert that errors have the expected shape
//!
//! This library crate checks an error returned by code under test against an
//! expectation and reports mismatches to the running test:
//!
//! - [`Expectation::nil`]: no error at all
//! - [`Expectation::is`]: a specific error value, possibly wrapped
//! - [`Expectation::as_kind`]: any error of a given type, possibly wrapped
//!
//! Wrapping is followed through [`std::error::Error::source`], so context
//! added by intermediate layers does not break the match.
//!
//! # Example
//!
//! ```
//! use testerr::{LibtestReporter, actual, assert_error, require_error};
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("not found")]
//! struct NotFound;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("lookup of {key} failed")]
//! struct LookupFailed {
//!     key: String,
//!     #[source]
//!     source: NotFound,
//! }
//!
//! let result: Result<(), LookupFailed> = Err(LookupFailed {
//!     key: "user:7".to_string(),
//!     source: NotFound,
//! });
//!
//! let t = LibtestReporter::new();
//! require_error!(testerr::is(NotFound), &t, actual(&result));
//! assert_error!(testerr::as_kind::<LookupFailed>(), &t, actual(&result), "key {}", 7);
//! t.finish();
//! ```

#![warn(missing_docs)]

mod macros;

pub mod chain;
pub mod checker;
pub mod error;
pub mod expectation;
pub mod reporter;

pub use chain::{actual, chain, type_name};
pub use checker::{Checker, Comparable, Kind};
pub use error::{Mismatch, MismatchKind, UnexpectedValue};
pub use expectation::{Expectation, as_kind, is, log_extra, nil};
pub use reporter::{LibtestReporter, Recorder, ReportEvent, Reporter, TestAborted};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::chain::actual;
    pub use crate::error::{Mismatch, UnexpectedValue};
    pub use crate::expectation::Expectation;
    pub use crate::reporter::{LibtestReporter, Reporter};
    pub use crate::{assert_error, require_error};
}
