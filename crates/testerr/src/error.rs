// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for testerr
//!
//! Every [`Mismatch`] reports [`UnexpectedValue`] as its `source()`, so a
//! caller can tell "the assertion machinery rejected this error" apart from
//! any other error by walking the chain:
//!
//! ```
//! use testerr::{Expectation, UnexpectedValue};
//!
//! let mismatch = Expectation::nil()
//!     .check(Some(&std::fmt::Error))
//!     .unwrap_err();
//! assert!(Expectation::is(UnexpectedValue).check(Some(&mismatch)).is_ok());
//! ```

use std::fmt;

use thiserror::Error;

/// Root sentinel shared by every mismatch produced by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("received error does not match expected state")]
pub struct UnexpectedValue;

/// Why an actual error was rejected by a checker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// A non-nil error was required but none was received
    #[error("expected non-nil error but received nil")]
    MissingError {
        /// Root sentinel
        #[source]
        base: UnexpectedValue,
    },

    /// No error was allowed but one was received
    #[error("expected nil error but received non-nil value {actual}")]
    UnexpectedError {
        /// Quoted display text of the received error
        actual: String,
        /// Root sentinel
        #[source]
        base: UnexpectedValue,
    },

    /// The received chain does not contain the expected error
    #[error("{expected} != {actual}")]
    NotMatched {
        /// Debug rendering of the expected error
        expected: String,
        /// Debug rendering of the received error
        actual: String,
        /// Root sentinel
        #[source]
        base: UnexpectedValue,
    },

    /// No entry of the received chain has the required type
    #[error("received error is not convertible to {type_name}: {actual}")]
    NotConvertible {
        /// Short name of the required error type
        type_name: String,
        /// Quoted display text of the received error
        actual: String,
        /// Root sentinel
        #[source]
        base: UnexpectedValue,
    },
}

impl Mismatch {
    pub(crate) fn missing_error() -> Self {
        Self::MissingError {
            base: UnexpectedValue,
        }
    }

    /// Canonical mismatch for an error received where none was allowed
    pub(crate) fn unexpected_error(actual: &(dyn std::error::Error + 'static)) -> Self {
        Self::UnexpectedError {
            actual: quoted(actual),
            base: UnexpectedValue,
        }
    }

    pub(crate) fn not_matched(expected: &dyn fmt::Debug, actual: &dyn fmt::Debug) -> Self {
        Self::NotMatched {
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
            base: UnexpectedValue,
        }
    }

    pub(crate) fn not_convertible(
        type_name: &str,
        actual: &(dyn std::error::Error + 'static),
    ) -> Self {
        Self::NotConvertible {
            type_name: type_name.to_string(),
            actual: quoted(actual),
            base: UnexpectedValue,
        }
    }

    /// The discriminant of this mismatch
    #[must_use]
    pub fn kind(&self) -> MismatchKind {
        match self {
            Self::MissingError { .. } => MismatchKind::MissingError,
            Self::UnexpectedError { .. } => MismatchKind::UnexpectedError,
            Self::NotMatched { .. } => MismatchKind::NotMatched,
            Self::NotConvertible { .. } => MismatchKind::NotConvertible,
        }
    }
}

/// Discriminant of a [`Mismatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchKind {
    /// Nil received where an error was required
    MissingError,
    /// Error received where nil was required
    UnexpectedError,
    /// Expected error not found in the chain
    NotMatched,
    /// Required type not found in the chain
    NotConvertible,
}

impl MismatchKind {
    /// Snake case label, as used in log events
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingError => "missing_error",
            Self::UnexpectedError => "unexpected_error",
            Self::NotMatched => "not_matched",
            Self::NotConvertible => "not_convertible",
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn quoted(err: &(dyn std::error::Error + 'static)) -> String {
    format!("{:?}", err.to_string())
}
