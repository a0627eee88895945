//! Checkers: the three ways an actual error can be matched
//!
//! A [`Checker`] is a pure function of the actual error. It never logs and
//! never touches a reporter; [`crate::Expectation`] layers reporting on top.

use std::any::TypeId;
use std::error::Error;
use std::fmt;

use crate::chain::{chain, short_name};
use crate::error::Mismatch;

/// An expected error value that can recognise itself in an unwrap chain
///
/// Implemented for every `Send + Sync` error type with `PartialEq`, which
/// covers unit-struct sentinels and enum variants alike. A chain entry
/// matches when it has the same concrete type and compares equal.
pub trait Comparable: Error + Send + Sync + 'static {
    /// Whether `candidate` is this error
    fn matches(&self, candidate: &(dyn Error + 'static)) -> bool;
}

impl<E> Comparable for E
where
    E: Error + PartialEq + Send + Sync + 'static,
{
    fn matches(&self, candidate: &(dyn Error + 'static)) -> bool {
        candidate.downcast_ref::<E>().is_some_and(|c| c == self)
    }
}

/// Runtime descriptor of an error type
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    full_name: &'static str,
    is_kind: fn(&(dyn Error + 'static)) -> bool,
}

impl Kind {
    /// Descriptor for `T`
    #[must_use]
    pub fn of<T: Error + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            full_name: std::any::type_name::<T>(),
            is_kind: is_kind::<T>,
        }
    }

    /// Short name of the described type, as shown in mismatch messages
    #[must_use]
    pub fn name(&self) -> String {
        short_name(self.full_name)
    }

    /// Whether `err` itself (not its sources) is of this type
    #[must_use]
    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        (self.is_kind)(err)
    }
}

fn is_kind<T: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    err.is::<T>()
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kind").field(&self.full_name).finish()
    }
}

/// Evaluates an actual error against a fixed expectation
#[derive(Debug, Default)]
pub enum Checker {
    /// Passes only when there is no error
    #[default]
    Nil,
    /// Passes when the unwrap chain contains the expected error
    Is(Box<dyn Comparable>),
    /// Passes when the unwrap chain contains an error of the given type
    As(Kind),
}

impl Checker {
    /// Checker matching `expected` anywhere in the unwrap chain
    pub fn is<E: Comparable>(expected: E) -> Self {
        Self::Is(Box::new(expected))
    }

    /// Checker matching any error of type `T` in the unwrap chain
    #[must_use]
    pub fn as_kind<T: Error + 'static>() -> Self {
        Self::As(Kind::of::<T>())
    }

    /// Check `actual` against this checker
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] describing how `actual` deviates from the
    /// expected state.
    pub fn check(&self, actual: Option<&(dyn Error + 'static)>) -> Result<(), Mismatch> {
        match self {
            Self::Nil => match actual {
                None => Ok(()),
                Some(actual) => Err(Mismatch::unexpected_error(actual)),
            },
            Self::Is(expected) => {
                let actual = actual.ok_or_else(Mismatch::missing_error)?;
                if chain(actual).any(|e| expected.matches(e)) {
                    Ok(())
                } else {
                    Err(Mismatch::not_matched(expected, &actual))
                }
            }
            Self::As(kind) => {
                let actual = actual.ok_or_else(Mismatch::missing_error)?;
                if chain(actual).any(|e| kind.matches(e)) {
                    Ok(())
                } else {
                    Err(Mismatch::not_convertible(&kind.name(), actual))
                }
            }
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
    #[error("sentinel {0}")]
    struct Sentinel(u8);

    /// Error layer with an optional boxed cause
    #[derive(Debug)]
    struct Layer {
        message: String,
        cause: Option<Box<dyn Error + Send + Sync>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.message)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
        }
    }

    /// Wrap `root` in one `Layer` per message
    fn wrap(
        root: Box<dyn Error + Send + Sync>,
        messages: &[String],
    ) -> Box<dyn Error + Send + Sync> {
        messages.iter().fold(root, |cause, message| {
            Box::new(Layer {
                message: message.clone(),
                cause: Some(cause),
            })
        })
    }

    proptest! {
        /// Property: a sentinel is found at any wrapping depth
        #[test]
        fn prop_is_finds_wrapped_sentinel(
            id in any::<u8>(),
            messages in proptest::collection::vec("[a-z ]{0,20}", 0..16),
        ) {
            let err = wrap(Box::new(Sentinel(id)), &messages);
            prop_assert!(Checker::is(Sentinel(id)).check(Some(&*err)).is_ok());
            prop_assert!(Checker::as_kind::<Sentinel>().check(Some(&*err)).is_ok());
        }

        /// Property: a different sentinel value never matches
        #[test]
        fn prop_is_rejects_other_value(
            id in any::<u8>(),
            other in any::<u8>(),
            messages in proptest::collection::vec("[a-z ]{0,20}", 0..8),
        ) {
            prop_assume!(id != other);
            let err = wrap(Box::new(Sentinel(id)), &messages);
            prop_assert!(Checker::is(Sentinel(other)).check(Some(&*err)).is_err());
        }

        /// Property: Nil rejects every present error
        #[test]
        fn prop_nil_rejects_any_error(
            messages in proptest::collection::vec(".*", 1..8),
        ) {
            let err = wrap(Box::new(Sentinel(0)), &messages);
            prop_assert!(Checker::Nil.check(Some(&*err)).is_err());
        }

        /// Property: check is repeatable
        #[test]
        fn prop_check_is_idempotent(
            id in any::<u8>(),
            expected in any::<u8>(),
            messages in proptest::collection::vec(".*", 0..8),
        ) {
            let err = wrap(Box::new(Sentinel(id)), &messages);
            let checker = Checker::is(Sentinel(expected));
            prop_assert_eq!(checker.check(Some(&*err)), checker.check(Some(&*err)));
        }
    }
}
