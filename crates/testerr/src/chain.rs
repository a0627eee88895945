//! Unwrap chain traversal
//!
//! The unwrap chain of an error is the error itself followed by each
//! successive [`Error::source`], ending when an error reports no source.

use std::error::Error;

/// Placeholder used when a type has no usable name
pub const UNNAMED_TYPE: &str = "<unnamed error type>";

/// Iterate over `err` and all of its transitive sources, outermost first
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// Borrow the error of a `Result` as an actual error for checking
///
/// `Ok` maps to `None`, the "nil" error.
#[must_use]
pub fn actual<T, E>(result: &Result<T, E>) -> Option<&(dyn Error + 'static)>
where
    E: Error + 'static,
{
    result.as_ref().err().map(|e| e as &(dyn Error + 'static))
}

/// Short, readable name for `T`
///
/// Module paths are stripped from the type and from its generic arguments,
/// so `my_crate::net::TimeoutError` becomes `TimeoutError` and
/// `my_crate::Wrapper<my_crate::Inner>` becomes `Wrapper<Inner>`.
#[must_use]
pub fn type_name<T: ?Sized>() -> String {
    short_name(std::any::type_name::<T>())
}

pub(crate) fn short_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*' => {
                out.push_str(last_segment(&segment));
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(last_segment(&segment));

    if !out.trim().is_empty() {
        out
    } else if !full.trim().is_empty() {
        full.to_string()
    } else {
        UNNAMED_TYPE.to_string()
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
