// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for checking arbitrary error chains
//!
//! Builds an error chain from fuzzer-chosen messages and codes, then runs
//! every checker over it. `check` must never panic, and each checker must
//! agree with a direct scan of the chain.

#![no_main]

use std::error::Error;
use std::fmt;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use testerr::{Expectation, chain};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Code(u16);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.0)
    }
}

impl Error for Code {}

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

#[derive(Debug, Arbitrary)]
struct Input {
    root: Option<u16>,
    layers: Vec<String>,
    expected: u16,
}

fuzz_target!(|input: Input| {
    let root: Option<Box<dyn Error + Send + Sync>> = input.root.map(|c| Box::new(Code(c)) as _);
    let err = input.layers.into_iter().take(64).fold(root, |cause, message| {
        Some(Box::new(Layer { message, cause }) as Box<dyn Error + Send + Sync>)
    });
    let actual = err.as_deref().map(|e| e as &(dyn Error + 'static));

    let found = actual.is_some_and(|a| {
        chain(a).any(|e| e.downcast_ref::<Code>() == Some(&Code(input.expected)))
    });
    assert_eq!(Expectation::is(Code(input.expected)).check(actual).is_ok(), found);
    assert_eq!(Expectation::nil().check(actual).is_ok(), actual.is_none());
    let has_code = actual.is_some_and(|a| chain(a).any(|e| e.is::<Code>()));
    assert_eq!(Expectation::as_kind::<Code>().check(actual).is_ok(), has_code);
});
