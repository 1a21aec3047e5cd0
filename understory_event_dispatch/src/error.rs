// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while parsing event kind names.
//!
//! Dispatch itself never fails; only the registration glue, which accepts
//! kind names as text, can reject input.

use alloc::string::String;

/// A kind name did not match any [`EventKind`](crate::event::EventKind).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseEventKindError {
    /// The name was empty.
    #[error("empty event kind name")]
    Empty,
    /// The name is not one of the routed kinds.
    #[error("unknown event kind `{0}`")]
    Unknown(String),
}
