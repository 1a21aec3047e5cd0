// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher configuration.

/// Default width of the legacy-path duplicate suppression window.
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 100;

/// Tunables for a [`Dispatcher`](crate::dispatcher::Dispatcher).
///
/// With the `serde` feature this deserializes from any self-describing
/// format; missing fields take their defaults.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// A legacy-path event arriving within this many milliseconds of the
    /// previously accepted one is discarded as a duplicate.
    pub debounce_window_ms: u64,
}

impl DispatchConfig {
    /// The default configuration.
    pub const fn new() -> Self {
        Self {
            debounce_window_ms: DEFAULT_DEBOUNCE_WINDOW_MS,
        }
    }

    /// Replace the debounce window.
    #[must_use]
    pub const fn with_debounce_window_ms(mut self, millis: u64) -> Self {
        self.debounce_window_ms = millis;
        self
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
