// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time sources for stamping normalized events.
//!
//! The dispatcher never schedules timers. It reads the clock once per legacy
//! event and compares timestamps by subtraction.
//!
//! ```
//! use understory_event_dispatch::clock::{Clock, ManualClock};
//!
//! let clock = ManualClock::new(1_000);
//! let handle = clock.clone();
//! handle.advance(250);
//! assert_eq!(clock.now().as_millis(), 1_250);
//! ```

use alloc::rc::Rc;
use core::cell::Cell;

use crate::event::Timestamp;

/// A source of millisecond timestamps.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let since_epoch = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp::from_millis(u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX))
    }
}

/// A clock whose time is set by the host.
///
/// Clones share the same time, so a host can keep one handle to drive time
/// forward while the dispatcher owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock reading `millis`.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Rc::new(Cell::new(millis)),
        }
    }

    /// Set the current time.
    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }

    /// Move the current time forward by `millis`.
    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.get())
    }
}
