// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event normalizer: turn raw host input into [`CanonicalEvent`]s.
//!
//! Two inputs are accepted:
//!
//! - A structured runtime event, through the [`RawEvent`] trait. Hosts implement
//!   it for their native event type, or build a [`RuntimeEvent`].
//! - A legacy triplet `(kind, view id, key code)` from inline handler wiring.
//!
//! Neither function has side effects; the caller supplies the timestamp.
//!
//! ```
//! use understory_event_dispatch::event::{EventKind, Timestamp};
//! use understory_event_dispatch::normalize::{from_runtime_event, RuntimeEvent};
//!
//! let raw = RuntimeEvent::new("keyup", Some(4_u32)).with_key_code(13);
//! let event = from_runtime_event(&raw, Timestamp::from_millis(10)).unwrap();
//! assert_eq!(event.kind, EventKind::KeyUp);
//! assert_eq!(event.view_id, Some(4));
//! assert!(event.is_enter());
//!
//! // Kinds the dispatcher does not route are dropped here.
//! assert!(from_runtime_event(&RuntimeEvent::new("wheel", Some(4_u32)), Timestamp::from_millis(10)).is_none());
//! ```

use alloc::string::String;

use crate::event::{CanonicalEvent, EventKind, Timestamp};

/// A structured event as delivered by the host runtime.
pub trait RawEvent<K> {
    /// The runtime's type name for the event, e.g. `"click"`.
    fn event_type(&self) -> &str;

    /// The id of the element the listener was bound to.
    fn target_id(&self) -> Option<K>;

    /// The key code, for keyboard events.
    fn key_code(&self) -> Option<u32>;
}

/// An owned raw event, for hosts without a native event type of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeEvent<K> {
    /// The runtime's type name.
    pub event_type: String,
    /// The element the listener was bound to.
    pub target_id: Option<K>,
    /// The key code, for keyboard events.
    pub key_code: Option<u32>,
}

impl<K> RuntimeEvent<K> {
    /// Build a raw event without a key code.
    pub fn new(event_type: impl Into<String>, target_id: Option<K>) -> Self {
        Self {
            event_type: event_type.into(),
            target_id,
            key_code: None,
        }
    }

    /// Attach a key code.
    #[must_use]
    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = Some(key_code);
        self
    }
}

impl<K: Clone> RawEvent<K> for RuntimeEvent<K> {
    fn event_type(&self) -> &str {
        &self.event_type
    }

    fn target_id(&self) -> Option<K> {
        self.target_id.clone()
    }

    fn key_code(&self) -> Option<u32> {
        self.key_code
    }
}

/// Normalize a runtime event.
///
/// Returns `None` when the type name is not a routed [`EventKind`].
/// Device-scoped kinds drop the target id, since routing never consults it.
pub fn from_runtime_event<K, E>(raw: &E, timestamp: Timestamp) -> Option<CanonicalEvent<K>>
where
    E: RawEvent<K> + ?Sized,
{
    let kind = match raw.event_type().parse::<EventKind>() {
        Ok(kind) => kind,
        Err(err) => {
            log::debug!("ignoring runtime event: {err}");
            return None;
        }
    };
    let view_id = if kind.is_view_scoped() {
        raw.target_id()
    } else {
        None
    };
    Some(CanonicalEvent {
        kind,
        view_id,
        key_code: raw.key_code(),
        timestamp,
    })
}

/// Normalize a legacy `(kind, view id, key code)` triplet.
pub fn from_legacy_triplet<K>(
    kind: EventKind,
    view_id: K,
    key_code: Option<u32>,
    timestamp: Timestamp,
) -> CanonicalEvent<K> {
    CanonicalEvent {
        kind,
        view_id: Some(view_id),
        key_code,
        timestamp,
    }
}
