// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration glue: bind a view's interest in event kinds to the host runtime.
//!
//! [`subscribe`] parses a whitespace-separated kind list and hands the
//! resulting [`EventKinds`] to a [`HostRuntime`]. The runtime is then expected
//! to deliver matching events to [`Dispatcher::handle_runtime_event`].
//! This only wires the subscription path; inline handler wiring calls
//! [`Dispatcher::handle_legacy_click`] on its own.
//!
//! [`Subscriptions`] is a ready-made listener table for hosts that want the
//! dispatcher side to do the filtering.
//!
//! ```
//! use understory_event_dispatch::event::{EventKind, EventKinds};
//! use understory_event_dispatch::subscription::{subscribe, Subscriptions};
//!
//! let mut table = Subscriptions::new();
//! subscribe(&mut table, &"m_12", "click keyup").unwrap();
//! subscribe(&mut table, &"m_12", "focusin").unwrap();
//!
//! assert!(table.is_subscribed(&"m_12", EventKind::FocusIn));
//! assert!(!table.is_subscribed(&"m_12", EventKind::Change));
//! assert_eq!(
//!     table.unsubscribe(&"m_12"),
//!     Some(EventKinds::CLICK | EventKinds::KEY_UP | EventKinds::FOCUS_IN)
//! );
//! ```
//!
//! [`Dispatcher::handle_runtime_event`]: crate::dispatcher::Dispatcher::handle_runtime_event
//! [`Dispatcher::handle_legacy_click`]: crate::dispatcher::Dispatcher::handle_legacy_click

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::clock::Clock;
use crate::dispatcher::Dispatcher;
use crate::error::ParseEventKindError;
use crate::event::{EventKind, EventKinds};
use crate::normalize::RawEvent;
use crate::view::{PageProvider, ViewRegistry};

/// The host runtime's listener binding mechanism.
pub trait HostRuntime<K> {
    /// Start delivering events of `kinds` for the element `view_id`.
    fn bind(&mut self, view_id: &K, kinds: EventKinds);
}

/// Ask `host` to deliver the events named in `event_list` for `view_id`.
///
/// Returns the parsed set. A blank list binds nothing. Any unknown name
/// rejects the whole list before the host is touched.
pub fn subscribe<K, H>(
    host: &mut H,
    view_id: &K,
    event_list: &str,
) -> Result<EventKinds, ParseEventKindError>
where
    K: fmt::Debug,
    H: HostRuntime<K> + ?Sized,
{
    let kinds = EventKinds::parse_list(event_list)?;
    if kinds.is_empty() {
        log::debug!("empty subscription for {view_id:?} ignored");
    } else {
        log::trace!("subscribing {view_id:?} to {kinds:?}");
        host.bind(view_id, kinds);
    }
    Ok(kinds)
}

/// A listener table keyed by view id.
///
/// Binding the same view twice adds to its set. Unsubscribe when the
/// element unmounts.
#[derive(Clone, Debug)]
pub struct Subscriptions<K> {
    bindings: HashMap<K, EventKinds>,
}

impl<K> Default for Subscriptions<K> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq> Subscriptions<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The kinds bound for `view_id`. Empty if none.
    pub fn kinds_for(&self, view_id: &K) -> EventKinds {
        self.bindings.get(view_id).copied().unwrap_or_default()
    }

    /// Returns `true` if `view_id` is bound for `kind`.
    pub fn is_subscribed(&self, view_id: &K, kind: EventKind) -> bool {
        self.kinds_for(view_id).contains_kind(kind)
    }

    /// Returns `true` if any view is bound for `kind`.
    pub fn any_subscribed(&self, kind: EventKind) -> bool {
        self.bindings.values().any(|kinds| kinds.contains_kind(kind))
    }

    /// Drop every binding for `view_id`, returning what was bound.
    pub fn unsubscribe(&mut self, view_id: &K) -> Option<EventKinds> {
        self.bindings.remove(view_id)
    }

    /// Number of views with at least one binding.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Forward `raw` to the dispatcher if its target is bound for its kind.
    ///
    /// Device-scoped events arrive without a target; they are forwarded when
    /// any view is bound for them. Returns `true` if the event was forwarded.
    pub fn deliver<C, E, R>(&self, dispatcher: &Dispatcher<K, C>, env: &mut E, raw: &R) -> bool
    where
        K: Clone + fmt::Debug,
        C: Clock,
        E: ViewRegistry<K> + PageProvider + ?Sized,
        R: RawEvent<K> + ?Sized,
    {
        let Ok(kind) = raw.event_type().parse::<EventKind>() else {
            log::debug!("no listener for runtime event type {:?}", raw.event_type());
            return false;
        };
        let bound = if kind.is_view_scoped() {
            raw.target_id().is_some_and(|id| self.is_subscribed(&id, kind))
        } else {
            self.any_subscribed(kind)
        };
        if bound {
            dispatcher.handle_runtime_event(env, raw);
        } else {
            log::trace!("{kind} event has no subscriber");
        }
        bound
    }
}

impl<K: Hash + Eq + Clone> HostRuntime<K> for Subscriptions<K> {
    fn bind(&mut self, view_id: &K, kinds: EventKinds) {
        *self.bindings.entry(view_id.clone()).or_default() |= kinds;
    }
}
