// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher: route a canonical event to at most one set of handler calls.
//!
//! The dispatcher resolves the originating view through the host's
//! [`ViewRegistry`], then applies one routing rule per [`EventKind`]:
//!
//! | kind | effect |
//! |---|---|
//! | `click` | `internal(id, model)` if set; then `primary(id, model)` if set and the view is not text-entry |
//! | `change` | `view.set_value_from_dom(kind)` |
//! | `keyup` | text-entry views: Enter with `trigger_action_on_enter` runs `primary(id)`, anything else commits the value; other views: nothing |
//! | `focusin` | `view.gained_focus(kind)` |
//! | `focusout` | `view.lost_focus(kind)` |
//! | `orientationchange` | `page.orientation_changed()` on the current page; the view id is ignored |
//!
//! Expected absences (an unmounted view, a missing handler, no current page)
//! are no-ops, never errors.
//!
//! ## Entry points
//!
//! - [`Dispatcher::handle`] and [`Dispatcher::handle_runtime_event`] serve the
//!   subscription path. They hold no state.
//! - [`Dispatcher::handle_legacy_click`] serves inline handler wiring. It
//!   discards a second event arriving within the debounce window of the last
//!   accepted one, and drops events for views in edit mode.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_event_dispatch::clock::ManualClock;
//! use understory_event_dispatch::dispatcher::Dispatcher;
//! use understory_event_dispatch::event::{CanonicalEvent, EventKind, Timestamp};
//! use understory_event_dispatch::view::{
//!     Action, Page, PageProvider, ViewDescriptor, ViewRegistry,
//! };
//!
//! struct NoPage;
//! impl Page for NoPage {
//!     fn orientation_changed(&mut self) {}
//! }
//!
//! struct Screen {
//!     button: ViewDescriptor<u32>,
//! }
//! impl ViewRegistry<u32> for Screen {
//!     type View = ViewDescriptor<u32>;
//!     fn view_by_id(&mut self, id: &u32) -> Option<&mut Self::View> {
//!         (*id == self.button.id).then_some(&mut self.button)
//!     }
//! }
//! impl PageProvider for Screen {
//!     type Page = NoPage;
//!     fn current_page(&mut self) -> Option<&mut NoPage> {
//!         None
//!     }
//! }
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! let mut screen = Screen {
//!     button: ViewDescriptor::new(1)
//!         .with_primary(Action::new(move |_, _| counter.set(counter.get() + 1))),
//! };
//!
//! let clock = ManualClock::new(0);
//! let mut dispatcher = Dispatcher::new(clock.clone());
//!
//! dispatcher.handle(&mut screen, &CanonicalEvent::new(EventKind::Click, 1, Timestamp::from_millis(0)));
//! assert_eq!(clicks.get(), 1);
//!
//! // The same click reported again by inline wiring 30ms later is a duplicate.
//! dispatcher.handle_legacy_click(&mut screen, EventKind::Click, 1, None);
//! clock.advance(30);
//! dispatcher.handle_legacy_click(&mut screen, EventKind::Click, 1, None);
//! assert_eq!(clicks.get(), 2);
//! ```

use core::fmt;

use crate::clock::Clock;
use crate::config::DispatchConfig;
use crate::event::{CanonicalEvent, EventKind};
use crate::normalize::{self, RawEvent};
use crate::view::{Page, PageProvider, View, ViewRegistry};

/// Routes canonical events to view operations and handlers.
///
/// One dispatcher is created at application start and passed by reference to
/// whatever delivers events. The only mutable state is the last accepted
/// legacy event, used for duplicate suppression.
pub struct Dispatcher<K, C> {
    config: DispatchConfig,
    clock: C,
    last_legacy_click: Option<CanonicalEvent<K>>,
}

impl<K: fmt::Debug, C: fmt::Debug> fmt::Debug for Dispatcher<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("last_legacy_click", &self.last_legacy_click)
            .finish()
    }
}

impl<K, C> Dispatcher<K, C>
where
    K: Clone + fmt::Debug,
    C: Clock,
{
    /// Create a dispatcher with the default configuration.
    pub fn new(clock: C) -> Self {
        Self::with_config(DispatchConfig::default(), clock)
    }

    /// Create a dispatcher with an explicit configuration.
    pub fn with_config(config: DispatchConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            last_legacy_click: None,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// The clock used to stamp events.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The last event accepted on the legacy path, if any.
    pub fn last_legacy_click(&self) -> Option<&CanonicalEvent<K>> {
        self.last_legacy_click.as_ref()
    }

    /// Route an event from the subscription path.
    ///
    /// `env` answers both view lookups and current-page queries.
    /// Events for views that no longer resolve are ignored.
    pub fn handle<E>(&self, env: &mut E, event: &CanonicalEvent<K>)
    where
        E: ViewRegistry<K> + PageProvider + ?Sized,
    {
        if event.kind == EventKind::OrientationChange {
            orientation_changed(env);
            return;
        }
        let Some(id) = event.view_id.as_ref() else {
            log::debug!("{} event without a target view ignored", event.kind);
            return;
        };
        let Some(view) = env.view_by_id(id) else {
            log::debug!("{} event for unknown view {id:?} ignored", event.kind);
            return;
        };
        route_to_view(view, id, event);
    }

    /// Normalize a raw runtime event and route it.
    ///
    /// Raw events of kinds the dispatcher does not know are ignored.
    pub fn handle_runtime_event<E, R>(&self, env: &mut E, raw: &R)
    where
        E: ViewRegistry<K> + PageProvider + ?Sized,
        R: RawEvent<K> + ?Sized,
    {
        if let Some(event) = normalize::from_runtime_event(raw, self.clock.now()) {
            self.handle(env, &event);
        }
    }

    /// Route an event from inline handler wiring.
    ///
    /// The event is stamped with the current time. If it arrives within the
    /// debounce window of the last accepted legacy event, it is discarded
    /// without touching any state. Otherwise it becomes the last accepted
    /// event, and is routed unless its view is missing or in edit mode.
    pub fn handle_legacy_click<E>(
        &mut self,
        env: &mut E,
        kind: EventKind,
        view_id: K,
        key_code: Option<u32>,
    ) where
        E: ViewRegistry<K> + PageProvider + ?Sized,
    {
        let now = self.clock.now();
        let event = normalize::from_legacy_triplet(kind, view_id.clone(), key_code, now);

        if let Some(last) = &self.last_legacy_click {
            let elapsed = last.timestamp.millis_between(event.timestamp);
            if elapsed <= self.config.debounce_window_ms {
                log::debug!("duplicate {kind} for {view_id:?} suppressed after {elapsed}ms");
                return;
            }
        }
        self.last_legacy_click = Some(event.clone());

        let Some(view) = env.view_by_id(&view_id) else {
            log::debug!("legacy {kind} for unknown view {view_id:?} ignored");
            return;
        };
        if view.descriptor().in_edit_mode {
            log::debug!("legacy {kind} for {view_id:?} dropped: view is in edit mode");
            return;
        }
        if kind == EventKind::OrientationChange {
            orientation_changed(env);
        } else {
            route_to_view(view, &view_id, &event);
        }
    }
}

/// Apply the per-kind routing rule for a view-scoped event.
fn route_to_view<K, V>(view: &mut V, id: &K, event: &CanonicalEvent<K>)
where
    K: fmt::Debug,
    V: View<K> + ?Sized,
{
    let kind = event.kind;
    match kind {
        EventKind::Click => {
            let descriptor = view.descriptor();
            let model_id = descriptor.model_id;
            let internal = descriptor.internal.clone();
            let primary = if descriptor.role.is_text_entry() {
                None
            } else {
                descriptor.primary.clone()
            };
            // Both may fire for one click: internal bookkeeping, then the app action.
            if let Some(action) = internal {
                log::trace!("click on {id:?}: internal action {:?}", action.name());
                action.invoke(id, model_id);
            }
            if let Some(action) = primary {
                log::trace!("click on {id:?}: primary action {:?}", action.name());
                action.invoke(id, model_id);
            }
        }
        EventKind::Change => {
            log::trace!("change on {id:?}: committing value");
            view.set_value_from_dom(kind);
        }
        EventKind::KeyUp => {
            let descriptor = view.descriptor();
            if !descriptor.role.is_text_entry() {
                return;
            }
            if event.is_enter() && descriptor.trigger_action_on_enter {
                if let Some(action) = descriptor.primary.clone() {
                    log::trace!("enter on {id:?}: primary action {:?}", action.name());
                    action.invoke(id, None);
                }
            } else {
                log::trace!("keyup on {id:?}: committing value");
                view.set_value_from_dom(kind);
            }
        }
        EventKind::FocusIn => {
            log::trace!("focus entered {id:?}");
            view.gained_focus(kind);
        }
        EventKind::FocusOut => {
            log::trace!("focus left {id:?}");
            view.lost_focus(kind);
        }
        // Device-scoped; callers route these to the page before resolving a view.
        EventKind::OrientationChange => {}
    }
}

fn orientation_changed<P: PageProvider + ?Sized>(pages: &mut P) {
    match pages.current_page() {
        Some(page) => {
            log::trace!("orientation change: notifying current page");
            page.orientation_changed();
        }
        None => log::warn!("orientation change with no current page"),
    }
}
