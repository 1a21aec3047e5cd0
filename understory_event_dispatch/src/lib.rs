// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_dispatch --heading-base-level=0

//! Understory Event Dispatch: route normalized UI events to exactly one handler call (or none).
//!
//! ## Overview
//!
//! A host UI runtime reports interactions (clicks, value changes, key presses,
//! focus transitions, orientation changes) against on-screen elements. This
//! crate turns each report into a [`CanonicalEvent`](event::CanonicalEvent),
//! resolves the originating view through the host's
//! [`ViewRegistry`](view::ViewRegistry), and applies a fixed routing rule per
//! event kind based on the view's [`RoleTag`](view::RoleTag).
//!
//! It does not construct views, compose pages, or capture hardware input.
//!
//! ## Pipeline
//!
//! 1) Normalize: [`normalize`] converts a runtime event or a legacy
//!    `(kind, view id, key code)` triplet into a canonical record.
//! 2) Resolve: the [`Dispatcher`](dispatcher::Dispatcher) looks the view up.
//!    Unknown views are ignored; orientation changes skip the lookup and go to
//!    the current [`Page`](view::Page).
//! 3) Route: click, change, keyup, focusin and focusout each map to a view
//!    operation or an [`Action`](view::Action). Text-entry views commit values
//!    through change/keyup instead of running their primary action on click.
//!
//! Dispatch is synchronous and single-threaded. Nothing in this crate blocks,
//! spawns, or schedules timers.
//!
//! ## Two delivery paths
//!
//! - Subscription path: [`subscription::subscribe`] binds a view's kinds with
//!   the host runtime, which then calls
//!   [`Dispatcher::handle_runtime_event`](dispatcher::Dispatcher::handle_runtime_event).
//! - Inline handler path: host attribute wiring calls
//!   [`Dispatcher::handle_legacy_click`](dispatcher::Dispatcher::handle_legacy_click).
//!   The same physical interaction may arrive on both paths, so this entry
//!   point drops anything within the debounce window
//!   ([`DispatchConfig`](config::DispatchConfig), 100ms by default) of the
//!   previously accepted legacy event. It also skips views in edit mode.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_event_dispatch::clock::ManualClock;
//! use understory_event_dispatch::dispatcher::Dispatcher;
//! use understory_event_dispatch::event::{EventKind, ENTER_KEY_CODE};
//! use understory_event_dispatch::normalize::RuntimeEvent;
//! use understory_event_dispatch::view::{
//!     Action, Page, PageProvider, RoleTag, View, ViewDescriptor, ViewRegistry,
//! };
//!
//! struct Field {
//!     descriptor: ViewDescriptor<&'static str>,
//!     commits: usize,
//! }
//! impl View<&'static str> for Field {
//!     fn descriptor(&self) -> &ViewDescriptor<&'static str> {
//!         &self.descriptor
//!     }
//!     fn set_value_from_dom(&mut self, _kind: EventKind) {
//!         self.commits += 1;
//!     }
//! }
//!
//! struct Home;
//! impl Page for Home {
//!     fn orientation_changed(&mut self) {}
//! }
//!
//! struct App {
//!     field: Field,
//!     home: Home,
//! }
//! impl ViewRegistry<&'static str> for App {
//!     type View = Field;
//!     fn view_by_id(&mut self, id: &&'static str) -> Option<&mut Field> {
//!         (*id == self.field.descriptor.id).then_some(&mut self.field)
//!     }
//! }
//! impl PageProvider for App {
//!     type Page = Home;
//!     fn current_page(&mut self) -> Option<&mut Home> {
//!         Some(&mut self.home)
//!     }
//! }
//!
//! let searches = Rc::new(RefCell::new(Vec::new()));
//! let log = searches.clone();
//! let mut app = App {
//!     field: Field {
//!         descriptor: ViewDescriptor::new("search")
//!             .with_role(RoleTag::SearchEntry)
//!             .with_trigger_action_on_enter(true)
//!             .with_primary(Action::named("search", move |id: &&'static str, _| {
//!                 log.borrow_mut().push(*id);
//!             })),
//!         commits: 0,
//!     },
//!     home: Home,
//! };
//!
//! let dispatcher = Dispatcher::new(ManualClock::new(0));
//!
//! // Typing commits the value; Enter runs the search action instead.
//! dispatcher.handle_runtime_event(&mut app, &RuntimeEvent::new("keyup", Some("search")).with_key_code(65));
//! dispatcher.handle_runtime_event(&mut app, &RuntimeEvent::new("keyup", Some("search")).with_key_code(ENTER_KEY_CODE));
//! // Clicking a search field never runs its primary action.
//! dispatcher.handle_runtime_event(&mut app, &RuntimeEvent::new("click", Some("search")));
//!
//! assert_eq!(app.field.commits, 1);
//! assert_eq!(*searches.borrow(), ["search"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables [`SystemClock`](clock::SystemClock).
//! - `serde`: (de)serialization for [`DispatchConfig`](config::DispatchConfig).
//!
//! Diagnostics go through the `log` facade; install any logger to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod normalize;
pub mod subscription;
pub mod view;

#[cfg(test)]
mod testing;

pub use dispatcher::Dispatcher;
pub use error::ParseEventKindError;
pub use event::{CanonicalEvent, EventKind, EventKinds};
