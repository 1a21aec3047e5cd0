// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View descriptors and the collaborator traits the dispatcher consults.
//!
//! Views are owned by the host's view registry. The dispatcher only reads a
//! descriptor for the duration of one dispatch and calls back into the view
//! for value commits and focus transitions.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_event_dispatch::view::{Action, RoleTag, ViewDescriptor};
//!
//! let submitted = Rc::new(Cell::new(false));
//! let flag = submitted.clone();
//! let field = ViewDescriptor::new("query")
//!     .with_role(RoleTag::SearchEntry)
//!     .with_primary(Action::named("submit", move |_id: &&str, _model| flag.set(true)))
//!     .with_trigger_action_on_enter(true);
//!
//! assert!(field.role.is_text_entry());
//! field.primary.as_ref().unwrap().invoke(&"query", None);
//! assert!(submitted.get());
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::event::EventKind;

/// The capability tag of a view.
///
/// Text-entry and search-entry views commit their value through `change` and
/// `keyup`, never through their primary click action.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoleTag {
    /// Any view without value-entry semantics (buttons, list items, ...).
    #[default]
    Generic,
    /// A single-line text field.
    TextEntry,
    /// A search bar.
    SearchEntry,
}

impl RoleTag {
    /// Returns `true` for roles that commit values via change/keyup.
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::TextEntry | Self::SearchEntry)
    }
}

/// Identifier of the model object a view is bound to, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u64);

type Callback<K> = Rc<dyn Fn(&K, Option<ModelId>)>;

/// A handler captured when the view was described, invoked later by the dispatcher.
///
/// Receives the originating view id and, for clicks, the view's model id.
/// Cloning is cheap.
pub struct Action<K> {
    name: Option<&'static str>,
    callback: Callback<K>,
}

impl<K> Action<K> {
    /// Wrap a callable.
    pub fn new(callback: impl Fn(&K, Option<ModelId>) + 'static) -> Self {
        Self {
            name: None,
            callback: Rc::new(callback),
        }
    }

    /// Wrap a callable with a name that shows up in diagnostics.
    pub fn named(name: &'static str, callback: impl Fn(&K, Option<ModelId>) + 'static) -> Self {
        Self {
            name: Some(name),
            callback: Rc::new(callback),
        }
    }

    /// The diagnostic name, if one was given.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Invoke the handler.
    pub fn invoke(&self, view_id: &K, model_id: Option<ModelId>) {
        (self.callback)(view_id, model_id);
    }
}

impl<K> Clone for Action<K> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<K> fmt::Debug for Action<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name.unwrap_or("<anonymous>"))
            .finish_non_exhaustive()
    }
}

/// What the dispatcher needs to know about a view to route its events.
#[derive(Clone, Debug)]
pub struct ViewDescriptor<K> {
    /// Stable identifier, unique among live views.
    pub id: K,
    /// Capability tag.
    pub role: RoleTag,
    /// Model binding passed to click handlers.
    pub model_id: Option<ModelId>,
    /// Application handler for the view's main interaction.
    pub primary: Option<Action<K>>,
    /// Framework handler; fires before `primary` on click.
    pub internal: Option<Action<K>>,
    /// On text-entry views, Enter invokes `primary` instead of committing the value.
    pub trigger_action_on_enter: bool,
    /// While set, legacy-path events for this view are dropped.
    pub in_edit_mode: bool,
}

impl<K> ViewDescriptor<K> {
    /// A generic view with no handlers.
    pub fn new(id: K) -> Self {
        Self {
            id,
            role: RoleTag::Generic,
            model_id: None,
            primary: None,
            internal: None,
            trigger_action_on_enter: false,
            in_edit_mode: false,
        }
    }

    /// Set the capability tag.
    #[must_use]
    pub fn with_role(mut self, role: RoleTag) -> Self {
        self.role = role;
        self
    }

    /// Bind a model id.
    #[must_use]
    pub fn with_model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Set the application handler.
    #[must_use]
    pub fn with_primary(mut self, action: Action<K>) -> Self {
        self.primary = Some(action);
        self
    }

    /// Set the framework handler.
    #[must_use]
    pub fn with_internal(mut self, action: Action<K>) -> Self {
        self.internal = Some(action);
        self
    }

    /// Set whether Enter triggers the primary handler.
    #[must_use]
    pub fn with_trigger_action_on_enter(mut self, enabled: bool) -> Self {
        self.trigger_action_on_enter = enabled;
        self
    }

    /// Set edit mode.
    #[must_use]
    pub fn with_edit_mode(mut self, in_edit_mode: bool) -> Self {
        self.in_edit_mode = in_edit_mode;
        self
    }
}

/// A live view, as handed out by a [`ViewRegistry`].
///
/// The operations default to doing nothing, so views only implement the ones
/// they care about.
pub trait View<K> {
    /// The view's routing descriptor.
    fn descriptor(&self) -> &ViewDescriptor<K>;

    /// Read the on-screen value back into the view.
    fn set_value_from_dom(&mut self, _kind: EventKind) {}

    /// The view gained focus.
    fn gained_focus(&mut self, _kind: EventKind) {}

    /// The view lost focus.
    fn lost_focus(&mut self, _kind: EventKind) {}
}

impl<K> View<K> for ViewDescriptor<K> {
    fn descriptor(&self) -> &Self {
        self
    }
}

/// Resolves view ids to live views.
pub trait ViewRegistry<K> {
    /// The view type handed out.
    type View: View<K> + ?Sized;

    /// Look up a live view. `None` once the view has been unmounted.
    fn view_by_id(&mut self, id: &K) -> Option<&mut Self::View>;
}

/// A page that reacts to device orientation changes.
pub trait Page {
    /// The device orientation changed.
    fn orientation_changed(&mut self);
}

/// Reports the page currently on screen.
pub trait PageProvider {
    /// The page type handed out.
    type Page: Page + ?Sized;

    /// The current page, if one is shown.
    fn current_page(&mut self) -> Option<&mut Self::Page>;
}
