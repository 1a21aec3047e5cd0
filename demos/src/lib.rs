// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host scaffolding for the event dispatch demos.
//!
//! [`ViewManager`] plays the host's view registry and page provider: it owns
//! mounted widgets by id and tracks the page on screen.

use hashbrown::HashMap;
use understory_event_dispatch::event::EventKind;
use understory_event_dispatch::view::{Page, PageProvider, View, ViewDescriptor, ViewRegistry};

/// A mounted widget with an on-screen value.
#[derive(Debug)]
pub struct Widget {
    /// Routing descriptor.
    pub descriptor: ViewDescriptor<String>,
    /// What the on-screen element currently shows.
    pub dom_value: String,
    /// The committed value.
    pub value: String,
    /// Whether the widget has focus.
    pub focused: bool,
}

impl Widget {
    /// Wrap a descriptor with empty values.
    pub fn new(descriptor: ViewDescriptor<String>) -> Self {
        Self {
            descriptor,
            dom_value: String::new(),
            value: String::new(),
            focused: false,
        }
    }
}

impl View<String> for Widget {
    fn descriptor(&self) -> &ViewDescriptor<String> {
        &self.descriptor
    }

    fn set_value_from_dom(&mut self, kind: EventKind) {
        self.value.clone_from(&self.dom_value);
        let id = &self.descriptor.id;
        log::debug!("{id}: value read back from the element");
        println!("  [{id}] committed {:?} on {kind}", self.value);
    }

    fn gained_focus(&mut self, _kind: EventKind) {
        self.focused = true;
        println!("  [{}] focused", self.descriptor.id);
    }

    fn lost_focus(&mut self, _kind: EventKind) {
        self.focused = false;
        println!("  [{}] blurred", self.descriptor.id);
    }
}

/// A page that relayouts on rotation.
#[derive(Debug)]
pub struct Screen {
    /// Page name.
    pub name: &'static str,
    /// Current orientation.
    pub landscape: bool,
}

impl Page for Screen {
    fn orientation_changed(&mut self) {
        self.landscape = !self.landscape;
        let orientation = if self.landscape {
            "landscape"
        } else {
            "portrait"
        };
        println!("  [{}] relayout for {orientation}", self.name);
    }
}

/// Mounted widgets plus the current page.
#[derive(Debug, Default)]
pub struct ViewManager {
    widgets: HashMap<String, Widget>,
    page: Option<Screen>,
}

impl ViewManager {
    /// Mount a widget under its descriptor id.
    pub fn mount(&mut self, widget: Widget) {
        log::info!("mounting {}", widget.descriptor.id);
        self.widgets.insert(widget.descriptor.id.clone(), widget);
    }

    /// Unmount a widget.
    pub fn unmount(&mut self, id: &str) -> Option<Widget> {
        log::info!("unmounting {id}");
        self.widgets.remove(id)
    }

    /// Mutable access to a widget, e.g. to simulate typing.
    pub fn widget_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// Show a page.
    pub fn show(&mut self, page: Screen) {
        self.page = Some(page);
    }
}

impl ViewRegistry<String> for ViewManager {
    type View = Widget;

    fn view_by_id(&mut self, id: &String) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }
}

impl PageProvider for ViewManager {
    type Page = Screen;

    fn current_page(&mut self) -> Option<&mut Screen> {
        self.page.as_mut()
    }
}
