// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host used by the unit tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::event::EventKind;
use crate::view::{Action, ModelId, Page, PageProvider, View, ViewDescriptor, ViewRegistry};

type Log = Rc<RefCell<Vec<Call>>>;

/// One observed call into a view, a page, or an application handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Action {
        target: &'static str,
        method: &'static str,
        view: &'static str,
        model: Option<ModelId>,
    },
    View {
        view: &'static str,
        op: &'static str,
        kind: EventKind,
    },
    Page(&'static str),
}

impl Call {
    pub(crate) fn action(
        target: &'static str,
        method: &'static str,
        view: &'static str,
        model: Option<ModelId>,
    ) -> Self {
        Self::Action {
            target,
            method,
            view,
            model,
        }
    }

    pub(crate) fn view(view: &'static str, op: &'static str, kind: EventKind) -> Self {
        Self::View { view, op, kind }
    }

    pub(crate) fn page(name: &'static str) -> Self {
        Self::Page(name)
    }
}

#[derive(Debug)]
pub(crate) struct RecordingView {
    descriptor: ViewDescriptor<&'static str>,
    log: Log,
}

impl RecordingView {
    fn record(&self, op: &'static str, kind: EventKind) {
        self.log.borrow_mut().push(Call::view(self.descriptor.id, op, kind));
    }
}

impl View<&'static str> for RecordingView {
    fn descriptor(&self) -> &ViewDescriptor<&'static str> {
        &self.descriptor
    }

    fn set_value_from_dom(&mut self, kind: EventKind) {
        self.record("set_value_from_dom", kind);
    }

    fn gained_focus(&mut self, kind: EventKind) {
        self.record("gained_focus", kind);
    }

    fn lost_focus(&mut self, kind: EventKind) {
        self.record("lost_focus", kind);
    }
}

#[derive(Debug)]
pub(crate) struct RecordingPage {
    name: &'static str,
    log: Log,
}

impl Page for RecordingPage {
    fn orientation_changed(&mut self) {
        self.log.borrow_mut().push(Call::page(self.name));
    }
}

/// A view registry and page provider that logs every call it receives.
#[derive(Debug, Default)]
pub(crate) struct Host {
    log: Log,
    views: Vec<RecordingView>,
    page: Option<RecordingPage>,
    lookups: usize,
}

impl Host {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// An action that logs `target.method(view, model)`.
    pub(crate) fn action(
        &self,
        target: &'static str,
        method: &'static str,
    ) -> Action<&'static str> {
        let log = self.log.clone();
        Action::named(method, move |&view: &&'static str, model| {
            log.borrow_mut().push(Call::action(target, method, view, model));
        })
    }

    /// Mount a view built from this host's actions.
    pub(crate) fn add(&mut self, build: impl FnOnce(&Self) -> ViewDescriptor<&'static str>) {
        let descriptor = build(&*self);
        self.views.push(RecordingView {
            descriptor,
            log: self.log.clone(),
        });
    }

    pub(crate) fn show_page(&mut self, name: &'static str) {
        self.page = Some(RecordingPage {
            name,
            log: self.log.clone(),
        });
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        core::mem::take(&mut *self.log.borrow_mut())
    }

    /// How many view lookups the dispatcher made.
    pub(crate) fn lookups(&self) -> usize {
        self.lookups
    }
}

impl ViewRegistry<&'static str> for Host {
    type View = RecordingView;

    fn view_by_id(&mut self, id: &&'static str) -> Option<&mut RecordingView> {
        self.lookups += 1;
        self.views.iter_mut().find(|v| v.descriptor.id == *id)
    }
}

impl PageProvider for Host {
    type Page = RecordingPage;

    fn current_page(&mut self) -> Option<&mut RecordingPage> {
        self.page.as_mut()
    }
}
