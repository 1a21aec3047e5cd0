// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription path: bind listeners, then feed raw runtime events.
//!
//! A login form with a text field that submits on Enter and a button with
//! both a framework and an application handler.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example dispatch_basics`

use std::cell::RefCell;
use std::rc::Rc;

use understory_demos::{Screen, ViewManager, Widget};
use understory_event_dispatch::clock::SystemClock;
use understory_event_dispatch::dispatcher::Dispatcher;
use understory_event_dispatch::event::ENTER_KEY_CODE;
use understory_event_dispatch::normalize::RuntimeEvent;
use understory_event_dispatch::subscription::{Subscriptions, subscribe};
use understory_event_dispatch::view::{Action, ModelId, RoleTag, ViewDescriptor};

fn main() {
    env_logger::init();

    let submitted: Rc<RefCell<Vec<String>>> = Rc::default();
    let submit = {
        let submitted = submitted.clone();
        Action::named("submit", move |id: &String, model: Option<ModelId>| {
            println!("  controller.submit({id}, {model:?})");
            submitted.borrow_mut().push(id.clone());
        })
    };
    let track = Action::named("track", |id: &String, _| {
        println!("  framework.track({id})");
    });

    let mut views = ViewManager::default();
    views.mount(Widget::new(
        ViewDescriptor::new("user".to_string())
            .with_role(RoleTag::TextEntry)
            .with_trigger_action_on_enter(true)
            .with_primary(submit.clone()),
    ));
    views.mount(Widget::new(
        ViewDescriptor::new("login".to_string())
            .with_model_id(ModelId(1))
            .with_internal(track)
            .with_primary(submit),
    ));
    views.show(Screen {
        name: "login",
        landscape: false,
    });

    let dispatcher = Dispatcher::new(SystemClock);
    let mut listeners = Subscriptions::new();
    let user_id = "user".to_string();
    let login_id = "login".to_string();
    subscribe(&mut listeners, &user_id, "keyup change focusin focusout")
        .expect("known kinds");
    subscribe(&mut listeners, &login_id, "click orientationchange")
        .expect("known kinds");

    let events = [
        RuntimeEvent::new("focusin", Some("user".to_string())),
        RuntimeEvent::new("keyup", Some("user".to_string())).with_key_code(65),
        RuntimeEvent::new("click", Some("user".to_string())),
        RuntimeEvent::new("keyup", Some("user".to_string())).with_key_code(ENTER_KEY_CODE),
        RuntimeEvent::new("focusout", Some("user".to_string())),
        RuntimeEvent::new("click", Some("login".to_string())),
        RuntimeEvent::new("orientationchange", None),
    ];

    if let Some(field) = views.widget_mut("user") {
        field.dom_value = "ada".to_string();
    }
    for raw in &events {
        println!("== {} {:?} ==", raw.event_type, raw.target_id);
        if !listeners.deliver(&dispatcher, &mut views, raw) {
            println!("  (no listener)");
        }
    }

    // Unmounting drops the listeners with the element.
    views.unmount(&login_id);
    listeners.unsubscribe(&login_id);
    let late_click = RuntimeEvent::new("click", Some(login_id));
    assert!(!listeners.deliver(&dispatcher, &mut views, &late_click));

    assert_eq!(*submitted.borrow(), ["user", "login"]);
}
