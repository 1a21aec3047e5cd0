// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline handler path: duplicate suppression and edit mode.
//!
//! The same tap is reported twice in quick succession, the way two delivery
//! paths can report one physical interaction. Only the first runs.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example dispatch_legacy`

use std::cell::Cell;
use std::rc::Rc;

use understory_demos::{ViewManager, Widget};
use understory_event_dispatch::clock::{Clock, ManualClock};
use understory_event_dispatch::config::DispatchConfig;
use understory_event_dispatch::dispatcher::Dispatcher;
use understory_event_dispatch::event::EventKind;
use understory_event_dispatch::view::{Action, ViewDescriptor};

fn main() {
    env_logger::init();

    let taps = Rc::new(Cell::new(0_u32));
    let on_tap = {
        let taps = taps.clone();
        Action::named("open", move |id: &String, _| {
            taps.set(taps.get() + 1);
            println!("  controller.open({id})");
        })
    };

    let mut views = ViewManager::default();
    views.mount(Widget::new(
        ViewDescriptor::new("item".to_string()).with_primary(on_tap.clone()),
    ));
    views.mount(Widget::new(
        ViewDescriptor::new("editing".to_string())
            .with_primary(on_tap)
            .with_edit_mode(true),
    ));

    let clock = ManualClock::new(0);
    let mut dispatcher = Dispatcher::with_config(DispatchConfig::default(), clock.clone());

    for (step, (advance, id)) in [(0, "item"), (40, "item"), (120, "item"), (200, "editing")]
        .into_iter()
        .enumerate()
    {
        clock.advance(advance);
        println!("== tap {step} on {id} at {}ms ==", clock.now().as_millis());
        dispatcher.handle_legacy_click(&mut views, EventKind::Click, id.to_string(), None);
    }

    println!("last accepted: {:?}", dispatcher.last_legacy_click());
    assert_eq!(taps.get(), 2);
}
