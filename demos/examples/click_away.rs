// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-away and Escape dismissal.
//!
//! The overlay only reports dismissal; the host owns `is_open` and closes the
//! overlay in response. Clicks inside the menu or on the anchor keep it open,
//! a click elsewhere closes it, and Escape closes it regardless of focus.
//!
//! Run:
//! - `RUST_LOG=anchorage_overlay=debug cargo run -p anchorage_demos --example click_away`

use std::cell::Cell;
use std::rc::Rc;

use anchorage_dom::{Document, DomMut, Element, NodeFlags, NodeId, Viewport};
use anchorage_events::{Event, EventTarget, KEY_ESCAPE, Outcome};
use anchorage_overlay::{Handler, Overlay, OverlayOptions};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

struct App {
    doc: Document,
    window: EventTarget<Handler>,
    menu: Overlay<Document>,
    options: OverlayOptions<NodeId>,
    dismissed: Rc<Cell<bool>>,
}

impl App {
    fn dispatch(&mut self, label: &str, event: Event<NodeId>) {
        let doc = &mut self.doc;
        let menu = &mut self.menu;
        self.window.deliver(&event, |d| {
            menu.handle(doc, d, &event);
            Outcome::Continue
        });
        if self.dismissed.replace(false) {
            self.options.is_open = false;
            if let Err(err) = self.menu.update(&mut self.doc, self.options.clone()) {
                eprintln!("update rejected: {err}");
            }
        }
        println!(
            "{label:<24} open={} listeners={}",
            self.menu.is_open(),
            self.window.listener_count()
        );
    }

    fn open(&mut self) {
        self.options.is_open = true;
        if let Err(err) = self.menu.update(&mut self.doc, self.options.clone()) {
            eprintln!("update rejected: {err}");
        }
    }

    fn menu_item(&self) -> Option<NodeId> {
        let container = self.menu.container()?;
        self.doc.find_by_class(container, "menu-item")
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(Viewport::new(800.0, 600.0));
    let root = doc.root();
    let anchor = doc.insert(
        Some(root),
        Element {
            bounds: Rect::new(20.0, 20.0, 120.0, 52.0),
            flags: NodeFlags::FOCUSABLE,
            class_name: "menu-button".into(),
            ..Default::default()
        },
    );
    let elsewhere = doc.insert(
        Some(root),
        Element {
            bounds: Rect::new(400.0, 400.0, 500.0, 440.0),
            flags: NodeFlags::FOCUSABLE,
            ..Default::default()
        },
    );

    let window = EventTarget::new();
    let options = OverlayOptions::default().with_anchor(anchor);
    let mut menu = Overlay::new(&window, Some(root), options.clone());
    menu.set_content(|doc: &mut Document, container| {
        doc.set_bounds(container, Rect::new(0.0, 0.0, 160.0, 96.0));
        let item = doc.create_element(Some(container), "menu-item");
        doc.set_flags(item, NodeFlags::FOCUSABLE);
    });
    let dismissed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dismissed);
    menu.on_close(move |event| {
        println!("  close requested by {:?}", event.kind());
        flag.set(true);
    });

    let mut app = App {
        doc,
        window,
        menu,
        options,
        dismissed,
    };
    if let Err(err) = app.menu.mount(&mut app.doc) {
        eprintln!("invalid menu options: {err}");
        return;
    }

    app.open();
    if let Some(item) = app.menu_item() {
        app.dispatch("click inside menu", Event::Click { target: item });
    }
    app.dispatch("click on anchor", Event::Click { target: anchor });
    app.dispatch("click elsewhere", Event::Click { target: elsewhere });

    app.open();
    if let Some(item) = app.menu_item() {
        app.doc.focus(item);
    }
    app.dispatch("tab inside menu", Event::KeyUp { key_code: 9 });
    app.dispatch("escape", Event::KeyUp { key_code: KEY_ESCAPE });

    app.open();
    app.doc.focus(elsewhere);
    app.dispatch("tab away", Event::KeyUp { key_code: 9 });

    app.menu.unmount(&mut app.doc);
}
