// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip with an arrow.
//!
//! Mounts a `top-center` tooltip over a button, prints the computed target and
//! arrow coordinates, then moves the button and re-places the tooltip from a
//! `resize` event.
//!
//! Run:
//! - `RUST_LOG=anchorage_overlay=trace cargo run -p anchorage_demos --example tooltip_arrow`

use anchorage_dom::{Document, Dom, Element, Viewport};
use anchorage_events::{Event, EventTarget, Outcome};
use anchorage_overlay::{Direction, Overlay, OverlayOptions, TargetOffset};
use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(Viewport::new(1024.0, 768.0));
    let root = doc.root();
    let button = doc.insert(
        Some(root),
        Element {
            bounds: Rect::new(400.0, 300.0, 480.0, 332.0),
            class_name: "button".into(),
            ..Default::default()
        },
    );

    let window = EventTarget::new();
    let options = OverlayOptions::default()
        .with_open(true)
        .with_anchor(button)
        .with_direction(Direction::TopCenter)
        .with_arrow(true)
        .with_target_offset(TargetOffset::new(0.0, 8.0))
        .with_class_name("tooltip");
    let mut tooltip = Overlay::new(&window, Some(root), options);
    tooltip.set_content(|doc: &mut Document, container| {
        // Stand-in for text layout: a fixed 160x40 bubble.
        let bounds = doc.bounding_rect(container).unwrap_or_default();
        doc.set_bounds(container, Rect::from_origin_size(bounds.origin(), Size::new(160.0, 40.0)));
    });
    if let Err(err) = tooltip.mount(&mut doc) {
        eprintln!("invalid tooltip options: {err}");
        return;
    }

    print_placement("mounted", &tooltip);

    doc.set_bounds(button, Rect::new(200.0, 120.0, 280.0, 152.0));
    let resize = Event::Resize;
    window.deliver(&resize, |d| {
        tooltip.handle(&mut doc, d, &resize);
        Outcome::Continue
    });
    print_placement("after resize", &tooltip);

    tooltip.unmount(&mut doc);
    println!("listeners after unmount: {}", window.listener_count());
}

fn print_placement(label: &str, tooltip: &Overlay<Document>) {
    let Some(p) = tooltip.last_placement() else {
        println!("{label}: not placed");
        return;
    };
    println!(
        "{label}: {} target=({:.1}, {:.1}) arrow={:?}",
        p.direction,
        p.target.x,
        p.target.y,
        p.arrow.map(|a| (a.x, a.y))
    );
}
