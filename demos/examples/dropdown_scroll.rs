// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic dropdown inside a scroll container.
//!
//! A `bottom-left` dropdown opens from a row of a 240px-tall scrolling list.
//! Rows near the bottom of the list flip the dropdown above the row; rows near
//! the top keep it below. Scrolling the list re-runs the flip test.
//!
//! Run:
//! - `RUST_LOG=anchorage_overlay=debug cargo run -p anchorage_demos --example dropdown_scroll`

use anchorage_dom::{Document, Element, Overflow, OverflowStyle, Viewport};
use anchorage_events::{Event, EventTarget, Outcome};
use anchorage_overlay::{Direction, Overlay, OverlayOptions};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

const ROW_HEIGHT: f64 = 32.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(Viewport::new(1024.0, 768.0));
    let root = doc.root();
    let list = doc.insert(
        Some(root),
        Element {
            bounds: Rect::new(40.0, 40.0, 340.0, 280.0),
            overflow: OverflowStyle::vertical(Overflow::Auto),
            class_name: "list".into(),
            ..Default::default()
        },
    );
    let rows: Vec<_> = (0..7)
        .map(|i| {
            let y = 40.0 + f64::from(i) * ROW_HEIGHT;
            doc.insert(
                Some(list),
                Element {
                    bounds: Rect::new(40.0, y, 340.0, y + ROW_HEIGHT),
                    class_name: "row".into(),
                    ..Default::default()
                },
            )
        })
        .collect();

    let window = EventTarget::new();
    let options = OverlayOptions::default()
        .with_open(true)
        .with_anchor(rows[6])
        .with_direction(Direction::BottomLeft)
        .with_dynamic(true)
        .with_max_height(Some(120.0));
    let mut dropdown = Overlay::new(&window, Some(list), options.clone());
    dropdown.set_content(|doc: &mut Document, container| {
        // Five menu items; the max-height cap clips the box to 120px.
        doc.set_bounds(container, Rect::new(0.0, 0.0, 180.0, 5.0 * ROW_HEIGHT));
    });
    if let Err(err) = dropdown.mount(&mut doc) {
        eprintln!("invalid dropdown options: {err}");
        return;
    }
    println!("last row:  rendered {}", dropdown.visible_direction());

    // Scroll the list so the anchor row moves to the top.
    for (i, &row) in rows.iter().enumerate() {
        let y = 40.0 + (i as f64 - 6.0) * ROW_HEIGHT;
        doc.set_bounds(row, Rect::new(40.0, y, 340.0, y + ROW_HEIGHT));
    }
    let scroll = Event::Scroll;
    window.deliver(&scroll, |d| {
        dropdown.handle(&mut doc, d, &scroll);
        Outcome::Continue
    });
    println!("scrolled:  rendered {}", dropdown.visible_direction());

    // Reopening always starts from the requested direction.
    let reopened = options.with_direction(Direction::BottomCenter);
    for step in [reopened.clone().with_open(false), reopened] {
        if let Err(err) = dropdown.update(&mut doc, step) {
            eprintln!("update rejected: {err}");
        }
    }
    println!(
        "reopened:  rendered {} at {:?}",
        dropdown.visible_direction(),
        dropdown.last_placement().map(|p| (p.target.x, p.target.y))
    );
}
