// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anchorage_dom::{Document, Element, Overflow, OverflowStyle, Viewport};
use anchorage_events::{Event, EventTarget, Outcome};
use anchorage_overlay::{Direction, Overlay, OverlayOptions};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;

fn setup(overlays: usize) -> (Document, EventTarget<anchorage_overlay::Handler>, Vec<Overlay<Document>>) {
    let mut doc = Document::new(Viewport::new(1024.0, 768.0));
    let root = doc.root();
    let list = doc.insert(
        Some(root),
        Element {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            overflow: OverflowStyle::vertical(Overflow::Scroll),
            ..Default::default()
        },
    );
    let window = EventTarget::new();
    let mut out = Vec::with_capacity(overlays);
    for i in 0..overlays {
        let y = (i % 8) as f64 * 32.0;
        let anchor = doc.insert(
            Some(list),
            Element {
                bounds: Rect::new(0.0, y, 200.0, y + 32.0),
                ..Default::default()
            },
        );
        let options = OverlayOptions::default()
            .with_open(true)
            .with_anchor(anchor)
            .with_direction(Direction::BottomLeft)
            .with_dynamic(true)
            .with_arrow(true);
        let mut overlay = Overlay::new(&window, Some(list), options);
        overlay.set_content(|doc: &mut Document, container| {
            doc.set_bounds(container, Rect::new(0.0, 0.0, 160.0, 120.0));
        });
        if overlay.mount(&mut doc).is_ok() {
            out.push(overlay);
        }
    }
    (doc, window, out)
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll");
    for &n in &[1usize, 8, 32] {
        let (mut doc, window, mut overlays) = setup(n);
        let event = Event::Scroll;
        group.bench_function(format!("reposition_{n}_overlays"), |b| {
            b.iter(|| {
                window.deliver(&event, |d| {
                    for overlay in overlays.iter_mut() {
                        black_box(overlay.handle(&mut doc, d, &event));
                    }
                    Outcome::Continue
                })
            })
        });
    }
    group.finish();
}

fn bench_open_close(c: &mut Criterion) {
    c.bench_function("open_close", |b| {
        b.iter_batched(
            || setup(0),
            |(mut doc, window, _)| {
                let root = doc.root();
                let options = OverlayOptions::default()
                    .with_open(true)
                    .with_anchor(root);
                let mut overlay = Overlay::new(&window, Some(root), options.clone());
                let _ = overlay.mount(&mut doc);
                let _ = overlay.update(&mut doc, options.with_open(false));
                black_box(window.listener_count())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_scroll, bench_open_close);
criterion_main!(benches);
