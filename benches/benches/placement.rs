// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anchorage_dom::{Document, Element, Overflow, OverflowStyle, Viewport};
use anchorage_overlay::geometry::{AnchorRect, TargetRect};
use anchorage_overlay::placement::{
    Boundary, FlipInput, PlacementInput, compute, resolve_direction,
};
use anchorage_overlay::scroll::scroll_parent;
use anchorage_overlay::{Direction, TargetOffset};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

/// A chain of `depth` nested boxes; only the outermost scrolls.
fn nested(depth: usize) -> (Document, anchorage_dom::NodeId) {
    let mut doc = Document::new(Viewport::new(1024.0, 768.0));
    let mut parent = doc.root();
    for i in 0..depth {
        let overflow = if i == 0 {
            OverflowStyle::uniform(Overflow::Auto)
        } else {
            OverflowStyle::default()
        };
        parent = doc.insert(
            Some(parent),
            Element {
                bounds: Rect::new(0.0, 0.0, 400.0, 400.0),
                overflow,
                ..Default::default()
            },
        );
    }
    (doc, parent)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let anchor = AnchorRect::from_rect(
        Rect::new(100.0, 50.0, 180.0, 90.0),
        Size::new(80.0, 40.0),
    );
    let target = TargetRect::from_size(Size::new(120.0, 60.0));
    let offset = TargetOffset::new(6.0, 4.0);
    group.throughput(Throughput::Elements(Direction::ALL.len() as u64));
    for show_arrow in [false, true] {
        group.bench_function(format!("all_directions_arrow_{show_arrow}"), |b| {
            b.iter(|| {
                for direction in Direction::ALL {
                    black_box(compute(&PlacementInput {
                        direction,
                        anchor,
                        target,
                        offset,
                        max_height: Some(200.0),
                        show_arrow,
                    }));
                }
            })
        });
    }
    group.finish();
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip");
    let offset = TargetOffset::default();
    for (label, parent_bottom) in [("fits", 600.0), ("flips", 120.0)] {
        let flip = FlipInput {
            anchor: AnchorRect::from_rect(
                Rect::new(10.0, 40.0, 110.0, 70.0),
                Size::new(100.0, 30.0),
            ),
            target_height: 60.0,
            arrow_height: 8.0,
            boundary: Boundary {
                parent_bottom: Some(parent_bottom),
                viewport_bottom: 768.0,
            },
        };
        group.bench_function(label, |b| {
            b.iter(|| {
                black_box(resolve_direction(
                    black_box(Direction::BottomCenter),
                    true,
                    &offset,
                    &flip,
                ))
            })
        });
    }
    group.finish();
}

fn bench_scroll_parent(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_parent");
    for &depth in &[4usize, 16, 64] {
        let (doc, leaf) = nested(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| black_box(scroll_parent(&doc, black_box(leaf))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_flip, bench_scroll_parent);
criterion_main!(benches);
