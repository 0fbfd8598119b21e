// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-ancestor resolution.
//!
//! Resolution runs in two phases: [`ancestors`] collects the chain above a node,
//! nearest first, and [`find_scroll_parent`] scans that chain for the first element
//! whose computed `overflow` or `overflow-y` is `auto` or `scroll`. The nearest
//! scroll container wins; when none exists the viewport is the boundary.

use alloc::vec::Vec;

use anchorage_dom::Dom;
use kurbo::Rect;

/// The container bounding an overlay's vertical space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScrollParent<N> {
    /// The nearest scrollable ancestor.
    Element(N),
    /// No scrollable ancestor; the window bounds the overlay.
    Viewport,
}

impl<N: Copy> ScrollParent<N> {
    /// The element, if this is not the viewport.
    pub fn element(&self) -> Option<N> {
        match *self {
            Self::Element(n) => Some(n),
            Self::Viewport => None,
        }
    }

    /// Bounding box of the container; the viewport has none.
    pub fn bounding_rect<D: Dom<Node = N> + ?Sized>(&self, dom: &D) -> Option<Rect> {
        self.element().and_then(|n| dom.bounding_rect(n))
    }
}

/// Ancestors of `node`, nearest first.
///
/// Starts at the parent of `node` and stops below the parentless document root,
/// which is never a candidate.
pub fn ancestors<D: Dom + ?Sized>(dom: &D, node: D::Node) -> Vec<D::Node> {
    let mut chain = Vec::new();
    let mut cur = dom.parent(node);
    while let Some(n) = cur {
        let next = dom.parent(n);
        if next.is_none() {
            break;
        }
        chain.push(n);
        cur = next;
    }
    chain
}

/// First element of `chain` that scrolls its overflow.
pub fn find_scroll_parent<D: Dom + ?Sized>(dom: &D, chain: &[D::Node]) -> ScrollParent<D::Node> {
    chain
        .iter()
        .copied()
        .find(|&n| dom.overflow(n).is_scrollable())
        .map_or(ScrollParent::Viewport, ScrollParent::Element)
}

/// Nearest scrollable ancestor of `node`, or the viewport.
pub fn scroll_parent<D: Dom + ?Sized>(dom: &D, node: D::Node) -> ScrollParent<D::Node> {
    let chain = ancestors(dom, node);
    find_scroll_parent(dom, &chain)
}
