// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal in-memory host used by unit tests.

use alloc::string::String;
use alloc::vec::Vec;

use anchorage_dom::{Dom, DomMut, OverflowStyle, Style, Viewport};
use kurbo::{Rect, Size};

#[derive(Clone, Debug)]
struct MockNode {
    parent: Option<u32>,
    alive: bool,
    rect: Rect,
    overflow: OverflowStyle,
    class_name: String,
    style: Style,
}

/// Flat node list; ids are indices and are never reused.
#[derive(Clone, Debug)]
pub(crate) struct MockDom {
    nodes: Vec<MockNode>,
    // Sibling order across all nodes; children are read back in this order.
    order: Vec<u32>,
    active: Option<u32>,
    viewport: Viewport,
}

impl MockDom {
    pub(crate) fn new() -> Self {
        let viewport = Viewport::new(1024.0, 768.0);
        let mut dom = Self {
            nodes: Vec::new(),
            order: Vec::new(),
            active: None,
            viewport,
        };
        dom.add(None, Rect::new(0.0, 0.0, 1024.0, 768.0));
        dom
    }

    pub(crate) fn root(&self) -> u32 {
        0
    }

    pub(crate) fn add(&mut self, parent: Option<u32>, rect: Rect) -> u32 {
        self.nodes.push(MockNode {
            parent,
            alive: true,
            rect,
            overflow: OverflowStyle::default(),
            class_name: String::new(),
            style: Style::default(),
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Test hosts stay far below u32::MAX nodes."
        )]
        let id = (self.nodes.len() - 1) as u32;
        self.order.push(id);
        id
    }

    pub(crate) fn set_rect(&mut self, node: u32, rect: Rect) {
        self.nodes[node as usize].rect = rect;
    }

    pub(crate) fn set_size(&mut self, node: u32, size: Size) {
        let n = &mut self.nodes[node as usize];
        n.rect = Rect::from_origin_size(n.rect.origin(), size);
    }

    pub(crate) fn set_overflow(&mut self, node: u32, overflow: OverflowStyle) {
        self.nodes[node as usize].overflow = overflow;
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub(crate) fn focus(&mut self, node: Option<u32>) {
        self.active = node;
    }

    pub(crate) fn style(&self, node: u32) -> Style {
        self.nodes[node as usize].style
    }

    pub(crate) fn class_name(&self, node: u32) -> &str {
        &self.nodes[node as usize].class_name
    }

    pub(crate) fn children(&self, node: u32) -> Vec<u32> {
        self.order
            .iter()
            .copied()
            .filter(|&i| {
                let n = &self.nodes[i as usize];
                n.alive && n.parent == Some(node)
            })
            .collect()
    }

    pub(crate) fn live_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.alive).count()
    }

    fn get(&self, node: u32) -> Option<&MockNode> {
        self.nodes.get(node as usize).filter(|n| n.alive)
    }
}

impl Dom for MockDom {
    type Node = u32;

    fn is_attached(&self, node: u32) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            let Some(n) = self.get(id) else {
                return false;
            };
            if id == 0 {
                return true;
            }
            cur = n.parent;
        }
        false
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.get(node)?.parent
    }

    fn bounding_rect(&self, node: u32) -> Option<Rect> {
        let n = self.get(node)?;
        let size = self.offset_size(node);
        Some(Rect::from_origin_size(n.rect.origin(), size))
    }

    fn offset_size(&self, node: u32) -> Size {
        let Some(n) = self.get(node) else {
            return Size::ZERO;
        };
        let size = n.rect.size();
        match n.style.max_height {
            Some(max) => Size::new(size.width, size.height.min(max)),
            None => size,
        }
    }

    fn overflow(&self, node: u32) -> OverflowStyle {
        self.get(node).map(|n| n.overflow).unwrap_or_default()
    }

    fn contains(&self, ancestor: u32, node: u32) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if self.get(id).is_none() {
                return false;
            }
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    fn active_element(&self) -> Option<u32> {
        self.active.filter(|&n| self.is_attached(n))
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl DomMut for MockDom {
    fn create_element(&mut self, parent: Option<u32>, class_name: &str) -> u32 {
        let id = self.add(parent, Rect::ZERO);
        self.nodes[id as usize].class_name = class_name.into();
        id
    }

    fn create_element_before(&mut self, reference: u32, class_name: &str) -> u32 {
        let parent = self.parent(reference);
        let id = self.create_element(parent, class_name);
        if parent.is_some() {
            self.order.pop();
            let at = self
                .order
                .iter()
                .position(|&n| n == reference)
                .unwrap_or(self.order.len());
            self.order.insert(at, id);
        }
        id
    }

    fn remove_element(&mut self, node: u32) {
        if self.get(node).is_none() {
            return;
        }
        for child in self.children(node) {
            self.remove_element(child);
        }
        self.nodes[node as usize].alive = false;
    }

    fn set_class_name(&mut self, node: u32, class_name: &str) {
        if let Some(n) = self.nodes.get_mut(node as usize) {
            n.class_name = class_name.into();
        }
    }

    fn set_style(&mut self, node: u32, style: Style) {
        if let Some(n) = self.nodes.get_mut(node as usize) {
            n.style = style;
            let origin = n.rect.origin();
            let origin = kurbo::Point::new(
                style.left.unwrap_or(origin.x),
                style.top.unwrap_or(origin.y),
            );
            n.rect = Rect::from_origin_size(origin, n.rect.size());
        }
    }
}
