// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless element tree implementing [`Dom`] and [`DomMut`].

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::host::{Dom, DomMut};
use crate::types::{NodeFlags, NodeId, OverflowStyle, Style, Viewport};

/// Initial data for an inserted element.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Viewport-relative border box. Layout is caller-supplied.
    pub bounds: Rect,
    /// Computed `overflow` / `overflow-y`.
    pub overflow: OverflowStyle,
    /// Element flags.
    pub flags: NodeFlags,
    /// Class attribute.
    pub class_name: String,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    origin: Point,
    size: Size,
    overflow: OverflowStyle,
    flags: NodeFlags,
    class_name: String,
    style: Style,
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            origin: element.bounds.origin(),
            size: element.bounds.size(),
            overflow: element.overflow,
            flags: element.flags,
            class_name: element.class_name,
            style: Style::default(),
        }
    }

    /// Laid-out size, capped by an inline `max-height`.
    fn layout_size(&self) -> Size {
        match self.style.max_height {
            Some(max) => Size::new(self.size.width, self.size.height.min(max.max(0.0))),
            None => self.size,
        }
    }

    fn layout_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.layout_size())
    }
}

/// A headless document: one root element plus any number of attached or detached elements.
///
/// Inline styles written through [`DomMut::set_style`] behave like `position: fixed`:
/// `top`/`left` move the element's box to that viewport origin and `max-height`
/// caps its laid-out height.
pub struct Document {
    nodes: Vec<Option<Node>>, // generational slots
    generations: Vec<u32>,    // last generation per slot, kept across frees
    free_list: Vec<usize>,
    root: NodeId,
    active: Option<NodeId>,
    viewport: Viewport,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("active", &self.active)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Document {
    /// Create a document whose root element spans the viewport.
    pub fn new(viewport: Viewport) -> Self {
        let root = Node::new(
            1,
            Element {
                bounds: Rect::new(0.0, 0.0, viewport.inner_width, viewport.inner_height),
                ..Default::default()
            },
        );
        Self {
            nodes: alloc::vec![Some(root)],
            generations: alloc::vec![1],
            free_list: Vec::new(),
            root: NodeId::new(0, 1),
            active: None,
            viewport,
        }
    }

    /// The document element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert a new element as the last child of `parent` (or detached if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId stores 32-bit slot indices."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId stores 32-bit slot indices."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            self.link_parent(id, p);
        }
        id
    }

    /// Insert a new element as the sibling immediately before `reference`.
    ///
    /// If `reference` is stale or has no parent, the element is left detached.
    pub fn insert_before(&mut self, reference: NodeId, element: Element) -> NodeId {
        let parent = self.node_opt(reference).and_then(|n| n.parent);
        let id = self.insert(parent, element);
        if let Some(p) = parent {
            let children = &mut self.node_mut(p).children;
            children.pop();
            let at = children
                .iter()
                .position(|c| *c == reference)
                .unwrap_or(children.len());
            children.insert(at, id);
        }
        id
    }

    /// Remove an element (and its subtree). The root and stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) || id == self.root {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        self.free_subtree(id);
    }

    /// Move `id` under `new_parent` (or detach it).
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) || id == self.root {
            return;
        }
        if new_parent.is_some_and(|p| !self.is_alive(p) || self.contains(id, p)) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Returns true when `id` refers to a live element.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Children of `id` in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Set the element's laid-out border box (viewport-relative).
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(node) = self.node_opt_mut(id) {
            node.origin = bounds.origin();
            node.size = bounds.size();
        }
    }

    /// Set the element's computed overflow.
    pub fn set_overflow(&mut self, id: NodeId, overflow: OverflowStyle) {
        if let Some(node) = self.node_opt_mut(id) {
            node.overflow = overflow;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(node) = self.node_opt_mut(id) {
            node.flags = flags;
        }
        if self.active == Some(id) && !flags.contains(NodeFlags::FOCUSABLE) {
            self.active = None;
        }
    }

    /// Class attribute of a live element.
    pub fn class_name(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).map(|n| n.class_name.as_str())
    }

    /// Inline style of a live element.
    pub fn style(&self, id: NodeId) -> Option<Style> {
        self.node_opt(id).map(|n| n.style)
    }

    /// First live descendant of `id` (depth-first, including `id`) whose class list contains `class`.
    pub fn find_by_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let node = self.node_opt(id)?;
        if node.class_name.split_ascii_whitespace().any(|c| c == class) {
            return Some(id);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_by_class(child, class))
    }

    /// Focus an attached, focusable element. Returns whether focus moved.
    pub fn focus(&mut self, id: NodeId) -> bool {
        let focusable = self
            .node_opt(id)
            .is_some_and(|n| n.flags.contains(NodeFlags::FOCUSABLE));
        if focusable && self.is_attached(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Replace the viewport; the root element is resized to match.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let root = self.root;
        self.set_bounds(
            root,
            Rect::new(0.0, 0.0, viewport.inner_width, viewport.inner_height),
        );
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        if self.active == Some(id) {
            self.active = None;
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    fn topmost(&self, mut id: NodeId) -> NodeId {
        while let Some(p) = self.node(id).parent {
            id = p;
        }
        id
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn is_attached(&self, node: NodeId) -> bool {
        self.is_alive(node) && self.topmost(node) == self.root
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node_opt(node)?.parent
    }

    fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        let n = self.node_opt(node)?;
        // Disconnected elements report an empty box.
        if self.topmost(node) != self.root {
            return Some(Rect::ZERO);
        }
        Some(n.layout_rect())
    }

    fn offset_size(&self, node: NodeId) -> Size {
        if !self.is_attached(node) {
            return Size::ZERO;
        }
        self.node(node).layout_size()
    }

    fn overflow(&self, node: NodeId) -> OverflowStyle {
        self.node_opt(node).map(|n| n.overflow).unwrap_or_default()
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) || !self.is_alive(node) {
            return false;
        }
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.node(id).parent;
        }
        false
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active.filter(|id| self.is_attached(*id))
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl DomMut for Document {
    fn create_element(&mut self, parent: Option<NodeId>, class_name: &str) -> NodeId {
        self.insert(
            parent,
            Element {
                class_name: class_name.into(),
                ..Default::default()
            },
        )
    }

    fn create_element_before(&mut self, reference: NodeId, class_name: &str) -> NodeId {
        self.insert_before(
            reference,
            Element {
                class_name: class_name.into(),
                ..Default::default()
            },
        )
    }

    fn remove_element(&mut self, node: NodeId) {
        self.remove(node);
    }

    fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        if let Some(n) = self.node_opt_mut(node) {
            n.class_name.clear();
            n.class_name.push_str(class_name);
        }
    }

    fn set_style(&mut self, node: NodeId, style: Style) {
        if let Some(n) = self.node_opt_mut(node) {
            n.style = style;
            if let Some(top) = style.top {
                n.origin.y = top;
            }
            if let Some(left) = style.left {
                n.origin.x = left;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Overflow;

    fn doc() -> Document {
        Document::new(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn root_spans_viewport() {
        let d = doc();
        assert_eq!(
            d.bounding_rect(d.root()),
            Some(Rect::new(0.0, 0.0, 800.0, 600.0))
        );
        assert!(d.is_attached(d.root()));
        assert_eq!(d.parent(d.root()), None);
    }

    #[test]
    fn detached_elements_are_not_attached() {
        let mut d = doc();
        let loose = d.insert(
            None,
            Element {
                bounds: Rect::new(10.0, 10.0, 20.0, 20.0),
                ..Default::default()
            },
        );
        let child = d.insert(Some(loose), Element::default());
        assert!(d.is_alive(child));
        assert!(!d.is_attached(child));
        assert_eq!(d.bounding_rect(loose), Some(Rect::ZERO));
        assert_eq!(d.offset_size(loose), Size::ZERO);

        let root = d.root();
        d.reparent(loose, Some(root));
        assert!(d.is_attached(child));
        assert_eq!(
            d.bounding_rect(loose),
            Some(Rect::new(10.0, 10.0, 20.0, 20.0))
        );
    }

    #[test]
    fn removal_frees_subtree_and_bumps_generation() {
        let mut d = doc();
        let root = d.root();
        let a = d.insert(Some(root), Element::default());
        let b = d.insert(Some(a), Element::default());
        d.remove(a);
        assert!(!d.is_alive(a));
        assert!(!d.is_alive(b));
        assert!(d.children(root).is_empty());

        let c = d.insert(Some(root), Element::default());
        assert!(d.is_alive(c));
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert!(!d.is_alive(a), "stale id must not alias the reused slot");
    }

    #[test]
    fn stale_ids_stay_dead_across_repeated_reuse() {
        let mut d = doc();
        let root = d.root();
        let mut stale = Vec::new();
        for _ in 0..3 {
            let id = d.insert(Some(root), Element::default());
            d.remove(id);
            stale.push(id);
        }
        let live = d.insert(
            Some(root),
            Element {
                bounds: Rect::new(400.0, 300.0, 500.0, 330.0),
                ..Default::default()
            },
        );
        assert_eq!(live.idx(), stale[0].idx());
        for id in stale {
            assert_ne!(id, live);
            assert!(!d.is_alive(id));
            assert!(!d.is_attached(id));
            assert!(!d.contains(id, live));
            assert_eq!(d.bounding_rect(id), None);
        }
    }

    #[test]
    fn insert_before_places_sibling_ahead_of_reference() {
        let mut d = doc();
        let root = d.root();
        let first = d.insert(Some(root), Element::default());
        let last = d.insert(Some(root), Element::default());
        let mid = d.create_element_before(last, "mid");
        assert_eq!(d.children(root), [first, mid, last]);
        assert_eq!(d.parent(mid), Some(root));

        let loose = d.insert(None, Element::default());
        let orphan = d.insert_before(loose, Element::default());
        assert_eq!(d.parent(orphan), None);
        assert!(!d.is_attached(orphan));
    }

    #[test]
    fn root_cannot_be_removed() {
        let mut d = doc();
        let root = d.root();
        d.remove(root);
        assert!(d.is_alive(root));
    }

    #[test]
    fn contains_is_inclusive() {
        let mut d = doc();
        let root = d.root();
        let a = d.insert(Some(root), Element::default());
        let b = d.insert(Some(a), Element::default());
        let c = d.insert(Some(root), Element::default());
        assert!(d.contains(a, a));
        assert!(d.contains(a, b));
        assert!(d.contains(root, b));
        assert!(!d.contains(b, a));
        assert!(!d.contains(c, b));
    }

    #[test]
    fn reparent_rejects_cycles() {
        let mut d = doc();
        let root = d.root();
        let a = d.insert(Some(root), Element::default());
        let b = d.insert(Some(a), Element::default());
        d.reparent(a, Some(b));
        assert_eq!(d.parent(a), Some(root));
        assert_eq!(d.parent(b), Some(a));
    }

    #[test]
    fn focus_requires_focusable_attached_element() {
        let mut d = doc();
        let root = d.root();
        let plain = d.insert(Some(root), Element::default());
        let input = d.insert(
            Some(root),
            Element {
                flags: NodeFlags::FOCUSABLE,
                ..Default::default()
            },
        );
        assert!(!d.focus(plain));
        assert!(d.focus(input));
        assert_eq!(d.active_element(), Some(input));

        d.remove(input);
        assert_eq!(d.active_element(), None);
    }

    #[test]
    fn style_moves_box_and_caps_height() {
        let mut d = doc();
        let root = d.root();
        let panel = d.insert(
            Some(root),
            Element {
                bounds: Rect::new(0.0, 0.0, 100.0, 300.0),
                ..Default::default()
            },
        );
        d.set_style(
            panel,
            Style {
                top: Some(40.0),
                left: Some(25.0),
                max_height: Some(120.0),
            },
        );
        assert_eq!(
            d.bounding_rect(panel),
            Some(Rect::new(25.0, 40.0, 125.0, 160.0))
        );
        assert_eq!(d.offset_size(panel), Size::new(100.0, 120.0));

        let placed = d.style(panel).unwrap();
        d.set_style(
            panel,
            Style {
                max_height: None,
                ..placed
            },
        );
        assert_eq!(d.offset_size(panel), Size::new(100.0, 300.0));
    }

    #[test]
    fn find_by_class_matches_whole_tokens() {
        let mut d = doc();
        let root = d.root();
        let outer = d.create_element(Some(root), "menu menu--open");
        let inner = d.create_element(Some(outer), "menu__item");
        assert_eq!(d.find_by_class(root, "menu"), Some(outer));
        assert_eq!(d.find_by_class(root, "menu__item"), Some(inner));
        assert_eq!(d.find_by_class(root, "men"), None);
    }

    #[test]
    fn overflow_defaults_to_visible_for_stale_ids() {
        let mut d = doc();
        let root = d.root();
        let a = d.insert(
            Some(root),
            Element {
                overflow: OverflowStyle::uniform(Overflow::Auto),
                ..Default::default()
            },
        );
        assert!(d.overflow(a).is_scrollable());
        d.remove(a);
        assert_eq!(d.overflow(a), OverflowStyle::default());
    }
}
