// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host traits: the DOM-like node API consumed by overlay positioning.
//!
//! ## Overview
//!
//! [`Dom`] covers the read-only queries a placement pass performs (bounding boxes,
//! offset sizes, computed overflow, ancestry, focus, and the viewport).
//! [`DomMut`] adds the few writes an overlay surface needs: creating and removing
//! its own elements, setting class names, and applying positioning styles.
//!
//! [`Document`](crate::Document) implements both for headless use. Browser or
//! toolkit bindings implement them over their own element handles.

use kurbo::{Rect, Size};

use crate::types::{OverflowStyle, Style, Viewport};

/// Read-only access to an element tree.
pub trait Dom {
    /// Element handle.
    type Node: Copy + Eq + core::fmt::Debug;

    /// True when `node` is live and connected to the document root.
    fn is_attached(&self, node: Self::Node) -> bool;

    /// Parent element, or `None` for roots and stale handles.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Viewport-relative border box (`getBoundingClientRect`), if the element has one.
    fn bounding_rect(&self, node: Self::Node) -> Option<Rect>;

    /// Laid-out size (`offsetWidth` / `offsetHeight`).
    fn offset_size(&self, node: Self::Node) -> Size;

    /// Computed `overflow` / `overflow-y`.
    fn overflow(&self, node: Self::Node) -> OverflowStyle;

    /// True when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool;

    /// The focused element, if any.
    fn active_element(&self) -> Option<Self::Node>;

    /// Window scroll offsets and inner size.
    fn viewport(&self) -> Viewport;
}

/// Element creation and styling.
pub trait DomMut: Dom {
    /// Create an element with `class_name` and append it to `parent` (or leave it detached).
    fn create_element(&mut self, parent: Option<Self::Node>, class_name: &str) -> Self::Node;

    /// Create an element with `class_name` as the sibling immediately before `reference`
    /// (`insertBefore`). A detached or stale `reference` yields a detached element.
    fn create_element_before(&mut self, reference: Self::Node, class_name: &str) -> Self::Node;

    /// Remove `node` and its subtree. Stale handles are ignored.
    fn remove_element(&mut self, node: Self::Node);

    /// Replace the element's class attribute.
    fn set_class_name(&mut self, node: Self::Node, class_name: &str);

    /// Replace the element's inline positioning style.
    fn set_style(&mut self, node: Self::Node, style: Style);
}
