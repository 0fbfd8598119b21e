// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge and midpoint snapshots of the anchor and target boxes.
//!
//! Both rectangles are taken fresh on every placement pass and never cached.
//! The anchor is measured in viewport coordinates; the target is described in its
//! own origin-relative frame because its position is what is being computed.

use anchorage_dom::Dom;
use kurbo::{Rect, Size};

/// Vertical edge or midline of a box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VerticalEdge {
    /// Top edge.
    Top,
    /// Horizontal midline.
    Center,
    /// Bottom edge.
    Bottom,
}

impl VerticalEdge {
    /// The facing edge; `Center` faces itself.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Center => Self::Center,
            Self::Bottom => Self::Top,
        }
    }
}

/// Horizontal edge or midline of a box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HorizontalEdge {
    /// Left edge.
    Left,
    /// Vertical midline.
    Middle,
    /// Right edge.
    Right,
}

impl HorizontalEdge {
    /// The facing edge; `Middle` faces itself.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Middle => Self::Middle,
            Self::Right => Self::Left,
        }
    }
}

/// Snapshot of the anchor's box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnchorRect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Horizontal center (x of the vertical midline).
    pub middle: f64,
    /// Vertical center (y of the horizontal midline).
    pub center: f64,
}

impl AnchorRect {
    /// Derive edges and midpoints from a bounding box and the laid-out size.
    ///
    /// `right`/`bottom` come from the box; when the box has no extent on an axis,
    /// they fall back to `left + width` / `top + height` of the laid-out size.
    pub fn from_rect(rect: Rect, size: Size) -> Self {
        let top = rect.y0;
        let left = rect.x0;
        let right = if rect.x1 != 0.0 {
            rect.x1
        } else {
            left + size.width
        };
        let bottom = if rect.y1 != 0.0 {
            rect.y1
        } else {
            top + size.height
        };
        Self {
            top,
            left,
            right,
            bottom,
            width: size.width,
            height: size.height,
            middle: left + (right - left) / 2.0,
            center: top + (bottom - top) / 2.0,
        }
    }

    /// Coordinate of a vertical edge.
    pub const fn vertical(&self, edge: VerticalEdge) -> f64 {
        match edge {
            VerticalEdge::Top => self.top,
            VerticalEdge::Center => self.center,
            VerticalEdge::Bottom => self.bottom,
        }
    }

    /// Coordinate of a horizontal edge.
    pub const fn horizontal(&self, edge: HorizontalEdge) -> f64 {
        match edge {
            HorizontalEdge::Left => self.left,
            HorizontalEdge::Middle => self.middle,
            HorizontalEdge::Right => self.right,
        }
    }
}

/// Origin-relative snapshot of the target's box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TargetRect {
    /// Always `0`.
    pub top: f64,
    /// Always `0`.
    pub left: f64,
    /// Width.
    pub right: f64,
    /// Height.
    pub bottom: f64,
    /// Half the width.
    pub middle: f64,
    /// Half the height.
    pub center: f64,
}

impl TargetRect {
    /// Describe a target of the given laid-out size.
    pub fn from_size(size: Size) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            right: size.width,
            bottom: size.height,
            middle: size.width / 2.0,
            center: size.height / 2.0,
        }
    }

    /// Width of the target.
    pub const fn width(&self) -> f64 {
        self.right
    }

    /// Height of the target.
    pub const fn height(&self) -> f64 {
        self.bottom
    }

    /// Offset of a vertical edge from the target's top.
    pub const fn vertical(&self, edge: VerticalEdge) -> f64 {
        match edge {
            VerticalEdge::Top => self.top,
            VerticalEdge::Center => self.center,
            VerticalEdge::Bottom => self.bottom,
        }
    }

    /// Offset of a horizontal edge from the target's left.
    pub const fn horizontal(&self, edge: HorizontalEdge) -> f64 {
        match edge {
            HorizontalEdge::Left => self.left,
            HorizontalEdge::Middle => self.middle,
            HorizontalEdge::Right => self.right,
        }
    }
}

/// Measure the anchor. Callers check that `node` is attached first.
pub fn anchor_rect<D: Dom + ?Sized>(dom: &D, node: D::Node) -> AnchorRect {
    let rect = dom.bounding_rect(node).unwrap_or(Rect::ZERO);
    AnchorRect::from_rect(rect, dom.offset_size(node))
}

/// Describe the rendered target. Callers check that `node` is attached first.
pub fn target_rect<D: Dom + ?Sized>(dom: &D, node: D::Node) -> TargetRect {
    TargetRect::from_size(dom.offset_size(node))
}
