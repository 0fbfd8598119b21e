// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: collision flip, origin mapping, and coordinates.
//!
//! ## Overview
//!
//! A placement pass runs in four steps:
//!
//! 1) [`resolve_direction`]: for dynamic overlays on a vertical side, choose
//!    `bottom` when the target (plus arrow and clearance) fits between the anchor's
//!    bottom and the boundary, otherwise `top`. Alignment is preserved. Static
//!    overlays and overlays on the left/right sides are never flipped.
//! 2) [`origin`]: map the resolved direction to the anchor edge and target edge
//!    that must coincide.
//! 3) [`compute`]: place the target so those edges meet, then push it away from
//!    the anchor by the caller's [`TargetOffset`].
//! 4) If an arrow is shown, place it on the anchor edge facing the target.
//!
//! Every step is a pure function of its inputs; running a pass twice on the same
//! geometry yields the same [`Placement`].

use anchorage_dom::{Style, Viewport};
use kurbo::Point;

use crate::direction::{Alignment, Direction, Side};
use crate::geometry::{AnchorRect, HorizontalEdge, TargetRect, VerticalEdge};

/// Caller-supplied pixel bias pushing the target away from the anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TargetOffset {
    /// Horizontal push, applied toward the resolved side on the horizontal axis.
    pub horizontal: f64,
    /// Vertical push, applied toward the resolved side for `top`/`bottom`.
    pub vertical: f64,
    /// Extra clearance reserved below the anchor by the flip test only.
    pub height: f64,
}

impl TargetOffset {
    /// Offset with horizontal and vertical components and no extra clearance.
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
            height: 0.0,
        }
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.horizontal.is_finite() && self.vertical.is_finite() && self.height.is_finite()
    }
}

/// Which window value stands in for the bottom edge when no scroll container bounds the overlay.
///
/// `HorizontalScroll` adds the horizontal scroll offset to the inner height. It is the
/// default for compatibility with existing layouts; `VerticalScroll` uses the vertical
/// scroll offset instead.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FallbackBoundary {
    /// `scroll_x + inner_height`.
    #[default]
    HorizontalScroll,
    /// `scroll_y + inner_height`.
    VerticalScroll,
}

impl FallbackBoundary {
    /// The viewport bottom used by the flip test.
    pub fn viewport_bottom(self, viewport: &Viewport) -> f64 {
        match self {
            Self::HorizontalScroll => viewport.scroll_x + viewport.inner_height,
            Self::VerticalScroll => viewport.scroll_y + viewport.inner_height,
        }
    }
}

/// Vertical limits the flip test compares against.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Boundary {
    /// Bottom edge of the scroll container, if it has a box.
    pub parent_bottom: Option<f64>,
    /// Viewport bottom (see [`FallbackBoundary`]).
    pub viewport_bottom: f64,
}

impl Boundary {
    /// The container's bottom, or the viewport bottom when the container has no
    /// box or its bottom is exactly zero.
    pub fn limit(&self) -> f64 {
        match self.parent_bottom {
            Some(bottom) if bottom != 0.0 => bottom,
            _ => self.viewport_bottom,
        }
    }
}

/// Measurements for the collision flip.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlipInput {
    /// Anchor snapshot.
    pub anchor: AnchorRect,
    /// Rendered target height.
    pub target_height: f64,
    /// Rendered arrow height; `0` without an arrow.
    pub arrow_height: f64,
    /// Container and viewport limits.
    pub boundary: Boundary,
}

impl FlipInput {
    /// Bottom edge the target would reach when rendered below the anchor.
    pub fn total_height(&self, offset: &TargetOffset) -> f64 {
        self.anchor.bottom + self.target_height + self.arrow_height + offset.height
    }

    /// True when the target fits below the anchor.
    pub fn fits_below(&self, offset: &TargetOffset) -> bool {
        let total = self.total_height(offset);
        total < self.boundary.limit() && total < self.boundary.viewport_bottom
    }
}

/// Decide the direction actually rendered.
///
/// Static overlays, and overlays requested on the left or right, keep `requested`.
/// Dynamic top/bottom overlays render below when [`FlipInput::fits_below`] holds
/// and above otherwise, keeping the requested alignment.
pub fn resolve_direction(
    requested: Direction,
    is_dynamic: bool,
    offset: &TargetOffset,
    flip: &FlipInput,
) -> Direction {
    if !is_dynamic || !requested.side().is_vertical() {
        return requested;
    }
    let side = if flip.fits_below(offset) {
        Side::Bottom
    } else {
        Side::Top
    };
    requested.with_side(side).unwrap_or(requested)
}

/// A vertical and a horizontal edge of one box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EdgePair {
    /// Vertical edge.
    pub vertical: VerticalEdge,
    /// Horizontal edge.
    pub horizontal: HorizontalEdge,
}

/// The anchor edges and target edges that coincide for a direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Origin {
    /// Edges of the anchor.
    pub anchor: EdgePair,
    /// Edges of the target.
    pub target: EdgePair,
}

/// Map a direction to its origin.
///
/// | side | anchor vertical | anchor horizontal | target vertical | target horizontal |
/// |---|---|---|---|---|
/// | top/bottom | side | alignment | opposite of side | alignment |
/// | left/right | alignment | side | alignment | opposite of side |
pub fn origin(direction: Direction) -> Origin {
    let alignment = direction.alignment();
    match direction.side() {
        side @ (Side::Top | Side::Bottom) => {
            let vertical = if side == Side::Top {
                VerticalEdge::Top
            } else {
                VerticalEdge::Bottom
            };
            let horizontal = match alignment {
                Alignment::Left => HorizontalEdge::Left,
                Alignment::Right => HorizontalEdge::Right,
                _ => HorizontalEdge::Middle,
            };
            Origin {
                anchor: EdgePair {
                    vertical,
                    horizontal,
                },
                target: EdgePair {
                    vertical: vertical.opposite(),
                    horizontal,
                },
            }
        }
        side @ (Side::Left | Side::Right) => {
            let vertical = match alignment {
                Alignment::Top => VerticalEdge::Top,
                Alignment::Bottom => VerticalEdge::Bottom,
                _ => VerticalEdge::Center,
            };
            let horizontal = if side == Side::Left {
                HorizontalEdge::Left
            } else {
                HorizontalEdge::Right
            };
            Origin {
                anchor: EdgePair {
                    vertical,
                    horizontal,
                },
                target: EdgePair {
                    vertical,
                    horizontal: horizontal.opposite(),
                },
            }
        }
    }
}

/// Inputs to [`compute`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlacementInput {
    /// Resolved direction.
    pub direction: Direction,
    /// Anchor snapshot.
    pub anchor: AnchorRect,
    /// Target snapshot.
    pub target: TargetRect,
    /// Caller offset.
    pub offset: TargetOffset,
    /// Hard cap on the target's height.
    pub max_height: Option<f64>,
    /// Whether to place an arrow.
    pub show_arrow: bool,
}

/// Result of a placement pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Direction rendered.
    pub direction: Direction,
    /// Viewport position of the target's top-left corner.
    pub target: Point,
    /// Viewport position of the arrow, when shown.
    pub arrow: Option<Point>,
    /// Height cap for the target.
    pub max_height: Option<f64>,
}

impl Placement {
    /// Inline style for the target container.
    pub fn target_style(&self) -> Style {
        Style {
            top: Some(self.target.y),
            left: Some(self.target.x),
            max_height: self.max_height,
        }
    }

    /// Inline style for the arrow element, when shown.
    pub fn arrow_style(&self) -> Option<Style> {
        self.arrow.map(|p| Style {
            top: Some(p.y),
            left: Some(p.x),
            max_height: None,
        })
    }
}

/// Compute target (and arrow) coordinates for a resolved direction.
pub fn compute(input: &PlacementInput) -> Placement {
    let side = input.direction.side();
    let o = origin(input.direction);
    let anchor = &input.anchor;
    let target = &input.target;
    let offset = &input.offset;

    let mut top = anchor.vertical(o.anchor.vertical) - target.vertical(o.target.vertical);
    if side.is_vertical() {
        top += if side == Side::Top {
            -offset.vertical
        } else {
            offset.vertical
        };
    }
    let left = anchor.horizontal(o.anchor.horizontal) - target.horizontal(o.target.horizontal)
        + if side == Side::Left {
            -offset.horizontal
        } else {
            offset.horizontal
        };

    Placement {
        direction: input.direction,
        target: Point::new(left, top),
        arrow: input.show_arrow.then(|| arrow_point(side, anchor, offset)),
        max_height: input.max_height,
    }
}

/// Arrow position on the anchor edge facing `side`, pushed out by the offset.
pub fn arrow_point(side: Side, anchor: &AnchorRect, offset: &TargetOffset) -> Point {
    match side {
        Side::Top => Point::new(anchor.middle, anchor.top - offset.vertical),
        Side::Bottom => Point::new(anchor.middle, anchor.bottom + offset.vertical),
        Side::Left => Point::new(anchor.left - offset.horizontal, anchor.center),
        Side::Right => Point::new(anchor.right + offset.horizontal, anchor.center),
    }
}
