// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay configuration.

use alloc::string::String;

use crate::direction::Direction;
use crate::error::{ConfigError, OverlayError};
use crate::placement::{FallbackBoundary, TargetOffset};

/// Options controlling an [`Overlay`](crate::Overlay).
///
/// Plain data: build it with the `with_*` setters, hand it to
/// [`Overlay::new`](crate::Overlay::new), and pass a modified copy to
/// [`Overlay::update`](crate::Overlay::update) to change it.
///
/// ```
/// use anchorage_overlay::{Direction, OverlayOptions, TargetOffset};
///
/// let options: OverlayOptions<u32> = OverlayOptions::default()
///     .with_open(true)
///     .with_direction(Direction::TopCenter)
///     .with_dynamic(true)
///     .with_arrow(true)
///     .with_target_offset(TargetOffset::new(0.0, 8.0));
/// assert!(options.validate().is_ok());
/// assert!(options.allow_click_away);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayOptions<N> {
    /// Whether the overlay is mounted. Default `false`.
    pub is_open: bool,
    /// Element the overlay is positioned against. Default none.
    pub anchor: Option<N>,
    /// Requested placement. Default [`Direction::BottomLeft`].
    pub direction: Direction,
    /// Flip between top and bottom to stay inside the scroll container. Default `false`.
    pub is_dynamic: bool,
    /// Render an arrow pointing at the anchor. Default `false`.
    pub show_arrow: bool,
    /// Pixel bias away from the anchor. Default zero.
    pub target_offset: TargetOffset,
    /// Hard cap on the content height. Default none.
    pub max_height: Option<f64>,
    /// Dismiss on clicks outside the anchor and content. Default `true`.
    pub allow_click_away: bool,
    /// Also dismiss on clicks inside the content. Default `false`.
    pub close_on_click: bool,
    /// Extra class appended to the surface root. Default empty.
    pub class_name: String,
    /// Viewport bottom used by the flip test without a scroll container.
    pub fallback_boundary: FallbackBoundary,
}

impl<N> Default for OverlayOptions<N> {
    fn default() -> Self {
        Self {
            is_open: false,
            anchor: None,
            direction: Direction::default(),
            is_dynamic: false,
            show_arrow: false,
            target_offset: TargetOffset::default(),
            max_height: None,
            allow_click_away: true,
            close_on_click: false,
            class_name: String::new(),
            fallback_boundary: FallbackBoundary::default(),
        }
    }
}

impl<N> OverlayOptions<N> {
    /// Set `is_open`.
    pub fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Set the anchor element.
    pub fn with_anchor(mut self, anchor: N) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the requested direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Parse and set the requested direction from its `side-alignment` string.
    pub fn with_direction_str(mut self, direction: &str) -> Result<Self, OverlayError> {
        self.direction = direction.parse()?;
        Ok(self)
    }

    /// Set `is_dynamic`.
    pub fn with_dynamic(mut self, is_dynamic: bool) -> Self {
        self.is_dynamic = is_dynamic;
        self
    }

    /// Set `show_arrow`.
    pub fn with_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }

    /// Set the target offset.
    pub fn with_target_offset(mut self, offset: TargetOffset) -> Self {
        self.target_offset = offset;
        self
    }

    /// Set the content height cap.
    pub fn with_max_height(mut self, max_height: Option<f64>) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set `allow_click_away`.
    pub fn with_click_away(mut self, allow: bool) -> Self {
        self.allow_click_away = allow;
        self
    }

    /// Set `close_on_click`.
    pub fn with_close_on_click(mut self, close_on_click: bool) -> Self {
        self.close_on_click = close_on_click;
        self
    }

    /// Set the extra surface class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the fallback boundary.
    pub fn with_fallback_boundary(mut self, boundary: FallbackBoundary) -> Self {
        self.fallback_boundary = boundary;
        self
    }

    /// Reject values no placement pass can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.target_offset));
        }
        if let Some(max) = self.max_height
            && !(max.is_finite() && max >= 0.0)
        {
            return Err(ConfigError::InvalidMaxHeight(max));
        }
        Ok(())
    }
}
