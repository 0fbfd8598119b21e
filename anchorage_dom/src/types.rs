// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the node model: identifiers, flags, overflow, styles, and the viewport.

use core::fmt;
use core::str::FromStr;

/// Identifier for an element in a [`Document`](crate::Document).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check whether a `NodeId` still refers to a live element.
/// Stale `NodeId`s never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Element can hold focus (becomes the active element when focused).
        const FOCUSABLE = 0b0000_0001;
    }
}

/// A single CSS `overflow` keyword.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Overflow {
    /// `visible` (initial value).
    #[default]
    Visible,
    /// `hidden`.
    Hidden,
    /// `clip`.
    Clip,
    /// `auto`.
    Auto,
    /// `scroll`.
    Scroll,
}

impl Overflow {
    /// Returns true for `auto` and `scroll`, the values that make an element a scroll container.
    pub const fn is_scrollable(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }

    /// The CSS keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Clip => "clip",
            Self::Auto => "auto",
            Self::Scroll => "scroll",
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown `overflow` keyword.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized overflow keyword: {keyword:?}")]
pub struct ParseOverflowError {
    keyword: alloc::string::String,
}

impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            "clip" => Ok(Self::Clip),
            "auto" => Ok(Self::Auto),
            "scroll" => Ok(Self::Scroll),
            other => Err(ParseOverflowError {
                keyword: other.into(),
            }),
        }
    }
}

/// Computed `overflow` / `overflow-y` pair of an element.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct OverflowStyle {
    /// Computed `overflow`.
    pub overflow: Overflow,
    /// Computed `overflow-y`.
    pub overflow_y: Overflow,
}

impl OverflowStyle {
    /// Both properties set to `overflow`.
    pub const fn uniform(overflow: Overflow) -> Self {
        Self {
            overflow,
            overflow_y: overflow,
        }
    }

    /// Only `overflow-y` set; `overflow` stays `visible`.
    pub const fn vertical(overflow_y: Overflow) -> Self {
        Self {
            overflow: Overflow::Visible,
            overflow_y,
        }
    }

    /// True when either property is `auto` or `scroll`.
    pub const fn is_scrollable(&self) -> bool {
        self.overflow.is_scrollable() || self.overflow_y.is_scrollable()
    }
}

/// Inline positioning instructions, in CSS pixels.
///
/// `None` leaves the property unset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// `top`.
    pub top: Option<f64>,
    /// `left`.
    pub left: Option<f64>,
    /// `max-height`.
    pub max_height: Option<f64>,
}

/// The window's scroll offsets and inner size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll offset (`pageXOffset`).
    pub scroll_x: f64,
    /// Vertical scroll offset (`pageYOffset`).
    pub scroll_y: f64,
    /// `innerWidth`.
    pub inner_width: f64,
    /// `innerHeight`.
    pub inner_height: f64,
}

impl Viewport {
    /// A viewport of the given inner size, unscrolled.
    pub const fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            inner_width,
            inner_height,
        }
    }
}
