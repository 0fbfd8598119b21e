// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement directions: a side of the anchor plus an alignment along that side.

use core::fmt;
use core::str::FromStr;

/// Side of the anchor the overlay renders on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// True for `Top` and `Bottom`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The facing side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, as used in direction strings and class names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment along the chosen side.
///
/// `Left`/`Right` pair with vertical sides; `Top`/`Bottom` pair with horizontal
/// sides; `Center` pairs with either.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Centered on the anchor.
    Center,
    /// Left edges aligned.
    Left,
    /// Right edges aligned.
    Right,
    /// Top edges aligned.
    Top,
    /// Bottom edges aligned.
    Bottom,
}

impl Alignment {
    /// Lowercase name, as used in direction strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Requested or resolved placement.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[allow(missing_docs, reason = "Variant names spell out side and alignment.")]
pub enum Direction {
    TopCenter,
    LeftCenter,
    RightCenter,
    BottomCenter,
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl Direction {
    /// Every direction, in canonical order.
    pub const ALL: [Self; 12] = [
        Self::TopCenter,
        Self::LeftCenter,
        Self::RightCenter,
        Self::BottomCenter,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Combine a side and an alignment, if the pair is one of the twelve directions.
    pub const fn new(side: Side, alignment: Alignment) -> Option<Self> {
        use Alignment as A;
        use Side as S;
        Some(match (side, alignment) {
            (S::Top, A::Center) => Self::TopCenter,
            (S::Top, A::Left) => Self::TopLeft,
            (S::Top, A::Right) => Self::TopRight,
            (S::Bottom, A::Center) => Self::BottomCenter,
            (S::Bottom, A::Left) => Self::BottomLeft,
            (S::Bottom, A::Right) => Self::BottomRight,
            (S::Left, A::Center) => Self::LeftCenter,
            (S::Left, A::Top) => Self::LeftTop,
            (S::Left, A::Bottom) => Self::LeftBottom,
            (S::Right, A::Center) => Self::RightCenter,
            (S::Right, A::Top) => Self::RightTop,
            (S::Right, A::Bottom) => Self::RightBottom,
            _ => return None,
        })
    }

    /// The side (first token).
    pub const fn side(self) -> Side {
        match self {
            Self::TopCenter | Self::TopLeft | Self::TopRight => Side::Top,
            Self::BottomCenter | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::LeftCenter | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::RightCenter | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    /// The alignment (second token).
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::TopCenter | Self::BottomCenter | Self::LeftCenter | Self::RightCenter => {
                Alignment::Center
            }
            Self::TopLeft | Self::BottomLeft => Alignment::Left,
            Self::TopRight | Self::BottomRight => Alignment::Right,
            Self::LeftTop | Self::RightTop => Alignment::Top,
            Self::LeftBottom | Self::RightBottom => Alignment::Bottom,
        }
    }

    /// Same alignment on another side, if that pairing exists.
    ///
    /// Only sides on the same axis are guaranteed to succeed.
    pub const fn with_side(self, side: Side) -> Option<Self> {
        Self::new(side, self.alignment())
    }

    /// The `side-alignment` string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopCenter => "top-center",
            Self::LeftCenter => "left-center",
            Self::RightCenter => "right-center",
            Self::BottomCenter => "bottom-center",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction string is not one of the twelve directions.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized direction {input:?}; expected one of top-center, bottom-left, left-top, ...")]
pub struct ParseDirectionError {
    input: alloc::string::String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseDirectionError { input: s.into() })
    }
}
