// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

pub use crate::direction::ParseDirectionError;

/// An option value rejected by [`OverlayOptions::validate`](crate::OverlayOptions::validate).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A target offset component is NaN or infinite.
    #[error("target offset must be finite, got {0:?}")]
    NonFiniteOffset(crate::placement::TargetOffset),
    /// `max_height` is negative, NaN, or infinite.
    #[error("max height must be a finite, non-negative number of pixels, got {0}")]
    InvalidMaxHeight(f64),
}

/// Errors returned by [`Overlay`](crate::Overlay) lifecycle calls.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OverlayError {
    /// The options were rejected before any element or listener was created.
    #[error("invalid overlay options")]
    Config(#[from] ConfigError),
    /// A direction string did not name one of the twelve directions.
    #[error(transparent)]
    Direction(#[from] ParseDirectionError),
}
