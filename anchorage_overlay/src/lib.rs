// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorage Overlay: anchored tooltips, menus, and popovers.
//!
//! ## Overview
//!
//! An overlay is a floating surface positioned against an anchor element in one of
//! twelve [`Direction`]s. This crate computes where it goes and manages its lifetime:
//!
//! - [`geometry`] snapshots the anchor and the rendered target as edge sets.
//! - [`scroll`] finds the nearest scrollable ancestor bounding the overlay.
//! - [`placement`] decides whether a dynamic overlay flips between bottom and top,
//!   maps the direction to the coinciding edges, and computes target and arrow
//!   coordinates.
//! - [`Surface`] is the mounted element tree the coordinates are written to.
//! - [`Overlay`] ties these together with window listeners for `resize`, `scroll`,
//!   `keyup`, and `click`, and reports dismissal to a close callback.
//!
//! The engine reads and writes elements only through the [`Dom`](anchorage_dom::Dom)
//! traits, so it runs against [`anchorage_dom::Document`] or any other host.
//!
//! ## Placement
//!
//! Placement is a pure function of geometry: the same anchor, target, and boundary
//! always produce the same coordinates, so it is safe to re-run from every trigger.
//!
//! ```
//! use anchorage_overlay::geometry::{AnchorRect, TargetRect};
//! use anchorage_overlay::placement::{compute, PlacementInput};
//! use anchorage_overlay::{Direction, TargetOffset};
//! use kurbo::{Rect, Size};
//!
//! let anchor = AnchorRect::from_rect(Rect::new(100.0, 50.0, 180.0, 90.0), Size::new(80.0, 40.0));
//! let target = TargetRect::from_size(Size::new(120.0, 60.0));
//! let placement = compute(&PlacementInput {
//!     direction: Direction::BottomCenter,
//!     anchor,
//!     target,
//!     offset: TargetOffset::new(0.0, 4.0),
//!     show_arrow: true,
//!     ..Default::default()
//! });
//! assert_eq!((placement.target.x, placement.target.y), (80.0, 94.0));
//! assert_eq!(placement.arrow.map(|p| (p.x, p.y)), Some((140.0, 94.0)));
//! ```
//!
//! ## Listeners
//!
//! An open overlay holds its listeners in a
//! [`ListenerScope`](anchorage_events::ListenerScope): closing, unmounting, and
//! dropping all release them, so an overlay never outlives its listeners or leaves
//! them behind.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod controller;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod options;
pub mod placement;
pub mod scroll;
pub mod surface;

#[cfg(test)]
mod mock;

pub use controller::{Handler, LifecycleState, Overlay};
pub use direction::{Alignment, Direction, Side};
pub use error::{ConfigError, OverlayError, ParseDirectionError};
pub use options::OverlayOptions;
pub use placement::{FallbackBoundary, Placement, TargetOffset};
pub use scroll::ScrollParent;
pub use surface::Surface;
