// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorage DOM: the element model that overlay positioning reads from and writes to.
//!
//! - [`Dom`] and [`DomMut`] are the host traits: bounding boxes, offset sizes,
//!   computed overflow, ancestry, focus, the viewport, and the handful of writes an
//!   overlay surface performs.
//! - [`Document`] is a headless implementation with generational [`NodeId`]s,
//!   caller-supplied layout, and inline styles that behave like `position: fixed`.
//!
//! ## Not a layout engine
//!
//! Boxes are set by the caller with [`Document::set_bounds`]. The document never
//! measures or arranges content; it only stores the results so that positioning
//! code can query them the way it would query a browser.
//!
//! ## Minimal usage
//!
//! ```
//! use anchorage_dom::{Document, Dom, Element, Overflow, OverflowStyle, Viewport};
//! use kurbo::Rect;
//!
//! let mut doc = Document::new(Viewport::new(800.0, 600.0));
//! let root = doc.root();
//!
//! let list = doc.insert(
//!     Some(root),
//!     Element {
//!         bounds: Rect::new(0.0, 0.0, 300.0, 200.0),
//!         overflow: OverflowStyle::vertical(Overflow::Auto),
//!         ..Default::default()
//!     },
//! );
//! let row = doc.insert(
//!     Some(list),
//!     Element { bounds: Rect::new(0.0, 40.0, 300.0, 80.0), ..Default::default() },
//! );
//!
//! assert!(doc.contains(list, row));
//! assert!(doc.overflow(list).is_scrollable());
//! assert_eq!(doc.bounding_rect(row).map(|r| r.height()), Some(40.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod host;
mod types;

pub use document::{Document, Element};
pub use host::{Dom, DomMut};
pub use types::{NodeFlags, NodeId, Overflow, OverflowStyle, ParseOverflowError, Style, Viewport};
