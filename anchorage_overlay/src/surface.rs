// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted overlay element tree.
//!
//! ```text
//! div.event-overlay[.event-overlay--arrow].event-overlay--{side}[.{class_name}]
//! ├── div.event-overlay__arrow        (only when the arrow is shown)
//! └── div.event-overlay__children     (the positioned container)
//! ```

use alloc::string::String;

use anchorage_dom::{DomMut, Style};

use crate::direction::Side;
use crate::placement::Placement;

/// Class of the surface root.
pub const ROOT_CLASS: &str = "event-overlay";
/// Class of the arrow element.
pub const ARROW_CLASS: &str = "event-overlay__arrow";
/// Class of the content container.
pub const CONTAINER_CLASS: &str = "event-overlay__children";

/// Class list of the surface root for the given side and options.
pub fn root_class(side: Side, show_arrow: bool, class_name: &str) -> String {
    let mut class = String::from(ROOT_CLASS);
    if show_arrow {
        class.push(' ');
        class.push_str(ROOT_CLASS);
        class.push_str("--arrow");
    }
    class.push(' ');
    class.push_str(ROOT_CLASS);
    class.push_str("--");
    class.push_str(side.as_str());
    if !class_name.is_empty() {
        class.push(' ');
        class.push_str(class_name);
    }
    class
}

/// Handles to the elements of one mounted overlay.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Surface<N> {
    root: N,
    arrow: Option<N>,
    container: N,
}

impl<N: Copy + Eq + core::fmt::Debug> Surface<N> {
    /// Build the element tree under `host`.
    pub fn mount<D>(
        dom: &mut D,
        host: Option<N>,
        side: Side,
        show_arrow: bool,
        class_name: &str,
    ) -> Self
    where
        D: DomMut<Node = N> + ?Sized,
    {
        let root = dom.create_element(host, &root_class(side, show_arrow, class_name));
        let arrow = show_arrow.then(|| dom.create_element(Some(root), ARROW_CLASS));
        let container = dom.create_element(Some(root), CONTAINER_CLASS);
        Self {
            root,
            arrow,
            container,
        }
    }

    /// Root element.
    pub fn root(&self) -> N {
        self.root
    }

    /// Arrow element, when shown.
    pub fn arrow(&self) -> Option<N> {
        self.arrow
    }

    /// Content container; the element that is positioned and measured.
    pub fn container(&self) -> N {
        self.container
    }

    /// Bring the class list and arrow presence in line with the options.
    ///
    /// An arrow added here goes before the container, as on mount.
    pub fn sync<D>(&mut self, dom: &mut D, side: Side, show_arrow: bool, class_name: &str)
    where
        D: DomMut<Node = N> + ?Sized,
    {
        dom.set_class_name(self.root, &root_class(side, show_arrow, class_name));
        match (self.arrow, show_arrow) {
            (None, true) => {
                self.arrow = Some(dom.create_element_before(self.container, ARROW_CLASS));
            }
            (Some(arrow), false) => {
                dom.remove_element(arrow);
                self.arrow = None;
            }
            _ => {}
        }
    }

    /// Write the container height cap, leaving its position alone.
    pub fn cap<D>(&self, dom: &mut D, max_height: Option<f64>)
    where
        D: DomMut<Node = N> + ?Sized,
    {
        dom.set_style(
            self.container,
            Style {
                max_height,
                ..Style::default()
            },
        );
    }

    /// Write a placement's styles to the container and arrow.
    pub fn apply<D>(&self, dom: &mut D, placement: &Placement)
    where
        D: DomMut<Node = N> + ?Sized,
    {
        dom.set_style(self.container, placement.target_style());
        if let (Some(arrow), Some(style)) = (self.arrow, placement.arrow_style()) {
            dom.set_style(arrow, style);
        }
    }

    /// Remove the whole tree.
    pub fn unmount<D>(self, dom: &mut D)
    where
        D: DomMut<Node = N> + ?Sized,
    {
        dom.remove_element(self.root);
    }
}
