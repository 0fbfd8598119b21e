// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay lifecycle controller.
//!
//! [`Overlay`] owns everything an open overlay holds: the mounted [`Surface`],
//! the window listeners (through a [`ListenerScope`]), and the last placement.
//! Opening acquires all three; closing or unmounting releases all three,
//! whatever the previous state was.
//!
//! The controller never hides itself. Dismissal calls the close callback, and the
//! caller decides whether to pass `is_open: false` back through [`Overlay::update`].

use alloc::boxed::Box;

use anchorage_dom::{Dom, DomMut};
use anchorage_events::{
    Dispatch, Event, EventKind, EventKinds, EventTarget, ListenerOptions, ListenerScope,
};

use crate::direction::Direction;
use crate::error::OverlayError;
use crate::geometry::{anchor_rect, target_rect};
use crate::options::OverlayOptions;
use crate::placement::{self, Boundary, FlipInput, Placement, PlacementInput};
use crate::scroll::scroll_parent;
use crate::surface::Surface;

/// Listener bindings registered on the window by an open overlay.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Handler {
    /// Re-run the placement pass (`resize`, `scroll`).
    Reposition,
    /// Escape or focus-away dismissal (`keyup`).
    KeyUp,
    /// Outside-click dismissal (`click`).
    ClickAway,
}

/// Where an overlay is in its lifecycle.
///
/// `Opening` and `Closing` are held only while the corresponding transition runs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LifecycleState {
    /// Nothing mounted, no listeners.
    #[default]
    Closed,
    /// Acquiring the surface and listeners.
    Opening,
    /// Mounted and listening.
    Open,
    /// Releasing the surface and listeners.
    Closing,
}

type ContentFn<D> = Box<dyn FnMut(&mut D, <D as Dom>::Node)>;
type CloseFn<N> = Box<dyn FnMut(&Event<N>)>;

/// A positioned, dismissable overlay.
///
/// ```
/// use anchorage_dom::{Document, Viewport};
/// use anchorage_events::EventTarget;
/// use anchorage_overlay::{Direction, Overlay, OverlayOptions};
/// use kurbo::Rect;
///
/// let mut doc = Document::new(Viewport::new(800.0, 600.0));
/// let root = doc.root();
/// let button = doc.insert(Some(root), Default::default());
/// doc.set_bounds(button, Rect::new(20.0, 20.0, 120.0, 50.0));
///
/// let window = EventTarget::new();
/// let options = OverlayOptions::default()
///     .with_open(true)
///     .with_anchor(button)
///     .with_direction(Direction::BottomLeft);
/// let mut overlay = Overlay::new(&window, Some(root), options);
/// overlay.mount(&mut doc).unwrap();
///
/// let placement = overlay.last_placement().unwrap();
/// assert_eq!((placement.target.x, placement.target.y), (20.0, 50.0));
///
/// overlay.unmount(&mut doc);
/// assert_eq!(window.listener_count(), 0);
/// ```
pub struct Overlay<D: DomMut> {
    options: OverlayOptions<D::Node>,
    host: Option<D::Node>,
    state: LifecycleState,
    listeners: ListenerScope<Handler>,
    kinds: EventKinds,
    surface: Option<Surface<D::Node>>,
    visible_direction: Direction,
    last_placement: Option<Placement>,
    content: Option<ContentFn<D>>,
    close: Option<CloseFn<D::Node>>,
}

impl<D: DomMut> core::fmt::Debug for Overlay<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Overlay")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("visible_direction", &self.visible_direction)
            .field("listeners", &self.kinds)
            .field("surface", &self.surface)
            .field("last_placement", &self.last_placement)
            .finish_non_exhaustive()
    }
}

impl<D: DomMut> Overlay<D> {
    /// Create a closed overlay that will mount under `host` and listen on `window`.
    ///
    /// Nothing is created until [`Overlay::mount`].
    pub fn new(
        window: &EventTarget<Handler>,
        host: Option<D::Node>,
        options: OverlayOptions<D::Node>,
    ) -> Self {
        let visible_direction = options.direction;
        Self {
            options,
            host,
            state: LifecycleState::Closed,
            listeners: window.scope(),
            kinds: EventKinds::empty(),
            surface: None,
            visible_direction,
            last_placement: None,
            content: None,
            close: None,
        }
    }

    /// Set the callback that fills the content container after each mount.
    pub fn set_content(&mut self, content: impl FnMut(&mut D, D::Node) + 'static) {
        self.content = Some(Box::new(content));
    }

    /// Set the callback invoked with the triggering event on dismissal.
    pub fn on_close(&mut self, close: impl FnMut(&Event<D::Node>) + 'static) {
        self.close = Some(Box::new(close));
    }

    /// Current options.
    pub fn options(&self) -> &OverlayOptions<D::Node> {
        &self.options
    }

    /// Lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// True when mounted and listening.
    pub fn is_open(&self) -> bool {
        self.state == LifecycleState::Open
    }

    /// Direction actually rendered; differs from the requested one after a flip.
    pub fn visible_direction(&self) -> Direction {
        self.visible_direction
    }

    /// Placement written by the most recent successful pass while open.
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Mounted element tree.
    pub fn surface(&self) -> Option<&Surface<D::Node>> {
        self.surface.as_ref()
    }

    /// Content container, while open.
    pub fn container(&self) -> Option<D::Node> {
        self.surface.as_ref().map(Surface::container)
    }

    /// Event kinds currently listened for.
    pub fn bindings(&self) -> EventKinds {
        self.kinds
    }

    /// Validate the options and open if `is_open` is set.
    pub fn mount(&mut self, dom: &mut D) -> Result<(), OverlayError> {
        self.options.validate()?;
        if self.options.is_open && self.state == LifecycleState::Closed {
            self.open(dom);
        }
        Ok(())
    }

    /// Replace the options and reconcile.
    ///
    /// Invalid options are rejected before anything changes. Opening resets the
    /// visible direction and runs a fresh placement pass; so does any change while
    /// open, so a flip decision never outlives the direction it was made for.
    pub fn update(
        &mut self,
        dom: &mut D,
        options: OverlayOptions<D::Node>,
    ) -> Result<(), OverlayError> {
        options.validate()?;
        let prev = core::mem::replace(&mut self.options, options);
        match (self.state, self.options.is_open) {
            (LifecycleState::Closed, true) => self.open(dom),
            (LifecycleState::Open, false) => self.close(dom),
            (LifecycleState::Open, true) if prev != self.options => {
                if prev.allow_click_away != self.options.allow_click_away {
                    self.release_listeners();
                    self.acquire_listeners();
                }
                if prev.direction != self.options.direction {
                    tracing::debug!(
                        from = %prev.direction,
                        to = %self.options.direction,
                        "direction changed"
                    );
                    self.visible_direction = self.options.direction;
                }
                if prev.max_height != self.options.max_height
                    && let Some(surface) = &self.surface
                {
                    surface.cap(dom, self.options.max_height);
                }
                self.sync_surface(dom);
                self.reposition(dom);
            }
            _ => {}
        }
        Ok(())
    }

    /// Close unconditionally: remove the surface and every listener.
    ///
    /// Safe to call in any state, any number of times.
    pub fn unmount(&mut self, dom: &mut D) {
        self.close(dom);
    }

    /// Handle one dispatch delivered by the window.
    ///
    /// Dispatches for listeners this overlay does not own are ignored. Returns true
    /// when the close callback was invoked.
    pub fn handle(
        &mut self,
        dom: &mut D,
        dispatch: &Dispatch<Handler>,
        event: &Event<D::Node>,
    ) -> bool {
        if !self.listeners.owns(dispatch.listener) || dispatch.kind != event.kind() {
            return false;
        }
        match (dispatch.binding, event) {
            (Handler::Reposition, Event::Resize | Event::Scroll) => {
                self.reposition(dom);
                false
            }
            (Handler::KeyUp, Event::KeyUp { .. }) => {
                if self.should_dismiss_on_key(dom, event) {
                    self.dismiss(event)
                } else {
                    false
                }
            }
            (Handler::ClickAway, Event::Click { target }) => {
                if self.should_dismiss_on_click(dom, *target) {
                    self.dismiss(event)
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Run a full placement pass and write it to the surface.
    ///
    /// Returns `None` without touching anything when the overlay is not open or
    /// the anchor or container is missing or detached.
    pub fn reposition(&mut self, dom: &mut D) -> Option<Placement> {
        if !matches!(self.state, LifecycleState::Opening | LifecycleState::Open) {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let container = surface.container();
        if !dom.is_attached(container) {
            tracing::trace!("placement skipped: container detached");
            return None;
        }
        let Some(anchor) = self.options.anchor.filter(|&a| dom.is_attached(a)) else {
            tracing::trace!("placement skipped: no attached anchor");
            return None;
        };

        let anchor = anchor_rect(dom, anchor);
        let target = target_rect(dom, container);
        let direction = if self.options.is_dynamic {
            let arrow_height = surface
                .arrow()
                .map_or(0.0, |arrow| dom.offset_size(arrow).height);
            let boundary = Boundary {
                parent_bottom: scroll_parent(dom, container)
                    .bounding_rect(dom)
                    .map(|r| r.y1),
                viewport_bottom: self
                    .options
                    .fallback_boundary
                    .viewport_bottom(&dom.viewport()),
            };
            let flip = FlipInput {
                anchor,
                target_height: target.height(),
                arrow_height,
                boundary,
            };
            placement::resolve_direction(
                self.options.direction,
                true,
                &self.options.target_offset,
                &flip,
            )
        } else {
            self.options.direction
        };

        if direction != self.visible_direction {
            tracing::debug!(from = %self.visible_direction, to = %direction, "overlay flipped");
            self.visible_direction = direction;
            self.sync_surface(dom);
        }

        let placement = placement::compute(&PlacementInput {
            direction,
            anchor,
            target,
            offset: self.options.target_offset,
            max_height: self.options.max_height,
            show_arrow: self.options.show_arrow,
        });
        if let Some(surface) = &self.surface {
            surface.apply(dom, &placement);
        }
        tracing::trace!(
            direction = %placement.direction,
            x = placement.target.x,
            y = placement.target.y,
            "placement pass"
        );
        self.last_placement = Some(placement);
        Some(placement)
    }

    fn open(&mut self, dom: &mut D) {
        self.state = LifecycleState::Opening;
        tracing::debug!(direction = %self.options.direction, "overlay opening");
        self.visible_direction = self.options.direction;
        let surface = Surface::mount(
            dom,
            self.host,
            self.visible_direction.side(),
            self.options.show_arrow,
            &self.options.class_name,
        );
        surface.cap(dom, self.options.max_height);
        if let Some(content) = self.content.as_mut() {
            content(dom, surface.container());
        }
        self.surface = Some(surface);
        self.acquire_listeners();
        self.reposition(dom);
        self.state = LifecycleState::Open;
    }

    fn close(&mut self, dom: &mut D) {
        if self.state != LifecycleState::Closed {
            self.state = LifecycleState::Closing;
            tracing::debug!("overlay closing");
        }
        self.release_listeners();
        if let Some(surface) = self.surface.take() {
            surface.unmount(dom);
        }
        self.last_placement = None;
        self.state = LifecycleState::Closed;
    }

    fn acquire_listeners(&mut self) {
        let scope = &mut self.listeners;
        scope.listen(EventKind::Resize, ListenerOptions::CAPTURE, Handler::Reposition);
        scope.listen(EventKind::Scroll, ListenerOptions::BUBBLE, Handler::Reposition);
        scope.listen(EventKind::KeyUp, ListenerOptions::CAPTURE, Handler::KeyUp);
        self.kinds = EventKinds::RESIZE | EventKinds::SCROLL | EventKinds::KEY_UP;
        if self.options.allow_click_away {
            scope.listen(EventKind::Click, ListenerOptions::BUBBLE, Handler::ClickAway);
            self.kinds |= EventKinds::CLICK;
        }
        tracing::debug!(kinds = ?self.kinds, "overlay listeners acquired");
    }

    fn release_listeners(&mut self) {
        self.listeners.release();
        self.kinds = EventKinds::empty();
    }

    fn sync_surface(&mut self, dom: &mut D) {
        if let Some(surface) = self.surface.as_mut() {
            surface.sync(
                dom,
                self.visible_direction.side(),
                self.options.show_arrow,
                &self.options.class_name,
            );
        }
    }

    /// True when `node` lies inside the anchor. A missing anchor contains nothing.
    fn anchor_contains(&self, dom: &D, node: D::Node) -> bool {
        self.options
            .anchor
            .is_some_and(|anchor| dom.contains(anchor, node))
    }

    fn content_contains(&self, dom: &D, node: D::Node) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|s| dom.contains(s.container(), node))
    }

    fn should_dismiss_on_key(&self, dom: &D, event: &Event<D::Node>) -> bool {
        if !self.is_open() || self.surface.is_none() {
            return false;
        }
        if event.is_escape() {
            return true;
        }
        match dom.active_element() {
            Some(active) => {
                !self.anchor_contains(dom, active) && !self.content_contains(dom, active)
            }
            None => true,
        }
    }

    fn should_dismiss_on_click(&self, dom: &D, target: D::Node) -> bool {
        if !self.is_open() || self.surface.is_none() {
            return false;
        }
        !self.anchor_contains(dom, target)
            && (self.options.close_on_click || !self.content_contains(dom, target))
    }

    fn dismiss(&mut self, event: &Event<D::Node>) -> bool {
        tracing::debug!(kind = ?event.kind(), "overlay dismissed");
        match self.close.as_mut() {
            Some(close) => {
                close(event);
                true
            }
            None => false,
        }
    }
}
