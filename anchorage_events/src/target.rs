// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared event target and scoped listener acquisition.
//!
//! ## Usage
//!
//! 1) Create one [`EventTarget`] per window and hand clones to the components that listen.
//! 2) Components acquire their listeners through a [`ListenerScope`]; dropping or
//!    releasing the scope removes exactly the listeners it added.
//! 3) The host feeds events to [`EventTarget::deliver`], routing each [`Dispatch`]
//!    to whichever component owns the listener.
//!
//! ## Minimal example
//!
//! ```
//! use anchorage_events::{Event, EventKind, EventTarget, ListenerOptions, Outcome};
//!
//! let window: EventTarget<&'static str> = EventTarget::new();
//! {
//!     let mut scope = window.scope();
//!     scope.listen(EventKind::Resize, ListenerOptions::CAPTURE, "reposition");
//!     assert_eq!(window.listener_count(), 1);
//!
//!     let mut seen = Vec::new();
//!     window.deliver(&Event::<u32>::Resize, |d| {
//!         seen.push(d.binding);
//!         Outcome::Continue
//!     });
//!     assert_eq!(seen, ["reposition"]);
//! }
//! // Scope dropped: nothing left behind.
//! assert_eq!(window.listener_count(), 0);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::registry::Registry;
use crate::types::{Dispatch, Event, EventKind, ListenerId, ListenerOptions, Outcome};

/// A shared, single-threaded handle to a listener [`Registry`], standing in for `window`.
///
/// Clones refer to the same registry.
pub struct EventTarget<H> {
    registry: Rc<RefCell<Registry<H>>>,
}

impl<H> Clone for EventTarget<H> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<H> Default for EventTarget<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> core::fmt::Debug for EventTarget<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl<H> EventTarget<H> {
    /// Create a target with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Register a listener outside of any scope.
    ///
    /// Prefer [`EventTarget::scope`], which guarantees removal.
    pub fn listen(&self, kind: EventKind, options: ListenerOptions, binding: H) -> ListenerId {
        let id = self.registry.borrow_mut().add(kind, options, binding);
        tracing::trace!(?id, ?kind, capture = options.capture, "listener added");
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unlisten(&self, id: ListenerId) -> bool {
        let removed = self.registry.borrow_mut().remove(id);
        if removed {
            tracing::trace!(?id, "listener removed");
        }
        removed
    }

    /// True when `id` is currently registered.
    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.registry.borrow().contains(id)
    }

    /// Total number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Number of listeners registered for `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.registry.borrow().count(kind)
    }

    /// Start an empty listener scope on this target.
    pub fn scope(&self) -> ListenerScope<H> {
        ListenerScope {
            target: self.clone(),
            ids: Vec::new(),
        }
    }

    /// Snapshot the dispatch sequence for `event`.
    pub fn dispatch<N>(&self, event: &Event<N>) -> Vec<Dispatch<H>>
    where
        H: Clone,
    {
        self.registry.borrow().dispatch(event)
    }

    /// Run `handler` for every listener matching `event`, capture phase first.
    ///
    /// The sequence is fixed before the first handler runs; listeners added during
    /// delivery do not fire, and listeners removed by an earlier handler are skipped.
    /// Handlers may freely add or remove listeners on this target.
    ///
    /// Returns true if a handler returned [`Outcome::StopAndConsume`].
    pub fn deliver<N, F>(&self, event: &Event<N>, mut handler: F) -> bool
    where
        H: Clone,
        F: FnMut(&Dispatch<H>) -> Outcome,
    {
        let seq = self.dispatch(event);
        let mut i = 0;
        while i < seq.len() {
            let phase = seq[i].phase;
            // Process contiguous entries for the same phase.
            while i < seq.len() && seq[i].phase == phase {
                if self.is_listening(seq[i].listener) {
                    match handler(&seq[i]) {
                        Outcome::Continue => {}
                        Outcome::Stop => {
                            // Skip remaining entries in this phase.
                            while i + 1 < seq.len() && seq[i + 1].phase == phase {
                                i += 1;
                            }
                        }
                        Outcome::StopAndConsume => return true,
                    }
                }
                i += 1;
            }
        }
        false
    }
}

/// Listeners acquired together and released together.
///
/// Release happens on [`ListenerScope::release`] or on drop, whichever comes first,
/// so every exit path of the owner (including early returns and unwinding) leaves
/// no listener behind.
pub struct ListenerScope<H> {
    target: EventTarget<H>,
    ids: Vec<ListenerId>,
}

impl<H> core::fmt::Debug for ListenerScope<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerScope")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl<H> ListenerScope<H> {
    /// Register a listener owned by this scope.
    pub fn listen(&mut self, kind: EventKind, options: ListenerOptions, binding: H) -> ListenerId {
        let id = self.target.listen(kind, options, binding);
        self.ids.push(id);
        id
    }

    /// True when `id` was registered through this scope and is still live.
    pub fn owns(&self, id: ListenerId) -> bool {
        self.ids.contains(&id) && self.target.is_listening(id)
    }

    /// The binding of a listener owned by this scope.
    pub fn binding_of(&self, id: ListenerId) -> Option<H>
    where
        H: Clone,
    {
        if !self.ids.contains(&id) {
            return None;
        }
        self.target.registry.borrow().binding(id).cloned()
    }

    /// Listener handles held by this scope.
    pub fn ids(&self) -> &[ListenerId] {
        &self.ids
    }

    /// True when the scope holds no listeners.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The target this scope registers on.
    pub fn target(&self) -> &EventTarget<H> {
        &self.target
    }

    /// Remove every listener held by this scope. Idempotent.
    pub fn release(&mut self) {
        if self.ids.is_empty() {
            return;
        }
        let mut registry = self.target.registry.borrow_mut();
        for id in self.ids.drain(..) {
            registry.remove(id);
        }
        tracing::debug!(remaining = registry.len(), "listener scope released");
    }
}

impl<H> Drop for ListenerScope<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    enum Binding {
        A,
        B,
        C,
    }

    #[test]
    fn scope_drop_removes_only_its_listeners() {
        let target = EventTarget::new();
        let outside = target.listen(EventKind::Scroll, ListenerOptions::BUBBLE, Binding::C);
        {
            let mut scope = target.scope();
            scope.listen(EventKind::Resize, ListenerOptions::CAPTURE, Binding::A);
            scope.listen(EventKind::Click, ListenerOptions::BUBBLE, Binding::B);
            assert_eq!(target.listener_count(), 3);
        }
        assert_eq!(target.listener_count(), 1);
        assert!(target.is_listening(outside));
    }

    #[test]
    fn release_is_idempotent() {
        let target = EventTarget::new();
        let mut scope = target.scope();
        scope.listen(EventKind::KeyUp, ListenerOptions::CAPTURE, Binding::A);
        scope.release();
        scope.release();
        assert!(scope.is_empty());
        assert_eq!(target.listener_count(), 0);
        drop(scope);
        assert_eq!(target.listener_count(), 0);
    }

    #[test]
    fn scope_ownership_and_bindings() {
        let target = EventTarget::new();
        let mut a = target.scope();
        let mut b = target.scope();
        let ia = a.listen(EventKind::Click, ListenerOptions::BUBBLE, Binding::A);
        let ib = b.listen(EventKind::Click, ListenerOptions::BUBBLE, Binding::B);
        assert!(a.owns(ia));
        assert!(!a.owns(ib));
        assert_eq!(a.binding_of(ia), Some(Binding::A));
        assert_eq!(a.binding_of(ib), None);
        a.release();
        assert!(!a.owns(ia));
    }

    #[test]
    fn deliver_skips_listeners_removed_mid_dispatch() {
        let target = EventTarget::new();
        let mut scope = target.scope();
        scope.listen(EventKind::Click, ListenerOptions::CAPTURE, Binding::A);
        scope.listen(EventKind::Click, ListenerOptions::BUBBLE, Binding::B);
        let mut scope = Some(scope);
        let mut seen = Vec::new();
        let consumed = target.deliver(&Event::Click { target: 0_u32 }, |d| {
            seen.push(d.binding);
            // The first handler tears the whole scope down.
            scope.take();
            Outcome::Continue
        });
        assert!(!consumed);
        assert_eq!(seen, vec![Binding::A]);
        assert_eq!(target.listener_count(), 0);
    }

    #[test]
    fn deliver_ignores_listeners_added_mid_dispatch() {
        let target = EventTarget::new();
        target.listen(EventKind::Resize, ListenerOptions::BUBBLE, Binding::A);
        let mut calls = 0;
        target.deliver(&Event::<u32>::Resize, |_| {
            calls += 1;
            target.listen(EventKind::Resize, ListenerOptions::BUBBLE, Binding::B);
            Outcome::Continue
        });
        assert_eq!(calls, 1);
        assert_eq!(target.count(EventKind::Resize), 2);
    }

    #[test]
    fn stop_skips_rest_of_phase_only() {
        let target = EventTarget::new();
        target.listen(EventKind::Scroll, ListenerOptions::CAPTURE, Binding::A);
        target.listen(EventKind::Scroll, ListenerOptions::CAPTURE, Binding::B);
        target.listen(EventKind::Scroll, ListenerOptions::BUBBLE, Binding::C);
        let mut seen = Vec::new();
        target.deliver(&Event::<u32>::Scroll, |d| {
            seen.push((d.phase, d.binding));
            if d.binding == Binding::A {
                Outcome::Stop
            } else {
                Outcome::Continue
            }
        });
        assert_eq!(
            seen,
            vec![(Phase::Capture, Binding::A), (Phase::Bubble, Binding::C)]
        );
    }

    #[test]
    fn stop_and_consume_aborts_delivery() {
        let target = EventTarget::new();
        target.listen(EventKind::KeyUp, ListenerOptions::CAPTURE, Binding::A);
        target.listen(EventKind::KeyUp, ListenerOptions::BUBBLE, Binding::B);
        let mut seen = Vec::new();
        let consumed = target.deliver(&Event::<u32>::KeyUp { key_code: 27 }, |d| {
            seen.push(d.binding);
            Outcome::StopAndConsume
        });
        assert!(consumed);
        assert_eq!(seen, vec![Binding::A]);
    }
}
