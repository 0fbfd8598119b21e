// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the event target: events, kinds, phases, listener handles, outcomes, and dispatch.
//!
//! ## Overview
//!
//! These types describe the listener protocol and its inputs/outputs.
//! They are referenced by the [`registry`](crate::registry) and the [`target`](crate::target).

/// Key code of the Escape key.
pub const KEY_ESCAPE: u32 = 27;

/// A window-level event.
///
/// `N` is the host's element handle, used for click targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event<N> {
    /// The window was resized.
    Resize,
    /// The document or a scroll container scrolled.
    Scroll,
    /// A click whose innermost target is `target`.
    Click {
        /// Innermost element under the pointer.
        target: N,
    },
    /// A key was released.
    KeyUp {
        /// Legacy `keyCode` of the released key.
        key_code: u32,
    },
}

impl<N> Event<N> {
    /// The kind used to match listeners.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Resize => EventKind::Resize,
            Self::Scroll => EventKind::Scroll,
            Self::Click { .. } => EventKind::Click,
            Self::KeyUp { .. } => EventKind::KeyUp,
        }
    }

    /// True for a key-up of the Escape key.
    pub const fn is_escape(&self) -> bool {
        matches!(self, Self::KeyUp { key_code } if *key_code == KEY_ESCAPE)
    }
}

/// Event type a listener is registered for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// `resize`.
    Resize,
    /// `scroll`.
    Scroll,
    /// `click`.
    Click,
    /// `keyup`.
    KeyUp,
}

impl EventKind {
    /// All kinds, in mask bit order.
    pub const ALL: [Self; 4] = [Self::Resize, Self::Scroll, Self::Click, Self::KeyUp];

    /// The single-bit mask for this kind.
    pub const fn mask(self) -> EventKinds {
        match self {
            Self::Resize => EventKinds::RESIZE,
            Self::Scroll => EventKinds::SCROLL,
            Self::Click => EventKinds::CLICK,
            Self::KeyUp => EventKinds::KEY_UP,
        }
    }
}

bitflags::bitflags! {
    /// A set of event kinds.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventKinds: u8 {
        /// `resize`.
        const RESIZE = 0b0000_0001;
        /// `scroll`.
        const SCROLL = 0b0000_0010;
        /// `click`.
        const CLICK  = 0b0000_0100;
        /// `keyup`.
        const KEY_UP = 0b0000_1000;
    }
}

/// Phases of event propagation at the window.
///
/// Appears on each [`Dispatch`] item produced by
/// [`Registry::dispatch`](crate::registry::Registry::dispatch).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Listeners registered with `capture: true`; run first.
    Capture,
    /// Listeners registered with `capture: false`; run after capture.
    Bubble,
}

/// Options passed when registering a listener.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ListenerOptions {
    /// Register for the capture phase.
    pub capture: bool,
}

impl ListenerOptions {
    /// Capture-phase registration.
    pub const CAPTURE: Self = Self { capture: true };
    /// Bubble-phase registration.
    pub const BUBBLE: Self = Self { capture: false };

    /// The phase these options register for.
    pub const fn phase(self) -> Phase {
        if self.capture {
            Phase::Capture
        } else {
            Phase::Bubble
        }
    }
}

/// Handle of a registered listener.
///
/// Generational: a removed listener's id never matches a later registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(pub(crate) u32, pub(crate) u32);

impl ListenerId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Handler outcome controlling propagation.
///
/// Returned from the callback given to
/// [`EventTarget::deliver`](crate::target::EventTarget::deliver).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Continue within the current phase.
    Continue,
    /// Stop propagation within the current phase.
    Stop,
    /// Stop and mark consumed; remaining phases are skipped.
    StopAndConsume,
}

/// A single dispatch item: one listener to invoke for an event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispatch<H> {
    /// Phase the listener was registered for.
    pub phase: Phase,
    /// Event kind being dispatched.
    pub kind: EventKind,
    /// Listener handle.
    pub listener: ListenerId,
    /// Handler binding stored at registration.
    pub binding: H,
}
