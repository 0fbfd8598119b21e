// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchorage Events: a deterministic, `no_std` window-level event target.
//!
//! ## Overview
//!
//! Components that float above the page (tooltips, menus, popovers) listen on the
//! window for `resize`, `scroll`, `click`, and `keyup`. This crate models that
//! facility without a browser:
//!
//! - [`Event`] is the typed event, generic over the host's element handle.
//! - [`Registry`](registry::Registry) stores listeners as `(kind, phase, binding)` and emits
//!   capture listeners before bubble listeners, each in registration order.
//! - [`EventTarget`] is the shared handle standing in for `window`;
//!   [`EventTarget::deliver`] walks the sequence and honors [`Outcome`].
//! - [`ListenerScope`] ties a set of listeners to an owner's lifetime and removes
//!   them on release or drop.
//!
//! ## Bindings, not closures
//!
//! Listeners carry a caller-chosen binding value instead of a closure. The owner
//! keeps the [`ListenerId`]s it registered and maps each [`Dispatch`] back to a
//! handler through the binding. Removal therefore always targets the exact
//! listener that was added, and the event target never holds a reference back
//! into its listeners.
//!
//! ## Layering
//!
//! The registry only computes the invocation order. [`EventTarget::deliver`] is the
//! dispatcher: it skips listeners removed mid-delivery and lets handlers stop a
//! phase or consume the event.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod registry;
pub mod target;
pub mod types;

pub use target::{EventTarget, ListenerScope};
pub use types::{
    Dispatch, Event, EventKind, EventKinds, KEY_ESCAPE, ListenerId, ListenerOptions, Outcome,
    Phase,
};
