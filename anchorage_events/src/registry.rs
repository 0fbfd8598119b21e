// Copyright 2025 the Anchorage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registry.
//!
//! ## Overview
//!
//! Stores listeners as `(kind, phase, binding)` triples and emits a deterministic
//! dispatch order for an event: every capture listener for the event's kind, then
//! every bubble listener, each group in registration order.
//!
//! ## Bindings
//!
//! A listener's binding `H` is plain data chosen by the caller (typically a small
//! enum naming which handler to run). The registry never calls anything itself;
//! a higher-level dispatcher such as [`EventTarget::deliver`](crate::target::EventTarget::deliver)
//! walks the sequence and runs handlers. Because the binding is stored, removal
//! always targets exactly the listener that was added.

use alloc::vec::Vec;

use crate::types::{Dispatch, Event, EventKind, ListenerId, ListenerOptions, Phase};

#[derive(Clone, Debug)]
struct Slot<H> {
    generation: u32,
    seq: u64,
    kind: EventKind,
    phase: Phase,
    binding: H,
}

/// Listener storage with generational handles.
#[derive(Clone, Debug)]
pub struct Registry<H> {
    slots: Vec<Option<Slot<H>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    next_seq: u64,
    len: usize,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Registry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            next_seq: 0,
            len: 0,
        }
    }

    /// Register a listener and return its handle.
    pub fn add(&mut self, kind: EventKind, options: ListenerOptions, binding: H) -> ListenerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let idx = if let Some(idx) = self.free_list.pop() {
            self.generations[idx] += 1;
            idx
        } else {
            self.slots.push(None);
            self.generations.push(1);
            self.slots.len() - 1
        };
        let generation = self.generations[idx];
        self.slots[idx] = Some(Slot {
            generation,
            seq,
            kind,
            phase: options.phase(),
            binding,
        });
        self.len += 1;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ListenerId stores 32-bit slot indices."
        )]
        ListenerId(idx as u32, generation)
    }

    /// Remove a listener. Returns false if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        self.len -= 1;
        true
    }

    /// True when `id` is currently registered.
    pub fn contains(&self, id: ListenerId) -> bool {
        self.slot(id).is_some()
    }

    /// The binding stored for `id`.
    pub fn binding(&self, id: ListenerId) -> Option<&H> {
        self.slot(id).map(|s| &s.binding)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of listeners registered for `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.kind == kind)
            .count()
    }

    /// Produce the dispatch sequence for `event`.
    pub fn dispatch<N>(&self, event: &Event<N>) -> Vec<Dispatch<H>>
    where
        H: Clone,
    {
        let kind = event.kind();
        let mut matched: Vec<(u8, u64, usize)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let s = s.as_ref()?;
                let rank = match s.phase {
                    Phase::Capture => 0,
                    Phase::Bubble => 1,
                };
                (s.kind == kind).then_some((rank, s.seq, i))
            })
            .collect();
        matched.sort_unstable();

        matched
            .into_iter()
            .filter_map(|(_, _, i)| {
                let s = self.slots[i].as_ref()?;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "ListenerId stores 32-bit slot indices."
                )]
                Some(Dispatch {
                    phase: s.phase,
                    kind,
                    listener: ListenerId(i as u32, s.generation),
                    binding: s.binding.clone(),
                })
            })
            .collect()
    }

    fn slot(&self, id: ListenerId) -> Option<&Slot<H>> {
        let s = self.slots.get(id.idx())?.as_ref()?;
        (s.generation == id.1).then_some(s)
    }
}
