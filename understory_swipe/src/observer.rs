// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification for renderers.
//!
//! A renderer subscribes to a [`SwipeController`](crate::controller::SwipeController) and receives a
//! [`SwipeState`] snapshot after every change of offset, selection, or measured width.
//! It can then recompute its presentation as a pure function of that snapshot
//! (see [`SwipeLayout::compute`](crate::layout::SwipeLayout::compute)).
//!
//! Closures of the form `FnMut(&SwipeState)` implement [`SwipeObserver`].

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::SwipeState;

/// Receiver of state snapshots.
pub trait SwipeObserver {
    /// Called after the controller's state changed.
    fn swipe_changed(&mut self, state: &SwipeState);
}

impl<F: FnMut(&SwipeState)> SwipeObserver for F {
    #[inline]
    fn swipe_changed(&mut self, state: &SwipeState) {
        self(state);
    }
}

/// Handle returned by [`SwipeController::subscribe`](crate::controller::SwipeController::subscribe).
///
/// Identifiers are never reused within one controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered list of observers; notified in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn SwipeObserver>)>,
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn SwipeObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, state: &SwipeState) {
        for (_, observer) in &mut self.entries {
            observer.swipe_changed(state);
        }
    }
}
