// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the swipe state machine: edges, phases, transitions, and state snapshots.
//!
//! ## Overview
//!
//! These types describe what the [`controller`](crate::controller) exposes to a renderer and to observers.
//! They carry no behavior beyond small derivations (for example [`SwipeState::phase`]).

/// One horizontal edge of a swipable row.
///
/// Dragging the content right reveals the [`Leading`](Edge::Leading) affordance;
/// dragging it left reveals the [`Trailing`](Edge::Trailing) one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// Left edge in left-to-right layouts; revealed by a positive offset.
    Leading,
    /// Right edge in left-to-right layouts; revealed by a negative offset.
    Trailing,
}

impl Edge {
    /// The sign an offset must have to reveal this edge (`1.0` or `-1.0`).
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Leading => 1.0,
            Self::Trailing => -1.0,
        }
    }

    /// The edge on the other side of the row.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Leading => Self::Trailing,
            Self::Trailing => Self::Leading,
        }
    }

    /// The flag corresponding to this edge.
    #[inline]
    pub const fn flag(self) -> SwipeEdges {
        match self {
            Self::Leading => SwipeEdges::LEADING,
            Self::Trailing => SwipeEdges::TRAILING,
        }
    }
}

bitflags::bitflags! {
    /// Edges that have an action configured and therefore accept drags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SwipeEdges: u8 {
        /// Dragging right is allowed.
        const LEADING  = 0b0000_0001;
        /// Dragging left is allowed.
        const TRAILING = 0b0000_0010;
    }
}

impl Default for SwipeEdges {
    fn default() -> Self {
        Self::empty()
    }
}

impl SwipeEdges {
    /// Clamp a raw horizontal translation so it never points toward a disabled edge.
    ///
    /// Only the sign is constrained; the magnitude passes through unchanged.
    #[must_use]
    pub fn clamp_translation(self, translation_x: f64) -> f64 {
        let mut x = translation_x;
        if !self.contains(Self::LEADING) {
            x = x.min(0.0);
        }
        if !self.contains(Self::TRAILING) {
            x = x.max(0.0);
        }
        x
    }
}

/// Lifecycle phase derived from offset and selection.
///
/// ```text
/// Idle -> Undecided <-> Committed(edge)
///   ^__________|______________|        (drag end)
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwipePhase {
    /// At rest: offset is zero and nothing is selected.
    Idle,
    /// Dragged away from rest but not past the commit threshold.
    Undecided,
    /// Past the commit threshold; releasing now runs the edge's action.
    Committed(Edge),
}

/// A change of the committed selection, reported by
/// [`SwipeController::on_drag_update`](crate::controller::SwipeController::on_drag_update).
///
/// Every change corresponds to exactly one haptic pulse.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SelectionChange {
    /// Selection before the update.
    pub from: Option<Edge>,
    /// Selection after the update.
    pub to: Option<Edge>,
}

impl SelectionChange {
    /// Whether this change committed an edge (rather than releasing one).
    #[inline]
    pub const fn is_commit(&self) -> bool {
        self.to.is_some()
    }
}

/// What a single [`DragEvent`](crate::gesture::DragEvent) did to the controller.
///
/// Returned by [`SwipeController::apply`](crate::controller::SwipeController::apply).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwipeEffect {
    /// An update moved the selection across a threshold.
    Selection(SelectionChange),
    /// A drag ended while `edge` was committed, and its action ran.
    Dispatched(Edge),
}

/// Snapshot of everything a renderer needs from the controller.
///
/// Delivered to [`SwipeObserver`](crate::observer::SwipeObserver)s after each change,
/// and accepted by [`SwipeLayout::compute`](crate::layout::SwipeLayout::compute).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SwipeState {
    /// Signed horizontal displacement of the content.
    pub offset: f64,
    /// The edge whose action would run on release, if any.
    pub selection: Option<Edge>,
    /// Last measured content width; zero until measured.
    pub content_width: f64,
}

impl SwipeState {
    /// Derive the lifecycle phase.
    pub fn phase(&self) -> SwipePhase {
        match self.selection {
            Some(edge) => SwipePhase::Committed(edge),
            None if self.offset == 0.0 => SwipePhase::Idle,
            None => SwipePhase::Undecided,
        }
    }

    /// The edge currently being revealed by the offset, regardless of selection.
    pub fn revealed_edge(&self) -> Option<Edge> {
        if self.offset > 0.0 {
            Some(Edge::Leading)
        } else if self.offset < 0.0 {
            Some(Edge::Trailing)
        } else {
            None
        }
    }
}
