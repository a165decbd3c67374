// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal drag recognizer with a minimum travel distance.
//!
//! ## Overview
//!
//! Swipable rows usually live inside a vertically scrolling list, so a press must travel some
//! distance before it is treated as a swipe; otherwise taps and scrolls would jitter the row.
//! [`HorizontalDragRecognizer`] turns raw pointer input, in the row's local coordinates, into the
//! [`DragEvent`] stream the [`controller`](crate::controller) consumes.
//!
//! ```text
//! Idle --down--> Armed --move >= min_distance--> Dragging --up/cancel--> Idle
//!                  \------------up/cancel------------------------------> Idle
//! ```
//!
//! Translation is always measured from the press origin; the travel spent crossing the minimum
//! distance is not subtracted.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_swipe::gesture::{DragEvent, HorizontalDragRecognizer};
//!
//! let mut r = HorizontalDragRecognizer::new(20.0);
//! r.pointer_down(Point::new(100.0, 10.0));
//! assert_eq!(r.pointer_move(Point::new(110.0, 10.0)), None);
//! assert_eq!(
//!     r.pointer_move(Point::new(130.0, 10.0)),
//!     Some(DragEvent::Update { translation: Vec2::new(30.0, 0.0) })
//! );
//! assert_eq!(r.pointer_up(), Some(DragEvent::End { cancelled: false }));
//! ```

use kurbo::{Point, Vec2};

/// Output of the recognizer, fed to
/// [`SwipeController::apply`](crate::controller::SwipeController::apply).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent {
    /// Pointer moved during an active drag.
    Update {
        /// Total translation since the press, in local coordinates.
        translation: Vec2,
    },
    /// The drag finished. Emitted exactly once per started drag.
    End {
        /// `true` when the host cancelled the gesture rather than the pointer lifting.
        cancelled: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum RecognizerState {
    Idle,
    Armed { origin: Point },
    Dragging { origin: Point },
}

/// Gate that withholds translation until the pointer has travelled `min_distance`.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalDragRecognizer {
    min_distance: f64,
    state: RecognizerState,
}

impl Default for HorizontalDragRecognizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MIN_DRAG_DISTANCE)
    }
}

impl HorizontalDragRecognizer {
    /// Create a recognizer. Negative or non-finite distances behave like zero.
    pub fn new(min_distance: f64) -> Self {
        let min_distance = if min_distance.is_finite() {
            min_distance.max(0.0)
        } else {
            0.0
        };
        Self {
            min_distance,
            state: RecognizerState::Idle,
        }
    }

    /// Configured minimum travel.
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Whether a press is down but has not yet travelled far enough.
    pub fn is_armed(&self) -> bool {
        matches!(self.state, RecognizerState::Armed { .. })
    }

    /// Whether a drag has started and updates are being emitted.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, RecognizerState::Dragging { .. })
    }

    /// Record a press. Ignored while another press is active.
    pub fn pointer_down(&mut self, position: Point) {
        if self.state != RecognizerState::Idle {
            log::debug!("pointer down ignored: press already active");
            return;
        }
        self.state = RecognizerState::Armed { origin: position };
    }

    /// Track pointer motion; returns an update once the drag has started.
    pub fn pointer_move(&mut self, position: Point) -> Option<DragEvent> {
        match self.state {
            RecognizerState::Idle => None,
            RecognizerState::Armed { origin } => {
                let translation = position - origin;
                if translation.hypot2() < self.min_distance * self.min_distance {
                    return None;
                }
                log::debug!("drag started at translation {translation:?}");
                self.state = RecognizerState::Dragging { origin };
                Some(DragEvent::Update { translation })
            }
            RecognizerState::Dragging { origin } => Some(DragEvent::Update {
                translation: position - origin,
            }),
        }
    }

    /// Release the press; ends the drag if one started.
    pub fn pointer_up(&mut self) -> Option<DragEvent> {
        self.finish(false)
    }

    /// Abort the press (for example when a parent scroll view takes over).
    ///
    /// A started drag still ends, so the controller returns to rest.
    pub fn cancel(&mut self) -> Option<DragEvent> {
        self.finish(true)
    }

    fn finish(&mut self, cancelled: bool) -> Option<DragEvent> {
        let was_dragging = self.is_dragging();
        self.state = RecognizerState::Idle;
        if was_dragging {
            log::debug!("drag ended (cancelled: {cancelled})");
            Some(DragEvent::End { cancelled })
        } else {
            None
        }
    }
}
