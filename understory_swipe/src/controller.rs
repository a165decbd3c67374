// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe state machine.
//!
//! ## Overview
//!
//! [`SwipeController`] converts a horizontal drag translation into:
//! - a visual offset (sign-clamped toward edges that have an action),
//! - a committed selection with hysteresis,
//! - one haptic pulse per selection transition,
//! - at most one action invocation when the drag ends.
//!
//! ## Thresholds
//!
//! With `w` the measured content width and the default tuning:
//! - an undecided drag commits [`Leading`](Edge::Leading) when `offset > w / 2` and
//!   [`Trailing`](Edge::Trailing) when `offset < -w / 2`;
//! - a committed drag releases when `|offset| < w / 2 - 20`, whichever side of rest the offset
//!   is on.
//!
//! The 20 unit gap between commit and release is the hysteresis band. While the width is still
//! unmeasured (zero) no selection is ever committed; the offset still tracks the drag.
//!
//! ## Lifecycle
//!
//! [`on_drag_end`](SwipeController::on_drag_end) runs the committed edge's action first, then
//! resets to rest. Every drag, completed or cancelled, must end through it.
//!
//! ```
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::controller::SwipeController;
//! use understory_swipe::types::{Edge, SwipePhase};
//!
//! let config = SwipeConfig::builder()
//!     .trailing("archive", "blue", || {})
//!     .build()
//!     .unwrap();
//! let mut c = SwipeController::new(config);
//! c.on_content_measured(200.0);
//!
//! c.on_drag_update(-250.0);
//! assert_eq!(c.phase(), SwipePhase::Committed(Edge::Trailing));
//! assert_eq!(c.on_drag_end(), Some(Edge::Trailing));
//! assert_eq!(c.phase(), SwipePhase::Idle);
//! ```

use alloc::boxed::Box;

use crate::config::{EdgeAction, SwipeConfig, SwipeTuning};
use crate::gesture::DragEvent;
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::observer::{Observers, SubscriptionId, SwipeObserver};
use crate::types::{Edge, SelectionChange, SwipeEdges, SwipeEffect, SwipePhase, SwipeState};

/// Drag-offset tracker and commit/cancel state machine for one swipable item.
///
/// ## Usage
///
/// - Build a [`SwipeConfig`] and construct with [`SwipeController::new`], or with
///   [`SwipeController::with_haptics`] to receive pulses.
/// - Forward layout measurements to [`on_content_measured`](Self::on_content_measured).
/// - Forward the drag stream to [`on_drag_update`](Self::on_drag_update) and
///   [`on_drag_end`](Self::on_drag_end), or feed [`DragEvent`]s to [`apply`](Self::apply).
/// - Read [`state`](Self::state) for rendering, or [`subscribe`](Self::subscribe) to be told
///   about changes.
pub struct SwipeController<I, C, H: HapticFeedback = NoHaptics> {
    config: SwipeConfig<I, C>,
    enabled: SwipeEdges,
    haptics: H,
    state: SwipeState,
    observers: Observers,
}

impl<I, C, H: HapticFeedback> core::fmt::Debug for SwipeController<I, C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeController")
            .field("enabled", &self.enabled)
            .field("state", &self.state)
            .field("tuning", &self.config.tuning)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl<I, C> SwipeController<I, C, NoHaptics> {
    /// Create a controller that drops haptic pulses.
    pub fn new(config: SwipeConfig<I, C>) -> Self {
        Self::with_haptics(config, NoHaptics)
    }
}

impl<I, C, H: HapticFeedback> SwipeController<I, C, H> {
    /// Create a controller that reports selection transitions to `haptics`.
    pub fn with_haptics(config: SwipeConfig<I, C>, haptics: H) -> Self {
        Self {
            enabled: config.enabled_edges(),
            config,
            haptics,
            state: SwipeState::default(),
            observers: Observers::default(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> SwipeState {
        self.state
    }

    /// Signed horizontal displacement of the content.
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    /// Committed edge, if any.
    pub fn selection(&self) -> Option<Edge> {
        self.state.selection
    }

    /// Last accepted width measurement.
    pub fn content_width(&self) -> f64 {
        self.state.content_width
    }

    /// Derived lifecycle phase.
    pub fn phase(&self) -> SwipePhase {
        self.state.phase()
    }

    /// Edges that accept drags.
    pub fn enabled_edges(&self) -> SwipeEdges {
        self.enabled
    }

    /// Threshold tuning in effect.
    pub fn tuning(&self) -> &SwipeTuning {
        &self.config.tuning
    }

    /// The `(icon, color, action)` configured for `edge`.
    pub fn edge(&self, edge: Edge) -> Option<&EdgeAction<I, C>> {
        self.config.edge(edge)
    }

    /// The haptics sink.
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Mutable access to the haptics sink.
    pub fn haptics_mut(&mut self) -> &mut H {
        &mut self.haptics
    }

    /// Register an observer; it is called after every state change.
    pub fn subscribe(&mut self, observer: impl SwipeObserver + 'static) -> SubscriptionId {
        let id = self.observers.subscribe(Box::new(observer));
        log::debug!("observer {id:?} subscribed");
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        if removed {
            log::debug!("observer {id:?} unsubscribed");
        }
        removed
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Record the measured content width.
    ///
    /// Later measurements replace earlier ones and only affect subsequent updates; a selection
    /// already committed stays until the next update re-evaluates it. Non-finite or negative
    /// widths are treated as unmeasured.
    pub fn on_content_measured(&mut self, width: f64) {
        let width = if width.is_finite() && width >= 0.0 {
            width
        } else {
            log::warn!("ignoring invalid content width {width}; treating as unmeasured");
            0.0
        };
        if width != self.state.content_width {
            self.state.content_width = width;
            self.observers.notify(&self.state);
        }
    }

    /// Apply the drag's total horizontal translation since it started.
    ///
    /// Returns the selection transition this update caused, if any. Never runs actions.
    pub fn on_drag_update(&mut self, translation_x: f64) -> Option<SelectionChange> {
        if translation_x.is_nan() {
            log::warn!("ignoring NaN drag translation");
            return None;
        }
        let before = self.state;
        self.state.offset = self.enabled.clamp_translation(translation_x);
        log::trace!("drag offset {}", self.state.offset);

        let from = self.state.selection;
        let to = self.next_selection();
        let change = if to != from {
            self.state.selection = to;
            self.haptics.impact_occurred(self.config.tuning.haptic_style);
            log::debug!("swipe selection {from:?} -> {to:?}");
            Some(SelectionChange { from, to })
        } else {
            None
        };

        if self.state != before {
            self.observers.notify(&self.state);
        }
        change
    }

    /// Finish the drag: run the committed edge's action, then return to rest.
    ///
    /// Returns the edge whose action ran. Panics from the action propagate to the caller
    /// before the reset happens.
    pub fn on_drag_end(&mut self) -> Option<Edge> {
        let mut dispatched = None;
        if let Some(edge) = self.state.selection {
            if let Some(action) = self.config.edge_mut(edge) {
                log::debug!("dispatching {edge:?} swipe action");
                action.invoke();
                dispatched = Some(edge);
            }
        }

        let before = self.state;
        self.state.offset = 0.0;
        self.state.selection = None;
        if self.state != before {
            self.observers.notify(&self.state);
        }
        dispatched
    }

    /// Feed one recognizer event. Only the horizontal component of a translation is used.
    pub fn apply(&mut self, event: DragEvent) -> Option<SwipeEffect> {
        match event {
            DragEvent::Update { translation } => self
                .on_drag_update(translation.x)
                .map(SwipeEffect::Selection),
            DragEvent::End { .. } => self.on_drag_end().map(SwipeEffect::Dispatched),
        }
    }

    fn next_selection(&self) -> Option<Edge> {
        let width = self.state.content_width;
        if width <= 0.0 {
            // Unmeasured: thresholds would collapse to zero.
            return self.state.selection;
        }
        let offset = self.state.offset;
        let tuning = &self.config.tuning;
        match self.state.selection {
            None => {
                let commit = tuning.commit_threshold(width);
                if offset > commit {
                    Some(Edge::Leading)
                } else if offset < -commit {
                    Some(Edge::Trailing)
                } else {
                    None
                }
            }
            Some(edge) => {
                let magnitude = if offset < 0.0 { -offset } else { offset };
                if magnitude < tuning.release_threshold(width) {
                    None
                } else {
                    Some(edge)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::ImpactStyle;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use kurbo::Vec2;

    type Counter = Rc<Cell<u32>>;

    fn counter() -> Counter {
        Rc::new(Cell::new(0))
    }

    fn bump(c: &Counter) -> impl FnMut() + use<> {
        let c = c.clone();
        move || c.set(c.get() + 1)
    }

    fn pulses(c: &Counter) -> impl FnMut(ImpactStyle) + use<> {
        let c = c.clone();
        move |_| c.set(c.get() + 1)
    }

    struct Fixture {
        leading: Counter,
        trailing: Counter,
        haptics: Counter,
    }

    fn both_edges(
        width: f64,
    ) -> (
        SwipeController<&'static str, u32, impl FnMut(ImpactStyle)>,
        Fixture,
    ) {
        let fx = Fixture {
            leading: counter(),
            trailing: counter(),
            haptics: counter(),
        };
        let config = SwipeConfig::builder()
            .leading("pin", 0x8e44ad, bump(&fx.leading))
            .trailing("trash", 0x2980b9, bump(&fx.trailing))
            .build()
            .unwrap();
        let mut c = SwipeController::with_haptics(config, pulses(&fx.haptics));
        c.on_content_measured(width);
        (c, fx)
    }

    #[test]
    fn hysteresis_scenario() {
        let (mut c, fx) = both_edges(200.0);

        let change = c.on_drag_update(150.0);
        assert_eq!(c.offset(), 150.0);
        assert_eq!(
            change,
            Some(SelectionChange {
                from: None,
                to: Some(Edge::Leading)
            })
        );
        assert_eq!(fx.haptics.get(), 1);

        // Inside the band: 85 > 100 - 20.
        assert_eq!(c.on_drag_update(85.0), None);
        assert_eq!(c.selection(), Some(Edge::Leading));
        assert_eq!(fx.haptics.get(), 1);

        let change = c.on_drag_update(70.0);
        assert_eq!(change.map(|c| c.to), Some(None));
        assert_eq!(c.selection(), None);
        assert_eq!(fx.haptics.get(), 2);

        assert_eq!(c.on_drag_end(), None);
        assert_eq!(c.offset(), 0.0);
        assert_eq!(fx.leading.get(), 0);
        assert_eq!(fx.trailing.get(), 0);
    }

    #[test]
    fn trailing_only_scenario() {
        let trailing = counter();
        let config = SwipeConfig::builder()
            .trailing("trash", (), bump(&trailing))
            .build()
            .unwrap();
        let mut c = SwipeController::new(config);
        c.on_content_measured(200.0);

        c.on_drag_update(-250.0);
        assert_eq!(c.offset(), -250.0);
        assert_eq!(c.selection(), Some(Edge::Trailing));

        assert_eq!(c.on_drag_end(), Some(Edge::Trailing));
        assert_eq!(trailing.get(), 1);
        assert_eq!(c.state(), SwipeState {
            offset: 0.0,
            selection: None,
            content_width: 200.0,
        });
    }

    #[test]
    fn offset_sign_follows_enabled_edges() {
        let config = SwipeConfig::builder().leading((), (), || {}).build().unwrap();
        let mut leading_only = SwipeController::new(config);
        let config = SwipeConfig::builder().trailing((), (), || {}).build().unwrap();
        let mut trailing_only = SwipeController::new(config);

        for x in [-1e6, -250.0, -100.5, -1.0, 0.0, 1.0, 99.0, 250.0, 1e6] {
            leading_only.on_drag_update(x);
            assert!(leading_only.offset() >= 0.0, "offset {x}");
            trailing_only.on_drag_update(x);
            assert!(trailing_only.offset() <= 0.0, "offset {x}");
        }
    }

    #[test]
    fn commit_and_release_boundaries() {
        let (mut c, fx) = both_edges(200.0);

        // Commit is strict.
        assert_eq!(c.on_drag_update(100.0), None);
        assert!(c.on_drag_update(100.5).is_some());

        // Anywhere from the release threshold up stays committed.
        for x in [100.5, 99.0, 90.0, 81.0, 80.0] {
            assert_eq!(c.on_drag_update(x), None, "offset {x}");
            assert_eq!(c.selection(), Some(Edge::Leading));
        }
        assert!(c.on_drag_update(79.9).is_some());
        assert_eq!(c.selection(), None);

        // Re-committing requires crossing the commit threshold again.
        assert_eq!(c.on_drag_update(95.0), None);
        assert_eq!(c.selection(), None);
        assert_eq!(fx.haptics.get(), 2);
    }

    #[test]
    fn trailing_hysteresis_is_symmetric() {
        let (mut c, fx) = both_edges(300.0);
        assert!(c.on_drag_update(-151.0).is_some());
        assert_eq!(c.on_drag_update(-131.0), None);
        assert_eq!(c.selection(), Some(Edge::Trailing));
        assert!(c.on_drag_update(-129.0).is_some());
        assert_eq!(fx.haptics.get(), 2);
    }

    #[test]
    fn pulses_count_transitions_not_updates() {
        let (mut c, fx) = both_edges(200.0);
        for x in [10.0, 30.0, 60.0, 90.0, 101.0, 120.0, 140.0, 130.0, 110.0, 90.0] {
            c.on_drag_update(x);
        }
        assert_eq!(fx.haptics.get(), 1);
        for x in [60.0, 40.0, 20.0] {
            c.on_drag_update(x);
        }
        assert_eq!(fx.haptics.get(), 2);
    }

    #[test]
    fn drag_end_always_resets() {
        for path in [
            vec![],
            vec![30.0],
            vec![150.0],
            vec![-150.0],
            vec![150.0, 85.0],
            vec![150.0, 10.0],
        ] {
            let (mut c, _fx) = both_edges(200.0);
            for x in path.iter().copied() {
                c.on_drag_update(x);
            }
            c.on_drag_end();
            assert_eq!(c.offset(), 0.0, "path {path:?}");
            assert_eq!(c.selection(), None, "path {path:?}");
            assert_eq!(c.phase(), SwipePhase::Idle);
        }
    }

    #[test]
    fn exactly_one_action_per_committed_end() {
        let (mut c, fx) = both_edges(200.0);
        c.on_drag_update(150.0);
        assert_eq!(c.on_drag_end(), Some(Edge::Leading));
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(fx.leading.get(), 1);

        c.on_drag_update(-180.0);
        c.on_drag_end();
        assert_eq!(fx.trailing.get(), 1);
        assert_eq!(fx.leading.get(), 1);

        // Undecided drags dispatch nothing.
        c.on_drag_update(-60.0);
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(fx.trailing.get(), 1);
    }

    #[test]
    fn end_does_not_pulse() {
        let (mut c, fx) = both_edges(200.0);
        c.on_drag_update(150.0);
        c.on_drag_end();
        assert_eq!(fx.haptics.get(), 1);
    }

    #[test]
    fn action_runs_before_reset() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let config = SwipeConfig::builder()
            .leading((), (), move || s.borrow_mut().push("action"))
            .build()
            .unwrap();
        let mut c = SwipeController::new(config);
        c.on_content_measured(100.0);
        let s = seen.clone();
        c.subscribe(move |st: &SwipeState| {
            if st.phase() == SwipePhase::Idle {
                s.borrow_mut().push("reset");
            }
        });
        c.on_drag_update(80.0);
        c.on_drag_end();
        assert_eq!(*seen.borrow(), vec!["action", "reset"]);
    }

    #[test]
    fn unmeasured_width_never_commits() {
        let (mut c, fx) = both_edges(0.0);
        assert_eq!(c.on_drag_update(1.0), None);
        assert_eq!(c.on_drag_update(-500.0), None);
        assert_eq!(c.offset(), -500.0);
        assert_eq!(c.phase(), SwipePhase::Undecided);
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(fx.haptics.get(), 0);

        // Once measured, the same drag commits.
        c.on_content_measured(200.0);
        assert!(c.on_drag_update(-500.0).is_some());
    }

    #[test]
    fn invalid_measurements_are_unmeasured() {
        let (mut c, _fx) = both_edges(200.0);
        c.on_content_measured(f64::NAN);
        assert_eq!(c.content_width(), 0.0);
        c.on_content_measured(-10.0);
        assert_eq!(c.content_width(), 0.0);
        c.on_content_measured(f64::INFINITY);
        assert_eq!(c.content_width(), 0.0);
    }

    #[test]
    fn remeasure_is_not_retroactive() {
        let (mut c, fx) = both_edges(200.0);
        c.on_drag_update(110.0);
        assert_eq!(c.selection(), Some(Edge::Leading));

        // Wider content raises both thresholds; the selection holds until the next update.
        c.on_content_measured(400.0);
        assert_eq!(c.selection(), Some(Edge::Leading));
        assert!(c.on_drag_update(110.0).is_some());
        assert_eq!(c.selection(), None);
        assert_eq!(fx.haptics.get(), 2);
    }

    #[test]
    fn jump_across_rest_keeps_selection() {
        let (mut c, fx) = both_edges(200.0);
        let change = c.on_drag_update(150.0);
        assert!(change.is_some_and(|ch| ch.is_commit()));

        // Release only looks at the magnitude, so a jump past rest holds the selection.
        assert_eq!(c.on_drag_update(-150.0), None);
        assert_eq!(c.selection(), Some(Edge::Leading));
        assert_eq!(c.offset(), -150.0);
        assert_eq!(fx.haptics.get(), 1);

        assert_eq!(c.on_drag_end(), Some(Edge::Leading));
        assert_eq!(fx.leading.get(), 1);
        assert_eq!(fx.trailing.get(), 0);
    }

    #[test]
    fn release_change_is_not_a_commit() {
        let (mut c, _fx) = both_edges(200.0);
        c.on_drag_update(-150.0);
        let change = c.on_drag_update(-20.0);
        assert_eq!(
            change,
            Some(SelectionChange {
                from: Some(Edge::Trailing),
                to: None
            })
        );
        assert!(!change.is_some_and(|ch| ch.is_commit()));
    }

    #[test]
    fn small_widths_hold_selection_through_rest() {
        // Release threshold is negative here (15 - 20), so nothing releases.
        let (mut c, fx) = both_edges(30.0);
        c.on_drag_update(16.0);
        assert_eq!(c.selection(), Some(Edge::Leading));
        c.on_drag_update(1.0);
        assert_eq!(c.selection(), Some(Edge::Leading));
        c.on_drag_update(0.0);
        assert_eq!(c.selection(), Some(Edge::Leading));
        assert_eq!(c.on_drag_end(), Some(Edge::Leading));
        assert_eq!(fx.leading.get(), 1);
        assert_eq!(fx.haptics.get(), 1);
    }

    #[test]
    fn nan_translation_is_ignored() {
        let (mut c, _fx) = both_edges(200.0);
        c.on_drag_update(40.0);
        assert_eq!(c.on_drag_update(f64::NAN), None);
        assert_eq!(c.offset(), 40.0);
    }

    #[test]
    fn observers_see_changes_only() {
        let (mut c, _fx) = both_edges(200.0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        let id = c.subscribe(move |s: &SwipeState| l.borrow_mut().push(*s));
        assert_eq!(c.observer_count(), 1);

        c.on_drag_update(50.0);
        c.on_drag_update(50.0);
        c.on_content_measured(200.0);
        c.on_drag_update(120.0);
        c.on_drag_end();
        c.on_drag_end();

        let offsets: Vec<_> = log.borrow().iter().map(|s| (s.offset, s.selection)).collect();
        assert_eq!(
            offsets,
            vec![
                (50.0, None),
                (120.0, Some(Edge::Leading)),
                (0.0, None),
            ]
        );

        assert!(c.unsubscribe(id));
        c.on_drag_update(10.0);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn apply_maps_drag_events() {
        let (mut c, fx) = both_edges(200.0);
        let effect = c.apply(DragEvent::Update {
            translation: Vec2::new(-130.0, 25.0),
        });
        assert_eq!(
            effect,
            Some(SwipeEffect::Selection(SelectionChange {
                from: None,
                to: Some(Edge::Trailing)
            }))
        );
        assert_eq!(
            c.apply(DragEvent::End { cancelled: true }),
            Some(SwipeEffect::Dispatched(Edge::Trailing))
        );
        assert_eq!(fx.trailing.get(), 1);
    }

    #[test]
    fn haptics_sink_is_owned_by_the_controller() {
        #[derive(Default)]
        struct Recorder(Vec<ImpactStyle>);

        impl HapticFeedback for Recorder {
            fn impact_occurred(&mut self, style: ImpactStyle) {
                self.0.push(style);
            }
        }

        let config = SwipeConfig::builder().leading((), (), || {}).build().unwrap();
        let mut c = SwipeController::with_haptics(config, Recorder::default());
        c.on_content_measured(100.0);
        c.on_drag_update(60.0);
        assert_eq!(c.haptics().0, vec![ImpactStyle::Medium]);

        c.haptics_mut().0.clear();
        c.on_drag_update(10.0);
        assert_eq!(c.haptics().0, vec![ImpactStyle::Medium]);
    }

    #[test]
    fn configured_haptic_style_is_used() {
        let styles = Rc::new(RefCell::new(Vec::new()));
        let s = styles.clone();
        let config = SwipeConfig::builder()
            .leading((), (), || {})
            .haptic_style(ImpactStyle::Heavy)
            .build()
            .unwrap();
        let mut c = SwipeController::with_haptics(config, move |style| s.borrow_mut().push(style));
        c.on_content_measured(100.0);
        c.on_drag_update(60.0);
        c.on_drag_update(0.0);
        assert_eq!(*styles.borrow(), vec![ImpactStyle::Heavy, ImpactStyle::Heavy]);
    }
}
