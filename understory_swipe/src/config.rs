// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration: per-edge actions, threshold tuning, and the builder that assembles them.
//!
//! ## Usage
//!
//! Build an immutable [`SwipeConfig`] with [`SwipeConfig::builder`], then hand it to
//! [`SwipeController::new`](crate::controller::SwipeController::new).
//! An edge without an action cannot be dragged toward.
//!
//! ```
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::types::SwipeEdges;
//!
//! let config = SwipeConfig::builder()
//!     .trailing("trash", 0xff3b30ff_u32, || {})
//!     .release_margin(12.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.enabled_edges(), SwipeEdges::TRAILING);
//! assert_eq!(config.tuning().release_margin, 12.0);
//! ```

use alloc::boxed::Box;

use crate::haptics::ImpactStyle;
use crate::types::{Edge, SwipeEdges};

/// Fraction of the content width the offset has to exceed to commit an edge.
pub const DEFAULT_COMMIT_FRACTION: f64 = 0.5;

/// Distance below the commit threshold at which a committed edge is released.
///
/// The gap between commit and release keeps the selection from flickering while a drag
/// hovers around the threshold.
pub const DEFAULT_RELEASE_MARGIN: f64 = 20.0;

/// Travel the host recognizer requires before it reports any translation.
pub const DEFAULT_MIN_DRAG_DISTANCE: f64 = 20.0;

/// Errors from validating a [`SwipeTuning`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `commit_fraction` must lie in `(0, 1]`.
    #[error("invalid commit fraction {0} (must be in (0, 1])")]
    InvalidCommitFraction(f64),
    /// `release_margin` must be finite and non-negative.
    #[error("invalid release margin {0} (must be finite and >= 0)")]
    InvalidReleaseMargin(f64),
    /// `min_drag_distance` must be finite and non-negative.
    #[error("invalid minimum drag distance {0} (must be finite and >= 0)")]
    InvalidMinDragDistance(f64),
}

/// Threshold and feedback tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeTuning {
    /// Commit once `|offset| > content_width * commit_fraction`.
    pub commit_fraction: f64,
    /// Release once `|offset| < commit threshold - release_margin`.
    pub release_margin: f64,
    /// Minimum pointer travel before a drag starts.
    pub min_drag_distance: f64,
    /// Pulse played on every selection transition.
    pub haptic_style: ImpactStyle,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            commit_fraction: DEFAULT_COMMIT_FRACTION,
            release_margin: DEFAULT_RELEASE_MARGIN,
            min_drag_distance: DEFAULT_MIN_DRAG_DISTANCE,
            haptic_style: ImpactStyle::Medium,
        }
    }
}

impl SwipeTuning {
    /// Create a validated tuning with the default haptic style.
    pub fn new(
        commit_fraction: f64,
        release_margin: f64,
        min_drag_distance: f64,
    ) -> Result<Self, ConfigError> {
        let tuning = Self {
            commit_fraction,
            release_margin,
            min_drag_distance,
            haptic_style: ImpactStyle::default(),
        };
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every field; the first offending one is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as negated range checks so NaN is rejected too.
        if !(self.commit_fraction > 0.0 && self.commit_fraction <= 1.0) {
            return Err(ConfigError::InvalidCommitFraction(self.commit_fraction));
        }
        if !(self.release_margin.is_finite() && self.release_margin >= 0.0) {
            return Err(ConfigError::InvalidReleaseMargin(self.release_margin));
        }
        if !(self.min_drag_distance.is_finite() && self.min_drag_distance >= 0.0) {
            return Err(ConfigError::InvalidMinDragDistance(self.min_drag_distance));
        }
        Ok(())
    }

    /// Offset magnitude that must be exceeded to commit, for a given content width.
    #[inline]
    pub fn commit_threshold(&self, content_width: f64) -> f64 {
        content_width * self.commit_fraction
    }

    /// Offset magnitude below which a committed edge is released.
    #[inline]
    pub fn release_threshold(&self, content_width: f64) -> f64 {
        self.commit_threshold(content_width) - self.release_margin
    }
}

/// Appearance and behavior of one edge: the `(icon, color, action)` triple.
///
/// `I` and `C` are opaque to this crate; they are carried through to the renderer.
pub struct EdgeAction<I, C> {
    /// Icon drawn on the revealed background.
    pub icon: I,
    /// Background fill of the revealed affordance.
    pub color: C,
    pub(crate) action: Box<dyn FnMut()>,
}

impl<I: core::fmt::Debug, C: core::fmt::Debug> core::fmt::Debug for EdgeAction<I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EdgeAction")
            .field("icon", &self.icon)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl<I, C> EdgeAction<I, C> {
    /// Bundle an icon, a color, and the action to run on commit.
    pub fn new(icon: I, color: C, action: impl FnMut() + 'static) -> Self {
        Self {
            icon,
            color,
            action: Box::new(action),
        }
    }

    /// Run the action.
    pub fn invoke(&mut self) {
        (self.action)();
    }
}

/// Immutable configuration for a [`SwipeController`](crate::controller::SwipeController).
pub struct SwipeConfig<I, C> {
    pub(crate) leading: Option<EdgeAction<I, C>>,
    pub(crate) trailing: Option<EdgeAction<I, C>>,
    pub(crate) tuning: SwipeTuning,
}

impl<I: core::fmt::Debug, C: core::fmt::Debug> core::fmt::Debug for SwipeConfig<I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeConfig")
            .field("leading", &self.leading)
            .field("trailing", &self.trailing)
            .field("tuning", &self.tuning)
            .finish()
    }
}

impl<I, C> Default for SwipeConfig<I, C> {
    fn default() -> Self {
        Self {
            leading: None,
            trailing: None,
            tuning: SwipeTuning::default(),
        }
    }
}

impl<I, C> SwipeConfig<I, C> {
    /// Start building a configuration with no edges and default tuning.
    pub fn builder() -> SwipeConfigBuilder<I, C> {
        SwipeConfigBuilder {
            config: Self::default(),
        }
    }

    /// The tuning in effect.
    pub fn tuning(&self) -> &SwipeTuning {
        &self.tuning
    }

    /// The action configured for `edge`, if any.
    pub fn edge(&self, edge: Edge) -> Option<&EdgeAction<I, C>> {
        match edge {
            Edge::Leading => self.leading.as_ref(),
            Edge::Trailing => self.trailing.as_ref(),
        }
    }

    pub(crate) fn edge_mut(&mut self, edge: Edge) -> Option<&mut EdgeAction<I, C>> {
        match edge {
            Edge::Leading => self.leading.as_mut(),
            Edge::Trailing => self.trailing.as_mut(),
        }
    }

    /// Edges that accept drags (those with an action).
    pub fn enabled_edges(&self) -> SwipeEdges {
        let mut edges = SwipeEdges::empty();
        if self.leading.is_some() {
            edges |= SwipeEdges::LEADING;
        }
        if self.trailing.is_some() {
            edges |= SwipeEdges::TRAILING;
        }
        edges
    }
}

/// Fluent builder for [`SwipeConfig`].
///
/// Nothing is shared with the produced config; [`build`](Self::build) consumes the builder.
pub struct SwipeConfigBuilder<I, C> {
    config: SwipeConfig<I, C>,
}

impl<I: core::fmt::Debug, C: core::fmt::Debug> core::fmt::Debug for SwipeConfigBuilder<I, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeConfigBuilder")
            .field("config", &self.config)
            .finish()
    }
}

impl<I, C> SwipeConfigBuilder<I, C> {
    /// Configure the edge revealed by dragging right.
    pub fn leading(mut self, icon: I, color: C, action: impl FnMut() + 'static) -> Self {
        self.config.leading = Some(EdgeAction::new(icon, color, action));
        self
    }

    /// Configure the edge revealed by dragging left.
    pub fn trailing(mut self, icon: I, color: C, action: impl FnMut() + 'static) -> Self {
        self.config.trailing = Some(EdgeAction::new(icon, color, action));
        self
    }

    /// Configure `edge` from a prepared [`EdgeAction`].
    pub fn edge(mut self, edge: Edge, action: EdgeAction<I, C>) -> Self {
        match edge {
            Edge::Leading => self.config.leading = Some(action),
            Edge::Trailing => self.config.trailing = Some(action),
        }
        self
    }

    /// Replace the whole tuning.
    pub fn tuning(mut self, tuning: SwipeTuning) -> Self {
        self.config.tuning = tuning;
        self
    }

    /// See [`SwipeTuning::commit_fraction`].
    pub fn commit_fraction(mut self, fraction: f64) -> Self {
        self.config.tuning.commit_fraction = fraction;
        self
    }

    /// See [`SwipeTuning::release_margin`].
    pub fn release_margin(mut self, margin: f64) -> Self {
        self.config.tuning.release_margin = margin;
        self
    }

    /// See [`SwipeTuning::min_drag_distance`].
    pub fn min_drag_distance(mut self, distance: f64) -> Self {
        self.config.tuning.min_drag_distance = distance;
        self
    }

    /// See [`SwipeTuning::haptic_style`].
    pub fn haptic_style(mut self, style: ImpactStyle) -> Self {
        self.config.tuning.haptic_style = style;
        self
    }

    /// Validate the tuning and produce the configuration.
    pub fn build(self) -> Result<SwipeConfig<I, C>, ConfigError> {
        self.config.tuning.validate()?;
        Ok(self.config)
    }
}
