// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: row state, actions, gesture input, and the events the row emits.

use alloc::string::String;
use core::time::Duration;

use kurbo::Vec2;
use understory_swipe_layout::Orientation;

/// Swipe state of a row.
///
/// Owned by [`SwipeView`](crate::SwipeView) and changed only in response to gestures,
/// programmatic show/hide requests, and animation completion.
///
/// ```text
/// Center ──began──▶ Dragging ──ended──▶ Left | Right
///                      │                     │
///                      └──ended (close)──────┴──hide──▶ AnimatingToCenter ──finished──▶ Center
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SwipeState {
    /// At rest, no actions shown.
    #[default]
    Center,
    /// Settled open with the left actions revealed.
    Left,
    /// Settled open with the right actions revealed.
    Right,
    /// Tracking an active pan.
    Dragging,
    /// Running the close animation.
    AnimatingToCenter,
}

impl SwipeState {
    /// True for every state except [`Center`](Self::Center).
    ///
    /// While active the row owns its horizontal position; see
    /// [`SwipeView::set_frame`](crate::SwipeView::set_frame).
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Center)
    }

    /// True when settled open on either side.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<Orientation> for SwipeState {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Left => Self::Left,
            Orientation::Right => Self::Right,
        }
    }
}

/// Visual and behavioral style of an action.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ActionStyle {
    /// A regular action.
    #[default]
    Default,
    /// An action that removes the row; accessibility activation requests removal.
    Destructive,
}

/// One action button offered by the delegate.
///
/// The row never runs handlers itself. Selecting an action produces
/// [`SwipeEvent::ActionTriggered`] carrying its side and index, and the host dispatches it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeAction {
    /// Title, also used as the accessibility name.
    pub title: Option<String>,
    /// Style of the action.
    pub style: ActionStyle,
    /// Measured width of the button's content (title and image), without padding.
    pub intrinsic_width: f64,
    /// Close the row after the action is tapped.
    pub hides_when_selected: bool,
}

impl SwipeAction {
    /// Create an action with the given style and title.
    pub fn new(style: ActionStyle, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            style,
            ..Default::default()
        }
    }

    /// Set the measured content width.
    #[must_use]
    pub fn with_intrinsic_width(mut self, width: f64) -> Self {
        self.intrinsic_width = width;
        self
    }

    /// Close the row after the action is tapped.
    #[must_use]
    pub fn hiding_when_selected(mut self) -> Self {
        self.hides_when_selected = true;
        self
    }

    /// Width this button asks for: content plus horizontal padding, capped at `maximum`.
    pub fn preferred_width(&self, padding: f64, maximum: f64) -> f64 {
        (self.intrinsic_width + 2.0 * padding).min(maximum)
    }
}

/// Phase of a pan gesture, as delivered by the host's gesture recognizer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PanPhase {
    /// The pan was recognized.
    Began,
    /// The finger moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The system cancelled the gesture.
    Cancelled,
}

/// One pan callback.
///
/// `translation` is cumulative since [`PanPhase::Began`]; `velocity` is in points per second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanEvent {
    /// Gesture phase.
    pub phase: PanPhase,
    /// Cumulative translation.
    pub translation: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
}

impl PanEvent {
    /// A pan that just started moving with `velocity`.
    pub const fn began(velocity: Vec2) -> Self {
        Self {
            phase: PanPhase::Began,
            translation: Vec2::ZERO,
            velocity,
        }
    }

    /// A horizontal move to cumulative translation `dx`.
    pub const fn changed(dx: f64) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation: Vec2::new(dx, 0.0),
            velocity: Vec2::ZERO,
        }
    }

    /// The finger lifted at cumulative translation `dx` with horizontal velocity `vx`.
    pub const fn ended(dx: f64, vx: f64) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation: Vec2::new(dx, 0.0),
            velocity: Vec2::new(vx, 0.0),
        }
    }
}

/// Identifies one animation request.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationId(pub(crate) u64);

/// A request to animate the row's horizontal offset.
///
/// The host interpolates from `from` to `to` over `duration`, optionally reporting
/// intermediate offsets through [`SwipeView::animation_progress`](crate::SwipeView::animation_progress),
/// and must report completion through [`SwipeView::animation_finished`](crate::SwipeView::animation_finished).
/// A newer request supersedes older ones; reports for superseded ids are ignored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    /// Request id.
    pub id: AnimationId,
    /// Offset at the start of the animation.
    pub from: f64,
    /// Offset at the end of the animation.
    pub to: f64,
    /// Duration of the animation.
    pub duration: Duration,
    /// Initial velocity normalized by the distance to travel, for spring curves.
    pub initial_velocity: f64,
}

/// Output of the row, to be handled by the host in order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SwipeEvent {
    /// Start animating the row's horizontal offset.
    Animate(Animation),
    /// The action at `index` on `orientation`'s side was selected.
    ActionTriggered {
        /// Side of the action.
        orientation: Orientation,
        /// Index in the order supplied by the delegate.
        index: usize,
    },
    /// The row should be removed from its container.
    RemoveRequested,
    /// The expansion state toggled; a good moment for haptic feedback.
    ExpansionChanged(bool),
}
