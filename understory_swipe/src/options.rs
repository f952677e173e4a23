// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-swipe configuration supplied by the delegate.

use core::time::Duration;

use kurbo::Insets;
use understory_swipe_layout::TransitionKind;

use crate::types::SwipeAction;

/// Default button width cap when none is configured.
const DEFAULT_MINIMUM_BUTTON_WIDTH: f64 = 74.0;

/// Space kept free of buttons when the maximum width is derived from the row.
const ROW_WIDTH_RESERVE: f64 = 30.0;

/// What happens when the user releases while the actions are expanded.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ExpansionCompletion {
    /// Trigger the first action and close the row.
    #[default]
    Selection,
    /// Trigger the first action and slide the row fully out.
    Fill,
    /// Like [`Fill`](Self::Fill), and also request removal of the row.
    Destructive,
}

/// Full-swipe behavior.
///
/// The trigger is a plain visible-width threshold supplied by the host; no default
/// threshold is assumed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExpansionStyle {
    /// Visible width at or beyond which the first action expands.
    pub threshold: f64,
    /// Behavior on release while expanded.
    pub completion: ExpansionCompletion,
    /// Damping applied to overscroll past the expansion target, in `0..=1`.
    pub elasticity: f64,
}

impl ExpansionStyle {
    /// Create a style expanding at `threshold` with the default elasticity of `0.2`.
    pub const fn new(threshold: f64, completion: ExpansionCompletion) -> Self {
        Self {
            threshold,
            completion,
            elasticity: 0.2,
        }
    }

    /// Set the overscroll damping.
    #[must_use]
    pub const fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Whether a row revealed by `visible_width` should be expanded.
    pub fn should_expand(&self, visible_width: f64) -> bool {
        visible_width >= self.threshold
    }
}

/// Invalid [`SwipeOptions`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// A configured button width is negative or not finite.
    #[error("button width must be finite and non-negative, got {0}")]
    InvalidButtonWidth(f64),
    /// The configured minimum button width is larger than the maximum.
    #[error("minimum button width {minimum} exceeds maximum {maximum}")]
    MinimumExceedsMaximum {
        /// Configured minimum.
        minimum: f64,
        /// Configured maximum.
        maximum: f64,
    },
    /// The expansion threshold is not a finite, positive width.
    #[error("expansion threshold must be finite and positive, got {0}")]
    InvalidExpansionThreshold(f64),
    /// The expansion elasticity is outside `0..=1`.
    #[error("expansion elasticity must be within 0..=1, got {0}")]
    InvalidElasticity(f64),
}

/// Configuration for one swipe, returned by
/// [`SwipeViewDelegate::edit_actions_options`](crate::SwipeViewDelegate::edit_actions_options).
///
/// ## Button width
///
/// Every button is laid out with the same width:
///
/// - maximum: `maximum_button_width`, or `(row_width - 30) / n`;
/// - minimum: `minimum_button_width`, or `min(maximum, 74)`;
/// - the result is the largest of the minimum and each action's
///   [preferred width](SwipeAction::preferred_width).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeOptions {
    /// How buttons move while revealed.
    pub transition_style: TransitionKind,
    /// Full-swipe behavior; `None` disables expansion.
    pub expansion: Option<ExpansionStyle>,
    /// Floor for the button width.
    pub minimum_button_width: Option<f64>,
    /// Cap for the button width.
    pub maximum_button_width: Option<f64>,
    /// Horizontal padding on each side of a button's content.
    pub button_padding: f64,
    /// Extra inset around the buttons.
    pub additional_width: Insets,
    /// Duration of open, close, and expansion animations.
    pub animation_duration: Duration,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            transition_style: TransitionKind::Border,
            expansion: None,
            minimum_button_width: None,
            maximum_button_width: None,
            button_padding: 8.0,
            additional_width: Insets::ZERO,
            animation_duration: Duration::from_millis(700),
        }
    }
}

impl SwipeOptions {
    /// Set the transition style.
    #[must_use]
    pub fn with_transition_style(mut self, style: TransitionKind) -> Self {
        self.transition_style = style;
        self
    }

    /// Enable full-swipe expansion.
    #[must_use]
    pub fn with_expansion(mut self, expansion: ExpansionStyle) -> Self {
        self.expansion = Some(expansion);
        self
    }

    /// Set the button width floor.
    #[must_use]
    pub fn with_minimum_button_width(mut self, width: f64) -> Self {
        self.minimum_button_width = Some(width);
        self
    }

    /// Set the button width cap.
    #[must_use]
    pub fn with_maximum_button_width(mut self, width: f64) -> Self {
        self.maximum_button_width = Some(width);
        self
    }

    /// Set the extra inset around the buttons.
    #[must_use]
    pub fn with_additional_width(mut self, insets: Insets) -> Self {
        self.additional_width = insets;
        self
    }

    /// Set the animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Check the options for values the controller cannot work with.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for width in [self.minimum_button_width, self.maximum_button_width]
            .into_iter()
            .flatten()
        {
            if !width.is_finite() || width < 0.0 {
                return Err(OptionsError::InvalidButtonWidth(width));
            }
        }
        if let (Some(minimum), Some(maximum)) =
            (self.minimum_button_width, self.maximum_button_width)
            && minimum > maximum
        {
            return Err(OptionsError::MinimumExceedsMaximum { minimum, maximum });
        }
        if let Some(expansion) = self.expansion {
            if !expansion.threshold.is_finite() || expansion.threshold <= 0.0 {
                return Err(OptionsError::InvalidExpansionThreshold(expansion.threshold));
            }
            if !(0.0..=1.0).contains(&expansion.elasticity) {
                return Err(OptionsError::InvalidElasticity(expansion.elasticity));
            }
        }
        Ok(())
    }

    /// Width every button is laid out with, for a row `row_width` wide.
    pub fn button_width(&self, row_width: f64, actions: &[SwipeAction]) -> f64 {
        if actions.is_empty() {
            return 0.0;
        }
        let maximum = self
            .maximum_button_width
            .unwrap_or((row_width - ROW_WIDTH_RESERVE) / actions.len() as f64);
        let minimum = self
            .minimum_button_width
            .unwrap_or(maximum.min(DEFAULT_MINIMUM_BUTTON_WIDTH));
        actions
            .iter()
            .fold(minimum, |width, action| {
                width.max(action.preferred_width(self.button_padding, maximum))
            })
            .max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionStyle;
    use alloc::vec;

    #[test]
    fn defaults_validate() {
        assert_eq!(SwipeOptions::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_widths() {
        let options = SwipeOptions::default().with_minimum_button_width(-1.0);
        assert_eq!(
            options.validate(),
            Err(OptionsError::InvalidButtonWidth(-1.0))
        );
        let options = SwipeOptions::default()
            .with_minimum_button_width(90.0)
            .with_maximum_button_width(80.0);
        assert_eq!(
            options.validate(),
            Err(OptionsError::MinimumExceedsMaximum {
                minimum: 90.0,
                maximum: 80.0
            })
        );
    }

    #[test]
    fn rejects_bad_expansion() {
        let options = SwipeOptions::default()
            .with_expansion(ExpansionStyle::new(0.0, ExpansionCompletion::Fill));
        assert_eq!(
            options.validate(),
            Err(OptionsError::InvalidExpansionThreshold(0.0))
        );
        let options = SwipeOptions::default().with_expansion(
            ExpansionStyle::new(200.0, ExpansionCompletion::Fill).with_elasticity(1.5),
        );
        assert_eq!(
            options.validate(),
            Err(OptionsError::InvalidElasticity(1.5))
        );
    }

    #[test]
    fn error_messages_name_values() {
        let message = alloc::format!("{}", OptionsError::InvalidElasticity(1.5));
        assert_eq!(message, "expansion elasticity must be within 0..=1, got 1.5");
    }

    #[test]
    fn button_width_defaults_to_74() {
        let actions = vec![
            SwipeAction::new(ActionStyle::Default, "More").with_intrinsic_width(30.0),
            SwipeAction::new(ActionStyle::Destructive, "Delete").with_intrinsic_width(40.0),
        ];
        // maximum = (320 - 30) / 2 = 145, minimum = 74, preferred widths 46 and 56.
        assert_eq!(SwipeOptions::default().button_width(320.0, &actions), 74.0);
    }

    #[test]
    fn button_width_grows_to_fit_content() {
        let actions = vec![
            SwipeAction::new(ActionStyle::Default, "Mark as unread").with_intrinsic_width(100.0),
        ];
        assert_eq!(SwipeOptions::default().button_width(320.0, &actions), 116.0);
        let capped = SwipeOptions::default().with_maximum_button_width(90.0);
        assert_eq!(capped.button_width(320.0, &actions), 90.0);
        assert_eq!(SwipeOptions::default().button_width(320.0, &[]), 0.0);
    }

    #[test]
    fn expansion_threshold_is_inclusive() {
        let style = ExpansionStyle::new(200.0, ExpansionCompletion::Selection);
        assert!(!style.should_expand(199.5));
        assert!(style.should_expand(200.0));
    }
}
