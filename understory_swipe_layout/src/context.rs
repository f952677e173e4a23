// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry snapshot consumed by every [`TransitionLayout`](crate::TransitionLayout).

use kurbo::{Insets, Size};

use crate::types::Orientation;

/// Immutable snapshot of the geometry a transition layout needs.
///
/// Build a fresh context for every layout pass, typically via
/// [`ActionsView::context`](crate::ActionsView::context). Contexts are never
/// updated in place and never cached across changes of the visible width.
///
/// ## Fields
///
/// - `content_size`: natural size of the whole actions row.
/// - `visible_width`: how far the row is currently revealed, in points. May exceed
///   `content_size.width` while the user overscrolls.
/// - `minimum_button_width`: width every button is laid out with.
/// - `view_inset`: outer padding of the row (for example a safe area).
/// - `additional_width`: extra inset supplied by the host.
///
/// For both insets `x0` is the leading (left) edge and `x1` the trailing (right) edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutContext {
    /// Number of actions in the row.
    pub number_of_actions: usize,
    /// Side the actions are revealed from.
    pub orientation: Orientation,
    /// Natural size of the actions row.
    pub content_size: Size,
    /// Current reveal extent of the row.
    pub visible_width: f64,
    /// Per-button floor width.
    pub minimum_button_width: f64,
    /// Outer padding of the row.
    pub view_inset: Insets,
    /// Extra inset added by the host.
    pub additional_width: Insets,
}

impl LayoutContext {
    /// Create a context with zero sizes and insets.
    pub const fn new(number_of_actions: usize, orientation: Orientation) -> Self {
        Self {
            number_of_actions,
            orientation,
            content_size: Size::ZERO,
            visible_width: 0.0,
            minimum_button_width: 0.0,
            view_inset: Insets::ZERO,
            additional_width: Insets::ZERO,
        }
    }

    /// Set the natural size of the actions row.
    #[must_use]
    pub const fn with_content_size(mut self, content_size: Size) -> Self {
        self.content_size = content_size;
        self
    }

    /// Set the reveal extent.
    #[must_use]
    pub const fn with_visible_width(mut self, visible_width: f64) -> Self {
        self.visible_width = visible_width;
        self
    }

    /// Set the per-button floor width.
    #[must_use]
    pub const fn with_minimum_button_width(mut self, minimum_button_width: f64) -> Self {
        self.minimum_button_width = minimum_button_width;
        self
    }

    /// Set the outer padding.
    #[must_use]
    pub const fn with_view_inset(mut self, view_inset: Insets) -> Self {
        self.view_inset = view_inset;
        self
    }

    /// Set the host-supplied extra inset.
    #[must_use]
    pub const fn with_additional_width(mut self, additional_width: Insets) -> Self {
        self.additional_width = additional_width;
        self
    }

    /// Horizontal origin shared by leading-anchored buttons.
    pub(crate) fn leading_origin(&self) -> f64 {
        self.view_inset.x0 + self.additional_width.x0
    }

    /// `visible_width - content_size.width`; negative while the row is partially revealed.
    pub(crate) fn overshoot(&self) -> f64 {
        self.visible_width - self.content_size.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let inset = Insets::new(4.0, 0.0, 2.0, 0.0);
        let extra = Insets::new(1.0, 0.0, 0.0, 0.0);
        let ctx = LayoutContext::new(3, Orientation::Right)
            .with_content_size(Size::new(180.0, 44.0))
            .with_visible_width(90.0)
            .with_minimum_button_width(60.0)
            .with_view_inset(inset)
            .with_additional_width(extra);
        assert_eq!(ctx.number_of_actions, 3);
        assert_eq!(ctx.content_size, Size::new(180.0, 44.0));
        assert_eq!(ctx.visible_width, 90.0);
        assert_eq!(ctx.minimum_button_width, 60.0);
        assert_eq!(ctx.leading_origin(), 5.0);
        assert_eq!(ctx.overshoot(), -90.0);
    }
}
