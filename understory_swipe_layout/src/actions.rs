// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The actions container: button geometry for one side of a row.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size};

use crate::context::LayoutContext;
use crate::transition::{TransitionKind, TransitionLayout};
use crate::types::Orientation;

/// Button geometry for the actions revealed on one side of a row.
///
/// The container owns one frame per action and recomputes all of them through its
/// [`TransitionKind`] whenever the visible width, the frame, or the expansion state changes.
///
/// ## Coordinate spaces
///
/// - [`frame`](Self::frame) is expressed in the row's coordinate space. A right-side container
///   usually sits just past the row's trailing edge, a left-side one just before its leading edge.
/// - [`bounds`](Self::bounds) and [`button_frames`](Self::button_frames) are container-local.
///   The origin of `bounds` is the scroll offset applied by the transition.
///
/// ## Expansion
///
/// When [expanded](Self::set_expanded), the first action covers the whole container and is the
/// only one reported as visible.
#[derive(Clone, Debug)]
pub struct ActionsView {
    orientation: Orientation,
    transition: TransitionKind,
    frame: Rect,
    bounds: Rect,
    buttons: Vec<Rect>,
    minimum_button_width: f64,
    view_inset: Insets,
    additional_width: Insets,
    visible_width: f64,
    expanded: bool,
}

impl ActionsView {
    /// Create a fully hidden container with `number_of_actions` buttons.
    pub fn new(
        orientation: Orientation,
        transition: TransitionKind,
        frame: Rect,
        number_of_actions: usize,
        minimum_button_width: f64,
    ) -> Self {
        let mut view = Self {
            orientation,
            transition,
            frame,
            bounds: Rect::from_origin_size(Point::ZERO, frame.size()),
            buttons: alloc::vec![Rect::ZERO; number_of_actions],
            minimum_button_width: minimum_button_width.max(0.0),
            view_inset: Insets::ZERO,
            additional_width: Insets::ZERO,
            visible_width: 0.0,
            expanded: false,
        };
        view.relayout();
        view
    }

    /// Set the outer padding of the row.
    #[must_use]
    pub fn with_view_inset(mut self, view_inset: Insets) -> Self {
        self.view_inset = view_inset;
        self.relayout();
        self
    }

    /// Set the host-supplied extra inset.
    #[must_use]
    pub fn with_additional_width(mut self, additional_width: Insets) -> Self {
        self.additional_width = additional_width;
        self.relayout();
        self
    }

    /// Side the actions are revealed from.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Transition used to lay out the buttons.
    pub fn transition(&self) -> TransitionKind {
        self.transition
    }

    /// Number of buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// True if the container holds no buttons.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Container frame in the row's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the container and lay the buttons out again.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.bounds = Rect::from_origin_size(self.bounds.origin(), frame.size());
        self.relayout();
    }

    /// Container-local bounds; the origin is the transition's scroll offset.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Width every button is laid out with.
    pub fn minimum_button_width(&self) -> f64 {
        self.minimum_button_width
    }

    /// Width at which every button is fully revealed.
    ///
    /// Includes the view inset on the revealed side.
    pub fn preferred_width(&self) -> f64 {
        let margin = match self.orientation {
            Orientation::Left => self.view_inset.x0,
            Orientation::Right => self.view_inset.x1,
        };
        self.minimum_button_width * self.buttons.len() as f64 + margin
    }

    /// Natural size of the actions row.
    pub fn content_size(&self) -> Size {
        Size::new(self.preferred_width(), self.frame.height())
    }

    /// Current reveal extent.
    pub fn visible_width(&self) -> f64 {
        self.visible_width
    }

    /// Update the reveal extent and lay the buttons out again.
    ///
    /// Negative (and NaN) widths are clamped to zero.
    pub fn set_visible_width(&mut self, visible_width: f64) {
        let visible_width = visible_width.max(0.0);
        if visible_width == self.visible_width {
            return;
        }
        log::trace!(
            "actions {:?}: visible width {} -> {}",
            self.orientation,
            self.visible_width,
            visible_width
        );
        self.visible_width = visible_width;
        self.relayout();
    }

    /// Whether the first action currently covers the container.
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Set the expansion state; returns true if it changed.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        if self.expanded == expanded || self.buttons.is_empty() {
            return false;
        }
        self.expanded = expanded;
        self.relayout();
        true
    }

    /// Snapshot of the geometry for the current layout pass.
    pub fn context(&self) -> LayoutContext {
        LayoutContext::new(self.buttons.len(), self.orientation)
            .with_content_size(self.content_size())
            .with_visible_width(self.visible_width)
            .with_minimum_button_width(self.minimum_button_width)
            .with_view_inset(self.view_inset)
            .with_additional_width(self.additional_width)
    }

    /// Visible width of each button, in action order.
    pub fn visible_widths(&self) -> Vec<f64> {
        if self.expanded {
            let mut widths = alloc::vec![0.0; self.buttons.len()];
            if let Some(first) = widths.first_mut() {
                *first = self.visible_width;
            }
            return widths;
        }
        self.transition.visible_widths(&self.context())
    }

    /// Container-local frames of all buttons, in action order.
    pub fn button_frames(&self) -> &[Rect] {
        &self.buttons
    }

    /// Container-local frame of the button at `index`.
    pub fn button_frame(&self, index: usize) -> Option<Rect> {
        self.buttons.get(index).copied()
    }

    /// Index of the tappable button under `point`, given in the row's coordinate space.
    ///
    /// Tappable regions are derived from [`visible_widths`](Self::visible_widths): starting at the
    /// edge facing the content, each button claims its visible width in action order. Buttons with
    /// no visible width are never hit.
    pub fn action_at(&self, point: Point) -> Option<usize> {
        if point.y < self.frame.y0 || point.y >= self.frame.y1 {
            return None;
        }
        let distance = match self.orientation {
            Orientation::Right => point.x - self.frame.x0,
            Orientation::Left => self.frame.x1 - point.x,
        };
        if distance < 0.0 || distance >= self.visible_width {
            return None;
        }
        let mut start = 0.0;
        for (index, width) in self.visible_widths().into_iter().enumerate() {
            if width > 0.0 && distance < start + width {
                return Some(index);
            }
            start += width;
        }
        None
    }

    fn relayout(&mut self) {
        let context = self.context();
        self.bounds = self.transition.container(self.bounds, &context);
        let natural = Rect::from_origin_size(Point::ZERO, self.frame.size());
        for (index, button) in self.buttons.iter_mut().enumerate() {
            *button = self.transition.layout(natural, index, &context);
        }
        if self.expanded
            && let Some(first) = self.buttons.first_mut()
        {
            *first = Rect::new(
                self.bounds.x0,
                natural.y0,
                self.bounds.x0 + self.bounds.width(),
                natural.y1,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn right_drag() -> ActionsView {
        // A 320pt row with three 60pt buttons to the right of it.
        ActionsView::new(
            Orientation::Right,
            TransitionKind::Drag,
            Rect::new(320.0, 0.0, 640.0, 44.0),
            3,
            60.0,
        )
    }

    #[test]
    fn starts_hidden() {
        let view = right_drag();
        assert_eq!(view.visible_width(), 0.0);
        assert_eq!(view.visible_widths(), vec![0.0, 0.0, 0.0]);
        assert_eq!(view.content_size(), Size::new(180.0, 44.0));
        assert_eq!(view.action_at(Point::new(330.0, 20.0)), None);
    }

    #[test]
    fn context_reflects_live_state() {
        let mut view = right_drag().with_view_inset(Insets::new(0.0, 0.0, 10.0, 0.0));
        view.set_visible_width(75.0);
        let ctx = view.context();
        assert_eq!(ctx.number_of_actions, 3);
        assert_eq!(ctx.visible_width, 75.0);
        assert_eq!(ctx.content_size.width, 190.0);
        view.set_visible_width(20.0);
        assert_eq!(view.context().visible_width, 20.0);
    }

    #[test]
    fn visible_width_clamps_negative() {
        let mut view = right_drag();
        view.set_visible_width(-12.0);
        assert_eq!(view.visible_width(), 0.0);
        view.set_visible_width(f64::NAN);
        assert_eq!(view.visible_width(), 0.0);
    }

    #[test]
    fn drag_container_slides_with_visible_width() {
        let mut view = right_drag();
        view.set_visible_width(60.0);
        assert_eq!(view.bounds().x0, 120.0);
        view.set_visible_width(180.0);
        assert_eq!(view.bounds().x0, 0.0);
        assert_eq!(view.bounds().size(), Size::new(320.0, 44.0));
        assert_eq!(
            view.button_frame(1),
            Some(Rect::new(60.0, 0.0, 320.0, 44.0))
        );
    }

    #[test]
    fn taps_follow_visible_widths() {
        let mut view = right_drag();
        view.set_visible_width(150.0);
        assert_eq!(view.visible_widths(), vec![60.0, 60.0, 30.0]);
        assert_eq!(view.action_at(Point::new(330.0, 20.0)), Some(0));
        assert_eq!(view.action_at(Point::new(390.0, 20.0)), Some(1));
        assert_eq!(view.action_at(Point::new(460.0, 20.0)), Some(2));
        assert_eq!(view.action_at(Point::new(475.0, 20.0)), None);
        assert_eq!(view.action_at(Point::new(330.0, 50.0)), None);
    }

    #[test]
    fn reveal_taps_last_action_first() {
        let mut view = ActionsView::new(
            Orientation::Left,
            TransitionKind::Reveal,
            Rect::new(-320.0, 0.0, 0.0, 44.0),
            3,
            60.0,
        );
        view.set_visible_width(50.0);
        // Measured from the content edge (x = 0) going left.
        assert_eq!(view.action_at(Point::new(-10.0, 10.0)), Some(2));
        assert_eq!(view.action_at(Point::new(-60.0, 10.0)), None);
    }

    #[test]
    fn expansion_covers_container() {
        let mut view = right_drag();
        view.set_visible_width(260.0);
        assert!(view.set_expanded(true));
        assert!(!view.set_expanded(true));
        assert_eq!(view.visible_widths(), vec![260.0, 0.0, 0.0]);
        assert_eq!(view.action_at(Point::new(500.0, 10.0)), Some(0));
        let first = view.button_frame(0).unwrap();
        assert_eq!(first.x0, view.bounds().x0);
        assert_eq!(first.width(), 320.0);
        assert!(view.set_expanded(false));
        assert_eq!(view.visible_widths(), vec![60.0, 60.0, 60.0]);
    }

    #[test]
    fn empty_container_is_inert() {
        let mut view = ActionsView::new(
            Orientation::Right,
            TransitionKind::Border,
            Rect::new(320.0, 0.0, 640.0, 44.0),
            0,
            60.0,
        );
        view.set_visible_width(100.0);
        assert!(view.is_empty());
        assert!(view.visible_widths().is_empty());
        assert!(!view.set_expanded(true));
        assert_eq!(view.action_at(Point::new(330.0, 10.0)), None);
    }

    #[test]
    fn resizing_keeps_buttons_in_frame() {
        let mut view = right_drag();
        view.set_visible_width(180.0);
        view.set_frame(Rect::new(320.0, 0.0, 640.0, 88.0));
        for frame in view.button_frames() {
            assert_eq!(frame.height(), 88.0);
        }
    }
}
