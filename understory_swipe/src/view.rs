// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipeable row: frame ownership, container attachment, hit testing, and event forwarding.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Vec2};
use understory_swipe_layout::{ActionsView, Orientation, Sides};

use crate::container::{PannableContainer, ScrollGeometry, SwipeId};
use crate::controller::{SwipeController, Swipeable};
use crate::delegate::SwipeViewDelegate;
use crate::types::{AnimationId, PanEvent, PanPhase, SwipeEvent, SwipeState};

/// Outcome of [`SwipeView::point_inside`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TouchResponse {
    /// The touch belongs to this row.
    Inside,
    /// The touch misses this row.
    Outside,
    /// An open row was touched outside itself: hide every open row and reject the touch.
    DismissOpenRows,
}

/// A row that reveals actions when dragged sideways.
///
/// ## Frame
///
/// The row's frame is expressed in its container's coordinate space and its resting
/// horizontal position is `x = 0`; `frame().x0` is therefore the current swipe offset.
/// While the row is [active](SwipeState::is_active), [`set_frame`](Self::set_frame) keeps the
/// horizontal position and accepts only the vertical position and the size, so container layout
/// passes do not snap an open row shut.
///
/// ## Events
///
/// Every input method returns the [`SwipeEvent`]s the host must handle, in order. The delegate
/// is borrowed per call; pass [`NoDelegate`](crate::NoDelegate) when the row has none.
#[derive(Clone, Debug)]
pub struct SwipeView {
    id: SwipeId,
    row: Swipeable,
    controller: SwipeController,
}

impl SwipeView {
    /// Create a resting row.
    pub fn new(id: SwipeId, frame: Rect) -> Self {
        Self {
            id,
            row: Swipeable {
                frame,
                ..Default::default()
            },
            controller: SwipeController::default(),
        }
    }

    /// Identifier of the row.
    pub fn id(&self) -> SwipeId {
        self.id
    }

    /// Current swipe state.
    pub fn state(&self) -> SwipeState {
        self.row.state
    }

    /// Current frame in the container's coordinate space.
    pub fn frame(&self) -> Rect {
        self.row.frame
    }

    /// Assign a new frame from the host's layout.
    ///
    /// At rest the frame is taken as is. While active, the horizontal position is kept and
    /// only the vertical position and the size are taken.
    pub fn set_frame(&mut self, frame: Rect) {
        self.row.frame = if self.row.state.is_active() {
            Rect::from_origin_size(Point::new(self.row.frame.x0, frame.y0), frame.size())
        } else {
            frame
        };
        self.controller.row_resized(&self.row);
    }

    /// Layout margins of the row.
    ///
    /// While the row is offset, the margins it had before the swipe started are reported so
    /// margin-driven layout does not fight the offset.
    pub fn layout_margins(&self) -> Insets {
        if self.row.frame.x0 != 0.0 {
            self.controller.original_layout_margins()
        } else {
            self.row.layout_margins
        }
    }

    /// Set the layout margins of the row.
    pub fn set_layout_margins(&mut self, margins: Insets) {
        self.row.layout_margins = margins;
    }

    /// The controller driving this row.
    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    /// Button geometry of the side currently revealed.
    pub fn actions_view(&self) -> Option<&ActionsView> {
        self.controller.actions_view()
    }

    /// Whether the row is attached to a container. Detached rows ignore pans.
    pub fn is_attached(&self) -> bool {
        self.controller.container().is_some()
    }

    /// Attach the row to `container`, binding it to the container's pan recognizer.
    ///
    /// Any previous binding of this row is replaced.
    pub fn attach<C: PannableContainer + ?Sized>(&mut self, container: &mut C) {
        let targets = container.pan_targets();
        targets.remove_target(self.id);
        targets.add_target(self.id);
        self.controller.set_container(Some(container.geometry()));
        log::debug!("row {:?} attached", self.id);
    }

    /// Detach the row from `container`. The row stays inert until attached again.
    pub fn detach<C: PannableContainer + ?Sized>(&mut self, container: &mut C) {
        container.pan_targets().remove_target(self.id);
        self.controller.set_container(None);
        log::debug!("row {:?} detached", self.id);
    }

    /// Refresh the container geometry after it scrolled or resized.
    pub fn container_changed(&mut self, geometry: ScrollGeometry) {
        if self.is_attached() {
            self.controller.set_container(Some(geometry));
        }
    }

    /// Whether a pan with `translation` should start a swipe (mostly horizontal pans only).
    pub fn should_begin(&self, translation: Vec2) -> bool {
        self.controller.should_begin(translation)
    }

    /// Feed one pan callback of the row's own recognizer.
    pub fn handle_pan<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        event: PanEvent,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        self.controller.handle_pan(&mut self.row, event, delegate)
    }

    /// Feed one callback of the container's pan recognizer. A new scroll closes the row.
    pub fn handle_container_pan<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        phase: PanPhase,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        if phase == PanPhase::Began {
            self.hide_swipe(true, delegate)
        } else {
            Vec::new()
        }
    }

    /// Feed a tap at `point`, in the row's own coordinate space.
    ///
    /// On an open row, a tap on a visible action selects it; any other tap closes the row.
    pub fn handle_tap<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        point: Point,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        self.controller.handle_tap(&mut self.row, point, delegate)
    }

    /// Open the row towards `orientation`.
    pub fn show_swipe<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        orientation: Orientation,
        animated: bool,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        self.controller
            .show_swipe(&mut self.row, orientation, animated, delegate)
    }

    /// Close the row.
    pub fn hide_swipe<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        animated: bool,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        self.controller.hide_swipe(&mut self.row, animated, delegate)
    }

    /// Report an intermediate offset of a running animation.
    pub fn animation_progress(&mut self, id: AnimationId, offset: f64) {
        self.controller.animation_progress(&mut self.row, id, offset);
    }

    /// Report that an animation completed.
    pub fn animation_finished(&mut self, id: AnimationId) {
        self.controller.animation_finished(&mut self.row, id);
    }

    /// Rebuild the revealed actions after a change of display traits (e.g. text size).
    pub fn traits_changed(&mut self) {
        self.controller.traits_changed(&self.row);
    }

    /// Return the row to rest immediately, without notifying the delegate.
    pub fn reset(&mut self) {
        let frame = self.row.frame;
        self.row.frame = Rect::from_origin_size(Point::new(0.0, frame.y0), frame.size());
        self.controller.reset(&mut self.row);
    }

    /// Sides that currently offer actions.
    pub fn editable_sides<D: SwipeViewDelegate + ?Sized>(&self, delegate: &D) -> Sides {
        [Orientation::Left, Orientation::Right]
            .into_iter()
            .filter(|o| {
                delegate.can_begin_editing(*o)
                    && delegate.edit_actions(*o).is_some_and(|a| !a.is_empty())
            })
            .fold(Sides::empty(), |sides, o| sides | o.side())
    }

    /// Whether `point`, in the container's coordinate space, lies within the row's vertical span.
    ///
    /// The horizontal position is ignored so actions sitting beside the row still get touches.
    pub fn contains(&self, point: Point) -> bool {
        point.y > self.row.frame.y0 && point.y < self.row.frame.y1
    }

    /// Hit-test `point`, in the container's coordinate space, against this row.
    ///
    /// `rows` are all swipeable rows of the container. If any of them is open and does not
    /// contain the point, the touch is rejected and every open row should be hidden. The sweep
    /// is skipped while a screen reader is running. Detached rows never contain a touch.
    pub fn point_inside<'a>(
        &self,
        point: Point,
        rows: impl IntoIterator<Item = &'a Self>,
        screen_reader_running: bool,
    ) -> TouchResponse {
        if !self.is_attached() {
            return TouchResponse::Outside;
        }
        if !screen_reader_running
            && rows
                .into_iter()
                .any(|row| row.state().is_open() && !row.contains(point))
        {
            return TouchResponse::DismissOpenRows;
        }
        if self.contains(point) {
            TouchResponse::Inside
        } else {
            TouchResponse::Outside
        }
    }
}
