// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe controller: turns pan input into row offsets, visible widths, and state changes.
//!
//! ## Tracking
//!
//! While dragging, the row's offset is `origin + translation.x`, shaped by three rules:
//!
//! - Dragging past the resting position towards the side without actions is damped with a
//!   ratio of `0.2` and no free travel.
//! - Without expansion, travel beyond the preferred width of the actions is damped with a ratio
//!   of `0.4`.
//! - With expansion, crossing the host's threshold snaps the row to the expansion target and
//!   marks the actions expanded; travel beyond the target is damped by the style's elasticity.
//!
//! The visible width of the actions is always `|offset|` while the row is on the actions' side.
//!
//! ## Settling
//!
//! On release, the direction of the velocity decides: moving back towards the resting position
//! closes the row, anything else keeps it open. An expanded row always performs its first action.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_swipe_layout::{ActionsView, Orientation};

use crate::container::ScrollGeometry;
use crate::delegate::SwipeViewDelegate;
use crate::options::{ExpansionCompletion, SwipeOptions};
use crate::types::{
    Animation, AnimationId, PanEvent, PanPhase, SwipeAction, SwipeEvent, SwipeState,
};

/// Damping applied to travel beyond the preferred width when expansion is off.
pub(crate) const ELASTIC_SCROLL_RATIO: f64 = 0.4;

/// Damping applied when dragging towards the side without actions.
const WRONG_SIDE_ELASTICITY: f64 = 0.2;

/// The part of a row the controller drives.
#[derive(Clone, Debug, Default)]
pub(crate) struct Swipeable {
    pub(crate) state: SwipeState,
    pub(crate) frame: Rect,
    pub(crate) layout_margins: Insets,
}

impl Swipeable {
    /// Horizontal offset of the row from its resting position.
    pub(crate) fn offset(&self) -> f64 {
        self.frame.x0
    }

    fn set_offset(&mut self, offset: f64) {
        self.frame = Rect::from_origin_size(Point::new(offset, self.frame.y0), self.frame.size());
    }
}

/// `target` with any travel beyond `limit` scaled by `ratio`.
fn elastic(target: f64, limit: f64, ratio: f64) -> f64 {
    let distance = target.abs();
    if distance <= limit {
        target
    } else {
        target.signum() * (limit + (distance - limit) * ratio)
    }
}

/// Frame of the actions view in the row's coordinate space: just beyond the revealed edge.
fn actions_frame(orientation: Orientation, row: Size) -> Rect {
    match orientation {
        Orientation::Left => Rect::new(-row.width, 0.0, 0.0, row.height),
        Orientation::Right => Rect::new(row.width, 0.0, 2.0 * row.width, row.height),
    }
}

/// Gesture and animation state for one row.
///
/// Owned by a [`SwipeView`](crate::SwipeView), which forwards events to it. The accessors expose
/// what the controller is currently showing.
#[derive(Clone, Debug, Default)]
pub struct SwipeController {
    actions: Vec<SwipeAction>,
    actions_view: Option<ActionsView>,
    options: SwipeOptions,
    container: Option<ScrollGeometry>,
    original_layout_margins: Insets,
    origin: f64,
    tracking: bool,
    scroll_ratio: f64,
    animation: Option<Animation>,
    next_animation: u64,
}

impl SwipeController {
    /// Actions currently shown, in delegate order.
    pub fn actions(&self) -> &[SwipeAction] {
        &self.actions
    }

    /// Button geometry of the side currently shown.
    pub fn actions_view(&self) -> Option<&ActionsView> {
        self.actions_view.as_ref()
    }

    /// Options of the current swipe.
    pub fn options(&self) -> &SwipeOptions {
        &self.options
    }

    /// Layout margins the row had before the current swipe started.
    pub fn original_layout_margins(&self) -> Insets {
        self.original_layout_margins
    }

    /// The animation the host is expected to be running, if any.
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Latest geometry of the attached container.
    pub fn container(&self) -> Option<&ScrollGeometry> {
        self.container.as_ref()
    }

    pub(crate) fn set_container(&mut self, container: Option<ScrollGeometry>) {
        self.container = container;
    }

    pub(crate) fn should_begin(&self, translation: Vec2) -> bool {
        translation.y.abs() <= translation.x.abs()
    }

    pub(crate) fn handle_pan<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        event: PanEvent,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        match event.phase {
            PanPhase::Began => self.pan_began(row, event.velocity, delegate),
            PanPhase::Changed => self.pan_changed(row, event.translation, &*delegate),
            PanPhase::Ended | PanPhase::Cancelled => {
                self.pan_ended(row, event.velocity, delegate)
            }
        }
    }

    fn pan_began<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        velocity: Vec2,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        if self.container.is_none() {
            log::debug!("pan ignored: row is not attached to a container");
            return Vec::new();
        }
        if matches!(row.state, SwipeState::Center | SwipeState::AnimatingToCenter) {
            let orientation = if velocity.x > 0.0 {
                Orientation::Left
            } else {
                Orientation::Right
            };
            if !self.show_actions(row, orientation, delegate) {
                // A running close keeps running; the refused gesture is ignored.
                self.tracking = false;
                return Vec::new();
            }
        }
        self.animation = None;
        self.origin = row.offset();
        self.tracking = true;
        row.state = SwipeState::Dragging;
        log::debug!("swipe began at offset {}", self.origin);
        Vec::new()
    }

    fn pan_changed<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        translation: Vec2,
        delegate: &D,
    ) -> Vec<SwipeEvent> {
        let Some(view) = self.actions_view.as_ref() else {
            return Vec::new();
        };
        if !self.tracking || !row.state.is_active() {
            return Vec::new();
        }
        let scale = view.orientation().scale();
        let preferred = view.preferred_width();
        let was_expanded = view.expanded();

        self.scroll_ratio = 1.0;
        let target = self.origin + translation.x;

        if target * scale > 0.0 {
            self.animation = None;
            self.set_offset(row, elastic(target, 0.0, WRONG_SIDE_ELASTICITY));
            self.scroll_ratio = ELASTIC_SCROLL_RATIO;
            return Vec::new();
        }

        let mut events = Vec::new();
        match self.options.expansion {
            Some(expansion) => {
                let reference = self.reference_width(row, delegate);
                let current = target.abs();
                let expanded = expansion.should_expand(current);
                if expanded && !was_expanded && reference > current {
                    // Snap to the expansion target and keep tracking from there.
                    let edge = -reference * scale;
                    self.origin = edge - translation.x;
                    events.push(SwipeEvent::Animate(self.animate_to(row, edge, 0.0)));
                } else {
                    // Tracking supersedes a pending snap.
                    self.animation = None;
                    self.set_offset(row, elastic(target, reference, expansion.elasticity));
                }
                if let Some(view) = self.actions_view.as_mut()
                    && view.set_expanded(expanded)
                {
                    log::debug!("actions expanded: {expanded}");
                    events.push(SwipeEvent::ExpansionChanged(expanded));
                }
            }
            None => {
                let offset = elastic(target, preferred, ELASTIC_SCROLL_RATIO);
                self.set_offset(row, offset);
                if offset != target {
                    self.scroll_ratio = ELASTIC_SCROLL_RATIO;
                }
            }
        }
        events
    }

    fn pan_ended<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        velocity: Vec2,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        if !core::mem::take(&mut self.tracking) {
            return Vec::new();
        }
        let Some(view) = self.actions_view.as_ref() else {
            return Vec::new();
        };
        if !row.state.is_active() && row.offset() == 0.0 {
            return Vec::new();
        }
        let orientation = view.orientation();
        let expanded = view.expanded();
        let open_offset = -view.preferred_width() * orientation.scale();
        let closing = match orientation {
            Orientation::Left => velocity.x < 0.0 && !expanded,
            Orientation::Right => velocity.x > 0.0 && !expanded,
        };

        if expanded {
            row.state = SwipeState::from(orientation);
            return self.perform_expansion(row, delegate);
        }
        if closing {
            return self.close(row, delegate, velocity.x, true);
        }
        row.state = SwipeState::from(orientation);
        log::debug!("swipe settled open on {orientation:?}");
        vec![SwipeEvent::Animate(self.animate_to(row, open_offset, velocity.x))]
    }

    fn perform_expansion<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        let Some(view) = self.actions_view.as_ref() else {
            return Vec::new();
        };
        let orientation = view.orientation();
        let completion = self
            .options
            .expansion
            .map(|expansion| expansion.completion)
            .unwrap_or_default();
        log::debug!("performing expanded action on {orientation:?} ({completion:?})");

        let mut events = vec![SwipeEvent::ActionTriggered {
            orientation,
            index: 0,
        }];
        match completion {
            ExpansionCompletion::Selection => {
                events.extend(self.close(row, delegate, 0.0, true));
            }
            ExpansionCompletion::Fill | ExpansionCompletion::Destructive => {
                let edge = -self.reference_width(row, &*delegate) * orientation.scale();
                events.push(SwipeEvent::Animate(self.animate_to(row, edge, 0.0)));
                if completion == ExpansionCompletion::Destructive {
                    events.push(SwipeEvent::RemoveRequested);
                }
            }
        }
        events
    }

    pub(crate) fn handle_tap<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        point: Point,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        if !row.state.is_open() {
            return Vec::new();
        }
        let Some(view) = self.actions_view.as_ref() else {
            return Vec::new();
        };
        let orientation = view.orientation();
        match view.action_at(point) {
            Some(index) => {
                let mut events = vec![SwipeEvent::ActionTriggered { orientation, index }];
                if self.actions.get(index).is_some_and(|a| a.hides_when_selected) {
                    events.extend(self.close(row, delegate, 0.0, true));
                }
                events
            }
            None => self.close(row, delegate, 0.0, true),
        }
    }

    pub(crate) fn show_swipe<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        orientation: Orientation,
        animated: bool,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        if self.container.is_none() || row.state != SwipeState::Center {
            return Vec::new();
        }
        if !self.show_actions(row, orientation, delegate) {
            return Vec::new();
        }
        row.state = SwipeState::from(orientation);
        let target = self
            .actions_view
            .as_ref()
            .map_or(0.0, |view| -view.preferred_width() * orientation.scale());
        if animated {
            vec![SwipeEvent::Animate(self.animate_to(row, target, 0.0))]
        } else {
            self.set_offset(row, target);
            Vec::new()
        }
    }

    pub(crate) fn hide_swipe<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        animated: bool,
        delegate: &mut D,
    ) -> Vec<SwipeEvent> {
        match row.state {
            SwipeState::Center => Vec::new(),
            SwipeState::AnimatingToCenter if animated => Vec::new(),
            SwipeState::AnimatingToCenter => {
                self.set_offset(row, 0.0);
                self.reset(row);
                Vec::new()
            }
            SwipeState::Left | SwipeState::Right | SwipeState::Dragging => {
                if self.actions_view.is_none() {
                    self.set_offset(row, 0.0);
                    self.reset(row);
                    return Vec::new();
                }
                self.close(row, delegate, 0.0, animated)
            }
        }
    }

    /// Start closing: notify the delegate, then animate or jump back to the resting position.
    fn close<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &mut Swipeable,
        delegate: &mut D,
        velocity: f64,
        animated: bool,
    ) -> Vec<SwipeEvent> {
        row.state = SwipeState::AnimatingToCenter;
        self.tracking = false;
        if let Some(view) = self.actions_view.as_ref() {
            delegate.did_end_editing(view.orientation());
        }
        if animated {
            log::debug!("swipe closing from offset {}", row.offset());
            vec![SwipeEvent::Animate(self.animate_to(row, 0.0, velocity))]
        } else {
            self.set_offset(row, 0.0);
            self.reset(row);
            Vec::new()
        }
    }

    pub(crate) fn animation_progress(&mut self, row: &mut Swipeable, id: AnimationId, offset: f64) {
        if self.animation.is_some_and(|a| a.id == id) {
            self.set_offset(row, offset);
        }
    }

    pub(crate) fn animation_finished(&mut self, row: &mut Swipeable, id: AnimationId) {
        let Some(animation) = self.animation.filter(|a| a.id == id) else {
            log::trace!("ignoring completion of superseded animation {id:?}");
            return;
        };
        self.animation = None;
        self.set_offset(row, animation.to);
        if row.state == SwipeState::AnimatingToCenter {
            self.reset(row);
        }
    }

    /// Rebuild the actions at their current reveal extent, e.g. after a trait change.
    pub(crate) fn traits_changed(&mut self, row: &Swipeable) {
        let Some(view) = self.actions_view.take() else {
            return;
        };
        let mut rebuilt = self.build_actions_view(row, view.orientation());
        rebuilt.set_visible_width(view.visible_width());
        rebuilt.set_expanded(view.expanded());
        self.actions_view = Some(rebuilt);
    }

    /// Follow a resize of the row.
    pub(crate) fn row_resized(&mut self, row: &Swipeable) {
        if let Some(view) = self.actions_view.as_mut() {
            view.set_frame(actions_frame(view.orientation(), row.frame.size()));
        }
    }

    pub(crate) fn reset(&mut self, row: &mut Swipeable) {
        row.state = SwipeState::Center;
        self.tracking = false;
        self.actions_view = None;
        self.actions.clear();
        self.animation = None;
        log::debug!("swipe reset");
    }

    /// Ask the delegate for `orientation`'s actions and build the container; false if refused.
    fn show_actions<D: SwipeViewDelegate + ?Sized>(
        &mut self,
        row: &Swipeable,
        orientation: Orientation,
        delegate: &mut D,
    ) -> bool {
        if !delegate.can_begin_editing(orientation) {
            log::debug!("delegate vetoed swipe towards {orientation:?}");
            return false;
        }
        let Some(actions) = delegate
            .edit_actions(orientation)
            .filter(|actions| !actions.is_empty())
        else {
            log::debug!("no actions for {orientation:?}");
            return false;
        };
        let options = delegate.edit_actions_options(orientation);
        if let Err(err) = options.validate() {
            log::warn!("swipe towards {orientation:?} refused: {err}");
            return false;
        }

        self.original_layout_margins = row.layout_margins;
        delegate.will_begin_editing(orientation);
        self.actions = actions;
        self.options = options;
        self.actions_view = Some(self.build_actions_view(row, orientation));
        true
    }

    fn build_actions_view(&self, row: &Swipeable, orientation: Orientation) -> ActionsView {
        let width = row.frame.width();
        let frame = actions_frame(orientation, row.frame.size());
        let safe_area = self.container.map_or(Insets::ZERO, |c| c.safe_area);
        ActionsView::new(
            orientation,
            self.options.transition_style,
            frame,
            self.actions.len(),
            self.options.button_width(width, &self.actions),
        )
        .with_view_inset(safe_area)
        .with_additional_width(self.options.additional_width)
    }

    /// Width a full swipe travels: the delegate's visible rect, or the row itself.
    fn reference_width<D: SwipeViewDelegate + ?Sized>(&self, row: &Swipeable, delegate: &D) -> f64 {
        self.container
            .and_then(|container| delegate.visible_rect(&container))
            .map_or(row.frame.width(), |rect| rect.width())
    }

    fn set_offset(&mut self, row: &mut Swipeable, offset: f64) {
        row.set_offset(offset);
        if let Some(view) = self.actions_view.as_mut() {
            let on_actions_side = offset * view.orientation().scale() <= 0.0;
            view.set_visible_width(if on_actions_side { offset.abs() } else { 0.0 });
        }
    }

    fn animate_to(&mut self, row: &Swipeable, to: f64, velocity: f64) -> Animation {
        let from = row.offset();
        let distance = to - from;
        let initial_velocity = if distance == 0.0 {
            0.0
        } else {
            velocity * self.scroll_ratio / distance
        };
        self.next_animation += 1;
        let animation = Animation {
            id: AnimationId(self.next_animation),
            from,
            to,
            duration: self.options.animation_duration,
            initial_velocity,
        };
        self.animation = Some(animation);
        animation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elastic_damps_past_limit() {
        assert_eq!(elastic(-50.0, 100.0, 0.4), -50.0);
        assert_eq!(elastic(-150.0, 100.0, 0.4), -120.0);
        assert_eq!(elastic(150.0, 100.0, 0.4), 120.0);
        assert_eq!(elastic(30.0, 0.0, 0.2), 6.0);
    }

    #[test]
    fn should_begin_prefers_horizontal() {
        let controller = SwipeController::default();
        assert!(controller.should_begin(Vec2::new(10.0, 3.0)));
        assert!(controller.should_begin(Vec2::new(-4.0, 4.0)));
        assert!(!controller.should_begin(Vec2::new(2.0, -9.0)));
    }

    #[test]
    fn actions_frame_sits_beyond_revealed_edge() {
        let row = Size::new(400.0, 44.0);
        assert_eq!(
            actions_frame(Orientation::Right, row),
            Rect::new(400.0, 0.0, 800.0, 44.0)
        );
        assert_eq!(
            actions_frame(Orientation::Left, row),
            Rect::new(-400.0, 0.0, 0.0, 44.0)
        );
    }
}
