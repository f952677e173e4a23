// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen reader support: custom actions and the exposed element tree.
//!
//! A screen reader cannot perform a swipe, so every action of both sides is also offered as a
//! custom action on the row. The first action of each side comes first, right before left,
//! followed by the remaining right actions and then the remaining left actions.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use understory_swipe_layout::Orientation;

use crate::delegate::SwipeViewDelegate;
use crate::types::{ActionStyle, SwipeEvent};
use crate::view::SwipeView;

/// A swipe action offered to assistive technology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessibilityAction {
    /// Side the action belongs to.
    pub orientation: Orientation,
    /// Index in the delegate's order for that side.
    pub index: usize,
    /// Spoken name, if the action has a title.
    pub title: Option<String>,
    /// Visual style, so destructive actions can be announced as such.
    pub style: ActionStyle,
}

/// Which elements a row exposes to assistive technology.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AccessibilityElements {
    /// The row's own elements, as the host would expose them anyway.
    Inherited,
    /// Only the revealed actions view.
    ActionsView,
}

fn side_actions<D: SwipeViewDelegate + ?Sized>(
    delegate: &D,
    orientation: Orientation,
) -> Vec<AccessibilityAction> {
    if !delegate.can_begin_editing(orientation) {
        return Vec::new();
    }
    delegate
        .edit_actions(orientation)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, action)| AccessibilityAction {
            orientation,
            index,
            title: action.title,
            style: action.style,
        })
        .collect()
}

impl SwipeView {
    /// Elements to expose: only the actions view while the row is not at rest.
    pub fn accessibility_elements(&self) -> AccessibilityElements {
        if self.state().is_active() && self.actions_view().is_some() {
            AccessibilityElements::ActionsView
        } else {
            AccessibilityElements::Inherited
        }
    }

    /// Custom actions for both sides, or `None` when neither side offers any.
    pub fn accessibility_custom_actions<D: SwipeViewDelegate + ?Sized>(
        &self,
        delegate: &D,
    ) -> Option<Vec<AccessibilityAction>> {
        let mut right = side_actions(delegate, Orientation::Right).into_iter();
        let mut left = side_actions(delegate, Orientation::Left).into_iter();
        let mut actions: Vec<_> = right.next().into_iter().chain(left.next()).collect();
        actions.extend(right);
        actions.extend(left);
        (!actions.is_empty()).then_some(actions)
    }

    /// Perform a custom action previously returned by
    /// [`accessibility_custom_actions`](Self::accessibility_custom_actions).
    pub fn perform_accessibility_action(&self, action: &AccessibilityAction) -> Vec<SwipeEvent> {
        log::debug!(
            "accessibility action {} on {:?}",
            action.index,
            action.orientation
        );
        let mut events = vec![SwipeEvent::ActionTriggered {
            orientation: action.orientation,
            index: action.index,
        }];
        if action.style == ActionStyle::Destructive {
            events.push(SwipeEvent::RemoveRequested);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{PanTargets, PannableContainer, ScrollGeometry, SwipeId};
    use crate::delegate::{NoDelegate, WithDefaults};
    use crate::types::SwipeAction;
    use kurbo::Rect;

    fn delegate() -> WithDefaults<impl Fn(Orientation) -> Option<Vec<SwipeAction>>> {
        WithDefaults(|orientation: Orientation| {
            Some(match orientation {
                Orientation::Right => vec![
                    SwipeAction::new(ActionStyle::Destructive, "Delete"),
                    SwipeAction::new(ActionStyle::Default, "Flag"),
                ],
                Orientation::Left => vec![
                    SwipeAction::new(ActionStyle::Default, "Read"),
                    SwipeAction::new(ActionStyle::Default, "Pin"),
                ],
            })
        })
    }

    struct List(PanTargets);

    impl PannableContainer for List {
        fn pan_targets(&mut self) -> &mut PanTargets {
            &mut self.0
        }

        fn geometry(&self) -> ScrollGeometry {
            ScrollGeometry::default()
        }
    }

    #[test]
    fn first_actions_lead() {
        let row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
        let titles: Vec<_> = row
            .accessibility_custom_actions(&delegate())
            .unwrap()
            .into_iter()
            .map(|a| a.title.unwrap())
            .collect();
        assert_eq!(titles, ["Delete", "Read", "Flag", "Pin"]);
    }

    #[test]
    fn no_actions_is_none() {
        let row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
        assert_eq!(row.accessibility_custom_actions(&NoDelegate), None);
    }

    #[test]
    fn destructive_action_requests_removal() {
        let row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
        let actions = row.accessibility_custom_actions(&delegate()).unwrap();
        assert_eq!(
            row.perform_accessibility_action(&actions[0]),
            vec![
                SwipeEvent::ActionTriggered {
                    orientation: Orientation::Right,
                    index: 0
                },
                SwipeEvent::RemoveRequested
            ]
        );
        assert_eq!(row.perform_accessibility_action(&actions[3]).len(), 1);
    }

    #[test]
    fn open_row_exposes_actions_view() {
        let mut list = List(PanTargets::new());
        let mut row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
        assert_eq!(row.accessibility_elements(), AccessibilityElements::Inherited);
        row.attach(&mut list);
        let mut delegate = delegate();
        row.show_swipe(Orientation::Left, false, &mut delegate);
        assert_eq!(row.accessibility_elements(), AccessibilityElements::ActionsView);
        row.hide_swipe(false, &mut delegate);
        assert_eq!(row.accessibility_elements(), AccessibilityElements::Inherited);
    }
}
