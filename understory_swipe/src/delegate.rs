// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The delegate capability: where a row gets its actions and reports editing.
//!
//! ## Overview
//!
//! [`SwipeViewDelegate`] is the full capability. Every method is required, so an
//! implementation states its policy explicitly. Hosts that only want to supply actions implement
//! the one-method [`SwipeActionSource`] and wrap it in [`WithDefaults`], which fills in:
//!
//! - `can_begin_editing`: `true`;
//! - `edit_actions_options`: [`SwipeOptions::default`];
//! - `visible_rect`: `None`;
//! - `will_begin_editing` / `did_end_editing`: no-ops.
//!
//! Closures `Fn(Orientation) -> Option<Vec<SwipeAction>>` are action sources.
//!
//! A row without a delegate uses [`NoDelegate`], which offers no actions, so swiping is disabled.
//!
//! The delegate is borrowed for the duration of each call and never stored.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_swipe_layout::Orientation;

use crate::container::ScrollGeometry;
use crate::options::SwipeOptions;
use crate::types::SwipeAction;

/// Capability a host implements to configure swipes on a row.
pub trait SwipeViewDelegate {
    /// Veto gate consulted before a swipe towards `orientation` starts.
    fn can_begin_editing(&self, orientation: Orientation) -> bool;

    /// Actions for `orientation`, in display order. `None` or empty disables that side.
    fn edit_actions(&self, orientation: Orientation) -> Option<Vec<SwipeAction>>;

    /// Options for a swipe towards `orientation`.
    fn edit_actions_options(&self, orientation: Orientation) -> SwipeOptions;

    /// Optional override of the on-screen area of `container`, used to size full swipes.
    fn visible_rect(&self, container: &ScrollGeometry) -> Option<Rect>;

    /// A swipe towards `orientation` is about to reveal actions.
    fn will_begin_editing(&mut self, orientation: Orientation);

    /// The row started closing after editing towards `orientation`.
    fn did_end_editing(&mut self, orientation: Orientation);
}

/// Minimal capability: supply the actions for each side.
pub trait SwipeActionSource {
    /// Actions for `orientation`, in display order.
    fn edit_actions(&self, orientation: Orientation) -> Option<Vec<SwipeAction>>;
}

impl<F> SwipeActionSource for F
where
    F: Fn(Orientation) -> Option<Vec<SwipeAction>>,
{
    fn edit_actions(&self, orientation: Orientation) -> Option<Vec<SwipeAction>> {
        self(orientation)
    }
}

/// Supplies default behavior around a [`SwipeActionSource`].
#[derive(Clone, Debug, Default)]
pub struct WithDefaults<S>(pub S);

impl<S: SwipeActionSource> SwipeViewDelegate for WithDefaults<S> {
    fn can_begin_editing(&self, _orientation: Orientation) -> bool {
        true
    }

    fn edit_actions(&self, orientation: Orientation) -> Option<Vec<SwipeAction>> {
        self.0.edit_actions(orientation)
    }

    fn edit_actions_options(&self, _orientation: Orientation) -> SwipeOptions {
        SwipeOptions::default()
    }

    fn visible_rect(&self, _container: &ScrollGeometry) -> Option<Rect> {
        None
    }

    fn will_begin_editing(&mut self, _orientation: Orientation) {}

    fn did_end_editing(&mut self, _orientation: Orientation) {}
}

/// The absent delegate: no actions on either side.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDelegate;

impl SwipeViewDelegate for NoDelegate {
    fn can_begin_editing(&self, _orientation: Orientation) -> bool {
        false
    }

    fn edit_actions(&self, _orientation: Orientation) -> Option<Vec<SwipeAction>> {
        None
    }

    fn edit_actions_options(&self, _orientation: Orientation) -> SwipeOptions {
        SwipeOptions::default()
    }

    fn visible_rect(&self, _container: &ScrollGeometry) -> Option<Rect> {
        None
    }

    fn will_begin_editing(&mut self, _orientation: Orientation) {}

    fn did_end_editing(&mut self, _orientation: Orientation) {}
}
