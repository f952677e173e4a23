// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: a deterministic swipe-to-reveal state machine for list rows.
//!
//! A [`SwipeView`] is a row of a scrolling list that reveals action buttons when dragged
//! sideways. It consumes pan, tap, and animation callbacks from the host and produces row
//! offsets, button geometry, and [`SwipeEvent`]s. It does not recognize gestures, draw, or
//! animate; the host owns those and feeds the results back in.
//!
//! ## API overview
//!
//! - [`SwipeView`]: the row. Owns its frame and forwards input to its [`SwipeController`].
//! - [`SwipeViewDelegate`]: where a row gets its actions and [`SwipeOptions`], and where it
//!   reports editing. See [`WithDefaults`] and [`NoDelegate`].
//! - [`PannableContainer`]: the scroll container the row is attached to.
//! - [`SwipeEvent`]: animation requests, selected actions, and removal requests.
//!
//! Button geometry comes from [`understory_swipe_layout`]; its [`Orientation`], [`Sides`], and
//! [`TransitionKind`] are re-exported here.
//!
//! ## Lifecycle
//!
//! 1. Attach the row to its container with [`SwipeView::attach`].
//! 2. Forward the row's pan callbacks to [`SwipeView::handle_pan`], and the container's to
//!    [`SwipeView::handle_container_pan`].
//! 3. Run every [`Animation`] requested through [`SwipeEvent::Animate`] and report its end with
//!    [`SwipeView::animation_finished`].
//! 4. Dispatch [`SwipeEvent::ActionTriggered`] to the action's handler.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_swipe::{
//!     ActionStyle, Orientation, PanEvent, PanTargets, PannableContainer, ScrollGeometry,
//!     SwipeAction, SwipeEvent, SwipeId, SwipeState, SwipeView, WithDefaults,
//! };
//!
//! struct List {
//!     targets: PanTargets,
//! }
//!
//! impl PannableContainer for List {
//!     fn pan_targets(&mut self) -> &mut PanTargets {
//!         &mut self.targets
//!     }
//!
//!     fn geometry(&self) -> ScrollGeometry {
//!         ScrollGeometry { bounds: Rect::new(0.0, 0.0, 320.0, 480.0), ..Default::default() }
//!     }
//! }
//!
//! let mut delegate = WithDefaults(|orientation: Orientation| match orientation {
//!     Orientation::Right => Some(vec![
//!         SwipeAction::new(ActionStyle::Destructive, "Delete"),
//!         SwipeAction::new(ActionStyle::Default, "Archive"),
//!     ]),
//!     Orientation::Left => None,
//! });
//!
//! let mut list = List { targets: PanTargets::new() };
//! let mut row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
//! row.attach(&mut list);
//!
//! // Drag left by 100pt: the right-side actions appear.
//! row.handle_pan(PanEvent::began(Vec2::new(-1.0, 0.0)), &mut delegate);
//! row.handle_pan(PanEvent::changed(-100.0), &mut delegate);
//! assert_eq!(row.frame().x0, -100.0);
//! assert_eq!(row.actions_view().unwrap().visible_width(), 100.0);
//!
//! // Release while still moving left: the row settles open at two 74pt buttons.
//! let events = row.handle_pan(PanEvent::ended(-100.0, -200.0), &mut delegate);
//! let SwipeEvent::Animate(open) = events[0] else { unreachable!() };
//! assert_eq!(open.to, -148.0);
//! row.animation_finished(open.id);
//! assert_eq!(row.state(), SwipeState::Right);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accessibility;
mod container;
mod controller;
mod delegate;
mod options;
mod types;
mod view;

pub use accessibility::{AccessibilityAction, AccessibilityElements};
pub use container::{PanTargets, PannableContainer, ScrollGeometry, SwipeId};
pub use controller::SwipeController;
pub use delegate::{NoDelegate, SwipeActionSource, SwipeViewDelegate, WithDefaults};
pub use options::{ExpansionCompletion, ExpansionStyle, OptionsError, SwipeOptions};
pub use types::{
    ActionStyle, Animation, AnimationId, PanEvent, PanPhase, SwipeAction, SwipeEvent, SwipeState,
};
pub use view::{SwipeView, TouchResponse};

pub use understory_swipe_layout::{ActionsView, Orientation, Sides, TransitionKind};
