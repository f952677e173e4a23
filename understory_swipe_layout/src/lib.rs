// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe_layout --heading-base-level=0

//! Understory Swipe Layout: Kurbo-native transition layouts for swipe-to-reveal actions.
//!
//! When a list row is dragged sideways it reveals a row of action buttons. This crate computes
//! where those buttons go as a function of how far the row has been revealed. It does no input
//! handling and no drawing; see `understory_swipe` for the gesture state machine that drives it.
//!
//! ## API overview
//!
//! - [`Orientation`]: which side the actions are revealed from, with its offset sign ([`Orientation::scale`]).
//! - [`LayoutContext`]: an immutable geometry snapshot, rebuilt for every layout pass.
//! - [`TransitionLayout`]: the strategy interface, with [`BorderLayout`], [`DragLayout`], and [`RevealLayout`].
//! - [`TransitionKind`]: selects a strategy by value.
//! - [`ActionsView`]: owns the button frames for one side and keeps them in sync with the visible width.
//! - [`Sides`]: a set of orientations.
//!
//! ## Visible widths
//!
//! Every strategy reports one visible width per action. These are the widths the container
//! actually shows, and [`ActionsView::action_at`] derives tappable regions from them, so rendering
//! and hit testing cannot disagree.
//!
//! ## Example
//!
//! ```
//! use understory_swipe_layout::{ActionsView, Orientation, TransitionKind};
//! use kurbo::{Point, Rect};
//!
//! // Three 60pt buttons to the right of a 320pt row.
//! let mut actions = ActionsView::new(
//!     Orientation::Right,
//!     TransitionKind::Drag,
//!     Rect::new(320.0, 0.0, 640.0, 44.0),
//!     3,
//!     60.0,
//! );
//!
//! actions.set_visible_width(150.0);
//! assert_eq!(actions.visible_widths(), vec![60.0, 60.0, 30.0]);
//!
//! // The second button occupies 60..120pt past the row's trailing edge.
//! assert_eq!(actions.action_at(Point::new(400.0, 22.0)), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod actions;
mod context;
mod transition;
mod types;

pub use actions::ActionsView;
pub use context::LayoutContext;
pub use transition::{BorderLayout, DragLayout, RevealLayout, TransitionKind, TransitionLayout};
pub use types::{Orientation, Sides};
