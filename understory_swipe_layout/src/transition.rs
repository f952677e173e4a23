// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition layouts: how buttons move while a row of actions is revealed.
//!
//! ## Overview
//!
//! A [`TransitionLayout`] is a stateless strategy with three pure operations:
//!
//! - [`container`](TransitionLayout::container) maps the container's bounds to new bounds whose
//!   origin acts as a scroll offset for the whole row.
//! - [`layout`](TransitionLayout::layout) maps a button's natural frame to its frame at the current
//!   reveal extent.
//! - [`visible_widths`](TransitionLayout::visible_widths) reports how much of each button is shown,
//!   index-aligned with the action order. Hit testing is derived from these widths.
//!
//! Three strategies are provided and selected through [`TransitionKind`]:
//!
//! - [`BorderLayout`]: buttons are spread across the revealed area and overlap while they converge.
//! - [`DragLayout`]: buttons are laid end to end and the container slides to reveal them.
//! - [`RevealLayout`]: like drag, but anchored on the far edge so the last button shows first.
//!
//! ## Degenerate input
//!
//! Nothing here fails. Widths are clamped so they are never negative, an empty row yields an empty
//! width sequence, and overshoot past the natural width never makes a drag/reveal button wider than
//! `minimum_button_width`.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::context::LayoutContext;
use crate::types::Orientation;

/// Capability shared by all transition strategies.
///
/// Implementations hold no state: identical arguments always produce identical results.
pub trait TransitionLayout {
    /// Return the container bounds for the context's visible width.
    ///
    /// Only the origin is expected to change; the size of `bounds` is preserved.
    fn container(&self, bounds: Rect, context: &LayoutContext) -> Rect;

    /// Return the frame of the button at `index` given its natural `frame`.
    ///
    /// The vertical extent of `frame` is preserved.
    fn layout(&self, frame: Rect, index: usize, context: &LayoutContext) -> Rect;

    /// Visible width of each button, in action order.
    fn visible_widths(&self, context: &LayoutContext) -> Vec<f64>;
}

/// Replace the horizontal span of `frame`, keeping its vertical span.
fn with_x_span(frame: Rect, x: f64, width: f64) -> Rect {
    let width = width.max(0.0);
    Rect::new(x, frame.y0, x + width, frame.y1)
}

/// Move the origin of `bounds` horizontally to `x`, keeping its size.
fn with_origin_x(bounds: Rect, x: f64) -> Rect {
    Rect::from_origin_size(Point::new(x, bounds.y0), bounds.size())
}

/// Buttons overlap and converge as the row is revealed.
///
/// The container never scrolls. On the right, button `i` sits at
/// `(i * content_width / n + diff) * scale` where `diff = visible_width - content_width`,
/// so buttons start off-screen and converge onto their slots. On the left every button is
/// anchored on the leading inset and shrinks by `i * minimum_button_width`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BorderLayout;

impl TransitionLayout for BorderLayout {
    fn container(&self, bounds: Rect, _context: &LayoutContext) -> Rect {
        bounds
    }

    fn layout(&self, frame: Rect, index: usize, context: &LayoutContext) -> Rect {
        let n = context.number_of_actions;
        if n == 0 {
            return frame;
        }
        let i = index as f64;
        match context.orientation {
            Orientation::Right => {
                let slot = context.content_size.width / n as f64;
                let x = (i * slot + context.overshoot()) * context.orientation.scale();
                with_x_span(frame, x, frame.width())
            }
            Orientation::Left => with_x_span(
                frame,
                context.leading_origin(),
                frame.width() - i * context.minimum_button_width,
            ),
        }
    }

    fn visible_widths(&self, context: &LayoutContext) -> Vec<f64> {
        let n = context.number_of_actions;
        if n == 0 {
            return Vec::new();
        }
        // Every button shows the same amount regardless of its position.
        let width = (context.content_size.width / n as f64 + context.overshoot()).max(0.0);
        (0..n).map(|_| width).collect()
    }
}

/// Buttons are laid out at a fixed stride and the container slides to reveal them.
///
/// Buttons become visible one after another as `visible_width` grows, each capped at
/// `minimum_button_width`.
#[derive(Copy, Clone, Debug, Default)]
pub struct DragLayout;

impl TransitionLayout for DragLayout {
    fn container(&self, bounds: Rect, context: &LayoutContext) -> Rect {
        let x = (context.content_size.width - context.visible_width) * context.orientation.scale();
        with_origin_x(bounds, x)
    }

    fn layout(&self, frame: Rect, index: usize, context: &LayoutContext) -> Rect {
        let shift = index as f64 * context.minimum_button_width;
        let x = match context.orientation {
            Orientation::Left => context.leading_origin(),
            Orientation::Right => {
                shift * context.orientation.scale() + context.leading_origin()
            }
        };
        with_x_span(frame, x, frame.width() - shift)
    }

    fn visible_widths(&self, context: &LayoutContext) -> Vec<f64> {
        let min = context.minimum_button_width.max(0.0);
        (0..context.number_of_actions)
            .map(|i| (context.visible_width - i as f64 * min).min(min).max(0.0))
            .collect()
    }
}

/// Drag layout anchored on the far edge: the last button is revealed first.
///
/// Buttons are placed exactly as in [`DragLayout`]; only the container offset and the
/// order of the visible widths differ.
#[derive(Copy, Clone, Debug, Default)]
pub struct RevealLayout;

impl TransitionLayout for RevealLayout {
    fn container(&self, bounds: Rect, context: &LayoutContext) -> Rect {
        let width = context.minimum_button_width * context.number_of_actions as f64;
        let x = (width - context.visible_width + context.view_inset.x0)
            * context.orientation.scale();
        with_origin_x(bounds, x)
    }

    fn layout(&self, frame: Rect, index: usize, context: &LayoutContext) -> Rect {
        DragLayout.layout(frame, index, context)
    }

    fn visible_widths(&self, context: &LayoutContext) -> Vec<f64> {
        let mut widths = DragLayout.visible_widths(context);
        widths.reverse();
        widths
    }
}

/// Selects one of the built-in transition strategies.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TransitionKind {
    /// See [`BorderLayout`].
    #[default]
    Border,
    /// See [`DragLayout`].
    Drag,
    /// See [`RevealLayout`].
    Reveal,
}

static BORDER: BorderLayout = BorderLayout;
static DRAG: DragLayout = DragLayout;
static REVEAL: RevealLayout = RevealLayout;

impl TransitionKind {
    /// The strategy implementing this kind.
    pub fn strategy(self) -> &'static dyn TransitionLayout {
        match self {
            Self::Border => &BORDER,
            Self::Drag => &DRAG,
            Self::Reveal => &REVEAL,
        }
    }
}

impl TransitionLayout for TransitionKind {
    fn container(&self, bounds: Rect, context: &LayoutContext) -> Rect {
        self.strategy().container(bounds, context)
    }

    fn layout(&self, frame: Rect, index: usize, context: &LayoutContext) -> Rect {
        self.strategy().layout(frame, index, context)
    }

    fn visible_widths(&self, context: &LayoutContext) -> Vec<f64> {
        self.strategy().visible_widths(context)
    }
}
