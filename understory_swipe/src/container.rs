// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hosting scroll container: its geometry and its shared pan recognizer.
//!
//! ## Overview
//!
//! Rows live inside a scrollable container (a table or collection) whose own pan gesture
//! scrolls the content. Every attached row registers itself as a target of that pan so a
//! fresh scroll can close any open row.
//!
//! The container is injected explicitly: the host calls
//! [`SwipeView::attach`](crate::SwipeView::attach) with the container that holds the row.
//! Rows never store a reference to the container; they keep a copy of its
//! [`ScrollGeometry`] and their [`SwipeId`] lives in the container's [`PanTargets`].
//!
//! ## Dispatch sketch
//!
//! ```no_run
//! use understory_swipe::{NoDelegate, PanPhase, PannableContainer, SwipeView};
//!
//! fn container_pan_began<C: PannableContainer>(container: &mut C, rows: &mut [SwipeView]) {
//!     let targets = container.pan_targets().targets().to_vec();
//!     for row in rows.iter_mut().filter(|row| targets.contains(&row.id())) {
//!         let _events = row.handle_container_pan(PanPhase::Began, &mut NoDelegate);
//!     }
//! }
//! ```

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Host-assigned identifier of a row.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SwipeId(u64);

impl SwipeId {
    /// Wrap a host identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The wrapped identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Snapshot of a scroll container's geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    /// Size of the scrollable content.
    pub content_size: Size,
    /// Bounds of the container in its own coordinate space.
    pub bounds: Rect,
    /// Current scroll offset.
    pub content_offset: Vec2,
    /// Insets kept free of content, for example around a display cutout.
    pub safe_area: Insets,
}

impl ScrollGeometry {
    /// The part of the content currently on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO + self.content_offset, self.bounds.size())
    }
}

/// Targets of a container's pan recognizer.
///
/// Mirrors a gesture recognizer's target list: adding an existing target is a no-op and
/// targets are kept in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanTargets {
    targets: Vec<SwipeId>,
}

impl PanTargets {
    /// Create an empty target list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id`; no-op if already registered.
    pub fn add_target(&mut self, id: SwipeId) {
        if !self.targets.contains(&id) {
            self.targets.push(id);
        }
    }

    /// Unregister `id`; no-op if absent.
    pub fn remove_target(&mut self, id: SwipeId) {
        self.targets.retain(|t| *t != id);
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: SwipeId) -> bool {
        self.targets.contains(&id)
    }

    /// All registered targets in registration order.
    pub fn targets(&self) -> &[SwipeId] {
        &self.targets
    }
}

/// A scroll container whose pan recognizer is shared with its rows.
pub trait PannableContainer {
    /// Target list of the container's pan recognizer.
    fn pan_targets(&mut self) -> &mut PanTargets;

    /// Current geometry of the container.
    fn geometry(&self) -> ScrollGeometry;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_deduplicate_and_keep_order() {
        let mut targets = PanTargets::new();
        targets.add_target(SwipeId::new(2));
        targets.add_target(SwipeId::new(1));
        targets.add_target(SwipeId::new(2));
        assert_eq!(targets.targets(), &[SwipeId::new(2), SwipeId::new(1)]);
        targets.remove_target(SwipeId::new(2));
        assert!(!targets.contains(SwipeId::new(2)));
        targets.remove_target(SwipeId::new(9));
        assert_eq!(targets.targets(), &[SwipeId::new(1)]);
    }

    #[test]
    fn visible_rect_follows_scroll() {
        let geometry = ScrollGeometry {
            content_size: Size::new(320.0, 2000.0),
            bounds: Rect::new(0.0, 0.0, 320.0, 480.0),
            content_offset: Vec2::new(0.0, 300.0),
            safe_area: Insets::ZERO,
        };
        assert_eq!(geometry.visible_rect(), Rect::new(0.0, 300.0, 320.0, 780.0));
    }
}
