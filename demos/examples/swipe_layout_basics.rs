// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition layouts side by side.
//!
//! Reveals three 60pt buttons step by step with each transition style and prints the visible
//! width of every button along with the container's scroll offset.
//!
//! Run:
//! - `cargo run -p understory_swipe_demos --example swipe_layout_basics`

use kurbo::Rect;
use understory_swipe_layout::{ActionsView, Orientation, TransitionKind};

fn main() {
    let frame = Rect::new(320.0, 0.0, 640.0, 44.0);
    for kind in [
        TransitionKind::Border,
        TransitionKind::Drag,
        TransitionKind::Reveal,
    ] {
        println!("== {kind:?} ==");
        let mut actions = ActionsView::new(Orientation::Right, kind, frame, 3, 60.0);
        for visible in [0.0, 45.0, 90.0, 150.0, 180.0, 220.0] {
            actions.set_visible_width(visible);
            println!(
                "visible {visible:>5.1}: widths {:?}, bounds.x0 {:>6.1}",
                actions.visible_widths(),
                actions.bounds().x0,
            );
        }
    }

    // Expanded: the first action covers the whole revealed area.
    let mut actions = ActionsView::new(Orientation::Left, TransitionKind::Drag, frame, 3, 60.0);
    actions.set_visible_width(260.0);
    actions.set_expanded(true);
    println!("== Drag, expanded ==");
    println!("widths {:?}", actions.visible_widths());
    println!("first button {:?}", actions.button_frame(0));
}
