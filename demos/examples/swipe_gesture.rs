// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted swipe.
//!
//! Attaches a row to a list, drags it open, taps an action, then runs a full swipe that
//! expands the destructive action. Animations are completed immediately.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_swipe_demos --example swipe_gesture`

use kurbo::{Point, Rect, Vec2};
use understory_swipe::{
    ActionStyle, ExpansionCompletion, ExpansionStyle, Orientation, PanEvent, PanTargets,
    PannableContainer, ScrollGeometry, SwipeAction, SwipeEvent, SwipeId, SwipeOptions,
    SwipeView, SwipeViewDelegate, TransitionKind,
};

struct List {
    targets: PanTargets,
}

impl PannableContainer for List {
    fn pan_targets(&mut self) -> &mut PanTargets {
        &mut self.targets
    }

    fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry {
            bounds: Rect::new(0.0, 0.0, 320.0, 568.0),
            ..Default::default()
        }
    }
}

struct Inbox;

impl SwipeViewDelegate for Inbox {
    fn can_begin_editing(&self, _orientation: Orientation) -> bool {
        true
    }

    fn edit_actions(&self, orientation: Orientation) -> Option<Vec<SwipeAction>> {
        match orientation {
            Orientation::Right => Some(vec![
                SwipeAction::new(ActionStyle::Destructive, "Trash"),
                SwipeAction::new(ActionStyle::Default, "Flag"),
                SwipeAction::new(ActionStyle::Default, "More").hiding_when_selected(),
            ]),
            Orientation::Left => None,
        }
    }

    fn edit_actions_options(&self, _orientation: Orientation) -> SwipeOptions {
        SwipeOptions::default()
            .with_transition_style(TransitionKind::Reveal)
            .with_expansion(ExpansionStyle::new(
                240.0,
                ExpansionCompletion::Destructive,
            ))
    }

    fn visible_rect(&self, _container: &ScrollGeometry) -> Option<Rect> {
        None
    }

    fn will_begin_editing(&mut self, orientation: Orientation) {
        log::info!("editing {orientation:?}");
    }

    fn did_end_editing(&mut self, orientation: Orientation) {
        log::info!("done editing {orientation:?}");
    }
}

fn run(row: &mut SwipeView, events: Vec<SwipeEvent>) {
    for event in events {
        println!("  {event:?}");
        if let SwipeEvent::Animate(animation) = event {
            row.animation_finished(animation.id);
        }
    }
    println!(
        "  -> {:?} at offset {:.1}",
        row.state(),
        row.frame().x0
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut list = List {
        targets: PanTargets::new(),
    };
    let mut inbox = Inbox;
    let mut row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
    row.attach(&mut list);

    println!("== Drag open ==");
    let events = row.handle_pan(PanEvent::began(Vec2::new(-1.0, 0.0)), &mut inbox);
    run(&mut row, events);
    for dx in [-40.0, -120.0, -200.0] {
        let events = row.handle_pan(PanEvent::changed(dx), &mut inbox);
        if let Some(actions) = row.actions_view() {
            println!("  dx {dx}: widths {:?}", actions.visible_widths());
        }
        run(&mut row, events);
    }
    let events = row.handle_pan(PanEvent::ended(-200.0, -150.0), &mut inbox);
    run(&mut row, events);

    println!("== Tap \"Flag\" ==");
    // Find a point over the second action by probing the row's trailing side.
    let flag = row.actions_view().and_then(|actions| {
        (0..actions.visible_width() as u32)
            .map(|dx| Point::new(320.0 + f64::from(dx), 22.0))
            .find(|point| actions.action_at(*point) == Some(1))
    });
    if let Some(point) = flag {
        let events = row.handle_tap(point, &mut inbox);
        run(&mut row, events);
    }

    println!("== Close ==");
    let events = row.hide_swipe(true, &mut inbox);
    run(&mut row, events);

    println!("== Full swipe ==");
    let events = row.handle_pan(PanEvent::began(Vec2::new(-1.0, 0.0)), &mut inbox);
    run(&mut row, events);
    for dx in [-120.0, -260.0] {
        let events = row.handle_pan(PanEvent::changed(dx), &mut inbox);
        run(&mut row, events);
    }
    let events = row.handle_pan(PanEvent::ended(-260.0, -400.0), &mut inbox);
    run(&mut row, events);
}
