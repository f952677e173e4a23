// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use understory_swipe::{
    ActionStyle, Orientation, PanEvent, PanTargets, PannableContainer, ScrollGeometry,
    SwipeAction, SwipeId, SwipeView, WithDefaults,
};

struct List(PanTargets);

impl PannableContainer for List {
    fn pan_targets(&mut self) -> &mut PanTargets {
        &mut self.0
    }

    fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry {
            bounds: Rect::new(0.0, 0.0, 320.0, 568.0),
            ..Default::default()
        }
    }
}

fn actions(_orientation: Orientation) -> Option<Vec<SwipeAction>> {
    Some(vec![
        SwipeAction::new(ActionStyle::Destructive, "Delete"),
        SwipeAction::new(ActionStyle::Default, "Flag"),
        SwipeAction::new(ActionStyle::Default, "More"),
    ])
}

fn bench_pan(c: &mut Criterion) {
    c.bench_function("pan_open_and_release", |b| {
        let mut delegate = WithDefaults(actions);
        b.iter_batched(
            || {
                let mut list = List(PanTargets::new());
                let mut row = SwipeView::new(SwipeId::new(1), Rect::new(0.0, 0.0, 320.0, 44.0));
                row.attach(&mut list);
                row
            },
            |mut row| {
                row.handle_pan(PanEvent::began(Vec2::new(-1.0, 0.0)), &mut delegate);
                for step in 1..=60 {
                    row.handle_pan(PanEvent::changed(-4.0 * f64::from(step)), &mut delegate);
                }
                black_box(row.handle_pan(PanEvent::ended(-240.0, -100.0), &mut delegate))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pan);
criterion_main!(benches);
