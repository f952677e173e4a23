// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_swipe_layout::{ActionsView, Orientation, TransitionKind, TransitionLayout};

const KINDS: [TransitionKind; 3] = [
    TransitionKind::Border,
    TransitionKind::Drag,
    TransitionKind::Reveal,
];

fn bench_visible_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_widths");
    for kind in KINDS {
        for n in [1_usize, 3, 8] {
            let mut view = ActionsView::new(
                Orientation::Right,
                kind,
                Rect::new(320.0, 0.0, 640.0, 44.0),
                n,
                60.0,
            );
            view.set_visible_width(60.0 * n as f64 * 0.75);
            let ctx = view.context();
            group.throughput(Throughput::Elements(n as u64));
            group.bench_function(format!("{kind:?}/n={n}"), |b| {
                b.iter(|| black_box(kind.visible_widths(black_box(&ctx))));
            });
        }
    }
    group.finish();
}

fn bench_drag_sweep(c: &mut Criterion) {
    // A full reveal in 1pt steps, as a pan would drive it.
    let mut group = c.benchmark_group("drag_sweep");
    for kind in KINDS {
        group.throughput(Throughput::Elements(240));
        group.bench_function(format!("{kind:?}"), |b| {
            let mut view = ActionsView::new(
                Orientation::Left,
                kind,
                Rect::new(-320.0, 0.0, 0.0, 44.0),
                3,
                60.0,
            );
            b.iter(|| {
                for step in 0..240 {
                    view.set_visible_width(f64::from(step));
                    black_box(view.button_frames());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible_widths, bench_drag_sweep);
criterion_main!(benches);
