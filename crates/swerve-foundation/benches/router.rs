use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::rc::Rc;
use swerve_foundation::{GestureIntentRouter, Point};
use swerve_ui::{RegionTree, ScrollState};

const MOVE_SAMPLES: &[usize] = &[16, 256];

fn drag_router() -> (GestureIntentRouter<RegionTree>, usize) {
    let mut tree = RegionTree::new();
    let root = tree.add_root();
    let strip = tree.add_region(Some(root), ScrollState::horizontal(0.0, 1.0e9));
    let mut leaf = strip;
    for _ in 0..6 {
        leaf = tree.add_child(leaf);
    }
    let primary = Rc::new(ScrollState::vertical(0.0, 1.0e9));
    (GestureIntentRouter::new(primary, tree), leaf)
}

fn bench_vertical_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertical_drag");
    for &moves in MOVE_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            let (mut router, origin) = drag_router();
            b.iter(|| {
                router.on_gesture_start(Point::new(100.0, 100.0), &origin);
                for step in 0..moves {
                    let y = 100.0 - step as f32 * 3.0;
                    black_box(router.on_gesture_move(Point::new(101.0, y), || {}));
                }
                router.on_gesture_end();
            });
        });
    }
    group.finish();
}

fn bench_gesture_start(c: &mut Criterion) {
    c.bench_function("gesture_start_region_lookup", |b| {
        let (mut router, origin) = drag_router();
        b.iter(|| {
            black_box(router.on_gesture_start(Point::ZERO, black_box(&origin)));
            router.on_gesture_cancel();
        });
    });
}

criterion_group!(benches, bench_vertical_drag, bench_gesture_start);
criterion_main!(benches);
