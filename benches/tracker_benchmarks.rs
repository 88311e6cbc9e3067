//! Criterion benchmarks for the per-frame gesture pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use face_mouse::config::TrackingConfig;
use face_mouse::constants::{MESH_LANDMARK_COUNT, NOSE_TIP, TILT_LEFT_EYE, TILT_RIGHT_EYE};
use face_mouse::debounce::{GestureDebouncer, GestureKind};
use face_mouse::geometry::{self, Point};
use face_mouse::landmarks::{FrameSize, LandmarkSet};
use face_mouse::scroll::ScrollController;
use face_mouse::tracker::FaceTracker;

const FRAME: FrameSize = FrameSize::new(1280, 720);

fn synthetic_face() -> LandmarkSet {
    let mut points = vec![Point::new(0.5, 0.5); MESH_LANDMARK_COUNT];
    points[TILT_LEFT_EYE] = Point::new(0.4, 0.4);
    points[TILT_RIGHT_EYE] = Point::new(0.6, 0.4);
    points[NOSE_TIP] = Point::new(0.5, 0.6);
    LandmarkSet::new(points)
}

fn benchmark_frame_processing(c: &mut Criterion) {
    let set = synthetic_face();
    let mut tracker = FaceTracker::new(&TrackingConfig::default());
    tracker.set_scroll_mode(true);

    let mut now_s = 0.0;
    c.bench_function("tracker_process_frame", |b| {
        b.iter(|| {
            now_s += 0.033;
            black_box(tracker.process(black_box(&set), FRAME, now_s))
        });
    });
}

fn benchmark_eye_aspect_ratio(c: &mut Criterion) {
    let eye = [
        Point::new(400.0, 450.0),
        Point::new(420.0, 430.0),
        Point::new(440.0, 430.0),
        Point::new(460.0, 450.0),
        Point::new(440.0, 470.0),
        Point::new(420.0, 470.0),
    ];
    c.bench_function("eye_aspect_ratio", |b| {
        b.iter(|| black_box(geometry::eye_aspect_ratio(black_box(&eye))));
    });
}

fn benchmark_debouncer_update(c: &mut Criterion) {
    let mut debouncer = GestureDebouncer::new(0.3, 0.5);
    let mut now_s: f64 = 0.0;
    c.bench_function("debouncer_update", |b| {
        b.iter(|| {
            now_s += 0.033;
            black_box(debouncer.update(GestureKind::LeftEye, now_s.rem_euclid(1.0) < 0.5, now_s))
        });
    });
}

fn benchmark_calibrated_scroll(c: &mut Criterion) {
    let mut scroll = ScrollController::new(10.0, 20.0);
    for _ in 0..30 {
        scroll.update(0.0);
    }
    c.bench_function("scroll_update", |b| {
        b.iter(|| black_box(scroll.update(black_box(12.5))));
    });
}

criterion_group!(
    benches,
    benchmark_frame_processing,
    benchmark_eye_aspect_ratio,
    benchmark_debouncer_update,
    benchmark_calibrated_scroll
);
criterion_main!(benches);
