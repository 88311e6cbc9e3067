//! Geometry primitives for landmark measurements.

/// 2D point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Midpoint of two points
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Eye aspect ratio from six ordered eye-contour points.
///
/// `EAR = (‖p1-p5‖ + ‖p2-p4‖) / (2·‖p0-p3‖)` with the `[p0..p5]` ordering:
/// outer corner, two upper-lid points, inner corner, two lower-lid points.
///
/// Returns `None` when the corner span `‖p0-p3‖` is zero; that only happens
/// on degenerate detections and callers treat it as "eye not closed".
#[must_use]
pub fn eye_aspect_ratio(eye: &[Point; 6]) -> Option<f64> {
    let a = distance(eye[1], eye[5]);
    let b = distance(eye[2], eye[4]);
    let c = distance(eye[0], eye[3]);
    if c == 0.0 {
        return None;
    }
    Some((a + b) / (2.0 * c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn open_eye() -> [Point; 6] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, -1.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
        ]
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point::new(0.0, 0.0), Point::new(4.0, 2.0));
        assert_eq!(m, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_eye_aspect_ratio_open_eye() {
        // Two vertical spans of 2.0 over a corner span of 3.0
        let ear = eye_aspect_ratio(&open_eye()).unwrap();
        assert!((ear - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_eye_aspect_ratio_closed_eye() {
        // Upper and lower lid points coincide, EAR collapses to zero
        let eye = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        assert_eq!(eye_aspect_ratio(&eye), Some(0.0));
    }

    #[test]
    fn test_eye_aspect_ratio_degenerate() {
        // Corners coincide: division by zero must be reported, not computed
        let p = Point::new(1.0, 1.0);
        let eye = [p, p, p, p, p, p];
        assert_eq!(eye_aspect_ratio(&eye), None);
    }

    proptest! {
        #[test]
        fn prop_ear_non_negative(
            xs in prop::array::uniform6(-1000.0f64..1000.0),
            ys in prop::array::uniform6(-1000.0f64..1000.0),
        ) {
            let mut eye = [Point::default(); 6];
            for i in 0..6 {
                eye[i] = Point::new(xs[i], ys[i]);
            }
            if let Some(ear) = eye_aspect_ratio(&eye) {
                prop_assert!(ear >= 0.0);
            }
        }

        #[test]
        fn prop_ear_scale_invariant(scale in 0.001f64..1000.0) {
            let base = open_eye();
            let mut scaled = base;
            for p in &mut scaled {
                p.x *= scale;
                p.y *= scale;
            }
            let original = eye_aspect_ratio(&base).unwrap();
            let rescaled = eye_aspect_ratio(&scaled).unwrap();
            prop_assert!((original - rescaled).abs() < 1e-9);
        }
    }
}
