//! Per-frame landmark data produced by the face-mesh detector.

use crate::geometry::Point;
use crate::Result;
use opencv::core::Mat;

/// Pixel dimensions of a captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    /// Frame width in pixels
    pub width: i32,
    /// Frame height in pixels
    pub height: i32,
}

impl FrameSize {
    /// Create a new frame size
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One face's landmarks for a single frame.
///
/// Points are normalized to `[0,1]×[0,1]` and indexed by the face-mesh
/// scheme (see [`crate::constants`]). A set is owned per frame and never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    /// Wrap a vector of normalized points
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of landmarks in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the set holds no landmarks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Normalized point at `index`, or `None` when out of range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Point at `index` denormalized to pixel coordinates
    #[must_use]
    pub fn pixel(&self, index: usize, frame: FrameSize) -> Option<Point> {
        self.get(index).map(|p| {
            Point::new(p.x * f64::from(frame.width), p.y * f64::from(frame.height))
        })
    }

    /// Denormalize a whole index subset.
    ///
    /// Returns `None` when any index is missing so callers can skip the
    /// frame rather than work with a partial subset.
    #[must_use]
    pub fn pixels(&self, indices: &[usize], frame: FrameSize) -> Option<Vec<Point>> {
        indices.iter().map(|&i| self.pixel(i, frame)).collect()
    }
}

/// Source of face landmarks for captured frames.
///
/// Implementations report at most one face per frame; `Ok(None)` means no
/// face was found and the caller keeps all gesture state unchanged.
pub trait LandmarkSource {
    /// Detect the first face's landmarks in a frame
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying detector fails.
    fn detect(&self, frame: &Mat) -> Result<Option<LandmarkSet>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_range() {
        let set = LandmarkSet::new(vec![Point::new(0.5, 0.5)]);
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
    }

    #[test]
    fn test_pixel_denormalization() {
        let set = LandmarkSet::new(vec![Point::new(0.25, 0.5)]);
        let p = set.pixel(0, FrameSize::new(640, 480)).unwrap();
        assert_eq!(p, Point::new(160.0, 240.0));
    }

    #[test]
    fn test_pixels_partial_subset_rejected() {
        let set = LandmarkSet::new(vec![Point::new(0.1, 0.1), Point::new(0.2, 0.2)]);
        let frame = FrameSize::new(100, 100);
        assert!(set.pixels(&[0, 1], frame).is_some());
        assert!(set.pixels(&[0, 5], frame).is_none());
    }
}
