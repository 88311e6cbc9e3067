//! Gesture classifiers: per-frame geometric tests on the landmark set.
//!
//! Each classifier maps a small landmark subset plus the frame dimensions to
//! a boolean or scalar. No smoothing is applied; every frame's value is
//! independent and the debouncing layer turns the raw stream into events.

use crate::constants::{MOUTH_BOTTOM, MOUTH_TOP, NOSE_TIP, TILT_LEFT_EYE, TILT_RIGHT_EYE};
use crate::geometry::{self, Point};
use crate::landmarks::{FrameSize, LandmarkSet};

/// Whether the eye described by `contour` is closed this frame.
///
/// Closed means the eye aspect ratio drops below `threshold`. Missing
/// landmarks or a degenerate contour (zero corner span) classify as open.
#[must_use]
pub fn eye_closed(
    set: &LandmarkSet,
    contour: &[usize; 6],
    frame: FrameSize,
    threshold: f64,
) -> bool {
    let Some(points) = set.pixels(contour, frame) else {
        return false;
    };
    let eye: [Point; 6] = match points.try_into() {
        Ok(eye) => eye,
        Err(_) => return false,
    };
    match geometry::eye_aspect_ratio(&eye) {
        Some(ear) => ear < threshold,
        None => false,
    }
}

/// Whether the mouth is open this frame.
///
/// Open means the vertical pixel gap between the inner-lip points exceeds
/// `threshold_px`. The threshold is in pixels, so the classification depends
/// on the camera resolution; a known limitation of the parameterization.
#[must_use]
pub fn mouth_open(set: &LandmarkSet, frame: FrameSize, threshold_px: f64) -> bool {
    match (set.pixel(MOUTH_TOP, frame), set.pixel(MOUTH_BOTTOM, frame)) {
        (Some(top), Some(bottom)) => bottom.y - top.y > threshold_px,
        _ => false,
    }
}

/// Signed head-tilt angle in degrees, 0 ≈ upright.
///
/// The angle of the nose tip relative to the midpoint of the two upper-lid
/// reference points, shifted so that an upright head reads near zero.
/// Returns `None` when any of the three landmarks is missing.
#[must_use]
pub fn head_tilt_degrees(set: &LandmarkSet, frame: FrameSize) -> Option<f64> {
    let nose = set.pixel(NOSE_TIP, frame)?;
    let left = set.pixel(TILT_LEFT_EYE, frame)?;
    let right = set.pixel(TILT_RIGHT_EYE, frame)?;
    let eye_center = geometry::midpoint(left, right);
    Some((nose.y - eye_center.y).atan2(nose.x - eye_center.x).to_degrees() - 90.0)
}
