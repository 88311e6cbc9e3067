//! Shared helpers for integration tests: synthetic faces and a recording
//! input sink.

use face_mouse::constants::{
    LEFT_EYE_CONTOUR, MESH_LANDMARK_COUNT, MOUTH_BOTTOM, MOUTH_TOP, NOSE_TIP, RIGHT_EYE_CONTOUR,
    TILT_LEFT_EYE, TILT_RIGHT_EYE,
};
use face_mouse::geometry::Point;
use face_mouse::input_control::{InputSink, MouseButton};
use face_mouse::landmarks::{FrameSize, LandmarkSet};
use face_mouse::Result;

/// Square test frame so normalized angles match pixel angles
pub const FRAME: FrameSize = FrameSize::new(1000, 1000);

/// Builder for synthetic landmark sets with controllable gesture geometry.
///
/// The default face looks straight ahead with both eyes open and the mouth
/// closed.
pub struct FaceBuilder {
    points: Vec<Point>,
}

impl FaceBuilder {
    pub fn new() -> Self {
        let mut points = vec![Point::new(0.5, 0.5); MESH_LANDMARK_COUNT];
        points[TILT_LEFT_EYE] = Point::new(0.4, 0.4);
        points[TILT_RIGHT_EYE] = Point::new(0.6, 0.4);
        let mut builder = Self { points };
        builder.set_eye(&LEFT_EYE_CONTOUR, 0.35, false);
        builder.set_eye(&RIGHT_EYE_CONTOUR, 0.59, false);
        builder.set_mouth_gap(0.0);
        builder.set_tilt(0.0);
        builder
    }

    fn set_eye(&mut self, contour: &[usize; 6], left_x: f64, closed: bool) {
        // Open: EAR ≈ 0.67; closed: EAR ≈ 0.017
        let half = if closed { 0.0005 } else { 0.02 };
        let xs = [0.0, 0.02, 0.04, 0.06, 0.04, 0.02];
        let ys = [0.0, -half, -half, 0.0, half, half];
        for (i, &idx) in contour.iter().enumerate() {
            self.points[idx] = Point::new(left_x + xs[i], 0.45 + ys[i]);
        }
    }

    fn set_mouth_gap(&mut self, gap: f64) {
        self.points[MOUTH_TOP] = Point::new(0.5, 0.6);
        self.points[MOUTH_BOTTOM] = Point::new(0.5, 0.6 + gap);
    }

    fn set_tilt(&mut self, degrees: f64) {
        // Place the nose so that the tilt estimator reads `degrees`
        let radius = 0.15;
        let rad = (degrees + 90.0).to_radians();
        self.points[NOSE_TIP] = Point::new(0.5 + radius * rad.cos(), 0.4 + radius * rad.sin());
    }

    #[must_use]
    pub fn left_eye_closed(mut self, closed: bool) -> Self {
        self.set_eye(&LEFT_EYE_CONTOUR, 0.35, closed);
        self
    }

    #[must_use]
    pub fn right_eye_closed(mut self, closed: bool) -> Self {
        self.set_eye(&RIGHT_EYE_CONTOUR, 0.59, closed);
        self
    }

    /// Normalized inner-lip gap; 0.04 on the test frame is 40 px
    #[must_use]
    pub fn mouth_gap(mut self, gap: f64) -> Self {
        self.set_mouth_gap(gap);
        self
    }

    /// Head-tilt angle in degrees as seen by the tilt estimator
    #[must_use]
    pub fn tilt(mut self, degrees: f64) -> Self {
        self.set_tilt(degrees);
        self
    }

    /// Translate the whole face by a normalized offset
    #[must_use]
    pub fn shifted(mut self, dx: f64, dy: f64) -> Self {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
        self
    }

    #[must_use]
    pub fn build(self) -> LandmarkSet {
        LandmarkSet::new(self.points)
    }
}

impl Default for FaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Input sink that records every command it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub clicks: Vec<MouseButton>,
    pub double_clicks: u32,
    pub moves: Vec<(f64, f64)>,
    pub scrolls: Vec<i32>,
}

impl InputSink for RecordingSink {
    fn click(&mut self, button: MouseButton) -> Result<()> {
        self.clicks.push(button);
        Ok(())
    }

    fn double_click(&mut self) -> Result<()> {
        self.double_clicks += 1;
        Ok(())
    }

    fn move_relative(&mut self, dx: f64, dy: f64) -> Result<()> {
        self.moves.push((dx, dy));
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        self.scrolls.push(amount);
        Ok(())
    }
}
