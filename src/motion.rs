//! Pointer motion integration from frame-to-frame landmark drift.

use crate::geometry::Point;

/// Turns displacement of the stable landmark subset into relative pointer
/// motion.
///
/// The mean per-axis displacement between consecutive frames is scaled by
/// the square of the sensitivity; the horizontal component is negated to
/// match the mirrored camera view. The quadratic gain is the observable
/// behavior this controller has always had and is deliberately kept.
pub struct MotionIntegrator {
    sensitivity: f64,
    previous: Option<Vec<Point>>,
}

impl MotionIntegrator {
    /// Create an integrator with the given sensitivity
    #[must_use]
    pub fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            previous: None,
        }
    }

    /// Feed this frame's pixel positions of the tracked subset and get the
    /// relative pointer motion `(dx, dy)`.
    ///
    /// The first frame of a session only records state and returns `(0, 0)`,
    /// as does any frame where the arithmetic degenerates (mismatched or
    /// empty subsets, non-finite results).
    pub fn update(&mut self, current: Vec<Point>) -> (f64, f64) {
        let delta = match &self.previous {
            Some(previous) if previous.len() == current.len() && !current.is_empty() => {
                #[allow(clippy::cast_precision_loss)] // subset sizes are tiny
                let count = current.len() as f64;
                let mut sum_x = 0.0;
                let mut sum_y = 0.0;
                for (prev, curr) in previous.iter().zip(&current) {
                    sum_x += curr.x - prev.x;
                    sum_y += curr.y - prev.y;
                }
                let gain = self.sensitivity * self.sensitivity;
                let dx = -(sum_x / count * gain);
                let dy = sum_y / count * gain;
                if dx.is_finite() && dy.is_finite() {
                    (dx, dy)
                } else {
                    (0.0, 0.0)
                }
            }
            _ => (0.0, 0.0),
        };
        self.previous = Some(current);
        delta
    }

    /// Drop the remembered positions, as at session start
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
