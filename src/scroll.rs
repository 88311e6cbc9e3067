//! Neutral-tilt calibration and the tilt-to-scroll controller.

use crate::constants::{CALIBRATION_FRAMES, SCROLL_DIVISOR};
use log::{debug, info};

/// Calibration lifecycle for the neutral head angle.
///
/// Moves Uncalibrated → Accumulating → Calibrated exactly once per tracking
/// session and is frozen thereafter until the session restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calibration {
    /// No tilt samples seen yet
    Uncalibrated,
    /// Collecting tilt samples toward the frame budget
    Accumulating {
        /// Sum of raw tilt angles so far
        sum: f64,
        /// Number of frames accumulated
        frames: u32,
    },
    /// Neutral angle locked in for the rest of the session
    Calibrated {
        /// Average tilt over the calibration window, in degrees
        neutral_angle: f64,
    },
}

/// Converts angular deviation from the calibrated neutral into scroll steps.
///
/// The controller only sees frames while scroll mode is enabled; the caller
/// gates updates on the mode toggle, so disabling the mode leaves the
/// calibration untouched and re-enabling resumes with the stored neutral.
pub struct ScrollController {
    calibration: Calibration,
    frame_budget: u32,
    tilt_threshold: f64,
    scroll_speed: f64,
}

impl ScrollController {
    /// Create a controller with the default calibration frame budget
    #[must_use]
    pub fn new(tilt_threshold: f64, scroll_speed: f64) -> Self {
        Self::with_frame_budget(tilt_threshold, scroll_speed, CALIBRATION_FRAMES)
    }

    /// Create a controller with an explicit calibration frame budget
    #[must_use]
    pub fn with_frame_budget(tilt_threshold: f64, scroll_speed: f64, frame_budget: u32) -> Self {
        Self {
            calibration: Calibration::Uncalibrated,
            frame_budget: frame_budget.max(1),
            tilt_threshold,
            scroll_speed,
        }
    }

    /// Current calibration state
    #[must_use]
    pub const fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Feed one frame's raw tilt angle; returns a scroll amount when the
    /// deviation from neutral exceeds the threshold.
    ///
    /// Calibration frames never scroll. Once calibrated, the magnitude is
    /// `(relative − threshold) · speed / 10` truncated toward zero, with the
    /// signed relative tilt used as-is. Near the negative threshold boundary
    /// this makes the magnitude jump rather than ramp from zero; the
    /// asymmetry is intentional, kept for behavioral compatibility.
    pub fn update(&mut self, tilt_angle: f64) -> Option<i32> {
        let neutral_angle = match self.calibration {
            Calibration::Calibrated { neutral_angle } => neutral_angle,
            Calibration::Uncalibrated => {
                self.accumulate(tilt_angle, 0.0, 0);
                return None;
            }
            Calibration::Accumulating { sum, frames } => {
                self.accumulate(tilt_angle, sum, frames);
                return None;
            }
        };

        let relative = tilt_angle - neutral_angle;
        if relative.abs() <= self.tilt_threshold {
            return None;
        }

        let amount = (relative - self.tilt_threshold) * self.scroll_speed / SCROLL_DIVISOR;
        if !amount.is_finite() {
            return None;
        }
        debug!("Relative tilt {relative:.2}° -> scroll {amount:.1}");
        #[allow(clippy::cast_possible_truncation)] // finite value, truncation intended
        Some(amount.trunc() as i32)
    }

    fn accumulate(&mut self, tilt_angle: f64, sum: f64, frames: u32) {
        let sum = sum + tilt_angle;
        let frames = frames + 1;
        if frames >= self.frame_budget {
            let neutral_angle = sum / f64::from(self.frame_budget);
            info!("Tilt calibration complete, neutral angle {neutral_angle:.2}°");
            self.calibration = Calibration::Calibrated { neutral_angle };
        } else {
            self.calibration = Calibration::Accumulating { sum, frames };
        }
    }
}
