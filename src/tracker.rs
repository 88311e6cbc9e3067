//! The frame-processing core: landmarks in, input actions out.

use crate::{
    config::TrackingConfig,
    constants::{LEFT_EYE_CONTOUR, RIGHT_EYE_CONTOUR, STABLE_LANDMARKS},
    debounce::{GestureDebouncer, GestureKind},
    gesture,
    input_control::MouseButton,
    landmarks::{FrameSize, LandmarkSet},
    motion::MotionIntegrator,
    scroll::{Calibration, ScrollController},
};
use log::info;

/// Discrete input command produced by the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Click a mouse button
    Click(MouseButton),
    /// Double-click the primary button
    DoubleClick,
    /// Scroll vertically by the given number of steps
    Scroll(i32),
    /// Move the pointer relative to its current position
    MoveRelative(f64, f64),
}

/// Gesture-to-input state machine for one tracking session.
///
/// Consumes one landmark set per frame and emits zero or more [`Action`]s.
/// All tunables come from the [`TrackingConfig`] snapshot taken at
/// construction; the only mid-session input besides frames is the scroll
/// mode toggle, which gates the tilt controller without touching its
/// calibration.
pub struct FaceTracker {
    blink_threshold: f64,
    mouth_open_threshold: f64,
    debouncer: GestureDebouncer,
    scroll: ScrollController,
    motion: MotionIntegrator,
    scroll_mode: bool,
}

impl FaceTracker {
    /// Create a tracker from a validated configuration snapshot
    #[must_use]
    pub fn new(config: &TrackingConfig) -> Self {
        Self {
            blink_threshold: config.blink_threshold,
            mouth_open_threshold: config.mouth_open_threshold,
            debouncer: GestureDebouncer::new(config.blink_duration, config.mouth_open_duration),
            scroll: ScrollController::new(config.tilt_threshold, config.scroll_speed),
            motion: MotionIntegrator::new(config.sensitivity),
            scroll_mode: false,
        }
    }

    /// Enable or disable scroll mode.
    ///
    /// Disabling does not reset the tilt calibration; re-enabling resumes
    /// with the previously computed neutral angle.
    pub fn set_scroll_mode(&mut self, enabled: bool) {
        if enabled != self.scroll_mode {
            info!("Scroll mode {}", if enabled { "enabled" } else { "disabled" });
        }
        self.scroll_mode = enabled;
    }

    /// Whether scroll mode is currently enabled
    #[must_use]
    pub const fn scroll_mode(&self) -> bool {
        self.scroll_mode
    }

    /// Current tilt calibration state
    #[must_use]
    pub const fn calibration(&self) -> Calibration {
        self.scroll.calibration()
    }

    /// Process one frame's landmarks.
    ///
    /// `now_s` is the frame timestamp in seconds from the session start.
    /// Frames without a detected face must simply not be passed in; all
    /// state then carries over unchanged.
    pub fn process(&mut self, set: &LandmarkSet, frame: FrameSize, now_s: f64) -> Vec<Action> {
        let mut actions = Vec::new();

        let left_closed = gesture::eye_closed(set, &LEFT_EYE_CONTOUR, frame, self.blink_threshold);
        let right_closed =
            gesture::eye_closed(set, &RIGHT_EYE_CONTOUR, frame, self.blink_threshold);
        let mouth_open = gesture::mouth_open(set, frame, self.mouth_open_threshold);

        if self.debouncer.update(GestureKind::LeftEye, left_closed, now_s).is_some() {
            info!("Left click");
            actions.push(Action::Click(MouseButton::Left));
        }
        if self.debouncer.update(GestureKind::RightEye, right_closed, now_s).is_some() {
            info!("Right click");
            actions.push(Action::Click(MouseButton::Right));
        }
        if self.debouncer.update(GestureKind::Mouth, mouth_open, now_s).is_some() {
            info!("Double click");
            actions.push(Action::DoubleClick);
        }

        if self.scroll_mode {
            if let Some(tilt) = gesture::head_tilt_degrees(set, frame) {
                if let Some(amount) = self.scroll.update(tilt) {
                    info!("Scrolling: {amount}");
                    actions.push(Action::Scroll(amount));
                }
            }
        }

        if let Some(positions) = set.pixels(&STABLE_LANDMARKS, frame) {
            let (dx, dy) = self.motion.update(positions);
            if dx != 0.0 || dy != 0.0 {
                actions.push(Action::MoveRelative(dx, dy));
            }
        }

        actions
    }
}
