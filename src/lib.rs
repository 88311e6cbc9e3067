//! Hands-free mouse control from facial gestures.
//!
//! This library tracks a user's face through a camera feed and translates
//! facial gestures into mouse input:
//! - eye blinks held past a threshold become left/right clicks
//! - a held mouth opening becomes a double click
//! - head tilt away from a calibrated neutral angle scrolls
//! - frame-to-frame head drift moves the pointer
//!
//! A separate speech session converts spoken audio into typed text. The
//! face-mesh detector runs on ONNX Runtime with `OpenCV` capture; input is
//! injected over X11.
//!
//! # Examples
//!
//! ## Driving the tracker with landmark frames
//!
//! ```no_run
//! use face_mouse::config::TrackingConfig;
//! use face_mouse::landmarks::{FrameSize, LandmarkSet};
//! use face_mouse::tracker::FaceTracker;
//!
//! # fn landmarks_for_frame() -> LandmarkSet { unimplemented!() }
//! let config = TrackingConfig::default();
//! let mut tracker = FaceTracker::new(&config);
//! tracker.set_scroll_mode(true);
//!
//! let frame = FrameSize::new(640, 480);
//! for i in 0..100u32 {
//!     let set = landmarks_for_frame();
//!     let now_s = f64::from(i) / 30.0;
//!     for action in tracker.process(&set, frame, now_s) {
//!         println!("{action:?}");
//!     }
//! }
//! ```
//!
//! ## Running a full session
//!
//! ```no_run
//! use face_mouse::app::{SessionOptions, TrackingSession};
//! use face_mouse::config::Config;
//! use face_mouse::input_control::X11InputController;
//! use face_mouse::mesh_detection::MeshDetector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! config.validate()?;
//!
//! let detector = MeshDetector::new("assets/face_mesh.onnx")?;
//! let sink = X11InputController::new()?;
//!
//! let mut session = TrackingSession::new(
//!     &config.tracking,
//!     SessionOptions::default(),
//!     Box::new(detector),
//!     Box::new(sink),
//! )?;
//!
//! // The run flag can be handed to a UI thread for a stop button
//! let _stop = session.run_flag();
//! session.run()?;
//! # Ok(())
//! # }
//! ```

/// Geometry primitives (distance, eye aspect ratio)
pub mod geometry;

/// Per-frame landmark data and the landmark source trait
pub mod landmarks;

/// Gesture classifiers: blink, mouth-open, head tilt
pub mod gesture;

/// Per-gesture debouncing with minimum-hold gating
pub mod debounce;

/// Neutral-tilt calibration and scroll control
pub mod scroll;

/// Pointer motion from landmark drift
pub mod motion;

/// The frame-processing core
pub mod tracker;

/// Face-mesh landmark detection via `ONNX` Runtime
pub mod mesh_detection;

/// Mouse input injection for X11
pub mod input_control;

/// Speech-to-text session loop
pub mod speech;

/// The camera-driven tracking session
pub mod app;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Error types and result handling
pub mod error;

/// Safe numeric conversion helpers
pub mod utils;

pub use error::{Error, Result};
