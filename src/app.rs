//! The camera-driven tracking session.

use crate::{
    config::TrackingConfig,
    constants::STABLE_LANDMARKS,
    error::Error,
    input_control::InputSink,
    landmarks::{FrameSize, LandmarkSource},
    tracker::{Action, FaceTracker},
    Result,
};
use log::{info, warn};
use opencv::{
    core::{Mat, Point as CvPoint, Scalar},
    highgui::{self, WINDOW_NORMAL},
    imgproc::{self, LINE_8},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Preview window title
const PREVIEW_WINDOW: &str = "Face Mouse";

/// Consecutive failed reads after which the stream is considered ended
const MAX_READ_FAILURES: u32 = 100;

/// Session-level options, separate from the gesture tunables
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Camera index to capture from
    pub camera_index: i32,
    /// Show the mirrored camera preview with landmark dots
    pub show_preview: bool,
    /// Start with scroll mode enabled
    pub scroll_mode: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            camera_index: 0,
            show_preview: true,
            scroll_mode: false,
        }
    }
}

/// One tracking session: camera in, injected input out.
///
/// The session runs a single sequential loop, blocking on each camera read.
/// Gesture state updates are atomic with respect to a frame; the externally
/// shared flags are only sampled once per iteration, so stopping and the
/// scroll toggle take effect at iteration boundaries.
pub struct TrackingSession {
    options: SessionOptions,
    capture: VideoCapture,
    source: Box<dyn LandmarkSource>,
    sink: Box<dyn InputSink>,
    tracker: FaceTracker,
    running: Arc<AtomicBool>,
    scroll_mode: Arc<AtomicBool>,
}

impl TrackingSession {
    /// Open the camera and assemble a session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Camera`] when the camera cannot be opened; this is
    /// the one condition that aborts instead of retrying.
    pub fn new(
        config: &TrackingConfig,
        options: SessionOptions,
        source: Box<dyn LandmarkSource>,
        sink: Box<dyn InputSink>,
    ) -> Result<Self> {
        info!("Opening camera {}", options.camera_index);
        let mut capture = VideoCapture::new(options.camera_index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(Error::Camera(format!(
                "Failed to open camera {}",
                options.camera_index
            )));
        }

        // Reduce buffer size for lower latency
        capture.set(CAP_PROP_BUFFERSIZE, 1.0)?;

        if options.show_preview {
            highgui::named_window(PREVIEW_WINDOW, WINDOW_NORMAL)?;
        }

        let mut tracker = FaceTracker::new(config);
        tracker.set_scroll_mode(options.scroll_mode);

        Ok(Self {
            scroll_mode: Arc::new(AtomicBool::new(options.scroll_mode)),
            options,
            capture,
            source,
            sink,
            tracker,
            running: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Shared keep-running flag; store `false` to stop the loop at the next
    /// iteration boundary
    #[must_use]
    pub fn run_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Shared scroll-mode toggle
    #[must_use]
    pub fn scroll_mode_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.scroll_mode)
    }

    /// Run the capture loop until stopped.
    ///
    /// # Errors
    ///
    /// Returns an error only on unrecoverable capture or GUI failures;
    /// per-frame detection problems and injection failures are logged and
    /// skipped.
    pub fn run(&mut self) -> Result<()> {
        info!("Entering tracking loop");
        let started = Instant::now();
        let mut frame = Mat::default();
        let mut read_failures = 0u32;

        while self.running.load(Ordering::Relaxed) {
            if !self.capture.read(&mut frame)? || frame.empty() {
                read_failures += 1;
                // A live camera hiccups occasionally; a video file that has
                // ended fails every read from here on
                if read_failures >= MAX_READ_FAILURES {
                    warn!("Video stream ended after {read_failures} failed reads");
                    break;
                }
                warn!("Failed to read frame, retrying...");
                continue;
            }
            read_failures = 0;

            let size = FrameSize::new(frame.cols(), frame.rows());
            let now_s = started.elapsed().as_secs_f64();
            self.tracker
                .set_scroll_mode(self.scroll_mode.load(Ordering::Relaxed));

            // No face: skip gesture evaluation, retain all state
            let landmarks = match self.source.detect(&frame) {
                Ok(Some(set)) => Some(set),
                Ok(None) => None,
                Err(e) => {
                    warn!("Landmark detection failed: {e}");
                    None
                }
            };

            if let Some(set) = &landmarks {
                for action in self.tracker.process(set, size, now_s) {
                    self.dispatch(action);
                }

                if self.options.show_preview {
                    if let Some(points) = set.pixels(&STABLE_LANDMARKS, size) {
                        for p in points {
                            #[allow(clippy::cast_possible_truncation)] // pixel coordinates
                            imgproc::circle(
                                &mut frame,
                                CvPoint::new(p.x as i32, p.y as i32),
                                2,
                                Scalar::new(0.0, 255.0, 0.0, 0.0),
                                -1,
                                LINE_8,
                                0,
                            )?;
                        }
                    }
                }
            }

            if self.options.show_preview {
                let mut mirrored = Mat::default();
                opencv::core::flip(&frame, &mut mirrored, 1)?;
                highgui::imshow(PREVIEW_WINDOW, &mirrored)?;

                let key = highgui::wait_key(5)?;
                if key == 27 || key == i32::from(b'q') {
                    info!("Exit requested by user");
                    self.running.store(false, Ordering::Relaxed);
                }
            }
        }

        info!("Tracking session stopped");
        Ok(())
    }

    /// Forward one action to the input sink; failures are logged, never
    /// fatal to the loop
    fn dispatch(&mut self, action: Action) {
        let result = match action {
            Action::Click(button) => self.sink.click(button),
            Action::DoubleClick => self.sink.double_click(),
            Action::MoveRelative(dx, dy) => self.sink.move_relative(dx, dy),
            Action::Scroll(amount) => self.sink.scroll(amount),
        };
        if let Err(e) = result {
            warn!("Input injection failed: {e}");
        }
    }
}
