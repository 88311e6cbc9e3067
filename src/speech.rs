//! Speech-to-text session loop.
//!
//! The microphone capture and the transcription service stay behind the
//! [`SpeechSource`] trait; this module owns the listening loop, its
//! cooperative stop flag and the one-way event channel to the UI layer.

use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

/// Result of one blocking listen call against the recognition service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// A phrase was recognized
    Text(String),
    /// Nothing intelligible was heard; not an error
    NoSpeech,
    /// The service failed (network, auth); the loop keeps running
    ServiceError(String),
}

/// Blocking source of recognized utterances.
///
/// Implementations wrap a microphone plus a speech-recognition backend;
/// `listen` blocks until one utterance has been captured and classified.
pub trait SpeechSource: Send {
    /// Capture and recognize the next utterance
    fn listen(&mut self) -> Utterance;
}

/// Events delivered to the UI layer, at most once each
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Recognized text ready for typing
    Recognized(String),
    /// A user-visible service error
    Error(String),
    /// The listening loop has exited
    Finished,
}

/// A running speech-capture loop on its own thread.
///
/// Cancellation is cooperative: [`stop`](Self::stop) flips the flag and the
/// loop exits at the next iteration boundary. An in-flight blocking listen
/// is not interrupted early.
pub struct SpeechSession {
    listening: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SpeechSession {
    /// Start listening on a background thread, delivering events on
    /// `events`.
    pub fn spawn<S>(mut source: S, events: mpsc::Sender<SpeechEvent>) -> Self
    where
        S: SpeechSource + 'static,
    {
        let listening = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&listening);

        let handle = thread::spawn(move || {
            info!("Speech session started");
            while flag.load(Ordering::Relaxed) {
                match source.listen() {
                    Utterance::Text(text) => {
                        debug!("Recognized: {text}");
                        if events.send(SpeechEvent::Recognized(text)).is_err() {
                            break;
                        }
                    }
                    Utterance::NoSpeech => {
                        debug!("No speech detected, continuing");
                    }
                    Utterance::ServiceError(message) => {
                        warn!("Speech service error: {message}");
                        if events.send(SpeechEvent::Error(message)).is_err() {
                            break;
                        }
                    }
                }
            }
            let _ = events.send(SpeechEvent::Finished);
            info!("Speech session finished");
        });

        Self {
            listening,
            handle: Some(handle),
        }
    }

    /// Request the loop to stop at its next iteration boundary
    pub fn stop(&self) {
        self.listening.store(false, Ordering::Relaxed);
    }

    /// Whether the loop has been asked to keep running
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Relaxed)
    }

    /// Stop and wait for the loop thread to exit.
    ///
    /// Blocks until any in-flight listen call returns.
    pub fn join(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SpeechSession {
    fn drop(&mut self) {
        // Only signal; joining here could hang on a blocking listen
        self.stop();
    }
}
