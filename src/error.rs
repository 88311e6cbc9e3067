//! Error types for the face mouse library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// `ONNX` Runtime inference failed
    #[error("ONNX Runtime error: {0}")]
    OnnxRuntime(#[from] ort::OrtError),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Camera could not be opened
    #[error("Camera error: {0}")]
    Camera(String),

    /// Face-mesh model loading or inference error
    #[error("Landmark model error: {0}")]
    LandmarkModel(String),

    /// Mouse input injection (X11) failed
    #[error("Input injection error: {0}")]
    InputInjection(String),

    /// Speech recognition service failure
    #[error("Speech service error: {0}")]
    SpeechService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
