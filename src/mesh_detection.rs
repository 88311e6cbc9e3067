//! Face-mesh landmark detection using `ONNX` Runtime.
//!
//! Runs a dense face-mesh model over the full camera frame and reports the
//! first face's landmarks in normalized coordinates, or nothing when the
//! model's face-presence score falls below the confidence threshold.

use crate::{
    constants::MESH_LANDMARK_COUNT,
    geometry::Point,
    landmarks::{LandmarkSet, LandmarkSource},
    utils::usize_to_i32,
    Result,
};
use ndarray::{Array1, Array4, CowArray};
use opencv::core::{Mat, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Mesh model input size (square)
const MESH_INPUT_SIZE: i32 = 192;

/// Default face-presence score threshold
const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Face-mesh landmark detector
pub struct MeshDetector {
    session: Session,
    input_size: i32,
    min_confidence: f32,
}

impl MeshDetector {
    /// Create a new mesh detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The ONNX runtime environment cannot be created
    pub fn new<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        log::info!(
            "Initializing MeshDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("mesh_detector")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        Ok(Self {
            session,
            input_size: MESH_INPUT_SIZE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        })
    }

    /// Override the face-presence confidence threshold
    #[must_use]
    pub const fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Resize, convert to RGB and scale pixels to `[0, 1]`
    #[allow(clippy::cast_sign_loss)] // OpenCV dimensions are positive
    fn preprocess(&self, image: &Mat) -> Result<Array4<f32>> {
        let size = self.input_size as usize;
        let channels = 3;

        let mut resized = Mat::default();
        imgproc::resize(
            image,
            &mut resized,
            Size::new(self.input_size, self.input_size),
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; size * size * channels];
        for row in 0..size {
            for col in 0..size {
                let pixel =
                    float_image.at_2d::<opencv::core::Vec3f>(usize_to_i32(row)?, usize_to_i32(col)?)?;
                for ch in 0..channels {
                    data[(row * size + col) * channels + ch] = pixel[ch];
                }
            }
        }

        // The mesh model takes NHWC input
        Array4::from_shape_vec((1, size, size, channels), data)
            .map_err(|e| crate::error::Error::LandmarkModel(format!("Failed to create array: {e}")))
    }

    /// Run the model; returns the raw landmark tensor and the face score
    fn forward(&self, inputs: Array4<f32>) -> Result<(Array1<f32>, f32)> {
        let cow_array = CowArray::from(inputs.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let marks_output = outputs
            .next()
            .ok_or_else(|| crate::error::Error::LandmarkModel("No landmark output".to_string()))?;
        let marks_tensor = marks_output.try_extract::<f32>()?;
        let marks_view = marks_tensor.view();
        let marks = marks_view
            .as_slice()
            .ok_or_else(|| crate::error::Error::LandmarkModel("Failed to get landmark data".to_string()))?
            .to_vec();

        let score = match outputs.next() {
            Some(score_output) => {
                let score_tensor = score_output.try_extract::<f32>()?;
                let score_view = score_tensor.view();
                score_view.iter().copied().next().unwrap_or(0.0)
            }
            // Single-output models carry no presence score; accept the face
            None => 1.0,
        };

        Ok((Array1::from(marks), score))
    }

    /// Convert the raw tensor into normalized landmark points.
    ///
    /// The model emits (x, y, z) triples in input-pixel units; z is dropped
    /// and x/y are normalized by the input size.
    fn postprocess(&self, marks: &Array1<f32>) -> LandmarkSet {
        let stride = marks.len() / MESH_LANDMARK_COUNT;
        let scale = f64::from(self.input_size);

        let mut points = Vec::with_capacity(MESH_LANDMARK_COUNT);
        for i in 0..MESH_LANDMARK_COUNT {
            let idx = i * stride;
            if idx + 1 < marks.len() {
                points.push(Point::new(
                    f64::from(marks[idx]) / scale,
                    f64::from(marks[idx + 1]) / scale,
                ));
            }
        }

        LandmarkSet::new(points)
    }
}

impl LandmarkSource for MeshDetector {
    fn detect(&self, frame: &Mat) -> Result<Option<LandmarkSet>> {
        let inputs = self.preprocess(frame)?;
        let (marks, score) = self.forward(inputs)?;

        if score < self.min_confidence {
            log::debug!("No face: presence score {score:.2}");
            return Ok(None);
        }

        Ok(Some(self.postprocess(&marks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_landmark_count() {
        assert_eq!(MESH_LANDMARK_COUNT, 468);
    }

    #[test]
    fn test_default_input_size() {
        assert_eq!(MESH_INPUT_SIZE, 192);
    }

    #[test]
    fn test_mesh_tensor_shape() {
        // The model output carries (x, y, z) per landmark
        let total_values = MESH_LANDMARK_COUNT * 3;
        assert_eq!(total_values, 1404);
    }
}
