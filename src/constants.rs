//! Constants used throughout the application

/// Number of points produced by the face-mesh landmark model
pub const MESH_LANDMARK_COUNT: usize = 468;

/// Left eye contour in `[p0..p5]` order: outer corner, two upper-lid
/// points, inner corner, two lower-lid points
pub const LEFT_EYE_CONTOUR: [usize; 6] = [362, 385, 387, 263, 373, 380];

/// Right eye contour, same ordering convention as the left
pub const RIGHT_EYE_CONTOUR: [usize; 6] = [33, 160, 158, 133, 153, 144];

/// Upper inner-lip point
pub const MOUTH_TOP: usize = 13;

/// Lower inner-lip point
pub const MOUTH_BOTTOM: usize = 14;

/// Nose tip, used for head-tilt estimation
pub const NOSE_TIP: usize = 4;

/// Upper-lid reference points used for the tilt eye line
pub const TILT_LEFT_EYE: usize = 159;
pub const TILT_RIGHT_EYE: usize = 386;

/// Landmark subset that stays rigid relative to the skull; pointer motion
/// is derived from the frame-to-frame drift of these points
pub const STABLE_LANDMARKS: [usize; 22] = [
    1, 4, 5, 6, 10, 152, 101, 330, 362, 385, 387, 263, 373, 380, 33, 160, 158, 133, 153, 144, 13,
    14,
];

/// Frames accumulated before the neutral tilt angle is locked in
pub const CALIBRATION_FRAMES: u32 = 30;

/// Divisor applied to the scroll magnitude formula
pub const SCROLL_DIVISOR: f64 = 10.0;

/// Default tracking parameters
pub const DEFAULT_SENSITIVITY: f64 = 3.0;
pub const DEFAULT_BLINK_THRESHOLD: f64 = 0.2;
pub const DEFAULT_BLINK_DURATION: f64 = 0.3;
pub const DEFAULT_MOUTH_OPEN_THRESHOLD: f64 = 30.0;
pub const DEFAULT_MOUTH_OPEN_DURATION: f64 = 0.5;
pub const DEFAULT_TILT_THRESHOLD: f64 = 10.0;
pub const DEFAULT_SCROLL_SPEED: f64 = 20.0;
