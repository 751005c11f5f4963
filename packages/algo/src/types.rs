//! Common Types and Constants
//!
//! Shared data structures used across the analysis engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==================== Constants ====================

/// Maximum number of corrective suggestions per analysis result.
pub const MAX_SUGGESTIONS: usize = 3;

/// Detection confidence above which a landmark counts as reliably visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

// Landmark vocabulary (MediaPipe-style joint names).
pub const LEFT_SHOULDER: &str = "left_shoulder";
pub const RIGHT_SHOULDER: &str = "right_shoulder";
pub const LEFT_ELBOW: &str = "left_elbow";
pub const RIGHT_ELBOW: &str = "right_elbow";
pub const LEFT_WRIST: &str = "left_wrist";
pub const RIGHT_WRIST: &str = "right_wrist";
pub const LEFT_HIP: &str = "left_hip";
pub const RIGHT_HIP: &str = "right_hip";
pub const LEFT_KNEE: &str = "left_knee";
pub const RIGHT_KNEE: &str = "right_knee";
pub const LEFT_ANKLE: &str = "left_ankle";
pub const RIGHT_ANKLE: &str = "right_ankle";

// ==================== Pose Types ====================

/// A named body keypoint in normalized image coordinates.
///
/// `x` and `y` are in `[0, 1]` with the origin at the top-left of the frame
/// and `y` increasing downward. `z` is relative depth and is ignored by the
/// scoring rules. `visibility` is the detector's confidence in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    pub visibility: f64,
}

impl Landmark {
    pub fn new(name: impl Into<String>, x: f64, y: f64, visibility: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z: 0.0,
            visibility,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility > VISIBILITY_THRESHOLD
    }
}

/// All landmarks detected in one camera frame.
///
/// Landmark names are expected to be unique within a pose; lookup is by name
/// and an absent name means the joint was not detected this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub landmarks: Vec<Landmark>,
    pub timestamp: i64,
}

// ==================== Exercise ====================

/// Exercise variants known to the engine.
///
/// Identifiers that do not match a scored exercise are preserved in
/// `Unknown` so feedback can echo them back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exercise {
    Squat,
    Pushup,
    Plank,
    Lunge,
    Unknown(String),
}

impl Exercise {
    /// Case-insensitive parse of an exercise identifier.
    pub fn parse(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "squat" => Exercise::Squat,
            "pushup" => Exercise::Pushup,
            "plank" => Exercise::Plank,
            "lunge" => Exercise::Lunge,
            _ => Exercise::Unknown(id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Exercise::Squat => "squat",
            Exercise::Pushup => "pushup",
            Exercise::Plank => "plank",
            Exercise::Lunge => "lunge",
            Exercise::Unknown(id) => id,
        }
    }

    /// Whether the engine has a form evaluator for this exercise.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Exercise::Unknown(_))
    }

    /// Landmarks that must be present for scoring; missing any of them
    /// routes the call into the low-confidence fallback.
    pub fn required_landmarks(&self) -> &'static [&'static str] {
        match self {
            Exercise::Squat | Exercise::Lunge => &[LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE],
            Exercise::Pushup => &[LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW],
            Exercise::Plank => &[LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP],
            Exercise::Unknown(_) => &[],
        }
    }

    /// Landmarks that refine the score when present but are never required.
    pub fn optional_landmarks(&self) -> &'static [&'static str] {
        match self {
            Exercise::Squat | Exercise::Lunge => {
                &[LEFT_ANKLE, RIGHT_ANKLE, LEFT_SHOULDER, RIGHT_SHOULDER]
            }
            Exercise::Pushup => &[LEFT_WRIST, RIGHT_WRIST, LEFT_HIP, RIGHT_HIP],
            Exercise::Plank => &[LEFT_ANKLE, RIGHT_ANKLE],
            Exercise::Unknown(_) => &[],
        }
    }
}

// ==================== Analysis Result ====================

/// Outcome of scoring one pose against one exercise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Form score in `[0, 100]`.
    pub score: u8,
    /// Human-readable summary of the result.
    pub feedback: String,
    /// Up to [`MAX_SUGGESTIONS`] corrective cues, highest priority first.
    pub suggestions: Vec<String>,
}

// ==================== Error Types ====================

/// Caller-contract violations.
///
/// The engine never fails for well-formed input; these are only produced by
/// the validation helpers when a caller hands over malformed records.
#[derive(Debug, Error)]
pub enum PoseError {
    #[error("exercise identifier must not be empty")]
    EmptyExercise,

    #[error("landmark name must not be empty")]
    UnnamedLandmark,

    #[error("landmark `{name}` has a non-finite coordinate")]
    NonFiniteCoordinate { name: String },

    #[error("landmark `{name}` visibility {value} is outside [0, 1]")]
    VisibilityOutOfRange { name: String, value: f64 },
}

pub type PoseResult<T> = Result<T, PoseError>;

// ==================== Tests ====================
