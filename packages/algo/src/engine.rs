//! Analysis Entry Point
//!
//! `analyze` is the single public operation of the engine: a pure,
//! stateless mapping from `(exercise id, pose)` to an [`Analysis`]. It
//! never fails for well-formed input; degraded inputs (missing landmarks,
//! unknown exercise ids) produce degraded-but-valid results instead of
//! errors. The validation helpers cover the caller's side of the contract
//! and are the only fallible surface.

use crate::exercises::{lunge, plank, pushup, squat, Evaluation};
use crate::feedback;
use crate::resolver::{
    visibility_score, LandmarkMap, LungeLandmarks, PlankLandmarks, PushupLandmarks, SquatLandmarks,
};
use crate::types::{Analysis, Exercise, Pose, PoseError, PoseResult, MAX_SUGGESTIONS};

/// Score one pose against one exercise.
pub fn analyze(exercise_id: &str, pose: &Pose) -> Analysis {
    let exercise = Exercise::parse(exercise_id);
    let map = LandmarkMap::from_pose(pose);
    let visibility = visibility_score(pose);

    let evaluation = match &exercise {
        Exercise::Squat => SquatLandmarks::resolve(&map).map(|lm| squat::evaluate(&lm, visibility)),
        Exercise::Pushup => {
            PushupLandmarks::resolve(&map).map(|lm| pushup::evaluate(&lm, visibility))
        }
        Exercise::Plank => PlankLandmarks::resolve(&map).map(|lm| plank::evaluate(&lm, visibility)),
        Exercise::Lunge => LungeLandmarks::resolve(&map).map(|lm| lunge::evaluate(&lm, visibility)),
        Exercise::Unknown(id) => return feedback::unsupported_exercise(id, visibility),
    };

    match evaluation {
        Some(evaluation) => finish(&exercise, evaluation),
        None => feedback::missing_landmarks(&exercise, visibility),
    }
}

fn finish(exercise: &Exercise, evaluation: Evaluation) -> Analysis {
    let score = evaluation.score().clamp(0, 100);
    let feedback = feedback::compose(exercise, score, evaluation.issues());
    let suggestions = evaluation
        .suggestions()
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| s.to_string())
        .collect();

    Analysis {
        score: score as u8,
        feedback,
        suggestions,
    }
}

/// Reject an exercise identifier that violates the input contract.
pub fn validate_exercise(id: &str) -> PoseResult<()> {
    if id.trim().is_empty() {
        return Err(PoseError::EmptyExercise);
    }
    Ok(())
}

/// Reject a pose whose landmark records violate the input contract.
///
/// The engine assumes finite coordinates and in-range visibility; callers
/// are expected to run this before [`analyze`] and surface violations as
/// client errors.
pub fn validate_pose(pose: &Pose) -> PoseResult<()> {
    for landmark in &pose.landmarks {
        if landmark.name.is_empty() {
            return Err(PoseError::UnnamedLandmark);
        }
        if !landmark.x.is_finite() || !landmark.y.is_finite() || !landmark.z.is_finite() {
            return Err(PoseError::NonFiniteCoordinate {
                name: landmark.name.clone(),
            });
        }
        if !landmark.visibility.is_finite() || !(0.0..=1.0).contains(&landmark.visibility) {
            return Err(PoseError::VisibilityOutOfRange {
                name: landmark.name.clone(),
                value: landmark.visibility,
            });
        }
    }
    Ok(())
}
