use super::Evaluation;
use crate::resolver::SquatLandmarks;

// Tolerances are fractions of frame width/height, tuned empirically.
const KNEE_HIP_ALIGNMENT_TOLERANCE: f64 = 0.08;
const KNEE_HIP_ALIGNMENT_PENALTY: i32 = 25;
const MIN_DEPTH: f64 = 0.08;
const DEPTH_PENALTY: i32 = 20;
const BALANCE_TOLERANCE: f64 = 0.06;
const BALANCE_PENALTY: i32 = 15;
const SHOULDER_LEVEL_TOLERANCE: f64 = 0.05;
const SHOULDER_LEVEL_PENALTY: i32 = 10;
const MIN_VISIBILITY: i32 = 80;
const VISIBILITY_MARGIN: i32 = 10;

pub(crate) fn evaluate(lm: &SquatLandmarks<'_>, visibility: i32) -> Evaluation {
    let mut eval = Evaluation::new();

    let knee_alignment = ((lm.left_knee.x - lm.left_hip.x).abs()
        + (lm.right_knee.x - lm.right_hip.x).abs())
        / 2.0;
    if knee_alignment > KNEE_HIP_ALIGNMENT_TOLERANCE {
        eval.penalize(
            KNEE_HIP_ALIGNMENT_PENALTY,
            "knee alignment",
            "Keep your knees aligned with your hips, they're tracking outward",
        );
    }

    let hip_y = (lm.left_hip.y + lm.right_hip.y) / 2.0;
    let knee_y = (lm.left_knee.y + lm.right_knee.y) / 2.0;
    if (hip_y - knee_y).abs() < MIN_DEPTH {
        eval.penalize(
            DEPTH_PENALTY,
            "insufficient depth",
            "Squat deeper, aim to get your hips below knee level",
        );
    }

    if (lm.left_knee.y - lm.right_knee.y).abs() > BALANCE_TOLERANCE {
        eval.penalize(
            BALANCE_PENALTY,
            "weight imbalance",
            "Maintain equal weight distribution on both legs",
        );
    }

    if let (Some(left_shoulder), Some(right_shoulder)) = (lm.left_shoulder, lm.right_shoulder) {
        if (left_shoulder.y - right_shoulder.y).abs() > SHOULDER_LEVEL_TOLERANCE {
            eval.penalize(
                SHOULDER_LEVEL_PENALTY,
                "shoulder misalignment",
                "Keep your shoulders level and back straight",
            );
        }
    }

    eval.dampen_for_visibility(
        visibility,
        MIN_VISIBILITY,
        VISIBILITY_MARGIN,
        "Improve camera positioning for better pose detection",
    );

    eval
}
