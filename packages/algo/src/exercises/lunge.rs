use super::Evaluation;
use crate::resolver::LungeLandmarks;

const KNEE_ANKLE_ALIGNMENT_TOLERANCE: f64 = 0.06;
const KNEE_ANKLE_ALIGNMENT_PENALTY: i32 = 25;
const MIN_DEPTH: f64 = 0.12;
const DEPTH_PENALTY: i32 = 20;
const TORSO_LEAN_TOLERANCE: f64 = 0.15;
const TORSO_LEAN_PENALTY: i32 = 20;
const SHOULDER_LEVEL_TOLERANCE: f64 = 0.05;
const SHOULDER_LEVEL_PENALTY: i32 = 10;
const HIP_LEVEL_TOLERANCE: f64 = 0.08;
const HIP_LEVEL_PENALTY: i32 = 15;
const MIN_VISIBILITY: i32 = 75;
const VISIBILITY_MARGIN: i32 = 10;

pub(crate) fn evaluate(lm: &LungeLandmarks<'_>, visibility: i32) -> Evaluation {
    let mut eval = Evaluation::new();

    // Heuristic: the knee lower in the frame (larger y) is taken as the
    // forward leg. This assumes the usual front-facing camera angle and is
    // not a geometric guarantee.
    let (front_knee, back_knee, front_ankle) = if lm.left_knee.y > lm.right_knee.y {
        (lm.left_knee, lm.right_knee, lm.left_ankle)
    } else {
        (lm.right_knee, lm.left_knee, lm.right_ankle)
    };

    if let Some(ankle) = front_ankle {
        if (front_knee.x - ankle.x).abs() > KNEE_ANKLE_ALIGNMENT_TOLERANCE {
            eval.penalize(
                KNEE_ANKLE_ALIGNMENT_PENALTY,
                "front knee alignment",
                "Keep your front knee aligned over your ankle",
            );
        }
    }

    if (front_knee.y - back_knee.y).abs() < MIN_DEPTH {
        eval.penalize(
            DEPTH_PENALTY,
            "insufficient depth",
            "Lower into a deeper lunge position",
        );
    }

    if let (Some(left_shoulder), Some(right_shoulder)) = (lm.left_shoulder, lm.right_shoulder) {
        let shoulder_y = (left_shoulder.y + right_shoulder.y) / 2.0;
        let hip_y = (lm.left_hip.y + lm.right_hip.y) / 2.0;
        if (shoulder_y - hip_y).abs() > TORSO_LEAN_TOLERANCE {
            eval.penalize(
                TORSO_LEAN_PENALTY,
                "torso lean",
                "Keep your torso upright and avoid leaning forward",
            );
        }

        if (left_shoulder.y - right_shoulder.y).abs() > SHOULDER_LEVEL_TOLERANCE {
            eval.penalize(
                SHOULDER_LEVEL_PENALTY,
                "shoulder tilt",
                "Keep your shoulders level",
            );
        }
    }

    if (lm.left_hip.y - lm.right_hip.y).abs() > HIP_LEVEL_TOLERANCE {
        eval.penalize(
            HIP_LEVEL_PENALTY,
            "hip misalignment",
            "Keep your hips square and level",
        );
    }

    eval.dampen_for_visibility(
        visibility,
        MIN_VISIBILITY,
        VISIBILITY_MARGIN,
        "Improve camera positioning for full body visibility",
    );

    eval
}
