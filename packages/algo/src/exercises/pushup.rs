use super::Evaluation;
use crate::resolver::PushupLandmarks;

const BODY_ALIGNMENT_TOLERANCE: f64 = 0.12;
const BODY_ALIGNMENT_PENALTY: i32 = 30;
const ELBOW_FLARE_TOLERANCE: f64 = 0.15;
const ELBOW_FLARE_PENALTY: i32 = 25;
const HAND_PLACEMENT_TOLERANCE: f64 = 0.08;
const HAND_PLACEMENT_PENALTY: i32 = 15;
const SHOULDER_LEVEL_TOLERANCE: f64 = 0.06;
const SHOULDER_LEVEL_PENALTY: i32 = 10;
const MIN_VISIBILITY: i32 = 75;
const VISIBILITY_MARGIN: i32 = 15;

pub(crate) fn evaluate(lm: &PushupLandmarks<'_>, visibility: i32) -> Evaluation {
    let mut eval = Evaluation::new();

    let shoulder_y = (lm.left_shoulder.y + lm.right_shoulder.y) / 2.0;
    // Without hips the body line cannot deviate from the shoulder line.
    let hip_y = match (lm.left_hip, lm.right_hip) {
        (Some(left), Some(right)) => (left.y + right.y) / 2.0,
        _ => shoulder_y,
    };
    if (shoulder_y - hip_y).abs() > BODY_ALIGNMENT_TOLERANCE {
        eval.penalize(
            BODY_ALIGNMENT_PENALTY,
            "body alignment",
            "Keep your body in a straight line from head to heels",
        );
    }

    let elbow_flare = ((lm.left_elbow.x - lm.left_shoulder.x).abs()
        + (lm.right_elbow.x - lm.right_shoulder.x).abs())
        / 2.0;
    if elbow_flare > ELBOW_FLARE_TOLERANCE {
        eval.penalize(
            ELBOW_FLARE_PENALTY,
            "elbow position",
            "Keep your elbows closer to your body instead of flaring them out",
        );
    }

    if let (Some(left_wrist), Some(right_wrist)) = (lm.left_wrist, lm.right_wrist) {
        let wrist_offset = ((left_wrist.x - lm.left_shoulder.x).abs()
            + (right_wrist.x - lm.right_shoulder.x).abs())
            / 2.0;
        if wrist_offset > HAND_PLACEMENT_TOLERANCE {
            eval.penalize(
                HAND_PLACEMENT_PENALTY,
                "hand placement",
                "Position your hands directly under your shoulders",
            );
        }
    }

    if (lm.left_shoulder.y - lm.right_shoulder.y).abs() > SHOULDER_LEVEL_TOLERANCE {
        eval.penalize(
            SHOULDER_LEVEL_PENALTY,
            "shoulder level",
            "Keep your shoulders level",
        );
    }

    eval.dampen_for_visibility(
        visibility,
        MIN_VISIBILITY,
        VISIBILITY_MARGIN,
        "Adjust the camera angle for better upper body visibility",
    );

    eval
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::LandmarkMap;
    use crate::types::{
        Landmark, Pose, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_HIP,
        RIGHT_SHOULDER, RIGHT_WRIST,
    };

    fn pushup_pose() -> Pose {
        Pose {
            landmarks: vec![
                Landmark::new(LEFT_SHOULDER, 0.40, 0.40, 1.0),
                Landmark::new(RIGHT_SHOULDER, 0.60, 0.40, 1.0),
                Landmark::new(LEFT_ELBOW, 0.35, 0.50, 1.0),
                Landmark::new(RIGHT_ELBOW, 0.65, 0.50, 1.0),
            ],
            timestamp: 0,
        }
    }

    fn evaluate_pose(pose: &Pose, visibility: i32) -> Evaluation {
        let map = LandmarkMap::from_pose(pose);
        let bag = PushupLandmarks::resolve(&map).unwrap();
        evaluate(&bag, visibility)
    }

    #[test]
    fn test_straight_pushup_scores_base() {
        let eval = evaluate_pose(&pushup_pose(), 100);
        assert_eq!(eval.score(), 100);
        assert!(eval.issues().is_empty());
    }

    #[test]
    fn test_missing_hips_skips_body_alignment() {
        // Shoulders alone define the body line, so the check cannot fire.
        let eval = evaluate_pose(&pushup_pose(), 100);
        assert!(!eval.issues().contains(&"body alignment"));
    }

    #[test]
    fn test_sagging_hips_cost_alignment_penalty() {
        let mut pose = pushup_pose();
        pose.landmarks.push(Landmark::new(LEFT_HIP, 0.40, 0.55, 1.0));
        pose.landmarks.push(Landmark::new(RIGHT_HIP, 0.60, 0.55, 1.0));

        let eval = evaluate_pose(&pose, 100);
        assert_eq!(eval.score(), 70);
        assert_eq!(eval.issues(), &["body alignment"]);
    }

    #[test]
    fn test_flared_elbows_cost_penalty() {
        let mut pose = pushup_pose();
        pose.landmarks[2].x = 0.22;
        pose.landmarks[3].x = 0.78; // avg flare 0.18 > 0.15

        let eval = evaluate_pose(&pose, 100);
        assert_eq!(eval.score(), 75);
        assert_eq!(eval.issues(), &["elbow position"]);
    }

    #[test]
    fn test_wide_hands_checked_when_wrists_present() {
        let mut pose = pushup_pose();
        pose.landmarks.push(Landmark::new(LEFT_WRIST, 0.30, 0.60, 1.0));
        pose.landmarks.push(Landmark::new(RIGHT_WRIST, 0.70, 0.60, 1.0));

        let eval = evaluate_pose(&pose, 100);
        assert_eq!(eval.score(), 85);
        assert_eq!(eval.issues(), &["hand placement"]);
    }

    #[test]
    fn test_uneven_shoulders_cost_penalty() {
        let mut pose = pushup_pose();
        pose.landmarks[0].y = 0.33; // 0.07 above the right shoulder

        let eval = evaluate_pose(&pose, 100);
        assert!(eval.issues().contains(&"shoulder level"));
    }

    #[test]
    fn test_low_visibility_caps_score() {
        let eval = evaluate_pose(&pushup_pose(), 50);
        assert_eq!(eval.score(), 65);
        assert_eq!(eval.suggestions().len(), 1);
    }
}
