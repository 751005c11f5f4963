use super::Evaluation;
use crate::resolver::PlankLandmarks;

const BODY_ALIGNMENT_TOLERANCE: f64 = 0.08;
const BODY_ALIGNMENT_PENALTY: i32 = 35;
const SHOULDER_STABILITY_TOLERANCE: f64 = 0.04;
const SHOULDER_STABILITY_PENALTY: i32 = 15;
const HIP_LEVEL_TOLERANCE: f64 = 0.04;
const HIP_LEVEL_PENALTY: i32 = 10;
const ANKLE_LEVEL_TOLERANCE: f64 = 0.05;
const ANKLE_LEVEL_PENALTY: i32 = 10;
const MIN_VISIBILITY: i32 = 70;
const VISIBILITY_MARGIN: i32 = 20;

pub(crate) fn evaluate(lm: &PlankLandmarks<'_>, visibility: i32) -> Evaluation {
    let mut eval = Evaluation::new();

    let shoulder_y = (lm.left_shoulder.y + lm.right_shoulder.y) / 2.0;
    let hip_y = (lm.left_hip.y + lm.right_hip.y) / 2.0;
    if (shoulder_y - hip_y).abs() > BODY_ALIGNMENT_TOLERANCE {
        // Shoulders below the hips in frame means the hips are sagging,
        // the other direction means piking.
        if shoulder_y > hip_y {
            eval.penalize(
                BODY_ALIGNMENT_PENALTY,
                "hip sagging",
                "Lift your hips up and avoid sagging",
            );
        } else {
            eval.penalize(
                BODY_ALIGNMENT_PENALTY,
                "hip piking",
                "Lower your hips and avoid piking up",
            );
        }
    }

    if (lm.left_shoulder.y - lm.right_shoulder.y).abs() > SHOULDER_STABILITY_TOLERANCE {
        eval.penalize(
            SHOULDER_STABILITY_PENALTY,
            "shoulder instability",
            "Keep your shoulders level and stable",
        );
    }

    if (lm.left_hip.y - lm.right_hip.y).abs() > HIP_LEVEL_TOLERANCE {
        eval.penalize(
            HIP_LEVEL_PENALTY,
            "hip misalignment",
            "Maintain level hips throughout the plank",
        );
    }

    if let (Some(left_ankle), Some(right_ankle)) = (lm.left_ankle, lm.right_ankle) {
        if (left_ankle.y - right_ankle.y).abs() > ANKLE_LEVEL_TOLERANCE {
            eval.penalize(
                ANKLE_LEVEL_PENALTY,
                "leg alignment",
                "Keep your legs straight and feet together",
            );
        }
    }

    eval.dampen_for_visibility(
        visibility,
        MIN_VISIBILITY,
        VISIBILITY_MARGIN,
        "Position the camera for a better side profile view",
    );

    eval
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::LandmarkMap;
    use crate::types::{
        Landmark, Pose, LEFT_ANKLE, LEFT_HIP, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP,
        RIGHT_SHOULDER,
    };

    fn plank_pose() -> Pose {
        Pose {
            landmarks: vec![
                Landmark::new(LEFT_SHOULDER, 0.30, 0.50, 1.0),
                Landmark::new(RIGHT_SHOULDER, 0.32, 0.50, 1.0),
                Landmark::new(LEFT_HIP, 0.55, 0.52, 1.0),
                Landmark::new(RIGHT_HIP, 0.57, 0.52, 1.0),
            ],
            timestamp: 0,
        }
    }

    fn evaluate_pose(pose: &Pose, visibility: i32) -> Evaluation {
        let map = LandmarkMap::from_pose(pose);
        let bag = PlankLandmarks::resolve(&map).unwrap();
        evaluate(&bag, visibility)
    }

    #[test]
    fn test_level_plank_scores_base() {
        let eval = evaluate_pose(&plank_pose(), 100);
        assert_eq!(eval.score(), 100);
        assert!(eval.issues().is_empty());
    }

    #[test]
    fn test_sagging_hips_detected() {
        let mut pose = plank_pose();
        // Shoulders sit 0.1 lower in the frame than the hips.
        pose.landmarks[0].y = 0.62;
        pose.landmarks[1].y = 0.62;

        let eval = evaluate_pose(&pose, 100);
        assert_eq!(eval.score(), 65);
        assert_eq!(eval.issues(), &["hip sagging"]);
        assert!(eval.suggestions()[0].contains("Lift"));
    }

    #[test]
    fn test_piking_hips_detected() {
        let mut pose = plank_pose();
        pose.landmarks[2].y = 0.62;
        pose.landmarks[3].y = 0.62;

        let eval = evaluate_pose(&pose, 100);
        assert_eq!(eval.score(), 65);
        assert_eq!(eval.issues(), &["hip piking"]);
        assert!(eval.suggestions()[0].contains("Lower"));
    }

    #[test]
    fn test_unstable_shoulders_cost_penalty() {
        let mut pose = plank_pose();
        pose.landmarks[0].y = 0.45; // 0.05 above the right shoulder

        let eval = evaluate_pose(&pose, 100);
        assert!(eval.issues().contains(&"shoulder instability"));
    }

    #[test]
    fn test_uneven_hips_cost_penalty() {
        let mut pose = plank_pose();
        pose.landmarks[2].y = 0.57; // 0.05 below the right hip

        let eval = evaluate_pose(&pose, 100);
        assert!(eval.issues().contains(&"hip misalignment"));
    }

    #[test]
    fn test_ankle_check_only_when_both_present() {
        let mut pose = plank_pose();
        pose.landmarks.push(Landmark::new(LEFT_ANKLE, 0.85, 0.54, 1.0));

        let eval = evaluate_pose(&pose, 100);
        assert!(!eval.issues().contains(&"leg alignment"));

        pose.landmarks.push(Landmark::new(RIGHT_ANKLE, 0.87, 0.62, 1.0));
        let eval = evaluate_pose(&pose, 100);
        assert!(eval.issues().contains(&"leg alignment"));
    }

    #[test]
    fn test_low_visibility_caps_score() {
        let eval = evaluate_pose(&plank_pose(), 40);
        assert_eq!(eval.score(), 60);
    }
}
