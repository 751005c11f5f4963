//! Landmark Resolution
//!
//! Builds the per-call name lookup over a [`Pose`] and resolves the typed
//! landmark bags each evaluator reads. Required landmarks are checked before
//! any optional one is touched; a bag only resolves when every required
//! joint was detected.

use std::collections::HashMap;

use crate::types::{
    Landmark, Pose, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Name-keyed view over a pose, built once per analysis call.
///
/// Well-formed poses have unique names; on duplicates the last entry wins.
pub struct LandmarkMap<'a> {
    by_name: HashMap<&'a str, &'a Landmark>,
}

impl<'a> LandmarkMap<'a> {
    pub fn from_pose(pose: &'a Pose) -> Self {
        let mut by_name = HashMap::with_capacity(pose.landmarks.len());
        for landmark in &pose.landmarks {
            by_name.insert(landmark.name.as_str(), landmark);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a Landmark> {
        self.by_name.get(name).copied()
    }
}

/// Percentage of the pose's landmarks detected with usable confidence,
/// rounded to the nearest integer. An empty pose scores 0.
pub fn visibility_score(pose: &Pose) -> i32 {
    if pose.landmarks.is_empty() {
        return 0;
    }
    let visible = pose.landmarks.iter().filter(|l| l.is_visible()).count();
    ((visible as f64 / pose.landmarks.len() as f64) * 100.0).round() as i32
}

pub(crate) struct SquatLandmarks<'a> {
    pub left_hip: &'a Landmark,
    pub right_hip: &'a Landmark,
    pub left_knee: &'a Landmark,
    pub right_knee: &'a Landmark,
    pub left_shoulder: Option<&'a Landmark>,
    pub right_shoulder: Option<&'a Landmark>,
}

impl<'a> SquatLandmarks<'a> {
    pub fn resolve(map: &LandmarkMap<'a>) -> Option<Self> {
        Some(Self {
            left_hip: map.get(LEFT_HIP)?,
            right_hip: map.get(RIGHT_HIP)?,
            left_knee: map.get(LEFT_KNEE)?,
            right_knee: map.get(RIGHT_KNEE)?,
            left_shoulder: map.get(LEFT_SHOULDER),
            right_shoulder: map.get(RIGHT_SHOULDER),
        })
    }
}

pub(crate) struct PushupLandmarks<'a> {
    pub left_shoulder: &'a Landmark,
    pub right_shoulder: &'a Landmark,
    pub left_elbow: &'a Landmark,
    pub right_elbow: &'a Landmark,
    pub left_wrist: Option<&'a Landmark>,
    pub right_wrist: Option<&'a Landmark>,
    pub left_hip: Option<&'a Landmark>,
    pub right_hip: Option<&'a Landmark>,
}

impl<'a> PushupLandmarks<'a> {
    pub fn resolve(map: &LandmarkMap<'a>) -> Option<Self> {
        Some(Self {
            left_shoulder: map.get(LEFT_SHOULDER)?,
            right_shoulder: map.get(RIGHT_SHOULDER)?,
            left_elbow: map.get(LEFT_ELBOW)?,
            right_elbow: map.get(RIGHT_ELBOW)?,
            left_wrist: map.get(LEFT_WRIST),
            right_wrist: map.get(RIGHT_WRIST),
            left_hip: map.get(LEFT_HIP),
            right_hip: map.get(RIGHT_HIP),
        })
    }
}

pub(crate) struct PlankLandmarks<'a> {
    pub left_shoulder: &'a Landmark,
    pub right_shoulder: &'a Landmark,
    pub left_hip: &'a Landmark,
    pub right_hip: &'a Landmark,
    pub left_ankle: Option<&'a Landmark>,
    pub right_ankle: Option<&'a Landmark>,
}

impl<'a> PlankLandmarks<'a> {
    pub fn resolve(map: &LandmarkMap<'a>) -> Option<Self> {
        Some(Self {
            left_shoulder: map.get(LEFT_SHOULDER)?,
            right_shoulder: map.get(RIGHT_SHOULDER)?,
            left_hip: map.get(LEFT_HIP)?,
            right_hip: map.get(RIGHT_HIP)?,
            left_ankle: map.get(LEFT_ANKLE),
            right_ankle: map.get(RIGHT_ANKLE),
        })
    }
}

pub(crate) struct LungeLandmarks<'a> {
    pub left_hip: &'a Landmark,
    pub right_hip: &'a Landmark,
    pub left_knee: &'a Landmark,
    pub right_knee: &'a Landmark,
    pub left_ankle: Option<&'a Landmark>,
    pub right_ankle: Option<&'a Landmark>,
    pub left_shoulder: Option<&'a Landmark>,
    pub right_shoulder: Option<&'a Landmark>,
}

impl<'a> LungeLandmarks<'a> {
    pub fn resolve(map: &LandmarkMap<'a>) -> Option<Self> {
        Some(Self {
            left_hip: map.get(LEFT_HIP)?,
            right_hip: map.get(RIGHT_HIP)?,
            left_knee: map.get(LEFT_KNEE)?,
            right_knee: map.get(RIGHT_KNEE)?,
            left_ankle: map.get(LEFT_ANKLE),
            right_ankle: map.get(RIGHT_ANKLE),
            left_shoulder: map.get(LEFT_SHOULDER),
            right_shoulder: map.get(RIGHT_SHOULDER),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(landmarks: Vec<Landmark>) -> Pose {
        Pose {
            landmarks,
            timestamp: 0,
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.4, 0.5, 1.0),
            Landmark::new(RIGHT_HIP, 0.6, 0.5, 1.0),
        ]);
        let map = LandmarkMap::from_pose(&p);

        assert_eq!(map.get(LEFT_HIP).unwrap().x, 0.4);
        assert!(map.get(LEFT_KNEE).is_none());
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.1, 0.1, 1.0),
            Landmark::new(LEFT_HIP, 0.9, 0.9, 1.0),
        ]);
        let map = LandmarkMap::from_pose(&p);

        assert_eq!(map.get(LEFT_HIP).unwrap().x, 0.9);
    }

    #[test]
    fn test_visibility_score_empty_pose() {
        assert_eq!(visibility_score(&pose(vec![])), 0);
    }

    #[test]
    fn test_visibility_score_counts_confident_landmarks() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.4, 0.5, 0.9),
            Landmark::new(RIGHT_HIP, 0.6, 0.5, 0.9),
            Landmark::new(LEFT_KNEE, 0.4, 0.6, 0.3),
            Landmark::new(RIGHT_KNEE, 0.6, 0.6, 0.5),
        ]);
        // 0.5 is not above the threshold, so 2 of 4 count.
        assert_eq!(visibility_score(&p), 50);
    }

    #[test]
    fn test_visibility_score_rounds_to_nearest() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.4, 0.5, 0.9),
            Landmark::new(RIGHT_HIP, 0.6, 0.5, 0.9),
            Landmark::new(LEFT_KNEE, 0.4, 0.6, 0.1),
        ]);
        // 2/3 -> 66.67 -> 67
        assert_eq!(visibility_score(&p), 67);
    }

    #[test]
    fn test_squat_bag_requires_hips_and_knees() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.4, 0.5, 1.0),
            Landmark::new(RIGHT_HIP, 0.6, 0.5, 1.0),
            Landmark::new(LEFT_KNEE, 0.4, 0.6, 1.0),
        ]);
        let map = LandmarkMap::from_pose(&p);
        assert!(SquatLandmarks::resolve(&map).is_none());
    }

    #[test]
    fn test_squat_bag_resolves_without_optional_shoulders() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.4, 0.5, 1.0),
            Landmark::new(RIGHT_HIP, 0.6, 0.5, 1.0),
            Landmark::new(LEFT_KNEE, 0.4, 0.6, 1.0),
            Landmark::new(RIGHT_KNEE, 0.6, 0.6, 1.0),
        ]);
        let map = LandmarkMap::from_pose(&p);

        let bag = SquatLandmarks::resolve(&map).unwrap();
        assert!(bag.left_shoulder.is_none());
        assert!(bag.right_shoulder.is_none());
    }

    #[test]
    fn test_pushup_bag_requires_both_elbows() {
        let p = pose(vec![
            Landmark::new(LEFT_SHOULDER, 0.4, 0.3, 1.0),
            Landmark::new(RIGHT_SHOULDER, 0.6, 0.3, 1.0),
            Landmark::new(LEFT_ELBOW, 0.35, 0.4, 1.0),
        ]);
        let map = LandmarkMap::from_pose(&p);
        assert!(PushupLandmarks::resolve(&map).is_none());
    }

    #[test]
    fn test_lunge_bag_carries_optional_ankles() {
        let p = pose(vec![
            Landmark::new(LEFT_HIP, 0.4, 0.5, 1.0),
            Landmark::new(RIGHT_HIP, 0.6, 0.5, 1.0),
            Landmark::new(LEFT_KNEE, 0.4, 0.7, 1.0),
            Landmark::new(RIGHT_KNEE, 0.6, 0.55, 1.0),
            Landmark::new(LEFT_ANKLE, 0.4, 0.85, 1.0),
        ]);
        let map = LandmarkMap::from_pose(&p);

        let bag = LungeLandmarks::resolve(&map).unwrap();
        assert!(bag.left_ankle.is_some());
        assert!(bag.right_ankle.is_none());
    }
}
