//! Feedback Composition
//!
//! Maps final scores to feedback tiers, renders the per-exercise summary
//! sentence, and produces the degraded fallback results for missing
//! landmarks and unrecognized exercises.

use crate::types::{Analysis, Exercise};

const MISSING_LANDMARK_FLOOR: i32 = 10;
const MISSING_LANDMARK_DEDUCTION: i32 = 40;
const UNSUPPORTED_FLOOR: i32 = 20;
const UNSUPPORTED_DEDUCTION: i32 = 20;

/// Feedback tier bands, consistent across exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tier {
    Excellent,
    Good,
    Decent,
    NeedsWork,
    Basics,
}

impl Tier {
    pub fn from_score(score: i32) -> Self {
        if score >= 90 {
            Tier::Excellent
        } else if score >= 80 {
            Tier::Good
        } else if score >= 70 {
            Tier::Decent
        } else if score >= 50 {
            Tier::NeedsWork
        } else {
            Tier::Basics
        }
    }
}

fn noun(exercise: &Exercise) -> &'static str {
    match exercise {
        Exercise::Squat => "squat",
        Exercise::Pushup => "push-up",
        Exercise::Plank => "plank",
        Exercise::Lunge => "lunge",
        Exercise::Unknown(_) => "exercise",
    }
}

fn excellent_line(exercise: &Exercise) -> &'static str {
    match exercise {
        Exercise::Squat => "Excellent squat form! Your depth and alignment are spot-on.",
        Exercise::Pushup => "Perfect push-up form! Your body line and arm position are excellent.",
        Exercise::Plank => "Outstanding plank form! Your body alignment is rock solid.",
        Exercise::Lunge => "Excellent lunge form! Your alignment and depth are on point.",
        Exercise::Unknown(_) => "Excellent form!",
    }
}

/// Build the summary sentence for a scored exercise from its tier and the
/// issue tags collected during evaluation.
pub(crate) fn compose(exercise: &Exercise, score: i32, issues: &[&str]) -> String {
    let noun = noun(exercise);
    match Tier::from_score(score) {
        Tier::Excellent => excellent_line(exercise).to_string(),
        Tier::Good => {
            if issues.is_empty() {
                format!("Good {noun} form! Keep up the great work.")
            } else {
                format!("Good {noun} form! Minor issues with {}.", issues.join(" and "))
            }
        }
        Tier::Decent => format!(
            "Decent {noun} form with room for improvement. Main issues: {}.",
            issues.join(", ")
        ),
        Tier::NeedsWork => format!("Your {noun} needs work. Focus on: {}.", issues.join(", ")),
        Tier::Basics => format!(
            "Let's work on {noun} basics. Major issues: {}.",
            issues.join(", ")
        ),
    }
}

fn region(exercise: &Exercise) -> &'static str {
    match exercise {
        Exercise::Squat | Exercise::Lunge => "hip and knee",
        Exercise::Pushup => "shoulder and elbow",
        Exercise::Plank => "shoulder and hip",
        Exercise::Unknown(_) => "body",
    }
}

/// Fixed low-confidence result returned when a required landmark is absent.
pub(crate) fn missing_landmarks(exercise: &Exercise, visibility: i32) -> Analysis {
    let score = (visibility - MISSING_LANDMARK_DEDUCTION).max(MISSING_LANDMARK_FLOOR);
    Analysis {
        score: clamp_score(score),
        feedback: format!(
            "Unable to detect the {} landmarks needed for {} analysis. Ensure your full body is visible.",
            region(exercise),
            noun(exercise),
        ),
        suggestions: vec![
            "Step back from the camera to show your full body".to_string(),
            "Make sure the area is well lit".to_string(),
            "Face the camera directly".to_string(),
        ],
    }
}

/// Degraded default result for an exercise the engine cannot score.
pub(crate) fn unsupported_exercise(id: &str, visibility: i32) -> Analysis {
    let score = (visibility - UNSUPPORTED_DEDUCTION).max(UNSUPPORTED_FLOOR);
    Analysis {
        score: clamp_score(score),
        feedback: format!(
            "Form analysis is not available for {id}. Based on pose visibility: {visibility}%."
        ),
        suggestions: vec!["Select a supported exercise type for detailed analysis".to_string()],
    }
}

pub(crate) fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
