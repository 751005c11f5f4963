use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use formcoach_algo::Exercise;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseDto {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    target_reps: u32,
    target_sets: u32,
    analysis_supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_landmarks: Option<&'static [&'static str]>,
}

// Catalog shown to clients; entries without an evaluator still get the
// degraded default analysis when submitted.
const CATALOG: &[(&str, &str, &str, u32, u32)] = &[
    ("squat", "Squat", "Lower body strength exercise", 12, 3),
    ("pushup", "Push-up", "Upper body strength exercise", 15, 3),
    ("plank", "Plank", "Core stability exercise", 1, 3),
    ("lunge", "Lunge", "Lower body balance exercise", 10, 3),
    ("burpee", "Burpee", "Full body cardio exercise", 8, 3),
];

pub async fn list_exercises() -> impl IntoResponse {
    let data: Vec<ExerciseDto> = CATALOG
        .iter()
        .map(|&(id, name, description, target_reps, target_sets)| {
            let exercise = Exercise::parse(id);
            let supported = exercise.is_supported();
            ExerciseDto {
                id,
                name,
                description,
                target_reps,
                target_sets,
                analysis_supported: supported,
                required_landmarks: supported.then(|| exercise.required_landmarks()),
            }
        })
        .collect();

    Json(SuccessResponse {
        success: true,
        data,
    })
}
