use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use formcoach_algo::Pose;

use crate::response::AppError;
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequestBody {
    exercise: String,
    pose: Pose,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResultDto {
    exercise: String,
    score: u8,
    feedback: String,
    suggestions: Vec<String>,
    /// Time the analysis was produced, not the pose capture time.
    timestamp: i64,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequestBody>,
) -> Result<impl IntoResponse, AppError> {
    validate_request(&payload)?;

    let analysis = formcoach_algo::analyze(&payload.exercise, &payload.pose);
    state.counters().record_analysis();

    tracing::info!(
        exercise = %payload.exercise,
        score = analysis.score,
        landmarks = payload.pose.landmarks.len(),
        session = payload.session_id.as_deref().unwrap_or("-"),
        "pose analyzed"
    );

    Ok(Json(SuccessResponse {
        success: true,
        data: AnalysisResultDto {
            exercise: payload.exercise,
            score: analysis.score,
            feedback: analysis.feedback,
            suggestions: analysis.suggestions,
            timestamp: Utc::now().timestamp_millis(),
        },
    }))
}

fn validate_request(payload: &AnalyzeRequestBody) -> Result<(), AppError> {
    formcoach_algo::validate_exercise(&payload.exercise)
        .map_err(|e| AppError::validation(e.to_string()))?;
    formcoach_algo::validate_pose(&payload.pose).map_err(|e| AppError::validation(e.to_string()))?;

    if payload.pose.timestamp < 0 {
        return Err(AppError::validation("pose timestamp must be non-negative"));
    }
    if matches!(payload.timestamp, Some(ts) if ts < 0) {
        return Err(AppError::validation(
            "request timestamp must be non-negative",
        ));
    }

    Ok(())
}
