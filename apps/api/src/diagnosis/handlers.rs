use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{DimensionSpec, ProfileVector, Question};
use crate::diagnosis::scoring::{calculate_scores, resolve_answers, AnswerSelection};
use crate::errors::AppError;
use crate::matching::handlers::{build_offer, OfferView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DiagnosisRequest {
    pub answers: Vec<AnswerSelection>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub session_id: Uuid,
    pub scores: ProfileVector,
}

/// GET /api/v1/catalog/dimensions
pub async fn handle_list_dimensions(State(state): State<AppState>) -> Json<Vec<DimensionSpec>> {
    Json(state.catalog.dimensions().to_vec())
}

/// GET /api/v1/catalog/questions
pub async fn handle_list_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.catalog.questions().to_vec())
}

/// POST /api/v1/diagnosis
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<DiagnosisRequest>,
) -> Result<(StatusCode, Json<DiagnosisResponse>), AppError> {
    let resolved = resolve_answers(&state.catalog, &req.answers)?;
    let scores = calculate_scores(resolved);

    let session_id = Uuid::new_v4();
    state.sessions.save(session_id, &scores).await?;
    info!("Diagnosis {session_id} computed from {} answers", req.answers.len());

    Ok((
        StatusCode::CREATED,
        Json(DiagnosisResponse { session_id, scores }),
    ))
}

async fn load_scores(state: &AppState, session_id: Uuid) -> Result<ProfileVector, AppError> {
    state
        .sessions
        .load(session_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Diagnosis {session_id} not found")))
}

/// GET /api/v1/diagnosis/:session_id
pub async fn handle_get_diagnosis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DiagnosisResponse>, AppError> {
    let scores = load_scores(&state, session_id).await?;
    Ok(Json(DiagnosisResponse { session_id, scores }))
}

/// GET /api/v1/diagnosis/:session_id/offer
pub async fn handle_get_offer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<OfferView>, AppError> {
    let scores = load_scores(&state, session_id).await?;
    Ok(Json(build_offer(&state, &scores)?))
}
