use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::placement::assignment::{
    self, assign_to_team, auto_assign, recommendations, unassign, Assignment, AutoAssignOutcome,
    Recommendation,
};
use crate::placement::models::{Candidate, Team};
use crate::placement::projection::{project_all, TeamProjection};
use crate::placement::report::{render_report, upload_report};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TeamView {
    #[serde(flatten)]
    pub team: Team,
    pub projection: TeamProjection,
}

#[derive(Serialize)]
pub struct PlacementBoard {
    pub teams: Vec<TeamView>,
    pub candidates: Vec<Candidate>,
}

fn board(teams: Vec<Team>, candidates: Vec<Candidate>) -> PlacementBoard {
    let projections = project_all(&teams, &candidates);
    PlacementBoard {
        teams: teams
            .into_iter()
            .zip(projections)
            .map(|(team, projection)| TeamView { team, projection })
            .collect(),
        candidates,
    }
}

/// GET /api/v1/placement
pub async fn handle_get_board(
    State(state): State<AppState>,
) -> Result<Json<PlacementBoard>, AppError> {
    let teams = state.placement.list_teams().await?;
    let candidates = state.placement.list_candidates().await?;
    Ok(Json(board(teams, candidates)))
}

/// GET /api/v1/placement/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let teams = state.placement.list_teams().await?;
    let candidates = state.placement.list_candidates().await?;
    Ok(Json(recommendations(&candidates, &teams)))
}

#[derive(Serialize)]
pub struct AutoAssignResponse {
    #[serde(flatten)]
    pub outcome: AutoAssignOutcome,
    pub board: PlacementBoard,
}

/// POST /api/v1/placement/auto-assign
pub async fn handle_auto_assign(
    State(state): State<AppState>,
) -> Result<Json<AutoAssignResponse>, AppError> {
    let _guard = state.placement_lock.lock().await;
    let teams = state.placement.list_teams().await?;
    let mut candidates = state.placement.list_candidates().await?;

    let outcome = auto_assign(&mut candidates, &teams)?;
    state.placement.save_candidates(&candidates).await?;

    Ok(Json(AutoAssignResponse {
        outcome,
        board: board(teams, candidates),
    }))
}

/// POST /api/v1/placement/reset
pub async fn handle_reset(
    State(state): State<AppState>,
) -> Result<Json<PlacementBoard>, AppError> {
    let _guard = state.placement_lock.lock().await;
    let teams = state.placement.list_teams().await?;
    let mut candidates = state.placement.list_candidates().await?;

    assignment::reset(&mut candidates);
    state.placement.save_candidates(&candidates).await?;
    info!("Placement reset for {} candidates", candidates.len());

    Ok(Json(board(teams, candidates)))
}

#[derive(Deserialize)]
pub struct AssignRequest {
    pub team_id: String,
}

/// POST /api/v1/placement/candidates/:id/assign
pub async fn handle_assign(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
    Json(req): Json<AssignRequest>,
) -> Result<Json<Assignment>, AppError> {
    let _guard = state.placement_lock.lock().await;
    let teams = state.placement.list_teams().await?;
    let mut candidates = state.placement.list_candidates().await?;

    let assignment = assign_to_team(&mut candidates, &teams, &candidate_id, &req.team_id)?;
    state.placement.save_candidates(&candidates).await?;
    Ok(Json(assignment))
}

/// POST /api/v1/placement/candidates/:id/unassign
pub async fn handle_unassign(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let _guard = state.placement_lock.lock().await;
    let mut candidates = state.placement.list_candidates().await?;

    unassign(&mut candidates, &candidate_id)?;
    state.placement.save_candidates(&candidates).await?;

    candidates
        .into_iter()
        .find(|c| c.id() == candidate_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub markdown: String,
    /// Set when the report was uploaded to object storage.
    pub s3_key: Option<String>,
}

/// POST /api/v1/placement/report
pub async fn handle_report(
    State(state): State<AppState>,
) -> Result<Json<ReportResponse>, AppError> {
    let teams = state.placement.list_teams().await?;
    let candidates = state.placement.list_candidates().await?;

    let generated_at = Utc::now();
    let markdown = render_report(&teams, &candidates, generated_at);

    let s3_key = match (&state.s3, state.config.s3_bucket.as_deref()) {
        (Some(s3), Some(bucket)) => Some(
            upload_report(s3, bucket, markdown.clone(), generated_at)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?,
        ),
        _ => None,
    };

    Ok(Json(ReportResponse { markdown, s3_key }))
}
