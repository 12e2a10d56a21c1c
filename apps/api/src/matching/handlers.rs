use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{BossProfile, ProfileVector};
use crate::errors::AppError;
use crate::matching::matcher::{
    compare_dimensions, find_best_match, rank_profiles, DimensionComparison, MatchResult,
    ProfileScore,
};
use crate::state::AppState;

/// Everything the offer page renders: the match, the boss behind it, and the
/// per-dimension comparison for the radar chart.
#[derive(Debug, Serialize)]
pub struct OfferView {
    pub match_result: MatchResult,
    pub boss: BossProfile,
    pub comparison: Vec<DimensionComparison>,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub scores: ProfileVector,
}

/// Rejects vectors with a non-finite or out-of-range dimension.
pub fn validate_vector(scores: &ProfileVector) -> Result<(), AppError> {
    match scores.out_of_range() {
        Some((dimension, value)) => Err(AppError::Validation(format!(
            "'{dimension}' must be within 0..=100, got {value}"
        ))),
        None => Ok(()),
    }
}

pub fn build_offer(state: &AppState, scores: &ProfileVector) -> Result<OfferView, AppError> {
    let catalog = &state.catalog;
    let mut rng = state.match_rng();
    let match_result = find_best_match(scores, catalog, &mut rng)?;
    let boss = catalog
        .boss(&match_result.boss_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Boss {} not found", match_result.boss_id)))?;
    let comparison = compare_dimensions(scores, &boss.scores, catalog);

    Ok(OfferView {
        match_result,
        boss,
        comparison,
    })
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<OfferView>, AppError> {
    validate_vector(&req.scores)?;
    let offer = build_offer(&state, &req.scores)?;
    Ok(Json(offer))
}

/// POST /api/v1/match/ranking
pub async fn handle_ranking(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<Vec<ProfileScore>>, AppError> {
    validate_vector(&req.scores)?;
    Ok(Json(rank_profiles(&req.scores, &state.catalog)))
}

/// GET /api/v1/bosses
pub async fn handle_list_bosses(State(state): State<AppState>) -> Json<Vec<BossProfile>> {
    Json(state.catalog.bosses().to_vec())
}

/// GET /api/v1/bosses/:id
pub async fn handle_get_boss(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BossProfile>, AppError> {
    state
        .catalog
        .boss(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Boss {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vector() {
        assert!(validate_vector(&ProfileVector::neutral()).is_ok());

        let mut bad = ProfileVector::neutral();
        bad.feedback = 120.0;
        assert!(matches!(validate_vector(&bad), Err(AppError::Validation(_))));

        bad.feedback = f64::NAN;
        assert!(matches!(validate_vector(&bad), Err(AppError::Validation(_))));
    }
}
