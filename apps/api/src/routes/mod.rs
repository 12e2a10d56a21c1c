pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::diagnosis::handlers as diagnosis;
use crate::matching::handlers as matching;
use crate::placement::handlers as placement;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route(
            "/api/v1/catalog/dimensions",
            get(diagnosis::handle_list_dimensions),
        )
        .route(
            "/api/v1/catalog/questions",
            get(diagnosis::handle_list_questions),
        )
        .route("/api/v1/bosses", get(matching::handle_list_bosses))
        .route("/api/v1/bosses/:id", get(matching::handle_get_boss))
        // Diagnosis
        .route("/api/v1/diagnosis", post(diagnosis::handle_submit))
        .route(
            "/api/v1/diagnosis/:session_id",
            get(diagnosis::handle_get_diagnosis),
        )
        .route(
            "/api/v1/diagnosis/:session_id/offer",
            get(diagnosis::handle_get_offer),
        )
        // Matching
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/match/ranking", post(matching::handle_ranking))
        // Placement simulator
        .route("/api/v1/placement", get(placement::handle_get_board))
        .route(
            "/api/v1/placement/recommendations",
            get(placement::handle_recommendations),
        )
        .route(
            "/api/v1/placement/auto-assign",
            post(placement::handle_auto_assign),
        )
        .route("/api/v1/placement/reset", post(placement::handle_reset))
        .route(
            "/api/v1/placement/candidates/:id/assign",
            post(placement::handle_assign),
        )
        .route(
            "/api/v1/placement/candidates/:id/unassign",
            post(placement::handle_unassign),
        )
        .route("/api/v1/placement/report", post(placement::handle_report))
        .with_state(state)
}
