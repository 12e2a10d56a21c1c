use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::placement::models::{InterviewLog, Trait};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub theme_color: Option<String>,
    pub psychological_safety: i32,
    pub productivity: i32,
    pub innovation: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: String,
    pub team_id: String,
    pub is_leader: bool,
    pub name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub traits: Json<Vec<Trait>>,
    pub stress_level: i32,
    pub performance: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub traits: Json<Vec<Trait>>,
    pub status: String,
    pub assigned_team_id: Option<String>,
    pub resume_json: Option<String>,
    pub preferences_json: Option<String>,
    pub interviews: Json<Vec<InterviewLog>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchResultRow {
    pub candidate_id: String,
    pub team_id: String,
    pub score: i32,
}
