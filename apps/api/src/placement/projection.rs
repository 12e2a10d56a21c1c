use serde::Serialize;

use crate::placement::assignment::assigned_to;
use crate::placement::models::{Candidate, Team, TeamMetrics};

const SAFETY_BONUS_PER_CANDIDATE: u32 = 2;
const ONBOARDING_PRODUCTIVITY_DIP: u32 = 1;

/// Team metrics as they would look once the assigned candidates join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamProjection {
    pub team_id: String,
    pub member_count: usize,
    pub incoming: Vec<String>,
    pub metrics: TeamMetrics,
}

pub fn project_team(team: &Team, incoming: &[&Candidate]) -> TeamProjection {
    let n = incoming.len() as u32;
    let base = team.metrics;

    let psychological_safety =
        (base.psychological_safety + SAFETY_BONUS_PER_CANDIDATE * n).min(100);
    let productivity = if n > 0 {
        base.productivity.saturating_sub(ONBOARDING_PRODUCTIVITY_DIP).min(100)
    } else {
        base.productivity
    };

    TeamProjection {
        team_id: team.id.clone(),
        member_count: team.members.len() + incoming.len(),
        incoming: incoming.iter().map(|c| c.id().to_string()).collect(),
        metrics: TeamMetrics {
            psychological_safety,
            productivity,
            innovation: base.innovation,
        },
    }
}

/// Projections for every team in roster order.
pub fn project_all(teams: &[Team], candidates: &[Candidate]) -> Vec<TeamProjection> {
    teams
        .iter()
        .map(|team| project_team(team, &assigned_to(candidates, &team.id)))
        .collect()
}
