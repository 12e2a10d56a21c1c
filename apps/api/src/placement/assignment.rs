//! Greedy candidate placement.
//!
//! Every pending candidate independently goes to the team with its own highest
//! precomputed score. There is no capacity limit and no coordination between
//! candidates, so several candidates may land on the same team.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::placement::models::{Candidate, CandidateStatus, Team};

#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    #[error("candidate '{0}' does not exist")]
    UnknownCandidate(String),

    #[error("team '{team_id}' (best match for candidate '{candidate_id}') does not exist")]
    UnknownTeam {
        candidate_id: String,
        team_id: String,
    },

    #[error("team '{0}' does not exist")]
    NoSuchTeam(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub candidate_id: String,
    pub team_id: String,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutoAssignOutcome {
    pub assigned: Vec<Assignment>,
    /// Pending candidates left untouched because they have no match scores.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub candidate_id: String,
    pub candidate_name: String,
    pub team_id: String,
    pub team_name: String,
    pub leader_name: String,
    pub score: u32,
}

fn team_exists(teams: &[Team], team_id: &str) -> bool {
    teams.iter().any(|t| t.id == team_id)
}

/// Assigns every pending candidate to its best team.
///
/// The plan is computed up front; if any best team is missing from `teams`
/// nothing is mutated. Already-assigned candidates keep their team.
pub fn auto_assign(
    candidates: &mut [Candidate],
    teams: &[Team],
) -> Result<AutoAssignOutcome, PlacementError> {
    let mut outcome = AutoAssignOutcome::default();
    let mut plan: Vec<(usize, Assignment)> = Vec::new();

    for (idx, candidate) in candidates.iter().enumerate() {
        if !candidate.is_pending() {
            continue;
        }
        let Some(best) = candidate.best_team() else {
            debug!("Candidate {} has no match scores, skipping", candidate.id());
            outcome.skipped.push(candidate.id().to_string());
            continue;
        };
        if !team_exists(teams, &best.team_id) {
            return Err(PlacementError::UnknownTeam {
                candidate_id: candidate.id().to_string(),
                team_id: best.team_id.clone(),
            });
        }
        plan.push((
            idx,
            Assignment {
                candidate_id: candidate.id().to_string(),
                team_id: best.team_id.clone(),
                score: best.score,
            },
        ));
    }

    for (idx, assignment) in plan {
        let candidate = &mut candidates[idx];
        candidate.status = CandidateStatus::Assigned;
        candidate.assigned_team_id = Some(assignment.team_id.clone());
        outcome.assigned.push(assignment);
    }

    info!(
        "Auto-assigned {} candidates ({} skipped)",
        outcome.assigned.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

/// Manually places one candidate on a team, overriding any earlier placement.
pub fn assign_to_team(
    candidates: &mut [Candidate],
    teams: &[Team],
    candidate_id: &str,
    team_id: &str,
) -> Result<Assignment, PlacementError> {
    if !team_exists(teams, team_id) {
        return Err(PlacementError::NoSuchTeam(team_id.to_string()));
    }
    let candidate = find_mut(candidates, candidate_id)?;
    candidate.status = CandidateStatus::Assigned;
    candidate.assigned_team_id = Some(team_id.to_string());

    Ok(Assignment {
        candidate_id: candidate_id.to_string(),
        team_id: team_id.to_string(),
        score: candidate.score_for(team_id),
    })
}

/// Moves one candidate back to the pending pool.
pub fn unassign(candidates: &mut [Candidate], candidate_id: &str) -> Result<(), PlacementError> {
    let candidate = find_mut(candidates, candidate_id)?;
    candidate.status = CandidateStatus::Pending;
    candidate.assigned_team_id = None;
    Ok(())
}

/// Every candidate back to pending with no team, whatever its prior state.
pub fn reset(candidates: &mut [Candidate]) {
    for candidate in candidates.iter_mut() {
        candidate.status = CandidateStatus::Pending;
        candidate.assigned_team_id = None;
    }
}

/// Best team per candidate. Candidates without scores, or whose best team is
/// not on the roster, are left out.
pub fn recommendations(candidates: &[Candidate], teams: &[Team]) -> Vec<Recommendation> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let best = candidate.best_team()?;
            let team = teams.iter().find(|t| t.id == best.team_id)?;
            Some(Recommendation {
                candidate_id: candidate.id().to_string(),
                candidate_name: candidate.person.name.clone(),
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                leader_name: team.leader.name.clone(),
                score: best.score,
            })
        })
        .collect()
}

/// Candidates currently placed on `team_id`.
pub fn assigned_to<'a>(candidates: &'a [Candidate], team_id: &str) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|c| {
            c.status == CandidateStatus::Assigned && c.assigned_team_id.as_deref() == Some(team_id)
        })
        .collect()
}

fn find_mut<'a>(
    candidates: &'a mut [Candidate],
    candidate_id: &str,
) -> Result<&'a mut Candidate, PlacementError> {
    candidates
        .iter_mut()
        .find(|c| c.id() == candidate_id)
        .ok_or_else(|| PlacementError::UnknownCandidate(candidate_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::models::TeamMatchScore;
    use crate::placement::seed;

    fn with_scores(id: &str, scores: &[(&str, u32)]) -> Candidate {
        let mut c = seed::candidates().remove(0);
        c.person.id = id.to_string();
        c.match_scores = scores
            .iter()
            .map(|(team_id, score)| TeamMatchScore {
                team_id: team_id.to_string(),
                score: *score,
            })
            .collect();
        c
    }

    #[test]
    fn test_auto_assign_seed_roster() {
        let teams = seed::teams();
        let mut candidates = seed::candidates();
        let outcome = auto_assign(&mut candidates, &teams).unwrap();

        let placed: Vec<(&str, &str)> = outcome
            .assigned
            .iter()
            .map(|a| (a.candidate_id.as_str(), a.team_id.as_str()))
            .collect();
        assert_eq!(
            placed,
            vec![("c1", "team-alpha"), ("c2", "team-beta"), ("c3", "team-gamma")]
        );
        assert!(outcome.skipped.is_empty());
        assert!(candidates.iter().all(|c| c.status == CandidateStatus::Assigned));
    }

    #[test]
    fn test_auto_assign_allows_shared_best_team() {
        let teams = seed::teams();
        let mut candidates = vec![
            with_scores("x", &[("team-alpha", 10), ("team-beta", 90)]),
            with_scores("y", &[("team-beta", 80), ("team-gamma", 70)]),
        ];
        auto_assign(&mut candidates, &teams).unwrap();
        assert_eq!(candidates[0].assigned_team_id.as_deref(), Some("team-beta"));
        assert_eq!(candidates[1].assigned_team_id.as_deref(), Some("team-beta"));
        assert_eq!(assigned_to(&candidates, "team-beta").len(), 2);
    }

    #[test]
    fn test_auto_assign_skips_candidates_without_scores() {
        let teams = seed::teams();
        let mut candidates = vec![with_scores("x", &[]), with_scores("y", &[("team-gamma", 50)])];
        let outcome = auto_assign(&mut candidates, &teams).unwrap();
        assert_eq!(outcome.skipped, vec!["x".to_string()]);
        assert!(candidates[0].is_pending());
        assert_eq!(candidates[1].assigned_team_id.as_deref(), Some("team-gamma"));
    }

    #[test]
    fn test_auto_assign_leaves_assigned_candidates_alone() {
        let teams = seed::teams();
        let mut candidates = vec![with_scores("x", &[("team-alpha", 99)])];
        assign_to_team(&mut candidates, &teams, "x", "team-gamma").unwrap();
        let outcome = auto_assign(&mut candidates, &teams).unwrap();
        assert!(outcome.assigned.is_empty());
        assert_eq!(candidates[0].assigned_team_id.as_deref(), Some("team-gamma"));
    }

    #[test]
    fn test_auto_assign_unknown_team_mutates_nothing() {
        let teams = seed::teams();
        let mut candidates = vec![
            with_scores("x", &[("team-alpha", 90)]),
            with_scores("y", &[("team-omega", 99)]),
        ];
        let err = auto_assign(&mut candidates, &teams).unwrap_err();
        assert_eq!(
            err,
            PlacementError::UnknownTeam {
                candidate_id: "y".to_string(),
                team_id: "team-omega".to_string()
            }
        );
        assert!(candidates.iter().all(|c| c.is_pending()));
    }

    #[test]
    fn test_manual_assign_and_unassign() {
        let teams = seed::teams();
        let mut candidates = seed::candidates();

        let a = assign_to_team(&mut candidates, &teams, "c2", "team-gamma").unwrap();
        assert_eq!(a.score, 60);
        assert_eq!(assigned_to(&candidates, "team-gamma").len(), 1);

        unassign(&mut candidates, "c2").unwrap();
        assert!(candidates[1].is_pending());
        assert!(candidates[1].assigned_team_id.is_none());
    }

    #[test]
    fn test_manual_assign_unknown_ids() {
        let teams = seed::teams();
        let mut candidates = seed::candidates();
        assert_eq!(
            assign_to_team(&mut candidates, &teams, "c9", "team-alpha").unwrap_err(),
            PlacementError::UnknownCandidate("c9".to_string())
        );
        assert_eq!(
            assign_to_team(&mut candidates, &teams, "c1", "team-omega").unwrap_err(),
            PlacementError::NoSuchTeam("team-omega".to_string())
        );
        assert_eq!(
            unassign(&mut candidates, "c9").unwrap_err(),
            PlacementError::UnknownCandidate("c9".to_string())
        );
    }

    #[test]
    fn test_reset_restores_every_candidate() {
        let teams = seed::teams();
        let mut candidates = seed::candidates();
        auto_assign(&mut candidates, &teams).unwrap();
        reset(&mut candidates);
        assert!(candidates
            .iter()
            .all(|c| c.is_pending() && c.assigned_team_id.is_none()));

        // Idempotent on an already-pending roster.
        reset(&mut candidates);
        assert!(candidates.iter().all(|c| c.is_pending()));
    }

    #[test]
    fn test_recommendations_for_seed_roster() {
        let recs = recommendations(&seed::candidates(), &seed::teams());
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].team_id, "team-alpha");
        assert_eq!(recs[0].score, 96);
        assert_eq!(recs[1].team_name, "Beta Force");
        assert_eq!(recs[2].score, 98);
    }

    #[test]
    fn test_recommendations_omit_unknown_best_team() {
        let candidates = vec![
            with_scores("x", &[("team-omega", 99)]),
            with_scores("y", &[]),
            with_scores("z", &[("team-beta", 1)]),
        ];
        let recs = recommendations(&candidates, &seed::teams());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].candidate_id, "z");
    }
}
