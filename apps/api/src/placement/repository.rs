use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::placement::{CandidateRow, EmployeeRow, MatchResultRow, TeamRow};
use crate::placement::models::{
    Candidate, CandidateDetails, CandidateStatus, Person, Team, TeamMatchScore, TeamMetrics,
};
use crate::placement::seed;

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// Source of the placement roster. Teams are read-only; only candidate
/// placement state is written back.
#[async_trait]
pub trait PlacementRepository: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<Team>, AppError>;

    async fn list_candidates(&self) -> Result<Vec<Candidate>, AppError>;

    /// Persists `status` and `assigned_team_id` of every given candidate.
    async fn save_candidates(&self, candidates: &[Candidate]) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory roster
// ────────────────────────────────────────────────────────────────────────────

pub struct InMemoryPlacementRepository {
    teams: Vec<Team>,
    candidates: Mutex<Vec<Candidate>>,
}

impl InMemoryPlacementRepository {
    pub fn new(teams: Vec<Team>, candidates: Vec<Candidate>) -> Self {
        Self {
            teams,
            candidates: Mutex::new(candidates),
        }
    }

    /// The three demo teams and their three candidates.
    pub fn seeded() -> Self {
        Self::new(seed::teams(), seed::candidates())
    }
}

#[async_trait]
impl PlacementRepository for InMemoryPlacementRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        Ok(self.teams.clone())
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.candidates.lock().await.clone())
    }

    async fn save_candidates(&self, updated: &[Candidate]) -> Result<(), AppError> {
        let mut stored = self.candidates.lock().await;
        for candidate in updated {
            match stored.iter_mut().find(|c| c.id() == candidate.id()) {
                Some(existing) => {
                    existing.status = candidate.status;
                    existing.assigned_team_id = candidate.assigned_team_id.clone();
                }
                None => warn!("Ignoring save for unknown candidate {}", candidate.id()),
            }
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgPlacementRepository {
    pool: PgPool,
}

impl PgPlacementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn non_negative(v: i32) -> u32 {
    v.max(0) as u32
}

fn employee_to_person(row: EmployeeRow) -> Person {
    Person {
        id: row.id,
        name: row.name,
        role: row.role,
        avatar: row.avatar_url.unwrap_or_default(),
        traits: row.traits.0,
        stress_level: non_negative(row.stress_level),
        performance: non_negative(row.performance),
    }
}

fn vacant_leader(team_id: &str) -> Person {
    Person {
        id: format!("{team_id}-leader"),
        name: String::new(),
        role: String::new(),
        avatar: String::new(),
        traits: vec![],
        stress_level: 0,
        performance: 0,
    }
}

#[async_trait]
impl PlacementRepository for PgPlacementRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let team_rows = sqlx::query_as::<_, TeamRow>("SELECT * FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let employee_rows =
            sqlx::query_as::<_, EmployeeRow>("SELECT * FROM employees ORDER BY team_id, id")
                .fetch_all(&self.pool)
                .await?;

        let mut leaders: HashMap<String, Person> = HashMap::new();
        let mut members: HashMap<String, Vec<Person>> = HashMap::new();
        for row in employee_rows {
            let team_id = row.team_id.clone();
            if row.is_leader {
                leaders.insert(team_id, employee_to_person(row));
            } else {
                members.entry(team_id).or_default().push(employee_to_person(row));
            }
        }

        let teams = team_rows
            .into_iter()
            .map(|t| {
                let leader = leaders.remove(&t.id).unwrap_or_else(|| {
                    warn!("Team {} has no leader row", t.id);
                    vacant_leader(&t.id)
                });
                Team {
                    members: members.remove(&t.id).unwrap_or_default(),
                    leader,
                    metrics: TeamMetrics {
                        psychological_safety: non_negative(t.psychological_safety),
                        productivity: non_negative(t.productivity),
                        innovation: non_negative(t.innovation),
                    },
                    description: t.description.unwrap_or_default(),
                    theme_color: t.theme_color.unwrap_or_default(),
                    name: t.name,
                    id: t.id,
                }
            })
            .collect();
        Ok(teams)
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, AppError> {
        let rows = sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        // team_id order is the tie-break order for best-team selection.
        let results = sqlx::query_as::<_, MatchResultRow>(
            "SELECT * FROM candidate_match_results ORDER BY candidate_id, team_id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut scores: HashMap<String, Vec<TeamMatchScore>> = HashMap::new();
        for r in results {
            scores.entry(r.candidate_id).or_default().push(TeamMatchScore {
                team_id: r.team_id,
                score: non_negative(r.score).min(100),
            });
        }

        let candidates = rows
            .into_iter()
            .map(|row| {
                let details = CandidateDetails::from_blobs(
                    &row.id,
                    row.resume_json.as_deref(),
                    row.preferences_json.as_deref(),
                    row.interviews.0,
                );
                Candidate {
                    match_scores: scores.remove(&row.id).unwrap_or_default(),
                    status: CandidateStatus::parse_lenient(&row.status),
                    assigned_team_id: row.assigned_team_id,
                    details,
                    person: Person {
                        id: row.id,
                        name: row.name,
                        role: row.role,
                        avatar: row.avatar_url.unwrap_or_default(),
                        traits: row.traits.0,
                        // Candidates have no track record yet.
                        stress_level: 0,
                        performance: 0,
                    },
                }
            })
            .collect();
        Ok(candidates)
    }

    async fn save_candidates(&self, candidates: &[Candidate]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for c in candidates {
            sqlx::query("UPDATE candidates SET status = $2, assigned_team_id = $3 WHERE id = $1")
                .bind(c.id())
                .bind(c.status.as_str())
                .bind(c.assigned_team_id.as_deref())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        info!("Saved placement state for {} candidates", candidates.len());
        Ok(())
    }
}
