use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub id: String,
    pub label: String,
    /// Badge styling hint for the dashboard.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub traits: Vec<Trait>,
    pub stress_level: u32, // 0 – 100
    pub performance: u32,  // 0 – 100
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    pub psychological_safety: u32,
    pub productivity: u32,
    pub innovation: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    pub theme_color: String,
    pub metrics: TeamMetrics,
    pub leader: Person,
    pub members: Vec<Person>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Pending,
    Assigned,
}

impl CandidateStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Assigned => "assigned",
        }
    }

    /// Case-insensitive parse of a persisted status. Unknown values read as pending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("assigned") {
            CandidateStatus::Assigned
        } else {
            CandidateStatus::Pending
        }
    }
}

/// Precomputed fit of a candidate for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchScore {
    pub team_id: String,
    pub score: u32, // 0 – 100
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate details (resume, interviews, preferences)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkHistory {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub education: Vec<Education>,
    #[serde(alias = "workHistory")]
    pub work_history: Vec<WorkHistory>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewLog {
    pub interviewer: String,
    pub role: String,
    pub date: String,
    pub score: u8, // 1 – 5
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub salary: String,
    #[serde(alias = "startDate")]
    pub start_date: String,
    #[serde(alias = "workStyle")]
    pub work_style: Vec<String>,
    pub motivation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateDetails {
    pub resume: Resume,
    pub interview: Vec<InterviewLog>,
    pub preferences: Preferences,
}

impl CandidateDetails {
    /// Builds details from persisted JSON blobs. A missing or malformed blob
    /// yields the empty default for that part instead of an error.
    pub fn from_blobs(
        candidate_id: &str,
        resume_json: Option<&str>,
        preferences_json: Option<&str>,
        interview: Vec<InterviewLog>,
    ) -> Self {
        Self {
            resume: parse_blob(candidate_id, "resume", resume_json),
            interview,
            preferences: parse_blob(candidate_id, "preferences", preferences_json),
        }
    }
}

fn parse_blob<T>(candidate_id: &str, field: &str, raw: Option<&str>) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Candidate {candidate_id}: malformed {field} JSON, using defaults: {e}");
            T::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub person: Person,
    pub status: CandidateStatus,
    pub assigned_team_id: Option<String>,
    /// Ordered. Earlier entries win ties when picking a best team.
    pub match_scores: Vec<TeamMatchScore>,
    pub details: CandidateDetails,
}

impl Candidate {
    pub fn id(&self) -> &str {
        &self.person.id
    }

    /// Precomputed score for `team_id`; 0 when the candidate has no entry for it.
    pub fn score_for(&self, team_id: &str) -> u32 {
        self.match_scores
            .iter()
            .find(|s| s.team_id == team_id)
            .map(|s| s.score)
            .unwrap_or(0)
    }

    /// Highest-scoring team. Ties keep the first entry in `match_scores` order.
    pub fn best_team(&self) -> Option<&TeamMatchScore> {
        let mut best: Option<&TeamMatchScore> = None;
        for entry in &self.match_scores {
            match best {
                Some(current) if entry.score <= current.score => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    pub fn is_pending(&self) -> bool {
        self.status == CandidateStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(scores: &[(&str, u32)]) -> Candidate {
        Candidate {
            person: Person {
                id: "c1".to_string(),
                name: "Test".to_string(),
                role: "Engineer".to_string(),
                avatar: String::new(),
                traits: vec![],
                stress_level: 0,
                performance: 0,
            },
            status: CandidateStatus::Pending,
            assigned_team_id: None,
            match_scores: scores
                .iter()
                .map(|(team_id, score)| TeamMatchScore {
                    team_id: team_id.to_string(),
                    score: *score,
                })
                .collect(),
            details: CandidateDetails::default(),
        }
    }

    #[test]
    fn test_score_for_missing_team_defaults_to_zero() {
        let c = candidate(&[("team-alpha", 96)]);
        assert_eq!(c.score_for("team-alpha"), 96);
        assert_eq!(c.score_for("team-omega"), 0);
    }

    #[test]
    fn test_best_team_picks_highest() {
        let c = candidate(&[("team-alpha", 72), ("team-beta", 94), ("team-gamma", 60)]);
        assert_eq!(c.best_team().unwrap().team_id, "team-beta");
    }

    #[test]
    fn test_best_team_tie_keeps_first_seen() {
        let c = candidate(&[("team-gamma", 80), ("team-alpha", 80), ("team-beta", 10)]);
        assert_eq!(c.best_team().unwrap().team_id, "team-gamma");
    }

    #[test]
    fn test_best_team_none_without_scores() {
        assert!(candidate(&[]).best_team().is_none());
    }

    #[test]
    fn test_status_parse_is_lenient() {
        assert_eq!(CandidateStatus::parse_lenient("ASSIGNED"), CandidateStatus::Assigned);
        assert_eq!(CandidateStatus::parse_lenient("pending"), CandidateStatus::Pending);
        assert_eq!(CandidateStatus::parse_lenient("weird"), CandidateStatus::Pending);
    }

    #[test]
    fn test_details_from_valid_blobs() {
        let resume = r#"{"education":[{"school":"A","degree":"B","year":"2015"}],"skills":["Rust"]}"#;
        let prefs = r#"{"salary":"1000","work_style":["Remote"]}"#;
        let d = CandidateDetails::from_blobs("c1", Some(resume), Some(prefs), vec![]);
        assert_eq!(d.resume.education[0].school, "A");
        assert_eq!(d.resume.skills, vec!["Rust"]);
        assert!(d.resume.work_history.is_empty());
        assert_eq!(d.preferences.salary, "1000");
        assert_eq!(d.preferences.work_style, vec!["Remote"]);
    }

    #[test]
    fn test_details_accept_camel_case_blobs() {
        let resume = r#"{"workHistory":[{"company":"X","role":"Y","period":"2020","description":"d"}]}"#;
        let prefs = r#"{"startDate":"ASAP","workStyle":["Flex"]}"#;
        let d = CandidateDetails::from_blobs("c1", Some(resume), Some(prefs), vec![]);
        assert_eq!(d.resume.work_history[0].company, "X");
        assert_eq!(d.preferences.start_date, "ASAP");
        assert_eq!(d.preferences.work_style, vec!["Flex"]);
    }

    #[test]
    fn test_details_malformed_blobs_fail_closed() {
        let d = CandidateDetails::from_blobs("c1", Some("{broken"), Some("[1,2]"), vec![]);
        assert_eq!(d.resume, Resume::default());
        assert_eq!(d.preferences, Preferences::default());
    }

    #[test]
    fn test_details_missing_blobs_default() {
        let d = CandidateDetails::from_blobs("c1", None, Some("   "), vec![]);
        assert_eq!(d, CandidateDetails::default());
    }

    #[test]
    fn test_candidate_serializes_flat() {
        let c = candidate(&[("team-alpha", 96)]);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], "c1");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["match_scores"][0]["team_id"], "team-alpha");
    }
}
