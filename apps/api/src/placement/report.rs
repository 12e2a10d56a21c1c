use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::placement::assignment::recommendations;
use crate::placement::models::{Candidate, CandidateStatus, Team};
use crate::placement::projection::project_all;

/// Object key for a report generated at `at`.
pub fn report_key(at: DateTime<Utc>) -> String {
    format!("reports/placement-{}.md", at.format("%Y%m%dT%H%M%SZ"))
}

/// Renders the current placement state as a Markdown document.
pub fn render_report(teams: &[Team], candidates: &[Candidate], generated_at: DateTime<Utc>) -> String {
    let mut md = format!(
        "# Placement Report — {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    let assigned = candidates
        .iter()
        .filter(|c| c.status == CandidateStatus::Assigned)
        .count();
    md.push_str(&format!(
        "- **Candidates:** {} ({} assigned, {} pending)\n- **Teams:** {}\n\n",
        candidates.len(),
        assigned,
        candidates.len() - assigned,
        teams.len()
    ));

    md.push_str("## Teams\n\n");
    for (team, projection) in teams.iter().zip(project_all(teams, candidates)) {
        md.push_str(&format!("### {} ({})\n", team.name, team.id));
        md.push_str(&format!("- **Leader:** {} / {}\n", team.leader.name, team.leader.role));
        md.push_str(&format!("- **Members:** {}\n", projection.member_count));
        md.push_str(&format!(
            "- **Psychological safety:** {} → {}\n",
            team.metrics.psychological_safety, projection.metrics.psychological_safety
        ));
        md.push_str(&format!(
            "- **Productivity:** {} → {}\n",
            team.metrics.productivity, projection.metrics.productivity
        ));
        md.push_str(&format!("- **Innovation:** {}\n", projection.metrics.innovation));
        if !projection.incoming.is_empty() {
            md.push_str(&format!("- **Incoming:** {}\n", projection.incoming.join(", ")));
        }
        md.push('\n');
    }

    md.push_str("## Candidates\n\n");
    md.push_str("| Candidate | Role | Status | Team | Score |\n");
    md.push_str("|---|---|---|---|---|\n");
    for c in candidates {
        let (team, score) = match c.assigned_team_id.as_deref() {
            Some(team_id) => (team_id.to_string(), c.score_for(team_id).to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            c.person.name,
            c.person.role,
            c.status.as_str(),
            team,
            score
        ));
    }

    let recs = recommendations(candidates, teams);
    if !recs.is_empty() {
        md.push_str("\n## Recommended Placements\n\n");
        for r in recs {
            md.push_str(&format!(
                "- {} → {} (leader {}, score {})\n",
                r.candidate_name, r.team_name, r.leader_name, r.score
            ));
        }
    }

    md
}

/// Uploads a rendered report and returns its object key.
pub async fn upload_report(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    markdown: String,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let key = report_key(generated_at);
    s3.put_object()
        .bucket(bucket)
        .key(&key)
        .body(ByteStream::from(markdown.into_bytes()))
        .content_type("text/markdown")
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

    info!("Uploaded placement report to s3://{}/{}", bucket, key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::assignment::auto_assign;
    use crate::placement::seed;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_report_key_format() {
        assert_eq!(report_key(at()), "reports/placement-20240115T093000Z.md");
    }

    #[test]
    fn test_report_for_pending_roster() {
        let md = render_report(&seed::teams(), &seed::candidates(), at());
        assert!(md.starts_with("# Placement Report — 2024-01-15 09:30 UTC"));
        assert!(md.contains("(0 assigned, 3 pending)"));
        assert!(md.contains("| 新垣 結衣 | Creative Director | pending | - | - |"));
        assert!(!md.contains("**Incoming:**"));
        assert!(md.contains("## Recommended Placements"));
    }

    #[test]
    fn test_report_after_auto_assign() {
        let teams = seed::teams();
        let mut candidates = seed::candidates();
        auto_assign(&mut candidates, &teams).unwrap();
        let md = render_report(&teams, &candidates, at());
        assert!(md.contains("(3 assigned, 0 pending)"));
        assert!(md.contains("| 星野 源 | Senior Engineer | assigned | team-beta | 94 |"));
        assert!(md.contains("- **Psychological safety:** 85 → 87"));
        assert!(md.contains("- **Incoming:** c3"));
    }
}
