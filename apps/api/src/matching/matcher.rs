//! Weighted matcher — scores a user vector against every boss profile and picks the best.
//!
//! Per dimension, `diff = |user - profile|`:
//! - similarity dimensions: `max(0, 100 - diff)`
//! - complementarity dimensions: `max(0, 100 - |diff - 30|)`
//!
//! overall = round(Σ(score_i × weight_i) / Σ(weight_i))
//!
//! Best-match selection walks the catalog in order and only replaces the
//! running best on a strictly greater score, so ties go to the earlier profile.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::{BossProfile, Catalog, Dimension, ProfileVector};
use crate::matching::explain::{generate_detailed_analysis, generate_reason};

/// Gap at which a complementarity dimension scores a perfect 100.
pub const IDEAL_COMPLEMENT_GAP: f64 = 30.0;

const WEAK_THRESHOLD: f64 = 50.0;
const STRONG_THRESHOLD: f64 = 70.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub boss_id: String,
    pub match_score: u32,     // 0 – 100
    pub growth_score: u32,    // 0 – 100
    pub stability_score: u32, // 0 – 100
    pub challenge_score: u32, // 0 – 100
    pub synergy_points: Vec<String>,
    pub reason: String,
    pub detailed_analysis: String,
}

/// One boss with its overall score, used for the full ranking view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileScore {
    pub boss_id: String,
    pub name: String,
    pub match_score: u32,
}

/// Radar-chart row: one dimension, both values and the gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionComparison {
    pub dimension: Dimension,
    pub label: String,
    pub user: f64,
    pub profile: f64,
    pub diff: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("catalog has no profiles to match against")]
    EmptyCatalog,
}

// ────────────────────────────────────────────────────────────────────────────
// Dimension and overall scores
// ────────────────────────────────────────────────────────────────────────────

/// Score for a single dimension gap, 0 – 100.
pub fn dimension_score(diff: f64, similarity: bool) -> f64 {
    if similarity {
        (100.0 - diff).max(0.0)
    } else {
        (100.0 - (diff - IDEAL_COMPLEMENT_GAP).abs()).max(0.0)
    }
}

/// Weighted mean of the six dimension scores, rounded to an integer.
pub fn score_profile(user: &ProfileVector, profile: &ProfileVector, catalog: &Catalog) -> u32 {
    let mut weighted_score = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for spec in catalog.dimensions() {
        let diff = (user.get(spec.dimension) - profile.get(spec.dimension)).abs();
        weighted_score += dimension_score(diff, spec.similarity) * spec.weight;
        total_weight += spec.weight;
    }

    if total_weight > 0.0 {
        (weighted_score / total_weight).round().clamp(0.0, 100.0) as u32
    } else {
        0
    }
}

/// Every catalog profile with its overall score, in catalog order.
pub fn rank_profiles(user: &ProfileVector, catalog: &Catalog) -> Vec<ProfileScore> {
    catalog
        .bosses()
        .iter()
        .map(|boss| ProfileScore {
            boss_id: boss.id.clone(),
            name: boss.name.clone(),
            match_score: score_profile(user, &boss.scores, catalog),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Derived sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Growth: how hard the profile pulls on the user's weak dimensions,
/// plus a hands-on management bonus.
pub fn growth_score(user: &ProfileVector, profile: &ProfileVector) -> u32 {
    let mut potential: f64 = Dimension::ALL
        .iter()
        .filter(|&&d| user.get(d) < WEAK_THRESHOLD && profile.get(d) > STRONG_THRESHOLD)
        .map(|&d| (profile.get(d) - user.get(d)) / 2.0)
        .sum();

    potential += profile.management * 0.3;

    (potential + 50.0).round().min(100.0) as u32
}

/// Stability: alignment on communication, teamwork and environment,
/// blended with the profile's own teamwork.
pub fn stability_score(user: &ProfileVector, profile: &ProfileVector) -> u32 {
    let communication = (user.communication - profile.communication).abs();
    let teamwork = (user.teamwork - profile.teamwork).abs();
    let environment = (user.environment - profile.environment).abs();

    let avg_diff = (communication + teamwork + environment) / 3.0;
    let base = (100.0 - avg_diff).max(0.0);

    (base * 0.7 + profile.teamwork * 0.3).round() as u32
}

/// Challenge: pace and appetite for change, plus autonomy (low management).
pub fn challenge_score(profile: &ProfileVector) -> u32 {
    let level =
        profile.action * 0.4 + profile.environment * 0.4 + (100.0 - profile.management) * 0.2;
    level.round().min(100.0) as u32
}

pub fn compare_dimensions(
    user: &ProfileVector,
    profile: &ProfileVector,
    catalog: &Catalog,
) -> Vec<DimensionComparison> {
    catalog
        .dimensions()
        .iter()
        .map(|spec| {
            let u = user.get(spec.dimension);
            let p = profile.get(spec.dimension);
            DimensionComparison {
                dimension: spec.dimension,
                label: spec.label.clone(),
                user: u,
                profile: p,
                diff: (u - p).abs(),
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Best match
// ────────────────────────────────────────────────────────────────────────────

/// Picks the best profile for `user` and explains the pairing.
///
/// The only randomness is the reason-template choice, drawn from `rng`.
pub fn find_best_match<R: Rng + ?Sized>(
    user: &ProfileVector,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<MatchResult, MatchError> {
    let mut best: Option<(&BossProfile, u32)> = None;

    for boss in catalog.bosses() {
        let score = score_profile(user, &boss.scores, catalog);
        debug!("Profile {} scored {score}", boss.id);
        let is_better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if is_better {
            best = Some((boss, score));
        }
    }

    let (boss, match_score) = best.ok_or(MatchError::EmptyCatalog)?;

    Ok(MatchResult {
        boss_id: boss.id.clone(),
        match_score,
        growth_score: growth_score(user, &boss.scores),
        stability_score: stability_score(user, &boss.scores),
        challenge_score: challenge_score(&boss.scores),
        synergy_points: boss.tags.clone(),
        reason: generate_reason(user, boss, catalog, rng),
        detailed_analysis: generate_detailed_analysis(user, boss, catalog),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn v(a: f64, c: f64, m: f64, e: f64, f: f64, t: f64) -> ProfileVector {
        ProfileVector {
            action: a,
            communication: c,
            management: m,
            environment: e,
            feedback: f,
            teamwork: t,
        }
    }

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_similarity_dimension_bounds() {
        assert_eq!(dimension_score(0.0, true), 100.0);
        assert_eq!(dimension_score(100.0, true), 0.0);
        assert_eq!(dimension_score(40.0, true), 60.0);
    }

    #[test]
    fn test_complementarity_peaks_at_ideal_gap() {
        assert_eq!(dimension_score(30.0, false), 100.0);
        assert_eq!(dimension_score(0.0, false), 70.0);
        assert_eq!(dimension_score(60.0, false), 70.0);
        assert_eq!(dimension_score(100.0, false), 30.0);
    }

    #[test]
    fn test_dimension_score_always_in_range() {
        for diff in 0..=100 {
            for similarity in [true, false] {
                let s = dimension_score(diff as f64, similarity);
                assert!((0.0..=100.0).contains(&s), "diff {diff} gave {s}");
            }
        }
    }

    #[test]
    fn test_identical_vector_with_similarity_only_scores_100() {
        let mut file = builtin::catalog_file();
        for d in &mut file.dimensions {
            d.similarity = true;
        }
        let catalog = Catalog::from_file(file).unwrap();
        let user = v(90.0, 20.0, 30.0, 90.0, 20.0, 70.0);
        assert_eq!(score_profile(&user, &user, &catalog), 100);
    }

    #[test]
    fn test_identical_vector_against_builtin_weights() {
        // Complementarity dimensions score 70 at diff 0:
        // (100*(1.2+1.5+1.1+1.3) + 70*(1.0+1.0)) / 7.1 = 91.55
        let catalog = catalog();
        let user = v(90.0, 20.0, 30.0, 90.0, 20.0, 70.0);
        assert_eq!(score_profile(&user, &user, &catalog), 92);
    }

    #[test]
    fn test_end_to_end_identical_catalog_entry_scores_100() {
        // Single-profile catalog whose vector equals the user's, with every
        // dimension treated as similarity-preferred.
        let user = v(90.0, 20.0, 30.0, 90.0, 20.0, 70.0);
        let mut file = builtin::catalog_file();
        for d in &mut file.dimensions {
            d.similarity = true;
        }
        file.bosses.truncate(1);
        file.bosses[0].scores = user;
        let catalog = Catalog::from_file(file).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let result = find_best_match(&user, &catalog, &mut rng).unwrap();
        assert_eq!(result.match_score, 100);
        assert_eq!(result.boss_id, "b1");
    }

    #[test]
    fn test_scores_are_independent_of_catalog_order() {
        let user = v(60.0, 40.0, 55.0, 70.0, 35.0, 80.0);
        let forward = catalog();
        let mut file = builtin::catalog_file();
        file.bosses.reverse();
        let reversed = Catalog::from_file(file).unwrap();

        for boss in forward.bosses() {
            let other = reversed.boss(&boss.id).unwrap();
            assert_eq!(
                score_profile(&user, &boss.scores, &forward),
                score_profile(&user, &other.scores, &reversed)
            );
        }
    }

    #[test]
    fn test_ties_keep_first_profile_in_catalog_order() {
        let mut file = builtin::catalog_file();
        let twin = file.bosses[0].scores;
        file.bosses[2].scores = twin;
        file.bosses[2].id = "b3-twin".to_string();

        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::from_file(file.clone()).unwrap();
        let result = find_best_match(&twin, &catalog, &mut rng).unwrap();
        assert_eq!(result.boss_id, "b1");

        // Move the twin ahead of the original: it now wins the tie.
        file.bosses.swap(0, 2);
        let catalog = Catalog::from_file(file).unwrap();
        let result = find_best_match(&twin, &catalog, &mut rng).unwrap();
        assert_eq!(result.boss_id, "b3-twin");
    }

    #[test]
    fn test_best_match_for_logical_user_is_b3() {
        let catalog = catalog();
        let user = v(40.0, 20.0, 50.0, 30.0, 20.0, 40.0);
        let mut rng = StdRng::seed_from_u64(3);
        let result = find_best_match(&user, &catalog, &mut rng).unwrap();
        assert_eq!(result.boss_id, "b3");
        assert_eq!(result.synergy_points, vec!["論理的", "冷静沈着", "公平性"]);
    }

    #[test]
    fn test_rank_profiles_keeps_catalog_order() {
        let catalog = catalog();
        let ranking = rank_profiles(&ProfileVector::neutral(), &catalog);
        let ids: Vec<&str> = ranking.iter().map(|p| p.boss_id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "b3", "b4"]);
        assert!(ranking.iter().all(|p| p.match_score <= 100));
    }

    #[test]
    fn test_growth_score_counts_weak_dimensions_only() {
        let user = v(30.0, 60.0, 50.0, 40.0, 50.0, 50.0);
        let boss = v(90.0, 90.0, 0.0, 80.0, 50.0, 50.0);
        // action: (90-30)/2 = 30; environment: (80-40)/2 = 20; communication not weak
        assert_eq!(growth_score(&user, &boss), 100);

        let boss = v(72.0, 90.0, 0.0, 50.0, 50.0, 50.0);
        // action: (72-30)/2 = 21 → 71
        assert_eq!(growth_score(&user, &boss), 71);
    }

    #[test]
    fn test_growth_score_adds_management_bonus() {
        let user = ProfileVector::neutral();
        let boss = v(50.0, 50.0, 80.0, 50.0, 50.0, 50.0);
        // 80 * 0.3 = 24 → 74
        assert_eq!(growth_score(&user, &boss), 74);
    }

    #[test]
    fn test_growth_score_monotonic_in_gap() {
        let boss = v(80.0, 50.0, 20.0, 50.0, 50.0, 50.0);
        let mut last = 0;
        for user_action in (0..50).rev() {
            let user = v(user_action as f64, 50.0, 50.0, 50.0, 50.0, 50.0);
            let score = growth_score(&user, &boss);
            assert!(score >= last, "growth dropped at user action {user_action}");
            last = score;
        }
    }

    #[test]
    fn test_growth_score_capped_at_100() {
        let user = v(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let boss = v(100.0, 100.0, 100.0, 100.0, 100.0, 100.0);
        assert_eq!(growth_score(&user, &boss), 100);
    }

    #[test]
    fn test_stability_score() {
        let user = v(50.0, 60.0, 50.0, 80.0, 50.0, 70.0);
        let boss = v(0.0, 90.0, 0.0, 50.0, 0.0, 100.0);
        // diffs 30, 30, 30 → base 70 → 70*0.7 + 100*0.3 = 79
        assert_eq!(stability_score(&user, &boss), 79);
    }

    #[test]
    fn test_challenge_score() {
        let boss = v(90.0, 60.0, 30.0, 90.0, 40.0, 70.0);
        // 36 + 36 + 14 = 86
        assert_eq!(challenge_score(&boss), 86);
        let boss = v(100.0, 0.0, 0.0, 100.0, 0.0, 0.0);
        assert_eq!(challenge_score(&boss), 100);
    }

    #[test]
    fn test_sub_scores_for_b1() {
        let catalog = catalog();
        let b1 = &catalog.boss("b1").unwrap().scores;
        let user = v(90.0, 20.0, 30.0, 90.0, 20.0, 70.0);
        // growth: no weak dimension under a >70 profile value → 30*0.3 + 50 = 59
        assert_eq!(growth_score(&user, b1), 59);
        // stability: diffs 40, 0, 0 → avg 13.33 → 86.67*0.7 + 21 = 81.67 → 82
        assert_eq!(stability_score(&user, b1), 82);
        assert_eq!(challenge_score(b1), 86);
    }

    #[test]
    fn test_compare_dimensions_lists_all_six() {
        let catalog = catalog();
        let b2 = &catalog.boss("b2").unwrap().scores;
        let rows = compare_dimensions(&ProfileVector::neutral(), b2, &catalog);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5].dimension, Dimension::Teamwork);
        assert_eq!(rows[5].diff, 45.0);
    }
}
