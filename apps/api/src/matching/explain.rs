//! Human-readable rationale for a match: a templated reason sentence and a
//! deterministic detailed analysis.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::{BossProfile, Catalog, Dimension, ProfileVector, ReasonTemplates};

const HIGH_SYNERGY_BELOW: f64 = 20.0;
const SUPPORTIVE_BELOW: f64 = 40.0;
const STRONG_MATCH_BELOW: f64 = 25.0;
const MAX_STRONG_MATCHES: usize = 2;
const LABEL_SEPARATOR: &str = "・";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateBucket {
    HighSynergy,
    Supportive,
    Complementary,
}

impl TemplateBucket {
    /// diff < 20 → high synergy, diff < 40 → supportive, otherwise complementary.
    pub fn for_diff(min_diff: f64) -> Self {
        if min_diff < HIGH_SYNERGY_BELOW {
            TemplateBucket::HighSynergy
        } else if min_diff < SUPPORTIVE_BELOW {
            TemplateBucket::Supportive
        } else {
            TemplateBucket::Complementary
        }
    }

    pub fn templates(self, templates: &ReasonTemplates) -> &[String] {
        match self {
            TemplateBucket::HighSynergy => &templates.high_synergy,
            TemplateBucket::Supportive => &templates.supportive,
            TemplateBucket::Complementary => &templates.complementary,
        }
    }
}

/// The dimension where user and profile are closest.
///
/// Starts from (action, 100) and only moves on a strictly smaller gap, so ties
/// go to the earlier dimension and a vector that differs by 100 everywhere
/// reports action.
pub fn closest_dimension(user: &ProfileVector, profile: &ProfileVector) -> (Dimension, f64) {
    let mut best = (Dimension::Action, 100.0);
    for dimension in Dimension::ALL {
        let diff = (user.get(dimension) - profile.get(dimension)).abs();
        if diff < best.1 {
            best = (dimension, diff);
        }
    }
    best
}

/// Fills every occurrence of each placeholder.
pub fn render_template(
    template: &str,
    user_strength: &str,
    boss_strength: &str,
    boss_name: &str,
) -> String {
    template
        .replace("{user_strength}", user_strength)
        .replace("{boss_strength}", boss_strength)
        .replace("{boss_name}", boss_name)
}

/// Picks a template from the bucket matching the closest dimension and fills it.
pub fn generate_reason<R: Rng + ?Sized>(
    user: &ProfileVector,
    boss: &BossProfile,
    catalog: &Catalog,
    rng: &mut R,
) -> String {
    let (dimension, min_diff) = closest_dimension(user, &boss.scores);
    let bucket = TemplateBucket::for_diff(min_diff);
    let spec = catalog.dimension(dimension);

    // Buckets are non-empty once the catalog has been validated.
    let template = bucket
        .templates(catalog.templates())
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default();

    render_template(
        template,
        spec.pole_label(user.get(dimension)),
        spec.pole_label(boss.scores.get(dimension)),
        &boss.name,
    )
}

/// Up to two closest dimensions (gap < 25), ascending by gap.
pub fn strong_matches(user: &ProfileVector, profile: &ProfileVector) -> Vec<Dimension> {
    let mut close: Vec<(Dimension, f64)> = Dimension::ALL
        .iter()
        .map(|&d| (d, (user.get(d) - profile.get(d)).abs()))
        .filter(|(_, diff)| *diff < STRONG_MATCH_BELOW)
        .collect();
    // Stable: equal gaps keep canonical dimension order.
    close.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    close
        .into_iter()
        .take(MAX_STRONG_MATCHES)
        .map(|(d, _)| d)
        .collect()
}

/// Dimensions where the user is weak (< 50) and the profile is strong (> 70).
pub fn growth_areas(user: &ProfileVector, profile: &ProfileVector) -> Vec<Dimension> {
    Dimension::ALL
        .into_iter()
        .filter(|&d| user.get(d) < 50.0 && profile.get(d) > 70.0)
        .collect()
}

/// Strong-match sentence, growth sentence, then the profile's philosophy verbatim.
pub fn generate_detailed_analysis(
    user: &ProfileVector,
    boss: &BossProfile,
    catalog: &Catalog,
) -> String {
    let join_labels = |dims: &[Dimension]| -> String {
        dims.iter()
            .map(|&d| catalog.dimension(d).label.as_str())
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    };

    let mut parts: Vec<String> = Vec::new();

    let strong = strong_matches(user, &boss.scores);
    if !strong.is_empty() {
        parts.push(format!("{}の相性が特に良好です。", join_labels(&strong)));
    }

    let growth = growth_areas(user, &boss.scores);
    if !growth.is_empty() {
        parts.push(format!("{}の面で大きな成長が期待できます。", join_labels(&growth)));
    }

    parts.push(boss.management_philosophy.clone());
    parts.join(" ")
}
