//! Dimensions and the six-axis profile vector shared by diagnosis and matching.

use serde::{Deserialize, Serialize};

pub const DIMENSION_MIN: f64 = 0.0;
pub const DIMENSION_MAX: f64 = 100.0;
/// Neutral midpoint every diagnosis starts from.
pub const NEUTRAL_VALUE: f64 = 50.0;

/// One axis of the work-style vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Action,
    Communication,
    Management,
    Environment,
    Feedback,
    Teamwork,
}

impl Dimension {
    /// Canonical iteration order. Every "first-seen wins" rule over dimensions follows it.
    pub const ALL: [Dimension; 6] = [
        Dimension::Action,
        Dimension::Communication,
        Dimension::Management,
        Dimension::Environment,
        Dimension::Feedback,
        Dimension::Teamwork,
    ];

    pub fn index(self) -> usize {
        match self {
            Dimension::Action => 0,
            Dimension::Communication => 1,
            Dimension::Management => 2,
            Dimension::Environment => 3,
            Dimension::Feedback => 4,
            Dimension::Teamwork => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Action => "action",
            Dimension::Communication => "communication",
            Dimension::Management => "management",
            Dimension::Environment => "environment",
            Dimension::Feedback => "feedback",
            Dimension::Teamwork => "teamwork",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six-dimensional style vector for a user, boss or team leader.
///
/// All six dimensions are always present. Writes through `set` are clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileVector {
    pub action: f64,
    pub communication: f64,
    pub management: f64,
    pub environment: f64,
    pub feedback: f64,
    pub teamwork: f64,
}

impl ProfileVector {
    /// All dimensions at the neutral midpoint (50).
    pub fn neutral() -> Self {
        Self::from_fn(|_| NEUTRAL_VALUE)
    }

    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        Self {
            action: f(Dimension::Action),
            communication: f(Dimension::Communication),
            management: f(Dimension::Management),
            environment: f(Dimension::Environment),
            feedback: f(Dimension::Feedback),
            teamwork: f(Dimension::Teamwork),
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Action => self.action,
            Dimension::Communication => self.communication,
            Dimension::Management => self.management,
            Dimension::Environment => self.environment,
            Dimension::Feedback => self.feedback,
            Dimension::Teamwork => self.teamwork,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        let value = clamp_dimension(value);
        match dimension {
            Dimension::Action => self.action = value,
            Dimension::Communication => self.communication = value,
            Dimension::Management => self.management = value,
            Dimension::Environment => self.environment = value,
            Dimension::Feedback => self.feedback = value,
            Dimension::Teamwork => self.teamwork = value,
        }
    }

    /// Iterates `(dimension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// First dimension whose value is non-finite or outside [0, 100], if any.
    pub fn out_of_range(&self) -> Option<(Dimension, f64)> {
        self.iter().find(|(_, v)| !is_valid_value(*v))
    }
}

impl Default for ProfileVector {
    fn default() -> Self {
        Self::neutral()
    }
}

pub fn is_valid_value(value: f64) -> bool {
    value.is_finite() && (DIMENSION_MIN..=DIMENSION_MAX).contains(&value)
}

pub fn clamp_dimension(value: f64) -> f64 {
    value.clamp(DIMENSION_MIN, DIMENSION_MAX)
}

/// Static per-dimension configuration: display labels plus matching weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub dimension: Dimension,
    pub label: String,
    /// Label used when a value is at or below the midpoint.
    pub min_label: String,
    /// Label used when a value is above the midpoint.
    pub max_label: String,
    /// true: closeness is rewarded. false: a moderate fixed gap is rewarded.
    pub similarity: bool,
    pub weight: f64,
}

impl DimensionSpec {
    pub fn pole_label(&self, value: f64) -> &str {
        if value > NEUTRAL_VALUE {
            &self.max_label
        } else {
            &self.min_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_all_fifty() {
        let v = ProfileVector::neutral();
        assert!(v.iter().all(|(_, value)| value == 50.0));
    }

    #[test]
    fn test_set_clamps_into_range() {
        let mut v = ProfileVector::neutral();
        v.set(Dimension::Action, 140.0);
        v.set(Dimension::Feedback, -3.0);
        assert_eq!(v.action, 100.0);
        assert_eq!(v.feedback, 0.0);
    }

    #[test]
    fn test_iter_follows_canonical_order() {
        let v = ProfileVector::from_fn(|d| d.index() as f64);
        let order: Vec<Dimension> = v.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
    }

    #[test]
    fn test_out_of_range_detects_nan_and_overflow() {
        let mut v = ProfileVector::neutral();
        assert!(v.out_of_range().is_none());
        v.teamwork = 101.0;
        assert_eq!(v.out_of_range(), Some((Dimension::Teamwork, 101.0)));
        v.teamwork = f64::NAN;
        assert!(v.out_of_range().is_some());
    }

    #[test]
    fn test_dimension_serde_is_snake_case() {
        let json = serde_json::to_string(&Dimension::Teamwork).unwrap();
        assert_eq!(json, r#""teamwork""#);
        let dim: Dimension = serde_json::from_str(r#""communication""#).unwrap();
        assert_eq!(dim, Dimension::Communication);
    }

    #[test]
    fn test_pole_label_uses_max_only_above_midpoint() {
        let spec = DimensionSpec {
            dimension: Dimension::Action,
            label: "Action".to_string(),
            min_label: "careful".to_string(),
            max_label: "decisive".to_string(),
            similarity: true,
            weight: 1.2,
        };
        assert_eq!(spec.pole_label(50.0), "careful");
        assert_eq!(spec.pole_label(50.1), "decisive");
    }
}
