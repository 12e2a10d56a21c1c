//! Catalog — the read-only quiz, dimension and boss tables.
//!
//! Loaded once at startup (built-in tables or a JSON file at `CATALOG_PATH`),
//! validated, then shared as `Arc<Catalog>` and passed by reference into
//! scoring and matching. Nothing mutates it after `Catalog::from_file`.

pub mod builtin;
pub mod dimensions;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use dimensions::{Dimension, DimensionSpec, ProfileVector};

use dimensions::is_valid_value;

// ────────────────────────────────────────────────────────────────────────────
// Catalog records
// ────────────────────────────────────────────────────────────────────────────

/// One selectable answer: display text plus a partial map of smoothing targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub scores: BTreeMap<Dimension, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeReview {
    pub employee_name: String,
    pub role: String,
    pub tenure: String,
    /// 1 – 5
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossStats {
    pub average_tenure: String,
    pub promotion_rate: String,
    /// 0 – 100
    pub satisfaction_score: u32,
    pub team_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub image_color: String,
    pub tags: Vec<String>,
    pub scores: ProfileVector,
    pub catchphrase: String,
    pub management_philosophy: String,
    pub reviews: Vec<EmployeeReview>,
    pub stats: BossStats,
}

/// Reason-sentence templates, bucketed by how close the best dimension is.
///
/// Placeholders: `{user_strength}`, `{boss_strength}`, `{boss_name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonTemplates {
    pub high_synergy: Vec<String>,
    pub supportive: Vec<String>,
    pub complementary: Vec<String>,
}

/// On-disk shape of a catalog file. Also the input of `Catalog::from_file`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub dimensions: Vec<DimensionSpec>,
    pub questions: Vec<Question>,
    pub bosses: Vec<BossProfile>,
    pub templates: ReasonTemplates,
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dimension '{0}' is missing from the dimension table")]
    MissingDimension(Dimension),

    #[error("dimension '{0}' is listed more than once")]
    DuplicateDimension(Dimension),

    #[error("dimension '{dimension}' has invalid weight {weight}")]
    InvalidWeight { dimension: Dimension, weight: f64 },

    #[error("question {question_id} option {option_index} targets '{dimension}' with out-of-range value {value}")]
    OptionOutOfRange {
        question_id: u32,
        option_index: usize,
        dimension: Dimension,
        value: f64,
    },

    #[error("question {0} has no options")]
    EmptyQuestion(u32),

    #[error("catalog has no boss profiles")]
    NoBosses,

    #[error("boss id '{0}' is not unique")]
    DuplicateBoss(String),

    #[error("boss '{boss_id}' has out-of-range '{dimension}' score {value}")]
    BossScoreOutOfRange {
        boss_id: String,
        dimension: Dimension,
        value: f64,
    },

    #[error("boss '{boss_id}' has a review rating of {rating}, expected 1-5")]
    InvalidRating { boss_id: String, rating: u8 },

    #[error("template bucket '{0}' is empty")]
    EmptyTemplateBucket(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// Validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Indexed by `Dimension::index()`.
    dimensions: [DimensionSpec; 6],
    questions: Vec<Question>,
    bosses: Vec<BossProfile>,
    templates: ReasonTemplates,
}

impl Catalog {
    /// The built-in product tables.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_file(builtin::catalog_file())
    }

    /// Loads and validates a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&raw)?;
        Self::from_file(file)
    }

    pub fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let CatalogFile {
            dimensions,
            questions,
            bosses,
            templates,
        } = file;

        let dimensions = order_dimensions(dimensions)?;
        validate_questions(&questions)?;
        validate_bosses(&bosses)?;
        validate_templates(&templates)?;

        Ok(Self {
            dimensions,
            questions,
            bosses,
            templates,
        })
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionSpec {
        &self.dimensions[dimension.index()]
    }

    /// Dimension specs in canonical order.
    pub fn dimensions(&self) -> &[DimensionSpec] {
        &self.dimensions
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Boss profiles in catalog order (the best-match tie-break order).
    pub fn bosses(&self) -> &[BossProfile] {
        &self.bosses
    }

    pub fn boss(&self, id: &str) -> Option<&BossProfile> {
        self.bosses.iter().find(|b| b.id == id)
    }

    pub fn templates(&self) -> &ReasonTemplates {
        &self.templates
    }
}

fn order_dimensions(specs: Vec<DimensionSpec>) -> Result<[DimensionSpec; 6], CatalogError> {
    let mut seen = HashSet::new();
    for spec in &specs {
        if !seen.insert(spec.dimension) {
            return Err(CatalogError::DuplicateDimension(spec.dimension));
        }
        if !spec.weight.is_finite() || spec.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                dimension: spec.dimension,
                weight: spec.weight,
            });
        }
    }

    let mut ordered = Vec::with_capacity(Dimension::ALL.len());
    for dimension in Dimension::ALL {
        let spec = specs
            .iter()
            .find(|s| s.dimension == dimension)
            .cloned()
            .ok_or(CatalogError::MissingDimension(dimension))?;
        ordered.push(spec);
    }

    // Length is exactly six after the loop above.
    ordered
        .try_into()
        .map_err(|_| CatalogError::MissingDimension(Dimension::Action))
}

fn validate_questions(questions: &[Question]) -> Result<(), CatalogError> {
    for question in questions {
        if question.options.is_empty() {
            return Err(CatalogError::EmptyQuestion(question.id));
        }
        for (option_index, option) in question.options.iter().enumerate() {
            if let Some((&dimension, &value)) =
                option.scores.iter().find(|(_, v)| !is_valid_value(**v))
            {
                return Err(CatalogError::OptionOutOfRange {
                    question_id: question.id,
                    option_index,
                    dimension,
                    value,
                });
            }
        }
    }
    Ok(())
}

fn validate_bosses(bosses: &[BossProfile]) -> Result<(), CatalogError> {
    if bosses.is_empty() {
        return Err(CatalogError::NoBosses);
    }
    let mut ids = HashSet::new();
    for boss in bosses {
        if !ids.insert(boss.id.as_str()) {
            return Err(CatalogError::DuplicateBoss(boss.id.clone()));
        }
        if let Some((dimension, value)) = boss.scores.out_of_range() {
            return Err(CatalogError::BossScoreOutOfRange {
                boss_id: boss.id.clone(),
                dimension,
                value,
            });
        }
        if let Some(review) = boss.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Err(CatalogError::InvalidRating {
                boss_id: boss.id.clone(),
                rating: review.rating,
            });
        }
    }
    Ok(())
}

fn validate_templates(templates: &ReasonTemplates) -> Result<(), CatalogError> {
    let buckets = [
        ("high_synergy", &templates.high_synergy),
        ("supportive", &templates.supportive),
        ("complementary", &templates.complementary),
    ];
    for (name, bucket) in buckets {
        if bucket.is_empty() {
            return Err(CatalogError::EmptyTemplateBucket(name));
        }
    }
    Ok(())
}
