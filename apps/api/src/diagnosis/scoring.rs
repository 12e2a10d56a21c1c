//! Score accumulator — folds selected quiz answers into a profile vector.
//!
//! Every answer nudges the dimensions it mentions towards its target with
//! exponential smoothing: `new = old * (1 - α) + target * α`, α = 0.4.
//! Dimensions an answer does not mention stay where they are.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::{Catalog, Dimension, ProfileVector};

/// Smoothing factor applied per answer.
pub const SMOOTHING_FACTOR: f64 = 0.4;

/// Folds the options in answer order. An empty slice returns the neutral vector.
///
/// Results are clamped into [0, 100] after each step, so a target outside the
/// nominal range cannot push a dimension out of bounds.
pub fn calculate_scores<'a, I>(selected: I) -> ProfileVector
where
    I: IntoIterator<Item = &'a BTreeMap<Dimension, f64>>,
{
    let mut scores = ProfileVector::neutral();
    for deltas in selected {
        apply_answer(&mut scores, deltas);
    }
    scores
}

fn apply_answer(scores: &mut ProfileVector, deltas: &BTreeMap<Dimension, f64>) {
    for (&dimension, &target) in deltas {
        let old = scores.get(dimension);
        let new = old * (1.0 - SMOOTHING_FACTOR) + target * SMOOTHING_FACTOR;
        scores.set(dimension, new);
    }
}

/// A quiz answer as submitted by a client.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum AnswerSelection {
    /// Pick option `option_index` of catalog question `question_id`.
    Choice { question_id: u32, option_index: usize },
    /// A raw partial target map.
    Raw { scores: BTreeMap<Dimension, f64> },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AnswerError {
    #[error("question {0} does not exist")]
    UnknownQuestion(u32),

    #[error("question {question_id} has no option {option_index}")]
    UnknownOption { question_id: u32, option_index: usize },

    #[error("answer {answer_index} targets '{dimension}' with invalid value {value}")]
    InvalidTarget {
        answer_index: usize,
        dimension: Dimension,
        value: f64,
    },
}

/// Resolves submitted answers against the catalog into target maps, in order.
pub fn resolve_answers<'a>(
    catalog: &'a Catalog,
    answers: &'a [AnswerSelection],
) -> Result<Vec<&'a BTreeMap<Dimension, f64>>, AnswerError> {
    let mut resolved = Vec::with_capacity(answers.len());
    for (answer_index, answer) in answers.iter().enumerate() {
        match answer {
            AnswerSelection::Choice {
                question_id,
                option_index,
            } => {
                let question = catalog
                    .question(*question_id)
                    .ok_or(AnswerError::UnknownQuestion(*question_id))?;
                let option = question.options.get(*option_index).ok_or(
                    AnswerError::UnknownOption {
                        question_id: *question_id,
                        option_index: *option_index,
                    },
                )?;
                resolved.push(&option.scores);
            }
            AnswerSelection::Raw { scores } => {
                if let Some((&dimension, &value)) = scores
                    .iter()
                    .find(|(_, v)| !crate::catalog::dimensions::is_valid_value(**v))
                {
                    return Err(AnswerError::InvalidTarget {
                        answer_index,
                        dimension,
                        value,
                    });
                }
                resolved.push(scores);
            }
        }
    }
    debug!("Resolved {} quiz answers", resolved.len());
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas(pairs: &[(Dimension, f64)]) -> BTreeMap<Dimension, f64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_no_answers_returns_neutral_vector() {
        let scores = calculate_scores(std::iter::empty::<&BTreeMap<Dimension, f64>>());
        assert_eq!(scores, ProfileVector::neutral());
    }

    #[test]
    fn test_single_answer_applies_smoothing() {
        let answer = deltas(&[(Dimension::Action, 100.0)]);
        let scores = calculate_scores([&answer]);
        // 50 * 0.6 + 100 * 0.4 = 70
        assert!((scores.action - 70.0).abs() < 1e-9);
        assert_eq!(scores.teamwork, 50.0);
    }

    #[test]
    fn test_untouched_dimensions_stay_neutral() {
        let answer = deltas(&[(Dimension::Feedback, 20.0), (Dimension::Management, 30.0)]);
        let scores = calculate_scores([&answer]);
        assert_eq!(scores.action, 50.0);
        assert_eq!(scores.communication, 50.0);
        assert!((scores.feedback - 38.0).abs() < 1e-9);
        assert!((scores.management - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_matters_for_repeated_dimension() {
        let high = deltas(&[(Dimension::Action, 90.0)]);
        let low = deltas(&[(Dimension::Action, 10.0)]);
        let high_then_low = calculate_scores([&high, &low]);
        let low_then_high = calculate_scores([&low, &high]);
        // (50*0.6 + 90*0.4)*0.6 + 10*0.4 = 43.6
        assert!((high_then_low.action - 43.6).abs() < 1e-9);
        // (50*0.6 + 10*0.4)*0.6 + 90*0.4 = 56.4
        assert!((low_then_high.action - 56.4).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_target_is_clamped() {
        let answer = deltas(&[(Dimension::Environment, 400.0)]);
        let scores = calculate_scores([&answer]);
        assert_eq!(scores.environment, 100.0);
    }

    #[test]
    fn test_values_stay_in_range_for_full_quiz() {
        let catalog = Catalog::builtin().unwrap();
        let scores = calculate_scores(catalog.questions().iter().map(|q| &q.options[1].scores));
        assert!(scores.out_of_range().is_none());
    }

    #[test]
    fn test_resolve_choice_answers() {
        let catalog = Catalog::builtin().unwrap();
        let answers = vec![AnswerSelection::Choice {
            question_id: 1,
            option_index: 1,
        }];
        let resolved = resolve_answers(&catalog, &answers).unwrap();
        let scores = calculate_scores(resolved);
        // "まずは走り出し" → action 90, environment 90
        assert!((scores.action - 66.0).abs() < 1e-9);
        assert!((scores.environment - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_unknown_question() {
        let catalog = Catalog::builtin().unwrap();
        let answers = vec![AnswerSelection::Choice {
            question_id: 42,
            option_index: 0,
        }];
        assert_eq!(
            resolve_answers(&catalog, &answers).unwrap_err(),
            AnswerError::UnknownQuestion(42)
        );
    }

    #[test]
    fn test_resolve_unknown_option() {
        let catalog = Catalog::builtin().unwrap();
        let answers = vec![AnswerSelection::Choice {
            question_id: 2,
            option_index: 4,
        }];
        assert!(matches!(
            resolve_answers(&catalog, &answers).unwrap_err(),
            AnswerError::UnknownOption { question_id: 2, option_index: 4 }
        ));
    }

    #[test]
    fn test_resolve_rejects_invalid_raw_target() {
        let catalog = Catalog::builtin().unwrap();
        let answers = vec![
            AnswerSelection::Raw {
                scores: deltas(&[(Dimension::Action, 80.0)]),
            },
            AnswerSelection::Raw {
                scores: deltas(&[(Dimension::Teamwork, -5.0)]),
            },
        ];
        assert!(matches!(
            resolve_answers(&catalog, &answers).unwrap_err(),
            AnswerError::InvalidTarget { answer_index: 1, dimension: Dimension::Teamwork, .. }
        ));
    }

    #[test]
    fn test_answer_selection_deserializes_both_shapes() {
        let json = r#"[{"question_id": 3, "option_index": 0}, {"scores": {"action": 100}}]"#;
        let answers: Vec<AnswerSelection> = serde_json::from_str(json).unwrap();
        assert!(matches!(answers[0], AnswerSelection::Choice { question_id: 3, option_index: 0 }));
        match &answers[1] {
            AnswerSelection::Raw { scores } => assert_eq!(scores[&Dimension::Action], 100.0),
            other => panic!("unexpected answer shape: {other:?}"),
        }
    }
}
