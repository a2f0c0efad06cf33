//! JSON schema for curriculum definition files

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EscuelaError, Result};

/// Environment reset parameters: parameter name to value.
///
/// A `BTreeMap` keeps iteration order deterministic, which makes the
/// multi-brain config merge reproducible from run to run.
pub type ResetParameters = BTreeMap<String, f64>;

/// Training measure that gates lesson advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Fraction of the maximum training steps completed so far.
    Progress,
    /// Mean cumulative episode reward.
    Reward,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Progress => write!(f, "progress"),
            Measure::Reward => write!(f, "reward"),
        }
    }
}

/// One brain's curriculum definition, as stored in its JSON file.
///
/// A curriculum with `n` thresholds has `n + 1` lessons: lesson `i` advances
/// to lesson `i + 1` once the measure exceeds `thresholds[i]`. Every entry in
/// `parameters` holds one value per lesson.
///
/// # Example
///
/// ```
/// use escuela::CurriculumDefinition;
///
/// let definition: CurriculumDefinition = serde_json::from_str(
///     r#"{
///         "measure": "reward",
///         "thresholds": [10.0, 30.0],
///         "min_lesson_length": 3,
///         "signal_smoothing": true,
///         "parameters": {"wall_height": [1.0, 2.5, 4.0]}
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(definition.max_lesson_num(), 2);
/// assert_eq!(definition.lesson_count(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumDefinition {
    /// Which training signal gates advancement.
    pub measure: Measure,

    /// Advancement thresholds, one per lesson transition.
    pub thresholds: Vec<f64>,

    /// Minimum number of episodes a trainer should spend in a lesson before
    /// it considers advancing.
    pub min_lesson_length: usize,

    /// Smooth the measure with an exponential moving average before
    /// comparing it against thresholds.
    pub signal_smoothing: bool,

    /// Reset-parameter values, one per lesson, keyed by parameter name.
    pub parameters: BTreeMap<String, Vec<f64>>,
}

impl CurriculumDefinition {
    /// The highest reachable lesson number.
    pub fn max_lesson_num(&self) -> usize {
        self.thresholds.len()
    }

    /// Total number of lessons.
    pub fn lesson_count(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// Check this definition against the environment's default reset
    /// parameters.
    ///
    /// Every configured parameter must exist in `defaults`, and every value
    /// array must hold exactly one value per lesson. `path` is carried into
    /// the error for context.
    pub fn validate(&self, defaults: &ResetParameters, path: &Path) -> Result<()> {
        for (param, values) in &self.parameters {
            if !defaults.contains_key(param) {
                return Err(EscuelaError::UnknownParameter {
                    param: param.clone(),
                    path: path.to_path_buf(),
                });
            }
            if values.len() != self.lesson_count() {
                return Err(EscuelaError::ParameterLength {
                    param: param.clone(),
                    path: path.to_path_buf(),
                    expected: self.lesson_count(),
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }
}
