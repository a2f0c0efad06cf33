//! File-backed curriculum implementation

use std::fs;
use std::path::Path;

use super::{Curriculum, CurriculumDefinition, Measure, ResetParameters};
use crate::error::{EscuelaError, Result};

/// A curriculum loaded from a JSON definition file.
///
/// Tracks the current lesson number and, when the definition enables signal
/// smoothing, a running exponential moving average of the measure.
///
/// # Example
///
/// ```
/// use escuela::{Curriculum, CurriculumDefinition, JsonCurriculum};
///
/// let definition: CurriculumDefinition = serde_json::from_str(
///     r#"{
///         "measure": "progress",
///         "thresholds": [0.3, 0.6],
///         "min_lesson_length": 2,
///         "signal_smoothing": false,
///         "parameters": {"speed": [1.0, 2.0, 3.0]}
///     }"#,
/// )
/// .unwrap();
///
/// let mut curriculum = JsonCurriculum::new(definition);
/// assert_eq!(curriculum.lesson_num(), 0);
///
/// assert!(curriculum.increment_lesson(0.5));
/// assert_eq!(curriculum.lesson_num(), 1);
/// assert_eq!(curriculum.get_config().get("speed"), Some(&2.0));
/// ```
#[derive(Debug, Clone)]
pub struct JsonCurriculum {
    definition: CurriculumDefinition,
    lesson_num: usize,
    smoothing_value: f64,
}

impl JsonCurriculum {
    /// Wrap an already-parsed definition, starting at lesson 0.
    pub fn new(definition: CurriculumDefinition) -> Self {
        Self {
            definition,
            lesson_num: 0,
            smoothing_value: 0.0,
        }
    }

    /// Load a definition file and validate it against the environment's
    /// default reset parameters.
    pub fn from_file(path: &Path, defaults: &ResetParameters) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| EscuelaError::CurriculumFile {
            path: path.to_path_buf(),
            source,
        })?;
        let definition: CurriculumDefinition = serde_json::from_str(&contents).map_err(|source| {
            EscuelaError::CurriculumParsing {
                path: path.to_path_buf(),
                source,
            }
        })?;
        definition.validate(defaults, path)?;
        Ok(Self::new(definition))
    }

    /// The parsed definition.
    pub fn definition(&self) -> &CurriculumDefinition {
        &self.definition
    }

    /// Which training signal gates advancement.
    pub fn measure(&self) -> Measure {
        self.definition.measure
    }

    /// Minimum number of episodes a trainer should spend in a lesson before
    /// it considers advancing.
    pub fn min_lesson_length(&self) -> usize {
        self.definition.min_lesson_length
    }

    /// Whether the measure is smoothed before threshold comparison.
    pub fn signal_smoothing(&self) -> bool {
        self.definition.signal_smoothing
    }

    /// The highest reachable lesson number.
    pub fn max_lesson_num(&self) -> usize {
        self.definition.max_lesson_num()
    }

    /// The reset-parameter configuration at an explicit lesson.
    ///
    /// Out-of-range lessons clamp to the final lesson.
    pub fn get_config_at(&self, lesson: usize) -> ResetParameters {
        let lesson = lesson.min(self.max_lesson_num());
        self.definition
            .parameters
            .iter()
            .map(|(param, values)| (param.clone(), values[lesson]))
            .collect()
    }
}

impl Curriculum for JsonCurriculum {
    fn lesson_num(&self) -> usize {
        self.lesson_num
    }

    fn set_lesson_num(&mut self, lesson_num: usize) {
        self.lesson_num = lesson_num.min(self.max_lesson_num());
    }

    fn increment_lesson(&mut self, progress: f64) -> bool {
        let progress = if self.definition.signal_smoothing {
            self.smoothing_value = 0.25 * self.smoothing_value + 0.75 * progress;
            self.smoothing_value
        } else {
            progress
        };

        if self.lesson_num < self.max_lesson_num()
            && progress > self.definition.thresholds[self.lesson_num]
        {
            self.lesson_num += 1;
            return true;
        }
        false
    }

    fn get_config(&self) -> ResetParameters {
        self.get_config_at(self.lesson_num)
    }
}
