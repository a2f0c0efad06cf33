//! Curriculum capability trait

use super::ResetParameters;

/// A per-brain lesson curriculum.
///
/// A [`School`](crate::School) drives its curriculums exclusively through
/// this surface. [`JsonCurriculum`](super::JsonCurriculum) is the standard
/// file-backed implementation; tests substitute recording stubs.
pub trait Curriculum: Send {
    /// The current lesson number, an index into the lesson sequence.
    fn lesson_num(&self) -> usize;

    /// Set the current lesson number.
    ///
    /// Implementations clamp out-of-range values into the valid lesson
    /// range.
    fn set_lesson_num(&mut self, lesson_num: usize);

    /// Advance the lesson according to a measure of training progress.
    ///
    /// Returns `true` if the curriculum moved to a new lesson.
    fn increment_lesson(&mut self, progress: f64) -> bool;

    /// The reset-parameter configuration of the current lesson.
    fn get_config(&self) -> ResetParameters;
}
