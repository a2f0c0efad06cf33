//! Per-brain lesson curriculums.
//!
//! A curriculum is an ordered sequence of lessons for one brain. Each lesson
//! binds a set of environment reset parameters to fixed values, and the
//! transition between lessons is gated by thresholds over a training measure.
//!
//! [`Curriculum`] is the capability surface a [`School`](crate::School)
//! drives. [`JsonCurriculum`] is the file-backed implementation, parsing one
//! JSON definition per brain.

mod definition;
mod json;
mod traits;

#[cfg(test)]
mod proptests;

pub use definition::{CurriculumDefinition, Measure, ResetParameters};
pub use json::JsonCurriculum;
pub use traits::Curriculum;
