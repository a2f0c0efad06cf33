//! Curriculum learning for multi-brain reinforcement learning environments.
//!
//! An environment exposes one or more named brains, each of which may be
//! trained under a curriculum: an ordered sequence of lessons that bind the
//! environment's reset parameters to progressively harder values. A
//! [`School`] loads every curriculum definition found in a folder, keys each
//! one by the brain it belongs to, and aggregates lesson state across them:
//!
//! - read or assign per-brain lesson numbers
//! - advance lessons from per-brain measures of training progress
//! - merge the per-lesson configs of all brains into a single environment
//!   reset configuration
//!
//! # Example
//!
//! ```no_run
//! use escuela::{ResetParameters, School};
//! use std::collections::BTreeMap;
//! use std::path::Path;
//!
//! let mut defaults = ResetParameters::new();
//! defaults.insert("gravity".to_string(), 9.81);
//! defaults.insert("obstacle_count".to_string(), 1.0);
//!
//! let mut school = School::new(Some(Path::new("curricula")), &defaults)?;
//!
//! let mut progresses = BTreeMap::new();
//! for brain in school.lesson_nums().keys() {
//!     progresses.insert(brain.clone(), 0.3);
//! }
//! school.increment_lessons(&progresses)?;
//!
//! let reset_config = school.get_config();
//! # let _ = reset_config;
//! # Ok::<(), escuela::EscuelaError>(())
//! ```

pub mod curriculum;
pub mod error;
pub mod school;

pub use curriculum::{Curriculum, CurriculumDefinition, JsonCurriculum, Measure, ResetParameters};
pub use error::{EscuelaError, Result};
pub use school::School;
