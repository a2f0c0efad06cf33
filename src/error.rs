//! Error types for curriculum loading and school operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`EscuelaError`].
pub type Result<T> = std::result::Result<T, EscuelaError>;

/// Errors raised while loading curriculums or driving a school.
#[derive(Error, Debug)]
pub enum EscuelaError {
    /// The curriculum folder could not be listed.
    #[error("Failed to read curriculum folder {path}: {source}")]
    CurriculumFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A curriculum definition file could not be read.
    #[error("Failed to read curriculum file {path}: {source}")]
    CurriculumFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A curriculum definition file does not match the expected JSON schema.
    #[error("Failed to parse curriculum file {path}: {source}")]
    CurriculumParsing {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A curriculum configures a reset parameter the environment does not
    /// have.
    #[error(
        "Curriculum {path} configures parameter '{param}' which is not part of \
         the environment's default reset parameters"
    )]
    UnknownParameter { param: String, path: PathBuf },

    /// A per-parameter value array does not hold one value per lesson.
    #[error(
        "Curriculum {path} parameter '{param}' must have {expected} values \
         (one per lesson) but has {actual}"
    )]
    ParameterLength {
        param: String,
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// An operation named a brain that has no curriculum.
    #[error("No curriculum loaded for brain '{brain}'")]
    UnknownBrain { brain: String },
}
