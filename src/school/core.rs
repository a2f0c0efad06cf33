//! Brain-to-curriculum aggregation

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::curriculum::{Curriculum, JsonCurriculum, ResetParameters};
use crate::error::{EscuelaError, Result};

/// Holds the curriculums of every brain in the environment.
///
/// Each curriculum is keyed by the name of the brain it belongs to. The
/// mapping is fixed at construction; only the lesson state of the
/// curriculums changes afterwards.
///
/// # Example
///
/// ```no_run
/// use escuela::{ResetParameters, School};
/// use std::path::Path;
///
/// let mut defaults = ResetParameters::new();
/// defaults.insert("gravity".to_string(), 9.81);
///
/// let school = School::new(Some(Path::new("curricula")), &defaults)?;
/// let reset_config = school.get_config();
/// # let _ = reset_config;
/// # Ok::<(), escuela::EscuelaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct School<C: Curriculum = JsonCurriculum> {
    brains_to_curriculums: BTreeMap<String, C>,
}

impl School<JsonCurriculum> {
    /// Build a school from a folder of curriculum definition files.
    ///
    /// Every regular file in the folder becomes one curriculum, validated
    /// against `default_reset_parameters`; the file stem names the brain it
    /// belongs to. `None` means the run has no curriculums and yields an
    /// empty school.
    pub fn new(
        curriculum_folder: Option<&Path>,
        default_reset_parameters: &ResetParameters,
    ) -> Result<Self> {
        let folder = match curriculum_folder {
            Some(folder) => folder,
            None => return Ok(Self::default()),
        };

        let mut brains_to_curriculums = BTreeMap::new();
        let entries = fs::read_dir(folder).map_err(|source| EscuelaError::CurriculumFolder {
            path: folder.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| EscuelaError::CurriculumFolder {
                path: folder.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let metadata = fs::metadata(&path).map_err(|source| EscuelaError::CurriculumFile {
                path: path.clone(),
                source,
            })?;
            if !metadata.is_file() {
                continue;
            }
            let brain_name = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };
            let curriculum = JsonCurriculum::from_file(&path, default_reset_parameters)?;
            debug!(
                "Loaded curriculum for brain '{}' from {}",
                brain_name,
                path.display()
            );
            brains_to_curriculums.insert(brain_name, curriculum);
        }
        info!(
            "School initialized with {} curriculums",
            brains_to_curriculums.len()
        );
        Ok(Self {
            brains_to_curriculums,
        })
    }
}

impl<C: Curriculum> School<C> {
    /// Build a school from an explicit brain-to-curriculum mapping.
    pub fn with_curriculums(curriculums: BTreeMap<String, C>) -> Self {
        Self {
            brains_to_curriculums: curriculums,
        }
    }

    /// The brain-to-curriculum mapping.
    pub fn brains_to_curriculums(&self) -> &BTreeMap<String, C> {
        &self.brains_to_curriculums
    }

    /// The current lesson number of every brain's curriculum.
    pub fn lesson_nums(&self) -> BTreeMap<String, usize> {
        self.brains_to_curriculums
            .iter()
            .map(|(brain_name, curriculum)| (brain_name.clone(), curriculum.lesson_num()))
            .collect()
    }

    /// Assign lesson numbers per brain.
    ///
    /// Fails with [`EscuelaError::UnknownBrain`] if a named brain has no
    /// curriculum; brains processed before the failing one keep their new
    /// lesson number.
    pub fn set_lesson_nums(&mut self, lesson_nums: &BTreeMap<String, usize>) -> Result<()> {
        for (brain_name, &lesson_num) in lesson_nums {
            let curriculum = self.curriculum_mut(brain_name)?;
            curriculum.set_lesson_num(lesson_num);
        }
        Ok(())
    }

    /// Advance each named brain's curriculum by its measure of training
    /// progress.
    ///
    /// Fails with [`EscuelaError::UnknownBrain`] if a named brain has no
    /// curriculum.
    pub fn increment_lessons(&mut self, progresses: &BTreeMap<String, f64>) -> Result<()> {
        for (brain_name, &progress) in progresses {
            let curriculum = self.curriculum_mut(brain_name)?;
            if curriculum.increment_lesson(progress) {
                info!(
                    "Brain '{}' advanced to lesson {}",
                    brain_name,
                    curriculum.lesson_num()
                );
            }
        }
        Ok(())
    }

    /// Set every curriculum in the school to the given lesson number.
    pub fn set_all_curriculums_to_lesson_num(&mut self, lesson_num: usize) {
        for curriculum in self.brains_to_curriculums.values_mut() {
            curriculum.set_lesson_num(lesson_num);
        }
    }

    /// The combined reset-parameter configuration of every curriculum.
    ///
    /// Curriculums merge in brain-name order; on a key collision the later
    /// brain's value wins.
    pub fn get_config(&self) -> ResetParameters {
        let mut config = ResetParameters::new();
        for curriculum in self.brains_to_curriculums.values() {
            config.extend(curriculum.get_config());
        }
        config
    }

    fn curriculum_mut(&mut self, brain_name: &str) -> Result<&mut C> {
        self.brains_to_curriculums
            .get_mut(brain_name)
            .ok_or_else(|| EscuelaError::UnknownBrain {
                brain: brain_name.to_string(),
            })
    }
}

impl<C: Curriculum> Default for School<C> {
    fn default() -> Self {
        Self {
            brains_to_curriculums: BTreeMap::new(),
        }
    }
}
