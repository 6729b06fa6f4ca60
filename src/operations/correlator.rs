use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::build_error::BuildError;
use super::diagnostics::{BuildReport, Diagnostic};
use crate::constants::{EXERCISE_EXTENSION, LESSON_EXTENSION};
use crate::models::{ChapterId, CombinedDocument, ExerciseFile, LessonDocument};
use crate::utils::file_utils::{collect_files, display_relative, find_subdirectories_with_prefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationOptions {
    /// Collect exercise files at any depth below each chapter directory
    /// instead of only its direct children.
    pub recursive_exercises: bool,
}

impl Default for CorrelationOptions {
    fn default() -> Self {
        Self {
            recursive_exercises: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct CombinedDocuments {
    pub documents: Vec<CombinedDocument>,
    pub report: BuildReport,
}

impl CombinedDocuments {
    pub fn files_to_write(&self, output_dir: &Path) -> BTreeMap<PathBuf, String> {
        self.documents
            .iter()
            .map(|document| (output_dir.join(document.file_name()), document.render()))
            .collect()
    }
}

/// Pairs every numbered lesson in `lessons_root` with the exercises of its
/// chapter found under `exercises_root`.
///
/// Only a missing exercises root is an error. Everything else (unnumbered
/// lessons, chapters without exercises, unreadable files) is recorded in the
/// report and the remaining lessons are still built.
pub fn build_combined_documents(
    lessons_root: &Path,
    exercises_root: &Path,
    options: CorrelationOptions,
) -> Result<CombinedDocuments, BuildError> {
    if !exercises_root.is_dir() {
        return Err(BuildError::MissingExercisesRoot(exercises_root.to_path_buf()));
    }

    let mut result = CombinedDocuments::default();

    if !lessons_root.is_dir() {
        result.report.record(Diagnostic::MissingDirectory {
            path: lessons_root.to_path_buf(),
        });
        return Ok(result);
    }

    for lesson_path in collect_files(lessons_root, LESSON_EXTENSION, false) {
        let Some(lesson) = read_lesson(&lesson_path, &mut result.report) else {
            continue;
        };

        let exercises = collect_chapter_exercises(
            exercises_root,
            &lesson.chapter_id,
            options,
            &mut result.report,
        );

        debug!(
            "Lesson '{}' matched {} exercises",
            lesson.source_path.display(),
            exercises.len()
        );
        for exercise in &exercises {
            debug!("  {}", exercise.source_path.display());
        }

        result
            .documents
            .push(CombinedDocument::compose(&lesson, &exercises));
    }

    Ok(result)
}

fn read_lesson(path: &Path, report: &mut BuildReport) -> Option<LessonDocument> {
    let Some((stem, chapter_id)) = LessonDocument::identify(path) else {
        report.record(Diagnostic::SkippedLesson {
            path: path.to_path_buf(),
        });
        return None;
    };

    let raw_text = fs::read_to_string(path).unwrap_or_else(|err| {
        report.record(Diagnostic::UnreadableFile {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
        String::new()
    });

    Some(LessonDocument {
        source_path: path.to_path_buf(),
        stem,
        chapter_id,
        raw_text,
    })
}

fn collect_chapter_exercises(
    exercises_root: &Path,
    chapter_id: &ChapterId,
    options: CorrelationOptions,
    report: &mut BuildReport,
) -> Vec<ExerciseFile> {
    let exercise_dirs =
        match find_subdirectories_with_prefix(exercises_root, &chapter_id.exercise_dir_prefix()) {
            Ok(dirs) => dirs,
            Err(err) => {
                report.record(Diagnostic::UnreadableFile {
                    path: exercises_root.to_path_buf(),
                    reason: format!("{err:#}"),
                });
                return Vec::new();
            }
        };

    let mut exercises = Vec::new();
    for exercise_dir in &exercise_dirs {
        for path in collect_files(exercise_dir, EXERCISE_EXTENSION, options.recursive_exercises) {
            let text = match fs::read_to_string(&path) {
                Ok(text) => Some(text),
                Err(err) => {
                    report.record(Diagnostic::UnreadableFile {
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                    None
                }
            };
            exercises.push(ExerciseFile {
                relative_path: display_relative(&path, exercises_root),
                source_path: path,
                text,
            });
        }
    }

    if exercises.is_empty() {
        report.record(Diagnostic::EmptyExerciseSet {
            chapter_id: chapter_id.clone(),
            matched_dirs: exercise_dirs.len(),
        });
    }

    exercises
}
