use std::fmt;
use std::path::PathBuf;
use tracing::{error, warn};

use crate::models::ChapterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    SkippedLesson,
    EmptyExerciseSet,
    UnreadableFile,
    MissingDirectory,
}

/// A non-fatal anomaly found while building. Recorded, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Lesson file name does not follow `<digits>-<slug>`.
    SkippedLesson { path: PathBuf },
    /// No exercise files for a chapter; `matched_dirs` counts the
    /// `<chapter>_*` directories that were searched.
    EmptyExerciseSet {
        chapter_id: ChapterId,
        matched_dirs: usize,
    },
    UnreadableFile { path: PathBuf, reason: String },
    MissingDirectory { path: PathBuf },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::SkippedLesson { .. } => DiagnosticKind::SkippedLesson,
            Diagnostic::EmptyExerciseSet { .. } => DiagnosticKind::EmptyExerciseSet,
            Diagnostic::UnreadableFile { .. } => DiagnosticKind::UnreadableFile,
            Diagnostic::MissingDirectory { .. } => DiagnosticKind::MissingDirectory,
        }
    }

    pub fn emit(&self) {
        match self.kind() {
            DiagnosticKind::UnreadableFile => error!("{self}"),
            _ => warn!("{self}"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SkippedLesson { path } => write!(
                f,
                "Skipping '{}' as it does not match chapter format '##-name'",
                path.display()
            ),
            Diagnostic::EmptyExerciseSet {
                chapter_id,
                matched_dirs: 0,
            } => write!(f, "No exercise directories found for chapter {chapter_id}"),
            Diagnostic::EmptyExerciseSet {
                chapter_id,
                matched_dirs,
            } => write!(
                f,
                "No exercise files found for chapter {chapter_id} in {matched_dirs} matching directories"
            ),
            Diagnostic::UnreadableFile { path, reason } => {
                write!(f, "Error reading '{}': {reason}", path.display())
            }
            Diagnostic::MissingDirectory { path } => write!(
                f,
                "Directory '{}' not found or is not a directory. Skipping",
                path.display()
            ),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind() == kind).count()
    }

    pub fn emit(&self) {
        for diagnostic in &self.diagnostics {
            diagnostic.emit();
        }
    }
}
