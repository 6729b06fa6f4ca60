use std::path::PathBuf;

/// One exercise belonging to a chapter. `text` is `None` when the file could
/// not be read; its header is still listed in the combined document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFile {
    pub source_path: PathBuf,
    pub relative_path: String,
    pub text: Option<String>,
}
