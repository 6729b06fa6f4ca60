use std::path::PathBuf;

/// Conditions that abort a build before anything is written.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(
        "Exercises directory not found at '{}'. Make sure the bobalings repository is cloned next to the site repository",
        .0.display()
    )]
    MissingExercisesRoot(PathBuf),
}
