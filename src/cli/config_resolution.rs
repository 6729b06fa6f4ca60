use super::args::{
    CombineArgs, LearnLingsArgs, PathArgs, ResolvedCombineArgs, ResolvedLearnLingsArgs,
    StatusArgs,
};
use crate::config;
use crate::constants::{
    DEFAULT_COMBINED_OUTPUT, DEFAULT_EXERCISES_DIR, DEFAULT_LESSONS_DIR, DEFAULT_OUTPUT_DIR,
    DEFAULT_REFERENCE_DIR, DEFAULT_TITLE,
};
use std::path::{Path, PathBuf};

// CLI value, then config value, then default; relative paths are anchored at
// the project root.
fn resolve_path(
    current_dir: &Path,
    cli_value: Option<PathBuf>,
    config_value: Option<PathBuf>,
    default: &str,
) -> PathBuf {
    let path = cli_value
        .or(config_value)
        .unwrap_or_else(|| PathBuf::from(default));
    current_dir.join(path)
}

impl PathArgs {
    fn resolve(
        self,
        current_dir: &Path,
        config: Option<&config::Config>,
    ) -> ResolvedLearnLingsArgs {
        let recursive_exercises = if self.shallow_exercises {
            false
        } else {
            config.and_then(|c| c.recursive_exercises).unwrap_or(true)
        };

        ResolvedLearnLingsArgs {
            lessons_dir: resolve_path(
                current_dir,
                self.lessons,
                config.and_then(|c| c.lessons_dir.clone()),
                DEFAULT_LESSONS_DIR,
            ),
            exercises_dir: resolve_path(
                current_dir,
                self.exercises,
                config.and_then(|c| c.exercises_dir.clone()),
                DEFAULT_EXERCISES_DIR,
            ),
            output_dir: resolve_path(
                current_dir,
                self.output,
                config.and_then(|c| c.output_dir.clone()),
                DEFAULT_OUTPUT_DIR,
            ),
            recursive_exercises,
        }
    }
}

impl LearnLingsArgs {
    pub fn with_config(
        self,
        current_dir: &Path,
        config: Option<&config::Config>,
    ) -> ResolvedLearnLingsArgs {
        self.paths.resolve(current_dir, config)
    }
}

impl StatusArgs {
    pub fn with_config(
        self,
        current_dir: &Path,
        config: Option<&config::Config>,
    ) -> ResolvedLearnLingsArgs {
        self.paths.resolve(current_dir, config)
    }
}

impl CombineArgs {
    pub fn with_config(
        self,
        current_dir: &Path,
        config: Option<&config::Config>,
    ) -> ResolvedCombineArgs {
        ResolvedCombineArgs {
            lessons_dir: resolve_path(
                current_dir,
                self.lessons,
                config.and_then(|c| c.lessons_dir.clone()),
                DEFAULT_LESSONS_DIR,
            ),
            reference_dir: resolve_path(
                current_dir,
                self.reference,
                config.and_then(|c| c.reference_dir.clone()),
                DEFAULT_REFERENCE_DIR,
            ),
            output_file: resolve_path(
                current_dir,
                self.output,
                config.and_then(|c| c.combined_output.clone()),
                DEFAULT_COMBINED_OUTPUT,
            ),
            title: self
                .title
                .or_else(|| config?.title.clone())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}
