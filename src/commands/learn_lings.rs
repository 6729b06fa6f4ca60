use crate::cli::ResolvedLearnLingsArgs;
use crate::operations::{build_combined_documents, CorrelationOptions, GenerationResult};
use crate::utils::file_utils::{display_relative, write_directory_files};
use crate::utils::print_utils::print_success;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run_learn_lings(current_dir: &Path, args: ResolvedLearnLingsArgs) -> Result<()> {
    info!(
        "Generating learn-lings files from '{}' with exercises from '{}' (recursive: {})",
        display_relative(&args.lessons_dir, current_dir),
        args.exercises_dir.display(),
        args.recursive_exercises
    );

    let combined = build_combined_documents(
        &args.lessons_dir,
        &args.exercises_dir,
        CorrelationOptions {
            recursive_exercises: args.recursive_exercises,
        },
    )?;

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            args.output_dir.display()
        )
    })?;
    info!(
        "Output will be saved to '{}'",
        display_relative(&args.output_dir, current_dir)
    );

    combined.report.emit();

    let files_to_write = combined.files_to_write(&args.output_dir);
    write_directory_files(&files_to_write)?;

    let mut generation_result = GenerationResult::default();
    for document in &combined.documents {
        let output_path = args.output_dir.join(document.file_name());
        info!(
            "Generated '{}' with {} exercises for chapter {}",
            display_relative(&output_path, current_dir),
            document.exercise_count(),
            document.chapter_id
        );
        generation_result.add_file(output_path);
    }

    generation_result.display(current_dir);
    print_success(&format!(
        "Generated {} learn-lings files",
        combined.documents.len()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LearnLingsArgs;
    use crate::operations::build_error::BuildError;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    const OUTPUT_DIR: &str = "site/project/learn-lings";

    fn run(base: &Path) -> Result<()> {
        let site = base.join("site");
        std::fs::create_dir_all(&site).unwrap();
        let args = LearnLingsArgs::default().with_config(&site, None);
        run_learn_lings(&site, args)
    }

    #[test]
    fn test_run_learn_lings_writes_one_file_per_numbered_lesson() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_lesson(
            base,
            "01-intro.mdx",
            "---\ntitle: Intro\ndescription: First steps\n---\nHello\n",
        );
        create_lesson(base, "02-none.mdx", "---\ntitle: None\n---\nNo exercises yet");
        create_lesson(base, "readme.mdx", "# Not a lesson");
        create_exercise(base, "01_basics/hello.boba", "print(\"Hello\")\n");

        run(base).unwrap();

        let intro = read_file(base, &format!("{OUTPUT_DIR}/01-intro.txt"));
        assert_eq!(
            intro,
            format!(
                "# Lesson: 01-intro\n\nHello\n\n{}\n\n# Exercises for Chapter 01\n\n\
                 --- Exercise: 01_basics/hello.boba ---\n\nprint(\"Hello\")\n\n\n",
                "=".repeat(80)
            )
        );

        let none = read_file(base, &format!("{OUTPUT_DIR}/02-none.txt"));
        assert!(none.ends_with("# Exercises for Chapter 02\n\nNo exercises found for this chapter."));

        assert_file_not_exists(base, &format!("{OUTPUT_DIR}/readme.txt"));
    }

    #[test]
    fn test_run_learn_lings_missing_exercises_root_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_lesson(base, "01-intro.mdx", "Hello");

        let err = run(base).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::MissingExercisesRoot(_))
        ));
        assert_file_not_exists(base, OUTPUT_DIR);
    }

    #[test]
    fn test_run_learn_lings_overwrites_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_lesson(base, "01-intro.mdx", "Fresh body");
        create_exercise(base, "01_basics/a.boba", "a");
        create_file(base, &format!("{OUTPUT_DIR}/01-intro.txt"), "stale");

        run(base).unwrap();

        let content = read_file(base, &format!("{OUTPUT_DIR}/01-intro.txt"));
        assert!(content.starts_with("# Lesson: 01-intro\n\nFresh body\n\n"));
    }

    #[test]
    fn test_run_learn_lings_creates_output_dir_without_lessons() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_exercise(base, "01_basics/a.boba", "a");

        run(base).unwrap();

        assert_file_exists(base, OUTPUT_DIR);
    }
}
