use crate::cli::ResolvedLearnLingsArgs;
use crate::operations::{
    build_combined_documents, check_files_sync, CorrelationOptions, DiagnosticKind, SyncState,
};
use crate::utils::file_utils::display_relative;
use crate::utils::print_utils::{print_info, print_success, print_warning};
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq)]
pub struct LearnLingsStatus {
    pub files: Vec<(PathBuf, SyncState)>,
    pub skipped_lessons: usize,
}

impl LearnLingsStatus {
    pub fn in_sync(&self) -> bool {
        self.files
            .iter()
            .all(|(_, state)| *state == SyncState::InSync)
    }
}

pub fn run_status(current_dir: &Path, args: ResolvedLearnLingsArgs) -> Result<()> {
    print_info(&format!(
        "Learn-lings status for '{}'",
        display_relative(&args.output_dir, current_dir)
    ));

    let status = check_learn_lings_status(&args)?;
    print_status_results(current_dir, &status);

    Ok(())
}

pub fn check_learn_lings_status(args: &ResolvedLearnLingsArgs) -> Result<LearnLingsStatus> {
    let combined = build_combined_documents(
        &args.lessons_dir,
        &args.exercises_dir,
        CorrelationOptions {
            recursive_exercises: args.recursive_exercises,
        },
    )?;
    combined.report.emit();

    let expected = combined.files_to_write(&args.output_dir);

    Ok(LearnLingsStatus {
        files: check_files_sync(&expected),
        skipped_lessons: combined.report.count(DiagnosticKind::SkippedLesson),
    })
}

fn print_status_results(current_dir: &Path, status: &LearnLingsStatus) {
    for (path, state) in &status.files {
        let label = match state {
            SyncState::InSync => "in sync",
            SyncState::OutOfDate => "out of date",
            SyncState::Missing => "missing",
        };
        println!("    {} ({label})", display_relative(path, current_dir));
    }

    if status.skipped_lessons > 0 {
        print_info(&format!(
            "{} lesson files skipped (no chapter number)",
            status.skipped_lessons
        ));
    }

    if status.in_sync() {
        print_success("Learn-lings files are in sync");
    } else {
        print_warning("Learn-lings files are out of sync. Run 'boba-docs learn-lings' to update");
    }
}
