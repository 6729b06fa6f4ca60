use std::fs;
use std::path::PathBuf;

use super::diagnostics::{BuildReport, Diagnostic};
use crate::constants::LESSON_EXTENSION;
use crate::utils::file_utils::collect_files;
use crate::utils::frontmatter::strip_frontmatter;

#[derive(Debug, Default)]
pub struct CombinedReference {
    pub content: String,
    pub files_combined: Vec<PathBuf>,
    pub report: BuildReport,
}

/// Concatenates the markup files of each directory, in order, into a single
/// reference document headed by `title`. Front matter is removed from every
/// file. Missing directories and unreadable files are reported and skipped.
pub fn combine_documents(dirs: &[PathBuf], title: &str) -> CombinedReference {
    let mut result = CombinedReference {
        content: format!("# {title}\n\n"),
        ..Default::default()
    };

    for dir in dirs {
        if !dir.is_dir() {
            result
                .report
                .record(Diagnostic::MissingDirectory { path: dir.clone() });
            continue;
        }

        for path in collect_files(dir, LESSON_EXTENSION, false) {
            match fs::read_to_string(&path) {
                Ok(content) => {
                    append_document(&mut result.content, &content);
                    result.files_combined.push(path);
                }
                Err(err) => result.report.record(Diagnostic::UnreadableFile {
                    path,
                    reason: err.to_string(),
                }),
            }
        }
    }

    result
}

fn append_document(out: &mut String, content: &str) {
    out.push_str(strip_frontmatter(content).trim_start());
    out.push('\n');
}
