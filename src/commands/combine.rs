use crate::cli::ResolvedCombineArgs;
use crate::operations::combine_documents;
use crate::utils::file_utils::{display_relative, write_directory_files};
use crate::utils::print_utils::print_success;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub fn run_combine(current_dir: &Path, args: ResolvedCombineArgs) -> Result<()> {
    let dirs = vec![args.lessons_dir, args.reference_dir];
    let combined = combine_documents(&dirs, &args.title);

    combined.report.emit();
    for path in &combined.files_combined {
        debug!("Combined '{}'", display_relative(path, current_dir));
    }

    let mut files_to_write = BTreeMap::new();
    files_to_write.insert(args.output_file.clone(), combined.content);
    write_directory_files(&files_to_write)?;

    print_success(&format!(
        "Successfully combined {} files into {}",
        combined.files_combined.len(),
        display_relative(&args.output_file, current_dir)
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CombineArgs;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_combine_writes_syntax_document() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path();
        create_file(
            site,
            "src/content/docs/learn/01-intro.mdx",
            "---\ntitle: Intro\n---\n# Intro\n",
        );
        create_file(
            site,
            "src/content/docs/reference/types.mdx",
            "---\ntitle: Types\n---\n\n# Types\n",
        );

        let args = CombineArgs::default().with_config(site, None);
        run_combine(site, args).unwrap();

        assert_file_content(
            site,
            "project/boba-syntax.md",
            "# Boba Lang\n\n# Intro\n\n# Types\n\n",
        );
    }

    #[test]
    fn test_run_combine_without_sources_writes_title_only() {
        let temp_dir = TempDir::new().unwrap();
        let site = temp_dir.path();

        let args = CombineArgs {
            title: Some("Empty".to_string()),
            output: Some("out/all.md".into()),
            ..Default::default()
        };
        run_combine(site, args.with_config(site, None)).unwrap();

        assert_file_content(site, "out/all.md", "# Empty\n\n");
    }
}
