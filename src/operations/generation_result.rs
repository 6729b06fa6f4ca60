use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct GenerationResult {
    pub files: Vec<PathBuf>,
}

impl GenerationResult {
    pub fn add_file(&mut self, file_path: PathBuf) {
        self.files.push(file_path);
    }

    pub fn display(&self, current_dir: &Path) {
        if self.files.is_empty() {
            return;
        }

        let mut files_by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
        for file in &self.files {
            let relative_path = file.strip_prefix(current_dir).unwrap_or(file);
            let dir = relative_path.parent().unwrap_or(Path::new("."));
            files_by_dir
                .entry(dir.to_path_buf())
                .or_default()
                .push(relative_path.to_path_buf());
        }

        println!();
        for (dir, files) in &files_by_dir {
            println!("    {}:", dir.display());

            for (i, file) in files.iter().enumerate() {
                let prefix = if i == files.len() - 1 {
                    "        └── "
                } else {
                    "        ├── "
                };
                let name = file.file_name().map(Path::new).unwrap_or(file.as_path());
                println!("{}{}", prefix, name.display());
            }

            println!();
        }
    }
}
