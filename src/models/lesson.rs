use std::path::{Path, PathBuf};

use super::ChapterId;
use crate::utils::frontmatter::strip_frontmatter;

/// A lesson markup file whose name follows the chapter naming convention.
#[derive(Debug, Clone)]
pub struct LessonDocument {
    pub source_path: PathBuf,
    pub stem: String,
    pub chapter_id: ChapterId,
    pub raw_text: String,
}

impl LessonDocument {
    /// Identifies a lesson by its file stem and chapter number without
    /// reading it. Returns `None` when the file name is not `<digits>-<slug>`.
    pub fn identify(path: &Path) -> Option<(String, ChapterId)> {
        let stem = path.file_stem()?.to_str()?;
        let chapter_id = ChapterId::parse(stem)?;
        Some((stem.to_string(), chapter_id))
    }

    pub fn stripped_text(&self) -> &str {
        strip_frontmatter(&self.raw_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_numbered_lesson() {
        let (stem, chapter_id) =
            LessonDocument::identify(Path::new("docs/learn/02-variables.mdx")).unwrap();
        assert_eq!(stem, "02-variables");
        assert_eq!(chapter_id.as_str(), "02");
    }

    #[test]
    fn test_identify_rejects_unnumbered_lesson() {
        assert!(LessonDocument::identify(Path::new("docs/learn/readme.mdx")).is_none());
        assert!(LessonDocument::identify(Path::new("docs/learn/")).is_none());
    }

    #[test]
    fn test_stripped_text() {
        let (stem, chapter_id) = LessonDocument::identify(Path::new("01-intro.mdx")).unwrap();
        let lesson = LessonDocument {
            source_path: PathBuf::from("01-intro.mdx"),
            stem,
            chapter_id,
            raw_text: "---\ntitle: Intro\n---\nHello".to_string(),
        };
        assert_eq!(lesson.stripped_text(), "Hello");
    }
}
