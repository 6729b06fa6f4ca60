use std::path::PathBuf;

use super::{ChapterId, ExerciseFile, LessonDocument};
use crate::constants::{NO_EXERCISES_PLACEHOLDER, OUTPUT_EXTENSION, SECTION_SEPARATOR_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBlock {
    LessonHeader(String),
    LessonBody(String),
    Separator,
    ExercisesHeader(ChapterId),
    Exercise {
        relative_path: String,
        content: Option<String>,
    },
    NoExercises,
}

impl DocumentBlock {
    fn render_into(&self, out: &mut String) {
        match self {
            DocumentBlock::LessonHeader(stem) => {
                out.push_str(&format!("# Lesson: {stem}\n\n"));
            }
            DocumentBlock::LessonBody(body) => {
                out.push_str(body.trim());
                out.push_str("\n\n");
            }
            DocumentBlock::Separator => {
                out.push_str(&"=".repeat(SECTION_SEPARATOR_WIDTH));
                out.push_str("\n\n");
            }
            DocumentBlock::ExercisesHeader(chapter_id) => {
                out.push_str(&format!("# Exercises for Chapter {chapter_id}\n\n"));
            }
            DocumentBlock::Exercise {
                relative_path,
                content,
            } => {
                out.push_str(&format!("--- Exercise: {relative_path} ---\n\n"));
                if let Some(content) = content {
                    out.push_str(content);
                    out.push_str("\n\n");
                }
            }
            DocumentBlock::NoExercises => out.push_str(NO_EXERCISES_PLACEHOLDER),
        }
    }
}

/// A lesson body followed by every exercise of its chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedDocument {
    pub lesson_stem: String,
    pub chapter_id: ChapterId,
    pub blocks: Vec<DocumentBlock>,
}

impl CombinedDocument {
    pub fn compose(lesson: &LessonDocument, exercises: &[ExerciseFile]) -> Self {
        let mut blocks = vec![
            DocumentBlock::LessonHeader(lesson.stem.clone()),
            DocumentBlock::LessonBody(lesson.stripped_text().to_string()),
            DocumentBlock::Separator,
            DocumentBlock::ExercisesHeader(lesson.chapter_id.clone()),
        ];

        if exercises.is_empty() {
            blocks.push(DocumentBlock::NoExercises);
        } else {
            blocks.extend(exercises.iter().map(|exercise| DocumentBlock::Exercise {
                relative_path: exercise.relative_path.clone(),
                content: exercise.text.clone(),
            }));
        }

        Self {
            lesson_stem: lesson.stem.clone(),
            chapter_id: lesson.chapter_id.clone(),
            blocks,
        }
    }

    pub fn file_name(&self) -> PathBuf {
        PathBuf::from(format!("{}.{OUTPUT_EXTENSION}", self.lesson_stem))
    }

    pub fn exercise_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, DocumentBlock::Exercise { .. }))
            .count()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.render_into(&mut out);
        }
        out
    }
}
