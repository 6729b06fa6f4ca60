pub const LESSON_EXTENSION: &str = "mdx";
pub const EXERCISE_EXTENSION: &str = "boba";
pub const OUTPUT_EXTENSION: &str = "txt";

pub const EXERCISE_DIR_SEPARATOR: char = '_';
pub const SECTION_SEPARATOR_WIDTH: usize = 80;
pub const NO_EXERCISES_PLACEHOLDER: &str = "No exercises found for this chapter.";

pub const CONFIG_FILENAME: &str = "boba-docs.yaml";

pub const DEFAULT_LESSONS_DIR: &str = "src/content/docs/learn";
pub const DEFAULT_REFERENCE_DIR: &str = "src/content/docs/reference";
pub const DEFAULT_EXERCISES_DIR: &str = "../bobalings/exercises";
pub const DEFAULT_OUTPUT_DIR: &str = "project/learn-lings";
pub const DEFAULT_COMBINED_OUTPUT: &str = "project/boba-syntax.md";
pub const DEFAULT_TITLE: &str = "Boba Lang";
