pub mod chapter;
pub mod combined_document;
pub mod exercise_file;
pub mod lesson;

pub use chapter::ChapterId;
pub use combined_document::CombinedDocument;
pub use exercise_file::ExerciseFile;
pub use lesson::LessonDocument;
