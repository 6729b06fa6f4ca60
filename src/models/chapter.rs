use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::constants::EXERCISE_DIR_SEPARATOR;

static CHAPTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn chapter_regex() -> &'static Regex {
    CHAPTER_REGEX.get_or_init(|| Regex::new(r"^([0-9]+)-").unwrap())
}

/// Chapter number taken verbatim from a lesson file name such as
/// `01-intro`. Leading zeros are significant: `01` and `1` name different
/// exercise directories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterId(String);

impl ChapterId {
    /// Parses the `<digits>-<slug>` lesson naming convention.
    /// Returns `None` for stems that do not follow it.
    pub fn parse(stem: &str) -> Option<Self> {
        chapter_regex()
            .captures(stem)
            .and_then(|captures| captures.get(1))
            .map(|digits| ChapterId(digits.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix shared by every exercise directory of this chapter, e.g. `01_`.
    pub fn exercise_dir_prefix(&self) -> String {
        format!("{}{EXERCISE_DIR_SEPARATOR}", self.0)
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
