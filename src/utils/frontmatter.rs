use regex::Regex;
use std::sync::OnceLock;

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

// The opening delimiter must be the very first line. The closing delimiter is
// the first later line consisting of `---` (trailing blanks allowed), and one
// line break after it belongs to the block.
fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A---[ \t]*\r?\n(?:.*?\r?\n)?---[ \t]*(?:\r?\n|\z)")
            .expect("front matter pattern is valid")
    })
}

/// Removes a leading front matter block (both delimiter lines and everything
/// between them) from `content`.
///
/// Text that does not start with a delimiter line, or whose opening delimiter
/// is never closed, is returned unchanged.
pub fn strip_frontmatter(content: &str) -> &str {
    match frontmatter_regex().find(content) {
        Some(block) => &content[block.end()..],
        None => content,
    }
}
