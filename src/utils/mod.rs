pub mod file_utils;
pub mod frontmatter;
pub mod print_utils;
