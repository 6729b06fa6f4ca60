use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "boba-docs",
    about = format!("Boba Docs Tool - {}", super::SUMMARY),
    version
)]
pub struct Cli {
    #[arg(long)]
    pub summary: bool,

    #[arg(long, short, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one combined lesson + exercises file per numbered lesson
    LearnLings(LearnLingsArgs),
    /// Combine every lesson and reference page into a single syntax document
    Combine(CombineArgs),
    /// Show whether the generated learn-lings files are in sync
    Status(StatusArgs),
}

#[derive(Args, Default, Clone)]
pub struct PathArgs {
    #[arg(long, value_name = "DIR", help = "Directory containing the lesson .mdx files")]
    pub lessons: Option<PathBuf>,
    #[arg(long, value_name = "DIR", help = "Root of the bobalings exercises")]
    pub exercises: Option<PathBuf>,
    #[arg(long, value_name = "DIR", help = "Directory the combined files are written to")]
    pub output: Option<PathBuf>,
    #[arg(
        long,
        help = "Only collect exercise files directly inside each chapter directory"
    )]
    pub shallow_exercises: bool,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  boba-docs learn-lings                                  # Use boba-docs.yaml settings (or defaults)
  boba-docs learn-lings --exercises ../bobalings/exercises
  boba-docs learn-lings --shallow-exercises             # Ignore nested exercise folders

Configuration Precedence (highest to lowest):
  1. CLI options (--lessons, --exercises, --output, --shallow-exercises)
  2. Config file: boba-docs.yaml
  3. Default values")]
pub struct LearnLingsArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  boba-docs status                            # Check the files in the configured output directory
  boba-docs status --output project/learn-lings")]
pub struct StatusArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  boba-docs combine                                   # Writes project/boba-syntax.md
  boba-docs combine --output docs/all.md --title \"Boba\"")]
pub struct CombineArgs {
    #[arg(long, value_name = "DIR", help = "Directory containing the lesson .mdx files")]
    pub lessons: Option<PathBuf>,
    #[arg(long, value_name = "DIR", help = "Directory containing the reference .mdx files")]
    pub reference: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "File the combined document is written to")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Heading placed at the top of the combined document")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLearnLingsArgs {
    pub lessons_dir: PathBuf,
    pub exercises_dir: PathBuf,
    pub output_dir: PathBuf,
    pub recursive_exercises: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCombineArgs {
    pub lessons_dir: PathBuf,
    pub reference_dir: PathBuf,
    pub output_file: PathBuf,
    pub title: String,
}
