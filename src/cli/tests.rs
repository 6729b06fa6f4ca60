#[cfg(test)]
use super::args::*;
#[cfg(test)]
use crate::config;
#[cfg(test)]
use std::path::{Path, PathBuf};

#[cfg(test)]
const ROOT: &str = "/work/boba-site";

#[cfg(test)]
fn full_config() -> config::Config {
    config::Config {
        lessons_dir: Some(PathBuf::from("cfg/learn")),
        reference_dir: Some(PathBuf::from("cfg/reference")),
        exercises_dir: Some(PathBuf::from("../cfg-exercises")),
        output_dir: Some(PathBuf::from("cfg/out")),
        combined_output: Some(PathBuf::from("cfg/syntax.md")),
        title: Some("Config Title".to_string()),
        recursive_exercises: Some(false),
    }
}

#[test]
fn test_learn_lings_args_defaults() {
    let resolved = LearnLingsArgs::default().with_config(Path::new(ROOT), None);

    assert_eq!(
        resolved,
        ResolvedLearnLingsArgs {
            lessons_dir: PathBuf::from("/work/boba-site/src/content/docs/learn"),
            exercises_dir: PathBuf::from("/work/boba-site/../bobalings/exercises"),
            output_dir: PathBuf::from("/work/boba-site/project/learn-lings"),
            recursive_exercises: true,
        }
    );
}

#[test]
fn test_learn_lings_args_uses_config_when_cli_missing() {
    let config = full_config();

    let resolved = LearnLingsArgs::default().with_config(Path::new(ROOT), Some(&config));

    assert_eq!(resolved.lessons_dir, Path::new(ROOT).join("cfg/learn"));
    assert_eq!(resolved.exercises_dir, Path::new(ROOT).join("../cfg-exercises"));
    assert_eq!(resolved.output_dir, Path::new(ROOT).join("cfg/out"));
    assert!(!resolved.recursive_exercises);
}

#[test]
fn test_learn_lings_args_cli_priority() {
    let config = config::Config {
        recursive_exercises: Some(true),
        ..full_config()
    };
    let args = LearnLingsArgs {
        paths: PathArgs {
            lessons: Some(PathBuf::from("cli/learn")),
            exercises: Some(PathBuf::from("/abs/exercises")),
            output: None,
            shallow_exercises: true,
        },
    };

    let resolved = args.with_config(Path::new(ROOT), Some(&config));

    assert_eq!(resolved.lessons_dir, Path::new(ROOT).join("cli/learn"));
    assert_eq!(resolved.exercises_dir, PathBuf::from("/abs/exercises"));
    assert_eq!(resolved.output_dir, Path::new(ROOT).join("cfg/out"));
    assert!(!resolved.recursive_exercises);
}

#[test]
fn test_status_args_share_path_resolution() {
    let args = StatusArgs {
        paths: PathArgs {
            output: Some(PathBuf::from("elsewhere")),
            ..Default::default()
        },
    };

    let resolved = args.with_config(Path::new(ROOT), None);

    assert_eq!(resolved.output_dir, Path::new(ROOT).join("elsewhere"));
    assert!(resolved.recursive_exercises);
}

#[test]
fn test_combine_args_defaults() {
    let resolved = CombineArgs::default().with_config(Path::new(ROOT), None);

    assert_eq!(
        resolved,
        ResolvedCombineArgs {
            lessons_dir: PathBuf::from("/work/boba-site/src/content/docs/learn"),
            reference_dir: PathBuf::from("/work/boba-site/src/content/docs/reference"),
            output_file: PathBuf::from("/work/boba-site/project/boba-syntax.md"),
            title: "Boba Lang".to_string(),
        }
    );
}

#[test]
fn test_combine_args_with_config_and_cli() {
    let config = full_config();
    let args = CombineArgs {
        title: Some("CLI Title".to_string()),
        ..Default::default()
    };

    let resolved = args.with_config(Path::new(ROOT), Some(&config));

    assert_eq!(resolved.reference_dir, Path::new(ROOT).join("cfg/reference"));
    assert_eq!(resolved.output_file, Path::new(ROOT).join("cfg/syntax.md"));
    assert_eq!(resolved.title, "CLI Title");
}

#[test]
fn test_cli_parses_learn_lings_flags() {
    use clap::Parser;

    let cli = Cli::try_parse_from([
        "boba-docs",
        "learn-lings",
        "--exercises",
        "../ex",
        "--shallow-exercises",
        "-v",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Some(Commands::LearnLings(args)) => {
            assert_eq!(args.paths.exercises, Some(PathBuf::from("../ex")));
            assert!(args.paths.shallow_exercises);
            assert!(args.paths.lessons.is_none());
        }
        _ => panic!("expected learn-lings command"),
    }
}
