use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_IGNORE: &str = ".git,node_modules,.pnpm-store";

const AFTER_HELP: &str = "\
Examples:
  fcd api             # search from the current directory
  fcd api ..          # search from ../
  cd \"$(fcd api)\"     # jump to the chosen directory

Environment:
  FCD_MAX_DEPTH   Limit how deep the search traverses (default: 1)
  FCD_IGNORE      Comma-separated directory names to prune
  FCD_SOURCE      Directory source: find or walk
  FCD_LOG         Log filter for diagnostics on stderr (default: warn)";

/// How candidate directories are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Stream directories from a `find` subprocess.
    Find,
    /// Walk the tree in-process.
    Walk,
}

impl Default for SourceKind {
    fn default() -> Self {
        if cfg!(unix) {
            SourceKind::Find
        } else {
            SourceKind::Walk
        }
    }
}

/// fcd – find a directory by name and print its absolute path
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Abbreviated directory name to look for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Root to search (defaults to CWD)
    #[arg(value_name = "SEARCH_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Maximum traversal depth; anything below 1 counts as 1.
    #[arg(
        long,
        env = "FCD_MAX_DEPTH",
        default_value = "1",
        value_parser = parse_max_depth,
        allow_negative_numbers = true
    )]
    pub max_depth: usize,

    /// Comma-separated directory names that are never descended into.
    #[arg(
        long,
        env = "FCD_IGNORE",
        value_delimiter = ',',
        value_name = "NAMES",
        default_value = DEFAULT_IGNORE
    )]
    pub ignore: Vec<String>,

    /// Where directory names come from.
    #[arg(long, env = "FCD_SOURCE", value_enum, default_value_t = SourceKind::default())]
    pub source: SourceKind,

    /// Honor .gitignore and .ignore files (walk source only).
    #[arg(long)]
    pub gitignore: bool,
}

/// Lenient depth parser: unparsable or non-positive input falls back to 1.
pub fn parse_max_depth(raw: &str) -> Result<usize, String> {
    Ok(raw
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|depth| *depth >= 1)
        .map_or(1, |depth| usize::try_from(depth).unwrap_or(usize::MAX)))
}

impl Cli {
    /// Ignore names with empty entries dropped.
    pub fn ignore_names(&self) -> Vec<String> {
        self.ignore
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn max_depth_clamps_bad_values_to_one() {
        for raw in ["0", "-3", "abc", ""] {
            assert_eq!(parse_max_depth(raw), Ok(1), "input {raw:?}");
        }
        assert_eq!(parse_max_depth("4"), Ok(4));
        assert_eq!(parse_max_depth(" 2 "), Ok(2));
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["fcd", "api"]).unwrap();
        assert_eq!(cli.pattern, "api");
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(
            cli.ignore_names(),
            vec![".git", "node_modules", ".pnpm-store"]
        );
        assert!(!cli.gitignore);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "fcd",
            "api",
            "..",
            "--max-depth",
            "3",
            "--ignore",
            "target,,dist",
            "--source",
            "walk",
        ])
        .unwrap();
        assert_eq!(cli.root, PathBuf::from(".."));
        assert_eq!(cli.max_depth, 3);
        assert_eq!(cli.ignore_names(), vec!["target", "dist"]);
        assert_eq!(cli.source, SourceKind::Walk);
    }

    #[test]
    fn pattern_is_required() {
        assert!(Cli::try_parse_from(["fcd"]).is_err());
    }
}
