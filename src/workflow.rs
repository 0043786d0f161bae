use crate::candidate::{Candidate, absolutize, sort_candidates};
use crate::dir_scanner::{self, DirectoryStream, ScanOptions};
use crate::error::{FcdError, SourceError};
use crate::{cli, tui};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(PathBuf),
    Cancelled,
}

// Drains the source, scoring each directory's base name against the pattern.
// Returns the candidates in rank order.
pub fn collect_candidates(
    source: &mut dyn DirectoryStream,
    pattern: &str,
    cwd: &Path,
) -> Result<Vec<Candidate>, SourceError> {
    let pattern_lower: Vec<char> = pattern.to_lowercase().chars().collect();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    let mut scanned = 0usize;

    source.for_each_dir(&mut |dir| {
        scanned += 1;
        let resolved = absolutize(&dir, cwd);
        if !seen.insert(resolved.clone()) {
            return;
        }
        if let Some(candidate) = Candidate::from_path(resolved, &pattern_lower) {
            candidates.push(candidate);
        }
    })?;

    sort_candidates(&mut candidates);
    tracing::debug!(scanned, matched = candidates.len(), "ranking finished");
    Ok(candidates)
}

// Main orchestrator: validate input, enumerate, rank, select.
pub fn run_fcd(cli_args: cli::Cli) -> Result<Outcome> {
    let cwd = env::current_dir().context("failed to read the current directory")?;

    // Step 1: Validate the search root and pattern.
    let search_root = absolutize(&cli_args.root, &cwd);
    if !search_root.is_dir() {
        return Err(FcdError::InvalidRoot(search_root).into());
    }
    let pattern = cli_args.pattern.trim();
    if pattern.is_empty() {
        return Err(FcdError::MissingPattern.into());
    }

    // Step 2: Enumerate and rank.
    let options = ScanOptions {
        root: search_root,
        max_depth: cli_args.max_depth.max(1),
        ignore_names: cli_args.ignore_names(),
        respect_gitignore: cli_args.gitignore,
    };
    tracing::debug!(?options, source = ?cli_args.source, pattern, "starting search");
    let mut source = dir_scanner::directory_stream(cli_args.source, options);
    let candidates =
        collect_candidates(source.as_mut(), pattern, &cwd).map_err(FcdError::Source)?;

    if candidates.is_empty() {
        return Err(FcdError::NoMatches(pattern.to_string()).into());
    }
    if candidates.len() > tui::MAX_DISPLAY {
        tracing::debug!(
            total = candidates.len(),
            shown = tui::MAX_DISPLAY,
            "truncating candidate list"
        );
    }

    // Step 3: Let the user pick.
    Ok(match tui::run_selector(&candidates, &cwd)? {
        tui::Selection::Chosen(path) => Outcome::Selected(path),
        tui::Selection::Cancelled => Outcome::Cancelled,
    })
}
