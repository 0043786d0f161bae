use crate::matcher::fuzzy_score;
use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

/// A directory whose base name matched the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub base_name: String,
    pub match_positions: Vec<usize>,
    pub score: i64,
    pub depth: usize,
    pub name_length: usize,
    pub full_path_length: usize,
}

impl Candidate {
    /// Scores `path`'s base name against an already lower-cased pattern.
    ///
    /// Returns `None` when the name does not match or the path has no final
    /// segment (e.g. `/`).
    pub fn from_path(path: PathBuf, pattern_lower: &[char]) -> Option<Self> {
        let base_name = path.file_name()?.to_string_lossy().into_owned();
        let lowered: Vec<char> = base_name.to_lowercase().chars().collect();
        let m = fuzzy_score(pattern_lower, &lowered)?;

        let full = path.to_string_lossy();
        // Splitting "/a/b" on the separator yields ["", "a", "b"].
        let depth = full.split(std::path::MAIN_SEPARATOR).count();
        let full_path_length = full.chars().count();

        Some(Self {
            name_length: base_name.chars().count(),
            base_name,
            match_positions: m.positions,
            score: m.score,
            depth,
            full_path_length,
            path,
        })
    }

    /// Ranking order: better candidates compare as `Less`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| self.name_length.cmp(&other.name_length))
            .then_with(|| self.full_path_length.cmp(&other.full_path_length))
            .then_with(|| self.path.cmp(&other.path))
    }
}

pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(Candidate::rank_cmp);
}

/// Makes `path` absolute against `cwd` and removes `.`/`..` segments
/// lexically. Symlinks are not resolved.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `path` relative to `base`, `.` when they are the same.
///
/// Both paths are expected to be absolute and normalized.
pub fn relative_display(path: &Path, base: &Path) -> String {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return path.display().to_string();
    }

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        ".".to_string()
    } else {
        rel.display().to_string()
    }
}
