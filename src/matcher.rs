/// Result of a successful subsequence match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub score: i64,
    /// Character indices into the text, one per pattern character.
    pub positions: Vec<usize>,
}

/// Greedy leftmost subsequence scorer.
///
/// Each pattern character is matched against the first occurrence at or
/// after the previous match. There is no backtracking: an earlier choice is
/// never revisited even if a later arrangement would score higher.
///
/// Comparison is exact. Callers that want case-insensitive matching lower
/// both sides before calling.
pub fn fuzzy_score(pattern: &[char], text: &[char]) -> Option<Match> {
    let mut score: i64 = 0;
    let mut ti = 0usize;
    let mut last_match: Option<usize> = None;
    let mut positions = Vec::with_capacity(pattern.len());

    for &pc in pattern {
        let idx = ti + text.get(ti..)?.iter().position(|&tc| tc == pc)?;

        positions.push(idx);
        score += 5;
        // A first match at 0 counts as contiguous with the virtual index -1.
        if idx == last_match.map_or(0, |last| last + 1) {
            score += 10;
        }
        if idx == 0 {
            score += 3;
        }
        score += 2i64.saturating_sub(idx as i64).max(0);

        ti = idx + 1;
        last_match = Some(idx);
    }

    score -= text.len() as i64 - pattern.len() as i64;
    Some(Match { score, positions })
}
