use super::app_logic::SelectorApp;
use crate::candidate::{Candidate, relative_display};
use ratatui::prelude::*;
use std::path::Path;

pub(super) const HINT: &str = "Use ↑/↓ or j/k (g/G to jump), Enter to select, q to cancel.";

fn match_style() -> Style {
    Style::default().fg(Color::Red)
}

fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Splits `name` into spans, drawing matched character positions in red.
fn highlighted_name(name: &str, positions: &[usize]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;

    for (i, ch) in name.chars().enumerate() {
        let matched = positions.binary_search(&i).is_ok();
        if matched != run_matched && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_matched));
        }
        run_matched = matched;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_matched));
    }
    spans
}

fn styled_run(text: String, matched: bool) -> Span<'static> {
    if matched {
        Span::styled(text, match_style())
    } else {
        Span::raw(text)
    }
}

fn candidate_line(candidate: &Candidate, selected: bool, cwd: &Path) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let mut spans = vec![Span::raw(marker)];
    spans.extend(highlighted_name(
        &candidate.base_name,
        &candidate.match_positions,
    ));
    spans.push(Span::raw("   "));
    spans.push(Span::raw(relative_display(&candidate.path, cwd)));

    let line = Line::from(spans);
    if selected {
        line.style(cursor_style())
    } else {
        line
    }
}

/// Hint line followed by one line per visible candidate.
pub(super) fn frame_lines(app: &SelectorApp<'_>, cwd: &Path) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(app.items.len() + 1);
    lines.push(Line::from(HINT));
    lines.extend(
        app.items
            .iter()
            .enumerate()
            .map(|(i, c)| candidate_line(c, i == app.cursor, cwd)),
    );
    lines
}
