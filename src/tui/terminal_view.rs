use crossterm::style::{
    Attribute, Color as CColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use std::io::{self, Write};

/// Minimal drawing surface for the selector.
pub trait TerminalView {
    /// Replaces the previously rendered block with `lines`.
    fn render_frame(&mut self, lines: &[Line<'_>]) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
}

/// Renders inline below the prompt with crossterm escape sequences.
///
/// Each frame after the first moves up over the previous block and clears
/// to the end of the screen before drawing. Line wrapping is disabled while
/// the cursor is hidden so every line occupies exactly one row.
pub struct CrosstermView<W: Write> {
    out: W,
    previous_lines: usize,
}

impl<W: Write> CrosstermView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous_lines: 0,
        }
    }

    #[cfg(test)]
    pub(super) fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line<'_>) -> io::Result<()> {
        for span in &line.spans {
            let style = line.style.patch(span.style);
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            queue_style(&mut self.out, style)?;
            queue!(self.out, Print(span.content.as_ref()))?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset), Print("\r\n"))?;
        Ok(())
    }
}

impl<W: Write> TerminalView for CrosstermView<W> {
    fn render_frame(&mut self, lines: &[Line<'_>]) -> io::Result<()> {
        if self.previous_lines > 0 {
            let up = u16::try_from(self.previous_lines).unwrap_or(u16::MAX);
            queue!(
                self.out,
                cursor::MoveToPreviousLine(up),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        }
        for line in lines {
            self.write_line(line)?;
        }
        self.out.flush()?;
        self.previous_lines = lines.len();
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Hide, terminal::DisableLineWrap)?;
        self.out.flush()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::EnableLineWrap, cursor::Show)?;
        self.out.flush()
    }
}

fn queue_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(map_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(map_color(bg)))?;
    }

    let modifiers = style.add_modifier.difference(style.sub_modifier);
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
    ] {
        if modifiers.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn map_color(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}
