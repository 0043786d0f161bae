// Interactive directory picker drawn inline on stderr.
mod app_logic;
mod app_state;
mod event_handler;
#[cfg(unix)]
mod signals;
mod terminal_view;
mod ui_renderer;

pub use app_logic::MAX_DISPLAY;
pub use app_state::Selection;

pub use self::run_tui::run_selector;

// Session setup/teardown and the main input loop.
mod run_tui {
    use super::app_logic::SelectorApp;
    use super::app_state::{Action, Selection};
    use super::event_handler::read_action;
    use super::terminal_view::{CrosstermView, TerminalView};
    use super::ui_renderer::frame_lines;
    use crate::candidate::Candidate;
    use crate::error::FcdError;
    use anyhow::Result;
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
    use std::io::{self, IsTerminal};
    use std::path::Path;

    /// Lets the user pick one of the ranked `candidates`.
    ///
    /// When stdin or stderr is not a terminal the top candidate is returned
    /// without drawing anything.
    pub fn run_selector(candidates: &[Candidate], cwd: &Path) -> Result<Selection> {
        let interactive = io::stdin().is_terminal() && io::stderr().is_terminal();

        #[cfg(unix)]
        let _signals = if interactive {
            Some(super::signals::install().map_err(FcdError::Terminal)?)
        } else {
            None
        };

        let selection = resolve(
            candidates,
            cwd,
            interactive,
            || TerminalSession::enter(CrosstermView::new(io::stderr()), true),
            read_action,
        )
        .map_err(FcdError::Terminal)?;
        tracing::debug!(?selection, interactive, "selector finished");
        Ok(selection)
    }

    pub(super) fn resolve<V, S, F>(
        candidates: &[Candidate],
        cwd: &Path,
        interactive: bool,
        open_session: S,
        next_action: F,
    ) -> io::Result<Selection>
    where
        V: TerminalView,
        S: FnOnce() -> io::Result<TerminalSession<V>>,
        F: FnMut() -> io::Result<Option<Action>>,
    {
        let Some(top) = candidates.first() else {
            return Ok(Selection::Cancelled);
        };
        if !interactive {
            return Ok(Selection::Chosen(top.path.clone()));
        }
        run_session(candidates, cwd, open_session()?, next_action)
    }

    pub(super) fn run_session<V, F>(
        candidates: &[Candidate],
        cwd: &Path,
        mut session: TerminalSession<V>,
        mut next_action: F,
    ) -> io::Result<Selection>
    where
        V: TerminalView,
        F: FnMut() -> io::Result<Option<Action>>,
    {
        let mut app = SelectorApp::new(candidates);
        session.view.render_frame(&frame_lines(&app, cwd))?;

        while app.is_browsing() {
            let Some(action) = next_action()? else {
                continue;
            };
            if app.apply(action) {
                session.view.render_frame(&frame_lines(&app, cwd))?;
            }
        }

        session.restore()?;
        Ok(app.into_selection())
    }

    /// Raw mode plus hidden cursor for the lifetime of the selector.
    ///
    /// The terminal is restored exactly once: by [`TerminalSession::restore`]
    /// or, on early return and panic, by `Drop`.
    pub(super) struct TerminalSession<V: TerminalView> {
        pub(super) view: V,
        raw_mode: bool,
        active: bool,
    }

    impl<V: TerminalView> TerminalSession<V> {
        pub(super) fn enter(view: V, raw_mode: bool) -> io::Result<Self> {
            if raw_mode {
                enable_raw_mode()?;
            }
            let mut session = Self {
                view,
                raw_mode,
                active: true,
            };
            session.view.hide_cursor()?;
            Ok(session)
        }

        pub(super) fn restore(mut self) -> io::Result<()> {
            self.cleanup()
        }

        fn cleanup(&mut self) -> io::Result<()> {
            if !self.active {
                return Ok(());
            }
            self.active = false;
            let shown = self.view.show_cursor();
            if self.raw_mode {
                disable_raw_mode()?;
            }
            shown
        }
    }

    impl<V: TerminalView> Drop for TerminalSession<V> {
        fn drop(&mut self) {
            let _ = self.cleanup();
        }
    }
}
