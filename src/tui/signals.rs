use crossterm::{cursor, execute, terminal};
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};
use std::io;
use std::thread::{self, JoinHandle};

/// Restores the terminal and exits if a termination signal arrives while
/// the selector holds raw mode. Dropping the guard stops listening.
pub(super) struct SignalGuard {
    handle: Handle,
    listener: Option<JoinHandle<()>>,
}

pub(super) fn install() -> io::Result<SignalGuard> {
    let mut signals = Signals::new([SIGTERM, SIGHUP, SIGINT, SIGQUIT])?;
    let handle = signals.handle();
    let listener = thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            let _ = execute!(io::stderr(), terminal::EnableLineWrap, cursor::Show);
            let _ = terminal::disable_raw_mode();
            std::process::exit(128 + signal);
        }
    });
    Ok(SignalGuard {
        handle,
        listener: Some(listener),
    })
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(listener) = self.listener.take() {
            let _ = listener.join();
        }
    }
}
