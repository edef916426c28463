use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tokio::sync::mpsc;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Char(char),
    Backspace,
    ClearLine,
    Submit,
    Quit,
}

/// Reads key presses on a background thread while the terminal is in raw
/// mode. Raw mode is left again when the handle is dropped.
pub struct InputHandle {
    rx: mpsc::UnboundedReceiver<FormKey>,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl InputHandle {
    pub fn start() -> anyhow::Result<Self> {
        enable_raw_mode()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let thread = thread::spawn(move || {
            while flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }
                let Ok(Event::Key(key_event)) = event::read() else {
                    continue;
                };
                let Some(key) = map_key(key_event) else {
                    continue;
                };
                if tx.send(key).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            rx,
            running,
            thread: Some(thread),
        })
    }

    /// Next key, or `None` if the reader thread stopped.
    pub async fn next_key(&mut self) -> Option<FormKey> {
        self.rx.recv().await
    }

    /// Runs `f` with raw mode switched off so regular line output renders.
    pub fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        with_mode_switched(disable_raw_mode, f, enable_raw_mode)
    }
}

impl Drop for InputHandle {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        let _ = disable_raw_mode();
    }
}

/// Runs `f` between `leave` and `enter`. A failed switch is logged and `f`
/// still runs.
fn with_mode_switched<T>(
    leave: impl FnOnce() -> io::Result<()>,
    f: impl FnOnce() -> T,
    enter: impl FnOnce() -> io::Result<()>,
) -> T {
    if let Err(err) = leave() {
        debug!("Could not leave raw mode: {}", err);
    }
    let out = f();
    if let Err(err) = enter() {
        debug!("Could not re-enter raw mode: {}", err);
    }
    out
}

fn map_key(key_event: KeyEvent) -> Option<FormKey> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(FormKey::Quit),
        KeyCode::Char('u') if ctrl => Some(FormKey::ClearLine),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(FormKey::Char(c)),
        KeyCode::Backspace => Some(FormKey::Backspace),
        KeyCode::Enter => Some(FormKey::Submit),
        KeyCode::Esc => Some(FormKey::Quit),
        _ => None,
    }
}
