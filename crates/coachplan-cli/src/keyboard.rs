//! Scoped keyboard input for interactive playback.
//!
//! [`KeyboardScope`] puts the terminal in raw mode and starts a reader thread
//! that turns key presses into session [`Command`]s. Dropping the scope stops
//! the thread and restores the terminal, so input is only captured while a
//! session is open.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::Result;
use coachplan_core::session::Command;
use log::{debug, warn};
use termimad::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use tokio::sync::mpsc;

/// How long the reader blocks before re-checking its stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a key press to a session command.
///
/// Right/Left move, `1`-`9` jump to a step, Space toggles the timer, `r`
/// resets it, `m` minimizes it, Esc and Ctrl-C close.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Close);
    }

    match key.code {
        KeyCode::Right => Some(Command::Next),
        KeyCode::Left => Some(Command::Back),
        KeyCode::Esc => Some(Command::Close),
        KeyCode::Char(' ') => Some(Command::ToggleTimer),
        KeyCode::Char('r' | 'R') => Some(Command::ResetTimer),
        KeyCode::Char('m' | 'M') => Some(Command::ToggleMinimized),
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .map(|n| Command::JumpTo(n as usize - 1)),
        _ => None,
    }
}

/// Raw-mode keyboard capture that lasts as long as the value.
pub struct KeyboardScope {
    stop: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl KeyboardScope {
    /// Enables raw mode and starts forwarding commands to the returned
    /// receiver.
    pub fn start() -> Result<(Self, mpsc::UnboundedReceiver<Command>)> {
        terminal::enable_raw_mode()?;

        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let reader = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        warn!("Keyboard poll failed: {e}");
                        break;
                    }
                }

                let key = match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                    Ok(_) => continue,
                    Err(e) => {
                        warn!("Keyboard read failed: {e}");
                        break;
                    }
                };

                if let Some(command) = command_for(&key) {
                    debug!("Key {:?} -> {command:?}", key.code);
                    if tx.send(command).is_err() {
                        break;
                    }
                }
            }
        });

        Ok((
            Self {
                stop,
                reader: Some(reader),
            },
            rx,
        ))
    }
}

impl Drop for KeyboardScope {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(reader) = self.reader.take() {
            if reader.join().is_err() {
                warn!("Keyboard reader panicked");
            }
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to restore terminal: {e}");
        }
    }
}
