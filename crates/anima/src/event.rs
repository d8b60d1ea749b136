//! Events delivered to the UI thread, and the thread reading terminal input.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// How long the input thread waits for terminal input before checking
/// whether it should stop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something the UI thread has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A tick asked for the canvas to be repainted.
    Redraw,
    /// The terminal was resized to the given columns and rows.
    Resize(u16, u16),
    /// The user closed the canvas.
    Quit,
}

/// Background thread translating crossterm events into [`Event`]s.
#[derive(Debug, Default)]
pub struct InputReader {
    /// Flag to signal thread termination.
    running: Arc<AtomicBool>,
    /// Handle of the background thread.
    handle: Option<JoinHandle<()>>,
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start forwarding terminal events to `events`.
    pub fn start(&mut self, events: Sender<Event>) {
        if self.running.swap(true, Ordering::AcqRel) {
            return; // Already running
        }

        let running = Arc::clone(&self.running);
        self.handle = Some(thread::spawn(move || {
            while running.load(Ordering::Acquire) {
                let next = match event::poll(POLL_INTERVAL) {
                    Ok(true) => event::read().map(|ev| translate(&ev)),
                    Ok(false) => continue,
                    Err(err) => Err(err),
                };

                let forward = match next {
                    Ok(Some(ev)) => ev,
                    Ok(None) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "failed to read terminal input");
                        Event::Quit
                    }
                };
                if events.send(forward).is_err() || forward == Event::Quit {
                    break;
                }
            }
        }));
    }

    /// Stop the input thread and wait for it to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("input thread panicked");
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Map a terminal event to the event the UI cares about, if any.
pub fn translate(event: &event::Event) -> Option<Event> {
    match event {
        event::Event::Key(key) if key.kind == KeyEventKind::Press => on_key_event(key),
        event::Event::Resize(cols, rows) => Some(Event::Resize(*cols, *rows)),
        _ => None,
    }
}

/// Keys that close the canvas. Everything else is ignored.
fn on_key_event(key: &KeyEvent) -> Option<Event> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Event::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> event::Event {
        event::Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            translate(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Event::Quit)
        );
        assert_eq!(
            translate(&press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Event::Quit)
        );
        assert_eq!(
            translate(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(translate(&press(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(translate(&press(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(translate(&event::Event::Key(key)), None);
    }

    #[test]
    fn test_resize_is_forwarded() {
        assert_eq!(
            translate(&event::Event::Resize(120, 40)),
            Some(Event::Resize(120, 40))
        );
    }

    #[test]
    fn test_focus_is_ignored() {
        assert_eq!(translate(&event::Event::FocusGained), None);
    }
}
