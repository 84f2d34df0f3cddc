use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

pub enum InputEvent {
    Key(KeyEvent),
}

/// Background thread that polls crossterm and forwards key presses. Only
/// Press events pass through; Release and Repeat would double keystrokes on
/// Windows.
pub struct InputReader {
    running: Arc<AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl InputReader {
    pub fn start() -> (Self, mpsc::UnboundedReceiver<InputEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = Arc::clone(&running);
        let handle = std::thread::spawn(move || {
            while thread_running.load(Ordering::SeqCst) {
                if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        match key.kind {
                            KeyEventKind::Press => {
                                tracing::trace!("Key pressed: {:?}", key);
                                if tx.send(InputEvent::Key(key)).is_err() {
                                    break;
                                }
                            }
                            KeyEventKind::Release | KeyEventKind::Repeat => {
                                tracing::trace!("Key event ignored: {:?}", key);
                            }
                        }
                    }
                }
            }
        });
        (
            Self {
                running,
                handle: Some(handle),
            },
            rx,
        )
    }

    pub fn stop(mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
