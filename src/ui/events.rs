use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::model::Item;
use crate::shutdown::ShutdownHandle;
use crate::source::FailureKind;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The worker began a fetch.
    FetchStarted,
    /// The fetch begun by the last `FetchStarted` completed.
    FetchFinished(Result<Vec<Item>, FailureKind>),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Channel only, no input thread. Producers use [`EventHandler::sender`].
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    /// Spawns the terminal input thread.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let handler = Self::detached();
        let event_tx = handler.tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll so the shutdown flag is checked often
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if event_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("Terminal read error: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("Terminal poll error: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
            tracing::debug!("Input thread stopped");
        });

        handler
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
