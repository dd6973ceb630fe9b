use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;
use crate::source::ItemSource;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Runs fetches requested by the UI and reports them as [`AppEvent`]s.
///
/// Every `Fetch` command produces `FetchStarted` followed by exactly one
/// `FetchFinished`. Commands are handled one at a time.
pub struct FetchWorker {
    source: Arc<dyn ItemSource>,
    events: std_mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
}

impl FetchWorker {
    pub fn new(
        source: Arc<dyn ItemSource>,
        events: std_mpsc::Sender<AppEvent>,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            source,
            events,
            shutdown,
        }
    }

    pub async fn run(self, mut commands: mpsc::Receiver<UiCommand>) {
        loop {
            let command = tokio::select! {
                command = commands.recv() => command,
                _ = self.shutdown.wait() => break,
            };
            let Some(command) = command else {
                break;
            };

            match command {
                UiCommand::Fetch => {
                    if !self.fetch_once().await {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Fetch worker stopped");
    }

    /// Returns false once the UI side of the event channel is gone.
    async fn fetch_once(&self) -> bool {
        if self.events.send(AppEvent::FetchStarted).is_err() {
            return false;
        }

        let outcome = match self.source.fetch().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Fetched items");
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), "Fetch failed: {}", err);
                Err(err.kind())
            }
        };

        self.events.send(AppEvent::FetchFinished(outcome)).is_ok()
    }
}
