use crate::config::Config;
use crate::shutdown::{termination_signal, ShutdownCoordinator};
use crate::source::{FetchWorker, HttpSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pending fetch commands; one running plus one queued retry is enough.
const COMMAND_QUEUE: usize = 1;

pub fn run(config: Config) -> io::Result<()> {
    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let shutdown = ShutdownCoordinator::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let source = HttpSource::new(&config.source).map_err(io::Error::other)?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.handle());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = FetchWorker::new(Arc::new(source), events.sender(), shutdown.handle());
    tokio_rt.spawn(worker.run(command_rx));

    let signal_handle = shutdown.handle();
    let signal_tx = events.sender();
    tokio_rt.spawn(async move {
        tokio::select! {
            _ = termination_signal() => {
                tracing::info!("Termination signal received");
                let _ = signal_tx.send(AppEvent::Shutdown);
            }
            _ = signal_handle.wait() => {}
        }
    });

    let mut app = App::new(&config);
    app.attach_commands(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.request_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchStarted) => app.on_fetch_started(),
            Ok(AppEvent::FetchFinished(outcome)) => app.on_fetch_finished(outcome),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tokio_rt.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
