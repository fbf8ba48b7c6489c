// TUI event loop and terminal management
use crate::{Action, App};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use shopscout_core::{CatalogSource, Product};
use std::{io, sync::Arc, time::Duration};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::{debug, info};

type FetchResult = shopscout_core::Result<Vec<Product>>;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the listing until the user quits
///
/// The catalog fetch starts right away in a background task; its result
/// comes back over a channel so the spinner keeps animating meanwhile.
pub async fn run_tui(mut app: App, source: Arc<dyn CatalogSource>) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, source).await;

    // Restore terminal even if the loop bailed out
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: Arc<dyn CatalogSource>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    // Dropping the task aborts it, so every exit path (including `?`) cancels the request
    let mut fetch_task: Option<FetchTask> = None;

    // Initial fetch on mount
    if app.listing.begin_fetch() {
        fetch_task = Some(spawn_fetch(Arc::clone(&source), tx.clone()));
    }

    loop {
        drain_fetch_results(app, &mut rx);

        terminal.draw(|f| crate::ui::render(f, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.handle_key(key) {
                    Action::None => {}
                    Action::Quit => break,
                    Action::Refresh => {
                        if app.listing.begin_fetch() {
                            fetch_task = Some(spawn_fetch(Arc::clone(&source), tx.clone()));
                        } else {
                            debug!("Fetch already in flight, ignoring refresh");
                        }
                    }
                    Action::OpenUrl(url) => {
                        if let Err(e) = open::that(&url) {
                            app.error_message = Some(format!("Failed to open browser: {}", e));
                        }
                    }
                }
            }
        } else {
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }

    drop(fetch_task);
    Ok(())
}

/// Background catalog fetch, aborted when dropped
struct FetchTask(JoinHandle<()>);

impl FetchTask {
    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        if !self.is_finished() {
            info!("Aborting in-flight catalog fetch");
        }
        self.0.abort();
    }
}

fn spawn_fetch(source: Arc<dyn CatalogSource>, tx: UnboundedSender<FetchResult>) -> FetchTask {
    FetchTask(tokio::spawn(async move {
        let result = source.fetch_products().await;
        // Receiver only goes away on shutdown
        let _ = tx.send(result);
    }))
}

fn drain_fetch_results(app: &mut App, rx: &mut UnboundedReceiver<FetchResult>) {
    while let Ok(result) = rx.try_recv() {
        app.listing.finish_fetch(result);
        app.reset_selection();
    }
}
