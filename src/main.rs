//! livescroll-feed: a live-updating image feed for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌────────────┐ load_resource ┌──────────────┐ UiMsg (channel) ┌──────────┐  draw()  ┌──────────┐
//! │ composer   │ ─────────────►│ LoadTask     │ ──────────────► │ main loop│ ───────► │  ui.rs   │
//! │ (adapters) │               │ (tokio task) │                 │ did_finish         │ (render) │
//! └────────────┘               └──────────────┘                 └────┬─────┘          └──────────┘
//!                                                                    │ presenters → App / cells
//!                                                               ┌──────────┐
//!                                                               │ input.rs │
//!                                                               └──────────┘
//! ```
//!
//! * **`composer`**: builds the loader chains and the feed presentation graph.
//! * **`dispatch`**: carries finished loads back to the UI thread.
//! * **`app`** / **`cell`**: view state, updated only by presenters.
//! * **`ui`**: pure rendering.
//! * **`input`**: maps key events to `App` mutations and load commands.
//! * **`config`**: command-line options.

mod app;
mod cell;
mod composer;
mod config;
mod dispatch;
mod input;
mod ui;

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use livescroll_feed::api::ReqwestHttpClient;
use livescroll_feed::cache::{InMemoryFeedImageDataStore, JsonFileFeedStore};

use app::App;
use config::Config;
use dispatch::{feed_delivery, RefreshTimer, UiMsg};
use input::Command;

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the default hook prints the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Log to a file; stderr belongs to the terminal UI.
fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    install_panic_hook();
    info!("loading feed from {}", config.url);

    // -- compose loaders -----------------------------------------------------
    let loaders = composer::compose_loaders(
        config.url.clone(),
        Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout())?),
        Arc::new(JsonFileFeedStore::new(&config.cache_path)),
        Arc::new(InMemoryFeedImageDataStore::new()),
    );

    // -- terminal setup (Drop restores on exit or panic) -------------------
    let mut guard = TerminalGuard::new()?;
    let app = Rc::new(RefCell::new(App::new()));
    let mut feed = composer::feed_adapter(&app, &loaders);

    let (tx, rx) = mpsc::channel();
    feed.load_resource((), feed_delivery(&tx));
    let mut refresh = RefreshTimer::new(config.refresh_interval());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Hand finished loads to their adapters.
    //   2. Start the selected row's image if it was never requested.
    //   3. Render the UI.
    //   4. Poll for keyboard input (non-blocking, up to tick_rate).
    //   5. Re-fetch the feed when the refresh interval elapses.
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Deliver completions
        while let Ok(msg) = rx.try_recv() {
            match msg {
                UiMsg::Feed(ticket, result) => {
                    feed.did_finish(ticket, result);
                }
                UiMsg::Image {
                    row,
                    ticket,
                    result,
                } => {
                    if let Some(cell) = app.borrow_mut().cells.get_mut(row) {
                        cell.did_finish(ticket, result);
                    }
                }
            }
        }

        // 2. Lazy image loading
        app.borrow_mut().request_selected_image(&tx);

        // 3. Render
        guard.terminal.draw(|f| ui::draw(&mut app.borrow_mut(), f))?;

        // 4. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                let command = input::handle_key_event(&mut app.borrow_mut(), key);
                match command {
                    Some(Command::RefreshFeed) => {
                        feed.load_resource((), feed_delivery(&tx));
                        refresh.reset();
                    }
                    Some(Command::RetryImage) => app.borrow_mut().retry_selected_image(&tx),
                    None => {}
                }
            }
        }

        // 5. Periodic refresh
        if !feed.is_loading() && refresh.is_due() {
            feed.load_resource((), feed_delivery(&tx));
        }

        if app.borrow().quit {
            break;
        }
    }

    drop(guard);
    feed.cancel();
    if let Err(e) = loaders.local_feed.validate_cache().await {
        warn!("could not validate feed cache: {e}");
    }
    Ok(())
}
