//! # TUI Adapter
//!
//! Terminal front end for the search screen: owns the terminal, draws the
//! frame, and turns key presses into `core::Action` values.
//!
//! All ratatui and crossterm knowledge stays inside this module, so a
//! different adapter (web, one-shot CLI, etc.) could drive the same core
//! later without touching it.
//!
//! ## Redraw Strategy
//!
//! Redraws are conditional rather than on a fixed tick:
//!
//! - **Loading**: draws every ~80ms so the spinner stays smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Search Lifecycle
//!
//! Enter runs `update(Action::Search)`, which returns a `SpawnSearch`
//! effect tagged with a fresh generation. The loop aborts whatever task is
//! still in flight, spawns one `tokio` task for the request, and keeps its
//! `AbortHandle`. The task reports back over a std `mpsc` channel that the
//! loop drains between draws. Abort is best-effort cancellation; the
//! reducer's generation check is what keeps superseded results out.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::library::{BookSearch, Category, FixtureClient, PyxisClient};
use crate::tui::component::EventHandler;
use crate::tui::components::BookListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Presentation state the core has no business knowing about.
pub struct TuiState {
    // Component state that outlives a single frame
    pub book_list: BookListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            book_list: BookListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel scrolling; the cursor stays hidden since
        // there is no text input to edit.
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build a library client from a resolved config's client name.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn BookSearch> {
    match config.client.as_str() {
        "fixture" => Arc::new(FixtureClient),
        _ => {
            // Default to the live Pyxis catalog
            Arc::new(PyxisClient::new(
                Some(config.library_base_url.clone()),
                config.window.clone(),
            ))
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let library = build_client(&config);
    let mut app = App::from_config(library, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for completions from background search tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the search in flight, if any
    let mut active_search: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // The spinner is the only animation; it runs while a search is live
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Skip the draw entirely when nothing changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Poll timeout follows the redraw mode: ~12fps while animating, lazy when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Handle the first event, then drain everything queued before drawing again
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            match event {
                // Resize just needs the redraw flagged above
                TuiEvent::Resize => {}

                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    let effect = update(&mut app, Action::Quit);
                    if effect == Effect::Quit {
                        should_quit = true;
                    }
                }

                TuiEvent::NextCategory => {
                    let next = app.category.next();
                    update(&mut app, Action::SelectCategory(next));
                }
                TuiEvent::PrevCategory => {
                    let prev = app.category.prev();
                    update(&mut app, Action::SelectCategory(prev));
                }
                TuiEvent::JumpCategory(n) => {
                    if let Some(category) = Category::from_class_no(n) {
                        update(&mut app, Action::SelectCategory(category));
                    }
                }

                TuiEvent::Submit => {
                    // Enter always re-dispatches: a search already in flight
                    // is aborted and superseded by the new generation.
                    if let Some(handle) = active_search.take() {
                        debug!("Aborting superseded search");
                        handle.abort();
                    }
                    let effect = update(&mut app, Action::Search);
                    if let Effect::SpawnSearch { seq, category } = effect {
                        active_search = Some(spawn_search(&app, seq, category, tx.clone()));
                        // Fresh chart, fresh scroll position
                        tui.book_list = BookListState::new();
                    }
                }

                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToTop
                | TuiEvent::ScrollToBottom => {
                    tui.book_list.handle_event(&event);
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle completions from background search tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
            if !app.is_loading {
                // The current generation has delivered; nothing left to abort.
                active_search = None;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_search(
    app: &App,
    seq: u64,
    category: Category,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!(
        "Spawning chart request: category={} seq={}",
        category.label(),
        seq
    );

    let library = app.library.clone();
    let handle = tokio::spawn(async move {
        let result = library.search_top_books(category).await;
        match &result {
            Ok(books) => info!("Chart request done: {} titles (seq={})", books.len(), seq),
            Err(e) => warn!("Chart request failed (seq={}): {}", seq, e),
        }
        if tx.send(Action::BooksLoaded { seq, result }).is_err() {
            warn!("Failed to send chart result: receiver dropped");
        }
    });

    handle.abort_handle()
}
