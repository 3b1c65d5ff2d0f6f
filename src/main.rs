use pixdeck::adapters::{HttpEventSink, ReqwestHttpClient};
use pixdeck::analytics::AnalyticsLog;
use pixdeck::app::{App, AppMessage};
use pixdeck::cli::{handle_version_command, parse_args, CliCommand, TuiOptions};
use pixdeck::navigation::Route;
use pixdeck::picsum::PicsumClient;
use pixdeck::ui;

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => handle_version_command(),
        CliCommand::RunTui(options) => options,
    };

    color_eyre::install()?;
    init_tracing()?;

    let runtime = tokio::runtime::Runtime::new()?;
    // Sink forwarding and fetch tasks spawn onto this runtime
    let _guard = runtime.enter();

    let mut app = build_app(&options);

    // Initial navigation: CLI route or the default redirect target
    let route = options
        .route
        .as_deref()
        .map(Route::parse)
        .unwrap_or(Route::Gallery { page: 1 });
    app.navigate_to_route(route);

    // Set up the terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;

    result
}

/// Build the application from CLI options.
///
/// The collector endpoint comes from `--collector` or `PIXDECK_COLLECTOR`;
/// without one, analytics events stay in the in-memory log only.
fn build_app(options: &TuiOptions) -> App {
    let http = Arc::new(ReqwestHttpClient::new());
    let client = Arc::new(PicsumClient::new(http));

    let collector = options
        .collector
        .clone()
        .or_else(|| std::env::var("PIXDECK_COLLECTOR").ok());

    let analytics = match collector {
        Some(url) => {
            tracing::info!(collector = %url, "forwarding analytics events");
            AnalyticsLog::with_sink(Arc::new(HttpEventSink::new(url)))
        }
        None => AnalyticsLog::new(),
    };

    App::new(client, analytics)
}

/// Initialize tracing to a log file under the home directory.
///
/// The terminal itself belongs to the TUI, so diagnostics go to
/// `~/.pixdeck/pixdeck.log`.
fn init_tracing() -> Result<()> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".pixdeck");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("pixdeck.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pixdeck=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Restore the terminal to its original state.
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main event loop: renders the UI and polls keyboard events, fetch results,
/// and the animation tick.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();

    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|f| ui::render(f, app))?;

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(50));

        tokio::select! {
            // Tick for the loading spinner
            _ = timeout => {
                app.tick();
            }

            // Keyboard events
            event_result = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = event_result {
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key.code, key.modifiers);
                    }
                }
            }

            // Fetch results from spawned tasks
            msg = recv_message(&mut message_rx) => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}

/// Receive the next fetch result, or park forever if the channel is gone.
async fn recv_message(
    rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Dispatch a key press to the application.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Left => {
            app.previous_page();
        }
        KeyCode::Right => {
            app.next_page();
        }
        KeyCode::Up => {
            app.select_previous_image();
        }
        KeyCode::Down => {
            app.select_next_image();
        }
        // Direct page selection: 1-9 select that page, 0 selects page 10
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(page) = c.to_digit(10) {
                app.select_page(page);
            }
        }
        KeyCode::Char('0') => {
            app.select_page(10);
        }
        KeyCode::Char('a') => {
            app.toggle_log();
        }
        KeyCode::Char('[') => {
            app.scroll_log_up();
        }
        KeyCode::Char(']') => {
            app.scroll_log_down();
        }
        _ => {}
    }
}
