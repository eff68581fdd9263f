use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};

use campus_helper::ai::worker::spawn_worker;
use campus_helper::app::App;
use campus_helper::config::{self, ConfigResult};
use campus_helper::error::AppError;
use campus_helper::prompt::build_system_prompt;
use campus_helper::settings::key_store::{FileKeyStore, KeyStore, MemoryKeyStore, hydrate_api_key};
use campus_helper::settings::Settings;

/// Campus and club event marketing helper backed by Gemini
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Chat with Gemini about campus and club events, post templates and marketing ideas"
)]
struct Args {
    /// Model to use instead of the configured one
    #[arg(long)]
    model: Option<String>,

    /// Print the system prompt built from the current settings and exit
    #[arg(long)]
    print_prompt: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/campus-helper-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();
    let config_result = config::load_config();

    let key_store = open_key_store();
    let mut settings = Settings::from_config(&config_result.config);
    hydrate_api_key(&mut settings, key_store.as_ref());
    if let Some(model) = args.model {
        settings.model = model;
    }

    if args.print_prompt {
        let mut out = stdout().lock();
        writeln!(out, "{}", build_system_prompt(&settings)).map_err(AppError::Io)?;
        return Ok(());
    }

    let base_url = config_result.config.ai.base_url.clone();
    let app = App::new(settings, base_url, key_store);

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== CAMPUS-HELPER DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/campus-helper-debug.log")
    {
        Ok(file) => file,
        Err(_) => return,
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== CAMPUS-HELPER DEBUG SESSION STARTED ===");
}

/// File-backed key store, or an in-memory one when no data directory exists
fn open_key_store() -> Box<dyn KeyStore> {
    match FileKeyStore::default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}; API key will not be remembered", AppError::from(e));
            Box::new(MemoryKeyStore::new())
        }
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal, AppError> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode().map_err(AppError::Terminal)?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(AppError::Terminal(e));
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(AppError::Terminal(e))
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        log::warn!("{}", warning);
        app.chat.last_error = Some(warning);
    }

    setup_ai_worker(&mut app);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the AI worker thread and channels
///
/// The worker runs even without a key so a key entered later works at once.
fn setup_ai_worker(app: &mut App) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.chat.set_channels(request_tx, response_rx);

    spawn_worker(request_rx, response_tx);
}
