mod app;
mod config;
mod countdown;
mod cycles;
mod domain;
mod input;
mod logging;
mod notifications;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{Config, ConfigOverrides};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ignite-timer")]
#[command(about = "A terminal countdown timer for focused work cycles", long_about = None)]
struct Cli {
    /// Countdown tick period in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Minutes pre-filled in the new-cycle form (5-60)
    #[arg(short, long)]
    minutes: Option<u32>,

    /// Do not show the remaining time in the terminal title
    #[arg(long)]
    no_title: bool,

    /// Do not send a desktop notification when a cycle finishes
    #[arg(long)]
    no_notify: bool,

    /// Path to config.json. Defaults to the user config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the log file. Defaults to the user data directory.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration as JSON
    Config,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tick_ms: self.tick_ms,
            minutes: self.minutes,
            no_title: self.no_title,
            no_notify: self.no_notify,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli.overrides());
    config.validate()?;

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => {
            let log_file = match cli.log_file {
                Some(path) => path,
                None => config::log_file()?,
            };
            logging::init(&config.log_level, &log_file)?;
            run_tui(&config)
        }
    }
}

fn run_tui(config: &Config) -> Result<()> {
    info!(tick_ms = config.tick_ms, "Starting ignite-timer");
    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    // A cycle still counting down on exit did not run its full length
    app.interrupt();

    if let Err(err) = &result {
        error!(error = %err, "Event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut last_title: Option<String> = None;

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Mirror the countdown in the terminal title
        let title = app.window_title();
        if title != last_title {
            execute!(
                terminal.backend_mut(),
                SetTitle(title.as_deref().unwrap_or("ignite-timer"))
            )?;
            last_title = title;
        }

        // Wait for input, but never past the next countdown tick
        if event::poll(app.next_wakeup(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        // Tick the countdown
        app.tick(Instant::now());
    }
}
