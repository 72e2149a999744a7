mod app;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tbrowse_config::Config;
use tbrowse_core::{NavigationController, NavigatorSettings};
use tbrowse_fs::LocalFs;
use tbrowse_ui::{EventHandler, RenderOptions, TerminalRenderer};

use crate::app::App;

/// Keyboard-driven terminal directory browser
#[derive(Debug, Parser)]
#[command(name = "tbrowse", version, about)]
struct Cli {
    /// Directory to open (defaults to the home directory)
    path: Option<PathBuf>,

    /// Use this configuration file instead of the default one
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    init_logging(&config);

    let start = resolve_start_path(cli.path)?;
    log::info!("Starting in {}", start.display());

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let options = RenderOptions {
        name_width: config.browser.name_width,
        extended_view_width: config.browser.extended_view_width,
    };
    let mut renderer = TerminalRenderer::new(terminal, options);

    let result = run(&config, start, &mut renderer);

    // Restore terminal
    disable_raw_mode()?;
    let terminal = renderer.terminal_mut();
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("{:#}", err);
    }
    result
}

fn run(
    config: &Config,
    start: PathBuf,
    renderer: &mut TerminalRenderer<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let settings = NavigatorSettings {
        initial_capacity: config.browser.initial_capacity,
        hidden_prefix: config.browser.hidden_prefix.clone(),
        rows: renderer.entry_rows()?,
    };
    let controller = NavigationController::new(LocalFs::new(), &start, &settings)
        .with_context(|| format!("Failed to open {}", start.display()))?;

    let events = EventHandler::new();
    App::new(controller, renderer).run(|| events.next())
}

/// Load the configuration, falling back to defaults when it is unusable.
fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|err| {
        eprintln!("Warning: using default configuration: {:#}", err);
        Config::default()
    })
}

/// Route `log` output to the configured file. The browser still works
/// without a log.
fn init_logging(config: &Config) {
    let level = tbrowse_logger::parse_level(&config.logging.min_level);
    let result = config
        .log_file_path()
        .and_then(|path| tbrowse_logger::init(&path, level));
    if let Err(err) = result {
        eprintln!("Warning: logging disabled: {:#}", err);
    }
}

/// Directory to start in: the argument, else home, else the working directory.
fn resolve_start_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    let path = match arg {
        Some(path) => path,
        None => match dirs::home_dir() {
            Some(home) => home,
            None => std::env::current_dir().context("Failed to get current directory")?,
        },
    };

    let canonical = path
        .canonicalize()
        .with_context(|| format!("Cannot open {}", path.display()))?;
    if !canonical.is_dir() {
        bail!("{} is not a directory", canonical.display());
    }
    Ok(canonical)
}
