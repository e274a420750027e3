// sortty: Step-Through Sorting Algorithm Visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::config::{Cli, ConfigError, Settings};
use sortty::generator::compile;
use sortty::randomizer::Randomizer;
use sortty::run::Summary;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    init_logging(&cli)?;

    if cli.summary {
        let mut randomizer = Randomizer::new(settings.seed);
        let input = settings.initial_input(&mut randomizer);
        let run = compile(&input, settings.algorithm);
        println!("{}", Summary::new(settings.algorithm, &input, &run));
        return Ok(());
    }

    info!(
        algorithm = settings.algorithm.id(),
        size = settings.size,
        speed = settings.speed.get(),
        "starting visualizer"
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive sessions only log when
/// `--log-file` is given. `--summary` logs to stderr.
fn init_logging(cli: &Cli) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path).map_err(|source| ConfigError::LogFile {
            path: path.clone(),
            source,
        })?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.summary {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}
