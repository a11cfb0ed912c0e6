mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::config::{parse_args, CliCommand, GameConfig, USAGE};
use flappy::engine::{play_by_key, AssetCatalog, TerminalBell};
use flappy::input::dispatch_events;
use flappy::utils::logging::{init_logging, parse_level};
use flappy::{build_info, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let overrides = match parse_args(&args) {
        Ok(CliCommand::Run(overrides)) => overrides,
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let (mut config, config_warning) = GameConfig::load();
    config.apply(&overrides);

    match init_logging(parse_level(&config.log_level)) {
        Ok(path) => {
            tracing::info!(log = %path.display(), ?config, "flappy starting");
            if let Some(warning) = &config_warning {
                tracing::warn!("{}; using defaults", warning);
            }
        }
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            if let Some(warning) = &config_warning {
                eprintln!("Warning: {}; using defaults", warning);
            }
        }
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config.collision_policy, rng);
    session.set_muted(config.muted);

    let mut catalog = AssetCatalog::new();
    ui::flappy_scene::preload(&mut catalog);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &catalog, config.frame_ms);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        best = session.best_score(),
        rounds = session.rounds_played(),
        "flappy exiting"
    );
    result
}

/// Main loop: draw, dispatch input, then advance the clock by real elapsed time.
fn run(
    terminal: &mut Term,
    session: &mut Session<StdRng>,
    catalog: &AssetCatalog,
    frame_ms: u64,
) -> io::Result<()> {
    let mut bell = TerminalBell::new(io::stdout());
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, session, catalog))?;

        // Take everything queued, so mouse motion never holds back a flap
        let mut pending = Vec::new();
        if event::poll(Duration::from_millis(frame_ms))? {
            pending.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                pending.push(event::read()?);
            }
        }
        if !dispatch_events(session, pending) {
            return Ok(());
        }

        // Whole milliseconds only; the remainder stays on the clock
        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        session.advance(elapsed_ms);

        bell.set_muted(session.is_muted());
        for key in session.take_sounds() {
            play_by_key(catalog, &mut bell, key);
        }
    }
}
