//! Terminal runner (default binary).
//!
//! Owns the process lifecycle: parses options, sets up logging and the
//! terminal, then runs the frame loop until the player quits or the game
//! ends. Each loop iteration is one frame: drain input, step the session,
//! render, present, sleep.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use blockfall::core::{clock_seed, GameConfig, GameSession, RandomSource};
use blockfall::input::handle_event;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{FRAME_MS, GRAVITY_TICKS, MAX_GRID_HEIGHT, MAX_GRID_WIDTH};

/// Falling-block puzzle in the terminal.
///
/// Controls: Left/Right move, Down drops one row, Up rotates, Space pauses
/// (and shows the upcoming pieces), Esc or q quits.
#[derive(Parser, Debug)]
#[command(name = "blockfall", version)]
struct Args {
    /// Grid width in tiles. Defaults to whatever fits the terminal.
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in tiles. Defaults to whatever fits the terminal.
    #[arg(long)]
    height: Option<usize>,

    /// Frames between forced gravity moves.
    #[arg(long, default_value_t = GRAVITY_TICKS)]
    gravity_ticks: u32,

    /// Sleep between frames, in milliseconds.
    #[arg(long, value_name = "ms", default_value_t = FRAME_MS)]
    frame_ms: u64,

    /// Seed for piece selection. Defaults to the system clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal itself is the game screen).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let view = GameView::default();
    let (term_w, term_h) = crossterm::terminal::size().context("failed to query terminal size")?;
    let (fit_w, fit_h) = view.grid_size_for(Viewport::new(term_w, term_h));
    let config = GameConfig::new(
        args.width.unwrap_or(fit_w.min(MAX_GRID_WIDTH)),
        args.height.unwrap_or(fit_h.min(MAX_GRID_HEIGHT)),
        args.gravity_ticks,
    )
    .context("cannot set up the playfield")?;

    let rng = RandomSource::new(args.seed.unwrap_or_else(clock_seed));
    info!(
        seed = rng.seed(),
        width = config.width(),
        height = config.height(),
        gravity_ticks = config.gravity_ticks(),
        "starting session"
    );
    let mut session = GameSession::new(config, rng);

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to initialize the terminal")?;

    let result = run(
        &mut term,
        &mut session,
        &view,
        Duration::from_millis(args.frame_ms),
    );

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if session.is_game_over() {
        println!("Game Over!");
        println!(
            "{} pieces locked, {} rows cleared",
            session.pieces_locked(),
            session.rows_cleared()
        );
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut GameSession,
    view: &GameView,
    frame: Duration,
) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut actions = Vec::new();

    while !session.is_finished() {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Event::Resize(..) = ev {
                term.invalidate();
            }
            actions.extend(handle_event(&ev));
        }
        session.step(actions.drain(..));

        let (w, h) = crossterm::terminal::size().unwrap_or((fb.width(), fb.height()));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        thread::sleep(frame);
    }
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = args.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    info!("Logging initialized at level: {}", level);
    Ok(())
}
