//! Game session - owns every piece of simulation state for one game
//!
//! One frame of play is:
//!
//! 1. apply every pending [`GameAction`] in order (this happens even while
//!    paused),
//! 2. unless paused, count a frame and, every `gravity_ticks` frames, force
//!    the piece down one row. A piece that cannot fall is locked, full rows
//!    are cleared and the next piece spawns. If the new piece cannot occupy
//!    its spawn cells the session is over.
//!
//! Rendering is not part of the session; views read it through accessors.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::{PieceQueue, PieceSource, RandomSource};
use crate::types::GameAction;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What one simulation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused: the frame counter did not advance
    Paused,
    /// Counting toward the next gravity move
    Waiting,
    /// Gravity moved the piece down one row
    Fell,
    /// The piece locked and a new one spawned
    Locked { rows_cleared: usize },
    /// The freshly spawned piece was blocked
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GameSession<S: PieceSource = RandomSource> {
    config: GameConfig,
    grid: Grid,
    active: ActivePiece,
    queue: PieceQueue,
    rng: S,
    paused: bool,
    quit: bool,
    drop_counter: u32,
    phase: Phase,
    rows_cleared: u64,
    pieces_locked: u64,
}

impl<S: PieceSource> GameSession<S> {
    /// Start a session on an empty grid.
    ///
    /// The first piece is drawn before the queue is filled, matching the
    /// order pieces are consumed from the random source.
    pub fn new(config: GameConfig, mut rng: S) -> Self {
        let active = ActivePiece::initial(&mut rng, config.width());
        let queue = PieceQueue::new(&mut rng);
        debug!(
            width = config.width(),
            height = config.height(),
            first = active.kind().as_str(),
            "session started"
        );
        Self {
            grid: Grid::new(config.width(), config.height()),
            config,
            active,
            queue,
            rng,
            paused: false,
            quit: false,
            drop_counter: 0,
            phase: Phase::Playing,
            rows_cleared: 0,
            pieces_locked: 0,
        }
    }

    /// Apply one player action.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.phase == Phase::GameOver {
            return;
        }
        match action {
            GameAction::MoveLeft => {
                self.active.try_move(&self.grid, -1, 0);
            }
            GameAction::MoveRight => {
                self.active.try_move(&self.grid, 1, 0);
            }
            GameAction::SoftDrop => {
                self.active.try_move(&self.grid, 0, 1);
            }
            GameAction::Rotate => self.active.rotate(),
            GameAction::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            GameAction::Quit => self.quit = true,
        }
    }

    /// Advance the frame counter and apply gravity when it is due.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::GameOver {
            return TickOutcome::GameOver;
        }
        if self.paused {
            return TickOutcome::Paused;
        }

        self.drop_counter += 1;
        if self.drop_counter < self.config.gravity_ticks() {
            return TickOutcome::Waiting;
        }
        self.drop_counter = 0;

        if self.active.try_move(&self.grid, 0, 1) {
            return TickOutcome::Fell;
        }
        self.lock_and_spawn()
    }

    /// One frame: drain `actions`, then tick.
    pub fn step<I>(&mut self, actions: I) -> TickOutcome
    where
        I: IntoIterator<Item = GameAction>,
    {
        for action in actions {
            self.apply_action(action);
        }
        self.tick()
    }

    fn lock_and_spawn(&mut self) -> TickOutcome {
        self.active.lock_into(&mut self.grid);
        self.pieces_locked += 1;

        let rows_cleared = self.grid.clear_full_rows();
        self.rows_cleared += rows_cleared as u64;
        debug!(
            kind = self.active.kind().as_str(),
            rows_cleared, "piece locked"
        );

        self.active = ActivePiece::spawn(&mut self.queue, &mut self.rng, self.config.width());
        if !self.active.try_move(&self.grid, 0, 0) {
            self.phase = Phase::GameOver;
            info!(
                pieces = self.pieces_locked,
                rows = self.rows_cleared,
                "game over"
            );
            return TickOutcome::GameOver;
        }
        TickOutcome::Locked { rows_cleared }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fixture hook: edits the grid directly, skipping the lock and clear
    /// rules, so the grid may hold rows no real game could reach. Tests use
    /// it to build positions.
    #[doc(hidden)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Fixture hook: swaps in a falling piece without any fit check, so it
    /// may overlap locked cells or the walls. Tests use it to build positions.
    #[doc(hidden)]
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether the frame loop should stop.
    pub fn is_finished(&self) -> bool {
        self.quit || self.is_game_over()
    }

    /// Total rows cleared this session.
    pub fn rows_cleared(&self) -> u64 {
        self.rows_cleared
    }

    pub fn pieces_locked(&self) -> u64 {
        self.pieces_locked
    }

    pub fn drop_counter(&self) -> u32 {
        self.drop_counter
    }
}
