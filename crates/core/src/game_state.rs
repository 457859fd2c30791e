//! Game state module - the engine state machine
//!
//! This module ties together the board, the piece source and the active piece.
//! It runs spawn -> fall -> lock -> clear -> respawn and applies player
//! commands. It contains no timing logic: the caller invokes [`GameState::tick`]
//! at whatever gravity period it chooses.

use tracing::{debug, info, trace};

use crate::active::ActivePiece;
use crate::board::Board;
use crate::rng::PieceSource;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Outcome of a single lock-in, kept until an observer takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_gained: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    pieces: PieceSource,
    phase: Phase,
    started: bool,
    score: u32,
    lines: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a new game that starts from a preset board
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            pieces: PieceSource::new(seed),
            phase: Phase::Spawning,
            started: false,
            score: 0,
            lines: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board as integer cells (0 = empty, 1..=7 = color id)
    pub fn board_snapshot(&self) -> [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board.write_u8_grid(&mut grid);
        grid
    }

    /// Active piece shape, position and color, if a piece is falling
    pub fn active_piece(&self) -> Option<ActiveSnapshot> {
        self.active.map(ActiveSnapshot::from)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active_piece();
        out.phase = self.phase;
        out.game_over = self.is_game_over();
        out.score = self.score;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Draw a new piece and place it at the spawn position.
    ///
    /// Ends the game if the spawned piece does not fit.
    fn spawn_piece(&mut self) -> bool {
        self.phase = Phase::Spawning;
        let (shape, kind) = self.pieces.draw();
        self.place_spawned(ActivePiece::spawn_shape(kind, shape))
    }

    fn place_spawned(&mut self, piece: ActivePiece) -> bool {
        if !piece.fits(&self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
            info!(
                kind = piece.kind.as_str(),
                score = self.score,
                lines = self.lines,
                "game over: spawn blocked"
            );
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            piece_id = self.piece_id,
            "spawned piece"
        );
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Gravity tick: move the active piece down one row, locking it if it
    /// cannot move.
    ///
    /// Returns false (and does nothing) when the game is over or not started.
    pub fn tick(&mut self) -> bool {
        self.step_down()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1)
    }

    /// Same single step as a gravity tick, independent of the timer.
    pub fn soft_drop(&mut self) -> bool {
        self.step_down()
    }

    /// Rotate the active piece a quarter turn in place; rejected rotations
    /// leave the piece untouched.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let rotated = active.try_rotate(&self.board);
        if !rotated {
            trace!(kind = active.kind.as_str(), "rotation rejected");
        }
        rotated
    }

    /// Start over: empty board, zero score, first piece spawned.
    ///
    /// The piece sequence continues from the current RNG state.
    pub fn reset(&mut self) {
        let seed = self.pieces.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        info!(episode_id = next_episode, final_score = self.score, "reset");
        *self = Self::new(seed);
        self.episode_id = next_episode;
        self.start();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    fn try_move(&mut self, dx: i8) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let moved = active.try_shift(&self.board, dx, 0);
        if !moved {
            trace!(kind = active.kind.as_str(), dx, "move rejected");
        }
        moved
    }

    fn step_down(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.try_shift(&self.board, 0, 1) {
            self.lock_active();
        }
        true
    }

    /// Merge the active piece into the board, clear rows, score, respawn.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.phase = Phase::Locking;

        self.board.lock_shape(&active.shape, active.x, active.y);
        let cleared = self.board.clear_full_rows().len() as u32;

        let gained = LINE_CLEAR_BONUS * cleared;
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared);
        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared,
            score_gained: gained,
        });
        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines_cleared = cleared,
            score = self.score,
            "locked piece"
        );

        self.spawn_piece();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
