//! Session orchestration: owns the engine, the tick timer and the high score
//! ledger, and forwards snapshots to the renderer.

use super::snapshot::{GameSummary, Renderer, Snapshot};
use super::timer::TickTimer;
use crate::game::{Difficulty, Direction, GridSize, SessionState, SnakeGame, TickOutcome};
use crate::high_scores::{HighScoreLedger, ScoreStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::time::{Duration, Instant};

/// UI-agnostic commands from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    /// Start a session at the given difficulty.
    Start(Difficulty),
    /// Start a session at the highlighted difficulty.
    StartSelected,
    SelectPrevious,
    SelectNext,
    Restart,
    Menu,
    Quit,
}

pub struct SessionController<R: Renderer, S: ScoreStore> {
    game: SnakeGame,
    /// Difficulty of the current session, or highlighted in the menu.
    difficulty: Difficulty,
    ledger: HighScoreLedger,
    store: S,
    renderer: R,
    timer: TickTimer,
    rng: StdRng,
    last_game: Option<GameSummary>,
}

impl<R: Renderer, S: ScoreStore> SessionController<R, S> {
    pub fn new(renderer: R, store: S) -> Self {
        Self::with_rng(renderer, store, StdRng::from_entropy())
    }

    /// Deterministic food placement, for tests and replays.
    pub fn with_seed(renderer: R, store: S, seed: u64) -> Self {
        Self::with_rng(renderer, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(renderer: R, store: S, rng: StdRng) -> Self {
        let ledger = HighScoreLedger::load_from(&store);
        Self {
            game: SnakeGame::new(GridSize::default()),
            difficulty: Difficulty::Easy,
            ledger,
            store,
            renderer,
            timer: TickTimer::new(),
            rng,
            last_game: None,
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    /// Direct engine access for scripted scenarios.
    pub fn game_mut(&mut self) -> &mut SnakeGame {
        &mut self.game
    }

    pub fn state(&self) -> SessionState {
        self.game.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn ledger(&self) -> &HighScoreLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn last_game(&self) -> Option<&GameSummary> {
        self.last_game.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.game,
            self.difficulty,
            self.ledger.get(self.difficulty),
            self.last_game,
        )
    }

    /// Send the current snapshot to the renderer.
    pub fn render(&mut self) -> io::Result<()> {
        let snapshot = self.snapshot();
        self.renderer.present(&snapshot)
    }

    /// Dispatch one input command. `Quit` is left to the caller.
    pub fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Turn(direction) => {
                self.request_direction(direction);
                Ok(())
            }
            Command::TogglePause => self.request_pause_toggle(),
            Command::Start(difficulty) => self.start(difficulty),
            Command::StartSelected => self.start(self.difficulty),
            Command::SelectPrevious => self.shift_selection(Difficulty::ALL.len() - 1),
            Command::SelectNext => self.shift_selection(1),
            Command::Restart => self.restart(),
            Command::Menu => self.back_to_menu(),
            Command::Quit => Ok(()),
        }
    }

    /// Begin a new session, replacing any session in progress.
    pub fn start(&mut self, difficulty: Difficulty) -> io::Result<()> {
        self.timer.cancel();
        self.difficulty = difficulty;
        self.last_game = None;
        self.game.start(difficulty, &mut self.rng);

        let interval = Duration::from_millis(difficulty.profile().tick_interval_ms);
        self.timer.start(interval, Instant::now());
        tracing::info!(
            difficulty = difficulty.key(),
            food = self.game.food.len(),
            "session started"
        );
        self.render()
    }

    /// Play again at the same difficulty.
    pub fn restart(&mut self) -> io::Result<()> {
        self.start(self.difficulty)
    }

    /// Abandon the session and show the level selection.
    pub fn back_to_menu(&mut self) -> io::Result<()> {
        self.timer.cancel();
        if self.game.state != SessionState::Idle {
            tracing::info!(score = self.game.score, "returned to menu");
        }
        self.game.reset();
        self.render()
    }

    /// Queue a direction for the next tick. Only the pending direction
    /// changes; the snake itself moves on the timer.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.game.set_pending_direction(direction)
    }

    pub fn request_pause_toggle(&mut self) -> io::Result<()> {
        if !matches!(
            self.game.state,
            SessionState::Running | SessionState::Paused
        ) {
            return Ok(());
        }
        self.game.toggle_pause();
        tracing::debug!(state = ?self.game.state, "pause toggled");
        self.render()
    }

    /// Run a tick if the timer is due. Call on every pass of the event loop.
    pub fn on_timer(&mut self, now: Instant) -> io::Result<Option<TickOutcome>> {
        if !self.timer.poll(now) {
            return Ok(None);
        }
        self.tick().map(Some)
    }

    /// How long the event loop may wait for input before the next tick.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Advance the engine once and publish the result.
    pub fn tick(&mut self) -> io::Result<TickOutcome> {
        let outcome = self.game.tick(&mut self.rng);
        match outcome {
            TickOutcome::Skipped => return Ok(outcome),
            TickOutcome::Moved { .. } => {}
            TickOutcome::GameOver { collision, score } => {
                self.timer.cancel();
                let new_record = self.record_score(score);
                tracing::info!(
                    difficulty = self.difficulty.key(),
                    score,
                    ?collision,
                    new_record,
                    "game over"
                );
                self.last_game = Some(GameSummary {
                    difficulty: self.difficulty,
                    score,
                    collision,
                    new_record,
                });
            }
        }
        self.render()?;
        Ok(outcome)
    }

    /// Update the ledger and persist it if the score is a new best. Storage
    /// failures are logged and otherwise ignored.
    fn record_score(&mut self, score: u32) -> bool {
        if !self.ledger.record_if_higher(self.difficulty, score) {
            return false;
        }
        if let Err(e) = self.store.save(self.ledger.scores()) {
            tracing::warn!("could not save high scores: {}", e);
        }
        true
    }

    fn shift_selection(&mut self, step: usize) -> io::Result<()> {
        if self.game.state != SessionState::Idle {
            return Ok(());
        }
        let count = Difficulty::ALL.len();
        self.difficulty = Difficulty::from_index((self.difficulty.index() + step) % count);
        self.render()
    }
}
