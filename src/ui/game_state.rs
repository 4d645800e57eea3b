//! Game state management for the GUI

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::board::{Player, Pos};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::session::{Session, SessionState, Status};

/// Finished search: the advanced session and what the move produced
type AiOutcome = (Session, Result<SessionState, GameError>);

/// AI thinking state
#[derive(Default)]
pub enum AiState {
    #[default]
    Idle,
    Thinking {
        receiver: Receiver<AiOutcome>,
        start_time: Instant,
    },
}

/// Session plus the GUI-only bits around it
pub struct GameState {
    pub session: Session,
    /// Settings the next game is started with
    pub config: GameConfig,
    pub ai_state: AiState,
    pub last_ai_time: Option<Duration>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            session: Session::new(),
            config,
            ai_state: AiState::Idle,
            last_ai_time: None,
            message: None,
        };
        state.start();
        state
    }

    /// Start a new game from the current settings
    pub fn start(&mut self) {
        self.ai_state = AiState::Idle;
        self.last_ai_time = None;
        self.message = None;

        let config = &self.config;
        let result = self.session.start(
            config.height as i64,
            config.width as i64,
            config.run_length as i64,
            config.misere,
        );
        match result {
            Ok(_) => debug!(
                "new game {}x{} k={} misere={} ai={:?}",
                config.height, config.width, config.run_length, config.misere, config.ai_player
            ),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Replay the current game from an empty board
    pub fn restart(&mut self) {
        self.ai_state = AiState::Idle;
        self.message = None;
        if let Err(e) = self.session.restart() {
            self.message = Some(e.to_string());
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.session.status().is_active() && self.config.ai_player == Some(self.session.player())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the clicked cell
    pub fn try_place(&mut self, pos: Pos) {
        if self.is_ai_thinking() || self.is_ai_turn() {
            return;
        }
        match self.session.make_move(pos.x as i64, pos.y as i64) {
            Ok(_) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Start AI thinking on a copy of the session
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() || !self.session.status().is_active() {
            return;
        }

        let mut session = self.session.clone();
        let depth = self.config.search_depth();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = session.ai_move(depth);
            let _ = tx.send((session, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(outcome) => Some((outcome, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(((session, outcome), elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_time = Some(elapsed);
            match outcome {
                Ok(_) => self.session = session,
                Err(e) => {
                    warn!("AI move failed: {}", e);
                    self.message = Some(e.to_string());
                }
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo last move; against the AI, undo back to the human's turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if let Err(e) = self.session.undo() {
            self.message = Some(e.to_string());
            return;
        }
        self.message = None;
        if self.is_ai_turn() && self.session.history_len() > 0 {
            let _ = self.session.undo();
        }
    }

    /// Headline for the status card
    pub fn status_text(&self) -> String {
        match self.session.status() {
            Status::Uninitialized => "No game".to_string(),
            Status::InProgress => format!("{} to move", self.session.player()),
            Status::Won(player) if self.session.misere() => {
                format!("{} wins ({} completed a run)", player, player.opponent())
            }
            Status::Won(player) => format!("{} wins", player),
            Status::Draw => "Draw".to_string(),
        }
    }

    /// Side controlled by a human, if exactly one
    pub fn human_player(&self) -> Option<Player> {
        self.config.ai_player.map(Player::opponent)
    }
}
