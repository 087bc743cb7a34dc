//! Session state behind the GUI: the game, MiMiu's pacing, chat and saving

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::game::{Game, Outcome, HUMAN};
use crate::persona::{self, Mood};
use crate::store::{GameKind, StateStore};
use crate::{Difficulty, MoveResult, Pos, PlacementError};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Menu,
    Board,
}

/// MiMiu's turn progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentState {
    Idle,
    /// Waiting out the cosmetic delay before moving
    Thinking { since: Instant },
}

/// Who wrote a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Player,
    MiMiu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
    pub mood: Mood,
}

/// Everything the GUI needs between frames
pub struct Session {
    pub game: Game,
    pub view: View,
    /// Difficulty picked on the menu, applied when a game starts
    pub selected_difficulty: Difficulty,
    pub opponent: OpponentState,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    pub chat: Vec<ChatLine>,
    delay: Duration,
    rng: StdRng,
    store: Box<dyn StateStore>,
    user_id: String,
}

impl Session {
    /// Build a session, resuming the user's saved game if one exists
    pub fn new(config: &AppConfig, store: Box<dyn StateStore>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let saved = match store.load(&config.user_id, GameKind::Gomoku) {
            Ok(saved) => saved,
            Err(err) => {
                warn!(%err, "could not load saved game");
                None
            }
        };

        let (game, view) = match saved {
            Some(snapshot) if !snapshot.outcome.is_terminal() => {
                info!(user = %config.user_id, moves = snapshot.board.stone_count(), "resuming saved game");
                (Game::restore(snapshot), View::Board)
            }
            _ => (Game::new(config.difficulty), View::Menu),
        };

        Self {
            selected_difficulty: game.difficulty(),
            game,
            view,
            opponent: OpponentState::Idle,
            last_ai_result: None,
            message: None,
            chat: Vec::new(),
            delay: config.opponent_delay(),
            rng,
            store,
            user_id: config.user_id.clone(),
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.opponent, OpponentState::Thinking { .. })
    }

    /// Time MiMiu has been "thinking", if she is
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match self.opponent {
            OpponentState::Thinking { since } => Some(since.elapsed()),
            OpponentState::Idle => None,
        }
    }

    /// Human input is accepted only on Black's turn of a running game
    pub fn accepts_input(&self) -> bool {
        self.view == View::Board && self.game.is_human_turn() && !self.is_ai_thinking()
    }

    /// Start a fresh game at the selected difficulty and show the board
    pub fn start(&mut self) {
        self.game = Game::new(self.selected_difficulty);
        self.opponent = OpponentState::Idle;
        self.last_ai_result = None;
        self.message = None;
        self.view = View::Board;
        self.persist();
    }

    /// Attempt to place the human's stone
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Outcome, PlacementError> {
        if self.is_ai_thinking() {
            return Err(PlacementError::NotYourTurn { turn: self.game.turn() });
        }
        let outcome = self.game.play_at(pos)?;
        self.message = None;
        self.persist();
        Ok(outcome)
    }

    /// Advance MiMiu's turn. Call once per frame.
    ///
    /// Starts the delay when it becomes White's turn and moves once the delay
    /// has passed. Returns true if a move was made.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.opponent {
            OpponentState::Idle if self.game.is_opponent_turn() => {
                self.opponent = OpponentState::Thinking { since: now };
                false
            }
            OpponentState::Thinking { since } if now.duration_since(since) >= self.delay => {
                self.opponent = OpponentState::Idle;
                match self.game.play_opponent(&mut self.rng) {
                    Ok(result) => {
                        self.last_ai_result = Some(result);
                        self.persist();
                        true
                    }
                    Err(err) => {
                        warn!(%err, "opponent move skipped");
                        false
                    }
                }
            }
            _ => false,
        }
    }

    /// Clear the board and keep playing at the same difficulty
    pub fn reset(&mut self) {
        self.game.reset();
        self.opponent = OpponentState::Idle;
        self.last_ai_result = None;
        self.message = None;
        self.persist();
    }

    /// The human gives up
    pub fn forfeit(&mut self) {
        self.game.concede(HUMAN);
        self.opponent = OpponentState::Idle;
        self.persist();
    }

    /// Leave the board for the menu
    pub fn back_to_menu(&mut self) {
        self.view = View::Menu;
        self.selected_difficulty = self.game.difficulty();
    }

    /// Send a chat message and record MiMiu's reply
    pub fn send_chat(&mut self, text: &str) -> Option<&ChatLine> {
        let reply = persona::reply(text, &mut self.rng)?;
        self.chat.push(ChatLine {
            speaker: Speaker::Player,
            text: text.trim().to_string(),
            mood: Mood::Normal,
        });
        self.chat.push(ChatLine {
            speaker: Speaker::MiMiu,
            text: reply.text.to_string(),
            mood: reply.mood,
        });
        self.chat.last()
    }

    /// Save the current game. Finished games clear the slot.
    fn persist(&mut self) {
        let result = if self.game.outcome().is_terminal() {
            self.store.clear(&self.user_id, GameKind::Gomoku)
        } else {
            self.store.save(&self.user_id, GameKind::Gomoku, &self.game.snapshot())
        };
        if let Err(err) = result {
            warn!(%err, "could not save game");
            self.message = Some(format!("Save failed: {err}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::Stone;
    use std::sync::Arc;

    /// Store handle that the test can still inspect after the session owns a box of it
    struct Shared(Arc<MemoryStore>);

    impl StateStore for Shared {
        fn load(&self, user: &str, kind: GameKind) -> Result<Option<crate::GameSnapshot>, crate::StoreError> {
            self.0.load(user, kind)
        }
        fn save(&self, user: &str, kind: GameKind, snapshot: &crate::GameSnapshot) -> Result<(), crate::StoreError> {
            self.0.save(user, kind, snapshot)
        }
        fn clear(&self, user: &str, kind: GameKind) -> Result<(), crate::StoreError> {
            self.0.clear(user, kind)
        }
    }

    fn config(delay_ms: u64) -> AppConfig {
        AppConfig {
            opponent_delay_ms: delay_ms,
            seed: Some(9),
            ..AppConfig::default()
        }
    }

    fn session(delay_ms: u64) -> (Session, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::new(&config(delay_ms), Box::new(Shared(store.clone())));
        session.start();
        (session, store)
    }

    #[test]
    fn test_opponent_waits_for_delay() {
        let (mut session, _) = session(800);
        session.try_place_stone(Pos::new(7, 7)).unwrap();

        let t0 = Instant::now();
        assert!(!session.tick(t0));
        assert!(session.is_ai_thinking());
        assert!(!session.accepts_input());
        assert!(!session.tick(t0 + Duration::from_millis(400)));
        assert_eq!(session.game.board().stone_count(), 1);

        assert!(session.tick(t0 + Duration::from_millis(800)));
        assert_eq!(session.game.board().stone_count(), 2);
        assert_eq!(session.game.turn(), Stone::Black);
        assert!(session.accepts_input());
    }

    #[test]
    fn test_input_rejected_while_thinking() {
        let (mut session, _) = session(800);
        session.try_place_stone(Pos::new(7, 7)).unwrap();
        session.tick(Instant::now());
        assert!(session.try_place_stone(Pos::new(0, 0)).is_err());
        assert_eq!(session.game.board().stone_count(), 1);
    }

    #[test]
    fn test_moves_are_saved_and_resumed() {
        let (mut session, store) = session(0);
        session.try_place_stone(Pos::new(7, 7)).unwrap();
        let now = Instant::now();
        session.tick(now);
        assert!(session.tick(now));

        let saved = store.load("local", GameKind::Gomoku).unwrap().unwrap();
        assert_eq!(saved.board.stone_count(), 2);

        let resumed = Session::new(&config(0), Box::new(Shared(store.clone())));
        assert_eq!(resumed.view, View::Board);
        assert_eq!(resumed.game.board(), session.game.board());
    }

    #[test]
    fn test_forfeit_clears_saved_game() {
        let (mut session, store) = session(0);
        session.try_place_stone(Pos::new(7, 7)).unwrap();
        session.forfeit();
        assert_eq!(session.game.outcome(), Outcome::WhiteWins);
        assert_eq!(store.load("local", GameKind::Gomoku).unwrap(), None);
        // No opponent move after a forfeit
        assert!(!session.tick(Instant::now()));
        assert_eq!(session.game.board().stone_count(), 1);
    }

    #[test]
    fn test_forfeit_after_win_gives_white_the_game() {
        let (mut session, store) = session(0);
        let mut board = crate::Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(4, c), Stone::Black);
            board.place_stone(Pos::new(10, c * 2), Stone::White);
        }
        session.game = crate::Game::restore(crate::GameSnapshot { board, ..session.game.snapshot() });
        assert_eq!(session.try_place_stone(Pos::new(4, 4)), Ok(Outcome::BlackWins));

        // Stale slot left by an earlier save
        store.save("local", GameKind::Gomoku, &session.game.snapshot()).unwrap();

        session.forfeit();
        assert_eq!(session.game.outcome(), Outcome::WhiteWins);
        assert_eq!(store.load("local", GameKind::Gomoku).unwrap(), None);
        assert!(!session.tick(Instant::now()));
    }

    #[test]
    fn test_reset_during_thinking_cancels_move() {
        let (mut session, _) = session(0);
        session.try_place_stone(Pos::new(7, 7)).unwrap();
        session.tick(Instant::now());
        session.reset();
        assert!(!session.is_ai_thinking());
        assert!(!session.tick(Instant::now()));
        assert!(session.game.board().is_board_empty());
    }

    #[test]
    fn test_start_uses_selected_difficulty() {
        let (mut session, _) = session(0);
        session.back_to_menu();
        session.selected_difficulty = Difficulty::Easy;
        session.start();
        assert_eq!(session.game.difficulty(), Difficulty::Easy);
        assert_eq!(session.view, View::Board);
    }

    #[test]
    fn test_chat_records_both_sides() {
        let (mut session, _) = session(0);
        assert!(session.send_chat("  ").is_none());
        let reply = session.send_chat("good night").unwrap().clone();
        assert_eq!(reply.speaker, Speaker::MiMiu);
        assert_eq!(reply.mood, Mood::Gentle);
        assert_eq!(session.chat.len(), 2);
        assert_eq!(session.chat[0].text, "good night");
    }
}
