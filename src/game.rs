//! Game session: board, turn and outcome for one match against MiMiu
//!
//! The human always plays Black and moves first. After every accepted Black
//! move the turn passes to White, and [`Game::play_opponent`] asks the
//! [`MoveSelector`] for White's reply.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, warn};

use crate::board::{Board, Pos, Stone};
use crate::difficulty::Difficulty;
use crate::engine::{MoveResult, MoveSelector, OPPONENT};
use crate::error::{GameError, PlacementError};
use crate::rules::{has_five_at_pos, winning_line};

/// The color the human plays
pub const HUMAN: Stone = Stone::Black;

/// State of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Outcome {
    #[default]
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Winning color, if any
    pub fn winner(self) -> Option<Stone> {
        match self {
            Outcome::BlackWins => Some(Stone::Black),
            Outcome::WhiteWins => Some(Stone::White),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Outcome in which `stone` has won
    pub fn win_for(stone: Stone) -> Outcome {
        match stone {
            Stone::Black => Outcome::BlackWins,
            Stone::White => Outcome::WhiteWins,
            Stone::Empty => Outcome::Draw,
        }
    }
}

/// Serializable copy of a game, used for saved state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Stone,
    pub outcome: Outcome,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub last_move: Option<Pos>,
}

/// One gomoku match: the board, whose turn it is and how it ended
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Stone,
    outcome: Outcome,
    difficulty: Difficulty,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
}

impl Game {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            turn: HUMAN,
            outcome: Outcome::InProgress,
            difficulty,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// The five-or-more run that ended the game, if it ended on a line
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn move_count(&self) -> u32 {
        self.board.stone_count()
    }

    /// True when the human may place a stone
    pub fn is_human_turn(&self) -> bool {
        self.turn == HUMAN && !self.outcome.is_terminal()
    }

    /// True when [`Game::play_opponent`] should run
    pub fn is_opponent_turn(&self) -> bool {
        self.turn == OPPONENT && !self.outcome.is_terminal()
    }

    /// Change difficulty. Only allowed before the first stone.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if !self.board.is_board_empty() {
            return Err(GameError::GameAlreadyStarted);
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Place the human's stone.
    ///
    /// Refused placements leave the game untouched.
    pub fn play(&mut self, row: i32, col: i32) -> Result<Outcome, PlacementError> {
        let pos = Pos::try_new(row, col).ok_or(PlacementError::OffBoard { row, col })?;
        self.play_at(pos)
    }

    /// Same as [`Game::play`] for an already validated position
    pub fn play_at(&mut self, pos: Pos) -> Result<Outcome, PlacementError> {
        if let Err(err) = self.check_placement(pos, HUMAN) {
            warn!(%pos, %err, "placement rejected");
            return Err(err);
        }

        self.board.place_stone(pos, HUMAN);
        self.last_move = Some(pos);

        if has_five_at_pos(&self.board, pos, HUMAN) {
            self.finish(Outcome::BlackWins, Some(pos));
        } else if self.board.is_full() {
            self.finish(Outcome::Draw, None);
        } else {
            self.turn = OPPONENT;
        }
        Ok(self.outcome)
    }

    /// Let MiMiu move.
    ///
    /// Runs the move selector once, places its stone and applies the outcome.
    pub fn play_opponent<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveResult, PlacementError> {
        if self.outcome.is_terminal() {
            return Err(PlacementError::GameOver { outcome: self.outcome });
        }
        if self.turn != OPPONENT {
            return Err(PlacementError::NotYourTurn { turn: self.turn });
        }

        let result = MoveSelector::new(self.difficulty).play(&mut self.board, rng);
        if let Some(pos) = result.best_move {
            self.last_move = Some(pos);
        }

        match result.outcome {
            Outcome::WhiteWins => self.finish(Outcome::WhiteWins, result.best_move),
            Outcome::Draw => self.finish(Outcome::Draw, None),
            _ if self.board.is_full() => self.finish(Outcome::Draw, None),
            _ => self.turn = HUMAN,
        }
        Ok(result)
    }

    /// Forfeit on behalf of `side`; the other color wins immediately,
    /// whatever state the game was in.
    pub fn concede(&mut self, side: Stone) -> Outcome {
        let outcome = Outcome::win_for(side.opponent());
        info!(?side, %outcome, "game conceded");
        self.outcome = outcome;
        self.winning_line = None;
        outcome
    }

    /// Start over: empty board, Black to move, game in progress.
    pub fn reset(&mut self) {
        debug!(difficulty = %self.difficulty, "game reset");
        *self = Self::new(self.difficulty);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            outcome: self.outcome,
            difficulty: self.difficulty,
            last_move: self.last_move,
        }
    }

    /// Rebuild a game from saved state.
    ///
    /// A full board saved as still in progress is restored as a draw.
    pub fn restore(snapshot: GameSnapshot) -> Self {
        let winning_line = snapshot
            .last_move
            .zip(snapshot.outcome.winner())
            .and_then(|(pos, color)| winning_line(&snapshot.board, pos, color));
        let turn = match snapshot.turn {
            Stone::Empty => HUMAN,
            turn => turn,
        };
        let outcome = match snapshot.outcome {
            Outcome::InProgress if snapshot.board.is_full() => {
                warn!("saved game has a full board but no result; treating it as a draw");
                Outcome::Draw
            }
            outcome => outcome,
        };
        Self {
            board: snapshot.board,
            turn,
            outcome,
            difficulty: snapshot.difficulty,
            last_move: snapshot.last_move,
            winning_line,
        }
    }

    fn check_placement(&self, pos: Pos, color: Stone) -> Result<(), PlacementError> {
        if self.outcome.is_terminal() {
            return Err(PlacementError::GameOver { outcome: self.outcome });
        }
        if self.turn != color {
            return Err(PlacementError::NotYourTurn { turn: self.turn });
        }
        if !self.board.is_empty(pos) {
            return Err(PlacementError::Occupied { pos });
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, last: Option<Pos>) {
        self.winning_line = last
            .zip(outcome.winner())
            .and_then(|(pos, color)| winning_line(&self.board, pos, color));
        self.outcome = outcome;
        info!(%outcome, moves = self.move_count(), "game over");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new(Difficulty::Hard);
        assert!(game.board().is_board_empty());
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.is_human_turn());
        assert!(!game.is_opponent_turn());
    }

    #[test]
    fn test_human_move_flips_turn() {
        let mut game = Game::default();
        assert_eq!(game.play(7, 7), Ok(Outcome::InProgress));
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.last_move(), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_rejected_moves_change_nothing() {
        let mut game = Game::default();
        game.play(7, 7).unwrap();

        // White to move
        assert_eq!(game.play(0, 0), Err(PlacementError::NotYourTurn { turn: Stone::White }));
        game.play_opponent(&mut rng()).unwrap();
        assert_eq!(game.turn(), Stone::Black);

        let before = game.snapshot();
        assert_eq!(game.play(7, 7), Err(PlacementError::Occupied { pos: Pos::new(7, 7) }));
        assert_eq!(game.play(-1, 3), Err(PlacementError::OffBoard { row: -1, col: 3 }));
        assert_eq!(game.play(3, 15), Err(PlacementError::OffBoard { row: 3, col: 15 }));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_opponent_refuses_out_of_turn() {
        let mut game = Game::default();
        assert_eq!(
            game.play_opponent(&mut rng()),
            Err(PlacementError::NotYourTurn { turn: Stone::Black })
        );
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_black_five_ends_game() {
        let mut game = Game::new(Difficulty::Easy);
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(0, c), Stone::Black);
            board.place_stone(Pos::new(5, c * 2), Stone::White);
        }
        game = Game::restore(GameSnapshot { board, ..game.snapshot() });

        assert_eq!(game.play(0, 4), Ok(Outcome::BlackWins));
        // Turn does not change on a terminal placement
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.winning_line().map(<[Pos]>::len), Some(5));
        assert!(matches!(game.play(9, 9), Err(PlacementError::GameOver { .. })));
        assert!(matches!(game.play_opponent(&mut rng()), Err(PlacementError::GameOver { .. })));
    }

    #[test]
    fn test_concede_and_reset() {
        let mut game = Game::new(Difficulty::Hard);
        game.play(7, 7).unwrap();
        assert_eq!(game.concede(Stone::Black), Outcome::WhiteWins);
        assert_eq!(game.outcome(), Outcome::WhiteWins);

        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert!(game.winning_line().is_none());
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_concede_works_from_terminal_state() {
        let mut game = Game::default();
        game.concede(Stone::White);
        assert_eq!(game.outcome(), Outcome::BlackWins);
        assert_eq!(game.concede(Stone::Black), Outcome::WhiteWins);
    }

    #[test]
    fn test_concede_overrides_a_win() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(3, c), Stone::Black);
            board.place_stone(Pos::new(9, c * 2), Stone::White);
        }
        let mut game = Game::restore(GameSnapshot { board, ..Game::default().snapshot() });
        assert_eq!(game.play(3, 4), Ok(Outcome::BlackWins));
        assert!(game.winning_line().is_some());

        assert_eq!(game.concede(Stone::Black), Outcome::WhiteWins);
        assert_eq!(game.outcome(), Outcome::WhiteWins);
        assert!(game.winning_line().is_none());
    }

    #[test]
    fn test_restore_full_board_in_progress_is_draw() {
        let mut board = Board::new();
        for pos in Pos::all() {
            let stone = if (pos.col / 2 + pos.row) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }
        let game = Game::restore(GameSnapshot {
            board,
            turn: Stone::Black,
            outcome: Outcome::InProgress,
            difficulty: Difficulty::Normal,
            last_move: None,
        });
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(!game.is_human_turn());
        assert!(!game.is_opponent_turn());
    }

    #[test]
    fn test_difficulty_locked_after_first_move() {
        let mut game = Game::new(Difficulty::Easy);
        game.set_difficulty(Difficulty::Hard).unwrap();
        game.play(1, 1).unwrap();
        assert_eq!(game.set_difficulty(Difficulty::Easy), Err(GameError::GameAlreadyStarted));
        assert_eq!(game.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_snapshot_round_trip_keeps_winning_line() {
        let mut game = Game::default();
        let mut board = Board::new();
        for r in 2..6 {
            board.place_stone(Pos::new(r, 3), Stone::Black);
        }
        board.place_stone(Pos::new(14, 0), Stone::White);
        game = Game::restore(GameSnapshot { board, ..game.snapshot() });
        game.play(6, 3).unwrap();

        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let restored = Game::restore(serde_json::from_str(&json).unwrap());
        assert_eq!(restored.outcome(), Outcome::BlackWins);
        assert_eq!(restored.winning_line(), game.winning_line());
        assert_eq!(restored.board(), game.board());
    }
}
