//! Caller-side lifecycle for one play-through.
//!
//! A `Session` owns a `Game`, seeds it on start, and remembers what the
//! stateless evaluator cannot: whether the win has already been reported.
//! Hosts create one session per game instead of keeping global flags.

use log::info;
use serde::{Deserialize, Serialize};

use super::game::Game;
use crate::core::{Direction, EngineConfig, Result};
use crate::rules::MoveOutcome;

/// Coarse status of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still playing, no win yet.
    #[default]
    Ongoing,
    /// A winning tile has appeared; play may continue.
    Won,
    /// No move can change the board.
    Over,
}

/// Result of one `Session::play` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub outcome: MoveOutcome,
    pub status: GameStatus,
    /// This turn produced the first winning tile of the session.
    pub newly_won: bool,
}

/// One play-through of a game.
#[derive(Clone, Debug)]
pub struct Session {
    game: Game,
    status: GameStatus,
    win_reported: bool,
}

impl Session {
    /// Build a game from `config` and place its opening tiles.
    pub fn start(config: EngineConfig) -> Result<Self> {
        let mut game = Game::with_config(config)?;
        game.start();
        info!("session started on a {0}x{0} board", game.side());
        let mut session = Self {
            game,
            status: GameStatus::Ongoing,
            win_reported: false,
        };
        session.refresh();
        Ok(session)
    }

    /// Wrap an already prepared game.
    ///
    /// A game that is already won starts as `Won`; its first `play` still
    /// reports `newly_won`.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        let mut session = Self {
            game,
            status: GameStatus::Ongoing,
            win_reported: false,
        };
        session.refresh();
        session
    }

    /// Apply one move, spawning per the game's spawn policy.
    ///
    /// Once the session is `Over`, moves are ignored.
    pub fn play(&mut self, direction: Direction) -> Turn {
        if self.status == GameStatus::Over {
            return Turn {
                outcome: MoveOutcome::default(),
                status: self.status,
                newly_won: false,
            };
        }

        let outcome = self.game.move_cells(direction, true);
        self.refresh();

        let newly_won = !self.win_reported && self.has_won();
        self.win_reported |= newly_won;
        if newly_won {
            info!("winning tile reached after {} moves", self.game.moves());
        }
        Turn {
            outcome,
            status: self.status,
            newly_won,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The underlying game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session, returning its game.
    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    fn has_won(&self) -> bool {
        self.game.is_game_win()
    }

    fn refresh(&mut self) {
        if self.game.is_game_over() {
            if self.status != GameStatus::Over {
                info!("game over with score {}", self.game.score());
            }
            self.status = GameStatus::Over;
        } else if self.status == GameStatus::Won || self.has_won() {
            self.status = GameStatus::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(cells: &[u8], win_exponent: u8) -> Game {
        let side = (cells.len() as f64).sqrt() as usize;
        let config = EngineConfig::new(side)
            .with_seed(11)
            .with_win_exponent(win_exponent);
        let mut game = Game::with_config(config).unwrap();
        game.set_cells(cells).unwrap();
        game
    }

    #[test]
    fn test_start_seeds_board() {
        let session = Session::start(EngineConfig::new(4).with_seed(5)).unwrap();
        assert_eq!(session.status(), GameStatus::Ongoing);
        assert_eq!(session.game().empty_cells_qty(), 14);
    }

    #[test]
    fn test_start_rejects_bad_config() {
        assert!(Session::start(EngineConfig::new(1)).is_err());
    }

    #[test]
    fn test_win_reported_once() {
        let session_game = game_with(&[
            2, 2, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ], 3);
        let mut session = Session::from_game(session_game);
        assert_eq!(session.status(), GameStatus::Ongoing);

        let turn = session.play(Direction::Left);
        assert!(turn.outcome.changed);
        assert!(turn.newly_won);
        assert_eq!(turn.status, GameStatus::Won);

        let turn = session.play(Direction::Right);
        assert!(!turn.newly_won);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_prewon_game_reports_win_on_first_play() {
        let mut session = Session::from_game(game_with(&[
            3, 0, 0,
            0, 0, 0,
            0, 0, 0,
        ], 3));
        assert_eq!(session.status(), GameStatus::Won);

        let turn = session.play(Direction::Down);
        assert!(turn.newly_won);
        let turn = session.play(Direction::Up);
        assert!(!turn.newly_won);
    }

    #[test]
    fn test_over_session_ignores_moves() {
        let mut session = Session::from_game(game_with(&[1, 2, 2, 1], 11));
        assert_eq!(session.status(), GameStatus::Over);

        let turn = session.play(Direction::Up);
        assert_eq!(turn.outcome, MoveOutcome::default());
        assert_eq!(turn.status, GameStatus::Over);
        assert_eq!(session.game().cells(), &[1, 2, 2, 1]);
    }

    #[test]
    fn test_move_into_game_over() {
        // Left merges the 2s, then the spawn fills the last cell.
        let mut session = Session::from_game(game_with(&[
            1, 1, 3,
            4, 5, 6,
            7, 8, 9,
        ], 11));
        let turn = session.play(Direction::Left);
        assert!(turn.outcome.changed);
        assert_eq!(&session.game().cells()[0..2], &[2, 3]);
        assert_eq!(session.game().empty_cells_qty(), 0);
        // Spawned tile is 2 or 4, which may or may not match its neighbours.
        assert_eq!(
            turn.status == GameStatus::Over,
            session.game().is_game_over()
        );
    }
}
