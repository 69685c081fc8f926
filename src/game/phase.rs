//! Game phases and inning rules

use crate::core::{Score, Team};
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// Innings in a regulation game
pub const REGULATION_INNINGS: u32 = 9;

/// Outs that end a half-inning
pub const OUTS_PER_HALF_INNING: u8 = 3;

/// Where the game loop is between turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A team is batting and has fewer than three outs
    InningInProgress,
    /// The third out was just recorded
    HalfInningOver,
    /// Both halves of an inning are complete
    InningOver,
    /// Terminal: a team leads after a completed inning past regulation
    GameOver,
}

impl GamePhase {
    pub fn is_game_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    /// A team is batting or the game is over; nothing is pending
    pub fn is_settled(&self) -> bool {
        matches!(self, GamePhase::InningInProgress | GamePhase::GameOver)
    }

    /// Apply this phase's transition to `game` and return the next phase
    ///
    /// - `HalfInningOver`: swap teams and clear outs and bases; if the home
    ///   team just batted the inning number advances.
    /// - `InningOver`: the game ends if at least nine innings are complete
    ///   and the score is not tied, otherwise the next inning starts.
    /// - Settled phases are returned unchanged.
    pub fn advance(self, game: &mut GameState) -> GamePhase {
        match self {
            GamePhase::HalfInningOver => {
                let finished = game.current_team;
                game.swap_team();
                game.reset_half_inning();
                if finished == Team::Home {
                    game.start_next_inning();
                }
                GamePhase::after_half_inning(finished)
            }
            GamePhase::InningOver => {
                if is_game_over(game.inning, &game.score) {
                    GamePhase::GameOver
                } else {
                    GamePhase::InningInProgress
                }
            }
            GamePhase::InningInProgress | GamePhase::GameOver => self,
        }
    }

    /// Phase reached when a half-inning batted by `finished` ends
    ///
    /// The home team always bats last, so its third out closes the inning.
    pub fn after_half_inning(finished: Team) -> GamePhase {
        match finished {
            Team::Guest => GamePhase::InningInProgress,
            Team::Home => GamePhase::InningOver,
        }
    }
}

/// Whether a game ends once the inning before `next_inning` is complete
///
/// Only checked between full innings: the game is over once at least
/// [`REGULATION_INNINGS`] innings are complete and the score is not tied.
pub fn is_game_over(next_inning: u32, score: &Score) -> bool {
    next_inning > REGULATION_INNINGS && !score.is_tied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_half_inning() {
        assert_eq!(
            GamePhase::after_half_inning(Team::Guest),
            GamePhase::InningInProgress
        );
        assert_eq!(
            GamePhase::after_half_inning(Team::Home),
            GamePhase::InningOver
        );
    }

    #[test]
    fn test_no_game_over_before_regulation() {
        let score = Score { guest: 10, home: 0 };
        for next_inning in 2..=REGULATION_INNINGS {
            assert!(!is_game_over(next_inning, &score));
        }
        assert!(is_game_over(REGULATION_INNINGS + 1, &score));
    }

    #[test]
    fn test_tie_extends_game() {
        let tied = Score { guest: 3, home: 3 };
        assert!(!is_game_over(REGULATION_INNINGS + 1, &tied));
        assert!(!is_game_over(REGULATION_INNINGS + 5, &tied));

        let broken = Score { guest: 3, home: 4 };
        assert!(is_game_over(REGULATION_INNINGS + 5, &broken));
    }

    #[test]
    fn test_terminal_phase() {
        assert!(GamePhase::GameOver.is_game_over());
        assert!(!GamePhase::InningOver.is_game_over());
        assert!(GamePhase::GameOver.is_settled());
        assert!(!GamePhase::HalfInningOver.is_settled());
    }

    #[test]
    fn test_advance_after_guest_half() {
        let mut game = GameState::new();
        game.outs = 3;
        game.bases.set(2, true);

        let next = GamePhase::HalfInningOver.advance(&mut game);
        assert_eq!(next, GamePhase::InningInProgress);
        assert_eq!(game.current_team, Team::Home);
        assert_eq!(game.inning, 1);
        assert_eq!(game.outs, 0);
        assert!(game.bases.is_empty());
    }

    #[test]
    fn test_advance_closes_inning() {
        let mut game = GameState::new();
        game.inning = REGULATION_INNINGS;
        game.current_team = Team::Home;
        game.outs = 3;
        game.score = Score { guest: 1, home: 2 };

        let next = GamePhase::HalfInningOver.advance(&mut game);
        assert_eq!(next, GamePhase::InningOver);
        assert_eq!(game.inning, REGULATION_INNINGS + 1);
        assert_eq!(next.advance(&mut game), GamePhase::GameOver);

        let before = game.clone();
        assert_eq!(GamePhase::GameOver.advance(&mut game), GamePhase::GameOver);
        assert_eq!(game, before);
    }
}
