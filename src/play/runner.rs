//! Match driver: plays one game between two agents.
//!
//! Every move an agent returns is checked with `is_valid_move` before it
//! is applied, so a faulty agent surfaces as an error instead of tripping
//! the engine's internal assertions.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::agent::{Agent, RandomAgent};
use super::config::MatchConfig;
use crate::core::{GameRng, GameState, MoveRecord, Player};
use crate::error::{Error, Result};
use crate::rules::GameResult;

/// A finished match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Terminal position.
    pub final_state: GameState,

    /// How the game ended.
    pub result: GameResult,

    /// Every move played, in order.
    pub history: Vector<MoveRecord>,
}

impl MatchOutcome {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    /// Replay the history from the starting position.
    ///
    /// Yields the position after each move; the last one equals
    /// `final_state`.
    pub fn replay(&self) -> impl Iterator<Item = GameState> + '_ {
        self.history.iter().scan(GameState::new_game(), |state, record| {
            *state = state.apply_move(record.mv);
            Some(state.clone())
        })
    }
}

/// Play a game from the starting position.
///
/// `x_agent` moves for `X`, `o_agent` for `O`.
///
/// ## Errors
///
/// - `Error::AgentIllegalMove` if an agent returns a move that fails `is_valid_move`
/// - `Error::AgentNoMove` if an agent returns nothing in a live position
/// - `Error::PlyLimit` if the game is still live after `config.max_plies`
#[instrument(skip_all, fields(max_plies = config.max_plies))]
pub fn play_match<A, B>(
    config: &MatchConfig,
    x_agent: &mut A,
    o_agent: &mut B,
) -> Result<MatchOutcome>
where
    A: Agent + ?Sized,
    B: Agent + ?Sized,
{
    let mut state = GameState::new_game();
    let mut history = Vector::new();
    info!("match started");

    while !state.is_over() {
        let ply = history.len() as u32;
        if ply >= config.max_plies {
            return Err(Error::PlyLimit {
                limit: config.max_plies,
            });
        }

        let player = state.next_player();
        let selected = match player {
            Player::X => x_agent.select_move(&state),
            Player::O => o_agent.select_move(&state),
        };
        let mv = selected.ok_or(Error::AgentNoMove { player })?;
        if !state.is_valid_move(&mv) {
            return Err(Error::AgentIllegalMove { player, mv });
        }

        debug!(ply, %player, %mv, "agent moved");
        state = state.apply_move(mv);
        history.push_back(MoveRecord::new(player, mv, ply));
    }

    // The loop only exits on a terminal position.
    let result = match state.winner() {
        Some(winner) => GameResult::Winner(winner),
        None => GameResult::Draw,
    };
    info!(%result, plies = history.len(), "match finished");

    Ok(MatchOutcome {
        final_state: state,
        result,
        history,
    })
}

/// Play two `RandomAgent`s against each other.
///
/// Each side gets its own fork of `GameRng::new(config.seed)`.
pub fn play_random_match(config: &MatchConfig) -> Result<MatchOutcome> {
    let mut rng = GameRng::new(config.seed);
    let mut x_agent = RandomAgent::new(rng.fork());
    let mut o_agent = RandomAgent::new(rng.fork());
    play_match(config, &mut x_agent, &mut o_agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Point};

    /// Always returns the first legal move.
    struct FirstLegal;

    impl Agent for FirstLegal {
        fn select_move(&mut self, state: &GameState) -> Option<Move> {
            state.legal_moves().first().copied()
        }
    }

    /// Always returns the same move, legal or not.
    struct Fixed(Move);

    impl Agent for Fixed {
        fn select_move(&mut self, _state: &GameState) -> Option<Move> {
            Some(self.0)
        }
    }

    /// Never answers.
    struct Silent;

    impl Agent for Silent {
        fn select_move(&mut self, _state: &GameState) -> Option<Move> {
            None
        }
    }

    #[test]
    fn test_random_match_finishes() {
        let outcome = play_random_match(&MatchConfig::default()).unwrap();

        assert!(outcome.final_state.is_over());
        assert!(outcome.plies() > 0);
        assert_eq!(outcome.result.winner(), outcome.final_state.winner());
    }

    #[test]
    fn test_random_match_deterministic_with_seed() {
        let config = MatchConfig::default().with_seed(2024);
        let a = play_random_match(&config).unwrap();
        let b = play_random_match(&config).unwrap();

        assert_eq!(a.history, b.history);
        assert_eq!(a.result, b.result);
    }

    #[test]
    fn test_first_legal_match() {
        let mut x = FirstLegal;
        let mut o = FirstLegal;
        let outcome = play_match(&MatchConfig::default(), &mut x, &mut o).unwrap();

        // Both sides capture as soon as they can; X is then left blocked.
        let moves: Vec<_> = outcome.history.iter().map(|r| r.mv.to_string()).collect();
        assert_eq!(moves, vec!["A3-A2", "B1-A2", "B3-A2", "C1-C2"]);
        assert!(outcome.final_state.legal_moves().is_empty());
        assert_eq!(outcome.result, GameResult::Winner(Player::O));
    }

    #[test]
    fn test_history_alternates_players() {
        let outcome = play_random_match(&MatchConfig::default().with_seed(3)).unwrap();

        for (i, record) in outcome.history.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(record.player, expected);
            assert_eq!(record.ply, i as u32);
        }
    }

    #[test]
    fn test_replay_reaches_final_state() {
        let outcome = play_random_match(&MatchConfig::default().with_seed(11)).unwrap();
        let last = outcome.replay().last().unwrap();

        assert_eq!(last, outcome.final_state);
    }

    #[test]
    fn test_illegal_agent_move_is_error() {
        let bad = Move::new(Point::new(1, 1), Point::new(2, 1));
        let mut x = Fixed(bad);
        let mut o = FirstLegal;

        let err = play_match(&MatchConfig::default(), &mut x, &mut o).unwrap_err();
        assert!(matches!(err, Error::AgentIllegalMove { player: Player::X, .. }));
    }

    #[test]
    fn test_silent_agent_is_error() {
        let mut x = FirstLegal;
        let mut o = Silent;

        let err = play_match(&MatchConfig::default(), &mut x, &mut o).unwrap_err();
        assert!(matches!(err, Error::AgentNoMove { player: Player::O }));
    }

    #[test]
    fn test_ply_limit() {
        let config = MatchConfig::default().with_max_plies(1);
        let err = play_random_match(&config).unwrap_err();

        assert!(matches!(err, Error::PlyLimit { limit: 1 }));
    }
}
