use boxes::Player;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::game::{play_game, GameResult};
use crate::player::Contestant;
use crate::Config;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub wins: [usize; 2],
    pub illegal_moves: [usize; 2],
    /// Games where both players own the same number of cells.
    ///
    /// These are not counted as wins, even though the board awards them to player two.
    pub ties: usize,
    /// Cells owned by each player, summed over all finished games.
    pub cells: [usize; 2],
}

impl MatchScore {
    pub fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }

    fn add_cells(&mut self, scores: [usize; 2]) {
        self.cells[0] += scores[0];
        self.cells[1] += scores[1];
    }

    /// Share of all cells owned by each player, in percent.
    pub fn cell_percentages(&self) -> Option<[f32; 2]> {
        let total = self.cells[0] + self.cells[1];
        (total > 0).then(|| self.cells.map(|cells| cells as f32 / total as f32 * 100.0))
    }
}

/// Plays `config.num_games` games between two contestants.
///
/// The starting player is picked at random for every game.
pub fn play_matchup(
    player_1: &mut Contestant,
    player_2: &mut Contestant,
    config: &Config,
    rng: &mut StdRng,
) -> anyhow::Result<MatchScore> {
    let player_names = [player_1.name.clone(), player_2.name.clone()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..config.num_games {
        let first_player = if rng.gen::<bool>() {
            Player::Two
        } else {
            Player::One
        };
        match play_game(
            config.rows,
            config.columns,
            first_player,
            player_1,
            player_2,
        )? {
            GameResult::Finished { scores, .. } if scores[0] == scores[1] => {
                debug!(game_idx, ?scores, "Tie");
                match_score.ties += 1;
                match_score.add_cells(scores);
            }
            GameResult::Finished { winner, scores } => {
                debug!(winner = player_names[winner.index()], game_idx, ?scores);
                match_score.wins[winner.index()] += 1;
                match_score.add_cells(scores);
            }
            GameResult::IllegalMoveByPlayer { player, err } => {
                info!(
                    player = player_names[player.index()],
                    game_idx, "Illegal move by player: {}", err
                );
                if config.stop_on_illegal_move {
                    break;
                } else {
                    match_score.wins[player.other().index()] += 1;
                    match_score.illegal_moves[player.index()] += 1;
                }
            }
        }
    }

    Ok(match_score)
}
