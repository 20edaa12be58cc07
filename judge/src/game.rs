use boxes::{Board, IllegalMove, Player};
use tracing::{debug, trace};

use crate::player::Contestant;

#[derive(Debug)]
pub enum GameResult {
    Finished {
        /// As decided by [`Board::determine_winner()`].
        winner: Player,
        /// The number of cells of player one and two.
        scores: [usize; 2],
    },
    IllegalMoveByPlayer {
        player: Player,
        err: IllegalMove,
    },
}

/// Plays one game between two contestants, `player_1` being [`Player::One`].
///
/// Returns an error if the board dimensions are invalid or a bot fails to
/// choose a segment, but not when an illegal move is played.
pub fn play_game(
    rows: usize,
    columns: usize,
    first_player: Player,
    player_1: &mut Contestant,
    player_2: &mut Contestant,
) -> anyhow::Result<GameResult> {
    let mut board = Board::with_first_player(rows, columns, first_player)?;
    let mut contestants = [player_1, player_2];

    while !board.is_game_over() {
        let player = board.current_player();
        let contestant = &mut contestants[player.index()];
        let segment_id = contestant.choose_segment(&board)?;
        match board.apply_move(segment_id) {
            Ok(outcome) => {
                if outcome.bonus_move() {
                    debug!(
                        player = &contestant.name,
                        cells = ?outcome.completed_cells,
                        "Completed cells"
                    );
                }
            }
            Err(err) => return Ok(GameResult::IllegalMoveByPlayer { player, err }),
        }
    }
    trace!("Final board:\n{}", board);

    Ok(GameResult::Finished {
        winner: board.determine_winner(),
        scores: board.scores(),
    })
}

#[cfg(test)]
mod tests {
    use boxes::{NoFreeSegments, SegmentId};
    use boxes_bot_utils::{Bot, BotKind};

    use super::*;

    /// Always claims the first segment of the board.
    struct StubbornBot;

    impl Bot for StubbornBot {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn choose_segment(&mut self, _board: &Board) -> Result<SegmentId, NoFreeSegments> {
            Ok(0)
        }
    }

    #[test]
    fn bots_play_until_the_board_is_full() {
        for seed in 0..10 {
            let mut random = Contestant::new("random", BotKind::Random.build(seed));
            let mut greedy = Contestant::new("greedy", BotKind::Greedy.build(seed));
            match play_game(3, 3, Player::One, &mut random, &mut greedy).unwrap() {
                GameResult::Finished { winner, scores } => {
                    assert_eq!(scores[0] + scores[1], 9);
                    let expected = if scores[0] > scores[1] {
                        Player::One
                    } else {
                        Player::Two
                    };
                    assert_eq!(winner, expected);
                }
                GameResult::IllegalMoveByPlayer { err, .. } => panic!("{}", err),
            }
        }
    }

    #[test]
    fn illegal_move_ends_the_game() {
        let mut stubborn_1 = Contestant::new("first", Box::new(StubbornBot));
        let mut stubborn_2 = Contestant::new("second", Box::new(StubbornBot));
        let result = play_game(2, 2, Player::Two, &mut stubborn_1, &mut stubborn_2).unwrap();
        // Player two claims segment 0, then player one tries the same
        match result {
            GameResult::IllegalMoveByPlayer { player, err } => {
                assert_eq!(player, Player::One);
                assert_eq!(err, IllegalMove::SegmentAlreadyUsed { segment_id: 0 });
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_dimensions_are_an_error() {
        let mut random = Contestant::new("random", BotKind::Random.build(0));
        let mut greedy = Contestant::new("greedy", BotKind::Greedy.build(0));
        assert!(play_game(0, 3, Player::One, &mut random, &mut greedy).is_err());
    }
}
