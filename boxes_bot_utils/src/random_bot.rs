use boxes::{Board, NoFreeSegments, SegmentId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::Bot;

/// Picks any free segment, uniformly at random.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_segment(&mut self, board: &Board) -> Result<SegmentId, NoFreeSegments> {
        board
            .free_segments()
            .choose(&mut self.rng)
            .copied()
            .ok_or(NoFreeSegments)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn only_picks_free_segments() {
        let mut board = Board::new(2, 3).unwrap();
        let mut bot = RandomBot::new(StdRng::seed_from_u64(7));
        while !board.is_game_over() {
            let id = bot.choose_segment(&board).unwrap();
            assert!(board.free_segments().contains(&id));
            board.apply_move(id).unwrap();
        }
        assert_eq!(bot.choose_segment(&board), Err(NoFreeSegments));
    }
}
