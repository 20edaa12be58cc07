use std::collections::BTreeSet;

use boxes::{Board, NoFreeSegments, SegmentId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::Bot;

/// Completes a cell whenever possible, and otherwise tries not to leave a
/// cell with three borders behind for the opponent.
pub struct GreedyBot {
    rng: StdRng,
}

impl GreedyBot {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_segment(&mut self, board: &Board) -> Result<SegmentId, NoFreeSegments> {
        let closing = board.free_segments_bordering_cells_with_used_borders(3);
        if let Some(&id) = closing.choose(&mut self.rng) {
            return Ok(id);
        }

        let all_free = board.free_segments();
        let giveaways: BTreeSet<SegmentId> = board
            .free_segments_bordering_cells_with_used_borders(2)
            .into_iter()
            .collect();
        let safe: Vec<SegmentId> = all_free
            .iter()
            .copied()
            .filter(|id| !giveaways.contains(id))
            .collect();

        safe.choose(&mut self.rng)
            .or_else(|| all_free.choose(&mut self.rng))
            .copied()
            .ok_or(NoFreeSegments)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn bot(seed: u64) -> GreedyBot {
        GreedyBot::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn takes_a_box_when_it_can() {
        // Cell (0, 0) of a 2x2 board is missing only its right border, 7
        let mut board = Board::new(2, 2).unwrap();
        for id in [6, 0, 2] {
            board.apply_move(id).unwrap();
        }
        for seed in 0..10 {
            assert_eq!(bot(seed).choose_segment(&board), Ok(7));
        }
    }

    #[test]
    fn avoids_giving_away_a_box() {
        // Cell (0, 0) has two used borders, its free borders 2 and 7 are unsafe
        let mut board = Board::new(2, 2).unwrap();
        for id in [6, 0] {
            board.apply_move(id).unwrap();
        }
        for seed in 0..20 {
            let id = bot(seed).choose_segment(&board).unwrap();
            assert!(id != 2 && id != 7);
            assert!(!board.segment(id).unwrap().is_used());
        }
    }

    #[test]
    fn falls_back_to_any_free_segment() {
        let mut board = Board::new(1, 2).unwrap();
        for id in [0, 1, 4, 6] {
            board.apply_move(id).unwrap();
        }
        // Every free segment (2, 3, 5) borders a cell with two used borders
        assert!(board
            .free_segments_bordering_cells_with_used_borders(3)
            .is_empty());
        let id = bot(3).choose_segment(&board).unwrap();
        assert!([2, 3, 5].contains(&id));
    }

    #[test]
    fn plays_a_2x2_game_against_itself() {
        let mut board = Board::new(2, 2).unwrap();
        let mut bots = [bot(1), bot(2)];
        while !board.is_game_over() {
            let current = board.current_player().index();
            let id = bots[current].choose_segment(&board).unwrap();
            board.apply_move(id).unwrap();
        }
        assert!(board.free_segments().is_empty());
        assert_eq!(board.scores().iter().sum::<usize>(), 4);
        assert!(matches!(board.determine_winner().id(), 1 | 2));
        assert_eq!(bots[0].choose_segment(&board), Err(NoFreeSegments));
    }
}
