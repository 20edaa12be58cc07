mod greedy_bot;
mod random_bot;
pub use greedy_bot::*;
pub use random_bot::*;

use boxes::{Board, NoFreeSegments, SegmentId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// A move policy: picks the segment that the current player claims next.
///
/// Implementations only read the board, the caller applies the move.
pub trait Bot {
    fn name(&self) -> &str;

    /// Returns a free segment of the board.
    ///
    /// Fails if there is none, i.e. the game is already over.
    fn choose_segment(&mut self, board: &Board) -> Result<SegmentId, NoFreeSegments>;
}

/// The available bots, as named in player config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    Random,
    Greedy,
}

impl BotKind {
    pub fn build(self, seed: u64) -> Box<dyn Bot> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            BotKind::Random => Box::new(RandomBot::new(rng)),
            BotKind::Greedy => Box::new(GreedyBot::new(rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_kinds_are_lowercase_in_json() {
        let kind: BotKind = serde_json::from_str("\"greedy\"").unwrap();
        assert_eq!(kind, BotKind::Greedy);
        assert_eq!(serde_json::to_string(&BotKind::Random).unwrap(), "\"random\"");
        assert_eq!(BotKind::Greedy.build(0).name(), "greedy");
    }
}
