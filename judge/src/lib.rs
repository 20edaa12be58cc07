mod game;
mod matchup;
mod player;
pub use game::*;
pub use matchup::*;
pub use player::*;

/// Settings shared by all games of a tournament.
#[derive(Clone, Debug)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub num_games: usize,
    /// Stop a matchup as soon as one player makes an illegal move
    pub stop_on_illegal_move: bool,
}
