/// One of the two players of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The numeric id of the player, `1` or `2`.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Index into per-player arrays such as [`Board::scores()`](crate::Board::scores).
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_between_the_two_ids() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(3 - Player::One.id(), Player::One.other().id());
        assert_eq!(Player::Two.index(), 1);
    }
}
