use crate::{Player, SegmentId};

/// One box of the grid with its four border segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) left: SegmentId,
    pub(crate) top: SegmentId,
    pub(crate) right: SegmentId,
    pub(crate) bottom: SegmentId,
    /// Set once, by the move that claims the last border.
    pub(crate) owner: Option<Player>,
}

impl Cell {
    pub fn left(&self) -> SegmentId {
        self.left
    }

    pub fn top(&self) -> SegmentId {
        self.top
    }

    pub fn right(&self) -> SegmentId {
        self.right
    }

    pub fn bottom(&self) -> SegmentId {
        self.bottom
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// The border segments, clockwise starting from the left one.
    pub fn borders(&self) -> [SegmentId; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "left={}, top={}, right={}, bottom={}",
            self.left, self.top, self.right, self.bottom
        )?;
        match self.owner {
            Some(player) => write!(f, ", owned by {}", player),
            None => write!(f, ", unclaimed"),
        }
    }
}
