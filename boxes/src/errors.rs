use crate::SegmentId;

/// The error type for [`Board::apply_move()`](crate::Board::apply_move).
///
/// The board is left untouched when one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    InvalidSegmentId {
        segment_id: SegmentId,
        num_segments: usize,
    },
    SegmentAlreadyUsed {
        segment_id: SegmentId,
    },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidSegmentId {
                segment_id,
                num_segments,
            } => write!(
                f,
                "Segment {} does not exist, the board only has {} segments",
                segment_id, num_segments
            ),
            IllegalMove::SegmentAlreadyUsed { segment_id } => {
                write!(f, "Segment {} has already been claimed", segment_id)
            }
        }
    }
}

/// The error type for [`Board::new()`](crate::Board::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDimensions {
    pub rows: usize,
    pub columns: usize,
}

impl std::error::Error for InvalidDimensions {}

impl std::fmt::Display for InvalidDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A board needs at least one row and one column, got {}x{}",
            self.rows, self.columns
        )
    }
}

/// Returned by a move policy that was asked to choose a segment on a board
/// where every segment is already claimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoFreeSegments;

impl std::error::Error for NoFreeSegments {}

impl std::fmt::Display for NoFreeSegments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Asked to choose a segment, but all segments are used")
    }
}
