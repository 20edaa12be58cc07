use crate::SegmentId;

const MAX_SIDE: usize = 5;

#[derive(Clone, Copy, Debug)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl quickcheck::Arbitrary for Dimensions {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            rows: usize::arbitrary(g) % MAX_SIDE + 1,
            columns: usize::arbitrary(g) % MAX_SIDE + 1,
        }
    }
}

/// A board size and a list of moves to play on it.
///
/// The moves contain repetitions and a few out-of-range ids.
#[derive(Clone, Debug)]
pub struct MoveSequence {
    pub rows: usize,
    pub columns: usize,
    pub moves: Vec<SegmentId>,
}

impl quickcheck::Arbitrary for MoveSequence {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let Dimensions { rows, columns } = Dimensions::arbitrary(g);
        let num_segments = columns * (rows + 1) + rows * (columns + 1);
        let len = usize::arbitrary(g) % (2 * num_segments);
        let moves = (0..len)
            .map(|_| usize::arbitrary(g) % (num_segments + 2))
            .collect();
        Self {
            rows,
            columns,
            moves,
        }
    }
}
