/// Index of a segment in [`Board`](crate::Board). Ids are dense, starting at 0.
pub type SegmentId = usize;

/// A `(row, column)` pair addressing a cell.
pub type CellPos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One edge of the grid.
///
/// The neighbours are named by where the cell lies as seen from the segment:
/// a horizontal segment can have a cell `above` and `below` it, a vertical one
/// a cell to its `left` and `right`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub(crate) used: bool,
    pub(crate) orientation: Orientation,
    pub(crate) left: Option<CellPos>,
    pub(crate) right: Option<CellPos>,
    pub(crate) above: Option<CellPos>,
    pub(crate) below: Option<CellPos>,
}

impl Segment {
    pub(crate) fn horizontal(above: Option<CellPos>, below: Option<CellPos>) -> Self {
        debug_assert!(above.is_some() || below.is_some());
        Self {
            used: false,
            orientation: Orientation::Horizontal,
            left: None,
            right: None,
            above,
            below,
        }
    }

    pub(crate) fn vertical(left: Option<CellPos>, right: Option<CellPos>) -> Self {
        debug_assert!(left.is_some() || right.is_some());
        Self {
            used: false,
            orientation: Orientation::Vertical,
            left,
            right,
            above: None,
            below: None,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn left(&self) -> Option<CellPos> {
        self.left
    }

    pub fn right(&self) -> Option<CellPos> {
        self.right
    }

    pub fn above(&self) -> Option<CellPos> {
        self.above
    }

    pub fn below(&self) -> Option<CellPos> {
        self.below
    }

    /// The one or two cells bordered by this segment.
    pub fn adjacent_cells(&self) -> impl Iterator<Item = CellPos> {
        [self.left, self.above, self.right, self.below]
            .into_iter()
            .flatten()
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (name, cell) in [
            ("left", self.left),
            ("above", self.above),
            ("right", self.right),
            ("below", self.below),
        ] {
            if let Some((row, col)) = cell {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}=({}, {})", name, row, col)?;
                first = false;
            }
        }
        Ok(())
    }
}
