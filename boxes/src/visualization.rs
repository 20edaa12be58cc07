use crate::Board;

/// Draws the board as text.
///
/// Dots are `+`, used segments `---` and `|`, and completed cells show the
/// id of their owner:
///
/// ```text
/// +---+   +
/// | 1 |
/// +---+---+
/// ```
pub fn visualize(board: &Board) -> String {
    let mut result = String::new();
    for line in 0..=board.rows() {
        for col in 0..board.columns() {
            result += "+";
            result += if is_used(board, board.horizontal_segment(line, col)) {
                "---"
            } else {
                "   "
            };
        }
        result += "+\n";

        if line == board.rows() {
            break;
        }
        let row = line;
        for col in 0..=board.columns() {
            result += if is_used(board, board.vertical_segment(row, col)) {
                "|"
            } else {
                " "
            };
            if col < board.columns() {
                match board.owner_of(row, col) {
                    Some(player) => result += &format!(" {} ", player.id()),
                    None => result += "   ",
                }
            }
        }
        result += "\n";
    }
    // No trailing newline
    result.pop();
    result
}

fn is_used(board: &Board, segment_id: Option<usize>) -> bool {
    segment_id
        .and_then(|id| board.segment(id))
        .is_some_and(|segment| segment.is_used())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_used_segments_and_owners() {
        let mut board = Board::new(1, 2).unwrap();
        for id in [0, 2, 4, 3, 5] {
            board.apply_move(id).unwrap();
        }
        assert_eq!(visualize(&board), "+---+   +\n| 1 |    \n+---+---+");
    }

    #[test]
    fn display_mentions_current_player() {
        let board = Board::new(1, 1).unwrap();
        assert_eq!(board.to_string(), "+   +\n     \n+   +\ncurrent player: 1");
    }
}
