//! Win condition checking
//!
//! A player wins by completing five or more stones in a row through the
//! stone just placed. Overlines (six or more) also win.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 orientations)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Run length needed to win
pub const WIN_LENGTH: usize = 5;

/// Count same-color stones from `pos` (exclusive) stepping by `(dr, dc)`.
#[inline]
fn count_ray(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while let Some(p) = Pos::try_new(r, c) {
        if board.get(p) != color {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 orientations through `pos`; both rays of an
/// orientation combine into one run that includes `pos` itself.
/// `pos` is expected to already hold `color`.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_ray(board, pos, dr, dc, color) + count_ray(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// Find the full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` if no orientation has a run of [`WIN_LENGTH`] or more.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = count_ray(board, pos, -dr, -dc, color) as i32;
        let forward = count_ray(board, pos, dr, dc, color) as i32;
        if (1 + back + forward) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|i| Pos::try_new(i32::from(pos.row) + dr * i, i32::from(pos.col) + dc * i))
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: impl IntoIterator<Item = (u8, u8)>, stone: Stone) {
        for (r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_all(&mut board, (0..5).map(|i| (7, i)), Stone::Black);
        for i in 0..5 {
            assert!(has_five_at_pos(&board, Pos::new(7, i), Stone::Black));
        }
        assert!(!has_five_at_pos(&board, Pos::new(7, 2), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_all(&mut board, (0..5).map(|i| (i, 9)), Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(4, 9), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        place_all(&mut board, (0..5).map(|i| (i, i)), Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(2, 2), Stone::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        place_all(&mut board, (0..5).map(|i| (4 + i, 8 - i)), Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(6, 6), Stone::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        place_all(&mut board, (0..4).map(|i| (9, i)), Stone::Black);
        for i in 0..4 {
            assert!(!has_five_at_pos(&board, Pos::new(9, i), Stone::Black));
        }
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new();
        // X X . X X X
        place_all(&mut board, [(3, 0), (3, 1), (3, 3), (3, 4), (3, 5)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(3, 3), Stone::Black));
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        place_all(&mut board, [(3, 0), (3, 1), (3, 3), (3, 4), (3, 5)], Stone::Black);
        board.place_stone(Pos::new(3, 2), Stone::White);
        assert!(!has_five_at_pos(&board, Pos::new(3, 4), Stone::Black));
    }

    #[test]
    fn test_both_rays_combine() {
        let mut board = Board::new();
        // Two stones left, two right of the middle stone
        place_all(&mut board, [(7, 5), (7, 6), (7, 8), (7, 9)], Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_rays_from_different_orientations_do_not_combine() {
        let mut board = Board::new();
        // Three horizontal + two vertical through (7, 7): no single line of five
        place_all(&mut board, [(7, 5), (7, 6), (5, 7), (6, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Stone::Black));
    }

    #[test]
    fn test_overline_still_wins() {
        let mut board = Board::new();
        place_all(&mut board, (0..5).map(|i| (9, i)), Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(9, 4), Stone::Black));

        board.place_stone(Pos::new(9, 5), Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(9, 5), Stone::Black));
        board.place_stone(Pos::new(9, 6), Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(9, 6), Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(9, 0), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        place_all(&mut board, (10..15).map(|i| (14, i)), Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        place_all(&mut board, (10..15).map(|i| (i, i)), Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7), Stone::Empty));
        assert!(winning_line(&board, Pos::new(7, 7), Stone::Empty).is_none());
    }

    #[test]
    fn test_winning_line_positions() {
        let mut board = Board::new();
        place_all(&mut board, (3..9).map(|i| (i, 14 - i)), Stone::White);

        let line = winning_line(&board, Pos::new(5, 9), Stone::White).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line.first(), Some(&Pos::new(3, 11)));
        assert_eq!(line.last(), Some(&Pos::new(8, 6)));
        assert!(winning_line(&board, Pos::new(5, 9), Stone::Black).is_none());
    }
}
