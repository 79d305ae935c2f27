use crate::board::Board;
use crate::player::Player;
use crate::position::Position;

/// Change to `player`'s free-adjacent count when `target` becomes theirs.
///
/// With `golden == false` the target was empty; if it already touched one of
/// the player's cells it was counted as free-adjacent and stops being so.
/// With `golden == true` the target was owned by someone else and was never
/// counted.
///
/// Each empty neighbour of the target counts as newly adjacent unless some
/// other cell of the player (not the target) already touches it.
///
/// The result does not depend on the target's current owner, so it can be
/// evaluated either before or after the board is updated.
pub fn free_adjacent_delta(board: &Board, target: Position, player: Player, golden: bool) -> i64 {
    let mut delta = 0;

    if !golden && board.touches(target, player) {
        delta -= 1;
    }

    for neighbor in board.neighbors(target) {
        if board.get_piece(&neighbor).is_some() {
            continue;
        }
        let already_adjacent = board
            .neighbors(neighbor)
            .filter(|n| *n != target)
            .any(|n| board.get_piece(&n) == Some(player));
        if !already_adjacent {
            delta += 1;
        }
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32) -> Player {
        Player::new(id).unwrap()
    }

    fn board(width: u32, height: u32, owned: &[(u32, u32, u32)]) -> Board {
        let mut board = Board::try_new(width, height, (width * height) as usize).unwrap();
        for &(x, y, p) in owned {
            board.set_piece(&Position::new(x, y), Some(player(p)));
        }
        board
    }

    #[test]
    fn test_isolated_center_cell() {
        let b = board(3, 3, &[]);
        assert_eq!(free_adjacent_delta(&b, Position::new(1, 1), player(1), false), 4);
    }

    #[test]
    fn test_corner_cell() {
        let b = board(3, 3, &[]);
        assert_eq!(free_adjacent_delta(&b, Position::new(0, 0), player(1), false), 2);
    }

    #[test]
    fn test_extending_own_area() {
        // 1 at (0,0); placing at (1,0) consumes one free-adjacent cell and
        // adds (2,0) and (1,1). (0,1) is already adjacent to (0,0).
        let b = board(3, 3, &[(0, 0, 1)]);
        assert_eq!(free_adjacent_delta(&b, Position::new(1, 0), player(1), false), 1);
    }

    #[test]
    fn test_shared_free_cell_not_double_counted() {
        // 1 at (0,1); placing at (1,0) touches (0,0) and (1,1), both already
        // adjacent to (0,1). Only (2,0) is new. The target was not adjacent.
        let b = board(3, 3, &[(0, 1, 1)]);
        assert_eq!(free_adjacent_delta(&b, Position::new(1, 0), player(1), false), 1);
    }

    #[test]
    fn test_occupied_neighbours_do_not_count() {
        let b = board(3, 1, &[(0, 0, 2), (2, 0, 2)]);
        assert_eq!(free_adjacent_delta(&b, Position::new(1, 0), player(1), false), 0);
    }

    #[test]
    fn test_golden_skips_loss_term() {
        // Target (1,0) is owned by 2 and touches 1 at (0,0). (1,1) is
        // already adjacent to 1 through (0,1).
        let b = board(3, 2, &[(0, 0, 1), (0, 1, 1), (1, 0, 2)]);
        assert_eq!(free_adjacent_delta(&b, Position::new(1, 0), player(1), true), 1);
        assert_eq!(free_adjacent_delta(&b, Position::new(1, 0), player(2), true), 2);
    }
}
