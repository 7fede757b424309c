//! The four cardinal moves and the order in which searches consider them.
//!
//! Ties between equally valid neighbours are broken by [CANONICAL_ORDER]:
//! Up, Right, Left, Down. Queue-based and depth-limited searches enumerate
//! neighbours in that order. The stack-based depth-first search pushes in
//! [PUSH_ORDER] instead, so that popping yields neighbours in canonical order.
use grid_util::point::Point;

/// A unit step on the 4-neighbourhood. Points use `x` for the column and `y`
/// for the row, so `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Left,
    Down,
}

/// Order in which neighbours are reported and processed.
pub const CANONICAL_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Left,
    Direction::Down,
];

/// Order in which a LIFO frontier must receive neighbours so that they come
/// back out in [CANONICAL_ORDER]. Always the reverse of it.
pub const PUSH_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

impl Direction {
    /// (row delta, column delta).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
        }
    }

    /// The point one step away in this direction. May lie outside the grid;
    /// callers check it with [GridMap::is_valid](crate::grid_map::GridMap::is_valid).
    pub fn step(self, from: &Point) -> Point {
        let (d_row, d_col) = self.offset();
        Point::new(from.x + d_col, from.y + d_row)
    }

    /// Direction leading from `from` to an adjacent `to`, if they are adjacent.
    pub fn between(from: &Point, to: &Point) -> Option<Direction> {
        CANONICAL_ORDER
            .into_iter()
            .find(|dir| dir.step(from) == *to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell;

    #[test]
    fn push_order_is_reverse_of_canonical() {
        let mut reversed = CANONICAL_ORDER;
        reversed.reverse();
        assert_eq!(reversed, PUSH_ORDER);
    }

    #[test]
    fn steps_follow_row_col_offsets() {
        let origin = cell(1, 1);
        let stepped: Vec<Point> = CANONICAL_ORDER.iter().map(|d| d.step(&origin)).collect();
        assert_eq!(
            stepped,
            vec![cell(0, 1), cell(1, 2), cell(1, 0), cell(2, 1)]
        );
    }

    #[test]
    fn between_detects_adjacency() {
        assert_eq!(Direction::between(&cell(2, 2), &cell(1, 2)), Some(Direction::Up));
        assert_eq!(Direction::between(&cell(2, 2), &cell(2, 1)), Some(Direction::Left));
        assert_eq!(Direction::between(&cell(2, 2), &cell(3, 3)), None);
        assert_eq!(Direction::between(&cell(2, 2), &cell(2, 2)), None);
    }
}
