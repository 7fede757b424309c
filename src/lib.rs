//! # grid_search
//!
//! Uninformed search on a grid with blocked cells. Implements
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [iterative deepening depth-first search](https://en.wikipedia.org/wiki/Iterative_deepening_depth-first_search)
//! over the 4-neighbourhood with unit step costs, as a way of comparing how the
//! three strategies behave on the same obstacle grid.
//!
//! Neighbours are always considered in the fixed order Up, Right, Left, Down (see
//! [direction]), which makes every returned path reproducible.
//!
//! ```
//! use grid_search::{cell, GridMap, GridSolver, BfsSolver};
//!
//! let grid = GridMap::from_ascii("...\n.#.\n...").unwrap();
//! let path = BfsSolver.get_path_single_goal(&grid, cell(0, 0), cell(2, 2));
//! assert_eq!(path.len(), 5);
//! ```
pub mod direction;
pub mod grid_map;
pub mod parents;
pub mod solver;

use grid_util::point::Point;
use itertools::Itertools;

pub use crate::grid_map::{GridError, GridMap};
pub use crate::solver::bfs::BfsSolver;
pub use crate::solver::dfs::DfsSolver;
pub use crate::solver::iddfs::{depth_limited_search, BoundedSearch, IddfsSolver};
pub use crate::solver::GridSolver;

/// The point for the cell at `row`, `col`. Points store the column in `x` and the row in `y`.
pub fn cell(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// Number of edges in a path, [None] for the empty "no path" result.
pub fn path_length(path: &[Point]) -> Option<usize> {
    path.len().checked_sub(1)
}

/// Checks that a path runs from start to goal through open cells, one cardinal step at a
/// time, without visiting a cell twice.
pub fn is_valid_path(grid: &GridMap, start: &Point, goal: &Point, path: &[Point]) -> bool {
    path.first() == Some(start)
        && path.last() == Some(goal)
        && path.iter().all(|p| grid.is_valid(p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| direction::Direction::between(a, b).is_some())
        && path.iter().all_unique()
}

/// Renders a path as `(row,col) (row,col) ...`.
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(|p| format!("({},{})", p.y, p.x))
        .join(" ")
}
