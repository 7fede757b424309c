use crate::grid_map::GridMap;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::warn;

pub mod bfs;
pub mod dfs;
pub mod iddfs;

/// A search strategy that finds a path between two cells of a [GridMap].
///
/// Implementations own no traversal state: every call allocates its own visited table,
/// parent map and frontier, so one solver (and one grid) can be shared across threads.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Computes a path from start to goal, inclusive of both. An empty path means no path
    /// was found, which includes a start or goal that is blocked or outside the grid.
    fn get_path_single_goal(&self, grid: &GridMap, start: Point, goal: Point) -> Vec<Point>;

    /// Number of edges of a path found by this solver.
    fn get_path_cost(&self, path: &[Point]) -> Option<usize> {
        crate::path_length(path)
    }
}

/// Start and goal must both be open cells for a search to begin.
pub(crate) fn endpoints_valid(grid: &GridMap, start: &Point, goal: &Point) -> bool {
    if !grid.is_valid(start) {
        warn!("Start ({},{}) is blocked or outside the grid", start.y, start.x);
        return false;
    }
    if !grid.is_valid(goal) {
        warn!("Goal ({},{}) is blocked or outside the grid", goal.y, goal.x);
        return false;
    }
    true
}

/// A fresh H×W table with every cell unvisited.
pub(crate) fn visited_table(grid: &GridMap) -> BoolGrid {
    BoolGrid::new(grid.width(), grid.height(), false)
}
