use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::debug;

use crate::direction::PUSH_ORDER;
use crate::grid_map::GridMap;
use crate::parents::ParentMap;
use crate::solver::{endpoints_valid, visited_table, GridSolver};

/// Iterative depth-first search over an explicit stack. Returns the first path found,
/// which is generally not the shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn get_path_single_goal(&self, grid: &GridMap, start: Point, goal: Point) -> Vec<Point> {
        if !endpoints_valid(grid, &start, &goal) {
            return Vec::new();
        }
        let mut visited = visited_table(grid);
        let mut parents = ParentMap::new(start);
        let mut stack = vec![start];
        visited.set_point(start, true);

        while let Some(current) = stack.pop() {
            if current == goal {
                let path = parents.reconstruct_path(&goal);
                debug!(
                    "DFS reached goal after discovering {} cells, path has {} cells",
                    parents.len(),
                    path.len()
                );
                return path;
            }
            // Pushed in reverse so they are popped Up, Right, Left, Down.
            for dir in PUSH_ORDER {
                let next = dir.step(&current);
                if grid.is_valid(&next) && !visited.get_point(next) {
                    visited.set_point(next, true);
                    parents.record(next, &current);
                    stack.push(next);
                }
            }
        }
        debug!("DFS exhausted {} cells without reaching goal", parents.len());
        Vec::new()
    }
}
