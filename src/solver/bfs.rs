use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::debug;
use std::collections::VecDeque;

use crate::direction::CANONICAL_ORDER;
use crate::grid_map::GridMap;
use crate::parents::ParentMap;
use crate::solver::{endpoints_valid, visited_table, GridSolver};

/// Iterative breadth-first search over a FIFO queue. Every edge has unit cost, so the
/// returned path has the fewest possible edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn get_path_single_goal(&self, grid: &GridMap, start: Point, goal: Point) -> Vec<Point> {
        if !endpoints_valid(grid, &start, &goal) {
            return Vec::new();
        }
        let mut visited = visited_table(grid);
        let mut parents = ParentMap::new(start);
        let mut queue = VecDeque::from([start]);
        visited.set_point(start, true);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                let path = parents.reconstruct_path(&goal);
                debug!(
                    "BFS reached goal after discovering {} cells, path has {} cells",
                    parents.len(),
                    path.len()
                );
                return path;
            }
            for dir in CANONICAL_ORDER {
                let next = dir.step(&current);
                if grid.is_valid(&next) && !visited.get_point(next) {
                    visited.set_point(next, true);
                    parents.record(next, &current);
                    queue.push_back(next);
                }
            }
        }
        debug!("BFS exhausted {} cells without reaching goal", parents.len());
        Vec::new()
    }
}
