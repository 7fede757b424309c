//! Iterative deepening: depth-limited search repeated with a growing bound.
//!
//! Each round starts from scratch and re-explores everything the previous, shallower
//! round already saw. Memory stays proportional to the current branch plus the per-call
//! tables, and the first bound that succeeds is the shortest-path edge count.
use grid_util::point::Point;
use log::{debug, info};

use crate::direction::PUSH_ORDER;
use crate::grid_map::GridMap;
use crate::solver::{endpoints_valid, GridSolver};

/// Result of one depth-limited search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedSearch {
    pub found: bool,
    pub path: Vec<Point>,
}

impl BoundedSearch {
    fn failure() -> BoundedSearch {
        BoundedSearch {
            found: false,
            path: Vec::new(),
        }
    }
}

/// Depth-first search that never expands a cell sitting `limit` edges from the start.
///
/// Neighbours are pushed in the same order as [DfsSolver](super::dfs::DfsSolver). Each
/// stack entry carries its depth and the working path always holds the ancestry of the
/// entry being examined, so a success returns that branch as-is. A cell is pushed again
/// only if reached at a strictly smaller depth than before, which rules out cycles while
/// still letting a shorter branch claim a cell a longer one reached first.
pub fn depth_limited_search(
    grid: &GridMap,
    start: Point,
    goal: Point,
    limit: usize,
) -> BoundedSearch {
    if !endpoints_valid(grid, &start, &goal) {
        return BoundedSearch::failure();
    }
    let mut shallowest = vec![usize::MAX; grid.cell_count()];
    let mut stack: Vec<(Point, usize)> = vec![(start, 0)];
    let mut path: Vec<Point> = Vec::new();
    shallowest[grid.index(&start)] = 0;

    while let Some((current, depth)) = stack.pop() {
        // Superseded by a shallower push of the same cell.
        if shallowest[grid.index(&current)] < depth {
            continue;
        }
        // Leave the branches this entry does not descend from.
        path.truncate(depth);
        path.push(current);
        if current == goal {
            return BoundedSearch { found: true, path };
        }
        if depth < limit {
            for dir in PUSH_ORDER {
                let next = dir.step(&current);
                if !grid.is_valid(&next) {
                    continue;
                }
                let ix = grid.index(&next);
                if depth + 1 < shallowest[ix] {
                    shallowest[ix] = depth + 1;
                    stack.push((next, depth + 1));
                }
            }
        }
    }
    BoundedSearch::failure()
}

/// Iterative deepening depth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct IddfsSolver;

impl IddfsSolver {
    /// Runs depth-limited search for every bound in `0..H·W` until one succeeds and returns
    /// its path together with that bound. A simple path has at most H·W − 1 edges, so the
    /// loop always ends. The depth is [None] when no path exists.
    pub fn search(&self, grid: &GridMap, start: Point, goal: Point) -> (Vec<Point>, Option<usize>) {
        if !endpoints_valid(grid, &start, &goal) {
            return (Vec::new(), None);
        }
        for limit in 0..grid.cell_count() {
            debug!("IDDFS trying depth limit {}", limit);
            let BoundedSearch { found, path } = depth_limited_search(grid, start, goal, limit);
            if found {
                info!("IDDFS found a path at depth {}", limit);
                return (path, Some(limit));
            }
        }
        info!(
            "IDDFS exhausted all depth limits below {} without a path",
            grid.cell_count()
        );
        (Vec::new(), None)
    }
}

impl GridSolver for IddfsSolver {
    fn name(&self) -> &'static str {
        "IDDFS"
    }

    fn get_path_single_goal(&self, grid: &GridMap, start: Point, goal: Point) -> Vec<Point> {
        self.search(grid, start, goal).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell;

    #[test]
    fn zero_limit_only_examines_start() {
        let grid = GridMap::new(2, 2);
        let hit = depth_limited_search(&grid, cell(0, 0), cell(0, 0), 0);
        assert_eq!(
            hit,
            BoundedSearch {
                found: true,
                path: vec![cell(0, 0)]
            }
        );
        let miss = depth_limited_search(&grid, cell(0, 0), cell(0, 1), 0);
        assert_eq!(miss, BoundedSearch::failure());
    }

    #[test]
    fn limit_below_distance_fails() {
        let grid = GridMap::new(1, 4);
        assert!(!depth_limited_search(&grid, cell(0, 0), cell(0, 3), 2).found);
        let result = depth_limited_search(&grid, cell(0, 0), cell(0, 3), 3);
        assert!(result.found);
        assert_eq!(
            result.path,
            vec![cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3)]
        );
    }

    #[test]
    fn working_path_drops_abandoned_branches() {
        // The Up branch is explored first and must not linger in the returned path.
        let grid = GridMap::new(3, 3);
        let result = depth_limited_search(&grid, cell(1, 1), cell(2, 0), 2);
        assert!(result.found);
        assert_eq!(result.path, vec![cell(1, 1), cell(1, 0), cell(2, 0)]);
    }

    #[test]
    fn may_return_a_longer_branch_within_the_bound() {
        let grid = GridMap::new(3, 3);
        let result = depth_limited_search(&grid, cell(0, 0), cell(2, 0), 6);
        assert!(result.found);
        assert_eq!(
            result.path,
            vec![
                cell(0, 0),
                cell(0, 1),
                cell(0, 2),
                cell(1, 2),
                cell(2, 2),
                cell(2, 1),
                cell(2, 0)
            ]
        );
    }

    /// A grid on which marking cells visited when first pushed would lose the shortest
    /// route: the Up branch pushes (2,3) at depth 4 before the bottom row reaches it at 2.
    ///  ______
    /// |#..#..|
    /// |....##|
    /// |.S...G|
    ///  ______
    #[test]
    fn deepening_finds_shortest_depth() {
        let grid = GridMap::from_ascii("#..#..\n....##\n......").unwrap();
        let (path, depth) = IddfsSolver.search(&grid, cell(2, 1), cell(2, 5));
        assert_eq!(depth, Some(4));
        assert_eq!(
            path,
            vec![cell(2, 1), cell(2, 2), cell(2, 3), cell(2, 4), cell(2, 5)]
        );
    }

    #[test]
    fn single_cell_grid() {
        let grid = GridMap::new(1, 1);
        let (path, depth) = IddfsSolver.search(&grid, cell(0, 0), cell(0, 0));
        assert_eq!(path, vec![cell(0, 0)]);
        assert_eq!(depth, Some(0));
    }

    #[test]
    fn unreachable_goal_has_no_depth() {
        let grid = GridMap::from_ascii("..#..").unwrap();
        let (path, depth) = IddfsSolver.search(&grid, cell(0, 0), cell(0, 4));
        assert!(path.is_empty());
        assert_eq!(depth, None);
    }
}
