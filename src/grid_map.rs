use crate::direction::CANONICAL_ORDER;
use crate::cell;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Reasons a [GridMap] could not be built from external input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    ZeroDimension { height: usize, width: usize },
    OutOfBounds { row: i32, col: i32 },
    RaggedRow { row: usize, expected: usize, found: usize },
    InvalidCharacter { row: usize, col: usize, found: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::ZeroDimension { height, width } => {
                write!(f, "grid must be at least 1x1, got {}x{}", height, width)
            }
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({},{}) lies outside the grid", row, col)
            }
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::InvalidCharacter { row, col, found } => {
                write!(f, "unexpected character {:?} at ({},{})", found, row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// [GridMap] is a fixed-size rectangular grid of blocked ([true]) and open ([false]) cells,
/// stored in a [BoolGrid]. All searches share it read-only. It additionally keeps a
/// [UnionFind] over the 4-neighbourhood so reachability can be answered without searching.
#[derive(Clone, Debug)]
pub struct GridMap {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl GridMap {
    /// An all-open grid with `height` rows and `width` columns.
    pub fn new(height: usize, width: usize) -> GridMap {
        let mut grid_map = GridMap {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: true,
        };
        grid_map.generate_components();
        grid_map
    }

    /// Builds a grid and blocks every listed cell.
    pub fn from_obstacles(
        height: usize,
        width: usize,
        obstacles: &[Point],
    ) -> Result<GridMap, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::ZeroDimension { height, width });
        }
        let mut grid_map = GridMap::new(height, width);
        for obstacle in obstacles {
            grid_map.set_blocked(*obstacle, true)?;
        }
        grid_map.update();
        Ok(grid_map)
    }

    /// Parses a map with one line per row, `.` for open and `#` for blocked cells.
    /// Surrounding blank lines are ignored.
    pub fn from_ascii(text: &str) -> Result<GridMap, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if rows.is_empty() || width == 0 {
            return Err(GridError::ZeroDimension {
                height: rows.len(),
                width,
            });
        }
        let mut grid_map = GridMap::new(rows.len(), width);
        for (r, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: width,
                    found: len,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    '#' => grid_map.set_blocked(cell(r as i32, c as i32), true)?,
                    found => return Err(GridError::InvalidCharacter { row: r, col: c, found }),
                }
            }
        }
        grid_map.update();
        Ok(grid_map)
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    /// Number of cells, H·W.
    pub fn cell_count(&self) -> usize {
        self.grid.width * self.grid.height
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.grid.width
            && (point.y as usize) < self.grid.height
    }

    /// The single bounds-and-obstacle check every search goes through.
    pub fn is_valid(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.grid.get_point(*point)
    }

    /// [is_valid](Self::is_valid) in (row, col) form.
    pub fn is_valid_cell(&self, row: i32, col: i32) -> bool {
        self.is_valid(&cell(row, col))
    }

    pub fn is_blocked(&self, point: &Point) -> bool {
        self.in_bounds(point) && self.grid.get_point(*point)
    }

    /// Row-major index of an in-bounds point.
    pub fn index(&self, point: &Point) -> usize {
        self.grid.get_ix_point(point)
    }

    /// Blocks or unblocks a cell. Blocking may split components, so they are flagged dirty
    /// and regenerated on the next [update](Self::update); unblocking joins neighbours in place.
    pub fn set_blocked(&mut self, point: Point, blocked: bool) -> Result<(), GridError> {
        if !self.in_bounds(&point) {
            return Err(GridError::OutOfBounds {
                row: point.y,
                col: point.x,
            });
        }
        if blocked {
            if !self.grid.get_point(point) {
                self.components_dirty = true;
            }
        } else {
            let ix = self.index(&point);
            for dir in CANONICAL_ORDER {
                let neighbour = dir.step(&point);
                if self.is_valid(&neighbour) {
                    let neighbour_ix = self.index(&neighbour);
                    self.components.union(ix, neighbour_ix);
                }
            }
        }
        self.grid.set_point(point, blocked);
        Ok(())
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Only the right and lower neighbour need to be joined per cell.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.height(),
            self.width()
        );
        self.components = UnionFind::new(self.cell_count());
        self.components_dirty = false;
        for row in 0..self.height() as i32 {
            for col in 0..self.width() as i32 {
                let point = cell(row, col);
                if !self.is_valid(&point) {
                    continue;
                }
                let parent_ix = self.index(&point);
                for neighbour in [cell(row, col + 1), cell(row + 1, col)] {
                    if self.is_valid(&neighbour) {
                        let ix = self.index(&neighbour);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    /// Checks if start and goal are open cells on the same component. Call
    /// [update](Self::update) after blocking cells for an exact answer.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.is_valid(start)
            && self.is_valid(goal)
            && self
                .components
                .equiv(self.index(start), self.index(goal))
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height() as i32 {
            let line: String = (0..self.width() as i32)
                .map(|col| {
                    if self.grid.get_point(cell(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_checks_bounds_and_obstacles() {
        let grid = GridMap::from_obstacles(2, 3, &[cell(0, 1)]).unwrap();
        assert!(grid.is_valid_cell(0, 0));
        assert!(!grid.is_valid_cell(0, 1));
        assert!(grid.is_valid_cell(1, 2));
        assert!(!grid.is_valid_cell(-1, 0));
        assert!(!grid.is_valid_cell(0, -1));
        assert!(!grid.is_valid_cell(2, 0));
        assert!(!grid.is_valid_cell(0, 3));
    }

    #[test]
    fn obstacles_outside_the_grid_are_rejected() {
        let err = GridMap::from_obstacles(2, 2, &[cell(2, 0)]).unwrap_err();
        assert_eq!(err, GridError::OutOfBounds { row: 2, col: 0 });
        let err = GridMap::from_obstacles(0, 2, &[]).unwrap_err();
        assert_eq!(
            err,
            GridError::ZeroDimension {
                height: 0,
                width: 2
            }
        );
    }

    #[test]
    fn ascii_round_trips_through_display() {
        let text = "..#\n#..\n";
        let grid = GridMap::from_ascii(text).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert!(grid.is_blocked(&cell(0, 2)));
        assert!(grid.is_blocked(&cell(1, 0)));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn ascii_errors() {
        assert_eq!(
            GridMap::from_ascii("...\n..").unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            GridMap::from_ascii(".x").unwrap_err(),
            GridError::InvalidCharacter {
                row: 0,
                col: 1,
                found: 'x'
            }
        );
        assert!(GridMap::from_ascii("\n\n").is_err());
    }

    /// Corresponds to the following 3x3 grid, where the wall splits the left column off:
    ///  ___
    /// | # |
    /// | # |
    /// | # |
    ///  ___
    #[test]
    fn components_follow_walls() {
        let mut grid = GridMap::from_ascii(".#.\n.#.\n.#.").unwrap();
        assert!(grid.reachable(&cell(0, 0), &cell(2, 0)));
        assert!(grid.unreachable(&cell(0, 0), &cell(0, 2)));
        assert!(grid.unreachable(&cell(0, 0), &cell(0, 1)));

        grid.set_blocked(cell(1, 1), false).unwrap();
        assert!(grid.reachable(&cell(0, 0), &cell(0, 2)));

        grid.set_blocked(cell(1, 1), true).unwrap();
        grid.update();
        assert!(grid.unreachable(&cell(0, 0), &cell(0, 2)));
    }
}
