use std::io::{BufRead, Write};
use std::path::Path;

use eyre::{bail, eyre, Result, WrapErr};
use grid_search::{cell, GridMap};
use grid_util::point::Point;
use log::debug;

/// A grid together with the endpoints to search between.
pub struct Problem {
    pub grid: GridMap,
    pub start: Point,
    pub goal: Point,
}

impl Problem {
    /// Loads an ASCII map from disk.
    pub fn from_map_file(path: &Path, start: Option<(i32, i32)>, goal: Option<(i32, i32)>) -> Result<Problem> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read map {}", path.display()))?;
        let grid = GridMap::from_ascii(&text)?;
        let (Some((s_row, s_col)), Some((g_row, g_col))) = (start, goal) else {
            bail!("--start and --goal are required with --map");
        };
        Problem::checked(grid, cell(s_row, s_col), cell(g_row, g_col))
    }

    /// Reads the grid, obstacles and endpoints from whitespace-separated numbers, printing a
    /// prompt to `prompt` before each group.
    pub fn from_console<R: BufRead, W: Write>(input: R, mut prompt: W) -> Result<Problem> {
        let mut tokens = Tokens::new(input);

        write!(prompt, "Enter grid dimensions (height width): ")?;
        prompt.flush()?;
        let height: usize = tokens.next("grid height")?;
        let width: usize = tokens.next("grid width")?;

        write!(prompt, "How many squares are forbidden? ")?;
        prompt.flush()?;
        let count: usize = tokens.next("obstacle count")?;

        write!(prompt, "Enter forbidden coordinates (row col): ")?;
        prompt.flush()?;
        let mut obstacles = Vec::with_capacity(count);
        for _ in 0..count {
            let row = tokens.next("obstacle row")?;
            let col = tokens.next("obstacle column")?;
            obstacles.push(cell(row, col));
        }
        let grid = GridMap::from_obstacles(height, width, &obstacles)?;

        write!(
            prompt,
            "Enter start and goal positions (start_row start_col goal_row goal_col): "
        )?;
        prompt.flush()?;
        let start = cell(tokens.next("start row")?, tokens.next("start column")?);
        let goal = cell(tokens.next("goal row")?, tokens.next("goal column")?);
        writeln!(prompt)?;

        Problem::checked(grid, start, goal)
    }

    fn checked(grid: GridMap, start: Point, goal: Point) -> Result<Problem> {
        for (name, p) in [("start", &start), ("goal", &goal)] {
            if !grid.in_bounds(p) {
                bail!(
                    "{} ({},{}) lies outside the {}x{} grid",
                    name,
                    p.y,
                    p.x,
                    grid.height(),
                    grid.width()
                );
            }
            if grid.is_blocked(p) {
                bail!("{} ({},{}) is a forbidden square", name, p.y, p.x);
            }
        }
        debug!("Loaded {}x{} grid:\n{}", grid.height(), grid.width(), grid);
        Ok(Problem { grid, start, goal })
    }
}

/// Whitespace-separated tokens pulled from a reader one line at a time.
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: Vec::new(),
        }
    }

    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(eyre!("unexpected end of input while reading {}", what));
            }
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
        let token = self.pending.pop().unwrap_or_default();
        token
            .parse()
            .map_err(|e| eyre!("invalid {} {:?}: {}", what, token, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_console_session() {
        let input = "3 3\n1\n1 1\n0 0 2 2\n";
        let mut prompts = Vec::new();
        let problem = Problem::from_console(input.as_bytes(), &mut prompts).unwrap();
        assert_eq!(problem.grid.height(), 3);
        assert_eq!(problem.grid.width(), 3);
        assert!(problem.grid.is_blocked(&cell(1, 1)));
        assert_eq!(problem.start, cell(0, 0));
        assert_eq!(problem.goal, cell(2, 2));
        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.starts_with("Enter grid dimensions"));
    }

    #[test]
    fn tokens_may_share_a_line() {
        let input = "1 5 1 0 2 0 0 0 4";
        let problem = Problem::from_console(input.as_bytes(), std::io::sink()).unwrap();
        assert!(problem.grid.is_blocked(&cell(0, 2)));
        assert_eq!(problem.goal, cell(0, 4));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Problem::from_console("2 2\n0\n0 0 2 0\n".as_bytes(), std::io::sink()).is_err());
        assert!(Problem::from_console("2 2\n1\n0 0\n0 0 1 1\n".as_bytes(), std::io::sink()).is_err());
        assert!(Problem::from_console("2 2\n1\n5 5\n".as_bytes(), std::io::sink()).is_err());
        assert!(Problem::from_console("2 x\n".as_bytes(), std::io::sink()).is_err());
        assert!(Problem::from_console("2 2\n".as_bytes(), std::io::sink()).is_err());
    }
}
