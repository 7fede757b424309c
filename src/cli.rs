use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid_search")]
#[command(about = "Find a path on an obstacle grid with DFS, BFS and IDDFS")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Warn)]
    pub verbosity: LevelFilter,

    /// ASCII map to load ('.' open, '#' blocked) instead of reading the grid from stdin
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Start cell as ROW,COL (required with --map)
    #[arg(short, long, value_parser = parse_cell)]
    pub start: Option<(i32, i32)>,

    /// Goal cell as ROW,COL (required with --map)
    #[arg(short, long, value_parser = parse_cell)]
    pub goal: Option<(i32, i32)>,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    pub algorithm: Algorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Depth-first search
    #[value(name = "dfs")]
    Dfs,

    /// Breadth-first search
    #[value(name = "bfs")]
    Bfs,

    /// Iterative deepening depth-first search
    #[value(name = "iddfs")]
    Iddfs,

    /// Run all three
    All,
}

impl Algorithm {
    pub fn includes(self, other: Algorithm) -> bool {
        self == Algorithm::All || self == other
    }
}

fn parse_cell(s: &str) -> Result<(i32, i32), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row {:?}: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column {:?}: {}", col, e))?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_parse_as_row_col() {
        assert_eq!(parse_cell("2,3"), Ok((2, 3)));
        assert_eq!(parse_cell(" 0 , 4 "), Ok((0, 4)));
        assert!(parse_cell("2").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from([
            "grid_search",
            "--map",
            "maze.txt",
            "--start",
            "0,0",
            "--goal",
            "2,2",
            "-a",
            "iddfs",
        ])
        .unwrap();
        assert_eq!(args.start, Some((0, 0)));
        assert_eq!(args.goal, Some((2, 2)));
        assert_eq!(args.algorithm, Algorithm::Iddfs);
        assert_eq!(args.verbosity, LevelFilter::Warn);
        assert!(Algorithm::All.includes(Algorithm::Bfs));
        assert!(!Algorithm::Dfs.includes(Algorithm::Bfs));
    }
}
