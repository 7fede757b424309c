mod cli;
mod input;
mod logging;

use std::io;

use clap::Parser;
use eyre::Result;
use grid_search::{
    format_path, BfsSolver, DfsSolver, GridMap, GridSolver, IddfsSolver,
};
use grid_util::point::Point;
use log::{debug, info};

use cli::{Algorithm, Args};
use input::Problem;
use logging::Logger;

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let problem = match &args.map {
        Some(path) => {
            info!("loading map {}", path.display());
            Problem::from_map_file(path, args.start, args.goal)?
        }
        None => Problem::from_console(io::stdin().lock(), io::stderr())?,
    };
    let Problem { grid, start, goal } = &problem;
    if grid.unreachable(start, goal) {
        info!("start and goal lie on different components");
    }

    if args.algorithm.includes(Algorithm::Dfs) {
        report(&DfsSolver, grid, *start, *goal);
    }
    if args.algorithm.includes(Algorithm::Bfs) {
        report(&BfsSolver, grid, *start, *goal);
    }
    if args.algorithm.includes(Algorithm::Iddfs) {
        let (path, depth) = IddfsSolver.search(grid, *start, *goal);
        println!("{} Path: {}", IddfsSolver.name(), format_path(&path));
        match depth {
            Some(depth) => println!("Solution reached at depth: {}", depth),
            None => println!("No path found"),
        }
    }
    Ok(())
}

fn report<S: GridSolver>(solver: &S, grid: &GridMap, start: Point, goal: Point) {
    let path = solver.get_path_single_goal(grid, start, goal);
    debug!(
        "{} path has {:?} edges",
        solver.name(),
        solver.get_path_cost(&path)
    );
    println!("{} Path: {}", solver.name(), format_path(&path));
}
