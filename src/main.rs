use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazes::{
    config::MapConfig,
    grid_displays::{GridDisplay, MazeView, PathDisplay},
    maze::Maze,
    pathing,
};
use std::fs;

const USAGE: &str = "Maze Driver

Usage:
    maze_driver -h | --help
    maze_driver [--config=<path>] [--width=<w>] [--height=<h>] [--seed=<s>] [--random-size] [(--show-path|--show-distances)] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --config=<path>        TOML map config file. Command line options override its values.
    --width=<w>            Number of cells across, 1 to 10. Out of range falls back to the default map size.
    --height=<h>           Number of cells down, 1 to 10. Out of range falls back to the default map size.
    --seed=<s>             Seed for the maze layout. Seeded from the clock when not given.
    --random-size          Pick a random width and height.
    --show-path            Mark the longest path through the maze.
    --show-distances       Show the distance from the top left cell to all other cells.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_config: Option<String>,
    flag_width: Option<i64>,
    flag_height: Option<i64>,
    flag_seed: Option<u64>,
    flag_random_size: bool,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_save_edges: Option<String>,
}

// `error_chain!` creates the Error, ErrorKind, ResultExt and Result types for the driver.
// The library errors are linked in so `?` works on them too.
mod errors {
    use error_chain::error_chain;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let config = map_config_from_args(&args)?;
    let maze = config.build_maze();
    info!("built {:?}", maze);

    if let Some(ref edges_path) = args.flag_save_edges {
        save_maze_graph(&maze, edges_path)?;
    }

    let display: Option<Box<dyn GridDisplay>> = if args.flag_show_path {
        let path = pathing::longest_path(&maze).unwrap_or_else(Vec::new);
        Some(Box::new(PathDisplay::new(&path)))
    } else if args.flag_show_distances {
        let top_left = maze.from_index(0);
        let distances = pathing::Distances::new(&maze, top_left)
            .ok_or("Every maze has a top left cell.")?;
        Some(Box::new(distances))
    } else {
        None
    };

    println!("{}", MazeView::new(&maze, display.as_ref().map(|d| &**d)));

    Ok(())
}

fn map_config_from_args(args: &MazeArgs) -> Result<MapConfig> {
    let mut config = if let Some(ref path) = args.flag_config {
        MapConfig::from_file(path)?
    } else {
        MapConfig::default()
    };

    if let Some(width) = args.flag_width {
        config.width = width;
    }
    if let Some(height) = args.flag_height {
        config.height = height;
    }
    if args.flag_seed.is_some() {
        config.seed = args.flag_seed;
    }
    if args.flag_random_size {
        config.random_size = true;
    }

    Ok(config)
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {
    fs::write(file_path, maze.edge_list())
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    Ok(())
}
