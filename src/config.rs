//! Map level settings deciding the size and seed of a maze.
//!
//! ```toml
//! width = 9
//! height = 6
//! random_size = false
//! seed = 1234
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_derive::Deserialize;

use crate::errors::*;
use crate::grid_dimensions::{MazeDimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_SIDE};
use crate::maze::Maze;


#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Number of cells across.
    pub width: i64,
    /// Number of cells down.
    pub height: i64,
    /// Ignore `width` and `height` and pick a random size.
    pub random_size: bool,
    /// Seed for the layout. Seeded from the clock when absent.
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            width: DEFAULT_WIDTH as i64,
            height: DEFAULT_HEIGHT as i64,
            random_size: false,
            seed: None,
        }
    }
}

impl MapConfig {
    pub fn from_toml_str(text: &str) -> Result<MapConfig> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MapConfig> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .chain_err(|| format!("Failed to read map config {}", path.display()))?;
        MapConfig::from_toml_str(&text)
            .chain_err(|| format!("Invalid map config {}", path.display()))
    }

    /// The requested maze size.
    ///
    /// A random size draws each side from `0..MAX_SIDE`; a drawn 0 falls back to the default for
    /// that side when the maze clamps it. A configured size with any side out of range is
    /// replaced as a whole by the default size.
    pub fn maze_size<R: Rng + ?Sized>(&self, rng: &mut R) -> (i64, i64) {
        if self.random_size {
            (rng.gen_range(0..MAX_SIDE as i64), rng.gen_range(0..MAX_SIDE as i64))
        } else if !MazeDimensions::is_supported(self.width, self.height) {
            warn!("{}, using the default map size",
                  Error::from(ErrorKind::DimensionOutOfRange(self.width, self.height)));
            (DEFAULT_WIDTH as i64, DEFAULT_HEIGHT as i64)
        } else {
            (self.width, self.height)
        }
    }

    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }

    /// One seed drives both the size pick and the layout, so a logged seed reproduces the map.
    pub fn build_maze(&self) -> Maze {
        let seed = self.seed_or_clock();
        info!("generating map with seed {}", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        let (width, height) = self.maze_size(&mut rng);
        Maze::with_rng(width, height, &mut rng)
    }
}

/// Nanoseconds since the unix epoch, truncated.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}


#[cfg(test)]
mod tests {

    use std::env;

    use super::*;
    use crate::units::{Height, Width};

    #[test]
    fn empty_config_is_default() {
        let config = MapConfig::from_toml_str("").unwrap();
        assert_eq!(config, MapConfig::default());
        assert_eq!((config.width, config.height), (7, 5));
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = MapConfig::from_toml_str("height = 9\nseed = 12").unwrap();
        assert_eq!(config.width, 7);
        assert_eq!(config.height, 9);
        assert!(!config.random_size);
        assert_eq!(config.seed, Some(12));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = MapConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::Toml(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = env::temp_dir().join("mazes-no-such-config.toml");
        let err = MapConfig::from_file(&path).unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::Msg(_)));
        assert!(err.to_string().contains("Failed to read map config"));
        // the io error is kept as the cause
        assert_eq!(err.iter().count(), 2);
    }

    #[test]
    fn config_file_round_trip() {
        let path = env::temp_dir().join(format!("mazes-config-{}.toml", clock_seed()));
        fs::write(&path, "width = 4\nheight = 3\nseed = 99\n").unwrap();
        let config = MapConfig::from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        let maze = config.build_maze();
        assert_eq!((maze.width(), maze.height()), (Width(4), Height(3)));
        assert_eq!(maze, config.build_maze());
    }

    #[test]
    fn out_of_range_size_uses_the_whole_default() {
        let mut rng = StdRng::seed_from_u64(0);
        for &(w, h) in &[(0, 3), (3, 11), (-2, -2), (12, 4)] {
            let config = MapConfig { width: w, height: h, ..MapConfig::default() };
            assert_eq!(config.maze_size(&mut rng), (7, 5));
        }
        let config = MapConfig { width: 10, height: 1, ..MapConfig::default() };
        assert_eq!(config.maze_size(&mut rng), (10, 1));
    }

    #[test]
    fn random_size_stays_below_the_maximum() {
        let config = MapConfig { random_size: true, ..MapConfig::default() };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let (w, h) = config.maze_size(&mut rng);
            assert!(w >= 0 && w < 10);
            assert!(h >= 0 && h < 10);
        }
        for seed in 0..20 {
            let maze = MapConfig { seed: Some(seed), ..config.clone() }.build_maze();
            assert!(maze.width().0 >= 1 && maze.width().0 <= 9);
            assert!(maze.height().0 >= 1 && maze.height().0 <= 9);
            assert_eq!(maze.passages_count(), maze.size() - 1);
        }
    }
}
