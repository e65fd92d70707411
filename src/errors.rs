//! Error types for the library, generated by `error_chain!`.
//!
//! Other modules `use crate::errors::*;` to get `Error`, `ErrorKind`, `Result` and `ResultExt`.

use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Toml(::toml::de::Error);
    }

    errors {
        InvalidAdjacency(a: usize, b: usize) {
            description("cells are not grid-adjacent")
            display("Cells {} and {} are not grid-adjacent, there is no wall between them", a, b)
        }
        InvalidCellIndex(index: usize) {
            description("cell index outside the maze")
            display("Cell index {} is outside the maze", index)
        }
        DimensionOutOfRange(width: i64, height: i64) {
            description("maze dimensions outside the supported range")
            display("Maze dimensions {}x{} are outside the supported range", width, height)
        }
    }
}
