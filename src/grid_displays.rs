use std::fmt;

use crate::cells::{self, Cartesian2DCoordinate, CompassPrimary};
use crate::maze::Maze;
use crate::pathing::Distances;
use crate::utils::FnvHashSet;


pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> String {
        String::from("   ")
    }
}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        PathDisplay { on_path_coordinates: path.iter().cloned().collect() }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// A maze paired with something that fills in the cell bodies.
pub struct MazeView<'a> {
    maze: &'a Maze,
    grid_display: Option<&'a dyn GridDisplay>,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze, grid_display: Option<&'a dyn GridDisplay>) -> MazeView<'a> {
        MazeView { maze, grid_display }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&MazeView::new(self, None), f)
    }
}

impl<'a> fmt::Display for MazeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";
        let default_cell_body = String::from("   ");

        let maze = self.maze;
        let columns_count = maze.width().0 as u32;
        let rows_count = maze.height().0 as u32;
        let gc = Cartesian2DCoordinate::new;

        // Start by special case rendering the text for the north most boundary
        let mut output = String::from(WALL_RD);
        for x in 0..columns_count {
            output.push_str(WALL_LR_3);
            let is_east_open = maze.is_neighbour_linked(gc(x, 0), CompassPrimary::East);
            if is_east_open {
                output.push_str(WALL_LR);
            } else {
                let is_last_cell = x == columns_count - 1;
                if is_last_cell {
                    output.push_str(WALL_LD);
                } else {
                    output.push_str(WALL_LRD);
                }
            }
        }
        output.push('\n');

        for y in 0..rows_count {

            let is_last_row = y == rows_count - 1;

            // Starts of by special case rendering the west most boundary of the row
            // The top section of the cell is done by the previous row.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for x in 0..columns_count {
                let cell_coord = gc(x, y);
                let is_first_column = x == 0;
                let is_last_column = x == columns_count - 1;
                let east_open = maze.is_neighbour_linked(cell_coord, CompassPrimary::East);
                let south_open = maze.is_neighbour_linked(cell_coord, CompassPrimary::South);

                // Each cell will simply use the southern wall of the cell above
                // it as its own northern wall, so we only need to worry about the cell’s body (room space),
                // its eastern boundary ('|'), and its southern boundary ('---+') minus the south west corner.
                let east_boundary = if east_open { " " } else { WALL_UD };

                // Cell Body
                if let Some(displayer) = self.grid_display {
                    row_middle_section_render.push_str(displayer.render_cell_body(cell_coord)
                        .as_str());
                } else {
                    row_middle_section_render.push_str(default_cell_body.as_str());
                }

                row_middle_section_render.push_str(east_boundary);

                if is_first_column {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if south_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                let south_boundary = if south_open { "   " } else { WALL_LR_3 };
                row_bottom_section_render.push_str(south_boundary);

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let access_se_from_east =
                            cells::offset_coordinate(cell_coord, CompassPrimary::East, maze.dimensions())
                                .map_or(false,
                                        |c| maze.is_neighbour_linked(c, CompassPrimary::South));
                        let access_se_from_south =
                            cells::offset_coordinate(cell_coord, CompassPrimary::South, maze.dimensions())
                                .map_or(false,
                                        |c| maze.is_neighbour_linked(c, CompassPrimary::East));
                        let show_right_section = !access_se_from_east;
                        let show_down_section = !access_se_from_south;
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };

                row_bottom_section_render.push_str(corner);
            }

            output.push_str(row_middle_section_render.as_ref());
            output.push('\n');
            output.push_str(row_bottom_section_render.as_ref());
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
