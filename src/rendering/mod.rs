mod palette;

pub use palette::color_for;

use macroquad::prelude::*;

use crate::domain::Grid;

/// Edge length of one cell square, in pixels.
pub const CELL_LENGTH: f32 = 3.0;

/// Paint the whole grid, dead cells included. The banner repaints every cell
/// every frame instead of tracking dirty regions; at banner sizes that is
/// comfortably within a frame budget.
pub fn draw_grid(grid: &Grid) {
    for (row, col, cell) in grid.iter_cells() {
        draw_rectangle(
            col as f32 * CELL_LENGTH,
            row as f32 * CELL_LENGTH,
            CELL_LENGTH,
            CELL_LENGTH,
            color_for(cell.0),
        );
    }
}
