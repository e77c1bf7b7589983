use macroquad::logging::info;

use crate::domain::Grid;
use crate::rendering::CELL_LENGTH;

/// Generations simulated at startup so the first visible frame already shows
/// an evolved colony instead of raw seed noise.
const BURN_IN_GENERATIONS: usize = 10;

/// Cell count above which stepping goes through the rayon path.
/// Parallel wins past roughly 100x100; a full banner at 3 px cells is an
/// order of magnitude beyond that.
const PARALLEL_CUTOVER_CELLS: usize = 10_000;

/// BannerState orchestrates the animation.
/// This is the application layer that coordinates domain logic.
pub struct BannerState {
    grid: Grid,
    surface_width: f32,
    surface_height: f32,
}

impl BannerState {
    /// Create a freshly seeded banner sized to the drawing surface. Grid
    /// dimensions round up so the cells cover the surface completely; a zero
    /// or degenerate surface degrades to an empty grid.
    pub fn new(width: f32, height: f32) -> Self {
        let rows = (height / CELL_LENGTH).ceil() as usize;
        let cols = (width / CELL_LENGTH).ceil() as usize;
        info!("seeding banner grid: {} rows x {} cols", rows, cols);

        Self {
            grid: Grid::new(rows, cols).randomize(),
            surface_width: width,
            surface_height: height,
        }
    }

    /// The grid to paint this frame
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance the colony by one generation
    pub fn advance(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = if rows * cols >= PARALLEL_CUTOVER_CELLS {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
    }

    /// Run the startup generations. Only runs once at launch; a resize
    /// reseeds without burn-in.
    pub fn burn_in(&mut self) {
        for _ in 0..BURN_IN_GENERATIONS {
            self.advance();
        }
    }

    /// Rebuild wholesale when the surface changed size. The old colony is
    /// discarded, nothing migrates. Returns whether a rebuild happened.
    pub fn handle_resize(&mut self, width: f32, height: f32) -> bool {
        if width == self.surface_width && height == self.surface_height {
            return false;
        }
        *self = Self::new(width, height);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_round_up() {
        // 31 px of height at 3 px cells needs 11 rows to cover the surface
        let state = BannerState::new(91.0, 31.0);
        assert_eq!(state.grid().dimensions(), (11, 31));

        let exact = BannerState::new(90.0, 30.0);
        assert_eq!(exact.grid().dimensions(), (10, 30));
    }

    #[test]
    fn test_seed_values_are_binary() {
        let state = BannerState::new(300.0, 120.0);
        for (_, _, cell) in state.grid().iter_cells() {
            assert!(cell.0 <= 1);
        }
    }

    #[test]
    fn test_degenerate_surface_is_empty_not_fatal() {
        let mut state = BannerState::new(0.0, 0.0);
        assert_eq!(state.grid().dimensions(), (0, 0));
        state.advance();
        state.burn_in();
    }

    #[test]
    fn test_resize_rebuilds_only_on_change() {
        let mut state = BannerState::new(90.0, 30.0);

        assert!(!state.handle_resize(90.0, 30.0));
        assert_eq!(state.grid().dimensions(), (10, 30));

        assert!(state.handle_resize(150.0, 60.0));
        assert_eq!(state.grid().dimensions(), (20, 50));
    }

    #[test]
    fn test_burn_in_keeps_dimensions() {
        let mut state = BannerState::new(120.0, 60.0);
        state.burn_in();
        assert_eq!(state.grid().dimensions(), (20, 40));
    }
}
