/// Cell is the fundamental unit of the banner grid. The value counts
/// consecutive generations survived: 0 is dead, 1 is newborn, and every
/// surviving generation adds one. The renderer turns the count into a hue.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell(pub u32);

impl Cell {
    pub const DEAD: Cell = Cell(0);

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.0 > 0
    }

    /// Pure function to compute the next state:
    /// 1. Live cell with 2-3 neighbors survives and its value grows by one
    /// 2. Dead cell with exactly 3 neighbors becomes alive at value 1
    /// 3. All other cases result in death
    ///
    /// Unlike classic Conway rules a survivor is not reset to "alive": its
    /// value keeps climbing (saturating), which is what drives the color
    /// rotation of long-lived colonies.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => Cell(self.0.saturating_add(1)),
            (false, 3) => Cell(1),
            _ => Cell::DEAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell(1).evolve(0), Cell::DEAD);
        assert_eq!(Cell(3).evolve(1), Cell::DEAD);
    }

    #[test]
    fn test_survival_increments_value() {
        assert_eq!(Cell(1).evolve(2), Cell(2));
        assert_eq!(Cell(1).evolve(3), Cell(2));
        assert_eq!(Cell(6).evolve(2), Cell(7));
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell(2).evolve(4), Cell::DEAD);
        assert_eq!(Cell(9).evolve(8), Cell::DEAD);
    }

    #[test]
    fn test_reproduction_starts_at_one() {
        assert_eq!(Cell::DEAD.evolve(3), Cell(1));
    }

    #[test]
    fn test_dead_stays_dead_without_three_neighbors() {
        assert_eq!(Cell::DEAD.evolve(0), Cell::DEAD);
        assert_eq!(Cell::DEAD.evolve(2), Cell::DEAD);
        assert_eq!(Cell::DEAD.evolve(4), Cell::DEAD);
    }

    #[test]
    fn test_survival_saturates_at_max() {
        assert_eq!(Cell(u32::MAX).evolve(2), Cell(u32::MAX));
    }
}
