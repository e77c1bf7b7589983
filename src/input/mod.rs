use macroquad::prelude::*;

/// Observed movements per simulation step. Throttles how fast mouse activity
/// can advance the colony.
pub const STEP_MODULUS: u64 = 4;

/// Watches the pointer across frames and decides when accumulated movement
/// should advance the simulation.
pub struct PointerTracker {
    last_position: Option<(f32, f32)>,
    moves: u64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            last_position: None,
            moves: 0,
        }
    }

    /// Sample the pointer once per frame. Returns true when this frame saw
    /// movement and the throttle says a step is due.
    pub fn poll(&mut self) -> bool {
        let position = mouse_position();
        let moved = self.last_position.is_some_and(|last| last != position);
        self.last_position = Some(position);
        moved && self.register_move()
    }

    /// Count one movement; every STEP_MODULUS-th one is step-worthy,
    /// starting with the first.
    fn register_move(&mut self) -> bool {
        let due = self.moves % STEP_MODULUS == 0;
        self.moves += 1;
        due
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
