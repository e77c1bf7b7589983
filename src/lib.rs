// Domain layer - Grid simulation logic
pub mod domain;

// Application layer - Animation state and lifecycle
pub mod application;

// Infrastructure layer - Rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid};
pub use application::BannerState;
pub use input::PointerTracker;
