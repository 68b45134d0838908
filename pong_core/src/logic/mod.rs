pub mod physics;
pub mod state;

pub use physics::TickOutcome;
pub use state::{Ball, GameState, Paddle, PlayerNames, Slot};
