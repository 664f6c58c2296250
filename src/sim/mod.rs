//! Deterministic bouncing-ball simulation
//!
//! All demo physics lives here. This module must stay pure:
//! - One fixed-size step per animation frame
//! - No rendering or platform dependencies
//! - The only mutator of ball state is `tick`

pub mod state;
pub mod tick;

pub use state::{Ball, Bounds, RunState, Tuning};
pub use tick::{WallHits, tick};
