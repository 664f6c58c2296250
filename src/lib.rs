//! Folio Live - interactivity layer for a static portfolio page
//!
//! Core modules:
//! - `sim`: Deterministic bouncing-ball simulation for the canvas demo
//! - `render`: Frame painting behind a `Surface` abstraction
//! - `form`: Contact form validation and submission persistence
//! - `theme`: Light/dark theme preference
//! - `slider`: Image carousel state
//! - `page`: Scroll-driven helpers (skill bars, back-to-top)
//!
//! Everything in these modules is platform-free and unit tested; the DOM and
//! canvas wiring lives in `main.rs` and only compiles for wasm32.

pub mod form;
pub mod page;
pub mod render;
pub mod sim;
pub mod slider;
pub mod theme;

pub use form::{ContactSubmission, FieldErrors};
pub use sim::{Ball, Bounds, RunState, Tuning};
pub use slider::Slider;
pub use theme::Theme;

/// Page tuning constants
pub mod consts {
    /// Downward acceleration per tick (pixels/tick^2)
    pub const GRAVITY: f32 = 0.12;
    /// Velocity retained after a side-wall bounce
    pub const WALL_DAMPING: f32 = 0.86;
    /// Velocity retained after a floor bounce (lossier than the walls)
    pub const FLOOR_DAMPING: f32 = 0.78;
    /// Velocity retained after a ceiling bounce
    pub const CEILING_DAMPING: f32 = 0.90;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 18.0;
    pub const BALL_START_VX: f32 = 3.2;
    pub const BALL_START_VY: f32 = 2.6;

    /// Gap between the ball's underside and its painted shadow (pixels)
    pub const SHADOW_DROP: f32 = 6.0;

    /// Carousel autoplay period (milliseconds)
    pub const AUTOPLAY_DELAY_MS: i32 = 4000;

    /// Scroll depth at which the back-to-top button appears (pixels)
    pub const BACK_TO_TOP_SHOW_AT: f64 = 300.0;

    /// Fraction of a skill bar that must be visible before it animates
    pub const SKILL_BAR_THRESHOLD: f64 = 0.5;

    /// Delay before redirecting after a successful form submit (milliseconds)
    pub const REDIRECT_DELAY_MS: i32 = 1500;
}
