//! Plinko Drop - a headless Plinko board simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board geometry, physics, wallet, events)
//! - `driver`: Fixed-rate scheduling, spawn queue, per-frame event buffer
//! - `tuning`: Data-driven physics balance
//!
//! The crate owns everything between "drop a ball" and "slot paid out".
//! Rendering, input widgets and audio live outside; they feed spawn requests
//! in through [`driver::SimDriver::request_spawn`] and consume the
//! [`sim::GameEvent`] stream coming back out.

pub mod driver;
pub mod sim;
pub mod tuning;

pub use driver::SimDriver;
pub use tuning::Tuning;

/// Game configuration constants
///
/// Coordinate system is screen-like: +x right, +y down. All speeds and
/// accelerations are in pixels per tick; the driver paces ticks in real time.
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock duration of one tick
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball and peg radii; collisions trigger on the sum
    pub const BALL_RADIUS: f32 = 7.0;
    pub const PEG_RADIUS: f32 = 8.0;
    pub const COLLISION_RADIUS: f32 = BALL_RADIUS + PEG_RADIUS;

    /// Peg pyramid layout
    pub const PEG_ROWS: u32 = 10;
    pub const BOARD_CENTER_X: f32 = 375.0;
    pub const PEG_START_Y: f32 = 70.0;
    pub const PEG_SPACING_X: f32 = 45.0;
    pub const PEG_SPACING_Y: f32 = 60.0;

    /// Side walls and the kill line below the slot row
    pub const LEFT_BOUND: f32 = 10.0;
    pub const RIGHT_BOUND: f32 = 740.0;
    pub const BOTTOM_BOUND: f32 = 900.0;

    /// Scoring slot row
    pub const SLOT_Y: f32 = 650.0;
    pub const SLOT_WIDTH: f32 = 45.0;
    pub const SLOT_HEIGHT: f32 = 45.0;
    pub const SLOT_PITCH_X: f32 = 50.0;
    pub const SLOT_START_X: f32 = 114.0;

    /// Ball spawn point sits above the pyramid apex
    pub const SPAWN_Y: f32 = 10.0;

    /// Wallet defaults
    pub const STARTING_BUDGET: f32 = 1000.0;
    pub const DEFAULT_BALL_PRICE: f32 = 10.0;
}
