//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (balls in spawn order)
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod state;
pub mod tick;

pub use board::{Board, Peg, ScoringSlot, payout_row, pyramid_pegs, SLOT_MULTIPLIERS};
pub use collision::{Contact, ball_peg_contact, reflect_velocity};
pub use state::{Ball, GameEvent, GameState, RemovalReason, SpawnError, Wallet};
pub use tick::tick;
