//! Data-driven game balance
//!
//! Physics knobs live in one serde struct so a board can be retuned from a
//! JSON file without recompiling. Compiled-in defaults reproduce the
//! shipped board feel.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Physics balance parameters. Velocities are pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added each tick
    pub gravity: f32,
    /// Fraction of velocity kept after a peg bounce (< 1 bleeds energy)
    pub peg_damping: f32,
    /// Fraction of horizontal velocity kept after a wall bounce
    pub wall_damping: f32,
    /// Extra separation when pushing a ball out of a peg, prevents sticking
    pub pushout_skin: f32,
    /// Half-range of horizontal spawn position jitter
    pub spawn_jitter_x: f32,
    /// Half-range of horizontal spawn velocity jitter
    pub spawn_jitter_vx: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            peg_damping: 0.4,
            wall_damping: 0.4,
            pushout_skin: 0.5,
            spawn_jitter_x: 15.0,
            spawn_jitter_vx: 0.6,
        }
    }
}

impl Tuning {
    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Bad tuning file {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
