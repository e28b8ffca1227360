//! Board geometry: peg field, scoring slots, bounds
//!
//! One `Board` is built at setup and injected everywhere - the simulation
//! collides against the same geometry a presentation layer draws. There is
//! deliberately a single peg generator; simulated collisions and rendered
//! pegs cannot disagree.

use glam::Vec2;

use crate::consts::*;

/// A static circular obstacle. Radius is the global [`PEG_RADIUS`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peg {
    pub pos: Vec2,
}

/// A scoring slot at the bottom of the board
///
/// The slot occupies the rectangle from `pos` (top-left corner) extending
/// [`SLOT_WIDTH`] right and [`SLOT_HEIGHT`] down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringSlot {
    pub id: u32,
    pub pos: Vec2,
    /// Payout factor applied to the ball's wager on hit
    pub multiplier: f32,
}

impl ScoringSlot {
    /// Whether a point falls within the slot's rectangular bounds.
    /// Strict inequalities on both axes: a ball exactly on the edge misses.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + SLOT_WIDTH
            && point.y > self.pos.y
            && point.y < self.pos.y + SLOT_HEIGHT
    }
}

/// Payout curve for the standard slot row: highest at the extremes,
/// lowest at center, mirror-symmetric.
pub const SLOT_MULTIPLIERS: [f32; 11] = [
    8.0, 4.0, 2.0, 1.0, 0.5, 0.1, 0.5, 1.0, 2.0, 4.0, 8.0,
];

/// Generate the centered peg pyramid.
///
/// Row `r` holds `r + 1` pegs centered on `center_x`:
/// `x = center_x + (c - r/2) * spacing_x`, `y = start_y + r * spacing_y`.
/// Pure and deterministic; call once per board setup.
pub fn pyramid_pegs(
    rows: u32,
    center_x: f32,
    start_y: f32,
    spacing_x: f32,
    spacing_y: f32,
) -> Vec<Peg> {
    let mut pegs = Vec::with_capacity((rows * (rows + 1) / 2) as usize);
    for row in 0..rows {
        for col in 0..=row {
            let x = center_x + (col as f32 - row as f32 / 2.0) * spacing_x;
            let y = start_y + row as f32 * spacing_y;
            pegs.push(Peg {
                pos: Vec2::new(x, y),
            });
        }
    }
    pegs
}

/// Lay out a row of scoring slots left to right with the given multipliers.
pub fn payout_row(multipliers: &[f32], start_x: f32, y: f32, pitch_x: f32) -> Vec<ScoringSlot> {
    multipliers
        .iter()
        .enumerate()
        .map(|(i, &multiplier)| ScoringSlot {
            id: i as u32,
            pos: Vec2::new(start_x + i as f32 * pitch_x, y),
            multiplier,
        })
        .collect()
}

/// The complete static board: peg field, slot registry, bounds, spawn point
#[derive(Debug, Clone)]
pub struct Board {
    pub pegs: Vec<Peg>,
    pub slots: Vec<ScoringSlot>,
    /// Side walls balls reflect off
    pub left_bound: f32,
    pub right_bound: f32,
    /// Balls past this y are retired as out of bounds
    pub bottom_bound: f32,
    /// Top-center point new balls drop from
    pub spawn: Vec2,
}

impl Board {
    /// The standard board from [`crate::consts`]: 10-row pyramid over the
    /// 11-slot payout row.
    pub fn standard() -> Self {
        Self {
            pegs: pyramid_pegs(
                PEG_ROWS,
                BOARD_CENTER_X,
                PEG_START_Y,
                PEG_SPACING_X,
                PEG_SPACING_Y,
            ),
            slots: payout_row(&SLOT_MULTIPLIERS, SLOT_START_X, SLOT_Y, SLOT_PITCH_X),
            left_bound: LEFT_BOUND,
            right_bound: RIGHT_BOUND,
            bottom_bound: BOTTOM_BOUND,
            spawn: Vec2::new(BOARD_CENTER_X, SPAWN_Y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pyramid_is_deterministic() {
        let a = pyramid_pegs(10, 375.0, 70.0, 45.0, 60.0);
        let b = pyramid_pegs(10, 375.0, 70.0, 45.0, 60.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 55); // 1 + 2 + ... + 10
    }

    #[test]
    fn test_pyramid_row_shape() {
        let pegs = pyramid_pegs(4, 100.0, 20.0, 10.0, 8.0);
        assert_eq!(pegs.len(), 10);

        // Row r sits at start_y + r * spacing_y and holds r + 1 pegs
        for row in 0..4u32 {
            let y = 20.0 + row as f32 * 8.0;
            let in_row = pegs.iter().filter(|p| p.pos.y == y).count();
            assert_eq!(in_row, row as usize + 1);
        }

        // Apex peg is dead center
        assert_eq!(pegs[0].pos, Vec2::new(100.0, 20.0));
    }

    #[test]
    fn test_pyramid_symmetric_about_center() {
        let center_x = 375.0;
        let pegs = pyramid_pegs(10, center_x, 70.0, 45.0, 60.0);
        for peg in &pegs {
            let mirrored = Vec2::new(2.0 * center_x - peg.pos.x, peg.pos.y);
            assert!(
                pegs.iter().any(|p| (p.pos - mirrored).length() < 1e-3),
                "no mirror for peg at {:?}",
                peg.pos
            );
        }
    }

    #[test]
    fn test_payout_row_layout() {
        let slots = payout_row(&SLOT_MULTIPLIERS, 114.0, 650.0, 50.0);
        assert_eq!(slots.len(), 11);

        // Ids are ordered left to right at the slot pitch
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.id, i as u32);
            assert_eq!(slot.pos.x, 114.0 + i as f32 * 50.0);
            assert_eq!(slot.pos.y, 650.0);
        }

        // Payout curve: symmetric, extremes high, center low
        for i in 0..slots.len() {
            assert_eq!(
                slots[i].multiplier,
                slots[slots.len() - 1 - i].multiplier
            );
        }
        let center = slots.len() / 2;
        for i in 0..center {
            assert!(slots[i].multiplier >= slots[i + 1].multiplier);
        }
        assert_eq!(slots[center].multiplier, 0.1);
        assert_eq!(slots[0].multiplier, 8.0);
    }

    #[test]
    fn test_slot_contains_strict_bounds() {
        let slot = ScoringSlot {
            id: 0,
            pos: Vec2::new(100.0, 100.0),
            multiplier: 2.0,
        };
        assert!(slot.contains(Vec2::new(122.5, 122.5)));
        // Edges are exclusive
        assert!(!slot.contains(Vec2::new(100.0, 122.5)));
        assert!(!slot.contains(Vec2::new(145.0, 122.5)));
        assert!(!slot.contains(Vec2::new(122.5, 100.0)));
        assert!(!slot.contains(Vec2::new(122.5, 145.0)));
        // Clear misses
        assert!(!slot.contains(Vec2::new(90.0, 122.5)));
        assert!(!slot.contains(Vec2::new(122.5, 150.0)));
    }

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.pegs.len(), 55);
        assert_eq!(board.slots.len(), 11);
        assert!(board.spawn.y < board.pegs[0].pos.y);
        // Slot row sits between the last peg row and the kill line
        let lowest_peg = board
            .pegs
            .iter()
            .map(|p| p.pos.y)
            .fold(f32::MIN, f32::max);
        assert!(lowest_peg < SLOT_Y);
        assert!(SLOT_Y + SLOT_HEIGHT < board.bottom_bound);
    }
}
