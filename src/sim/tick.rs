//! Fixed timestep simulation tick
//!
//! One call advances every active ball by one tick: gravity, peg bounces,
//! wall bounces, slot scoring, retirement. Balls never collide with each
//! other, so per-ball order cannot change the outcome; balls are processed
//! in spawn order regardless to keep runs reproducible.

use super::board::Board;
use super::collision::{ball_peg_contact, reflect_velocity};
use super::state::{GameEvent, GameState, RemovalReason};
use crate::consts::COLLISION_RADIUS;
use crate::tuning::Tuning;

/// Advance the simulation by one tick.
///
/// Events for this tick are appended to `events`: one `BallUpdated` per
/// surviving ball, plus `SlotHit`/`BallRemoved` as balls land or fall out.
/// Never fails; a degenerate peg overlap resolves to a default normal
/// inside [`ball_peg_contact`].
pub fn tick(state: &mut GameState, board: &Board, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;

    let wallet = &mut state.wallet;

    state.balls.retain_mut(|ball| {
        // --- INTEGRATE ---
        // Symplectic Euler, one tick = one unit time step
        ball.vel.y += tuning.gravity;
        ball.pos += ball.vel;

        // --- PEG COLLISIONS ---
        // Each overlapping peg is resolved independently and sequentially
        // against the ball's then-current state; no simultaneous
        // multi-contact solve.
        for peg in &board.pegs {
            if let Some(contact) = ball_peg_contact(ball.pos, peg.pos, COLLISION_RADIUS) {
                ball.vel = reflect_velocity(ball.vel, contact.normal) * tuning.peg_damping;
                ball.pos += contact.normal * (contact.penetration + tuning.pushout_skin);
            }
        }

        // --- WALL COLLISIONS ---
        if ball.pos.x < board.left_bound {
            ball.pos.x = board.left_bound;
            ball.vel.x = -ball.vel.x * tuning.wall_damping;
        } else if ball.pos.x > board.right_bound {
            ball.pos.x = board.right_bound;
            ball.vel.x = -ball.vel.x * tuning.wall_damping;
        }

        // --- SLOT HITS ---
        if !ball.scored
            && let Some(slot) = board.slots.iter().find(|s| s.contains(ball.pos))
        {
            ball.scored = true;
            let payout = ball.wager * slot.multiplier;
            wallet.credit(payout);
            events.push(GameEvent::SlotHit {
                slot_id: slot.id,
                ball_id: ball.id,
                multiplier: slot.multiplier,
                payout,
            });
        }

        // --- RETIREMENT ---
        if ball.scored {
            events.push(GameEvent::BallRemoved {
                ball_id: ball.id,
                reason: RemovalReason::Scored,
            });
            return false;
        }
        if ball.pos.y > board.bottom_bound {
            // Safety net for balls that slip past the slot row
            events.push(GameEvent::BallRemoved {
                ball_id: ball.id,
                reason: RemovalReason::OutOfBounds,
            });
            return false;
        }

        events.push(GameEvent::BallUpdated {
            ball_id: ball.id,
            x: ball.pos.x,
            y: ball.pos.y,
        });
        true
    });
}
