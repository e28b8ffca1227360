//! Plinko Drop entry point
//!
//! Headless demo: drops a batch of balls through the standard board at the
//! fixed tick rate and logs payouts as they land. An optional first
//! argument names a JSON tuning file.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use plinko_drop::driver::{SimDriver, run_fixed_rate};
use plinko_drop::sim::{Board, GameEvent};
use plinko_drop::tuning::Tuning;

/// Balls the demo drops before shutting down
const DEMO_BALLS: u32 = 20;
/// Ticks between drops (half a second)
const DROP_INTERVAL_TICKS: u64 = 30;

fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(Path::new(&path)),
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut driver = SimDriver::new(seed, Board::standard(), tuning);
    log::info!("Plinko Drop starting (seed {seed})");
    log::info!("Opening balance: {:.2}", driver.balance());

    let mut dropped = 0u32;
    let mut next_drop_tick = 0u64;
    let stop = AtomicBool::new(false);

    run_fixed_rate(&mut driver, &stop, |driver| {
        let ticks = driver.state().time_ticks;
        if dropped < DEMO_BALLS && ticks >= next_drop_tick {
            driver.request_spawn(driver.ball_price());
            dropped += 1;
            next_drop_tick = ticks + DROP_INTERVAL_TICKS;
        }

        for event in driver.events() {
            match *event {
                GameEvent::SlotHit {
                    slot_id,
                    ball_id,
                    multiplier,
                    payout,
                } => {
                    log::info!("ball {ball_id} landed in slot {slot_id}: x{multiplier} pays {payout:.2}");
                }
                GameEvent::BallRemoved { ball_id, reason } => {
                    log::debug!("ball {ball_id} removed ({reason:?})");
                }
                _ => {}
            }
        }

        let all_dropped = dropped == DEMO_BALLS && driver.pending_spawns() == 0;
        if all_dropped && driver.active_balls().is_empty() {
            stop.store(true, Ordering::Relaxed);
        }
    });

    log::info!(
        "Closing balance after {DEMO_BALLS} balls: {:.2}",
        driver.balance()
    );
}
