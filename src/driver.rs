//! Simulation driver: scheduling, spawn queue, event buffer
//!
//! The driver is the only thing that mutates simulation state. Spawn
//! requests from the outside are queued and applied between ticks, so no
//! tick ever observes a half-applied spawn, and the whole frame runs on one
//! thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, TICK_DT};
use crate::sim::{Ball, Board, GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Owns the live simulation: state, geometry, tuning, pacing
pub struct SimDriver {
    state: GameState,
    board: Board,
    tuning: Tuning,
    /// Unconsumed frame time carried between `step_frame` calls
    accumulator: f32,
    /// Wagers waiting to be applied before the next tick
    pending_spawns: Vec<f32>,
    /// Events from the most recent `step_frame`
    events: Vec<GameEvent>,
}

impl SimDriver {
    pub fn new(seed: u64, board: Board, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed),
            board,
            tuning,
            accumulator: 0.0,
            pending_spawns: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a ball drop for `wager`, applied before the next tick.
    ///
    /// Rejection (insufficient funds) is a silent no-op at this level;
    /// callers that need the result synchronously use
    /// [`GameState::try_spawn_ball`] between frames instead.
    pub fn request_spawn(&mut self, wager: f32) {
        self.pending_spawns.push(wager);
    }

    /// Advance the simulation by a wall-clock frame.
    ///
    /// Runs zero or more fixed ticks depending on accumulated time, capped
    /// at [`MAX_SUBSTEPS`] to avoid the spiral of death after a stall.
    /// Returns the events produced this frame.
    pub fn step_frame(&mut self, dt: f32) -> &[GameEvent] {
        self.events.clear();

        // A long stall (debugger, suspend) must not turn into a tick storm
        let dt = dt.min(0.25);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.apply_pending_spawns();
            tick(&mut self.state, &self.board, &self.tuning, &mut self.events);
            self.accumulator -= TICK_DT;
            substeps += 1;
        }

        &self.events
    }

    /// Drain queued spawn requests into the live collection
    fn apply_pending_spawns(&mut self) {
        if self.pending_spawns.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_spawns);
        for wager in pending {
            match self.state.try_spawn_ball(&self.board, &self.tuning, wager) {
                Ok(ball_id) => {
                    // The ball we just pushed is last in the collection
                    let ball = self.state.balls.last().expect("spawned ball present");
                    self.events.push(GameEvent::BallSpawned {
                        ball_id,
                        x: ball.pos.x,
                        y: ball.pos.y,
                    });
                }
                Err(err) => {
                    log::debug!("spawn rejected (wager {wager:.2}): {err}");
                }
            }
        }
    }

    /// Events produced by the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Balls currently in flight, in spawn order
    pub fn active_balls(&self) -> &[Ball] {
        &self.state.balls
    }

    /// Spawn requests not yet applied to a tick
    pub fn pending_spawns(&self) -> usize {
        self.pending_spawns.len()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn balance(&self) -> f32 {
        self.state.wallet.balance()
    }

    pub fn ball_price(&self) -> f32 {
        self.state.ball_price
    }

    pub fn set_ball_price(&mut self, price: f32) {
        self.state.ball_price = price;
    }
}

/// Run the driver at the fixed tick rate until `stop` is set.
///
/// Each iteration steps the frame and then invokes `frame` with the driver,
/// where the caller reads [`SimDriver::events`] and queues spawns for the
/// next frame. Returns once `stop` is observed; no timers or work outlive
/// the call.
pub fn run_fixed_rate<F>(driver: &mut SimDriver, stop: &AtomicBool, mut frame: F)
where
    F: FnMut(&mut SimDriver),
{
    let frame_duration = Duration::from_secs_f32(TICK_DT);
    let mut last = Instant::now();

    while !stop.load(Ordering::Relaxed) {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;

        driver.step_frame(dt);
        frame(driver);

        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
