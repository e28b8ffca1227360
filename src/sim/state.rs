//! Game state and core simulation types
//!
//! The single owned simulation state: live balls, wallet, RNG. Everything
//! the tick mutates lives here; nothing is aliased across callbacks.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::board::Board;
use crate::consts::*;
use crate::tuning::Tuning;

/// A ball in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Price paid to drop this ball; payouts multiply THIS amount, not
    /// whatever the ball price is by the time the ball lands
    pub wager: f32,
    /// Set exactly once, on first slot overlap; blocks double-scoring
    pub scored: bool,
}

/// Why a ball left the live collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RemovalReason {
    /// Landed in a scoring slot and paid out
    Scored,
    /// Fell past the bottom of the board without scoring
    OutOfBounds,
}

/// Outbound data events, one batch per tick
///
/// The simulation emits these instead of touching audio or a display; the
/// presentation layer subscribes and reacts. `Serialize` so a consumer can
/// ship them over any boundary it likes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// A spawn request was accepted and a ball entered the board
    BallSpawned { ball_id: u32, x: f32, y: f32 },
    /// Per-tick position report for every active ball
    BallUpdated { ball_id: u32, x: f32, y: f32 },
    /// A ball landed in a slot; emitted exactly once per ball
    SlotHit {
        slot_id: u32,
        ball_id: u32,
        multiplier: f32,
        payout: f32,
    },
    /// A ball left the simulation
    BallRemoved {
        ball_id: u32,
        reason: RemovalReason,
    },
}

/// Spawn failure; the only recoverable error in the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Wallet balance is below the requested wager; nothing changed
    InsufficientFunds,
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::InsufficientFunds => write!(f, "insufficient funds for wager"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// The session wallet
///
/// The narrow interface the core is allowed: read the balance, debit with a
/// success flag, credit unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wallet {
    balance: f32,
}

impl Wallet {
    pub fn new(balance: f32) -> Self {
        Self { balance }
    }

    #[inline]
    pub fn balance(&self) -> f32 {
        self.balance
    }

    /// Withdraw `amount` if covered. Returns false and leaves the balance
    /// untouched when `balance < amount`.
    pub fn debit(&mut self, amount: f32) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }

    pub fn credit(&mut self, amount: f32) {
        self.balance += amount;
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(STARTING_BUDGET)
    }
}

/// Complete mutable simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session wallet; spawns debit it, slot hits credit it
    pub wallet: Wallet,
    /// Current price charged per dropped ball
    pub ball_price: f32,
    /// Live balls in spawn order
    pub balls: Vec<Ball>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Spawn jitter RNG
    rng: Pcg32,
    /// Next ball ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            wallet: Wallet::default(),
            ball_price: DEFAULT_BALL_PRICE,
            balls: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new ball ID (monotonic, session-unique)
    fn next_ball_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Try to drop a ball for `wager`.
    ///
    /// Rejected with no state change when the wallet cannot cover the wager.
    /// On success the wallet is debited and the ball enters the live
    /// collection at the board's spawn point with uniform horizontal jitter
    /// and a small random horizontal velocity; vertical velocity starts at
    /// zero. Returns the new ball's ID.
    pub fn try_spawn_ball(
        &mut self,
        board: &Board,
        tuning: &Tuning,
        wager: f32,
    ) -> Result<u32, SpawnError> {
        if !self.wallet.debit(wager) {
            return Err(SpawnError::InsufficientFunds);
        }

        let jitter_x = self.rng.random_range(-tuning.spawn_jitter_x..=tuning.spawn_jitter_x);
        let jitter_vx = self.rng.random_range(-tuning.spawn_jitter_vx..=tuning.spawn_jitter_vx);

        let id = self.next_ball_id();
        self.balls.push(Ball {
            id,
            pos: board.spawn + Vec2::new(jitter_x, 0.0),
            vel: Vec2::new(jitter_vx, 0.0),
            wager,
            scored: false,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Board, Tuning) {
        (Board::standard(), Tuning::default())
    }

    #[test]
    fn test_spawn_debits_wallet() {
        let (board, tuning) = setup();
        let mut state = GameState::new(7);

        let id = state.try_spawn_ball(&board, &tuning, 10.0).unwrap();
        assert_eq!(id, 1);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.wallet.balance(), STARTING_BUDGET - 10.0);

        let ball = &state.balls[0];
        assert_eq!(ball.wager, 10.0);
        assert!(!ball.scored);
        assert_eq!(ball.vel.y, 0.0);
        assert!((ball.pos.x - board.spawn.x).abs() <= tuning.spawn_jitter_x);
        assert!(ball.vel.x.abs() <= tuning.spawn_jitter_vx);
        assert_eq!(ball.pos.y, board.spawn.y);
    }

    #[test]
    fn test_spawn_rejected_when_broke() {
        let (board, tuning) = setup();
        let mut state = GameState::new(7);
        state.wallet = Wallet::new(5.0);

        let result = state.try_spawn_ball(&board, &tuning, 10.0);
        assert_eq!(result, Err(SpawnError::InsufficientFunds));
        assert!(state.balls.is_empty());
        // Budget unchanged on rejection
        assert_eq!(state.wallet.balance(), 5.0);
    }

    #[test]
    fn test_spawn_allowed_at_exact_balance() {
        let (board, tuning) = setup();
        let mut state = GameState::new(7);
        state.wallet = Wallet::new(10.0);

        assert!(state.try_spawn_ball(&board, &tuning, 10.0).is_ok());
        assert_eq!(state.wallet.balance(), 0.0);
    }

    #[test]
    fn test_ball_ids_monotonic() {
        let (board, tuning) = setup();
        let mut state = GameState::new(7);

        let a = state.try_spawn_ball(&board, &tuning, 1.0).unwrap();
        let b = state.try_spawn_ball(&board, &tuning, 1.0).unwrap();
        let c = state.try_spawn_ball(&board, &tuning, 1.0).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_same_seed_same_jitter() {
        let (board, tuning) = setup();
        let mut a = GameState::new(123);
        let mut b = GameState::new(123);

        a.try_spawn_ball(&board, &tuning, 10.0).unwrap();
        b.try_spawn_ball(&board, &tuning, 10.0).unwrap();
        assert_eq!(a.balls[0].pos, b.balls[0].pos);
        assert_eq!(a.balls[0].vel, b.balls[0].vel);
    }

    #[test]
    fn test_wallet_interface() {
        let mut wallet = Wallet::new(100.0);
        assert!(wallet.debit(40.0));
        assert_eq!(wallet.balance(), 60.0);
        assert!(!wallet.debit(100.0));
        assert_eq!(wallet.balance(), 60.0);
        wallet.credit(15.0);
        assert_eq!(wallet.balance(), 75.0);
    }
}
