//! Time management for UCI chess engines.
//!
//! Before each search the engine needs two budgets: an *optimum* time it
//! should aim to finish near, and a *maximum* time it must never exceed.
//! Both come out of the remaining clock, the increment, the moves-to-go
//! horizon, and how far into the game we are. A nodes-as-time mode swaps
//! the wall clock for a counted node quota when play must be reproducible.
//!
//! [`TimeManager`] lives for one game session. Call [`TimeManager::init`]
//! once per `go` command, before the search threads start, and run the
//! search under the limits it returns; the search then polls
//! [`TimeManager::elapsed`] against `optimum()`/`maximum()`.

pub mod clock;
pub mod config;
pub mod limits;
pub mod timeman;

pub use clock::{TimePoint, now};
pub use config::{TimeConfig, TimeParams};
pub use limits::SearchLimits;
pub use timeman::TimeManager;
