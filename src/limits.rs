use shakmaty::{ByColor, Color};

use crate::clock::TimePoint;

/// Search limits parsed from a UCI `go` command. One value per move.
///
/// `TimeManager::init` reads the clock fields and hands back a copy; in
/// nodes-as-time mode that copy comes back with `time`/`inc` for the side
/// to move converted to node units and `npmsec` recording the rate, so the
/// search must use the returned value, not the original.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    /// Remaining clock per side (ms)
    pub time: ByColor<TimePoint>,
    /// Increment per move per side (ms)
    pub inc: ByColor<TimePoint>,
    /// Moves until the next time control; 0 = sudden death
    pub movestogo: u32,
    /// Fixed time for this move (ms); handled by the search, not here
    pub movetime: TimePoint,
    pub depth: i32,
    pub nodes: u64,
    pub infinite: bool,
    /// Nodes per millisecond once nodes-as-time is active, else 0
    pub npmsec: TimePoint,
    /// `now()` stamped when the `go` command arrived
    pub start_time: TimePoint,
}

impl SearchLimits {
    /// True when a game clock is running and move budgets apply.
    /// movetime/depth/nodes/infinite searches stop by their own rule.
    pub fn use_time_management(&self) -> bool {
        self.time.white != 0 || self.time.black != 0
    }

    /// Remaining time for one side.
    pub fn time_for(&self, side: Color) -> TimePoint {
        *self.time.get(side)
    }

    /// Increment for one side.
    pub fn inc_for(&self, side: Color) -> TimePoint {
        *self.inc.get(side)
    }
}
