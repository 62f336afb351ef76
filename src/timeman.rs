use shakmaty::Color;

use crate::clock::{TimePoint, now};
use crate::config::TimeConfig;
use crate::limits::SearchLimits;

/// Per-game time manager.
///
/// Owns the session state the budgets depend on: the moment the current
/// move started thinking, the last computed budgets, and the whole-game
/// node quota when nodes-as-time is active. Create one per game session
/// and call [`init`](Self::init) once per `go` before the search threads
/// start; the workers then only read copies of `optimum()`/`maximum()`.
pub struct TimeManager {
    start_time: TimePoint,
    optimum_time: TimePoint,
    maximum_time: TimePoint,
    use_nodes_time: bool,
    available_nodes: i64,
}

impl TimeManager {
    pub fn new() -> Self {
        Self {
            start_time: 0,
            optimum_time: 0,
            maximum_time: 0,
            use_nodes_time: false,
            available_nodes: 0,
        }
    }

    /// Target allocation for the current move. The search should aim to
    /// wrap up near this; iterative deepening checks it between iterations.
    pub fn optimum(&self) -> TimePoint {
        self.optimum_time
    }

    /// Hard ceiling for the current move. The search must abort when
    /// elapsed reaches this, mid-iteration if necessary.
    pub fn maximum(&self) -> TimePoint {
        self.maximum_time
    }

    /// Time spent on the current move: the searched node count in
    /// nodes-as-time mode, wall-clock milliseconds since `go` otherwise.
    /// Free of side effects, callable as often as the search likes.
    pub fn elapsed(&self, nodes: u64) -> TimePoint {
        if self.use_nodes_time {
            nodes as TimePoint
        } else {
            now() - self.start_time
        }
    }

    /// Forget the nodes-as-time quota so the next activation re-derives it
    /// from a fresh clock. Call on `ucinewgame`, not per move.
    pub fn clear(&mut self) {
        self.available_nodes = 0;
    }

    /// Credit (or charge, with a negative delta) nodes against the
    /// whole-game quota after a move completes. After the first derivation
    /// this is the only way the quota ever changes.
    pub fn advance_nodes_time(&mut self, nodes: i64) {
        debug_assert!(self.use_nodes_time);
        self.available_nodes += nodes;
    }

    /// Compute the budgets for the current move and return the limits the
    /// search should run under.
    ///
    /// The returned value is a copy of `limits`; when nodes-as-time is
    /// active its `time`/`inc` for `us` come back converted to node units
    /// (with `npmsec` recording the rate), so the caller must replace its
    /// limits with it. Budgets are read back via `optimum()`/`maximum()`.
    ///
    /// With no clock for the side to move the previous budgets stand and
    /// only the start time is restamped.
    pub fn init(
        &mut self,
        limits: &SearchLimits,
        us: Color,
        ply: u32,
        config: &TimeConfig,
    ) -> SearchLimits {
        let mut limits = *limits;

        // The start time matters even without a clock: movetime searches
        // measure elapsed from it.
        self.start_time = limits.start_time;
        if limits.time_for(us) == 0 {
            return limits;
        }

        let move_overhead = config.move_overhead;
        let npmsec = config.nodestime;

        // Nodes-as-time: convert the clock into a node quota once at game
        // start, then run everything below in node units. The configured
        // rate must stay well under real engine speed or the clock flags.
        if npmsec != 0 {
            self.use_nodes_time = true;

            if self.available_nodes == 0 {
                self.available_nodes = npmsec * limits.time_for(us); // time is in ms
            }

            *limits.time.get_mut(us) = self.available_nodes;
            *limits.inc.get_mut(us) *= npmsec;
            limits.npmsec = npmsec;
        }

        // Never plan further ahead than 60 moves
        let mtg: TimePoint = if limits.movestogo != 0 {
            TimePoint::from(limits.movestogo.min(60))
        } else {
            60
        };

        let time = limits.time_for(us);
        let inc = limits.inc_for(us);

        // Floored at 1 since it divides below. The overhead margin scales
        // with the horizon so latency can't bleed the clock over many moves.
        let time_left = (time + inc * (mtg - 1) - move_overhead * (2 + mtg)).max(1);

        let p = &config.params;
        let opt_scale: f64;
        let max_scale: f64;

        if limits.movestogo == 0 {
            // Sudden death (+ increment). A healthy increment can push
            // timeLeft past the time actually on the clock, so the optimum
            // share is also capped as a fraction of the clock itself.
            let opt_extra = (p.opt_extra_base + p.opt_extra_slope * inc as f64 / time as f64)
                .clamp(1.0, p.opt_extra_max);

            // Both constants follow the log of seconds on the clock: spend
            // relatively more when time is plentiful
            let log_time = (time as f64 / 1000.0).log10();
            let opt_constant =
                (p.opt_constant_base + p.opt_constant_slope * log_time).min(p.opt_constant_max);
            let max_constant =
                (p.max_constant_base + p.max_constant_slope * log_time).max(p.max_constant_min);

            opt_scale = (p.opt_scale_base
                + (ply as f64 + p.opt_scale_ply_offset).powf(p.opt_scale_ply_power) * opt_constant)
                .min(p.opt_scale_cap * time as f64 / time_left as f64)
                * opt_extra;
            max_scale = p
                .max_scale_cap
                .min(max_constant + ply as f64 / p.max_scale_ply_div);
        } else {
            // x moves in y seconds (+ increment): split timeLeft over the
            // period, spending a little more per move as the game goes on
            opt_scale = ((0.88 + ply as f64 / 116.4) / mtg as f64)
                .min(0.88 * time as f64 / time_left as f64);
            max_scale = 6.3_f64.min(1.5 + 0.11 * mtg as f64);
        }

        // The ceiling is a flat fraction of the clock minus the overhead,
        // independent of the scale formula: whatever the formula wants,
        // one move never risks the flag. The extra 10 is a latency buffer.
        self.optimum_time = (opt_scale * time_left as f64) as TimePoint;
        self.maximum_time = (((p.max_time_fraction * time as f64 - move_overhead as f64)
            .min(max_scale * self.optimum_time as f64)) as TimePoint
            - 10)
            .max(0);

        // Pondering recovers time during the opponent's move, so front-load
        // more of it into the target
        if config.ponder {
            self.optimum_time += self.optimum_time / 4;
        }

        limits
    }
}

impl Default for TimeManager {
    fn default() -> Self {
        Self::new()
    }
}


// Two time control shapes. Sudden death: the clock (+ increments) must last
// the whole game, so each move gets a slowly growing share of `timeLeft`
// scaled by how much absolute time remains -> deep clocks think longer per
// move. Moves-to-go: the clock refills after `movestogo` moves, so timeLeft
// is split across min(movestogo, 60) with a per-move share that grows as the
// game ages.
//
// `maximum` is the panic bound: min(fraction-of-clock - overhead, scale *
// optimum) - 10ms. The fraction term is what actually protects the flag when
// the formula overshoots (huge increments, movestogo=1).
//
// nodes-as-time trades strength for reproducibility: the clock converts once
// into npmsec * ms of nodes, elapsed() then reports searched nodes, and the
// ledger carries across moves via advance_nodes_time (inc - nodes searched).
