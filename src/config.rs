use crate::clock::TimePoint;

/// Snapshot of the engine options the time manager reads, taken by value
/// at each `go`. Parsing/validation happens upstream in the UCI loop.
#[derive(Clone, Copy, Debug)]
pub struct TimeConfig {
    /// Safety margin per move for I/O and GUI latency (ms). UCI "Move Overhead".
    pub move_overhead: TimePoint,
    /// Nodes per millisecond of clock time. Nonzero switches the whole game
    /// to nodes-as-time; must be well below real engine speed.
    pub nodestime: TimePoint,
    /// True when the engine keeps searching through the opponent's move;
    /// part of that time comes back, so the optimum target is inflated.
    pub ponder: bool,
    /// Allocation coefficients, normally left at their defaults.
    pub params: TimeParams,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            move_overhead: 10,
            nodestime: 0,
            ponder: false,
            params: TimeParams::default(),
        }
    }
}

/// Coefficients of the sudden-death allocation formula and the shared hard
/// ceiling. All are exposed for tuning runs; the defaults below are the
/// tuned values and should be treated as one consistent set.
#[derive(Clone, Copy, Debug)]
pub struct TimeParams {
    /// Increment bonus base
    pub opt_extra_base: f64,
    /// Increment bonus slope, multiplies inc/time
    pub opt_extra_slope: f64,
    /// Increment bonus upper clamp. The lower clamp is fixed at 1.0, so
    /// this must stay >= 1.0; at the default 1.0 the bonus is inert.
    pub opt_extra_max: f64,
    /// optConstant base
    pub opt_constant_base: f64,
    /// optConstant slope vs log10 of seconds on the clock
    pub opt_constant_slope: f64,
    /// optConstant upper clamp
    pub opt_constant_max: f64,
    /// maxConstant base
    pub max_constant_base: f64,
    /// maxConstant slope vs log10 of seconds on the clock
    pub max_constant_slope: f64,
    /// maxConstant lower clamp
    pub max_constant_min: f64,
    /// optScale base term
    pub opt_scale_base: f64,
    /// Ply offset inside the power term
    pub opt_scale_ply_offset: f64,
    /// Exponent applied to (ply + offset)
    pub opt_scale_ply_power: f64,
    /// optScale cap as a fraction of clock time over timeLeft
    pub opt_scale_cap: f64,
    /// maxScale upper clamp
    pub max_scale_cap: f64,
    /// Ply divisor added onto maxConstant
    pub max_scale_ply_div: f64,
    /// Hard ceiling fraction of remaining clock time for one move
    pub max_time_fraction: f64,
}

impl Default for TimeParams {
    fn default() -> Self {
        Self {
            opt_extra_base: 0.90,
            opt_extra_slope: 14.2,
            opt_extra_max: 1.00,
            opt_constant_base: 0.00344,
            opt_constant_slope: 0.0002,
            opt_constant_max: 0.0045,
            max_constant_base: 3.9,
            max_constant_slope: 3.1,
            max_constant_min: 2.5,
            opt_scale_base: 0.0155,
            opt_scale_ply_offset: 3.0,
            opt_scale_ply_power: 0.45,
            opt_scale_cap: 0.2,
            max_scale_cap: 6.5,
            max_scale_ply_div: 13.6,
            max_time_fraction: 0.81,
        }
    }
}
