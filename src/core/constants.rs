//! Policy tuning constants - all behavioral values in one place

/// Obstruction level at or above which a cell blocks traversal.
/// Roles that can clear terrain grind it down instead of moving.
pub const RUBBLE_CLEAR_THRESHOLD: f32 = 100.0;

/// Wandering units reroll their heading 1 turn in this many
pub const WANDER_REROLL_IN: u32 = 10;

/// Sentinel platforms roll a mode change 1 turn in this many (5%)
pub const TRANSFORM_ROLL_IN: u32 = 20;

/// Squared distance at which a raider counts as arrived at a rally point
pub const RALLY_ARRIVAL_RADIUS_SQ: i32 = 5;

/// How many cells ahead a scout probes before committing to its heading
pub const SCOUT_EDGE_PROBE_CELLS: i32 = 3;

/// Broadcast signal strength range, drawn fresh per message
pub const SIGNAL_STRENGTH_MIN: u32 = 100;
pub const SIGNAL_STRENGTH_MAX: u32 = 1100;
