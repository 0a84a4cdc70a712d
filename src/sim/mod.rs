//! In-memory arena: a minimal world standing behind `WorldHost`
//!
//! Built for the headless runner and for tests. Combat resolution and
//! hazard behavior are deliberately crude; the interesting decisions all
//! happen on the agent side of the trait.

pub mod arena;
pub mod host;
pub mod stats;

pub use arena::{Arena, ArenaSummary, Faction, Team, UnitState};
pub use host::ArenaHost;
pub use stats::{stats_for, RoleStats};
