//! Per-role decision policies
//!
//! Each role owns exactly its own slice of persistent state (heading,
//! remembered target, cursors) inside its policy value, and exposes one
//! turn entry point through `TurnPolicy`. The priority chain inside every
//! heading update is strict: visible threat, then remembered broadcast
//! target, then randomized-persistence wander.

pub mod combat;
pub mod construction;
pub mod movement;
pub mod roles;
pub mod sighting;

pub use combat::engage;
pub use construction::{produce_next, BUILD_ORDER};
pub use movement::{advance_avoiding, advance_clearing};
pub use sighting::report_sightings;

use rand::Rng;

use crate::core::constants::WANDER_REROLL_IN;
use crate::core::error::Result;
use crate::grid::Direction;
use crate::host::WorldHost;

/// One role's per-turn decision function
pub trait TurnPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()>;
}

/// Randomized-persistence wander: reroll the heading 1 turn in 10, or
/// immediately when it was never set. Holding course most turns produces
/// long straight runs punctuated by occasional turns.
pub fn wander(rng: &mut impl Rng, heading: &mut Option<Direction>) {
    if heading.is_none() || rng.gen_range(0..WANDER_REROLL_IN) == 0 {
        *heading = Some(Direction::random(rng));
    }
}
