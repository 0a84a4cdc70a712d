//! Target selection and firing

use rand::Rng;

use crate::core::error::Result;
use crate::host::WorldHost;
use crate::perception::Perception;

/// Pick a target within `attack_radius_sq` and fire if it is reachable.
///
/// Hostiles are strictly preferred over hazards; within a class the pick
/// is uniformly random. When the pick turns out to be outside actual
/// weapon reach there is no second pick this turn.
pub fn engage(host: &mut dyn WorldHost, rng: &mut impl Rng, attack_radius_sq: i32) -> Result<bool> {
    let seen = Perception::sense(&*host, attack_radius_sq);
    let Some(target) = seen.pick_target(rng) else {
        return Ok(false);
    };
    let at = target.location;

    if host.can_attack_target(at) {
        host.attack_target(at)?;
        tracing::trace!(x = at.x, y = at.y, "fired");
        return Ok(true);
    }
    Ok(false)
}
