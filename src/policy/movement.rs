//! Directional movement with local obstacle step-around
//!
//! Both variants try up to 8 candidate headings, rotating one step
//! counter-clockwise per failed candidate, never reversing sense. The
//! heading is left at the last candidate tried; callers rely on the
//! rotation persisting across turns.

use crate::core::constants::RUBBLE_CLEAR_THRESHOLD;
use crate::core::error::Result;
use crate::grid::Direction;
use crate::host::WorldHost;

/// Movement for roles that can grind obstructions down.
///
/// An obstructed destination is cleared instead of entered: the turn is
/// spent and the call reports success without relocating.
pub fn advance_clearing(host: &mut dyn WorldHost, heading: &mut Direction) -> Result<bool> {
    for _ in 0..8 {
        let ahead = host.location().shifted(*heading);
        if host.obstruction_level(ahead) >= RUBBLE_CLEAR_THRESHOLD {
            host.clear_obstruction(*heading)?;
            return Ok(true);
        }
        if host.can_move_to(*heading) {
            host.move_to(*heading)?;
            return Ok(true);
        }
        *heading = heading.rotate_left();
    }
    Ok(false)
}

/// Movement for roles that cannot clear terrain.
///
/// Obstructed or refused destinations are skipped; only an actual
/// relocation reports success.
pub fn advance_avoiding(host: &mut dyn WorldHost, heading: &mut Direction) -> Result<bool> {
    for _ in 0..8 {
        let ahead = host.location().shifted(*heading);
        if host.obstruction_level(ahead) < RUBBLE_CLEAR_THRESHOLD && host.can_move_to(*heading) {
            host.move_to(*heading)?;
            return Ok(true);
        }
        *heading = heading.rotate_left();
    }
    Ok(false)
}
