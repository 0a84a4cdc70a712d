//! Scout: unarmed observer
//!
//! Reports high-value sightings every turn, then travels in long straight
//! runs, turning only when its heading was never set or when the path
//! ahead runs off the map. Cannot clear terrain, so it detours instead.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::constants::SCOUT_EDGE_PROBE_CELLS;
use crate::core::error::Result;
use crate::grid::Direction;
use crate::host::WorldHost;
use crate::policy::{advance_avoiding, report_sightings, TurnPolicy};

pub struct ScoutPolicy {
    rng: StdRng,
    heading: Option<Direction>,
}

impl ScoutPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            heading: None,
        }
    }

    /// Edge-aware hold: probe a few cells ahead and reroll when the
    /// probe leaves the map, no matter how recently the heading changed
    fn update_heading(&mut self, host: &dyn WorldHost) {
        if self.heading.is_none() {
            self.heading = Some(Direction::random(&mut self.rng));
        }
        if let Some(heading) = self.heading {
            let probe = host.location().shifted_by(heading, SCOUT_EDGE_PROBE_CELLS);
            if !host.is_in_bounds(probe) {
                self.heading = Some(Direction::random(&mut self.rng));
            }
        }
    }
}

impl TurnPolicy for ScoutPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        if !host.can_act() {
            return Ok(());
        }

        report_sightings(host, &mut self.rng)?;
        self.update_heading(&*host);

        if let Some(mut heading) = self.heading {
            advance_avoiding(host, &mut heading)?;
            self.heading = Some(heading);
        }
        Ok(())
    }
}
