//! Spawner: production first, movement as an afterthought

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::error::Result;
use crate::core::types::Role;
use crate::grid::Direction;
use crate::host::WorldHost;
use crate::perception::resource_sites;
use crate::policy::{advance_clearing, produce_next, wander, TurnPolicy};

pub struct SpawnerPolicy {
    rng: StdRng,
    heading: Option<Direction>,
    /// Cyclic index into the production order; advances on each build
    build_cursor: usize,
}

impl SpawnerPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            heading: None,
            build_cursor: 0,
        }
    }
}

impl TurnPolicy for SpawnerPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        if !host.can_act() {
            return Ok(());
        }

        if produce_next(host, &mut self.rng, &mut self.build_cursor)? {
            return Ok(());
        }

        // Nothing built this turn; survey the neighborhood and drift
        let piles = resource_sites(&*host, Role::Spawner.sensor_radius_sq());
        if !piles.is_empty() {
            tracing::trace!(piles = piles.len(), "resource piles in sensor range");
        }

        wander(&mut self.rng, &mut self.heading);
        if let Some(mut heading) = self.heading {
            advance_clearing(host, &mut heading)?;
            self.heading = Some(heading);
        }
        Ok(())
    }
}
