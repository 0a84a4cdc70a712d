//! Sentinel platform: one policy driving both modes
//!
//! The static mode shoots; the mobile mode travels. Both sides of the
//! transform live in one policy value so the heading and random stream
//! survive mode flips.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::constants::TRANSFORM_ROLL_IN;
use crate::core::error::Result;
use crate::core::types::Role;
use crate::grid::Direction;
use crate::host::WorldHost;
use crate::perception::Perception;
use crate::policy::{advance_clearing, engage, wander, TurnPolicy};

pub struct SentinelPolicy {
    rng: StdRng,
    heading: Option<Direction>,
}

impl SentinelPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            heading: None,
        }
    }

    /// Static platforms pack up only in quiet sectors, and rarely
    fn should_go_mobile(&mut self, host: &dyn WorldHost) -> bool {
        let seen = Perception::sense(host, Role::Sentinel.sensor_radius_sq());
        if !seen.is_clear() {
            return false;
        }
        self.rng.gen_range(0..TRANSFORM_ROLL_IN) == 0
    }

    /// Packed platforms redeploy the moment anything threatens, or on
    /// the same rare roll with nothing in sight
    fn should_go_static(&mut self, host: &dyn WorldHost) -> bool {
        let seen = Perception::sense(host, Role::MobileSentinel.sensor_radius_sq());
        if !seen.is_clear() {
            return true;
        }
        self.rng.gen_range(0..TRANSFORM_ROLL_IN) == 0
    }

    fn static_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        if host.can_attack() && engage(host, &mut self.rng, Role::Sentinel.attack_radius_sq())? {
            return Ok(());
        }
        if host.can_act() && self.should_go_mobile(&*host) {
            host.transform_to_mobile()?;
            tracing::debug!("sentinel packed for transit");
        }
        Ok(())
    }

    fn mobile_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        wander(&mut self.rng, &mut self.heading);

        if self.should_go_static(&*host) {
            host.transform_to_static()?;
            tracing::debug!("sentinel deployed");
            return Ok(());
        }
        if host.can_act() {
            if let Some(mut heading) = self.heading {
                advance_clearing(host, &mut heading)?;
                self.heading = Some(heading);
            }
        }
        Ok(())
    }
}

impl TurnPolicy for SentinelPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        match host.role() {
            Role::Sentinel => self.static_turn(host),
            Role::MobileSentinel => self.mobile_turn(host),
            other => {
                debug_assert!(false, "sentinel policy driving {other:?}");
                Ok(())
            }
        }
    }
}
