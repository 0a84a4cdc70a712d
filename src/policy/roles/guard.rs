//! Guard: melee defender that chases whatever it can see
//!
//! Priority chain: visible threat, then remembered hazard-source
//! broadcast, then wander.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::comms::{decode_latest, MessageKind};
use crate::core::error::Result;
use crate::core::types::Role;
use crate::grid::{Direction, MapLocation};
use crate::host::WorldHost;
use crate::perception::Perception;
use crate::policy::{advance_clearing, engage, wander, TurnPolicy};

pub struct GuardPolicy {
    rng: StdRng,
    heading: Option<Direction>,
    /// Last decoded hazard-source location; sticky until overwritten
    den_target: Option<MapLocation>,
}

impl GuardPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            heading: None,
            den_target: None,
        }
    }

    fn update_heading(&mut self, host: &mut dyn WorldHost) {
        let seen = Perception::sense(&*host, Role::Guard.sensor_radius_sq());
        if let Some(threat) = seen.pick_target(&mut self.rng) {
            // Chase; skip the rest of the chain this turn
            if let Some(dir) = host.location().direction_to(&threat.location) {
                self.heading = Some(dir);
            }
            return;
        }

        if let Some(reported) =
            decode_latest(host, MessageKind::HazardSourceX, MessageKind::HazardSourceY)
        {
            self.den_target = Some(reported);
            tracing::debug!(x = reported.x, y = reported.y, "hazard source reported");
        }

        match self.den_target {
            Some(target) => {
                if let Some(dir) = host.location().direction_to(&target) {
                    self.heading = Some(dir);
                }
            }
            None => wander(&mut self.rng, &mut self.heading),
        }
    }
}

impl TurnPolicy for GuardPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        self.update_heading(host);

        if host.can_attack() && engage(host, &mut self.rng, Role::Guard.attack_radius_sq())? {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Affiliation;
    use crate::sim::{Arena, Team};

    #[test]
    fn test_visible_threat_overrides_remembered_target() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Guard, MapLocation::new(10, 10));
        // Remembered den far to the northeast, live hostile to the west
        arena.deliver_direct(me, MessageKind::HazardSourceX, 35, Affiliation::Friendly);
        arena.deliver_direct(me, MessageKind::HazardSourceY, 35, Affiliation::Friendly);
        let mut policy = GuardPolicy::new(me.0);
        {
            let mut host = arena.host_for(me);
            policy.update_heading(&mut host);
        }
        assert_eq!(policy.den_target, Some(MapLocation::new(35, 35)));
        assert_eq!(policy.heading, Some(Direction::NorthEast));

        arena.spawn(Team::Blue, Role::Soldier, MapLocation::new(6, 10));
        let mut host = arena.host_for(me);
        policy.update_heading(&mut host);

        assert_eq!(policy.heading, Some(Direction::West));
    }

    #[test]
    fn test_chases_hazards_when_no_hostiles() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Guard, MapLocation::new(10, 10));
        arena.spawn_hazard(Role::Ravager, MapLocation::new(10, 14));

        let mut policy = GuardPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.update_heading(&mut host);

        assert_eq!(policy.heading, Some(Direction::North));
    }

    #[test]
    fn test_follows_reported_den_without_visible_threats() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Guard, MapLocation::new(10, 10));
        arena.deliver_direct(me, MessageKind::HazardSourceX, 10, Affiliation::Friendly);
        arena.deliver_direct(me, MessageKind::HazardSourceY, 30, Affiliation::Friendly);

        let mut policy = GuardPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.take_turn(&mut host).unwrap();

        assert_eq!(policy.den_target, Some(MapLocation::new(10, 30)));
        assert_eq!(arena.unit(me).unwrap().location, MapLocation::new(10, 11));
    }

    #[test]
    fn test_adjacent_threat_gets_attacked_not_chased() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Guard, MapLocation::new(10, 10));
        let foe = arena.spawn(Team::Blue, Role::Soldier, MapLocation::new(11, 10));
        let before = arena.unit(foe).unwrap().health;

        let mut policy = GuardPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.take_turn(&mut host).unwrap();

        assert!(arena.unit(foe).unwrap().health < before);
        assert_eq!(arena.unit(me).unwrap().location, MapLocation::new(10, 10));
    }
}
