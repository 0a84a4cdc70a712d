//! Soldier: ranged attacker homing on broadcast opposing-spawner sightings

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::comms::{decode_latest, MessageKind};
use crate::core::error::Result;
use crate::core::types::Role;
use crate::grid::{Direction, MapLocation};
use crate::host::WorldHost;
use crate::policy::{advance_clearing, engage, wander, TurnPolicy};

pub struct SoldierPolicy {
    rng: StdRng,
    heading: Option<Direction>,
    /// Last decoded opposing-spawner location; sticky until overwritten
    spawn_target: Option<MapLocation>,
}

impl SoldierPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            heading: None,
            spawn_target: None,
        }
    }

    /// Remembered broadcast target beats wander; threats are handled by
    /// the weapon, not the heading
    fn update_heading(&mut self, host: &mut dyn WorldHost) {
        if let Some(reported) =
            decode_latest(host, MessageKind::OpposingSpawnX, MessageKind::OpposingSpawnY)
        {
            self.spawn_target = Some(reported);
            tracing::debug!(x = reported.x, y = reported.y, "spawner sighting received");
        }

        match self.spawn_target {
            Some(target) => {
                if let Some(dir) = host.location().direction_to(&target) {
                    self.heading = Some(dir);
                }
            }
            None => wander(&mut self.rng, &mut self.heading),
        }
    }
}

impl TurnPolicy for SoldierPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        self.update_heading(host);

        if host.can_attack() && engage(host, &mut self.rng, Role::Soldier.attack_radius_sq())? {
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
    fn test_decoded_sighting_sets_course() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(10, 10));
        arena.deliver_direct(me, MessageKind::OpposingSpawnX, 30, Affiliation::Friendly);
        arena.deliver_direct(me, MessageKind::OpposingSpawnY, 10, Affiliation::Friendly);

        let mut policy = SoldierPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.take_turn(&mut host).unwrap();

        assert_eq!(policy.spawn_target, Some(MapLocation::new(30, 10)));
        assert_eq!(arena.unit(me).unwrap().location, MapLocation::new(11, 10));
    }

    #[test]
    fn test_memory_is_sticky_across_silent_turns() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(10, 10));
        arena.deliver_direct(me, MessageKind::OpposingSpawnX, 30, Affiliation::Friendly);
        arena.deliver_direct(me, MessageKind::OpposingSpawnY, 30, Affiliation::Friendly);

        let mut policy = SoldierPolicy::new(me.0);
        for _ in 0..20 {
            arena.reset_cooldowns(me);
            let mut host = arena.host_for(me);
            policy.take_turn(&mut host).unwrap();
        }

        // No further broadcasts arrived, the target must survive
        assert_eq!(policy.spawn_target, Some(MapLocation::new(30, 30)));
    }

    #[test]
    fn test_hostile_broadcast_is_ignored() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(10, 10));
        arena.deliver_direct(me, MessageKind::OpposingSpawnX, 5, Affiliation::Hostile);
        arena.deliver_direct(me, MessageKind::OpposingSpawnY, 5, Affiliation::Hostile);

        let mut policy = SoldierPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.take_turn(&mut host).unwrap();

        assert_eq!(policy.spawn_target, None);
    }

    #[test]
    fn test_without_intel_soldier_wanders() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(20, 20));

        let mut policy = SoldierPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.take_turn(&mut host).unwrap();

        assert!(policy.heading.is_some());
        assert_ne!(arena.unit(me).unwrap().location, MapLocation::new(20, 20));
    }
}
