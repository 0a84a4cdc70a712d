//! Raider: walks the opposing spawn points as sequential rally waypoints

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::constants::RALLY_ARRIVAL_RADIUS_SQ;
use crate::core::error::Result;
use crate::core::types::{Affiliation, Role};
use crate::grid::{Direction, MapLocation};
use crate::host::WorldHost;
use crate::policy::{advance_clearing, engage, wander, TurnPolicy};

pub struct RaiderPolicy {
    rng: StdRng,
    heading: Option<Direction>,
    /// Current rally waypoint; sticky, re-aimed when the cursor advances
    rally_target: Option<MapLocation>,
    /// Cyclic index into the opposing initial spawn list
    rally_cursor: usize,
}

impl RaiderPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            heading: None,
            rally_target: None,
            rally_cursor: 0,
        }
    }

    fn update_heading(&mut self, host: &mut dyn WorldHost) {
        let spawns = host.initial_spawn_locations(Affiliation::Hostile);
        if spawns.is_empty() {
            // Nothing to rally on; sweep the map instead
            wander(&mut self.rng, &mut self.heading);
            return;
        }

        let mut target = *self
            .rally_target
            .get_or_insert(spawns[self.rally_cursor % spawns.len()]);

        if host.location().distance_squared(&target) < RALLY_ARRIVAL_RADIUS_SQ {
            self.rally_cursor = (self.rally_cursor + 1) % spawns.len();
            target = spawns[self.rally_cursor];
            self.rally_target = Some(target);
            tracing::debug!(
                cursor = self.rally_cursor,
                x = target.x,
                y = target.y,
                "rally point reached, advancing"
            );
        }

        if let Some(dir) = host.location().direction_to(&target) {
            self.heading = Some(dir);
        }
    }
}

impl TurnPolicy for RaiderPolicy {
    fn take_turn(&mut self, host: &mut dyn WorldHost) -> Result<()> {
        self.update_heading(host);

        if host.can_attack() && engage(host, &mut self.rng, Role::Raider.attack_radius_sq())? {
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
    use crate::sim::{Arena, Team};

    fn arena_with_blue_spawns(spawns: &[MapLocation]) -> Arena {
        let mut arena = Arena::empty(40, 40, 1);
        for &loc in spawns {
            arena.spawn(Team::Blue, Role::Spawner, loc);
        }
        arena
    }

    #[test]
    fn test_first_target_is_first_spawn_point() {
        let mut arena =
            arena_with_blue_spawns(&[MapLocation::new(30, 30), MapLocation::new(5, 30)]);
        let me = arena.spawn(Team::Red, Role::Raider, MapLocation::new(10, 10));

        let mut policy = RaiderPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.update_heading(&mut host);

        assert_eq!(policy.rally_target, Some(MapLocation::new(30, 30)));
        assert_eq!(policy.heading, Some(Direction::NorthEast));
    }

    #[test]
    fn test_arrival_advances_cursor_and_wraps() {
        let spawns = [MapLocation::new(30, 30), MapLocation::new(5, 30)];
        let mut arena = arena_with_blue_spawns(&spawns);
        // Start within the arrival radius of the first waypoint
        let me = arena.spawn(Team::Red, Role::Raider, MapLocation::new(29, 30));

        let mut policy = RaiderPolicy::new(me.0);
        {
            let mut host = arena.host_for(me);
            policy.update_heading(&mut host);
        }
        assert_eq!(policy.rally_cursor, 1);
        assert_eq!(policy.rally_target, Some(spawns[1]));

        // Teleport next to the second waypoint; the cursor wraps to 0
        arena.relocate(me, MapLocation::new(6, 30));
        let mut host = arena.host_for(me);
        policy.update_heading(&mut host);
        assert_eq!(policy.rally_cursor, 0);
        assert_eq!(policy.rally_target, Some(spawns[0]));
    }

    #[test]
    fn test_no_spawn_intel_falls_back_to_wander() {
        let mut arena = Arena::empty(40, 40, 1);
        let me = arena.spawn(Team::Red, Role::Raider, MapLocation::new(10, 10));

        let mut policy = RaiderPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.update_heading(&mut host);

        assert!(policy.rally_target.is_none());
        assert!(policy.heading.is_some());
    }

    #[test]
    fn test_turn_moves_toward_rally_point() {
        let mut arena = arena_with_blue_spawns(&[MapLocation::new(30, 10)]);
        let me = arena.spawn(Team::Red, Role::Raider, MapLocation::new(10, 10));

        let mut policy = RaiderPolicy::new(me.0);
        let mut host = arena.host_for(me);
        policy.take_turn(&mut host).unwrap();

        assert_eq!(arena.unit(me).unwrap().location, MapLocation::new(11, 10));
    }
}
