//! Sighting reports
//!
//! Scouts rebroadcast every high-value sighting each turn it stays
//! visible. Redundancy over precision: the channel is broadcast and
//! teammates drop whatever they fail to decode the same turn anyway.

use rand::Rng;

use crate::comms::{broadcast_location, MessageKind};
use crate::core::error::Result;
use crate::core::types::Role;
use crate::host::WorldHost;
use crate::perception::Perception;

/// Report high-value hostile and hazard sightings at scout sensor range
pub fn report_sightings(host: &mut dyn WorldHost, rng: &mut impl Rng) -> Result<()> {
    let seen = Perception::sense(&*host, Role::Scout.sensor_radius_sq());

    for contact in &seen.hostiles {
        if contact.role == Role::Spawner {
            broadcast_location(
                host,
                rng,
                MessageKind::OpposingSpawnX,
                MessageKind::OpposingSpawnY,
                contact.location,
            )?;
        }
    }

    for contact in &seen.hazards {
        if contact.role == Role::Nest {
            broadcast_location(
                host,
                rng,
                MessageKind::HazardSourceX,
                MessageKind::HazardSourceY,
                contact.location,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MapLocation;
    use crate::sim::{Arena, Team};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reports_hostile_spawner_and_nest() {
        let mut arena = Arena::empty(20, 20, 1);
        let me = arena.spawn(Team::Red, Role::Scout, MapLocation::new(10, 10));
        arena.spawn(Team::Blue, Role::Spawner, MapLocation::new(12, 10));
        arena.spawn_hazard(Role::Nest, MapLocation::new(10, 13));

        let mut rng = StdRng::seed_from_u64(8);
        let mut host = arena.host_for(me);
        report_sightings(&mut host, &mut rng).unwrap();

        // Two sightings, one x and one y message each
        assert_eq!(arena.pending_broadcasts(), 4);
    }

    #[test]
    fn test_rank_and_file_units_not_reported() {
        let mut arena = Arena::empty(20, 20, 1);
        let me = arena.spawn(Team::Red, Role::Scout, MapLocation::new(10, 10));
        arena.spawn(Team::Blue, Role::Soldier, MapLocation::new(12, 10));
        arena.spawn_hazard(Role::Ravager, MapLocation::new(10, 13));

        let mut rng = StdRng::seed_from_u64(8);
        let mut host = arena.host_for(me);
        report_sightings(&mut host, &mut rng).unwrap();

        assert_eq!(arena.pending_broadcasts(), 0);
    }

    #[test]
    fn test_rebroadcasts_while_visible() {
        let mut arena = Arena::empty(20, 20, 1);
        let me = arena.spawn(Team::Red, Role::Scout, MapLocation::new(10, 10));
        arena.spawn(Team::Blue, Role::Spawner, MapLocation::new(12, 10));

        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..3 {
            let mut host = arena.host_for(me);
            report_sightings(&mut host, &mut rng).unwrap();
        }
        assert_eq!(arena.pending_broadcasts(), 6);
    }
}
