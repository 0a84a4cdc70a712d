//! Unit production
//!
//! Spawners walk a fixed cyclic build order. Placement searches the 8
//! adjacent cells from a random start, rotating the same way the movement
//! helper does.

use rand::Rng;

use crate::core::error::Result;
use crate::core::types::Role;
use crate::grid::Direction;
use crate::host::WorldHost;

/// Production order; the build cursor indexes into this cyclically
pub const BUILD_ORDER: [Role; 4] = [Role::Scout, Role::Soldier, Role::Raider, Role::Sentinel];

/// Try to produce the unit the cursor points at.
///
/// The cursor advances only on successful construction; insufficient
/// resources or 8 blocked cells leave it untouched.
pub fn produce_next(
    host: &mut dyn WorldHost,
    rng: &mut impl Rng,
    cursor: &mut usize,
) -> Result<bool> {
    let role = BUILD_ORDER[*cursor % BUILD_ORDER.len()];

    if !host.has_resources_for(role) {
        return Ok(false);
    }

    let mut dir = Direction::random(rng);
    for _ in 0..8 {
        if host.can_place_at(dir, role) {
            host.place_unit(dir, role)?;
            *cursor += 1;
            tracing::debug!(?role, "produced unit");
            return Ok(true);
        }
        dir = dir.rotate_left();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{MapLocation, DIRECTIONS};
    use crate::sim::{Arena, Team};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_successful_build_advances_cursor() {
        let mut arena = Arena::empty(20, 20, 1);
        let me = arena.spawn(Team::Red, Role::Spawner, MapLocation::new(10, 10));
        arena.grant_parts(Team::Red, 1000);

        let mut rng = StdRng::seed_from_u64(2);
        let mut cursor = 0;
        let mut host = arena.host_for(me);
        assert!(produce_next(&mut host, &mut rng, &mut cursor).unwrap());
        assert_eq!(cursor, 1);
        assert_eq!(arena.count_role(Team::Red, Role::Scout), 1);
    }

    #[test]
    fn test_insufficient_resources_leaves_cursor_unchanged() {
        let mut arena = Arena::empty(20, 20, 1);
        let me = arena.spawn(Team::Red, Role::Spawner, MapLocation::new(10, 10));

        let mut rng = StdRng::seed_from_u64(2);
        let mut cursor = 0;
        let mut host = arena.host_for(me);
        assert!(!produce_next(&mut host, &mut rng, &mut cursor).unwrap());
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_cursor_wraps_to_first_type() {
        let mut arena = Arena::empty(30, 30, 1);
        let me = arena.spawn(Team::Red, Role::Spawner, MapLocation::new(15, 15));
        arena.grant_parts(Team::Red, 100_000);

        let mut rng = StdRng::seed_from_u64(5);
        let mut cursor = 0;
        for _ in 0..BUILD_ORDER.len() {
            arena.reset_cooldowns(me);
            let mut host = arena.host_for(me);
            assert!(produce_next(&mut host, &mut rng, &mut cursor).unwrap());
        }
        assert_eq!(
            BUILD_ORDER[cursor % BUILD_ORDER.len()],
            BUILD_ORDER[0],
            "one full cycle returns to the first type"
        );
        assert_eq!(arena.count_role(Team::Red, Role::Scout), 1);
        assert_eq!(arena.count_role(Team::Red, Role::Sentinel), 1);
    }

    #[test]
    fn test_all_neighbors_blocked_returns_false() {
        let mut arena = Arena::empty(20, 20, 1);
        let center = MapLocation::new(10, 10);
        let me = arena.spawn(Team::Red, Role::Spawner, center);
        arena.grant_parts(Team::Red, 1000);
        for dir in DIRECTIONS {
            arena.set_rubble(center.shifted(dir), 500.0);
        }

        let mut rng = StdRng::seed_from_u64(2);
        let mut cursor = 0;
        let mut host = arena.host_for(me);
        assert!(!produce_next(&mut host, &mut rng, &mut cursor).unwrap());
        assert_eq!(cursor, 0);
    }
}
