//! `WorldHost` implemented over the arena
//!
//! One value per unit per turn. Preconditions are reported through the
//! `can_*` queries; the fallible actions re-check them and refuse rather
//! than corrupt the world.

use crate::comms::{Message, MessageKind};
use crate::core::constants::RUBBLE_CLEAR_THRESHOLD;
use crate::core::error::{AgentError, Result};
use crate::core::types::{Affiliation, Contact, Role, UnitId};
use crate::grid::{Direction, MapLocation};
use crate::host::WorldHost;
use crate::sim::arena::{Arena, Faction, Posted, Team, UnitState};
use crate::sim::stats::{
    stats_for, CLEAR_DELAY, CLEAR_FLAT_CUT, CLEAR_KEEP_FRACTION, NEWBORN_DELAY, TRANSFORM_DELAY,
};

pub struct ArenaHost<'a> {
    arena: &'a mut Arena,
    id: UnitId,
}

impl<'a> ArenaHost<'a> {
    pub fn new(arena: &'a mut Arena, id: UnitId) -> Self {
        Self { arena, id }
    }

    fn me(&self) -> &UnitState {
        self.arena
            .unit(self.id)
            .expect("host view outlives its unit")
    }

    fn my_team(&self) -> Option<Team> {
        match self.me().faction {
            Faction::Team(team) => Some(team),
            Faction::Hazard => None,
        }
    }

    fn affiliation_of(&self, other: Faction) -> Affiliation {
        match (self.me().faction, other) {
            (_, Faction::Hazard) => Affiliation::Hazard,
            (Faction::Team(mine), Faction::Team(theirs)) if mine == theirs => {
                Affiliation::Friendly
            }
            _ => Affiliation::Hostile,
        }
    }

    fn movable(&self) -> bool {
        // Deployed platforms and nests are rooted to their cell
        !matches!(self.me().role, Role::Sentinel | Role::Nest)
    }
}

impl WorldHost for ArenaHost<'_> {
    fn role(&self) -> Role {
        self.me().role
    }

    fn unique_id(&self) -> u64 {
        self.id.0
    }

    fn location(&self) -> MapLocation {
        self.me().location
    }

    fn can_act(&self) -> bool {
        self.me().core_delay == 0
    }

    fn can_attack(&self) -> bool {
        self.me().weapon_delay == 0 && self.me().role.can_fight()
    }

    fn scan_nearby(&self, radius_sq: i32, affiliation: Affiliation) -> Vec<Contact> {
        let center = self.me().location;
        self.arena
            .roster()
            .filter(|u| u.id != self.id)
            .filter(|u| center.distance_squared(&u.location) <= radius_sq)
            .filter(|u| self.affiliation_of(u.faction) == affiliation)
            .map(|u| Contact {
                location: u.location,
                role: u.role,
                affiliation,
            })
            .collect()
    }

    fn scan_resource_sites(&self, radius_sq: i32) -> Vec<MapLocation> {
        self.arena.piles_within(self.me().location, radius_sq)
    }

    fn obstruction_level(&self, at: MapLocation) -> f32 {
        self.arena.rubble_at(at)
    }

    fn is_in_bounds(&self, at: MapLocation) -> bool {
        self.arena.in_bounds(at)
    }

    fn can_move_to(&self, dir: Direction) -> bool {
        if !self.movable() {
            return false;
        }
        let dest = self.me().location.shifted(dir);
        self.arena.in_bounds(dest)
            && self.arena.rubble_at(dest) < RUBBLE_CLEAR_THRESHOLD
            && !self.arena.occupied(dest)
    }

    fn move_to(&mut self, dir: Direction) -> Result<()> {
        if !self.can_move_to(dir) {
            return Err(AgentError::ActionRefused("move"));
        }
        let dest = self.me().location.shifted(dir);
        let role = self.me().role;
        let delay = stats_for(role).move_delay;
        {
            let unit = self
                .arena
                .unit_mut(self.id)
                .ok_or(AgentError::UnknownUnit(self.id))?;
            unit.location = dest;
            unit.core_delay = delay;
        }
        if role == Role::Spawner {
            if let Some(team) = self.my_team() {
                self.arena.collect_pile_at(dest, team);
            }
        }
        Ok(())
    }

    fn clear_obstruction(&mut self, dir: Direction) -> Result<()> {
        let target = self.me().location.shifted(dir);
        if !self.arena.in_bounds(target) {
            return Err(AgentError::OutOfBounds);
        }
        let level = self.arena.rubble_at(target);
        let reduced = (level * CLEAR_KEEP_FRACTION - CLEAR_FLAT_CUT).max(0.0);
        self.arena.set_rubble(target, reduced);
        if let Some(unit) = self.arena.unit_mut(self.id) {
            unit.core_delay = CLEAR_DELAY;
        }
        Ok(())
    }

    fn can_attack_target(&self, at: MapLocation) -> bool {
        let me = self.me();
        me.role.can_fight()
            && self.arena.in_bounds(at)
            && me.location.distance_squared(&at) <= me.role.attack_radius_sq()
    }

    fn attack_target(&mut self, at: MapLocation) -> Result<()> {
        if !self.can_attack_target(at) {
            return Err(AgentError::ActionRefused("attack"));
        }
        let role = self.me().role;
        let damage = stats_for(role).attack_damage;
        let victim = self
            .arena
            .roster()
            .find(|u| u.location == at && u.id != self.id)
            .map(|u| u.id);
        if let Some(victim_id) = victim {
            if let Some(unit) = self.arena.unit_mut(victim_id) {
                unit.health -= damage;
            }
        }
        if let Some(me) = self.arena.unit_mut(self.id) {
            me.weapon_delay = stats_for(role).attack_delay;
        }
        Ok(())
    }

    fn has_resources_for(&self, role: Role) -> bool {
        match (self.my_team(), role.part_cost()) {
            (Some(team), Some(cost)) => self.arena.parts_of(team) >= cost,
            _ => false,
        }
    }

    fn can_place_at(&self, dir: Direction, role: Role) -> bool {
        if role.part_cost().is_none() {
            return false;
        }
        let dest = self.me().location.shifted(dir);
        self.arena.in_bounds(dest)
            && self.arena.rubble_at(dest) < RUBBLE_CLEAR_THRESHOLD
            && !self.arena.occupied(dest)
    }

    fn place_unit(&mut self, dir: Direction, role: Role) -> Result<()> {
        if !self.can_place_at(dir, role) {
            return Err(AgentError::ActionRefused("place"));
        }
        let team = self
            .my_team()
            .ok_or(AgentError::ActionRefused("hazards cannot build"))?;
        let cost = role
            .part_cost()
            .ok_or(AgentError::ActionRefused("role is not producible"))?;
        if !self.arena.spend_parts(team, cost) {
            return Err(AgentError::ActionRefused("insufficient parts"));
        }
        let dest = self.me().location.shifted(dir);
        self.arena
            .spawn_internal(Faction::Team(team), role, dest, NEWBORN_DELAY);
        let builder_role = self.me().role;
        if let Some(me) = self.arena.unit_mut(self.id) {
            me.core_delay = stats_for(builder_role).build_delay;
        }
        Ok(())
    }

    fn transform_to_mobile(&mut self) -> Result<()> {
        if self.me().role != Role::Sentinel {
            return Err(AgentError::ActionRefused("not a static platform"));
        }
        if let Some(me) = self.arena.unit_mut(self.id) {
            me.role = Role::MobileSentinel;
            me.core_delay = TRANSFORM_DELAY;
        }
        Ok(())
    }

    fn transform_to_static(&mut self) -> Result<()> {
        if self.me().role != Role::MobileSentinel {
            return Err(AgentError::ActionRefused("not a packed platform"));
        }
        if let Some(me) = self.arena.unit_mut(self.id) {
            me.role = Role::Sentinel;
            me.core_delay = TRANSFORM_DELAY;
        }
        Ok(())
    }

    fn drain_inbound(&mut self) -> Vec<Message> {
        let mut inbound: Vec<Message> = self
            .arena
            .direct_inbox
            .remove(&self.id)
            .unwrap_or_default();

        let center = self.me().location;
        let posted: Vec<Message> = self
            .arena
            .bus_delivered
            .iter()
            .filter(|p| p.origin_id != self.id)
            .filter(|p| center.distance_squared(&p.origin) <= p.strength as i32)
            .map(|p| Message {
                origin: self.affiliation_of(p.origin_faction),
                body: Some(p.body),
            })
            .collect();
        inbound.extend(posted);
        inbound
    }

    fn broadcast(&mut self, kind: MessageKind, value: i32, strength: u32) -> Result<()> {
        let me = self.me();
        let posted = Posted {
            origin_id: me.id,
            origin_faction: me.faction,
            origin: me.location,
            strength,
            body: crate::comms::MessageBody { kind, value },
        };
        self.arena.bus_current.push(posted);
        Ok(())
    }

    fn initial_spawn_locations(&self, side: Affiliation) -> Vec<MapLocation> {
        match side {
            Affiliation::Hazard => self.arena.nest_points(),
            Affiliation::Friendly => match self.my_team() {
                Some(team) => self.arena.spawn_points_of(team),
                None => Vec::new(),
            },
            Affiliation::Hostile => match self.my_team() {
                Some(team) => self.arena.spawn_points_of(team.opponent()),
                None => Vec::new(),
            },
        }
    }

    fn yield_turn(&mut self) {
        // The arena's scheduler ends the turn by dropping this view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Team;

    #[test]
    fn test_broadcast_lands_next_turn_within_range() {
        let mut arena = Arena::empty(40, 40, 1);
        let sender = arena.spawn(Team::Red, Role::Scout, MapLocation::new(10, 10));
        let near = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(12, 10));
        let far = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(39, 39));

        {
            let mut host = arena.host_for(sender);
            host.broadcast(MessageKind::HazardSourceX, 7, 100).unwrap();
        }
        // Not delivered the same turn it was posted
        {
            let mut host = arena.host_for(near);
            assert!(host.drain_inbound().is_empty());
        }

        arena.bus_delivered = std::mem::take(&mut arena.bus_current);

        {
            let mut host = arena.host_for(near);
            let messages = host.drain_inbound();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].origin, Affiliation::Friendly);
        }
        {
            let mut host = arena.host_for(far);
            assert!(host.drain_inbound().is_empty(), "out of signal range");
        }
    }

    #[test]
    fn test_foreign_broadcast_arrives_tagged_hostile() {
        let mut arena = Arena::empty(40, 40, 1);
        let sender = arena.spawn(Team::Blue, Role::Scout, MapLocation::new(10, 10));
        let receiver = arena.spawn(Team::Red, Role::Soldier, MapLocation::new(12, 10));

        {
            let mut host = arena.host_for(sender);
            host.broadcast(MessageKind::OpposingSpawnX, 3, 500).unwrap();
        }
        arena.bus_delivered = std::mem::take(&mut arena.bus_current);

        let mut host = arena.host_for(receiver);
        let messages = host.drain_inbound();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].origin, Affiliation::Hostile);
    }

    #[test]
    fn test_sender_does_not_hear_itself() {
        let mut arena = Arena::empty(40, 40, 1);
        let sender = arena.spawn(Team::Red, Role::Scout, MapLocation::new(10, 10));
        {
            let mut host = arena.host_for(sender);
            host.broadcast(MessageKind::OpposingSpawnX, 3, 500).unwrap();
        }
        arena.bus_delivered = std::mem::take(&mut arena.bus_current);

        let mut host = arena.host_for(sender);
        assert!(host.drain_inbound().is_empty());
    }

    #[test]
    fn test_sentinel_platform_cannot_move_but_packed_can() {
        let mut arena = Arena::empty(20, 20, 1);
        let fixed = arena.spawn(Team::Red, Role::Sentinel, MapLocation::new(5, 5));
        let packed = arena.spawn(Team::Red, Role::MobileSentinel, MapLocation::new(8, 8));

        let host = arena.host_for(fixed);
        assert!(!host.can_move_to(Direction::North));
        drop(host);

        let host = arena.host_for(packed);
        assert!(host.can_move_to(Direction::North));
    }

    #[test]
    fn test_transform_round_trip() {
        let mut arena = Arena::empty(20, 20, 1);
        let id = arena.spawn(Team::Red, Role::Sentinel, MapLocation::new(5, 5));

        {
            let mut host = arena.host_for(id);
            host.transform_to_mobile().unwrap();
        }
        assert_eq!(arena.unit(id).unwrap().role, Role::MobileSentinel);

        {
            let mut host = arena.host_for(id);
            assert!(host.transform_to_mobile().is_err());
            host.transform_to_static().unwrap();
        }
        assert_eq!(arena.unit(id).unwrap().role, Role::Sentinel);
    }

    #[test]
    fn test_spawner_sweeps_pile_on_arrival() {
        let mut arena = Arena::empty(20, 20, 1);
        let id = arena.spawn(Team::Red, Role::Spawner, MapLocation::new(5, 5));
        arena.add_pile(MapLocation::new(6, 5), 40);
        let before = arena.parts_of(Team::Red);

        let mut host = arena.host_for(id);
        host.move_to(Direction::East).unwrap();

        assert_eq!(arena.parts_of(Team::Red), before + 40);
    }

    #[test]
    fn test_attack_out_of_range_is_refused() {
        let mut arena = Arena::empty(20, 20, 1);
        let id = arena.spawn(Team::Red, Role::Guard, MapLocation::new(5, 5));
        let mut host = arena.host_for(id);
        assert!(!host.can_attack_target(MapLocation::new(15, 15)));
        assert!(host.attack_target(MapLocation::new(15, 15)).is_err());
    }
}
