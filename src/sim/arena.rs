//! The arena world: grid, units, resources, broadcast bus, scheduling

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::agent::AgentRunner;
use crate::comms::{Message, MessageBody, MessageKind};
use crate::core::config::ArenaConfig;
use crate::core::constants::RUBBLE_CLEAR_THRESHOLD;
use crate::core::types::{Affiliation, Role, Turn, UnitId};
use crate::grid::{MapLocation, DIRECTIONS};
use crate::sim::host::ArenaHost;
use crate::sim::stats::{stats_for, RoleStats, NEST_SPAWN_INTERVAL, PART_INCOME_PER_TURN};

/// One of the two player teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

/// Who a unit fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Team(Team),
    Hazard,
}

/// One unit's world-side record
#[derive(Debug, Clone)]
pub struct UnitState {
    pub id: UnitId,
    pub faction: Faction,
    pub role: Role,
    pub location: MapLocation,
    pub health: f32,
    pub core_delay: u32,
    pub weapon_delay: u32,
}

/// A message in flight on the shared bus
#[derive(Debug, Clone)]
pub(crate) struct Posted {
    pub origin_id: UnitId,
    pub origin_faction: Faction,
    pub origin: MapLocation,
    pub strength: u32,
    pub body: MessageBody,
}

/// Per-team bookkeeping
#[derive(Debug, Clone, Default)]
struct TeamState {
    parts: u32,
    spawn_points: Vec<MapLocation>,
}

/// End-of-run report emitted by the headless runner
#[derive(Debug, Clone, Serialize)]
pub struct ArenaSummary {
    pub turn: Turn,
    pub red_units: usize,
    pub blue_units: usize,
    pub hazard_units: usize,
    pub red_parts: u32,
    pub blue_parts: u32,
}

pub struct Arena {
    width: i32,
    height: i32,
    rubble: Vec<f32>,
    units: AHashMap<UnitId, UnitState>,
    /// Spawn order; the authoritative, deterministic iteration order
    order: Vec<UnitId>,
    runners: AHashMap<UnitId, AgentRunner>,
    piles: Vec<(MapLocation, u32)>,
    teams: AHashMap<Team, TeamState>,
    nest_points: Vec<MapLocation>,
    pub(crate) bus_current: Vec<Posted>,
    pub(crate) bus_delivered: Vec<Posted>,
    pub(crate) direct_inbox: AHashMap<UnitId, Vec<Message>>,
    next_id: u64,
    turn: Turn,
    rng: StdRng,
}

impl Arena {
    /// A bare map with no units, rubble, or resources
    pub fn empty(width: i32, height: i32, seed: u64) -> Self {
        Self {
            width,
            height,
            rubble: vec![0.0; (width * height) as usize],
            units: AHashMap::new(),
            order: Vec::new(),
            runners: AHashMap::new(),
            piles: Vec::new(),
            teams: [Team::Red, Team::Blue]
                .into_iter()
                .map(|t| (t, TeamState::default()))
                .collect(),
            nest_points: Vec::new(),
            bus_current: Vec::new(),
            bus_delivered: Vec::new(),
            direct_inbox: AHashMap::new(),
            next_id: 1,
            turn: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The demo scenario: mirrored spawners, scattered rubble, part
    /// piles, and a few nests across the midline
    pub fn from_config(cfg: &ArenaConfig) -> Self {
        let mut arena = Self::empty(cfg.width, cfg.height, cfg.seed);

        for y in 0..cfg.height {
            for x in 0..cfg.width {
                if arena.rng.gen::<f32>() < cfg.rubble_cover {
                    let level = arena.rng.gen_range(100.0..300.0);
                    arena.set_rubble(MapLocation::new(x, y), level);
                }
            }
        }

        for _ in 0..cfg.part_piles {
            let loc = arena.random_location();
            arena.piles.push((loc, cfg.parts_per_pile));
        }

        let n = cfg.spawners_per_team as i32;
        for i in 0..n {
            let y = cfg.height * (i + 1) / (n + 1);
            arena.spawn(Team::Red, Role::Spawner, MapLocation::new(cfg.width / 4, y));
            arena.spawn(
                Team::Blue,
                Role::Spawner,
                MapLocation::new(3 * cfg.width / 4, y),
            );
        }

        let nests = cfg.nests as i32;
        for i in 0..nests {
            let y = cfg.height * (i + 1) / (nests + 1);
            arena.spawn_hazard(Role::Nest, MapLocation::new(cfg.width / 2, y));
        }

        arena.grant_parts(Team::Red, cfg.starting_parts);
        arena.grant_parts(Team::Blue, cfg.starting_parts);

        arena
    }

    fn random_location(&mut self) -> MapLocation {
        MapLocation::new(
            self.rng.gen_range(0..self.width),
            self.rng.gen_range(0..self.height),
        )
    }

    // --- roster management ---

    /// Add a unit for a player team. Spawner placements are recorded as
    /// that team's initial spawn points.
    pub fn spawn(&mut self, team: Team, role: Role, location: MapLocation) -> UnitId {
        if role == Role::Spawner {
            self.team_mut(team).spawn_points.push(location);
        }
        self.spawn_internal(Faction::Team(team), role, location, 0)
    }

    /// Add a hazard-faction unit
    pub fn spawn_hazard(&mut self, role: Role, location: MapLocation) -> UnitId {
        if role == Role::Nest {
            self.nest_points.push(location);
        }
        self.spawn_internal(Faction::Hazard, role, location, 0)
    }

    pub(crate) fn spawn_internal(
        &mut self,
        faction: Faction,
        role: Role,
        location: MapLocation,
        initial_delay: u32,
    ) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        self.set_rubble(location, 0.0);
        self.units.insert(
            id,
            UnitState {
                id,
                faction,
                role,
                location,
                health: stats_for(role).max_health,
                core_delay: initial_delay,
                weapon_delay: initial_delay,
            },
        );
        self.order.push(id);
        if role.is_playable() {
            self.runners.insert(id, AgentRunner::new(role, id.0));
        }
        id
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units.get(&id)
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.get_mut(&id)
    }

    /// Units in deterministic spawn order, dead ones filtered out
    pub fn roster(&self) -> impl Iterator<Item = &UnitState> {
        self.order
            .iter()
            .filter_map(|id| self.units.get(id))
            .filter(|u| u.health > 0.0)
    }

    pub fn count_role(&self, team: Team, role: Role) -> usize {
        self.roster()
            .filter(|u| u.faction == Faction::Team(team) && u.role == role)
            .count()
    }

    /// Positions of every living unit, for determinism checks
    pub fn snapshot(&self) -> Vec<(UnitId, Role, MapLocation)> {
        self.roster().map(|u| (u.id, u.role, u.location)).collect()
    }

    // --- terrain and resources ---

    pub fn in_bounds(&self, at: MapLocation) -> bool {
        at.x >= 0 && at.x < self.width && at.y >= 0 && at.y < self.height
    }

    fn rubble_index(&self, at: MapLocation) -> Option<usize> {
        self.in_bounds(at).then(|| (at.y * self.width + at.x) as usize)
    }

    pub fn rubble_at(&self, at: MapLocation) -> f32 {
        self.rubble_index(at).map_or(0.0, |i| self.rubble[i])
    }

    pub fn set_rubble(&mut self, at: MapLocation, level: f32) {
        if let Some(i) = self.rubble_index(at) {
            self.rubble[i] = level;
        }
    }

    pub(crate) fn occupied(&self, at: MapLocation) -> bool {
        self.roster().any(|u| u.location == at)
    }

    pub fn grant_parts(&mut self, team: Team, amount: u32) {
        self.team_mut(team).parts += amount;
    }

    pub fn parts_of(&self, team: Team) -> u32 {
        self.teams.get(&team).map_or(0, |t| t.parts)
    }

    pub(crate) fn spend_parts(&mut self, team: Team, amount: u32) -> bool {
        let state = self.team_mut(team);
        if state.parts < amount {
            return false;
        }
        state.parts -= amount;
        true
    }

    fn team_mut(&mut self, team: Team) -> &mut TeamState {
        self.teams.entry(team).or_default()
    }

    pub(crate) fn spawn_points_of(&self, team: Team) -> Vec<MapLocation> {
        self.teams
            .get(&team)
            .map(|t| t.spawn_points.clone())
            .unwrap_or_default()
    }

    pub(crate) fn nest_points(&self) -> Vec<MapLocation> {
        self.nest_points.clone()
    }

    /// Drop a parts pile on the map
    pub fn add_pile(&mut self, at: MapLocation, amount: u32) {
        self.piles.push((at, amount));
    }

    pub(crate) fn piles_within(&self, center: MapLocation, radius_sq: i32) -> Vec<MapLocation> {
        self.piles
            .iter()
            .filter(|(loc, _)| center.distance_squared(loc) <= radius_sq)
            .map(|(loc, _)| *loc)
            .collect()
    }

    /// A spawner stepping onto a pile sweeps it into the team pool
    pub(crate) fn collect_pile_at(&mut self, at: MapLocation, team: Team) {
        let mut collected = 0;
        self.piles.retain(|(loc, amount)| {
            if *loc == at {
                collected += amount;
                false
            } else {
                true
            }
        });
        if collected > 0 {
            self.grant_parts(team, collected);
            tracing::debug!(?team, collected, "parts pile collected");
        }
    }

    // --- test and bus helpers ---

    /// Mutable host view for one unit's turn
    pub fn host_for(&mut self, id: UnitId) -> ArenaHost<'_> {
        ArenaHost::new(self, id)
    }

    pub fn pending_broadcasts(&self) -> usize {
        self.bus_current.len()
    }

    /// Queue a message straight into one unit's next inbound drain
    pub fn deliver_direct(
        &mut self,
        to: UnitId,
        kind: MessageKind,
        value: i32,
        origin: Affiliation,
    ) {
        self.direct_inbox.entry(to).or_default().push(Message {
            origin,
            body: Some(MessageBody { kind, value }),
        });
    }

    pub fn reset_cooldowns(&mut self, id: UnitId) {
        if let Some(unit) = self.units.get_mut(&id) {
            unit.core_delay = 0;
            unit.weapon_delay = 0;
        }
    }

    pub fn set_core_delay(&mut self, id: UnitId, delay: u32) {
        if let Some(unit) = self.units.get_mut(&id) {
            unit.core_delay = delay;
        }
    }

    pub fn set_weapon_delay(&mut self, id: UnitId, delay: u32) {
        if let Some(unit) = self.units.get_mut(&id) {
            unit.weapon_delay = delay;
        }
    }

    pub fn relocate(&mut self, id: UnitId, to: MapLocation) {
        if let Some(unit) = self.units.get_mut(&id) {
            unit.location = to;
        }
    }

    pub fn stats_for(&self, role: Role) -> RoleStats {
        stats_for(role)
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    // --- scheduling ---

    /// Advance the world one full turn: deliver last turn's broadcasts,
    /// run every unit, resolve deaths.
    pub fn run_turn(&mut self) {
        self.turn += 1;
        self.bus_delivered = std::mem::take(&mut self.bus_current);

        for team in [Team::Red, Team::Blue] {
            self.grant_parts(team, PART_INCOME_PER_TURN);
        }

        let roster: Vec<UnitId> = self.order.clone();
        for id in roster {
            let Some(unit) = self.units.get_mut(&id) else {
                continue;
            };
            if unit.health <= 0.0 {
                continue;
            }
            unit.core_delay = unit.core_delay.saturating_sub(1);
            unit.weapon_delay = unit.weapon_delay.saturating_sub(1);

            if let Some(mut runner) = self.runners.remove(&id) {
                let mut host = ArenaHost::new(self, id);
                runner.run_turn(&mut host);
                self.runners.insert(id, runner);
            } else {
                self.step_hazard(id);
            }
        }

        self.reap();
    }

    /// Minimal hazard behavior: nests breed on an interval, ravagers
    /// chase and bite the nearest team unit
    fn step_hazard(&mut self, id: UnitId) {
        let Some((role, loc)) = self.units.get(&id).map(|u| (u.role, u.location)) else {
            return;
        };

        match role {
            Role::Nest => {
                if self.turn % NEST_SPAWN_INTERVAL != 0 {
                    return;
                }
                for dir in DIRECTIONS {
                    let cell = loc.shifted(dir);
                    if self.in_bounds(cell)
                        && !self.occupied(cell)
                        && self.rubble_at(cell) < RUBBLE_CLEAR_THRESHOLD
                    {
                        self.spawn_internal(Faction::Hazard, Role::Ravager, cell, 0);
                        tracing::trace!(turn = self.turn, "nest spawned a ravager");
                        return;
                    }
                }
            }
            Role::Ravager => {
                let target = self
                    .roster()
                    .filter(|u| u.faction != Faction::Hazard)
                    .filter(|u| loc.distance_squared(&u.location) <= Role::Ravager.sensor_radius_sq())
                    .min_by_key(|u| loc.distance_squared(&u.location))
                    .map(|u| (u.id, u.location));
                let Some((target_id, target_loc)) = target else {
                    return;
                };

                if loc.is_adjacent_to(&target_loc) {
                    let damage = stats_for(Role::Ravager).attack_damage;
                    if let Some(victim) = self.units.get_mut(&target_id) {
                        victim.health -= damage;
                    }
                } else if let Some(mut dir) = loc.direction_to(&target_loc) {
                    for _ in 0..8 {
                        let cell = loc.shifted(dir);
                        if self.in_bounds(cell)
                            && !self.occupied(cell)
                            && self.rubble_at(cell) < RUBBLE_CLEAR_THRESHOLD
                        {
                            if let Some(me) = self.units.get_mut(&id) {
                                me.location = cell;
                            }
                            return;
                        }
                        dir = dir.rotate_left();
                    }
                }
            }
            _ => {}
        }
    }

    /// Remove fallen units and their runners
    fn reap(&mut self) {
        let dead: Vec<UnitId> = self
            .units
            .values()
            .filter(|u| u.health <= 0.0)
            .map(|u| u.id)
            .collect();
        for id in dead {
            if let Some(unit) = self.units.remove(&id) {
                tracing::debug!(role = ?unit.role, faction = ?unit.faction, "unit destroyed");
            }
            self.runners.remove(&id);
            self.direct_inbox.remove(&id);
            self.order.retain(|&o| o != id);
        }
    }

    pub fn summary(&self) -> ArenaSummary {
        let count = |f: Faction| self.roster().filter(|u| u.faction == f).count();
        ArenaSummary {
            turn: self.turn,
            red_units: count(Faction::Team(Team::Red)),
            blue_units: count(Faction::Team(Team::Blue)),
            hazard_units: count(Faction::Hazard),
            red_parts: self.parts_of(Team::Red),
            blue_parts: self.parts_of(Team::Blue),
        }
    }
}
