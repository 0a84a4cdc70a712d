//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::grid::MapLocation;

/// Unique identifier for a unit. Doubles as the seed for that unit's
/// private random source, so two units never share a random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u64);

/// Simulation turn counter
pub type Turn = u64;

/// Affiliation of a sensed entity, always relative to the perceiving unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affiliation {
    /// Same team as the perceiving unit
    Friendly,
    /// Opposing team
    Hostile,
    /// Neutral hazard faction (hostile to both teams)
    Hazard,
}

/// Unit role tag. Closed set; drives policy dispatch.
///
/// `Nest` and `Ravager` belong to the hazard faction and are never driven
/// by this crate's policies - they only appear as scan contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Production unit; cycles the build order and places new units
    Spawner,
    /// Ranged attacker; homes on broadcast opposing-spawner locations
    Soldier,
    /// Melee defender; chases visible threats, homes on hazard broadcasts
    Guard,
    /// Offense unit; walks the opposing spawn points as rally waypoints
    Raider,
    /// Unarmed observer; reports sightings over the broadcast channel
    Scout,
    /// Defensive platform, static mode: long range, cannot move
    Sentinel,
    /// Defensive platform, packed for transit: mobile, cannot attack
    MobileSentinel,
    /// Stationary hazard source
    Nest,
    /// Mobile hazard unit
    Ravager,
}

impl Role {
    /// Whether this role is driven by an agent policy
    pub fn is_playable(self) -> bool {
        !matches!(self, Role::Nest | Role::Ravager)
    }

    /// Sensor range as squared distance
    pub fn sensor_radius_sq(self) -> i32 {
        match self {
            Role::Spawner => 35,
            Role::Soldier => 24,
            Role::Guard => 24,
            Role::Raider => 24,
            Role::Scout => 53,
            Role::Sentinel => 24,
            Role::MobileSentinel => 24,
            Role::Nest => 0,
            Role::Ravager => 35,
        }
    }

    /// Attack range as squared distance. Zero means the role is unarmed.
    pub fn attack_radius_sq(self) -> i32 {
        match self {
            Role::Soldier => 13,
            Role::Guard => 2,
            Role::Raider => 13,
            Role::Sentinel => 48,
            Role::Ravager => 2,
            Role::Spawner | Role::Scout | Role::MobileSentinel | Role::Nest => 0,
        }
    }

    /// Whether this role can issue attacks at all
    pub fn can_fight(self) -> bool {
        self.attack_radius_sq() > 0
    }

    /// Resource cost to produce this role, or None if it cannot be built
    pub fn part_cost(self) -> Option<u32> {
        match self {
            Role::Scout => Some(25),
            Role::Soldier => Some(30),
            Role::Guard => Some(30),
            Role::Raider => Some(100),
            Role::Sentinel => Some(130),
            Role::Spawner | Role::MobileSentinel | Role::Nest | Role::Ravager => None,
        }
    }
}

/// A sensed entity: what scans return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub location: MapLocation,
    pub role: Role,
    pub affiliation: Affiliation,
}
