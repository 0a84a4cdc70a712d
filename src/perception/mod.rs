//! Perception aggregation
//!
//! One snapshot per decision point: nearby entities partitioned by
//! affiliation, plus resource sites. Scans are read-only; an empty
//! snapshot is a normal result, not a failure.

use rand::Rng;

use crate::core::types::{Affiliation, Contact};
use crate::grid::MapLocation;
use crate::host::WorldHost;

/// What a unit can see around itself this turn
#[derive(Debug, Clone, Default)]
pub struct Perception {
    pub hostiles: Vec<Contact>,
    pub hazards: Vec<Contact>,
}

impl Perception {
    /// Scan the surroundings within the given squared radius
    pub fn sense(host: &dyn WorldHost, radius_sq: i32) -> Self {
        Self {
            hostiles: host.scan_nearby(radius_sq, Affiliation::Hostile),
            hazards: host.scan_nearby(radius_sq, Affiliation::Hazard),
        }
    }

    /// No threats of either kind in view
    pub fn is_clear(&self) -> bool {
        self.hostiles.is_empty() && self.hazards.is_empty()
    }

    /// Pick a target: a uniformly random hostile when any are visible,
    /// otherwise a uniformly random hazard. No ranking within a class.
    pub fn pick_target(&self, rng: &mut impl Rng) -> Option<&Contact> {
        if !self.hostiles.is_empty() {
            return Some(&self.hostiles[rng.gen_range(0..self.hostiles.len())]);
        }
        if !self.hazards.is_empty() {
            return Some(&self.hazards[rng.gen_range(0..self.hazards.len())]);
        }
        None
    }
}

/// Resource pile locations within the given squared radius
pub fn resource_sites(host: &dyn WorldHost, radius_sq: i32) -> Vec<MapLocation> {
    host.scan_resource_sites(radius_sq)
}
