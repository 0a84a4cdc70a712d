//! Arena-side unit vitals and pacing constants
//!
//! Sensor and weapon ranges live on `Role`; these are the numbers only
//! the world needs to know.

use crate::core::types::Role;

/// Turns a newly placed unit waits before its first action
pub const NEWBORN_DELAY: u32 = 5;

/// Turns of core delay after clearing an obstruction
pub const CLEAR_DELAY: u32 = 2;

/// Turns of core delay after a sentinel mode change
pub const TRANSFORM_DELAY: u32 = 10;

/// Passive income granted to each team every turn
pub const PART_INCOME_PER_TURN: u32 = 1;

/// A nest spawns a ravager once this many turns
pub const NEST_SPAWN_INTERVAL: u64 = 40;

/// Fraction of rubble remaining after one clearing action, less a flat cut
pub const CLEAR_KEEP_FRACTION: f32 = 0.9;
pub const CLEAR_FLAT_CUT: f32 = 10.0;

/// Per-role vitals used by the arena's crude combat resolution
#[derive(Debug, Clone, Copy)]
pub struct RoleStats {
    pub max_health: f32,
    pub attack_damage: f32,
    pub move_delay: u32,
    pub attack_delay: u32,
    pub build_delay: u32,
}

/// Vitals table for every role
pub fn stats_for(role: Role) -> RoleStats {
    match role {
        Role::Spawner => RoleStats {
            max_health: 1000.0,
            attack_damage: 0.0,
            move_delay: 2,
            attack_delay: 0,
            build_delay: 10,
        },
        Role::Soldier => RoleStats {
            max_health: 50.0,
            attack_damage: 4.0,
            move_delay: 2,
            attack_delay: 2,
            build_delay: 0,
        },
        Role::Guard => RoleStats {
            max_health: 80.0,
            attack_damage: 1.5,
            move_delay: 2,
            attack_delay: 1,
            build_delay: 0,
        },
        Role::Raider => RoleStats {
            max_health: 100.0,
            attack_damage: 4.0,
            move_delay: 2,
            attack_delay: 2,
            build_delay: 0,
        },
        Role::Scout => RoleStats {
            max_health: 40.0,
            attack_damage: 0.0,
            move_delay: 1,
            attack_delay: 0,
            build_delay: 0,
        },
        Role::Sentinel => RoleStats {
            max_health: 100.0,
            attack_damage: 14.0,
            move_delay: 0,
            attack_delay: 3,
            build_delay: 0,
        },
        Role::MobileSentinel => RoleStats {
            max_health: 100.0,
            attack_damage: 0.0,
            move_delay: 3,
            attack_delay: 0,
            build_delay: 0,
        },
        Role::Nest => RoleStats {
            max_health: 200.0,
            attack_damage: 0.0,
            move_delay: 0,
            attack_delay: 0,
            build_delay: 0,
        },
        Role::Ravager => RoleStats {
            max_health: 60.0,
            attack_damage: 3.0,
            move_delay: 1,
            attack_delay: 1,
            build_delay: 0,
        },
    }
}
