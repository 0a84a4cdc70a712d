//! The world-host seam
//!
//! Everything an agent can know or do goes through `WorldHost`. The real
//! simulation host stands behind this trait in production; the in-memory
//! arena implements it for the headless runner and for tests.

use crate::comms::{Message, MessageKind};
use crate::core::error::Result;
use crate::core::types::{Affiliation, Contact, Role};
use crate::grid::{Direction, MapLocation};

/// Host-side view of one unit's turn.
///
/// Action preconditions are values, not errors: `can_act`, `can_attack`,
/// `can_move_to` and friends report transient refusal, and policies are
/// expected to check them before committing to having acted. The fallible
/// action methods only error on genuine host faults, which the dispatch
/// loop contains.
pub trait WorldHost {
    // --- identity ---

    /// Role of the unit taking this turn
    fn role(&self) -> Role;

    /// Unique numeric id of this unit; seeds its private random source
    fn unique_id(&self) -> u64;

    /// Current cell of this unit
    fn location(&self) -> MapLocation;

    // --- readiness ---

    /// Whether movement/construction/transform actions are available
    fn can_act(&self) -> bool;

    /// Whether the weapon is ready to fire
    fn can_attack(&self) -> bool;

    // --- sensing ---

    /// All entities of the given affiliation within squared range
    fn scan_nearby(&self, radius_sq: i32, affiliation: Affiliation) -> Vec<Contact>;

    /// Resource pile locations within squared range
    fn scan_resource_sites(&self, radius_sq: i32) -> Vec<MapLocation>;

    /// Obstruction level of a cell; out-of-bounds cells report zero
    fn obstruction_level(&self, at: MapLocation) -> f32;

    /// Whether the cell lies on the map
    fn is_in_bounds(&self, at: MapLocation) -> bool;

    // --- movement ---

    /// Whether a one-step move in the given direction would be accepted
    fn can_move_to(&self, dir: Direction) -> bool;

    /// Move one step in the given direction
    fn move_to(&mut self, dir: Direction) -> Result<()>;

    /// Grind down the obstruction in the adjacent cell
    fn clear_obstruction(&mut self, dir: Direction) -> Result<()>;

    // --- combat ---

    /// Whether the weapon can reach the given cell right now
    fn can_attack_target(&self, at: MapLocation) -> bool;

    /// Fire at the given cell
    fn attack_target(&mut self, at: MapLocation) -> Result<()>;

    // --- construction ---

    /// Whether the team can currently afford to produce the role
    fn has_resources_for(&self, role: Role) -> bool;

    /// Whether a new unit of the role could be placed one step away
    fn can_place_at(&self, dir: Direction, role: Role) -> bool;

    /// Place a freshly produced unit one step away
    fn place_unit(&mut self, dir: Direction, role: Role) -> Result<()>;

    // --- transformation (sentinel platforms) ---

    /// Pack a static platform for transit
    fn transform_to_mobile(&mut self) -> Result<()>;

    /// Deploy a packed platform in place
    fn transform_to_static(&mut self) -> Result<()>;

    // --- broadcast channel ---

    /// Take this turn's inbound messages. Messages left undecoded are
    /// gone; there is no persistent inbox.
    fn drain_inbound(&mut self) -> Vec<Message>;

    /// Broadcast a message reaching all units within `strength`
    /// (squared distance), friend and foe alike
    fn broadcast(&mut self, kind: MessageKind, value: i32, strength: u32) -> Result<()>;

    // --- map intel ---

    /// Where the given side's spawners stood when the match began
    fn initial_spawn_locations(&self, side: Affiliation) -> Vec<MapLocation>;

    // --- scheduling ---

    /// End this unit's turn, ceding the remaining budget to the host
    fn yield_turn(&mut self);
}
