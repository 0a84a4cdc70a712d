//! One policy per role, each owning exactly its own persistent state

pub mod guard;
pub mod raider;
pub mod scout;
pub mod sentinel;
pub mod soldier;
pub mod spawner;

pub use guard::GuardPolicy;
pub use raider::RaiderPolicy;
pub use scout::ScoutPolicy;
pub use sentinel::SentinelPolicy;
pub use soldier::SoldierPolicy;
pub use spawner::SpawnerPolicy;
