//! Agent lifetime: role dispatch and the per-turn loop

pub mod runner;

pub use runner::{policy_for, AgentRunner};
