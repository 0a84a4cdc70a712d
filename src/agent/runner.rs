//! Role dispatch and turn containment
//!
//! The runner is the error boundary: whatever a policy does inside a
//! turn, the agent survives to its next one. Returning from `run` ends
//! the agent's life, so it never returns while the host keeps granting
//! turns.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::core::types::Role;
use crate::host::WorldHost;
use crate::policy::roles::{
    GuardPolicy, RaiderPolicy, ScoutPolicy, SentinelPolicy, SoldierPolicy, SpawnerPolicy,
};
use crate::policy::TurnPolicy;

/// Map a role to its policy, seeded from the unit's id.
///
/// Both sentinel modes share one policy value so state survives the
/// transform. Hazard-faction roles have no policy.
pub fn policy_for(role: Role, seed: u64) -> Option<Box<dyn TurnPolicy>> {
    match role {
        Role::Spawner => Some(Box::new(SpawnerPolicy::new(seed))),
        Role::Soldier => Some(Box::new(SoldierPolicy::new(seed))),
        Role::Guard => Some(Box::new(GuardPolicy::new(seed))),
        Role::Raider => Some(Box::new(RaiderPolicy::new(seed))),
        Role::Scout => Some(Box::new(ScoutPolicy::new(seed))),
        Role::Sentinel | Role::MobileSentinel => Some(Box::new(SentinelPolicy::new(seed))),
        Role::Nest | Role::Ravager => None,
    }
}

/// Drives one agent for its whole operational lifetime
pub struct AgentRunner {
    role: Role,
    policy: Option<Box<dyn TurnPolicy>>,
}

impl AgentRunner {
    pub fn new(role: Role, seed: u64) -> Self {
        Self {
            role,
            policy: policy_for(role, seed),
        }
    }

    /// The role this runner was dispatched for
    pub fn role(&self) -> Role {
        self.role
    }

    /// Execute one turn, containing any error or panic
    pub fn run_turn(&mut self, host: &mut dyn WorldHost) {
        let Some(policy) = self.policy.as_mut() else {
            return;
        };

        match catch_unwind(AssertUnwindSafe(|| policy.take_turn(host))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(error = %e, role = ?self.role, "turn aborted");
            }
            Err(_) => {
                tracing::warn!(role = ?self.role, "turn panicked; unit lives on");
            }
        }
    }

    /// Blocking per-turn entry point; never returns while the agent is
    /// meant to remain alive
    pub fn run(&mut self, host: &mut dyn WorldHost) -> ! {
        loop {
            self.run_turn(host);
            host.yield_turn();
        }
    }
}
