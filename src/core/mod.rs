pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use error::{AgentError, Result};
pub use types::{Affiliation, Contact, Role, Turn, UnitId};
