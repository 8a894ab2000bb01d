//! Box art lookup engine.

pub mod handle;
pub mod selector;

pub use handle::EngineHandle;
pub use selector::{Candidate, Engine, MatchKind, MatchOutcome, NoMatchReason, Scope};
