//! mister-boxart library
//!
//! Fuzzy box-art lookup over a local thumbnail cache, plus presence payload
//! decoration for MiSTer now-playing snapshots.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added presence module
//! - 10/16/2026 - Initial library structure

pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod output;
pub mod platform;
pub mod presence;

pub use catalog::{ArtworkEntry, CatalogIndex};
pub use config::{Config, MatchConfig};
pub use engine::{Engine, EngineHandle, MatchOutcome, NoMatchReason};
pub use error::{BoxartError, Result};
pub use presence::{NowPlaying, PresenceBuilder, PresencePayload, PresenceTracker};
