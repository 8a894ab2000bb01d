//! Command implementations.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added presence command
//! - 10/16/2026 - Initial module structure

pub mod find;
pub mod platforms;
pub mod presence;
pub mod resolve;
