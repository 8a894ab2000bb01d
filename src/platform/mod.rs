//! Platform hint resolution against the cache's folder vocabulary.

pub mod alias_map;
pub mod resolver;
pub mod tables;

pub use alias_map::PlatformAliasMap;
pub use resolver::{PlatformResolver, Resolution, Strategy};
