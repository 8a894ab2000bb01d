//! Box art catalog: entries and the in-memory index.

pub mod entry;
pub mod index;

pub use entry::ArtworkEntry;
pub use index::CatalogIndex;
