//! Read repositories for the anisong catalog.
//!
//! Each repo module adds `impl CatalogDb` methods for one entity family.
//! Every bulk read returns rows in storage order (ascending primary key), which
//! is the order searches preserve up to truncation.

pub mod anime;
pub mod artist;
pub mod song;
