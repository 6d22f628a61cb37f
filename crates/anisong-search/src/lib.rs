//! # anisong-search
//!
//! Song and artist resolution engine for the anisong catalog.
//!
//! Pipeline per search:
//! - [`normalize`]: canonical text form for exact and partial name matching
//! - [`artist_graph`]: expand seed artists through the line-up membership graph
//! - [`criteria`]: AND of song-type, category, difficulty and anime attribute filters
//! - [`dedupe`]: collapse re-listings of the same recording (opt-in)
//! - [`orchestrator`]: one pipeline per search kind, storage order, capped
//! - [`combine`]: up to five sub-searches joined by union or intersection
//!
//! [`SearchEngine`] ties these together behind request validation and logging.
//! The engine only reads the catalog through [`anisong_db::CatalogReader`].

pub mod artist_graph;
pub mod assemble;
pub mod combine;
pub mod criteria;
pub mod dedupe;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod validate;

pub use engine::SearchEngine;
pub use error::SearchError;
