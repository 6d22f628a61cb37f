//! # anisong-core
//!
//! Core types and error types for the anisong catalog engine.
//!
//! This crate provides the foundational types shared across all anisong crates:
//! - Entity structs for the catalog (anime, songs, artists, line-ups, credits)
//! - Enums for song types, credit roles, group granularity and combination logic
//! - Search parameter blocks as accepted from callers
//! - Denormalized result records returned by every search
//! - Operational limits (result cap, partial-match threshold, sub-search cap)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod limits;
pub mod params;
pub mod responses;
