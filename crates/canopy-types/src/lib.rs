//! Shared type definitions for the Canopy virtual forest.
//!
//! This crate is the single source of truth for the data that flows between
//! the growth state machine and the presentation layer. Types are exported
//! to `TypeScript` via `ts-rs` so a map front end can render them directly.
//!
//! # Modules
//!
//! - [`ids`] -- [`TreeId`], the identity of a planted tree
//! - [`enums`] -- Growth stages, watering slots, policies, rejection reasons
//! - [`structs`] -- Catalog records, growth entries, planted trees, views

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::{GrowthPolicy, GrowthStage, RejectionReason, STAGE_GLYPHS, WateringSlot};
pub use ids::TreeId;
pub use structs::{
    Coordinates, CountryRecord, DailyGrowth, PlantedTree, SpeciesProfile, StageView,
    TwiceDailyGrowth, Wildlife,
};
