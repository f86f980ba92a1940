//! Growth state machine, country catalog, and forest ledger for Canopy.
//!
//! This crate is the pure core of the game. It owns every growth
//! transition and the awards that follow from them, and performs no I/O:
//! the current date is always passed in by the caller.
//!
//! # Modules
//!
//! - [`growth`] -- Stage transitions for the daily-cap and twice-daily
//!   watering policies.
//! - [`ledger`] -- Planet score and the append-only "my forest" roster.
//! - [`checkin`] -- The once-per-day check-in gate.
//! - [`catalog`] -- Read-only country lookup table.
//! - [`atlas`] -- The two built-in country tables.
//! - [`daily`] -- [`DailyForest`], one tree per country, watered once a day.
//! - [`garden`] -- [`Garden`], planted trees tended morning and evening.
//! - [`error`] -- Contract-violation errors.

pub mod atlas;
pub mod catalog;
pub mod checkin;
pub mod daily;
pub mod error;
pub mod garden;
pub mod growth;
pub mod ledger;

// Re-export primary types at crate root.
pub use atlas::{daily_atlas, garden_atlas};
pub use catalog::Catalog;
pub use checkin::CheckIn;
pub use daily::DailyForest;
pub use error::WorldError;
pub use garden::{Garden, PlantOutcome, PlantingDefaults};
pub use growth::{GrowthRules, LevelUp, MATURITY_BONUS, WaterOutcome};
pub use ledger::ForestLedger;
