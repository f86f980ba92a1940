//! Configuration, check-in persistence, and action dispatch for Canopy.
//!
//! This crate sits between the pure growth state machine in `canopy-world`
//! and a presentation layer. It loads configuration, restores and saves
//! the daily check-in key, and turns user actions into state transitions.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `canopy-config.yaml` into
//!   strongly-typed structs.
//! - [`store`] -- [`CheckInStore`] trait with in-memory and file-backed
//!   implementations.
//! - [`session`] -- [`Session`], the entry point for presentation-layer
//!   [`Action`]s.
//!
//! [`CheckInStore`]: store::CheckInStore
//! [`Session`]: session::Session
//! [`Action`]: session::Action

pub mod config;
pub mod session;
pub mod store;

pub use config::{CanopyConfig, ConfigError};
pub use session::{Action, ActionResult, Forest, Session, SessionError, WaterTarget};
pub use store::{CheckInStore, FileCheckInStore, MemoryCheckInStore, StoreError};
