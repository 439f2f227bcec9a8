//! Handicap rating and corrected-time scoring engine.
//!
//! Converts raw elapsed race times into corrected times under multiple
//! handicap systems, ranks fleets per race, and aggregates series standings.
//! The calculation services are pure; the only mutable state is the injected
//! [`Store`] holding boat ratings and raw race entries.

pub mod catalog;
pub mod display;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

mod store;

pub use store::Store;
