//! # exo-core
//!
//! Planet records and the derived fields computed from them.
//!
//! This crate is pure: no I/O, no clocks, no allocation beyond the records
//! themselves. It provides:
//! - [`RawRecord`], an archive row where every column may be missing
//! - [`PlanetRecord`], the normalized record with a habitability score and type
//! - [`habitability`], the additive 0-100 Earth-similarity score
//! - [`PlanetType`] and [`classify`], the radius-based planet classification
//! - [`catalog`], sorting, filtering, and summary statistics over fetched records

pub mod bands;
pub mod catalog;
pub mod habitability;
pub mod planet_type;
pub mod record;

pub use habitability::{HabitabilityBreakdown, HabitableZone, ScoreInputs};
pub use planet_type::{PlanetType, classify};
pub use record::{PlanetRecord, RawRecord, normalize};
