//! Data models for the flight roster engine.
//!
//! - `Bus`, `Tour`: the closed set of bus codes and the tours they roll up into
//! - `PersonRecord`, `RosterEntry`: one veteran or guardian assignment
//! - `PairRecord`: one guardian-centered group or a lone veteran
//! - `FlightStats`, `BusCounts`, `TourCounts`: occupancy tables

pub mod bus;
pub mod pair;
pub mod person;
pub mod stats;

pub use bus::{Bus, Tour};
pub use pair::PairRecord;
pub use person::{PersonDetails, PersonKind, PersonRecord, RosterEntry};
pub use stats::{BusCounts, FlightStats, TourCounts};
