//! Core library for flightroster.
//!
//! Reconciles the flat per-person assignment rows of one charter flight into
//! veteran/guardian pairs and occupancy statistics:
//!
//! - [`normalize`]: turns loosely-typed row fields into canonical values
//! - [`pairing`]: rebuilds guardian-centered groups and flags data-quality problems
//! - [`aggregate`]: counts distinct people per bus, per tour and per flight
//! - [`detail`]: assembles the flight detail result handed back to callers
//!
//! Every stage is a pure function of its input. Nothing here touches the
//! network or the document store; callers fetch rows and ship results.

pub mod aggregate;
pub mod detail;
pub mod error;
pub mod input;
pub mod models;
pub mod normalize;
pub mod pairing;

pub use aggregate::aggregate;
pub use detail::{FlightDetail, FlightInfo, PairIssue};
pub use error::{Result, RosterError};
pub use input::{parse_rows, FlightBundle, FlightDocument, RawPersonValue, RawRow};
pub use models::{
    Bus, BusCounts, FlightStats, PairRecord, PersonDetails, PersonKind, PersonRecord,
    RosterEntry, Tour, TourCounts,
};
pub use pairing::build_pairs;
