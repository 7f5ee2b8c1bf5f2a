use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::person::PersonRecord;
use crate::normalize::{normalize_flag, normalize_text};

/// One guardian-centered group, or a veteran standing alone.
///
/// `people` lists grouped veterans first (encounter order) and the guardian last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPair")]
pub struct PairRecord {
    #[serde(rename = "pairId")]
    pub pair_id: String,
    pub people: Vec<PersonRecord>,
    #[serde(rename = "busMismatch")]
    pub bus_mismatch: bool,
    #[serde(rename = "missingPairedPerson")]
    pub missing_paired_person: bool,
}

impl PairRecord {
    /// Build a pair, deriving `bus_mismatch` from the people in it
    pub fn new(pair_id: impl Into<String>, people: Vec<PersonRecord>, missing_paired_person: bool) -> Self {
        let bus_mismatch = has_bus_mismatch(&people);
        Self {
            pair_id: pair_id.into(),
            people,
            bus_mismatch,
            missing_paired_person,
        }
    }

    pub fn has_issues(&self) -> bool {
        self.bus_mismatch || self.missing_paired_person
    }
}

/// True when anyone in the group rides a different bus than the first person
pub fn has_bus_mismatch(people: &[PersonRecord]) -> bool {
    match people.split_first() {
        Some((first, rest)) => rest.iter().any(|p| p.bus != first.bus),
        None => false,
    }
}

/// Previously serialized pair, flags still in their loose encoding
#[derive(Debug, Deserialize)]
struct RawPair {
    #[serde(rename = "pairId", default)]
    pair_id: Option<Value>,
    #[serde(default)]
    people: Vec<PersonRecord>,
    #[serde(rename = "busMismatch", default)]
    bus_mismatch: Option<Value>,
    #[serde(rename = "missingPairedPerson", default)]
    missing_paired_person: Option<Value>,
}

impl From<RawPair> for PairRecord {
    fn from(raw: RawPair) -> Self {
        Self {
            pair_id: normalize_text(raw.pair_id.as_ref()),
            people: raw.people,
            bus_mismatch: normalize_flag(raw.bus_mismatch.as_ref()),
            missing_paired_person: normalize_flag(raw.missing_paired_person.as_ref()),
        }
    }
}
