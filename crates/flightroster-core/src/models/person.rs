use serde::{Deserialize, Serialize};

use super::bus::Bus;
use crate::input::RawPersonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    Veteran,
    Guardian,
}

impl std::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonKind::Veteran => write!(f, "Veteran"),
            PersonKind::Guardian => write!(f, "Guardian"),
        }
    }
}

/// Fields that only exist for one kind of person.
///
/// Serialized flattened into the owning record, with `type` as the tag, so a
/// veteran never carries guardian fields and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PersonDetails {
    Veteran {
        med_limits: String,
        group: String,
    },
    Guardian {
        med_exprnc: String,
        training: String,
        training_complete: bool,
    },
}

impl PersonDetails {
    pub fn kind(&self) -> PersonKind {
        match self {
            PersonDetails::Veteran { .. } => PersonKind::Veteran,
            PersonDetails::Guardian { .. } => PersonKind::Guardian,
        }
    }
}

/// One veteran's or guardian's assignment to a flight.
///
/// Deserializing goes through the field normalizer, so both raw view values
/// and previously serialized records are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPersonValue")]
pub struct PersonRecord {
    pub id: String,
    pub name_first: String,
    pub name_last: String,
    pub city: String,
    pub seat: String,
    pub shirt: String,
    pub bus: Bus,
    pub nofly: bool,
    pub confirmed: bool,
    #[serde(flatten)]
    pub details: PersonDetails,
}

impl PersonRecord {
    pub fn kind(&self) -> PersonKind {
        self.details.kind()
    }

    pub fn is_veteran(&self) -> bool {
        self.kind() == PersonKind::Veteran
    }

    pub fn is_guardian(&self) -> bool {
        self.kind() == PersonKind::Guardian
    }

    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name_last, self.name_first)
    }
}

/// A normalized person together with the partner id its row claimed.
///
/// The claim only drives grouping; it is never part of any output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub person: PersonRecord,
    pub pairing: String,
}
