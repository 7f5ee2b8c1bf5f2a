//! Field normalization.
//!
//! The assignment view emits loosely-typed values: booleans encoded as
//! marker strings, free-text bus codes, numbers where text is expected.
//! Every function here is total; bad input yields a safe default.

use serde_json::Value;
use tracing::debug;

use crate::input::{RawPersonValue, RawRow};
use crate::models::{Bus, PersonDetails, PersonKind, PersonRecord, RosterEntry};

/// Trimmed exact match against the bus codes; anything else is `Bus::None`
pub fn normalize_bus(raw: Option<&Value>) -> Bus {
    raw.and_then(Value::as_str)
        .map(str::trim)
        .and_then(Bus::from_code)
        .unwrap_or_default()
}

/// The view emits `""` for flying normally and `"nofly"` for grounded
pub fn normalize_nofly(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("nofly"),
        _ => false,
    }
}

/// The view emits `""` when a confirmation exists and `"unconfirmed"` otherwise
pub fn normalize_confirmed(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.is_empty() || s.eq_ignore_ascii_case("confirmed"),
        _ => false,
    }
}

/// Generic tri-state boolean: `true` or the string `"true"` (any case)
pub fn normalize_flag(raw: Option<&Value>) -> bool {
    match raw {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Display text; scalars render as their JSON text, everything else is empty
pub fn normalize_text(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Non-negative count from a number or numeric string, otherwise 0
pub fn normalize_count(raw: Option<&Value>) -> u32 {
    match raw {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(whole) => u32::try_from(whole).unwrap_or(u32::MAX),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u32)
                .unwrap_or(0),
        },
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

/// `"Guardian"` (any case) is a guardian; everything else is treated as a veteran
pub fn normalize_kind(raw: Option<&Value>) -> PersonKind {
    match raw.and_then(Value::as_str) {
        Some(s) if s.eq_ignore_ascii_case("guardian") => PersonKind::Guardian,
        Some(s) if s.eq_ignore_ascii_case("veteran") => PersonKind::Veteran,
        other => {
            debug!(kind = ?other, "Unrecognized person type, treating as veteran");
            PersonKind::Veteran
        }
    }
}

pub fn normalize_person(raw: &RawPersonValue) -> PersonRecord {
    let details = match normalize_kind(raw.kind.as_ref()) {
        PersonKind::Veteran => PersonDetails::Veteran {
            med_limits: normalize_text(raw.med_limits.as_ref()),
            group: normalize_text(raw.group.as_ref()),
        },
        PersonKind::Guardian => PersonDetails::Guardian {
            med_exprnc: normalize_text(raw.med_exprnc.as_ref()),
            training: normalize_text(raw.training.as_ref()),
            training_complete: normalize_flag(raw.training_complete.as_ref()),
        },
    };

    PersonRecord {
        id: normalize_text(raw.id.as_ref()),
        name_first: normalize_text(raw.name_first.as_ref()),
        name_last: normalize_text(raw.name_last.as_ref()),
        city: normalize_text(raw.city.as_ref()),
        seat: normalize_text(raw.seat.as_ref()),
        shirt: normalize_text(raw.shirt.as_ref()),
        bus: normalize_bus(raw.bus.as_ref()),
        nofly: normalize_nofly(raw.nofly.as_ref()),
        confirmed: normalize_confirmed(raw.confirmed.as_ref()),
        details,
    }
}

pub fn normalize_entry(row: &RawRow) -> RosterEntry {
    RosterEntry {
        person: normalize_person(&row.value),
        pairing: normalize_text(row.value.pairing.as_ref()),
    }
}

pub fn normalize_rows(rows: &[RawRow]) -> Vec<RosterEntry> {
    rows.iter().map(normalize_entry).collect()
}

impl From<RawPersonValue> for PersonRecord {
    fn from(raw: RawPersonValue) -> Self {
        normalize_person(&raw)
    }
}
