//! Raw input shapes handed over by the document-store collaborator.
//!
//! Every field is kept as an optional `serde_json::Value` so that a row with
//! a wrong field type still deserializes; the normalizer decides what each
//! value means. Only malformed JSON (or a payload of the wrong overall
//! shape) is an error.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, RosterError};

/// One row of the per-flight assignment view
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub value: RawPersonValue,
}

/// The `value` object of a view row, exactly as emitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPersonValue {
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name_first: Option<Value>,
    #[serde(default)]
    pub name_last: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default)]
    pub seat: Option<Value>,
    #[serde(default)]
    pub shirt: Option<Value>,
    #[serde(default)]
    pub bus: Option<Value>,
    #[serde(default)]
    pub nofly: Option<Value>,
    #[serde(default)]
    pub confirmed: Option<Value>,
    // Veteran only
    #[serde(default)]
    pub med_limits: Option<Value>,
    #[serde(default)]
    pub group: Option<Value>,
    // Guardian only
    #[serde(default)]
    pub med_exprnc: Option<Value>,
    #[serde(default)]
    pub training: Option<Value>,
    #[serde(default)]
    pub training_complete: Option<Value>,
    /// Id of the partner this row claims; empty or absent means no claim
    #[serde(default)]
    pub pairing: Option<Value>,
}

/// The flight's own metadata document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightDocument {
    #[serde(alias = "_id", default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub capacity: Option<Value>,
    #[serde(default)]
    pub flight_date: Option<Value>,
}

/// A flight document together with its assignment rows
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightBundle {
    #[serde(default)]
    pub flight: FlightDocument,
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

impl FlightBundle {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(RosterError::unexpected_shape("a flight bundle object", &value));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Parse assignment rows from either a bare JSON array or a view envelope
/// (`{"total_rows": .., "offset": .., "rows": [...]}`).
pub fn parse_rows(json: &str) -> Result<Vec<RawRow>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut envelope) => match envelope.remove("rows") {
            Some(rows @ Value::Array(_)) => Ok(serde_json::from_value(rows)?),
            Some(other) => Err(RosterError::unexpected_shape("`rows` to be an array", &other)),
            None => Err(RosterError::InvalidInput(
                "view envelope has no `rows` field".to_string(),
            )),
        },
        other => Err(RosterError::unexpected_shape(
            "an array of rows or a view envelope",
            &other,
        )),
    }
}
