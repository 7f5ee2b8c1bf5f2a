//! The flight detail result: flight metadata, occupancy stats and pairs.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::aggregate::aggregate;
use crate::input::{FlightBundle, FlightDocument};
use crate::models::{FlightStats, PairRecord};
use crate::normalize::{normalize_count, normalize_rows, normalize_text};
use crate::pairing::build_pairs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightInfo {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub flight_date: String,
}

impl FlightInfo {
    pub fn from_document(doc: &FlightDocument) -> Self {
        Self {
            id: normalize_text(doc.id.as_ref()),
            name: normalize_text(doc.name.as_ref()),
            capacity: normalize_count(doc.capacity.as_ref()),
            flight_date: normalize_text(doc.flight_date.as_ref()),
        }
    }

    /// "May 18, 2024"; unparseable dates come back as stored
    pub fn formatted_date(&self) -> String {
        let raw = self.flight_date.trim();
        if raw.is_empty() {
            return "TBD".to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            date.format("%b %d, %Y").to_string()
        } else if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            dt.format("%b %d, %Y").to_string()
        } else {
            raw.to_string()
        }
    }
}

/// A data-quality flag raised on one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairIssue {
    BusMismatch { pair_id: String },
    MissingPairedPerson { pair_id: String },
}

impl PairIssue {
    pub fn pair_id(&self) -> &str {
        match self {
            PairIssue::BusMismatch { pair_id } | PairIssue::MissingPairedPerson { pair_id } => pair_id,
        }
    }
}

impl std::fmt::Display for PairIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairIssue::BusMismatch { pair_id } => {
                write!(f, "pair {}: people are on different buses", pair_id)
            }
            PairIssue::MissingPairedPerson { pair_id } => {
                write!(f, "pair {}: a claimed partner is not on this flight", pair_id)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightDetail {
    pub flight: FlightInfo,
    pub stats: FlightStats,
    pub pairs: Vec<PairRecord>,
}

impl FlightDetail {
    /// Combine flight metadata with finished pairs, computing the stats
    pub fn assemble(flight: FlightInfo, pairs: Vec<PairRecord>) -> Self {
        let stats = aggregate(&pairs);
        Self { flight, stats, pairs }
    }

    /// Normalize, pair and aggregate one flight's rows
    pub fn from_bundle(bundle: &FlightBundle) -> Self {
        let entries = normalize_rows(&bundle.rows);
        let pairs = build_pairs(&entries);
        Self::assemble(FlightInfo::from_document(&bundle.flight), pairs)
    }

    /// Seats left after everyone actually flying, never below zero
    pub fn open_seats(&self) -> u32 {
        let flying = u32::try_from(self.stats.flight.total()).unwrap_or(u32::MAX);
        self.flight.capacity.saturating_sub(flying)
    }

    pub fn issues(&self) -> Vec<PairIssue> {
        let mut issues = Vec::new();
        for pair in self.pairs.iter().filter(|p| p.has_issues()) {
            if pair.bus_mismatch {
                issues.push(PairIssue::BusMismatch {
                    pair_id: pair.pair_id.clone(),
                });
            }
            if pair.missing_paired_person {
                issues.push(PairIssue::MissingPairedPerson {
                    pair_id: pair.pair_id.clone(),
                });
            }
        }
        issues
    }

    pub fn people_count(&self) -> usize {
        self.pairs.iter().map(|p| p.people.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> FlightBundle {
        serde_json::from_value(value).expect("test bundle should parse")
    }

    #[test]
    fn test_flight_info_from_document() {
        let doc: FlightDocument = serde_json::from_value(json!({
            "_id": "SSHF-Nov2024",
            "name": "November 2024",
            "capacity": "90",
            "flight_date": "2024-11-09"
        }))
        .unwrap();
        let info = FlightInfo::from_document(&doc);
        assert_eq!(info.id, "SSHF-Nov2024");
        assert_eq!(info.capacity, 90);
        assert_eq!(info.formatted_date(), "Nov 09, 2024");
    }

    #[test]
    fn test_formatted_date_fallbacks() {
        let mut info = FlightInfo::from_document(&FlightDocument::default());
        assert_eq!(info.formatted_date(), "TBD");
        info.flight_date = "2024-05-18T06:00:00Z".to_string();
        assert_eq!(info.formatted_date(), "May 18, 2024");
        info.flight_date = "spring".to_string();
        assert_eq!(info.formatted_date(), "spring");
    }

    #[test]
    fn test_from_bundle_end_to_end() {
        let detail = FlightDetail::from_bundle(&bundle(json!({
            "flight": {"id": "f1", "name": "Spring", "capacity": 10, "flight_date": "2024-04-20"},
            "rows": [
                {"value": {"type": "Veteran", "id": "v1", "bus": "Alpha1", "pairing": "g1"}},
                {"value": {"type": "Guardian", "id": "g1", "bus": "Bravo2", "pairing": "v1"}},
                {"value": {"type": "Veteran", "id": "v2", "bus": "Alpha1", "nofly": "nofly", "pairing": "g9"}}
            ]
        })));

        assert_eq!(detail.pairs.len(), 2);
        assert_eq!(detail.people_count(), 3);
        assert_eq!(detail.stats.tours.alpha, 2);
        assert_eq!(detail.stats.flight.alpha, 1);
        assert_eq!(detail.open_seats(), 8);
        assert_eq!(
            detail.issues(),
            vec![
                PairIssue::BusMismatch { pair_id: "g1".to_string() },
                PairIssue::MissingPairedPerson { pair_id: "v2".to_string() },
            ]
        );
    }

    #[test]
    fn test_open_seats_saturates() {
        let detail = FlightDetail::from_bundle(&bundle(json!({
            "flight": {"id": "f1", "capacity": 1},
            "rows": [
                {"value": {"type": "Veteran", "id": "v1"}},
                {"value": {"type": "Veteran", "id": "v2"}}
            ]
        })));
        assert_eq!(detail.open_seats(), 0);
    }

    #[test]
    fn test_detail_serializes_envelope() {
        let detail = FlightDetail::from_bundle(&bundle(json!({
            "flight": {"id": "f1", "name": "Spring", "capacity": 10, "flight_date": "2024-04-20"},
            "rows": [{"value": {"type": "Veteran", "id": "v1", "pairing": ""}}]
        })));
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["flight"]["id"], "f1");
        assert_eq!(value["flight"]["capacity"], 10);
        assert_eq!(value["stats"]["buses"]["None"], 1);
        assert_eq!(value["pairs"][0]["pairId"], "v1");
        assert!(value["pairs"][0]["people"][0].get("pairing").is_none());
    }

    #[test]
    fn test_issue_display() {
        let issue = PairIssue::MissingPairedPerson { pair_id: "v7".to_string() };
        assert_eq!(issue.pair_id(), "v7");
        assert!(issue.to_string().contains("v7"));
    }
}
