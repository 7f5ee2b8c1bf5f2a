//! Veteran/guardian pair reconstruction.
//!
//! The assignment rows only carry weak cross-references: each row may claim
//! one partner id, guardians show up once per veteran they are linked to, and
//! claims on the two sides need not agree. Groups are anchored on guardians:
//! a veteran whose claimed partner is a guardian on this flight joins that
//! guardian's group, no matter what the guardian itself claims.
//!
//! Output order is deterministic: guardian groups in the order each guardian
//! was first seen, then lone veterans in encounter order.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};

use crate::models::{PairRecord, PersonKind, PersonRecord, RosterEntry};

/// A deduplicated person plus every distinct partner id any of its rows claimed
#[derive(Debug)]
struct Slot {
    person: PersonRecord,
    /// Claim made by the first occurrence, used for grouping
    partner: String,
    claims: Vec<String>,
}

impl Slot {
    fn new(entry: &RosterEntry) -> Self {
        let mut slot = Self {
            person: entry.person.clone(),
            partner: entry.pairing.clone(),
            claims: Vec::new(),
        };
        slot.remember_claim(&entry.pairing);
        slot
    }

    fn remember_claim(&mut self, claim: &str) {
        if !claim.is_empty() && !self.claims.iter().any(|c| c == claim) {
            self.claims.push(claim.to_string());
        }
    }

    fn claims_missing_partner(&self, present_ids: &HashSet<&str>) -> bool {
        self.claims.iter().any(|c| !present_ids.contains(c.as_str()))
    }
}

/// Insertion-ordered, id-keyed collection of slots
#[derive(Debug, Default)]
struct SlotTable {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
}

impl SlotTable {
    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Add the entry's person on first sight; later sightings only add their claim
    fn absorb(&mut self, entry: &RosterEntry) {
        match self.index.get(&entry.person.id) {
            Some(&i) => {
                trace!(id = %entry.person.id, "Repeated row, keeping first occurrence");
                self.slots[i].remember_claim(&entry.pairing);
            }
            None => {
                self.index.insert(entry.person.id.clone(), self.slots.len());
                self.slots.push(Slot::new(entry));
            }
        }
    }
}

/// Rebuild the pair groups for one flight's roster entries.
///
/// Every distinct person id ends up in exactly one returned pair.
pub fn build_pairs(entries: &[RosterEntry]) -> Vec<PairRecord> {
    let present_ids: HashSet<&str> = entries.iter().map(|e| e.person.id.as_str()).collect();

    let mut guardians = SlotTable::default();
    let mut veterans = SlotTable::default();

    for entry in entries {
        let id = entry.person.id.as_str();
        match entry.person.kind() {
            PersonKind::Guardian if veterans.contains(id) => {
                warn!(id = %id, "Guardian row reuses a veteran id, skipping");
            }
            PersonKind::Veteran if guardians.contains(id) => {
                warn!(id = %id, "Veteran row reuses a guardian id, skipping");
            }
            PersonKind::Guardian => guardians.absorb(entry),
            PersonKind::Veteran => veterans.absorb(entry),
        }
    }

    // Veteran slot indices grouped under each guardian slot
    let mut grouped: Vec<Vec<usize>> = vec![Vec::new(); guardians.slots.len()];
    let mut unpaired: Vec<usize> = Vec::new();

    for (vi, veteran) in veterans.slots.iter().enumerate() {
        match guardians.position(&veteran.partner) {
            Some(gi) if !veteran.partner.is_empty() => {
                trace!(veteran = %veteran.person.id, guardian = %veteran.partner, "Grouped with guardian");
                grouped[gi].push(vi);
            }
            _ => unpaired.push(vi),
        }
    }

    let mut pairs = Vec::with_capacity(guardians.slots.len() + unpaired.len());

    for (guardian, members) in guardians.slots.iter().zip(&grouped) {
        let missing = guardian.claims_missing_partner(&present_ids)
            || members
                .iter()
                .any(|&vi| veterans.slots[vi].claims_missing_partner(&present_ids));

        let mut people: Vec<PersonRecord> = members
            .iter()
            .map(|&vi| veterans.slots[vi].person.clone())
            .collect();
        people.push(guardian.person.clone());

        pairs.push(PairRecord::new(guardian.person.id.clone(), people, missing));
    }

    for &vi in &unpaired {
        let veteran = &veterans.slots[vi];
        pairs.push(PairRecord::new(
            veteran.person.id.clone(),
            vec![veteran.person.clone()],
            veteran.claims_missing_partner(&present_ids),
        ));
    }

    debug!(
        entries = entries.len(),
        guardians = guardians.slots.len(),
        veterans = veterans.slots.len(),
        unpaired = unpaired.len(),
        "Built pairs"
    );

    pairs
}
