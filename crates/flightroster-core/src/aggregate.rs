//! Occupancy statistics over finished pairs.
//!
//! Counts are of distinct person ids, never rows: a person listed in more
//! than one pair is counted once.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Bus, BusCounts, FlightStats, PairRecord, TourCounts};

/// Per-bus sets of distinct person ids
struct BusSets<'a>([HashSet<&'a str>; Bus::COUNT]);

impl<'a> BusSets<'a> {
    fn new() -> Self {
        Self(std::array::from_fn(|_| HashSet::new()))
    }

    fn insert(&mut self, bus: Bus, id: &'a str) {
        self.0[bus.index()].insert(id);
    }

    fn counts(&self) -> BusCounts {
        let mut counts = BusCounts::default();
        for bus in Bus::ALL {
            counts.set(bus, self.0[bus.index()].len());
        }
        counts
    }
}

pub fn aggregate(pairs: &[PairRecord]) -> FlightStats {
    let mut assigned = BusSets::new();
    let mut flying = BusSets::new();

    for person in pairs.iter().flat_map(|pair| pair.people.iter()) {
        assigned.insert(person.bus, person.id.as_str());
        if !person.nofly {
            flying.insert(person.bus, person.id.as_str());
        }
    }

    let buses = assigned.counts();
    let stats = FlightStats {
        buses,
        tours: TourCounts::from_bus_counts(&buses),
        flight: TourCounts::from_bus_counts(&flying.counts()),
    };

    debug!(
        pairs = pairs.len(),
        assigned = stats.tours.total(),
        flying = stats.flight.total(),
        "Aggregated flight stats"
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonDetails, PersonRecord};

    fn person(id: &str, bus: Bus, nofly: bool) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            name_first: String::new(),
            name_last: String::new(),
            city: String::new(),
            seat: String::new(),
            shirt: String::new(),
            bus,
            nofly,
            confirmed: true,
            details: PersonDetails::Veteran {
                med_limits: String::new(),
                group: String::new(),
            },
        }
    }

    #[test]
    fn test_aggregate_counts_by_bus_and_tour() {
        let pairs = vec![
            PairRecord::new("g1", vec![person("v1", Bus::Alpha1, false), person("g1", Bus::Alpha1, false)], false),
            PairRecord::new("v2", vec![person("v2", Bus::Bravo3, false)], false),
            PairRecord::new("v3", vec![person("v3", Bus::None, false)], false),
        ];
        let stats = aggregate(&pairs);
        assert_eq!(stats.buses.get(Bus::Alpha1), 2);
        assert_eq!(stats.buses.get(Bus::Bravo3), 1);
        assert_eq!(stats.buses.get(Bus::None), 1);
        assert_eq!(stats.tours, TourCounts { alpha: 2, bravo: 1, none: 1 });
        assert_eq!(stats.flight, stats.tours);
    }

    #[test]
    fn test_aggregate_excludes_nofly_from_flight() {
        let pairs = vec![
            PairRecord::new("v1", vec![person("v1", Bus::Alpha1, false)], false),
            PairRecord::new("v2", vec![person("v2", Bus::Alpha1, true)], false),
        ];
        let stats = aggregate(&pairs);
        assert_eq!(stats.tours.alpha, 2);
        assert_eq!(stats.flight.alpha, 1);
    }

    #[test]
    fn test_aggregate_deduplicates_across_pairs() {
        let shared = person("g1", Bus::Bravo1, false);
        let pairs = vec![
            PairRecord::new("a", vec![person("v1", Bus::Bravo1, false), shared.clone()], false),
            PairRecord::new("b", vec![person("v2", Bus::Bravo1, false), shared], false),
        ];
        let stats = aggregate(&pairs);
        assert_eq!(stats.buses.get(Bus::Bravo1), 3);
        assert_eq!(stats.tours.bravo, 3);
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), FlightStats::default());
    }
}
