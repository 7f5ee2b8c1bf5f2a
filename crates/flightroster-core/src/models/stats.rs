use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::bus::{Bus, Tour};

/// Distinct-person count for every bus code, `None` included.
///
/// Serializes as an object keyed by bus code in `Bus::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusCounts([usize; Bus::COUNT]);

impl BusCounts {
    pub fn get(&self, bus: Bus) -> usize {
        self.0[bus.index()]
    }

    pub fn set(&mut self, bus: Bus, count: usize) {
        self.0[bus.index()] = count;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bus, usize)> + '_ {
        Bus::ALL.iter().map(move |bus| (*bus, self.get(*bus)))
    }
}

impl Serialize for BusCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Bus::COUNT))?;
        for (bus, count) in self.iter() {
            map.serialize_entry(bus.as_str(), &count)?;
        }
        map.end()
    }
}

/// Distinct-person counts rolled up by tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TourCounts {
    #[serde(rename = "Alpha")]
    pub alpha: usize,
    #[serde(rename = "Bravo")]
    pub bravo: usize,
    #[serde(rename = "None")]
    pub none: usize,
}

impl TourCounts {
    /// Sum per-bus counts into their tours
    pub fn from_bus_counts(buses: &BusCounts) -> Self {
        let mut tours = Self::default();
        for (bus, count) in buses.iter() {
            match bus.tour() {
                Tour::Alpha => tours.alpha += count,
                Tour::Bravo => tours.bravo += count,
                Tour::None => tours.none += count,
            }
        }
        tours
    }

    pub fn total(&self) -> usize {
        self.alpha + self.bravo + self.none
    }
}

/// Occupancy tables for one flight.
///
/// `tours` counts everyone assigned; `flight` leaves out people marked nofly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FlightStats {
    pub buses: BusCounts,
    pub tours: TourCounts,
    pub flight: TourCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_counts_from_bus_counts() {
        let mut buses = BusCounts::default();
        buses.set(Bus::Alpha1, 2);
        buses.set(Bus::Alpha5, 3);
        buses.set(Bus::Bravo2, 4);
        buses.set(Bus::None, 1);

        let tours = TourCounts::from_bus_counts(&buses);
        assert_eq!(tours.alpha, 5);
        assert_eq!(tours.bravo, 4);
        assert_eq!(tours.none, 1);
        assert_eq!(tours.total(), buses.total());
    }

    #[test]
    fn test_bus_counts_serialize_every_code() {
        let mut buses = BusCounts::default();
        buses.set(Bus::Bravo3, 7);
        let value = serde_json::to_value(buses).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Bus::COUNT);
        assert_eq!(object["Bravo3"], 7);
        assert_eq!(object["None"], 0);
    }

    #[test]
    fn test_flight_stats_shape() {
        let value = serde_json::to_value(FlightStats::default()).unwrap();
        assert_eq!(value["tours"]["Alpha"], 0);
        assert_eq!(value["flight"]["None"], 0);
        assert!(value["buses"].is_object());
    }
}
