use serde::{Deserialize, Serialize};

/// Bus assignment. Anything outside this closed set normalizes to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Bus {
    #[default]
    None,
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Bravo1,
    Bravo2,
    Bravo3,
    Bravo4,
    Bravo5,
}

impl Bus {
    pub const COUNT: usize = 11;

    /// Every bus code, in reporting order
    pub const ALL: [Bus; Bus::COUNT] = [
        Bus::None,
        Bus::Alpha1,
        Bus::Alpha2,
        Bus::Alpha3,
        Bus::Alpha4,
        Bus::Alpha5,
        Bus::Bravo1,
        Bus::Bravo2,
        Bus::Bravo3,
        Bus::Bravo4,
        Bus::Bravo5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bus::None => "None",
            Bus::Alpha1 => "Alpha1",
            Bus::Alpha2 => "Alpha2",
            Bus::Alpha3 => "Alpha3",
            Bus::Alpha4 => "Alpha4",
            Bus::Alpha5 => "Alpha5",
            Bus::Bravo1 => "Bravo1",
            Bus::Bravo2 => "Bravo2",
            Bus::Bravo3 => "Bravo3",
            Bus::Bravo4 => "Bravo4",
            Bus::Bravo5 => "Bravo5",
        }
    }

    /// Exact, case-sensitive lookup of a bus code
    pub fn from_code(code: &str) -> Option<Bus> {
        Bus::ALL.iter().copied().find(|bus| bus.as_str() == code)
    }

    /// Position of this bus in `Bus::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn tour(&self) -> Tour {
        match self {
            Bus::None => Tour::None,
            Bus::Alpha1 | Bus::Alpha2 | Bus::Alpha3 | Bus::Alpha4 | Bus::Alpha5 => Tour::Alpha,
            Bus::Bravo1 | Bus::Bravo2 | Bus::Bravo3 | Bus::Bravo4 | Bus::Bravo5 => Tour::Bravo,
        }
    }
}

impl std::fmt::Display for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tour a bus belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tour {
    Alpha,
    Bravo,
    None,
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tour::Alpha => write!(f, "Alpha"),
            Tour::Bravo => write!(f, "Bravo"),
            Tour::None => write!(f, "None"),
        }
    }
}
