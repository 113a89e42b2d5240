// src/domain/listing.rs

/// Ordered location table. A location's position is its feature code, so the
/// order must match the order the model was trained with.
pub const LOCATIONS: [&str; 19] = [
    "Abule Egba",
    "Agege",
    "Ajah",
    "Ajao Estate",
    "Alimosho",
    "Apapa",
    "Gbagada",
    "Ikeja",
    "Ikoyi",
    "Ipaja",
    "Lekki",
    "Ojo",
    "Ogba",
    "Oshodi",
    "Shomolu",
    "Sangotedo",
    "Surulere",
    "Victoria Island",
    "Yaba",
];

/// Ordered title table, same contract as `LOCATIONS`.
pub const TITLES: [&str; 15] = [
    "Duplex",
    "Detached Duplex",
    "Semi Detached Duplex",
    "Flat",
    "Mini Flat",
    "Apartment",
    "Self Con",
    "Terrace",
    "Terrace Duplex Detached",
    "Room And Parlour",
    "Penthouse Apartment",
    "Studio Apartment",
    "Maisonette",
    "House",
    "Terrace Duplex",
];

pub const MIN_BEDROOMS: u8 = 0;
pub const MAX_BEDROOMS: u8 = 10;
pub const DEFAULT_BEDROOMS: u8 = 1;

/// A location, stored as its index into `LOCATIONS`.
/// Only constructible from a label in that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location(usize);

impl Location {
    pub fn from_label(label: &str) -> Option<Self> {
        LOCATIONS.iter().position(|l| *l == label).map(Location)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> &'static str {
        LOCATIONS[self.0]
    }

    pub fn all() -> impl Iterator<Item = Location> {
        (0..LOCATIONS.len()).map(Location)
    }
}

impl Default for Location {
    fn default() -> Self {
        Location(0)
    }
}

/// A property title (apartment type), stored as its index into `TITLES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Title(usize);

impl Title {
    pub fn from_label(label: &str) -> Option<Self> {
        TITLES.iter().position(|t| *t == label).map(Title)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> &'static str {
        TITLES[self.0]
    }

    pub fn all() -> impl Iterator<Item = Title> {
        (0..TITLES.len()).map(Title)
    }
}

impl Default for Title {
    fn default() -> Self {
        Title(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionType {
    #[default]
    Rent,
    Purchase,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Rent, TransactionType::Purchase];

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Rent => "Rent",
            TransactionType::Purchase => "Purchase",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Rent" => Some(TransactionType::Rent),
            "Purchase" => Some(TransactionType::Purchase),
            _ => None,
        }
    }
}

/// Bedroom count, guaranteed to be within `MIN_BEDROOMS..=MAX_BEDROOMS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bedrooms(u8);

impl Bedrooms {
    pub fn new(count: u8) -> Option<Self> {
        (MIN_BEDROOMS..=MAX_BEDROOMS)
            .contains(&count)
            .then_some(Bedrooms(count))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Bedrooms {
    fn default() -> Self {
        Bedrooms(DEFAULT_BEDROOMS)
    }
}

/// The four form inputs describing the apartment to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListingRequest {
    pub location: Location,
    pub title: Title,
    pub bedrooms: Bedrooms,
    pub transaction_type: TransactionType,
}
