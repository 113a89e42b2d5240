// src/domain/encoder.rs

use crate::domain::listing::{ListingRequest, TransactionType};

/// Number of features the price model consumes.
pub const FEATURE_COUNT: usize = 5;

/// Column names in the order the model expects them.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "bedrooms",
    "transaction_type",
    "location_encoded",
    "title_encoded",
    "missing_feature",
];

/// Fixed-order feature vector handed to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub bedrooms: u8,
    pub transaction_flag: u8,
    pub location_index: usize,
    pub title_index: usize,
    pub reserved: f64,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.bedrooms),
            f64::from(self.transaction_flag),
            self.location_index as f64,
            self.title_index as f64,
            self.reserved,
        ]
    }
}

/// Maps a listing request onto the model's input columns.
/// `placeholder` fills the fifth column, which the model was trained with but
/// the form has no input for.
pub fn encode(req: &ListingRequest, placeholder: f64) -> FeatureVector {
    FeatureVector {
        bedrooms: req.bedrooms.get(),
        transaction_flag: match req.transaction_type {
            TransactionType::Rent => 1,
            TransactionType::Purchase => 0,
        },
        location_index: req.location.index(),
        title_index: req.title.index(),
        reserved: placeholder,
    }
}
