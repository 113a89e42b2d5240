pub mod encoder;
pub mod listing;
pub mod pricing;

pub use encoder::{encode, FEATURE_COUNT, FEATURE_NAMES};
pub use listing::{Bedrooms, ListingRequest, Location, Title, TransactionType};
pub use pricing::{Estimate, PricingRules};
