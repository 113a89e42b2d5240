// src/domain/pricing.rs

use crate::domain::listing::{ListingRequest, TransactionType};

/// Tunables for turning a raw model output into a displayed price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    /// Raw model output is divided by this for rent listings.
    pub rent_divisor: f64,
    pub currency_symbol: String,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            rent_divisor: 20.0,
            currency_symbol: "₦".to_string(),
        }
    }
}

/// A priced listing, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub request: ListingRequest,
    pub raw_price: f64,
    pub displayed_value: f64,
    /// `displayed_value` with thousands separators and one decimal.
    pub formatted: String,
    pub sentence: String,
}

impl PricingRules {
    fn scaled(&self, raw_price: f64, tx: TransactionType) -> f64 {
        match tx {
            TransactionType::Rent => raw_price / self.rent_divisor,
            TransactionType::Purchase => raw_price,
        }
    }

    /// Value shown to the user: rent is scaled by `rent_divisor`, both are
    /// rounded to one decimal.
    ///
    /// `{:.1}` does the rounding: nearest to the exact binary value, ties to
    /// even.
    pub fn displayed_value(&self, raw_price: f64, tx: TransactionType) -> f64 {
        let value = self.scaled(raw_price, tx);
        format!("{value:.1}").parse().unwrap_or(value)
    }

    pub fn estimate(&self, request: ListingRequest, raw_price: f64) -> Estimate {
        let displayed_value = self.displayed_value(raw_price, request.transaction_type);
        let formatted = format_thousands(self.scaled(raw_price, request.transaction_type));
        let sentence = self.sentence(&request, &formatted);

        Estimate {
            request,
            raw_price,
            displayed_value,
            formatted,
            sentence,
        }
    }

    fn sentence(&self, req: &ListingRequest, formatted: &str) -> String {
        let bedrooms = req.bedrooms.get();
        let title = req.title.label();
        let location = req.location.label();
        let sym = &self.currency_symbol;

        match req.transaction_type {
            TransactionType::Rent => format!(
                "A {bedrooms}-bedroom {title} in {location} is estimated to be around {sym}{formatted} million/year."
            ),
            TransactionType::Purchase => format!(
                "A {bedrooms}-bedroom {title} in {location} is estimated to be around {sym}{formatted} million."
            ),
        }
    }
}

/// Formats with one decimal and comma thousands separators, e.g. `45,000,000.0`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.1}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.0" reads oddly; only sign values that survive rounding.
    let sign = if value < 0.0 && fixed != "0.0" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
