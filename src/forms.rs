// src/forms.rs
use crate::domain::listing::{MAX_BEDROOMS, MIN_BEDROOMS};
use crate::domain::{Bedrooms, ListingRequest, Location, Title, TransactionType};
use crate::errors::ServerError;
use crate::feedback::FeedbackEntry;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

/// Upper bound on a form body; the largest form is a feedback comment.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Read and decode an `application/x-www-form-urlencoded` body.
pub fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| {
            debug!(error = %e, "Form body read failed");
            ServerError::BadRequest("could not read form body".into())
        })?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(parse_form(&buf))
}

pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    form.get(name)
        .map(|s| s.trim())
        .ok_or_else(|| ServerError::BadRequest(format!("missing field '{name}'")))
}

/// Build a listing request from the four form selectors.
pub fn listing_from_form(form: &HashMap<String, String>) -> Result<ListingRequest, ServerError> {
    let location = field(form, "location")?;
    let location = Location::from_label(location)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown location '{location}'")))?;

    let title = field(form, "title")?;
    let title = Title::from_label(title)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown title '{title}'")))?;

    let tx = field(form, "transaction_type")?;
    let transaction_type = TransactionType::from_label(tx)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown transaction type '{tx}'")))?;

    let bedrooms_raw = field(form, "bedrooms")?;
    let bedrooms = bedrooms_raw
        .parse::<u8>()
        .ok()
        .and_then(Bedrooms::new)
        .ok_or_else(|| {
            ServerError::BadRequest(format!(
                "bedrooms must be a whole number from {MIN_BEDROOMS} to {MAX_BEDROOMS}, got '{bedrooms_raw}'"
            ))
        })?;

    Ok(ListingRequest {
        location,
        title,
        bedrooms,
        transaction_type,
    })
}

/// Name and comment are free text; missing fields count as empty.
pub fn feedback_from_form(form: &HashMap<String, String>) -> FeedbackEntry {
    FeedbackEntry {
        name: form.get("name").cloned().unwrap_or_default(),
        comment: form.get("comment").cloned().unwrap_or_default(),
    }
}
