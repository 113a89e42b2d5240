use crate::errors::ServerError;
use crate::model::ModelHandle;
use crate::prediction::tests::{FixedPredictor, RejectingPredictor};
use crate::router::handle;
use crate::tests::utils::{body_string, listing_form, post_form, test_app};
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[test]
fn rent_prediction_is_encoded_and_divided() {
    let model = Arc::new(FixedPredictor::new(20_000_000.0));
    let app = test_app(Some(model.clone() as ModelHandle));

    let form = listing_form("Ikeja", "Rent", 2, "Flat");
    let resp = handle(post_form("/predict", &form, None, false), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(
        "A 2-bedroom Flat in Ikeja is estimated to be around ₦1,000,000.0 million/year."
    ));
    assert!(body.contains(r#"class="result-box""#));

    let row = model.last_row.lock().unwrap().clone().unwrap();
    assert_eq!(row, vec![2.0, 1.0, 7.0, 3.0, 0.0]);
}

#[test]
fn purchase_prediction_is_not_divided() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(45_000_000.0))));

    let form = listing_form("Lekki", "Purchase", 4, "Detached Duplex");
    let body = body_string(handle(post_form("/predict", &form, None, false), &app).unwrap());

    assert!(body.contains(
        "A 4-bedroom Detached Duplex in Lekki is estimated to be around ₦45,000,000.0 million."
    ));
}

#[test]
fn predict_without_model_reports_unavailable() {
    let app = test_app(None);

    let form = listing_form("Ikeja", "Rent", 2, "Flat");
    let resp = handle(post_form("/predict", &form, None, true), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Model is not loaded. Please upload the model file."));
    assert!(!body.contains(r#"class="result-box""#));
}

#[test]
fn model_value_error_is_shown_inline() {
    let app = test_app(Some(Arc::new(RejectingPredictor)));

    let form = listing_form("Yaba", "Purchase", 1, "House");
    let resp = handle(post_form("/predict", &form, None, true), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("An error occurred: expected 4 features, got 5"));
    assert!(!body.contains(r#"class="result-box""#));
}

#[test]
fn htmx_predict_returns_result_fragment() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(45_000_000.0))));

    let form = listing_form("Ikoyi", "Purchase", 3, "Penthouse Apartment");
    let body = body_string(handle(post_form("/predict", &form, None, true), &app).unwrap());

    assert!(body.contains(r#"id="result-area""#));
    assert!(body.contains("₦45,000,000.0"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn same_inputs_give_same_output() {
    let model = Arc::new(FixedPredictor::new(7_500_000.0));
    let app = test_app(Some(model.clone() as ModelHandle));
    let form = listing_form("Surulere", "Rent", 3, "Mini Flat");

    let a = body_string(handle(post_form("/predict", &form, None, true), &app).unwrap());
    let b = body_string(handle(post_form("/predict", &form, None, true), &app).unwrap());

    assert_eq!(a, b);
    assert_eq!(model.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn out_of_range_bedrooms_is_bad_request() {
    let model = Arc::new(FixedPredictor::new(1.0));
    let app = test_app(Some(model.clone() as ModelHandle));

    let form = "location=Ikeja&transaction_type=Rent&bedrooms=11&title=Flat";
    match handle(post_form("/predict", form, None, false), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("bedrooms")),
        other => panic!("expected BadRequest, got status {:?}", other.map(|r| r.status())),
    }
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unknown_location_is_bad_request() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(1.0))));

    let form = listing_form("Abuja", "Rent", 2, "Flat");
    assert!(matches!(
        handle(post_form("/predict", &form, None, false), &app),
        Err(ServerError::BadRequest(_))
    ));
}
