use crate::prediction::tests::FixedPredictor;
use crate::router::handle;
use crate::tests::utils::{body_string, get, issued_session, listing_form, post_form, test_app};
use std::sync::Arc;

const SENTENCE: &str = "A 2-bedroom Flat in Ikeja is estimated to be around ₦1,000,000.0 million/year.";

/// Start a session and make a successful prediction in it.
fn predicted_session(app: &crate::app::App) -> String {
    let form = listing_form("Ikeja", "Rent", 2, "Flat");
    let resp = handle(post_form("/predict", &form, None, true), app).unwrap();
    let token = issued_session(&resp).expect("predict should start a session");
    assert!(body_string(resp).contains(SENTENCE));
    token
}

#[test]
fn prediction_survives_reload_with_same_inputs() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(20_000_000.0))));
    let token = predicted_session(&app);

    let body = body_string(handle(get("/", Some(&token)), &app).unwrap());
    assert!(body.contains(SENTENCE));
    // the form re-renders with the inputs that were predicted
    assert!(body.contains(r#"<option value="Ikeja" selected>"#));
    assert!(body.contains(r#"<option value="Flat" selected>"#));
}

#[test]
fn unchanged_inputs_keep_prediction() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(20_000_000.0))));
    let token = predicted_session(&app);

    let form = listing_form("Ikeja", "Rent", 2, "Flat");
    let body = body_string(handle(post_form("/inputs", &form, Some(&token), true), &app).unwrap());
    assert!(body.contains(SENTENCE));
}

#[test]
fn changing_any_input_clears_prediction() {
    let changed = [
        listing_form("Yaba", "Rent", 2, "Flat"),
        listing_form("Ikeja", "Purchase", 2, "Flat"),
        listing_form("Ikeja", "Rent", 3, "Flat"),
        listing_form("Ikeja", "Rent", 2, "Duplex"),
    ];

    for form in changed {
        let app = test_app(Some(Arc::new(FixedPredictor::new(20_000_000.0))));
        let token = predicted_session(&app);

        let resp = handle(post_form("/inputs", &form, Some(&token), true), &app).unwrap();
        let body = body_string(resp);
        assert!(body.contains(r#"id="result-area""#));
        assert!(!body.contains(r#"class="result-box""#), "{form} should clear the result");

        let page = body_string(handle(get("/", Some(&token)), &app).unwrap());
        assert!(!page.contains(r#"class="result-box""#));
    }
}

#[test]
fn reverting_inputs_does_not_restore_prediction() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(20_000_000.0))));
    let token = predicted_session(&app);

    let other = listing_form("Ikeja", "Rent", 5, "Flat");
    handle(post_form("/inputs", &other, Some(&token), true), &app).unwrap();

    let original = listing_form("Ikeja", "Rent", 2, "Flat");
    let body = body_string(handle(post_form("/inputs", &original, Some(&token), true), &app).unwrap());
    assert!(!body.contains(r#"class="result-box""#));
}

#[test]
fn sessions_are_isolated() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(20_000_000.0))));
    let _mine = predicted_session(&app);

    let resp = handle(get("/", None), &app).unwrap();
    assert!(issued_session(&resp).is_some());
    assert!(!body_string(resp).contains(r#"class="result-box""#));
}
