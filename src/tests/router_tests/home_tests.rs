use crate::domain::listing::{LOCATIONS, TITLES};
use crate::errors::ServerError;
use crate::prediction::tests::FixedPredictor;
use crate::router::handle;
use crate::tests::utils::{body_string, get, issued_session, test_app};
use std::sync::Arc;

#[test]
fn home_page_renders_form_and_sidebar() {
    let app = test_app(Some(Arc::new(FixedPredictor::new(1.0))));

    let resp = handle(get("/", None), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(issued_session(&resp).is_some(), "first visit should get a session");

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Lagos Apartment Pulse"));
    assert!(body.contains("Welcome to Lagos Apartment Pulse"));
    assert!(body.contains("Predict Price"));
    assert!(body.contains("Your Comment"));
    for label in LOCATIONS.iter().chain(TITLES.iter()) {
        assert!(body.contains(label), "missing option {label}");
    }
    assert!(!body.contains("Model unavailable"));
    assert!(!body.contains(r#"class="result-box""#));
}

#[test]
fn home_page_defaults_to_first_options_and_one_bedroom() {
    let app = test_app(None);
    let body = body_string(handle(get("/", None), &app).unwrap());

    assert!(body.contains(r#"<option value="Abule Egba" selected>"#));
    assert!(body.contains(r#"<option value="Duplex" selected>"#));
    assert!(body.contains(r#"value="Rent" checked"#));
    assert!(body.contains(r#"value="1""#));
}

#[test]
fn missing_model_shows_banner_on_every_page() {
    let app = test_app(None);

    let body = body_string(handle(get("/", None), &app).unwrap());
    assert!(body.contains("Model unavailable"));
    assert!(body.contains("lagos_pred_model.json"));
}

#[test]
fn returning_visitor_keeps_session() {
    let app = test_app(None);

    let first = handle(get("/", None), &app).unwrap();
    let token = issued_session(&first).unwrap();

    let second = handle(get("/", Some(&token)), &app).unwrap();
    assert_eq!(second.status(), 200);
    assert!(issued_session(&second).is_none());
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(None);

    match handle(get("/admin", None), &app) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got status {:?}", other.map(|r| r.status())),
    }
}
