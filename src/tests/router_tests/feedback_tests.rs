use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, post_form, temp_path, test_app_with_feedback};
use std::fs;

#[test]
fn feedback_is_appended_to_file() {
    let path = temp_path("feedback_ok");
    let app = test_app_with_feedback(None, path.clone());

    let resp = handle(
        post_form("/feedback", "name=Ada+L&comment=Great+app%0Avery+quick", None, false),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you for your feedback!"));

    handle(post_form("/feedback", "name=Bo&comment=ok", None, false), &app).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "Name: Ada L\nComment: Great app\nvery quick\n\nName: Bo\nComment: ok\n\n"
    );

    fs::remove_file(&path).ok();
}

#[test]
fn htmx_feedback_returns_form_fragment() {
    let path = temp_path("feedback_htmx");
    let app = test_app_with_feedback(None, path.clone());

    let body = body_string(
        handle(post_form("/feedback", "name=A&comment=B", None, true), &app).unwrap(),
    );

    assert!(body.contains(r#"id="feedback""#));
    assert!(body.contains("Thank you for your feedback!"));
    assert!(!body.contains("<html"));

    fs::remove_file(&path).ok();
}

#[test]
fn unwritable_feedback_file_is_a_server_error() {
    let path = temp_path("feedback_dir").join("missing").join("feedback.txt");
    let app = test_app_with_feedback(None, path);

    match handle(post_form("/feedback", "name=A&comment=B", None, false), &app) {
        Err(err @ ServerError::Io(_)) => assert_eq!(err.status(), 500),
        other => panic!("expected Io error, got status {:?}", other.map(|r| r.status())),
    }
}
