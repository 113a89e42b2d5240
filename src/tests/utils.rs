use crate::app::App;
use crate::model::{ModelError, ModelHandle};
use crate::prediction::PriceEstimator;
use crate::session::SessionStore;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique path under the system temp dir.
pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}_{}.txt",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

/// App with the given model (or none) and a throwaway feedback file.
pub fn test_app(model: Option<ModelHandle>) -> App {
    test_app_with_feedback(model, temp_path("feedback"))
}

pub fn test_app_with_feedback(model: Option<ModelHandle>, feedback_path: PathBuf) -> App {
    let model = model.ok_or_else(|| ModelError::NotFound(PathBuf::from("./lagos_pred_model.json")));
    App::new(
        model,
        PriceEstimator::default(),
        feedback_path,
        SessionStore::new(3600, 1000),
    )
}

pub fn get(uri: &str, session: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, session: Option<&str>, htmx: bool) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("theme=dark; session={token}"));
    }
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn listing_form(location: &str, tx: &str, bedrooms: u8, title: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("location", location)
        .append_pair("transaction_type", tx)
        .append_pair("bedrooms", &bedrooms.to_string())
        .append_pair("title", title)
        .finish()
}

/// Session token from a `Set-Cookie` header, if one was issued.
pub fn issued_session(resp: &Response) -> Option<String> {
    let raw = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    let first = raw.split(';').next()?;
    first.strip_prefix("session=").map(str::to_string)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
