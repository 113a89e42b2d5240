use crate::app::App;
use crate::domain::Estimate;
use crate::errors::ServerError;
use crate::feedback::append_feedback;
use crate::forms::{feedback_from_form, listing_from_form, read_form};
use crate::prediction::PredictError;
use crate::responses::{html_response, ResultResp};
use crate::session::{session_cookie, SessionKey};
use crate::templates;
use crate::templates::components::{feedback_form, result_area};
use crate::templates::pages::HomeVm;
use astra::Request;
use chrono::Utc;
use maud::Markup;
use tracing::{debug, error, info, warn};

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let now = Utc::now().timestamp();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, app, now),
        ("POST", "/predict") => predict(&mut req, app, now),
        ("POST", "/inputs") => inputs_changed(&mut req, app, now),
        ("POST", "/feedback") => feedback(&mut req, app, now),
        _ => Err(ServerError::NotFound),
    }
}

fn resolve_session(req: &Request, app: &App, now: i64) -> SessionKey {
    let cookie = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_cookie);
    let key = app.sessions.resolve(cookie, now);
    if key.is_new {
        info!(active = app.sessions.len(), "New visitor session");
    }
    key
}

/// htmx marks its requests; those get a fragment instead of a full page.
fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn respond(markup: Markup, key: &SessionKey) -> ResultResp {
    html_response(markup, key.is_new.then_some(key.token.as_str()))
}

struct PageState<'a> {
    estimate: Option<Estimate>,
    predict_error: Option<&'a str>,
    feedback_sent: bool,
}

fn full_page(app: &App, key: &SessionKey, now: i64, page: PageState) -> ResultResp {
    let inputs = app.sessions.with_session(key, now, |s| s.inputs);

    let vm = HomeVm {
        inputs,
        estimate: page.estimate.as_ref(),
        predict_error: page.predict_error,
        model_error: app.model_error(),
        feedback_sent: page.feedback_sent,
    };
    respond(templates::pages::home_page(&vm), key)
}

fn home(req: &Request, app: &App, now: i64) -> ResultResp {
    let key = resolve_session(req, app, now);
    let estimate = app
        .sessions
        .with_session(&key, now, |s| s.current_estimate().cloned());

    full_page(
        app,
        &key,
        now,
        PageState {
            estimate,
            predict_error: None,
            feedback_sent: false,
        },
    )
}

fn predict(req: &mut Request, app: &App, now: i64) -> ResultResp {
    let key = resolve_session(req, app, now);
    let form = read_form(req)?;
    let listing = listing_from_form(&form)?;

    app.sessions.with_session(&key, now, |s| s.observe(listing));

    // Model runs outside the session lock.
    let outcome = app.estimator.estimate(app.model(), listing);

    let (estimate, predict_error) = match outcome {
        Ok(estimate) => {
            info!(
                location = listing.location.label(),
                title = listing.title.label(),
                bedrooms = listing.bedrooms.get(),
                transaction = listing.transaction_type.label(),
                raw_price = estimate.raw_price,
                shown = %estimate.formatted,
                "Prediction made"
            );
            app.sessions
                .with_session(&key, now, |s| s.record_prediction(estimate.clone()));
            (Some(estimate), None)
        }
        Err(e) => {
            match &e {
                PredictError::ModelUnavailable => warn!("Predict requested without a model"),
                PredictError::Value(err) => warn!(error = %err, "Model rejected input"),
            }
            (None, Some(e.to_string()))
        }
    };

    if is_htmx(req) {
        return respond(result_area(estimate.as_ref(), predict_error.as_deref()), &key);
    }

    full_page(
        app,
        &key,
        now,
        PageState {
            estimate,
            predict_error: predict_error.as_deref(),
            feedback_sent: false,
        },
    )
}

/// Change notification from the form: dirty-check and re-render the result
/// area.
fn inputs_changed(req: &mut Request, app: &App, now: i64) -> ResultResp {
    let key = resolve_session(req, app, now);
    let form = read_form(req)?;
    let listing = listing_from_form(&form)?;

    let estimate = app.sessions.with_session(&key, now, |s| {
        if s.observe(listing) {
            debug!("Inputs changed, prediction cleared");
        }
        s.current_estimate().cloned()
    });

    respond(result_area(estimate.as_ref(), None), &key)
}

fn feedback(req: &mut Request, app: &App, now: i64) -> ResultResp {
    let key = resolve_session(req, app, now);
    let form = read_form(req)?;
    let entry = feedback_from_form(&form);

    append_feedback(&app.feedback_path, &entry).map_err(|e| {
        error!(path = %app.feedback_path.display(), error = %e, "Feedback write failed");
        ServerError::Io(e)
    })?;
    info!(name = %entry.name, "Feedback saved");

    if is_htmx(req) {
        return respond(feedback_form(true), &key);
    }

    let estimate = app
        .sessions
        .with_session(&key, now, |s| s.current_estimate().cloned());

    full_page(
        app,
        &key,
        now,
        PageState {
            estimate,
            predict_error: None,
            feedback_sent: true,
        },
    )
}
