use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::session::set_cookie_header;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// 200 HTML response; `new_session` adds the `Set-Cookie` for a session
/// minted during this request.
pub fn html_response(markup: Markup, new_session: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref());

    if let Some(token) = new_session {
        builder = builder.header("Set-Cookie", set_cookie_header(token));
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}
