pub mod state;
pub mod store;
pub mod token;

pub use store::{SessionKey, SessionStore};

pub const SESSION_COOKIE: &str = "session";

/// Pull the session token out of a `Cookie` request header.
pub fn session_cookie(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

/// `Set-Cookie` value for a freshly minted session.
pub fn set_cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}
