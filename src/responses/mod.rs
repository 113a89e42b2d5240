pub mod html;

pub use crate::errors::ResultResp;
pub use html::html_response;
