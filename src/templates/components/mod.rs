use maud::{html, Markup};

pub mod error;
pub mod feedback_form;
pub mod listing_form;
pub mod result_panel;

pub use error::html_error_response;
pub use feedback_form::{feedback_form, sidebar};
pub use listing_form::listing_form;
pub use result_panel::result_area;

pub fn alert_error(message: &str) -> Markup {
    html! {
        div class="alert alert-error" role="alert" { (message) }
    }
}

pub fn alert_success(message: &str) -> Markup {
    html! {
        div class="alert alert-success" role="status" { (message) }
    }
}
