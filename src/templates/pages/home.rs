// templates/pages/home.rs

use crate::domain::{Estimate, ListingRequest};
use crate::templates::{
    components::{alert_error, listing_form, result_area, sidebar},
    desktop_layout,
};
use maud::{html, Markup};

pub const APP_TITLE: &str = "Lagos Apartment Pulse";

pub struct HomeVm<'a> {
    pub inputs: ListingRequest,
    pub estimate: Option<&'a Estimate>,
    /// Inline error from the last predict attempt.
    pub predict_error: Option<&'a str>,
    /// Startup model failure, repeated on every render.
    pub model_error: Option<&'a str>,
    pub feedback_sent: bool,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        APP_TITLE,
        sidebar(vm.feedback_sent),
        html! {
            @if let Some(err) = vm.model_error {
                (alert_error(&format!("Model unavailable: {err}")))
            }

            (listing_form(&vm.inputs))

            (result_area(vm.estimate, vm.predict_error))
        },
    )
}
