use crate::domain::Estimate;
use crate::templates::components::alert_error;
use maud::{html, Markup};

/// Swappable area under the form: the current estimate, an inline error,
/// or nothing.
pub fn result_area(estimate: Option<&Estimate>, error: Option<&str>) -> Markup {
    html! {
        div id="result-area" {
            @if let Some(msg) = error {
                (alert_error(msg))
            }
            @if let Some(est) = estimate {
                div class="result-box" data-value=(est.displayed_value) {
                    p { (est.sentence) }
                }
            }
        }
    }
}
