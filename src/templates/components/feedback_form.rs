use crate::templates::components::alert_success;
use maud::{html, Markup};

/// Sidebar block: welcome text plus the feedback form.
pub fn sidebar(feedback_sent: bool) -> Markup {
    html! {
        h2 { "Welcome to Lagos Apartment Pulse" }
        p {
            "Hi! Lagos Apartment Pulse is a web app where you can predict the estimated "
            "price of apartments in cities all over Lagos based on the features you want."
        }
        p { "This app is brought to you by St. Mark Adebayo." }
        p { "Did you find this app useful? Share your experience with a comment below:" }

        (feedback_form(feedback_sent))
    }
}

pub fn feedback_form(feedback_sent: bool) -> Markup {
    html! {
        div id="feedback" {
            form
                method="post"
                action="/feedback"
                hx-post="/feedback"
                hx-target="#feedback"
                hx-swap="outerHTML"
                hx-disabled-elt="button"
            {
                label class="field" for="name" { "Your Name" }
                input type="text" id="name" name="name" autocomplete="name";

                label class="field" for="comment" style="margin-top: 0.75rem;" { "Your Comment" }
                textarea id="comment" name="comment" rows="4" {}

                div style="margin-top: 0.75rem;" {
                    button type="submit" { "Send" }
                }
            }

            @if feedback_sent {
                (alert_success("Thank you for your feedback!"))
            }
        }
    }
}
