use crate::domain::listing::{MAX_BEDROOMS, MIN_BEDROOMS};
use crate::domain::{ListingRequest, Location, Title, TransactionType};
use maud::{html, Markup};

/// The four apartment selectors in two side-by-side rows, plus the predict
/// button. Every change posts the whole form to `/inputs` so the server can
/// drop a prediction that no longer matches.
pub fn listing_form(inputs: &ListingRequest) -> Markup {
    html! {
        form
            id="listing-form"
            method="post"
            action="/predict"
            hx-post="/predict"
            hx-target="#result-area"
            hx-swap="outerHTML"
        {
            div class="columns" {
                div {
                    label class="field" for="location" { "Location" }
                    select
                        id="location"
                        name="location"
                        hx-post="/inputs"
                        hx-trigger="change"
                        hx-target="#result-area"
                        hx-swap="outerHTML"
                    {
                        @for loc in Location::all() {
                            option value=(loc.label()) selected[loc == inputs.location] { (loc.label()) }
                        }
                    }
                }
                div {
                    span class="field" { "Transaction Type" }
                    div
                        class="radio-row"
                        hx-post="/inputs"
                        hx-trigger="change"
                        hx-target="#result-area"
                        hx-swap="outerHTML"
                    {
                        @for tx in TransactionType::ALL {
                            label {
                                input
                                    type="radio"
                                    name="transaction_type"
                                    value=(tx.label())
                                    checked[tx == inputs.transaction_type];
                                " " (tx.label())
                            }
                        }
                    }
                }
            }

            div class="columns" {
                div {
                    label class="field" for="bedrooms" { "Bedrooms" }
                    input
                        type="number"
                        id="bedrooms"
                        name="bedrooms"
                        min=(MIN_BEDROOMS)
                        max=(MAX_BEDROOMS)
                        step="1"
                        value=(inputs.bedrooms.get())
                        required
                        hx-post="/inputs"
                        hx-trigger="change"
                        hx-target="#result-area"
                        hx-swap="outerHTML";
                }
                div {
                    label class="field" for="title" { "Title" }
                    select
                        id="title"
                        name="title"
                        hx-post="/inputs"
                        hx-trigger="change"
                        hx-target="#result-area"
                        hx-swap="outerHTML"
                    {
                        @for title in Title::all() {
                            option value=(title.label()) selected[title == inputs.title] { (title.label()) }
                        }
                    }
                }
            }

            button type="submit" { "Predict Price" }
        }
    }
}
