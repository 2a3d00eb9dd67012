//! Origin/destination form with the calculate button.

use super::CitySearchInput;
use dioxus::prelude::*;
use gs_core::form::{CalculatorForm as FormState, Endpoint};
use gs_core::RouteRequest;

#[derive(Props, Clone, PartialEq)]
pub struct CalculatorFormProps {
    /// Called with the route once both sides are confirmed and the user submits
    pub on_calculate: EventHandler<RouteRequest>,
}

/// Two independent city searches and a submit button that is only enabled
/// while both hold a confirmed city.
#[component]
pub fn CalculatorForm(props: CalculatorFormProps) -> Element {
    let mut form = use_signal(FormState::new);

    let can_submit = form.read().can_submit();
    let any_list_open = {
        let form = form.read();
        form.field(Endpoint::Origin).is_list_open()
            || form.field(Endpoint::Destination).is_list_open()
    };

    let on_submit = move |_| {
        if let Some(request) = form.read().submission() {
            props.on_calculate.call(request);
        }
    };

    rsx! {
        section {
            class: "hero-section",
            style: "text-align: center; padding: 32px 16px; background: #F1F8E9; border-radius: 8px;",
            h1 {
                style: "margin: 0 0 8px 0; color: #0C3C01;",
                "Measure the Environmental Impact of Your Deliveries"
            }
            p {
                style: "margin: 0 0 24px 0; color: #555;",
                "Turn logistics data into a sustainability asset."
            }

            // Clicking anywhere outside the fields closes open dropdowns.
            if any_list_open {
                div {
                    style: "position: fixed; inset: 0; z-index: 5;",
                    onclick: move |_| form.write().dismiss_lists(),
                }
            }

            div {
                class: "form-container",
                style: "display: flex; gap: 12px; flex-wrap: wrap; justify-content: center; align-items: flex-start; max-width: 900px; margin: 0 auto;",
                CitySearchInput { form, endpoint: Endpoint::Origin }
                CitySearchInput { form, endpoint: Endpoint::Destination }
                button {
                    class: "calculate-button",
                    style: "padding: 10px 24px; font-size: 15px; border: none; border-radius: 4px; color: #fff; background: #0C3C01; cursor: pointer;",
                    disabled: !can_submit,
                    onclick: on_submit,
                    "Calculate"
                }
            }
        }
    }
}
