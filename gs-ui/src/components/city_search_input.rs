//! Autocomplete field for one end of the route.

use crate::hooks::use_debounce;
use crate::state::AppState;
use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, info, warn};
use gs_core::form::{CalculatorForm, Endpoint};
use gs_core::search::SearchPhase;
use gs_core::SEARCH_DEBOUNCE_MS;

/// Text input with a debounced city lookup and a result dropdown.
///
/// Field state lives in the shared `form` signal; this component only keeps
/// the raw text signal that feeds the debounce and the handle of the lookup
/// task in flight.
#[component]
pub fn CitySearchInput(form: Signal<CalculatorForm>, endpoint: Endpoint) -> Element {
    let state = use_context::<AppState>();
    let mut text = use_signal(|| form.peek().field(endpoint).text().to_string());
    let debounced = use_debounce(text, SEARCH_DEBOUNCE_MS);
    let mut lookup: Signal<Option<Task>> = use_signal(|| None);

    // Issue a lookup whenever the debounced text settles.
    use_effect(move || {
        let settled = debounced();
        let Some(api) = state.api.clone() else {
            return;
        };
        let Some(query) = form.write().field_mut(endpoint).begin_query(&settled) else {
            return;
        };
        if let Some(previous) = lookup.write().take() {
            previous.cancel();
        }
        let task = spawn(async move {
            debug!("Searching cities for {:?} (#{})", query.text, query.seq);
            let outcome = api.search_city(&query.text).await.map_err(|e| {
                warn!("City search for {:?} failed: {}", query.text, e);
                e.to_string()
            });
            form.write().field_mut(endpoint).apply_results(query.seq, outcome);
        });
        lookup.set(Some(task));
    });

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        form.write().field_mut(endpoint).edit(value.clone());
        text.set(value);
    };

    let mut choose = move |index: usize| {
        let city = form.read().field(endpoint).results().get(index).cloned();
        if let Some(city) = city {
            let selected = form.write().field_mut(endpoint).select(&city);
            info!("Selected {:?} as {:?}", selected.name, endpoint);
            text.set(selected.name);
        }
    };

    let field = form.read().field(endpoint).clone();
    let searching = matches!(field.phase(), SearchPhase::Searching);
    let confirmed = field.is_confirmed();
    let border = if confirmed { "#5A8F4D" } else { "#ccc" };

    rsx! {
        div {
            class: "search-input-wrapper",
            style: "position: relative; flex: 1; min-width: 220px; z-index: 10;",
            input {
                r#type: "text",
                class: "search-input",
                placeholder: endpoint.placeholder(),
                value: "{field.text()}",
                autocomplete: "off",
                style: "width: 100%; box-sizing: border-box; padding: 10px 12px; border: 2px solid {border}; border-radius: 4px; font-size: 15px;",
                oninput: on_input,
                onfocus: move |_| form.write().focus(endpoint),
            }
            if searching {
                div {
                    style: "position: absolute; right: 10px; top: 11px; font-size: 12px; color: #888;",
                    "Searching..."
                }
            }
            if field.is_list_open() {
                ul {
                    class: "search-results",
                    style: "position: absolute; left: 0; right: 0; margin: 2px 0 0 0; padding: 0; list-style: none; background: #fff; border: 1px solid #ddd; border-radius: 4px; box-shadow: 0 4px 12px rgba(0,0,0,0.12); max-height: 260px; overflow-y: auto;",
                    if field.results().is_empty() {
                        li {
                            style: "padding: 8px 12px; color: #888; font-style: italic;",
                            "No cities found"
                        }
                    }
                    for (index, city) in field.results().iter().enumerate() {
                        li {
                            key: "{index}",
                            style: "padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #f0f0f0;",
                            onclick: move |_| choose(index),
                            "{city.name}"
                        }
                    }
                }
            }
        }
    }
}
