//! Calculation history dashboard.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use gs_core::history::{apply_clear, GroupedCalculation};
use gs_core::lifecycle::Lifecycle;
use gs_ui::components::{ErrorDisplay, HistoryCard, LoadingSpinner};
use gs_ui::js_bridge;
use gs_ui::state::AppState;

const LOAD_FAILED: &str = "Could not load history. Is the backend running?";
const CLEAR_PROMPT: &str = "Delete all saved calculations? This cannot be undone.";

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let mut history = use_signal(Lifecycle::<Vec<GroupedCalculation>>::default);

    let api = state.api.clone();
    let load = use_callback(move |()| {
        let Some(api) = api.clone() else {
            return;
        };
        let seq = history.write().begin();
        spawn(async move {
            let outcome = api.load_history().await.map_err(|e| {
                error!("Loading history failed: {}", e);
                LOAD_FAILED.to_string()
            });
            history.write().finish(seq, outcome);
        });
    });

    // Fetch once on mount
    use_effect(move || load.call(()));

    let api = state.api.clone();
    let on_clear = move |_| {
        let Some(api) = api.clone() else {
            return;
        };
        if !js_bridge::confirm(CLEAR_PROMPT) {
            return;
        }
        spawn(async move {
            let outcome = api.clear_calculations().await.map_err(|e| e.to_string());
            if outcome.is_ok() {
                info!("History cleared");
            }
            let alert = apply_clear(&mut history.write(), outcome);
            if let Some(alert) = alert {
                js_bridge::alert(alert);
            }
        });
    };

    let current = history.read();
    let has_entries = current.value().is_some_and(|groups| !groups.is_empty());

    let body = if let Some(message) = state.config_error.as_deref() {
        rsx! { ErrorDisplay { message: format!("Backend is not configured: {message}") } }
    } else if current.is_loading() {
        rsx! { LoadingSpinner { label: "Loading history...".to_string() } }
    } else if let Some(message) = current.error() {
        rsx! { ErrorDisplay { message: message.to_string(), on_retry: load } }
    } else if !has_entries {
        rsx! {
            div {
                class: "empty-state",
                style: "text-align: center; padding: 48px 16px; color: #888;",
                p { style: "font-size: 18px; margin: 0 0 8px 0;", "No calculations yet" }
                p { style: "margin: 0;", "Routes you calculate will show up here." }
            }
        }
    } else {
        let groups = current.value().cloned().unwrap_or_default();
        rsx! {
            div {
                class: "cards-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px;",
                for (index, group) in groups.into_iter().enumerate() {
                    HistoryCard { key: "{index}", group }
                }
            }
        }
    };
    drop(current);

    rsx! {
        div {
            class: "dashboard-header",
            style: "display: flex; justify-content: space-between; align-items: center; margin: 8px 0 24px 0;",
            h1 { style: "margin: 0; color: #0C3C01;", "Calculation history" }
            button {
                class: "clear-button",
                style: "padding: 8px 16px; border: 1px solid #C62828; border-radius: 4px; color: #C62828; background: #fff; cursor: pointer;",
                disabled: !has_entries,
                onclick: on_clear,
                "Clear history"
            }
        }
        {body}
    }
}
