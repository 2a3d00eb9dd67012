//! Route calculator page.

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use gs_core::lifecycle::Lifecycle;
use gs_core::{RouteRequest, RouteResult};
use gs_ui::components::{CalculatorForm, ErrorDisplay, LoadingSpinner, ResultsDisplay};
use gs_ui::state::AppState;

const CALCULATION_FAILED: &str = "Could not calculate the route. Please try again.";

#[component]
pub fn Calculator() -> Element {
    let state = use_context::<AppState>();
    let mut calculation = use_signal(Lifecycle::<RouteResult>::default);
    let mut in_flight: Signal<Option<Task>> = use_signal(|| None);

    let api = state.api.clone();
    let on_calculate = move |request: RouteRequest| {
        let Some(api) = api.clone() else {
            return;
        };
        let seq = calculation.write().begin();
        if let Some(previous) = in_flight.write().take() {
            previous.cancel();
        }
        let task = spawn(async move {
            info!(
                "Calculating {} -> {}",
                request.origin_city, request.destination_city
            );
            let outcome = api.calculate_footprint(&request).await.map_err(|e| {
                error!("Footprint calculation failed: {}", e);
                CALCULATION_FAILED.to_string()
            });
            calculation.write().finish(seq, outcome);
        });
        in_flight.set(Some(task));
    };

    let (loading, failure) = {
        let current = calculation.read();
        (current.is_loading(), current.error().map(str::to_string))
    };

    rsx! {
        if let Some(message) = state.config_error.clone() {
            ErrorDisplay { message: format!("Backend is not configured: {message}") }
        }
        CalculatorForm { on_calculate }
        if loading {
            LoadingSpinner { label: "Calculating...".to_string() }
        }
        if let Some(message) = failure {
            ErrorDisplay { message }
        }
        ResultsDisplay { calculation }
    }
}
