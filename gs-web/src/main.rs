//! GreenShift carbon footprint calculator.
//!
//! Two client-side routes share a header and footer:
//! - `/`: pick origin and destination, calculate, see the route on a
//!   Leaflet map and the per-modal footprint as a D3.js bar chart.
//! - `/dashboard`: past calculations grouped into route cards, with a
//!   confirmed clear-all.
//!
//! The backend base URL is taken from `GREENSHIFT_API_URL` at build time and
//! defaults to `http://localhost:8000`.

use dioxus::prelude::*;
use gs_api::DEFAULT_BASE_URL;
use gs_ui::js_bridge;
use gs_ui::state::AppState;

mod calculator;
mod dashboard;
mod layout;

use calculator::Calculator;
use dashboard::Dashboard;
use layout::Shell;

const API_BASE_URL: Option<&str> = option_env!("GREENSHIFT_API_URL");

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Calculator {},
        #[route("/dashboard")]
        Dashboard {},
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("greenshift-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppState::new(API_BASE_URL.unwrap_or(DEFAULT_BASE_URL)));

    // Load Leaflet, D3 and the chart scripts (one-time)
    use_effect(js_bridge::init_scripts);

    rsx! {
        Router::<Route> {}
    }
}
