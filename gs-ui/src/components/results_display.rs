//! Route map and footprint chart for the current calculation.

use super::ChartContainer;
use crate::js_bridge;
use dioxus::prelude::*;
use gs_core::labels::two_decimals;
use gs_core::lifecycle::Lifecycle;
use gs_core::presentation::RouteView;
use gs_core::RouteResult;

/// DOM id for the Leaflet map container.
const MAP_CONTAINER_ID: &str = "route-map";
/// DOM id for the D3 chart container.
const CHART_CONTAINER_ID: &str = "footprint-chart";

const ROUTE_COLOR: &str = "#0C3C01";
const BAR_COLOR: &str = "#5A8F4D";
const MAP_ZOOM: u8 = 8;
const ROUTE_WEIGHT: u8 = 5;

/// Renders the result held by `calculation`, if any.
///
/// The map and chart are redrawn whenever the calculation signal changes;
/// nothing is drawn while it holds no value.
#[component]
pub fn ResultsDisplay(calculation: Signal<Lifecycle<RouteResult>>) -> Element {
    use_effect(move || {
        let Some(result) = calculation.read().value().cloned() else {
            js_bridge::destroy_route_map(MAP_CONTAINER_ID);
            return;
        };
        let view = RouteView::from_result(&result);

        let path_json = serde_json::to_string(&view.path).unwrap_or_else(|_| "[]".to_string());
        let map_config = serde_json::json!({
            "center": view.center,
            "zoom": MAP_ZOOM,
            "color": ROUTE_COLOR,
            "weight": ROUTE_WEIGHT,
        })
        .to_string();
        js_bridge::render_route_map(MAP_CONTAINER_ID, &path_json, &map_config);

        let bars_json = serde_json::to_string(&view.bars).unwrap_or_else(|_| "[]".to_string());
        let chart_config = serde_json::json!({
            "yAxisLabel": "Carbon footprint (kg CO₂)",
            "color": BAR_COLOR,
        })
        .to_string();
        js_bridge::render_footprint_chart(CHART_CONTAINER_ID, &bars_json, &chart_config);
    });

    let summary = calculation
        .read()
        .value()
        .map(|result| (result.distance_km, result.footprint_analysis.len()));
    let Some((distance, modals)) = summary else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "results-section",
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 24px; margin-top: 24px;",
            div {
                class: "map-container",
                PanelHeading {
                    title: "Route".to_string(),
                    caption: "Road path between the selected cities".to_string(),
                }
                ChartContainer { id: MAP_CONTAINER_ID.to_string(), min_height: 400 }
            }
            div {
                class: "chart-container",
                PanelHeading {
                    title: format!("Emissions analysis for {} km", two_decimals(distance)),
                    caption: format!("kg CO₂ for each of {modals} transport modals"),
                }
                ChartContainer { id: CHART_CONTAINER_ID.to_string(), min_height: 360 }
            }
        }
    }
}

#[component]
fn PanelHeading(title: String, caption: String) -> Element {
    rsx! {
        header {
            style: "margin-bottom: 8px; border-left: 4px solid {BAR_COLOR}; padding-left: 8px;",
            h3 { style: "margin: 0; font-size: 16px; color: {ROUTE_COLOR};", "{title}" }
            small { style: "color: #666;", "{caption}" }
        }
    }
}
