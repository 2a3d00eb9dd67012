//! Footprint calculation for a route given by city names.

use gs_api::ApiClient;
use gs_core::labels::{modal_label, two_decimals};
use gs_core::presentation::RouteView;
use gs_core::search::is_searchable;
use gs_core::{RouteRequest, RouteResult, SelectedCity};
use log::info;

/// Resolve both names, calculate, and print the distance and per-modal
/// footprint.
pub async fn run_calculate(api: &ApiClient, from: &str, to: &str) -> anyhow::Result<()> {
    let origin = resolve(api, from).await?;
    let destination = resolve(api, to).await?;
    info!("Calculating {} -> {}", origin.name, destination.name);

    let request = RouteRequest::between(&origin, &destination);
    let result = api.calculate_footprint(&request).await?;

    for line in report(&request, &result) {
        println!("{}", line);
    }
    Ok(())
}

/// First search match for `text`, committed the same way a dropdown
/// selection is.
async fn resolve(api: &ApiClient, text: &str) -> anyhow::Result<SelectedCity> {
    if !is_searchable(text) {
        anyhow::bail!("{:?} is too short to search for", text);
    }
    let cities = api.search_city(text).await?;
    match cities.first() {
        Some(city) => Ok(SelectedCity::from(city)),
        None => anyhow::bail!("no city matches {:?}", text),
    }
}

fn report(request: &RouteRequest, result: &RouteResult) -> Vec<String> {
    let view = RouteView::from_result(result);
    let mut lines = vec![
        format!("{} -> {}", request.origin_city, request.destination_city),
        format!(
            "Distance: {} km ({} route points)",
            two_decimals(view.distance_km),
            view.path.len()
        ),
    ];
    for entry in &result.footprint_analysis {
        lines.push(format!(
            "  {:<20} {:>12} kg CO2",
            modal_label(&entry.modal),
            two_decimals(entry.carbon_footprint_kg)
        ));
    }
    lines
}
