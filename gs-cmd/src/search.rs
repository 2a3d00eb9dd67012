//! City lookup.

use gs_api::ApiClient;
use gs_core::search::is_searchable;
use gs_core::{City, MIN_QUERY_CHARS};
use log::info;

pub async fn run_search(api: &ApiClient, text: &str) -> anyhow::Result<()> {
    if !is_searchable(text) {
        anyhow::bail!("search text must be at least {} characters", MIN_QUERY_CHARS);
    }
    let cities = api.search_city(text).await?;
    info!("{} matches for {:?}", cities.len(), text);

    if cities.is_empty() {
        println!("No cities found");
    }
    for city in &cities {
        println!("{}", city_line(city));
    }
    Ok(())
}

pub(crate) fn city_line(city: &City) -> String {
    format!(
        "{}\t{:.5}\t{:.5}",
        city.name,
        city.coordinates.lat(),
        city.coordinates.lon()
    )
}
