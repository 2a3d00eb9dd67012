//! Typed calls for the four backend endpoints.

use crate::config::ApiConfig;
use crate::error::{detail_from_body, Result};
use crate::ApiError;
use gs_core::history::{group_calculations, GroupedCalculation};
use gs_core::search::is_searchable;
use gs_core::{CalculationRecord, City, RouteRequest, RouteResult};
use log::{debug, info};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

const SEARCH_CITY: &str = "search-city";
const CALCULATE_FOOTPRINT: &str = "calculate-footprint";
const CALCULATIONS: &str = "calculations";

/// Cheaply cloneable handle to the backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /search-city?q=<text>` with the text form-encoded.
    pub fn search_url(&self, text: &str) -> Result<Url> {
        let mut url = self.config.endpoint(SEARCH_CITY)?;
        url.query_pairs_mut().append_pair("q", text);
        Ok(url)
    }

    /// Look up cities matching `text`.
    ///
    /// Text shorter than three characters is answered locally with no match
    /// and never reaches the backend.
    pub async fn search_city(&self, text: &str) -> Result<Vec<City>> {
        if !is_searchable(text) {
            return Ok(Vec::new());
        }
        let url = self.search_url(text)?;
        debug!("GET {}", url);
        let cities: Vec<City> = decode(self.http.get(url).send().await?).await?;
        debug!("search {:?} returned {} cities", text, cities.len());
        Ok(cities)
    }

    /// `POST /calculate-footprint`.
    pub async fn calculate_footprint(&self, request: &RouteRequest) -> Result<RouteResult> {
        let url = self.config.endpoint(CALCULATE_FOOTPRINT)?;
        info!(
            "Calculating footprint {} -> {}",
            request.origin_city, request.destination_city
        );
        let result: RouteResult = decode(self.http.post(url).json(request).send().await?).await?;
        info!(
            "Route is {} km with {} modals",
            result.distance_km,
            result.footprint_analysis.len()
        );
        Ok(result)
    }

    /// `GET /calculations`, in backend order.
    pub async fn list_calculations(&self) -> Result<Vec<CalculationRecord>> {
        let url = self.config.endpoint(CALCULATIONS)?;
        debug!("GET {}", url);
        decode(self.http.get(url).send().await?).await
    }

    /// Fetch every record and fold it into route cards.
    pub async fn load_history(&self) -> Result<Vec<GroupedCalculation>> {
        let records = self.list_calculations().await?;
        let groups = group_calculations(&records);
        info!(
            "Loaded {} calculation records ({} routes)",
            records.len(),
            groups.len()
        );
        Ok(groups)
    }

    /// `DELETE /calculations`. Idempotent; callers confirm with the user first.
    pub async fn clear_calculations(&self) -> Result<()> {
        let url = self.config.endpoint(CALCULATIONS)?;
        check(self.http.delete(url).send().await?).await?;
        info!("Calculation history cleared");
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: detail_from_body(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    Ok(check(response).await?.json::<T>().await?)
}
