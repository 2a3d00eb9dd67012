//! View model for a computed route: decoded path, map center and chart bars.

use crate::labels::modal_label;
use crate::models::{FootprintAnalysisEntry, LatLon, RouteResult};
use crate::polyline;
use serde::Serialize;

/// Map center used when the route has no points (Brasília).
pub const DEFAULT_CENTER: LatLon = LatLon(-15.7801, -47.9292);

/// One bar of the modal-vs-footprint chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

/// Everything the results view draws, derived from a [`RouteResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub distance_km: f64,
    pub path: Vec<LatLon>,
    pub center: LatLon,
    pub bars: Vec<ChartBar>,
}

impl RouteView {
    /// Build the view model. Undecodable geometry yields an empty path
    /// centered on [`DEFAULT_CENTER`]; the chart is still drawn.
    pub fn from_result(result: &RouteResult) -> Self {
        let path = match polyline::decode(&result.route_geometry) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Discarding malformed route geometry: {}", e);
                Vec::new()
            }
        };
        Self {
            distance_km: result.distance_km,
            center: map_center(&path),
            bars: chart_bars(&result.footprint_analysis),
            path,
        }
    }
}

/// The point at `floor(len / 2)`, or [`DEFAULT_CENTER`] for an empty path.
pub fn map_center(path: &[LatLon]) -> LatLon {
    path.get(path.len() / 2).copied().unwrap_or(DEFAULT_CENTER)
}

/// One bar per analysis entry, in response order.
pub fn chart_bars(entries: &[FootprintAnalysisEntry]) -> Vec<ChartBar> {
    entries
        .iter()
        .map(|entry| ChartBar {
            label: modal_label(&entry.modal),
            value: entry.carbon_footprint_kg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(modal: &str, kg: f64) -> FootprintAnalysisEntry {
        FootprintAnalysisEntry {
            modal: modal.to_string(),
            carbon_footprint_kg: kg,
        }
    }

    #[test]
    fn center_is_middle_point() {
        let path = vec![LatLon(0.0, 0.0), LatLon(1.0, 1.0), LatLon(2.0, 2.0), LatLon(3.0, 3.0)];
        assert_eq!(map_center(&path), LatLon(2.0, 2.0));
        assert_eq!(map_center(&path[..3]), LatLon(1.0, 1.0));
        assert_eq!(map_center(&path[..1]), LatLon(0.0, 0.0));
    }

    #[test]
    fn empty_path_falls_back_to_default_center() {
        assert_eq!(map_center(&[]), DEFAULT_CENTER);
    }

    #[test]
    fn bars_follow_analysis_order_with_labels() {
        let bars = chart_bars(&[entry("caminhao_pequeno", 25.0), entry("moto", 10.5)]);
        assert_eq!(
            bars,
            vec![
                ChartBar {
                    label: "Caminhao Pequeno".to_string(),
                    value: 25.0
                },
                ChartBar {
                    label: "Moto".to_string(),
                    value: 10.5
                },
            ]
        );
    }

    #[test]
    fn view_decodes_geometry() {
        let result = RouteResult {
            distance_km: 412.5,
            route_geometry: "_p~iF~ps|U_ulLnnqC_mqNvxq`@".to_string(),
            footprint_analysis: vec![entry("moto", 43.31)],
        };
        let view = RouteView::from_result(&result);
        assert_eq!(view.path.len(), 3);
        assert_eq!(view.center, LatLon(40.7, -120.95));
        assert_eq!(view.bars.len(), 1);
        assert_eq!(view.distance_km, 412.5);
    }

    #[test]
    fn malformed_geometry_still_renders_chart() {
        let result = RouteResult {
            distance_km: 1.0,
            route_geometry: "_".to_string(),
            footprint_analysis: vec![entry("moto", 0.11)],
        };
        let view = RouteView::from_result(&result);
        assert!(view.path.is_empty());
        assert_eq!(view.center, DEFAULT_CENTER);
        assert_eq!(view.bars.len(), 1);
    }
}
