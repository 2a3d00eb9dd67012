//! One route card on the history dashboard.

use dioxus::prelude::*;
use gs_core::history::GroupedCalculation;
use gs_core::labels::{modal_label, timestamp_label, two_decimals};

#[component]
pub fn HistoryCard(group: GroupedCalculation) -> Element {
    let distance = two_decimals(group.distance_km);
    let date = timestamp_label(&group.created_at);
    let rows: Vec<(String, String)> = group
        .footprints
        .iter()
        .map(|f| (modal_label(&f.modal), two_decimals(f.carbon_footprint_kg)))
        .collect();

    rsx! {
        article {
            class: "route-card",
            style: "border: 1px solid #dcedc8; border-radius: 8px; padding: 16px; background: #fff;",
            header {
                style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 8px;",
                h3 {
                    style: "margin: 0; font-size: 16px; color: #0C3C01;",
                    "{group.origin_city} → {group.destination_city}"
                }
                span {
                    style: "font-size: 12px; color: #888;",
                    "{date}"
                }
            }
            p {
                style: "margin: 0 0 8px 0; color: #555;",
                "Distance: {distance} km"
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 4px 0; border-bottom: 1px solid #eee;", "Modal" }
                        th { style: "text-align: right; padding: 4px 0; border-bottom: 1px solid #eee;", "kg CO₂" }
                    }
                }
                tbody {
                    for (index, (modal, kg)) in rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            td { style: "padding: 4px 0;", "{modal}" }
                            td { style: "padding: 4px 0; text-align: right;", "{kg}" }
                        }
                    }
                }
            }
        }
    }
}
