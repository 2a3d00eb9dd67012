//! Container div that Leaflet or D3.js renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS side looks up
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: {}px; position: relative; width: 100%; border-radius: 8px; overflow: hidden;",
        props.min_height, props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
