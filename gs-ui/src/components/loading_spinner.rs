//! Loading indicator component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading...".to_string())]
    pub label: String,
}

/// Centered loading message.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 32px; font-size: 1.2rem; color: #666;",
            "{props.label}"
        }
    }
}
