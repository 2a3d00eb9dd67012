//! Inline failure message.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Offer a "Try again" button that calls this
    pub on_retry: Option<EventHandler<()>>,
}

/// Replaces the content that failed to load. Nothing here blocks the page;
/// the user can keep navigating or retry.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; gap: 12px; justify-content: center; align-items: center; padding: 12px 16px; margin: 16px auto; max-width: 720px; background: #FFF3E0; color: #B23C17; border-radius: 8px; border-left: 4px solid #B23C17;",
            span { "{props.message}" }
            if let Some(retry) = props.on_retry {
                button {
                    style: "padding: 4px 12px; border: 1px solid #B23C17; border-radius: 4px; background: #fff; color: #B23C17; cursor: pointer;",
                    onclick: move |_| retry.call(()),
                    "Try again"
                }
            }
        }
    }
}
