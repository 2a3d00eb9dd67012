use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer {
            style: "padding: 16px; text-align: center; font-size: 12px; color: #888; border-top: 1px solid #e0e0e0; margin-top: 32px;",
            "© {year} GREENSHIFT. All rights reserved."
        }
    }
}
