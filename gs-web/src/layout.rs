//! Page chrome shared by every route.

use crate::Route;
use dioxus::prelude::*;
use gs_ui::components::Footer;

#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "main-layout",
            style: "min-height: 100vh; display: flex; flex-direction: column;",
            Header {}
            main {
                style: "flex: 1; width: 100%; max-width: 1100px; margin: 0 auto; padding: 16px; box-sizing: border-box;",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let link_style = "margin-left: 16px; color: #fff; text-decoration: none; padding-bottom: 2px;";

    rsx! {
        header {
            class: "app-header",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #0C3C01; color: #fff;",
            div {
                class: "logo",
                style: "font-weight: bold; letter-spacing: 2px;",
                "GREENSHIFT"
            }
            nav {
                Link {
                    to: Route::Calculator {},
                    class: "nav-link",
                    active_class: "active",
                    style: "{link_style}",
                    "Calculator"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "nav-link",
                    active_class: "active",
                    style: "{link_style}",
                    "Dashboard"
                }
            }
        }
    }
}
