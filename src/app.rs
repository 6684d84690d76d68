use dioxus::prelude::*;

use crate::components::DashboardView;
use crate::{FAVICON, MAIN_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#191414" }
        document::Meta { name: "color-scheme", content: "dark" }
        div { class: "page",
            header { class: "page-header",
                h1 { "Spotify Playlist Dashboard" }
                p { class: "page-subtitle", "Listening statistics for your playlist" }
            }
            main { class: "page-body",
                DashboardView {}
            }
        }
    }
}
