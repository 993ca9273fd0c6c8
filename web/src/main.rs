use dioxus::prelude::*;

use ui::hooks::use_locale_provider;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

// Shared theme lives in the ui crate; embed it so there is one copy.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let locale = use_locale_provider();
    let code = locale.read().active_locale().code;

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

        // Translations are not reactive, so remount the routed tree when the
        // active locale changes.
        div {
            key: "{code}",
            Router::<Route> {}
        }
    }
}

/// Only the landing page exists; every other path lands there too.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route, showing home");
    rsx! {
        Home {}
    }
}
