use dioxus::prelude::*;

use crate::hooks::{toggle_locale, use_locale};
use crate::t;

/// Globe button that switches to the next supported locale. It is labelled
/// with that locale's native name, so Arabic readers see "English" and vice
/// versa.
#[component]
pub fn LanguageToggle() -> Element {
    let locale = use_locale();
    let next = locale.read().next_locale();

    rsx! {
        button {
            r#type: "button",
            class: "language-toggle",
            aria_label: t!("language-toggle-label"),
            lang: "{next.code}",
            onclick: move |_| toggle_locale(locale),
            span { class: "language-toggle__icon", aria_hidden: "true", "🌐" }
            span { class: "language-toggle__label", "{next.native_name}" }
        }
    }
}
