use dioxus::prelude::*;

use crate::core::content::{promo_desc_key, promo_title_key, SITE};
use crate::i18n;
use crate::t;

/// "Why choose our programs" panel over a background photo.
#[component]
pub fn ProgramsPromo() -> Element {
    let promo = &SITE.promo;

    rsx! {
        section { id: "programs", class: "section section--muted",
            div {
                class: "promo",
                style: "background-image: url('{promo.background}')",
                div { class: "promo__shade" }
                div { class: "promo__content",
                    h2 { class: "promo__title", {t!("promo-title")} }
                    p { class: "promo__subtitle", {t!("promo-subtitle")} }
                    ul { class: "promo__highlights",
                        for id in promo.highlights.iter() {
                            li { key: "{id}", class: "promo__highlight",
                                span { class: "promo__bullet", aria_hidden: "true" }
                                div {
                                    h4 { {i18n::tr(&promo_title_key(id))} }
                                    p { {i18n::tr(&promo_desc_key(id))} }
                                }
                            }
                        }
                    }
                    button { r#type: "button", class: "button button--primary", {t!("promo-watch-video")} " ▶" }
                }
            }
        }
    }
}
