use dioxus::prelude::*;

use crate::components::RailArrows;
use crate::core::content::{facility_desc_key, facility_title_key, SITE};
use crate::core::rail::RailConfig;
use crate::hooks::use_rail;
use crate::i18n;
use crate::t;

/// Technical facilities: fixed-width cards, arrows page by whole screens.
#[component]
pub fn FacilitiesSection() -> Element {
    let facilities = &SITE.facilities;
    let rail = use_rail("facilities-rail", RailConfig::facilities(facilities.len()));

    let cursor = rail.affordance().css_class();

    rsx! {
        section { id: "technical-facilities", class: "section section--accent",
            div { class: "section__header",
                div {
                    h2 { class: "section__title", {t!("facilities-title")} }
                    p { class: "section__subtitle", {t!("facilities-subtitle")} }
                }
                RailArrows { rail, class: "rail-arrows--desktop" }
            }

            div {
                id: rail.element_id(),
                class: "rail rail--facilities {cursor}",
                onmounted: move |evt| rail.on_mounted(evt),
                onscroll: move |_| rail.on_scroll(),
                for facility in facilities.iter() {
                    article { key: "{facility.id}", class: "facility-card",
                        img {
                            class: "facility-card__image",
                            src: "{facility.image}",
                            alt: i18n::tr(&facility_title_key(&facility.id)),
                        }
                        div { class: "facility-card__shade" }
                        div { class: "facility-card__body",
                            h3 { {i18n::tr(&facility_title_key(&facility.id))} }
                            p { {i18n::tr(&facility_desc_key(&facility.id))} }
                        }
                    }
                }
            }

            div { class: "section__footer",
                RailArrows { rail, class: "rail-arrows--mobile" }
                button { r#type: "button", class: "button button--ghost", {t!("facilities-discover")} }
            }
        }
    }
}
