use dioxus::prelude::*;

use crate::components::{RailArrows, RailDots};
use crate::core::content::{objective_key, SITE};
use crate::core::rail::RailConfig;
use crate::hooks::use_rail;
use crate::i18n;
use crate::t;

/// Objectives: three cards per viewport on wide screens.
#[component]
pub fn ObjectivesSection() -> Element {
    let objectives = &SITE.objectives;
    let rail = use_rail("objectives-rail", RailConfig::objectives(objectives.len()));

    rsx! {
        section { id: "objectives", class: "section section--muted",
            div { class: "section__header",
                h2 { class: "section__title section__title--brand", {t!("objectives-title")} }
            }

            div {
                id: rail.element_id(),
                class: "rail rail--objectives",
                onmounted: move |evt| rail.on_mounted(evt),
                onscroll: move |_| rail.on_scroll(),
                for objective in objectives.iter() {
                    article { key: "{objective.id}", class: "objective-card",
                        div { class: "objective-card__icon", aria_hidden: "true", {objective.icon.glyph()} }
                        h3 { class: "objective-card__text", {i18n::tr(&objective_key(&objective.id))} }
                    }
                }
            }

            RailDots { rail }
            RailArrows { rail, class: "rail-arrows--centered" }
        }
    }
}
