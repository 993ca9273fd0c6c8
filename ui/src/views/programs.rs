use dioxus::prelude::*;

use crate::components::RailDots;
use crate::core::content::{program_desc_key, program_title_key, SITE};
use crate::core::rail::RailConfig;
use crate::hooks::use_rail;
use crate::i18n;
use crate::t;

/// Educational programs: near-full-width cards panned by dragging.
#[component]
pub fn ProgramsSection() -> Element {
    let programs = &SITE.programs;
    let rail = use_rail("programs-rail", RailConfig::programs(programs.len()));

    let cursor = rail.affordance().css_class();

    rsx! {
        section { id: "facilities", class: "section section--muted",
            div { class: "section__header section__header--inset",
                h2 { class: "section__title section__title--brand", {t!("programs-title")} }
            }

            div {
                id: rail.element_id(),
                class: "rail rail--programs {cursor}",
                onmounted: move |evt| rail.on_mounted(evt),
                onscroll: move |_| rail.on_scroll(),
                onmousedown: move |evt| {
                    evt.prevent_default();
                    rail.begin_drag(evt.client_coordinates().x);
                },
                onmousemove: move |evt| rail.drag_move(evt.client_coordinates().x),
                onmouseup: move |_| rail.end_drag(),
                onmouseleave: move |_| rail.end_drag(),
                for program in programs.iter() {
                    article { key: "{program.id}", class: "program-card",
                        h3 { class: "program-card__title", {i18n::tr(&program_title_key(&program.id))} }
                        p { class: "program-card__desc", {i18n::tr(&program_desc_key(&program.id))} }
                    }
                }
            }

            RailDots { rail, class: "rail-dots--mobile" }
        }
    }
}
