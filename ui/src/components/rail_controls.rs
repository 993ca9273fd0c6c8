use dioxus::prelude::*;

use crate::core::rail::ScrollDirection;
use crate::hooks::RailHandle;
use crate::t;

/// Previous / next buttons for a rail.
#[component]
pub fn RailArrows(rail: RailHandle, #[props(default)] class: String) -> Element {
    rsx! {
        div { class: "rail-arrows {class}",
            button {
                r#type: "button",
                class: "rail-arrows__button",
                aria_label: t!("rail-previous"),
                aria_controls: rail.element_id(),
                onclick: move |_| rail.advance(ScrollDirection::Backward),
                "←"
            }
            button {
                r#type: "button",
                class: "rail-arrows__button",
                aria_label: t!("rail-next"),
                aria_controls: rail.element_id(),
                onclick: move |_| rail.advance(ScrollDirection::Forward),
                "→"
            }
        }
    }
}

/// Position dots. One per item; the count comes from the rail itself.
#[component]
pub fn RailDots(rail: RailHandle, #[props(default)] class: String) -> Element {
    let active = rail.active_index();
    let count = rail.indicator_count();
    let labels: Vec<String> = (1..=count)
        .map(|position: usize| t!("rail-position", index = position, count = count))
        .collect();

    rsx! {
        div { class: "rail-dots {class}", role: "tablist",
            for (index, label) in labels.into_iter().enumerate() {
                span {
                    key: "{index}",
                    role: "tab",
                    aria_selected: "{index == active}",
                    aria_label: label,
                    class: if index == active { "rail-dots__dot rail-dots__dot--active" } else { "rail-dots__dot" },
                }
            }
        }
    }
}
