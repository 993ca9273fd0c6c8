use dioxus::prelude::*;

use crate::core::content::SITE;
use crate::t;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            img { class: "hero__image", src: "{SITE.hero_image}", alt: t!("hero-image-alt") }
            div { class: "hero__overlay" }
            div { class: "hero__content",
                h1 { class: "hero__title", {t!("hero-title")} }
                p { class: "hero__description", {t!("hero-description")} }
                button { r#type: "button", class: "button button--primary", {t!("hero-cta")} }
            }
        }
    }
}
