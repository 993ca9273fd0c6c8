use dioxus::prelude::*;

use crate::components::LanguageToggle;
use crate::core::content::{nav_key, SITE};
use crate::i18n;
use crate::t;

// Header stylesheet (inlined too for release native builds, which have no asset server)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Fixed site header: logo, in-page anchors, the "join" call to action, the
/// language toggle, and a collapsible menu for narrow screens.
#[component]
pub fn SiteHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    let menu_icon = if menu_open() { "✕" } else { "☰" };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    img {
                        class: "site-header__logo",
                        src: "{SITE.logo}",
                        alt: t!("logo-alt"),
                    }
                }

                div { class: "site-header__desktop",
                    nav { class: "site-header__links",
                        NavLinks { menu_open }
                    }
                    button { r#type: "button", class: "button button--primary", {t!("nav-join")} }
                }

                div { class: "site-header__actions",
                    LanguageToggle {}
                    button {
                        r#type: "button",
                        class: "site-header__menu-toggle",
                        aria_label: t!("nav-menu-toggle"),
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.toggle(),
                        "{menu_icon}"
                    }
                }
            }

            if menu_open() {
                nav { class: "site-header__mobile",
                    NavLinks { menu_open }
                    button { r#type: "button", class: "button button--primary button--block", {t!("nav-join")} }
                }
            }
        }
    }
}

#[component]
fn NavLinks(menu_open: Signal<bool>) -> Element {
    let mut menu_open = menu_open;
    rsx! {
        for entry in SITE.navigation.iter() {
            a {
                key: "{entry.id}",
                class: "site-header__link",
                href: "{entry.href}",
                onclick: move |_| menu_open.set(false),
                {i18n::tr(&nav_key(&entry.id))}
            }
        }
    }
}
