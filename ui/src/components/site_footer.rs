use dioxus::prelude::*;

use crate::core::content::{footer_program_key, footer_quick_key, SITE};
use crate::i18n;
use crate::t;

const COPYRIGHT_YEAR: u16 = 2025;

#[component]
pub fn SiteFooter() -> Element {
    let footer = &SITE.footer;

    rsx! {
        footer { id: "contact", class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    img { class: "site-footer__logo", src: "{SITE.logo}", alt: t!("logo-alt") }
                }

                div { class: "site-footer__column",
                    h3 { {t!("footer-quick-title")} }
                    ul {
                        for id in footer.quick_links.iter() {
                            li { key: "{id}",
                                a { href: "#", {i18n::tr(&footer_quick_key(id))} }
                            }
                        }
                    }
                }

                div { class: "site-footer__column",
                    h3 { {t!("footer-programs-title")} }
                    ul {
                        for id in footer.programs.iter() {
                            li { key: "{id}",
                                a { href: "#", {i18n::tr(&footer_program_key(id))} }
                            }
                        }
                    }
                }

                div { class: "site-footer__column site-footer__contact",
                    h3 { {t!("footer-contact-title")} }
                    p { span { aria_hidden: "true", "📍 " } {t!("footer-contact-address")} }
                    p { span { aria_hidden: "true", "📞 " } {t!("footer-contact-phone")} }
                    p { span { aria_hidden: "true", "✉️ " } {t!("footer-contact-email")} }
                    p { span { aria_hidden: "true", "🕘 " } {t!("footer-contact-hours")} }
                }
            }

            div { class: "site-footer__bottom",
                p { class: "site-footer__copyright", {t!("footer-copyright", year = COPYRIGHT_YEAR)} }
                div { class: "site-footer__social",
                    span { {t!("footer-social-title")} }
                    for link in footer.social.iter() {
                        a {
                            key: "{link.label}",
                            class: "site-footer__social-link",
                            href: "{link.href}",
                            aria_label: "{link.label}",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
