use dioxus::prelude::*;

use crate::components::{SiteFooter, SiteHeader};
use crate::hooks::{current_locale, use_locale};

use super::{FacilitiesSection, Hero, ObjectivesSection, ProgramsPromo, ProgramsSection};

#[component]
pub fn Home() -> Element {
    // Subscribe to the locale so the page re-renders on change.
    let (locale, direction) = current_locale(use_locale());

    tracing::trace!(locale = locale.code, "home render");

    rsx! {
        div {
            class: "site",
            dir: direction.as_attr(),
            lang: locale.code,
            SiteHeader {}
            main {
                Hero {}
                FacilitiesSection {}
                ProgramsSection {}
                ObjectivesSection {}
                ProgramsPromo {}
            }
            SiteFooter {}
        }
    }
}
