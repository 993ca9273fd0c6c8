mod language_toggle;
mod rail_controls;
mod site_footer;
mod site_header;

pub use language_toggle::LanguageToggle;
pub use rail_controls::{RailArrows, RailDots};
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
