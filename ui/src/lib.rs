//! Shared UI crate for the Makerspace site. The carousel and locale
//! controllers, translations, and every page section live here; platform
//! crates only launch it.

pub mod components;
pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;
