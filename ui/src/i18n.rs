//! Internationalization (i18n) support for `makerspace-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/makerspace-ui.ftl   (fallback/reference)
//!   ar/makerspace-ui.ftl   (right-to-left locale)
//! ```
//!
//! Which locale is *active* is decided by `core::locale::LocaleController`;
//! this module only swaps the loaded bundle when told to.
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch bundle at runtime.
//! - `available_languages()` – discover embedded language tags.
//! - `requested_languages()` – the host's preferred languages, as tags.
//! - `tr(id)` – runtime lookup for ids built from content entries.
//! - `t!` macro – compile-time checked lookup for literal ids.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-join")
///     t!("footer-copyright", year = 2025)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "makerspace-ui";

const FALLBACK: &str = "en";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Loads the fallback bundle only; the locale
/// controller selects the real one right after.
pub fn init() {
    INIT.call_once(|| {
        let fallback: LanguageIdentifier = LOADER.fallback_language().clone();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[fallback]) {
            tracing::warn!(error = %err, "failed loading fallback bundle");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Look up a message id that is only known at runtime.
///
/// Missing ids come back as the id itself, which the key coverage tests
/// guard against.
pub fn tr(id: &str) -> String {
    if LOADER.has(id) {
        LOADER.get(id)
    } else {
        tracing::warn!(id, "missing translation");
        id.to_string()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// The host's preferred languages, most preferred first.
pub fn requested_languages() -> Vec<String> {
    platform_requested_languages()
        .into_iter()
        .map(|id| id.to_string())
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn platform_requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
