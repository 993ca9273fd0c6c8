//! Persistence of the visitor's locale preference.
//!
//! Web builds keep it in `localStorage`; native builds write a one-line file
//! under the platform config directory.

use thiserror::Error;

/// Key / file name holding the saved locale code.
pub const LOCALE_KEY: &str = "makerspace.locale";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no storage backend available")]
    Unavailable,
    #[error("browser storage error: {0}")]
    Browser(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub trait LocaleStore {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str) -> Result<(), StorageError>;
}

/// Default store for the current target.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreferenceStore;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err: wasm_bindgen::JsValue| StorageError::Browser(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl LocaleStore for PreferenceStore {
    fn load(&self) -> Option<String> {
        Self::local_storage().ok()?.get_item(LOCALE_KEY).ok().flatten()
    }

    fn save(&self, code: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(LOCALE_KEY, code)
            .map_err(|err| StorageError::Browser(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore {
    fn path() -> Result<std::path::PathBuf, StorageError> {
        let dirs = directories::ProjectDirs::from("jo", "The Makerspace", "makerspace-site")
            .ok_or(StorageError::Unavailable)?;
        Ok(dirs.config_dir().join(LOCALE_KEY))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocaleStore for PreferenceStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(Self::path().ok()?).ok()?;
        let code = raw.trim();
        (!code.is_empty()).then(|| code.to_string())
    }

    fn save(&self, code: &str) -> Result<(), StorageError> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, code)?;
        Ok(())
    }
}
