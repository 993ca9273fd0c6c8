//! Active-locale controller.
//!
//! Owns the single active [`Locale`] and keeps the host document in sync with
//! it. The document itself is reached only through a [`DocumentSink`], and the
//! persisted preference only through a [`LocaleStore`], so both can be
//! swapped for recording fakes in tests.
//!
//! Supported locales are a fixed, ordered table ([`SUPPORTED_LOCALES`]);
//! English is first and acts as the default.

use thiserror::Error;
use tracing::{debug, warn};

use super::storage::{LocaleStore, StorageError};

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the document's `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

impl Locale {
    pub fn direction(&self) -> TextDirection {
        if self.code == "ar" {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

/// Locales the site ships translations for, in toggle order.
pub const SUPPORTED_LOCALES: [Locale; 2] = [
    Locale {
        code: "en",
        name: "English",
        native_name: "English",
    },
    Locale {
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
    },
];

/// Index into [`SUPPORTED_LOCALES`] used when nothing better is known.
const DEFAULT_LOCALE: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unsupported locale `{0}`")]
    Unsupported(String),
}

/// Receiver of the document-level side effects of a locale change.
///
/// `set_direction` is always called before `set_language`.
pub trait DocumentSink {
    fn set_direction(&mut self, direction: TextDirection);
    fn set_language(&mut self, code: &str);
}

/// Look up a supported locale by its exact code.
pub fn find_locale(code: &str) -> Option<&'static Locale> {
    SUPPORTED_LOCALES.iter().find(|locale| locale.code == code)
}

/// Choose the startup locale.
///
/// A stored code wins when it is still supported. Otherwise the first
/// requested language tag (`ar-JO`, `en-US`, ...) whose primary subtag is
/// supported is used, falling back to English.
pub fn resolve_initial(stored: Option<&str>, requested: &[String]) -> &'static Locale {
    if let Some(locale) = stored.and_then(find_locale) {
        return locale;
    }
    requested
        .iter()
        .filter_map(|tag| tag.split(['-', '_']).next())
        .find_map(|primary| find_locale(&primary.to_ascii_lowercase()))
        .unwrap_or(&SUPPORTED_LOCALES[DEFAULT_LOCALE])
}

pub struct LocaleController<D, S> {
    active: &'static Locale,
    sink: D,
    store: S,
}

impl<D: DocumentSink, S: LocaleStore> LocaleController<D, S> {
    /// Build the controller from the persisted preference (if any) and the
    /// host's requested languages, then sync the document once.
    pub fn new(sink: D, store: S, requested: &[String]) -> Self {
        let stored = store.load();
        let active = resolve_initial(stored.as_deref(), requested);
        let mut controller = Self {
            active,
            sink,
            store,
        };
        controller.sync_document();
        debug!(locale = active.code, "locale controller initialised");
        controller
    }

    pub fn active_locale(&self) -> &'static Locale {
        self.active
    }

    pub fn direction(&self) -> TextDirection {
        self.active.direction()
    }

    pub fn supported_locales(&self) -> &'static [Locale] {
        &SUPPORTED_LOCALES
    }

    /// Switch to `code`. Unsupported codes leave everything untouched.
    pub fn set_active_locale(&mut self, code: &str) -> Result<(), LocaleError> {
        let locale = find_locale(code).ok_or_else(|| LocaleError::Unsupported(code.to_string()))?;
        self.active = locale;
        self.sync_document();
        if let Err(err) = self.store.save(locale.code) {
            warn!(locale = locale.code, error = %err, "failed to persist locale preference");
        }
        debug!(locale = locale.code, dir = locale.direction().as_attr(), "locale changed");
        Ok(())
    }

    /// The locale [`cycle_to_next`](Self::cycle_to_next) would select: the next
    /// distinct entry in table order, wrapping around.
    pub fn next_locale(&self) -> &'static Locale {
        let len = SUPPORTED_LOCALES.len();
        let current = SUPPORTED_LOCALES
            .iter()
            .position(|locale| locale.code == self.active.code)
            .unwrap_or(DEFAULT_LOCALE);
        (1..len)
            .map(|step| &SUPPORTED_LOCALES[(current + step) % len])
            .find(|locale| locale.code != self.active.code)
            .unwrap_or(self.active)
    }

    pub fn cycle_to_next(&mut self) {
        let next = self.next_locale().code;
        if let Err(err) = self.set_active_locale(next) {
            debug!(error = %err, "locale cycle ignored");
        }
    }

    fn sync_document(&mut self) {
        self.sink.set_direction(self.active.direction());
        self.sink.set_language(self.active.code);
    }
}

/// Store that keeps nothing. Used when the host offers no persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl LocaleStore for NullStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _code: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Write {
        Dir(&'static str),
        Lang(String),
    }

    #[derive(Clone, Default)]
    struct RecordingSink(Rc<RefCell<Vec<Write>>>);

    impl RecordingSink {
        fn writes(&self) -> Vec<Write> {
            self.0.borrow().clone()
        }
        fn clear(&self) {
            self.0.borrow_mut().clear();
        }
        fn current_dir(&self) -> Option<&'static str> {
            self.0.borrow().iter().rev().find_map(|w| match w {
                Write::Dir(d) => Some(*d),
                _ => None,
            })
        }
    }

    impl DocumentSink for RecordingSink {
        fn set_direction(&mut self, direction: TextDirection) {
            self.0.borrow_mut().push(Write::Dir(direction.as_attr()));
        }
        fn set_language(&mut self, code: &str) {
            self.0.borrow_mut().push(Write::Lang(code.to_string()));
        }
    }

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
        fail: bool,
    }

    impl LocaleStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }
        fn save(&self, code: &str) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Unavailable);
            }
            *self.value.borrow_mut() = Some(code.to_string());
            Ok(())
        }
    }

    fn controller() -> (LocaleController<RecordingSink, MemoryStore>, RecordingSink) {
        let sink = RecordingSink::default();
        let ctrl = LocaleController::new(sink.clone(), MemoryStore::default(), &[]);
        (ctrl, sink)
    }

    #[test]
    fn defaults_to_english_and_syncs_document() {
        let (ctrl, sink) = controller();
        assert_eq!(ctrl.active_locale().code, "en");
        assert_eq!(
            sink.writes(),
            vec![Write::Dir("ltr"), Write::Lang("en".into())]
        );
    }

    #[test]
    fn every_supported_code_round_trips_with_matching_direction() {
        let (mut ctrl, sink) = controller();
        for locale in SUPPORTED_LOCALES.iter() {
            ctrl.set_active_locale(locale.code).unwrap();
            assert_eq!(ctrl.active_locale().code, locale.code);
            let expected = if locale.code == "ar" { "rtl" } else { "ltr" };
            assert_eq!(sink.current_dir(), Some(expected));
        }
    }

    #[test]
    fn direction_is_written_before_language() {
        let (mut ctrl, sink) = controller();
        sink.clear();
        ctrl.set_active_locale("ar").unwrap();
        assert_eq!(
            sink.writes(),
            vec![Write::Dir("rtl"), Write::Lang("ar".into())]
        );
    }

    #[test]
    fn unsupported_code_is_rejected_without_side_effects() {
        let (mut ctrl, sink) = controller();
        sink.clear();
        let err = ctrl.set_active_locale("fr").unwrap_err();
        assert_eq!(err, LocaleError::Unsupported("fr".into()));
        assert_eq!(ctrl.active_locale().code, "en");
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn supported_list_is_stable() {
        let (ctrl, _) = controller();
        let first: Vec<_> = ctrl.supported_locales().iter().map(|l| l.code).collect();
        let second: Vec<_> = ctrl.supported_locales().iter().map(|l| l.code).collect();
        assert_eq!(first, vec!["en", "ar"]);
        assert_eq!(first, second);
    }

    #[test]
    fn cycle_toggles_between_the_two_locales() {
        let (mut ctrl, _) = controller();
        assert_eq!(ctrl.next_locale().code, "ar");
        ctrl.cycle_to_next();
        assert_eq!(ctrl.active_locale().code, "ar");
        assert!(ctrl.direction().is_rtl());
        ctrl.cycle_to_next();
        assert_eq!(ctrl.active_locale().code, "en");
    }

    #[test]
    fn change_is_persisted_and_restored() {
        let store = MemoryStore::default();
        let mut ctrl = LocaleController::new(RecordingSink::default(), store.clone(), &[]);
        ctrl.set_active_locale("ar").unwrap();
        assert_eq!(store.load().as_deref(), Some("ar"));

        let restored = LocaleController::new(RecordingSink::default(), store, &[]);
        assert_eq!(restored.active_locale().code, "ar");
    }

    #[test]
    fn failed_save_still_switches() {
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let mut ctrl = LocaleController::new(RecordingSink::default(), store, &[]);
        ctrl.set_active_locale("ar").unwrap();
        assert_eq!(ctrl.active_locale().code, "ar");
    }

    #[test]
    fn initial_resolution_prefers_store_then_requested() {
        let requested = vec!["fr-FR".to_string(), "ar-JO".to_string()];
        assert_eq!(resolve_initial(Some("en"), &requested).code, "en");
        assert_eq!(resolve_initial(Some("de"), &requested).code, "ar");
        assert_eq!(resolve_initial(None, &["fr".to_string()]).code, "en");
        assert_eq!(resolve_initial(None, &["AR".to_string()]).code, "ar");
    }
}
