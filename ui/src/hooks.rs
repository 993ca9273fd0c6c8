//! Dioxus bindings for the core controllers.
//!
//! The controllers live inside signals, so any component that reads
//! `active_index()` or the active locale re-renders when an event handler
//! writes to them.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, trace};

use crate::core::locale::{Locale, LocaleController, TextDirection};
use crate::core::platform::{self, DomViewport, HostDocument};
use crate::core::rail::{Affordance, RailConfig, RailController, RailState, ScrollDirection};
use crate::core::storage::PreferenceStore;
use crate::i18n;

pub type SiteLocale = LocaleController<HostDocument, PreferenceStore>;

/// Create the locale controller and share it with the tree. Call once, at
/// the root component.
pub fn use_locale_provider() -> Signal<SiteLocale> {
    let controller = use_signal(|| {
        i18n::init();
        let controller =
            LocaleController::new(HostDocument, PreferenceStore, &i18n::requested_languages());
        load_bundle(controller.active_locale().code);
        controller
    });
    use_context_provider(|| controller)
}

pub fn use_locale() -> Signal<SiteLocale> {
    use_context::<Signal<SiteLocale>>()
}

/// Switch locale and the loaded translation bundle together.
pub fn change_locale(mut locale: Signal<SiteLocale>, code: &str) {
    let result = locale.write().set_active_locale(code);
    match result {
        Ok(()) => load_bundle(code),
        Err(err) => debug!(error = %err, "locale change ignored"),
    }
}

pub fn toggle_locale(locale: Signal<SiteLocale>) {
    let next = locale.peek().next_locale().code;
    change_locale(locale, next);
}

/// Active locale and its direction, subscribing the caller to changes.
pub fn current_locale(locale: Signal<SiteLocale>) -> (&'static Locale, TextDirection) {
    let guard = locale.read();
    (guard.active_locale(), guard.direction())
}

fn load_bundle(code: &str) {
    if let Err(err) = i18n::set_language(code) {
        tracing::warn!(locale = code, error = %err, "failed loading translation bundle");
    }
}

/// Handle to one rail on the page. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct RailHandle {
    element_id: &'static str,
    controller: Signal<RailController<DomViewport>>,
    mounted: Signal<Option<Rc<MountedData>>>,
}

/// Set up a rail whose scroll container has DOM id `element_id`.
pub fn use_rail(element_id: &'static str, config: RailConfig) -> RailHandle {
    let mut controller = use_signal(|| RailController::new(config));
    let mounted = use_signal(|| None);
    let locale = use_locale();

    use_effect(move || {
        let rtl = locale.read().direction().is_rtl();
        controller.write().set_mirrored(rtl);
    });

    use_drop(move || {
        if let Ok(mut rail) = controller.try_write() {
            rail.unbind();
        }
    });

    RailHandle {
        element_id,
        controller,
        mounted,
    }
}

impl RailHandle {
    pub fn element_id(self) -> &'static str {
        self.element_id
    }

    pub fn active_index(self) -> usize {
        self.controller.read().active_index()
    }

    pub fn indicator_count(self) -> usize {
        self.controller.read().indicator_count()
    }

    pub fn affordance(self) -> Affordance {
        self.controller.read().affordance()
    }

    pub fn on_mounted(self, evt: MountedEvent) {
        let mut this = self;
        let element = evt.data();
        this.mounted.set(Some(element.clone()));
        spawn(async move {
            let metrics = platform::measure(&element).await.unwrap_or_default();
            let mut viewport = DomViewport::new(this.element_id);
            viewport.record(metrics);
            this.controller.write().bind(viewport);
        });
    }

    /// Passive scroll observer: re-measure, then recompute the index.
    pub fn on_scroll(self) {
        spawn(async move {
            self.refresh().await;
        });
    }

    pub fn advance(self, direction: ScrollDirection) {
        let mut controller = self.controller;
        spawn(async move {
            self.refresh().await;
            let result = controller.write().advance(direction);
            if let Err(err) = result {
                trace!(rail = self.element_id, error = %err, "advance ignored");
            }
        });
    }

    pub fn begin_drag(self, pointer_x: f64) {
        let mut controller = self.controller;
        let result = controller.write().begin_drag(pointer_x);
        if let Err(err) = result {
            trace!(rail = self.element_id, error = %err, "drag not started");
        }
    }

    pub fn drag_move(self, pointer_x: f64) {
        // Pointer moves outside a drag are the common case; skip the write.
        if !self.dragging() {
            return;
        }
        let mut controller = self.controller;
        let result = controller.write().drag_move(pointer_x);
        if let Err(err) = result {
            trace!(rail = self.element_id, error = %err, "drag move ignored");
        }
    }

    pub fn end_drag(self) {
        if self.dragging() {
            let mut controller = self.controller;
            controller.write().end_drag();
        }
    }

    fn dragging(self) -> bool {
        matches!(self.controller.peek().state(), RailState::Dragging(_))
    }

    async fn refresh(self) {
        let element = self.mounted.peek().clone();
        let Some(element) = element else {
            return;
        };
        let Some(metrics) = platform::measure(&element).await else {
            return;
        };
        let mut controller = self.controller;
        let mut rail = controller.write();
        if let Some(viewport) = rail.viewport_mut() {
            viewport.record(metrics);
        }
        rail.on_scroll();
    }
}
