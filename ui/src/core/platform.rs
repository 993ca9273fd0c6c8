//! Host glue: the real document and scrollable elements behind the core
//! traits.
//!
//! On wasm the document attributes are written synchronously through
//! `web-sys`. Other renderers (desktop webview) go through `document::eval`.
//! Scroll commands always use `eval`, since Dioxus exposes no scroll setter on
//! mounted elements.

use dioxus::prelude::*;

use super::locale::{DocumentSink, TextDirection};
use super::rail::{ScrollBehavior, Viewport, ViewportMetrics};

/// Writes `dir` / `lang` on the root `<html>` element.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDocument;

#[cfg(target_arch = "wasm32")]
impl HostDocument {
    fn set_root_attribute(name: &str, value: &str) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(el) => {
                if let Err(err) = el.set_attribute(name, value) {
                    tracing::warn!(attribute = name, error = ?err, "failed to set root attribute");
                }
            }
            None => tracing::warn!(attribute = name, "document root unavailable"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HostDocument {
    fn set_root_attribute(name: &str, value: &str) {
        let script = format!(
            "document.documentElement.setAttribute({}, {});",
            js_string(name),
            js_string(value)
        );
        document::eval(&script);
    }
}

impl DocumentSink for HostDocument {
    fn set_direction(&mut self, direction: TextDirection) {
        Self::set_root_attribute("dir", direction.as_attr());
    }

    fn set_language(&mut self, code: &str) {
        Self::set_root_attribute("lang", code);
    }
}

/// A scroll container addressed by DOM id.
///
/// Layout is cached: the host refreshes it from mount/scroll events via
/// [`DomViewport::record`].
#[derive(Debug, Clone)]
pub struct DomViewport {
    element_id: &'static str,
    metrics: ViewportMetrics,
}

impl DomViewport {
    pub fn new(element_id: &'static str) -> Self {
        Self {
            element_id,
            metrics: ViewportMetrics::default(),
        }
    }

    pub fn element_id(&self) -> &'static str {
        self.element_id
    }

    pub fn record(&mut self, metrics: ViewportMetrics) {
        self.metrics = metrics;
    }

    fn run(&self, body: &str) {
        let script = format!(
            "{{ const el = document.getElementById({}); if (el) {{ {body} }} }}",
            js_string(self.element_id)
        );
        document::eval(&script);
    }
}

impl Viewport for DomViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        let behavior = match behavior {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        };
        self.run(&format!(
            "el.scrollBy({{ left: {delta}, behavior: \"{behavior}\" }});"
        ));
    }

    fn set_offset(&mut self, offset: f64) {
        self.metrics.offset = offset;
        self.run(&format!("el.scrollLeft = {offset};"));
    }
}

/// Read the current layout of a mounted element.
pub async fn measure(element: &MountedData) -> Option<ViewportMetrics> {
    let rect = element.get_client_rect().await.ok()?;
    let offset = element.get_scroll_offset().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let width = rect.size.width;
    Some(ViewportMetrics {
        width,
        offset: offset.x,
        left_edge: rect.origin.x,
        max_offset: (size.width - width).max(0.0),
    })
}

fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}
