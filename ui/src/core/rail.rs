//! Horizontal carousel ("rail") controller.
//!
//! A rail is a scrollable row of snap-aligned cards. The controller never
//! touches the DOM directly: it talks to a bound [`Viewport`] and keeps a small
//! state machine plus the derived active index that position dots render
//! against.
//!
//! ```text
//!   Idle ──begin_drag──▶ Dragging ──end_drag──▶ Idle
//!    │                      ▲
//!    └──advance──▶ Animating
//!                     │
//!                     └── on_scroll reaches target ──▶ Idle
//! ```
//!
//! Three geometries cover the page:
//! - facilities: fixed 320px cards with a 24px gap, paging by whole screens
//! - programs: cards spanning the viewport minus a 48px inset, draggable
//! - objectives: three cards per viewport width

use thiserror::Error;
use tracing::trace;

/// Facilities card width in CSS pixels.
pub const FACILITY_CARD_WIDTH: f64 = 320.0;
/// Gap between facilities cards.
pub const FACILITY_CARD_GAP: f64 = 24.0;
/// Horizontal space not covered by a programs card.
pub const PROGRAM_CARD_INSET: f64 = 48.0;
/// Objectives visible per viewport.
pub const OBJECTIVES_PER_PAGE: u32 = 3;
/// Pointer travel multiplier while drag-panning.
pub const DRAG_AMPLIFICATION: f64 = 2.0;

/// Offsets closer than this to an animation target count as arrived.
const SETTLE_EPSILON: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RailGeometry {
    /// Cards of a fixed pixel width separated by a fixed gap.
    FixedItem { item_width: f64, gap: f64 },
    /// `per_page` cards share the viewport width.
    FractionOfViewport { per_page: u32 },
    /// One card per viewport, narrowed by `inset`.
    InsetViewport { inset: f64 },
}

impl RailGeometry {
    /// Distance between the leading edges of two neighbouring cards.
    pub fn stride(&self, viewport_width: f64) -> f64 {
        match *self {
            RailGeometry::FixedItem { item_width, gap } => item_width + gap,
            RailGeometry::FractionOfViewport { per_page } if per_page > 0 => {
                viewport_width / f64::from(per_page)
            }
            RailGeometry::FractionOfViewport { .. } => 0.0,
            RailGeometry::InsetViewport { inset } => viewport_width - inset,
        }
    }

    /// Distance covered by one arrow press.
    ///
    /// Fixed-width rails page by as many whole cards as fit in the viewport.
    pub fn page_step(&self, viewport_width: f64) -> f64 {
        if viewport_width <= 0.0 {
            return 0.0;
        }
        let stride = self.stride(viewport_width);
        match self {
            RailGeometry::FixedItem { .. } if stride > 0.0 => {
                (viewport_width / stride).floor() * stride
            }
            _ => stride,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailConfig {
    pub geometry: RailGeometry,
    pub item_count: usize,
    /// `Some` when the rail can be panned with the pointer.
    pub drag_amplification: Option<f64>,
}

impl RailConfig {
    pub fn facilities(item_count: usize) -> Self {
        Self {
            geometry: RailGeometry::FixedItem {
                item_width: FACILITY_CARD_WIDTH,
                gap: FACILITY_CARD_GAP,
            },
            item_count,
            drag_amplification: None,
        }
    }

    pub fn programs(item_count: usize) -> Self {
        Self {
            geometry: RailGeometry::InsetViewport {
                inset: PROGRAM_CARD_INSET,
            },
            item_count,
            drag_amplification: Some(DRAG_AMPLIFICATION),
        }
    }

    pub fn objectives(item_count: usize) -> Self {
        Self {
            geometry: RailGeometry::FractionOfViewport {
                per_page: OBJECTIVES_PER_PAGE,
            },
            item_count,
            drag_amplification: None,
        }
    }
}

/// Snapshot of a viewport's layout, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportMetrics {
    pub width: f64,
    /// Current horizontal scroll offset. Negative in right-to-left flow.
    pub offset: f64,
    /// Left edge of the viewport in page coordinates.
    pub left_edge: f64,
    /// Largest reachable offset magnitude (`scroll width - client width`).
    pub max_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The scrollable element a rail drives.
pub trait Viewport {
    fn metrics(&self) -> ViewportMetrics;
    /// Scroll relative to the current offset. Returns before a smooth scroll
    /// has finished.
    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior);
    fn set_offset(&mut self, offset: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    fn sign(self) -> f64 {
        match self {
            ScrollDirection::Forward => 1.0,
            ScrollDirection::Backward => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position relative to the viewport's left edge at grab time.
    pub start_x: f64,
    pub base_offset: f64,
    pub amplification: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RailState {
    #[default]
    Idle,
    Dragging(DragSession),
    Animating {
        target: f64,
    },
}

/// Cursor hint for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Default,
    Grab,
    Grabbing,
}

impl Affordance {
    pub fn css_class(self) -> &'static str {
        match self {
            Affordance::Default => "rail--static",
            Affordance::Grab => "rail--grab",
            Affordance::Grabbing => "rail--grabbing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RailError {
    #[error("rail viewport is not bound")]
    UnboundViewport,
    #[error("computed scroll step is not positive")]
    DegenerateStep,
    #[error("rail does not support pointer panning")]
    NotDraggable,
    #[error("no drag session in progress")]
    NotDragging,
    #[error("a drag session is already in progress")]
    DragInProgress,
    #[error("a programmatic scroll is still in flight")]
    AnimationInProgress,
}

#[derive(Debug)]
pub struct RailController<V> {
    config: RailConfig,
    viewport: Option<V>,
    state: RailState,
    active_index: usize,
    mirrored: bool,
    /// Distance to the animation target at the last scroll observation.
    last_gap: Option<f64>,
}

impl<V: Viewport> RailController<V> {
    pub fn new(config: RailConfig) -> Self {
        Self {
            config,
            viewport: None,
            state: RailState::Idle,
            active_index: 0,
            mirrored: false,
            last_gap: None,
        }
    }

    pub fn bind(&mut self, viewport: V) {
        self.viewport = Some(viewport);
        self.on_scroll();
    }

    /// Drop the viewport; any drag or animation in flight is forgotten.
    pub fn unbind(&mut self) -> Option<V> {
        self.settle();
        self.viewport.take()
    }

    pub fn is_bound(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    pub fn config(&self) -> &RailConfig {
        &self.config
    }

    pub fn state(&self) -> RailState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of position dots. Always the item count.
    pub fn indicator_count(&self) -> usize {
        self.config.item_count
    }

    /// Treat offsets as right-to-left (browsers report them as negative).
    pub fn set_mirrored(&mut self, mirrored: bool) {
        if self.mirrored != mirrored {
            self.mirrored = mirrored;
            self.on_scroll();
        }
    }

    pub fn affordance(&self) -> Affordance {
        match (self.config.drag_amplification, self.state) {
            (None, _) => Affordance::Default,
            (Some(_), RailState::Dragging(_)) => Affordance::Grabbing,
            (Some(_), _) => Affordance::Grab,
        }
    }

    /// Smooth-scroll one page in `direction` and return the signed delta.
    pub fn advance(&mut self, direction: ScrollDirection) -> Result<f64, RailError> {
        if matches!(self.state, RailState::Dragging(_)) {
            return Err(RailError::DragInProgress);
        }
        let geometry = self.config.geometry;
        let viewport = self.viewport.as_mut().ok_or(RailError::UnboundViewport)?;
        let metrics = viewport.metrics();
        let step = geometry.page_step(metrics.width);
        if !step.is_finite() || step <= 0.0 {
            return Err(RailError::DegenerateStep);
        }

        let delta = step * direction.sign();
        viewport.scroll_by(delta, ScrollBehavior::Smooth);

        let target = self.clamp_to_extent(metrics.offset + delta, &metrics);
        let gap = (target - metrics.offset).abs();
        if gap < SETTLE_EPSILON {
            // Already at the edge; the browser will not emit a scroll event.
            self.settle();
        } else {
            self.state = RailState::Animating { target };
            self.last_gap = Some(gap);
        }
        trace!(delta, target, "rail advance");
        Ok(delta)
    }

    /// Recompute the active index from the viewport's current offset.
    ///
    /// Safe to call at any time, from any scroll source.
    pub fn on_scroll(&mut self) -> usize {
        let Some(metrics) = self.viewport.as_ref().map(|vp| vp.metrics()) else {
            return self.active_index;
        };

        if let RailState::Animating { target } = self.state {
            // The extent may have shrunk since `advance`.
            let reachable = self.clamp_to_extent(target, &metrics);
            let gap = (metrics.offset - reachable).abs();
            let receding = self
                .last_gap
                .is_some_and(|last| gap > last + SETTLE_EPSILON);
            if gap < SETTLE_EPSILON || receding {
                // Receding means another producer (wheel, touch) took over.
                self.settle();
            } else {
                self.last_gap = Some(gap);
            }
        }

        let stride = self.config.geometry.stride(metrics.width);
        if stride.is_finite() && stride > 0.0 {
            let logical = if self.mirrored {
                -metrics.offset
            } else {
                metrics.offset
            };
            self.active_index = index_for_offset(logical, stride, self.config.item_count);
        }
        self.active_index
    }

    pub fn begin_drag(&mut self, pointer_x: f64) -> Result<(), RailError> {
        let amplification = self.config.drag_amplification.ok_or(RailError::NotDraggable)?;
        match self.state {
            RailState::Idle => {}
            RailState::Dragging(_) => return Err(RailError::DragInProgress),
            RailState::Animating { .. } => return Err(RailError::AnimationInProgress),
        }
        let metrics = self
            .viewport
            .as_ref()
            .ok_or(RailError::UnboundViewport)?
            .metrics();
        self.state = RailState::Dragging(DragSession {
            start_x: pointer_x - metrics.left_edge,
            base_offset: metrics.offset,
            amplification,
        });
        Ok(())
    }

    /// Track the pointer 1:1 (times the amplification). Returns the new offset.
    pub fn drag_move(&mut self, pointer_x: f64) -> Result<f64, RailError> {
        let RailState::Dragging(session) = self.state else {
            return Err(RailError::NotDragging);
        };
        let viewport = self.viewport.as_mut().ok_or(RailError::UnboundViewport)?;
        let x = pointer_x - viewport.metrics().left_edge;
        let walk = (x - session.start_x) * session.amplification;
        let offset = session.base_offset - walk;
        viewport.set_offset(offset);
        Ok(offset)
    }

    /// Finish the drag. Returns whether a session was actually open.
    pub fn end_drag(&mut self) -> bool {
        if matches!(self.state, RailState::Dragging(_)) {
            self.state = RailState::Idle;
            true
        } else {
            false
        }
    }
}

impl<V> RailController<V> {
    fn settle(&mut self) {
        self.state = RailState::Idle;
        self.last_gap = None;
    }

    /// Clamp a physical offset to `[0, max]`, or `[-max, 0]` when mirrored.
    fn clamp_to_extent(&self, offset: f64, metrics: &ViewportMetrics) -> f64 {
        let max = metrics.max_offset.max(0.0);
        if self.mirrored {
            offset.clamp(-max, 0.0)
        } else {
            offset.clamp(0.0, max)
        }
    }
}

/// Nearest card boundary to `offset`, clamped to `0..item_count`.
pub fn index_for_offset(offset: f64, stride: f64, item_count: usize) -> usize {
    if item_count == 0 || !(stride > 0.0) || !offset.is_finite() {
        return 0;
    }
    let raw = (offset / stride).round();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(item_count - 1)
    }
}
