#![forbid(unsafe_code)]

//! Desktop manager: stacking order, open state, and drag handling.
//!
//! All operations referencing an unknown panel id are no-ops; out-of-range
//! pointer input is absorbed by clamping. Nothing here can fail after
//! construction.

use retrodesk_core::{Point, Size, Viewport};
use tracing::{debug, trace};

use crate::panel::{HitRegion, Panel, PanelId, PanelSpec};

/// Catalog validation failure at manager construction.
#[derive(Debug)]
pub enum CatalogError {
    /// Two specs share the same id.
    DuplicatePanel(PanelId),
    /// A spec has a zero or negative dimension.
    DegenerateSize(PanelId),
    /// Two specs share the same initial z-index.
    AmbiguousStacking(PanelId),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePanel(id) => write!(f, "duplicate panel id `{id}`"),
            Self::DegenerateSize(id) => write!(f, "panel `{id}` has a degenerate size"),
            Self::AmbiguousStacking(id) => {
                write!(f, "panel `{id}` reuses another panel's initial z-index")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Clamp a panel origin so the full rectangle stays inside the viewport.
///
/// Min-then-max per axis: a panel larger than the viewport pins to 0
/// rather than oscillating, collapsing the valid range to a single point.
#[must_use]
pub fn clamp_position(position: Point, size: Size, viewport: Viewport) -> Point {
    let max_x = viewport.width - size.width;
    let max_y = viewport.height - size.height;
    Point::new(position.x.min(max_x).max(0.0), position.y.min(max_y).max(0.0))
}

/// An armed drag: which panel, and where inside it the pointer grabbed.
#[derive(Debug, Clone, Copy)]
struct DragState {
    panel: usize,
    grab_offset: Point,
}

/// Owns every panel's open/position/stacking state for one page.
///
/// Panels are created once at construction from the catalog and never
/// destroyed; visibility toggles via [`DesktopManager::open`] and
/// [`DesktopManager::close`].
#[derive(Debug)]
pub struct DesktopManager {
    panels: Vec<Panel>,
    viewport: Viewport,
    drag: Option<DragState>,
    /// Next z-index handed out by `raise`; always above every panel.
    next_z: i32,
}

impl DesktopManager {
    /// Build a manager from a panel catalog.
    ///
    /// Panel sizes are resolved against `viewport` once, here (the
    /// original page picks compact sizes at mount, not reactively).
    pub fn new(specs: &[PanelSpec], viewport: Viewport) -> Result<Self, CatalogError> {
        let mut panels: Vec<Panel> = Vec::with_capacity(specs.len());
        for spec in specs {
            if panels.iter().any(|panel| panel.id() == &spec.id) {
                return Err(CatalogError::DuplicatePanel(spec.id.clone()));
            }
            if spec.size_for(viewport).is_degenerate() {
                return Err(CatalogError::DegenerateSize(spec.id.clone()));
            }
            if specs
                .iter()
                .any(|other| other.id != spec.id && other.initial_z == spec.initial_z)
            {
                return Err(CatalogError::AmbiguousStacking(spec.id.clone()));
            }
            panels.push(Panel::from_spec(spec, viewport));
        }
        let next_z = panels
            .iter()
            .map(Panel::z_index)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        Ok(Self {
            panels,
            viewport,
            drag: None,
            next_z,
        })
    }

    /// Current viewport the manager clamps against.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Look up a panel by id.
    #[must_use]
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id().as_str() == id)
    }

    /// All panels in catalog order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Panel ids sorted back-to-front by z-index.
    #[must_use]
    pub fn stacking_order(&self) -> Vec<&PanelId> {
        let mut order: Vec<&Panel> = self.panels.iter().collect();
        order.sort_by_key(|panel| panel.z_index());
        order.into_iter().map(Panel::id).collect()
    }

    /// True while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the host should suppress native touch gestures right now.
    ///
    /// Scroll/zoom must not fire while a panel is being dragged.
    #[must_use]
    pub fn suppress_native_gestures(&self) -> bool {
        self.is_dragging()
    }

    /// Open a panel: mark it visible, raise it, and repair its position.
    ///
    /// Reopening restores the last dragged position; the clamp covers the
    /// case where the viewport shrank while the panel was closed.
    pub fn open(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            trace!(panel = id, "open ignored: unknown panel");
            return;
        };
        self.panels[index].set_open(true);
        self.raise_index(index);
        self.clamp_panel(index);
        debug!(panel = id, "panel opened");
    }

    /// Close a panel, keeping its position and z-index for the next open.
    pub fn close(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            trace!(panel = id, "close ignored: unknown panel");
            return;
        };
        if self.drag.is_some_and(|drag| drag.panel == index) {
            self.drag = None;
        }
        self.panels[index].set_open(false);
        debug!(panel = id, "panel closed");
    }

    /// Bring a panel above all others.
    ///
    /// The counter is monotonic, so two raises can never tie. Closed
    /// panels keep their stacking slot untouched.
    pub fn raise(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if !self.panels[index].is_open() {
            trace!(panel = id, "raise ignored: panel closed");
            return;
        }
        self.raise_index(index);
    }

    /// Pointer press on a panel.
    ///
    /// Any region raises the panel; only the title bar arms a drag, and
    /// the controls region never does (so the close button stays a click).
    pub fn pointer_down(&mut self, id: &str, position: Point, region: HitRegion) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if !self.panels[index].is_open() {
            return;
        }
        self.raise_index(index);
        if region != HitRegion::TitleBar {
            return;
        }
        let grab_offset = position.offset_from(self.panels[index].position());
        self.drag = Some(DragState {
            panel: index,
            grab_offset,
        });
        debug!(panel = id, "drag started");
    }

    /// Pointer movement while a drag is active; no-op otherwise.
    ///
    /// The new origin is pointer minus grab offset, clamped so the panel
    /// rectangle stays fully inside the viewport.
    pub fn pointer_move(&mut self, position: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let panel = &mut self.panels[drag.panel];
        let raw = position.offset_from(drag.grab_offset);
        panel.set_position(clamp_position(raw, panel.size(), self.viewport));
    }

    /// Pointer release: finalize the drag at the last clamped position.
    ///
    /// Releasing outside the viewport is fine; the position was already
    /// clamped on the final move.
    pub fn pointer_up(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(panel = %self.panels[drag.panel].id(), "drag ended");
        }
    }

    /// Platform aborted the pointer sequence; same outcome as a release.
    pub fn pointer_cancel(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(panel = %self.panels[drag.panel].id(), "drag cancelled");
        }
    }

    /// Viewport resized: re-clamp every open panel.
    ///
    /// This is constraint repair, not a drag; closed panels are repaired
    /// lazily on their next open.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for index in 0..self.panels.len() {
            if self.panels[index].is_open() {
                self.clamp_panel(index);
            }
        }
    }

    /// Restore one panel's persisted position, stacking slot, and
    /// visibility, as read back from a session snapshot.
    ///
    /// The position is clamped against the current viewport and the
    /// raise counter moves past the restored z so the next raise still
    /// lands on top.
    pub fn restore_panel(&mut self, id: &str, position: Point, z_index: i32, open: bool) {
        let Some(index) = self.index_of(id) else {
            trace!(panel = id, "restore ignored: unknown panel");
            return;
        };
        let panel = &mut self.panels[index];
        panel.set_open(open);
        panel.set_z_index(z_index);
        let size = panel.size();
        let clamped = clamp_position(position, size, self.viewport);
        panel.set_position(clamped);
        if z_index >= self.next_z {
            self.next_z = z_index.saturating_add(1);
        }
        debug!(panel = id, z = z_index, "panel restored");
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.panels.iter().position(|panel| panel.id().as_str() == id)
    }

    fn raise_index(&mut self, index: usize) {
        let z = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        self.panels[index].set_z_index(z);
        trace!(panel = %self.panels[index].id(), z, "panel raised");
    }

    fn clamp_panel(&mut self, index: usize) {
        let panel = &mut self.panels[index];
        let clamped = clamp_position(panel.position(), panel.size(), self.viewport);
        if clamped != panel.position() {
            panel.set_position(clamped);
        }
    }
}
