#![forbid(unsafe_code)]

//! Panel identity, catalog specs, and per-panel runtime state.

use retrodesk_core::{Point, Rect, Size, Viewport};

/// Breakpoint below which panels use their compact size, in pixels.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Stable string key identifying a panel within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelId(String);

impl PanelId {
    /// Create a panel id from any string-like key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Region of a panel's chrome under the pointer at press time.
///
/// The host hit-tests its own DOM/widget tree and reports the region;
/// the manager only needs to know whether the press landed on the drag
/// handle or on a control that must not start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The draggable title bar.
    TitleBar,
    /// Close button or other controls inside the title bar.
    Controls,
    /// The content area below the title bar.
    Content,
}

/// Immutable description of one catalog panel.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelSpec {
    pub id: PanelId,
    pub title: String,
    pub size: Size,
    /// Smaller footprint used when the viewport is at or below
    /// [`COMPACT_BREAKPOINT_PX`].
    pub compact_size: Option<Size>,
    /// Position used the first time the panel opens.
    pub initial_position: Point,
    /// Default stacking position; catalog values must be distinct.
    pub initial_z: i32,
    /// Whether the content region may scroll (host rendering hint).
    pub allow_scroll: bool,
}

impl PanelSpec {
    /// Create a spec with the given id, title, size, position, and z.
    #[must_use]
    pub fn new(
        id: impl Into<PanelId>,
        title: impl Into<String>,
        size: Size,
        initial_position: Point,
        initial_z: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            size,
            compact_size: None,
            initial_position,
            initial_z,
            allow_scroll: true,
        }
    }

    /// Set the compact size used below the breakpoint.
    #[must_use]
    pub fn compact_size(mut self, size: Size) -> Self {
        self.compact_size = Some(size);
        self
    }

    /// Disable content scrolling.
    #[must_use]
    pub fn fixed_content(mut self) -> Self {
        self.allow_scroll = false;
        self
    }

    /// Resolve the panel footprint for a viewport.
    #[must_use]
    pub fn size_for(&self, viewport: Viewport) -> Size {
        match self.compact_size {
            Some(compact) if viewport.width <= COMPACT_BREAKPOINT_PX => compact,
            _ => self.size,
        }
    }
}

/// Runtime state of one panel.
///
/// Mounted once at manager construction; open/close toggles visibility
/// without resetting position or stacking.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    id: PanelId,
    title: String,
    size: Size,
    position: Point,
    z_index: i32,
    open: bool,
    allow_scroll: bool,
}

impl Panel {
    pub(crate) fn from_spec(spec: &PanelSpec, viewport: Viewport) -> Self {
        Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            size: spec.size_for(viewport),
            position: spec.initial_position,
            z_index: spec.initial_z,
            open: false,
            allow_scroll: spec.allow_scroll,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PanelId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn allow_scroll(&self) -> bool {
        self.allow_scroll
    }

    /// Full bounds at the current position.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}
