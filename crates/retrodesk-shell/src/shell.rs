#![forbid(unsafe_code)]

//! The shell: one desktop, one playback coordinator, one cursor trail.
//!
//! Hosts hit-test their own widget tree, translate platform input into
//! the canonical event types, and feed them here; the shell routes them
//! and keeps all mutable state in one place.

use tracing::debug;
use unicode_width::UnicodeWidthStr;
use web_time::Instant;

use retrodesk_core::{InputFocus, KeyEvent, PointerEvent, PointerPhase, PointerSource, Viewport};
use retrodesk_playback::{
    EngineEvent, EngineFactory, EngineSeq, KeyDisposition, MarqueeMetrics, PlaybackChange,
    PlaybackCoordinator, handle_key, marquee,
};
use retrodesk_windowing::{CatalogError, DesktopManager, HitRegion};

use crate::data;
use crate::trail::CursorTrail;

/// Approximate pixel width of one monospace glyph at the player's font
/// size, used to estimate title widths for the marquee.
const GLYPH_WIDTH_PX: f64 = 8.0;

/// Everything the page keeps between renders.
pub struct Shell<F: EngineFactory> {
    desktop: DesktopManager,
    playback: PlaybackCoordinator<F>,
    trail: CursorTrail,
}

impl<F: EngineFactory> Shell<F> {
    /// Build a shell over the built-in catalogs.
    pub fn new(factory: F, viewport: Viewport) -> Result<Self, CatalogError> {
        let desktop = DesktopManager::new(&data::panel_catalog(), viewport)?;
        let mut playback = PlaybackCoordinator::new(factory);
        for track in data::playlist() {
            playback.register_track(track);
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "shell constructed"
        );
        Ok(Self {
            desktop,
            playback,
            trail: CursorTrail::new(),
        })
    }

    /// The desktop window manager.
    #[must_use]
    pub fn desktop(&self) -> &DesktopManager {
        &self.desktop
    }

    /// Mutable desktop access for open/close/raise and snapshots.
    pub fn desktop_mut(&mut self) -> &mut DesktopManager {
        &mut self.desktop
    }

    /// The playback coordinator.
    #[must_use]
    pub fn playback(&self) -> &PlaybackCoordinator<F> {
        &self.playback
    }

    /// Mutable playback access for transport and row calls.
    pub fn playback_mut(&mut self) -> &mut PlaybackCoordinator<F> {
        &mut self.playback
    }

    /// The cursor trail.
    #[must_use]
    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    /// Pointer event that the host hit-tested to a panel region.
    pub fn pointer_on_panel(&mut self, id: &str, event: PointerEvent, region: HitRegion) {
        self.track_cursor(event);
        match event.phase {
            PointerPhase::Down => self.desktop.pointer_down(id, event.position, region),
            PointerPhase::Move => self.desktop.pointer_move(event.position),
            PointerPhase::Up => self.desktop.pointer_up(),
            PointerPhase::Cancel => self.desktop.pointer_cancel(),
        }
    }

    /// Pointer event over empty desktop.
    ///
    /// Moves still feed an active drag (the pointer routinely outruns
    /// the panel it is dragging) and the cursor trail.
    pub fn pointer_on_desktop(&mut self, event: PointerEvent) {
        self.track_cursor(event);
        match event.phase {
            PointerPhase::Move => self.desktop.pointer_move(event.position),
            PointerPhase::Up => self.desktop.pointer_up(),
            PointerPhase::Cancel => self.desktop.pointer_cancel(),
            PointerPhase::Down => {}
        }
    }

    /// Pointer left the page entirely.
    pub fn pointer_left(&mut self) {
        self.trail.clear();
    }

    /// Keyboard input with the host's report of what holds focus.
    pub fn key(&mut self, key: KeyEvent, focus: InputFocus) -> KeyDisposition {
        handle_key(&mut self.playback, key, focus)
    }

    /// Forward an engine notification.
    pub fn engine_event(&mut self, seq: EngineSeq, event: EngineEvent) {
        self.playback.handle_engine_event(seq, event);
    }

    /// Host viewport resized.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.desktop.set_viewport(viewport);
    }

    /// Periodic tick: ages the cursor trail.
    pub fn tick(&mut self, now: Instant) {
        self.trail.decay(now);
    }

    /// Drain pending playback changes for rendering.
    pub fn drain_changes(&mut self) -> Vec<PlaybackChange> {
        self.playback.drain_changes()
    }

    /// Whether native touch gestures should be suppressed right now.
    #[must_use]
    pub fn suppress_native_gestures(&self) -> bool {
        self.desktop.suppress_native_gestures()
    }

    /// Marquee metrics for a track title in a container of `wrap_width_px`.
    ///
    /// Width is estimated from the title's display columns; hosts with
    /// real text measurement should call [`marquee::measure`] directly.
    #[must_use]
    pub fn marquee_for_title(title: &str, wrap_width_px: f64) -> MarqueeMetrics {
        let content_width_px = title.width() as f64 * GLYPH_WIDTH_PX;
        marquee::measure(wrap_width_px, content_width_px)
    }

    fn track_cursor(&mut self, event: PointerEvent) {
        if event.source == PointerSource::Mouse && event.phase == PointerPhase::Move {
            self.trail.record(event.position);
        }
    }
}
