#![forbid(unsafe_code)]

//! Retro desktop site core: public facade crate.
//!
//! Re-exports the stable surface of the state crates and offers a
//! lightweight prelude. Hosts depend on this crate, translate their
//! platform's input into the canonical event types, and render from the
//! state snapshots.

// --- Core re-exports -------------------------------------------------------

pub use retrodesk_core::{
    InputFocus, KeyCode, KeyEvent, Modifiers, Point, PointerEvent, PointerPhase, PointerSource,
    Rect, Size, Viewport,
};

// --- Windowing re-exports --------------------------------------------------

pub use retrodesk_windowing::{
    CatalogError, DesktopManager, HitRegion, Panel, PanelId, PanelSpec, clamp_position,
};

// --- Playback re-exports ---------------------------------------------------

pub use retrodesk_playback::{
    EngineEvent, EngineFactory, EngineSeq, KeyDisposition, MarqueeMetrics, PlaybackChange,
    PlaybackCoordinator, PlaybackEngine, ReconcileClock, RowState, Track, TrackRegistry,
    TrackSource, handle_key,
};

// --- Shell re-exports ------------------------------------------------------

#[cfg(feature = "shell")]
pub use retrodesk_shell::{CursorTrail, SessionSnapshot, Shell};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DesktopManager, EngineEvent, EngineFactory, HitRegion, InputFocus, KeyCode, KeyDisposition,
        KeyEvent, PanelSpec, PlaybackChange, PlaybackCoordinator, PlaybackEngine, Point,
        PointerEvent, PointerPhase, Size, Track, TrackSource, Viewport, handle_key,
    };

    #[cfg(feature = "shell")]
    pub use crate::{SessionSnapshot, Shell};

    pub use crate::{core, playback, windowing};
}

pub use retrodesk_core as core;
pub use retrodesk_playback as playback;
#[cfg(feature = "shell")]
pub use retrodesk_shell as shell;
pub use retrodesk_windowing as windowing;
