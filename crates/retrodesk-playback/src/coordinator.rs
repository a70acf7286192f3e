#![forbid(unsafe_code)]

//! The playback coordinator.
//!
//! Selection and the playing flag are deliberately decoupled: selecting a
//! track implies intent to play, while pause/resume never changes the
//! selection. The engine is rebuilt only when the selected source
//! changes, and the old instance is dropped before its replacement is
//! constructed.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::engine::{EngineEvent, EngineFactory, EngineSeq, PlaybackEngine};
use crate::track::{Track, TrackRegistry, TrackSource};

/// What one row needs to render itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowState {
    /// This row's track is the current selection.
    pub selected: bool,
    /// This row's track is selected *and* the engine reports playback.
    pub playing: bool,
}

/// Published on every observable state mutation.
///
/// Hosts drain these after feeding input; rows re-render from the
/// matching snapshot accessors. This removes the staleness window of the
/// original polling design.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackChange {
    /// The selection moved to a new track.
    Selected(Track),
    /// The shared playing flag flipped.
    PlayState(bool),
    /// Duration became known for the current resource.
    Duration(f64),
    /// Playback position advanced or seeked.
    Position(f64),
    /// Output volume changed.
    Volume(f64),
    /// A row mounted or unmounted.
    RegistryChanged,
    /// The engine reported an error; passed through untranslated.
    EngineError(String),
}

/// Owns the selection, the playing flag, the row registry, and the one
/// playback engine instance.
pub struct PlaybackCoordinator<F: EngineFactory> {
    factory: F,
    registry: TrackRegistry,
    current: Option<Track>,
    playing: bool,
    volume: f64,
    engine: Option<F::Engine>,
    engine_seq: EngineSeq,
    duration: f64,
    position: f64,
    changes: VecDeque<PlaybackChange>,
}

impl<F: EngineFactory> PlaybackCoordinator<F> {
    /// Create a coordinator with no selection and an empty registry.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            registry: TrackRegistry::new(),
            current: None,
            playing: false,
            volume: 1.0,
            engine: None,
            engine_seq: EngineSeq::ZERO,
            duration: 0.0,
            position: 0.0,
            changes: VecDeque::new(),
        }
    }

    // --- Registry ----------------------------------------------------------

    /// Row mounted: add its track to the navigation order.
    pub fn register_track(&mut self, track: Track) {
        if self.registry.register(track) {
            self.changes.push_back(PlaybackChange::RegistryChanged);
        }
    }

    /// Row unmounted: drop it from the navigation order.
    ///
    /// The selection pointer is left alone even when the current track
    /// unmounts; navigation recovers via identity lookup.
    pub fn unregister_track(&mut self, source: &TrackSource) {
        if self.registry.unregister(source) {
            self.changes.push_back(PlaybackChange::RegistryChanged);
        }
    }

    /// The mounted-row registry.
    #[must_use]
    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    // --- Transport ---------------------------------------------------------

    /// Select a track and start (or keep) playing it.
    ///
    /// A different source tears the engine down and builds a fresh one;
    /// playback then starts when the new engine reports ready. The same
    /// source just resumes.
    pub fn select(&mut self, track: Track) {
        let same = self
            .current
            .as_ref()
            .is_some_and(|current| current.source == track.source);
        if same {
            if let Some(engine) = self.engine.as_mut() {
                engine.play();
            }
        } else {
            self.rebuild_engine(&track.source);
            debug!(track = %track.source, "track selected");
            self.current = Some(track.clone());
            self.changes.push_back(PlaybackChange::Selected(track));
        }
        self.set_playing(true);
    }

    /// Toggle play/pause.
    ///
    /// With no selection this selects the first registered track; with an
    /// empty registry it is a no-op. Returns whether anything happened.
    pub fn toggle_play_pause(&mut self) -> bool {
        if self.current.is_none() {
            let Some(first) = self.registry.first().cloned() else {
                return false;
            };
            self.select(first);
            return true;
        }
        self.toggle_engine()
    }

    /// Row click: the current row toggles, any other row selects.
    ///
    /// Unknown sources (rows racing their own unmount) are no-ops.
    pub fn toggle_row(&mut self, source: &TrackSource) -> bool {
        let is_current = self
            .current
            .as_ref()
            .is_some_and(|current| &current.source == source);
        if is_current {
            return self.toggle_engine();
        }
        let Some(track) = self.registry.get(source).cloned() else {
            return false;
        };
        self.select(track);
        true
    }

    /// Advance to the next track in mount order, wrapping at the end.
    pub fn next(&mut self) -> bool {
        let current = self.current.as_ref().map(|track| track.source.clone());
        let Some(track) = self.registry.next_after(current.as_ref()).cloned() else {
            return false;
        };
        self.select(track);
        true
    }

    /// Step back to the previous track, wrapping at the start.
    pub fn previous(&mut self) -> bool {
        let current = self.current.as_ref().map(|track| track.source.clone());
        let Some(track) = self.registry.prev_before(current.as_ref()).cloned() else {
            return false;
        };
        self.select(track);
        true
    }

    /// Set output volume, clamped to `[0, 1]`; applies to the current
    /// engine and every future rebuild.
    pub fn set_volume(&mut self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        if volume == self.volume {
            return;
        }
        self.volume = volume;
        if let Some(engine) = self.engine.as_mut() {
            engine.set_volume(volume);
        }
        self.changes.push_back(PlaybackChange::Volume(volume));
    }

    /// Rehydrate selection, play intent, and volume from a session
    /// snapshot.
    ///
    /// A restored selection gets a fresh engine; with the playing flag
    /// set, playback resumes when that engine reports ready.
    pub fn restore(&mut self, selection: Option<Track>, playing: bool, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        match selection {
            Some(track) => {
                self.rebuild_engine(&track.source);
                self.current = Some(track.clone());
                self.changes.push_back(PlaybackChange::Selected(track));
            }
            None => {
                // Teardown without a replacement still invalidates the
                // old generation, or a straggler event would pass the
                // stamp check.
                self.engine = None;
                self.engine_seq.bump();
                self.current = None;
                self.duration = 0.0;
                self.position = 0.0;
            }
        }
        self.set_playing(playing);
    }

    // --- Engine events -----------------------------------------------------

    /// Route an engine notification back into the coordinator.
    ///
    /// `seq` is the stamp the host captured when this engine was wired
    /// up; a mismatch means the event is from a torn-down engine and is
    /// discarded.
    pub fn handle_engine_event(&mut self, seq: EngineSeq, event: EngineEvent) {
        if seq != self.engine_seq {
            trace!(?seq, current = ?self.engine_seq, "stale engine event discarded");
            return;
        }
        match event {
            EngineEvent::Ready { duration } => {
                self.duration = duration;
                self.changes.push_back(PlaybackChange::Duration(duration));
                if self.playing
                    && let Some(engine) = self.engine.as_mut()
                {
                    engine.play();
                }
            }
            EngineEvent::Position { seconds } | EngineEvent::Seek { seconds } => {
                self.position = seconds;
                self.changes.push_back(PlaybackChange::Position(seconds));
            }
            EngineEvent::Error { message } => {
                warn!(%message, "engine error");
                self.changes.push_back(PlaybackChange::EngineError(message));
            }
        }
    }

    // --- Snapshots ---------------------------------------------------------

    /// The current selection.
    #[must_use]
    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// The shared playing flag (intent, mirrored from the engine on
    /// every toggle).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Position of the current resource in seconds.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration of the current resource in seconds (0 until ready).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Current output volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Stamp identifying the live engine generation.
    ///
    /// Hosts attach this to every event they forward from the engine
    /// they wired up.
    #[must_use]
    pub fn engine_seq(&self) -> EngineSeq {
        self.engine_seq
    }

    /// Display state for one row, by track identity.
    ///
    /// At most one row can ever report `playing`, because only the
    /// selected row consults the single engine.
    #[must_use]
    pub fn row_state(&self, source: &TrackSource) -> RowState {
        let selected = self
            .current
            .as_ref()
            .is_some_and(|current| &current.source == source);
        let playing = selected
            && self
                .engine
                .as_ref()
                .is_some_and(|engine| engine.is_playing());
        RowState { selected, playing }
    }

    /// Drain every change published since the last drain.
    pub fn drain_changes(&mut self) -> Vec<PlaybackChange> {
        self.changes.drain(..).collect()
    }

    // --- Internals ---------------------------------------------------------

    fn rebuild_engine(&mut self, source: &TrackSource) {
        // Old instance must be gone before the replacement exists.
        if self.engine.take().is_some() {
            trace!(seq = ?self.engine_seq, "engine torn down");
        }
        let seq = self.engine_seq.bump();
        let mut engine = self.factory.create();
        engine.set_volume(self.volume);
        engine.load(source);
        self.engine = Some(engine);
        self.duration = 0.0;
        self.position = 0.0;
        debug!(?seq, track = %source, "engine rebuilt");
    }

    fn toggle_engine(&mut self) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        let was_playing = engine.is_playing();
        if was_playing {
            engine.pause();
        } else {
            engine.play();
        }
        self.set_playing(!was_playing);
        true
    }

    fn set_playing(&mut self, playing: bool) {
        if self.playing != playing {
            self.playing = playing;
            self.changes.push_back(PlaybackChange::PlayState(playing));
        }
    }
}
