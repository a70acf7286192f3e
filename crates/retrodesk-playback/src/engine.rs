#![forbid(unsafe_code)]

//! The playback-engine collaborator boundary.
//!
//! The coordinator depends only on this capability set, never on a
//! concrete engine (a waveform renderer, an audio element, a test fake).
//! Engines load asynchronously; they report lifecycle through
//! [`EngineEvent`]s the host routes back into the coordinator together
//! with the generation stamp it captured at wiring time. Destruction is
//! `Drop`.

use crate::track::TrackSource;

/// Capability set required of a playback engine.
///
/// `play` before the resource is ready may be ignored by the engine; the
/// coordinator re-issues it when [`EngineEvent::Ready`] arrives.
pub trait PlaybackEngine {
    /// Begin loading an audio resource.
    fn load(&mut self, source: &TrackSource);

    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback, keeping position.
    fn pause(&mut self);

    /// The engine's own report of whether audio is advancing.
    fn is_playing(&self) -> bool;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds; 0 until the resource is ready.
    fn duration(&self) -> f64;

    /// Set output volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);
}

/// Constructs engines on demand.
///
/// The coordinator calls this each time the selected track changes,
/// after dropping the previous engine; at most one engine exists at any
/// instant.
pub trait EngineFactory {
    type Engine: PlaybackEngine;

    /// Build a fresh, idle engine.
    fn create(&mut self) -> Self::Engine;
}

/// Generation stamp for one engine instance.
///
/// Every rebuild bumps the stamp. Events delivered with an older stamp
/// come from a torn-down engine and are discarded, which is the whole
/// cancellation story: tear down, rebuild, ignore stragglers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSeq(u64);

impl EngineSeq {
    pub(crate) const ZERO: Self = Self(0);

    pub(crate) fn bump(&mut self) -> Self {
        self.0 += 1;
        *self
    }
}

/// Asynchronous notifications from the engine collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Resource decoded; duration is known.
    Ready { duration: f64 },
    /// Playback position advanced.
    Position { seconds: f64 },
    /// User or host seeked within the resource.
    Seek { seconds: f64 },
    /// The engine's native error report, passed through untranslated.
    Error { message: String },
}
