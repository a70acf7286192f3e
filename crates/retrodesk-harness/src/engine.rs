#![forbid(unsafe_code)]

//! Scripted playback engine.
//!
//! The coordinator owns its engine outright, so tests cannot reach in to
//! check what it was told. [`ScriptedFactory`] keeps a probe handle for
//! every engine it builds; the probe records loads, play/pause calls, and
//! volume, and survives the engine's destruction so teardown order is
//! observable too.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use retrodesk_playback::{EngineFactory, PlaybackEngine, TrackSource};

/// Shared record of everything one engine instance was asked to do.
#[derive(Debug, Default)]
pub struct EngineProbe {
    /// Sources passed to `load`, in call order.
    pub loaded: Vec<TrackSource>,
    /// Current playing flag.
    pub playing: bool,
    /// Number of `play` calls, including redundant ones.
    pub play_calls: u32,
    /// Number of `pause` calls.
    pub pause_calls: u32,
    /// Last volume set.
    pub volume: f64,
    /// Position the engine pretends to be at.
    pub position: f64,
    /// Duration the engine pretends the resource has.
    pub duration: f64,
    /// The engine instance has been dropped.
    pub destroyed: bool,
}

/// Engine fake driven entirely by its probe.
pub struct ScriptedEngine {
    probe: Rc<RefCell<EngineProbe>>,
}

impl ScriptedEngine {
    /// The probe backing this engine.
    #[must_use]
    pub fn probe(&self) -> Rc<RefCell<EngineProbe>> {
        self.probe.clone()
    }
}

impl PlaybackEngine for ScriptedEngine {
    fn load(&mut self, source: &TrackSource) {
        trace!(%source, "scripted engine load");
        self.probe.borrow_mut().loaded.push(source.clone());
    }

    fn play(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.playing = true;
        probe.play_calls += 1;
    }

    fn pause(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.playing = false;
        probe.pause_calls += 1;
    }

    fn is_playing(&self) -> bool {
        self.probe.borrow().playing
    }

    fn current_time(&self) -> f64 {
        self.probe.borrow().position
    }

    fn duration(&self) -> f64 {
        self.probe.borrow().duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.probe.borrow_mut().volume = volume;
    }
}

impl Drop for ScriptedEngine {
    fn drop(&mut self) {
        self.probe.borrow_mut().destroyed = true;
    }
}

/// Builds [`ScriptedEngine`]s and remembers every probe.
#[derive(Default)]
pub struct ScriptedFactory {
    probes: Rc<RefCell<Vec<Rc<RefCell<EngineProbe>>>>>,
}

impl ScriptedFactory {
    /// Create a factory with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probes for every engine built so far, in construction order.
    #[must_use]
    pub fn probes(&self) -> Rc<RefCell<Vec<Rc<RefCell<EngineProbe>>>>> {
        self.probes.clone()
    }

    /// Probe of the most recently built engine.
    #[must_use]
    pub fn latest_probe(&self) -> Option<Rc<RefCell<EngineProbe>>> {
        self.probes.borrow().last().cloned()
    }

    /// Number of engines built so far.
    #[must_use]
    pub fn engines_built(&self) -> usize {
        self.probes.borrow().len()
    }
}

impl EngineFactory for ScriptedFactory {
    type Engine = ScriptedEngine;

    fn create(&mut self) -> ScriptedEngine {
        let probe = Rc::new(RefCell::new(EngineProbe::default()));
        self.probes.borrow_mut().push(probe.clone());
        ScriptedEngine { probe }
    }
}
