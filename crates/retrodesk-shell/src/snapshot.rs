#![forbid(unsafe_code)]

//! JSON session snapshots.
//!
//! Captures the state a visitor would notice across a reload: which
//! panels are open and where, the stacking order, the selected track,
//! play intent, and volume. Trail and drag state are transient and are
//! not captured.

use serde::{Deserialize, Serialize};

use retrodesk_core::Point;
use retrodesk_playback::{EngineFactory, Track, TrackSource};

use crate::shell::Shell;

/// Snapshot (de)serialization failure.
#[derive(Debug)]
pub struct SnapshotError(serde_json::Error);

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session snapshot: {}", self.0)
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// One panel's persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub id: String,
    pub position: Point,
    pub z_index: i32,
    pub open: bool,
}

/// Persisted playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub selected: Option<Track>,
    pub playing: bool,
    pub volume: f64,
}

/// Everything a session keeps across a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub panels: Vec<PanelSnapshot>,
    pub playback: PlaybackSnapshot,
}

impl SessionSnapshot {
    /// Capture the current shell state.
    #[must_use]
    pub fn capture<F: EngineFactory>(shell: &Shell<F>) -> Self {
        let panels = shell
            .desktop()
            .panels()
            .map(|panel| PanelSnapshot {
                id: panel.id().as_str().to_owned(),
                position: panel.position(),
                z_index: panel.z_index(),
                open: panel.is_open(),
            })
            .collect();
        let playback = PlaybackSnapshot {
            selected: shell.playback().current().cloned(),
            playing: shell.playback().is_playing(),
            volume: shell.playback().volume(),
        };
        Self { panels, playback }
    }

    /// Apply this snapshot to a shell built from the same catalog.
    ///
    /// Panels the catalog no longer has are skipped; a selected track
    /// that is no longer registered still restores (the registry only
    /// governs navigation).
    pub fn apply<F: EngineFactory>(&self, shell: &mut Shell<F>) {
        for panel in &self.panels {
            shell
                .desktop_mut()
                .restore_panel(&panel.id, panel.position, panel.z_index, panel.open);
        }
        shell.playback_mut().restore(
            self.playback.selected.clone(),
            self.playback.playing,
            self.playback.volume,
        );
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError)
    }

    /// Parse a snapshot back from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError)
    }

    /// Look up a panel entry by id.
    #[must_use]
    pub fn panel(&self, id: &str) -> Option<&PanelSnapshot> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// The selected track's source, if any.
    #[must_use]
    pub fn selected_source(&self) -> Option<&TrackSource> {
        self.playback.selected.as_ref().map(|track| &track.source)
    }
}
