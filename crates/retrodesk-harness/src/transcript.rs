#![forbid(unsafe_code)]

//! JSONL transcripts of desktop and playback activity.
//!
//! One line per event, stable key order, no timestamps: two runs of the
//! same script produce byte-identical transcripts, so tests can diff
//! them against a golden string.

use serde_json::json;

use retrodesk_playback::PlaybackChange;
use retrodesk_windowing::DesktopManager;

/// Accumulates one JSON line per recorded event.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the manager's current stacking order: every catalog
    /// panel, bottom to top, regardless of open state.
    pub fn record_stacking(&mut self, manager: &DesktopManager) {
        let order: Vec<&str> = manager.stacking_order().iter().map(|id| id.as_str()).collect();
        self.push(json!({"event": "stacking", "order": order}));
    }

    /// Record one drained playback change.
    pub fn record_change(&mut self, change: &PlaybackChange) {
        let line = match change {
            PlaybackChange::Selected(track) => json!({
                "event": "selected",
                "source": track.source.as_str(),
                "title": track.title,
            }),
            PlaybackChange::PlayState(playing) => json!({"event": "play_state", "playing": playing}),
            PlaybackChange::Duration(seconds) => json!({"event": "duration", "seconds": seconds}),
            PlaybackChange::Position(seconds) => json!({"event": "position", "seconds": seconds}),
            PlaybackChange::Volume(volume) => json!({"event": "volume", "volume": volume}),
            PlaybackChange::RegistryChanged => json!({"event": "registry_changed"}),
            PlaybackChange::EngineError(message) => json!({"event": "engine_error", "message": message}),
        };
        self.push(line);
    }

    /// Record every change in a drained batch, in order.
    pub fn record_changes<'a>(&mut self, changes: impl IntoIterator<Item = &'a PlaybackChange>) {
        for change in changes {
            self.record_change(change);
        }
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The transcript as newline-separated JSON, one event per line.
    #[must_use]
    pub fn as_jsonl(&self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, value: serde_json::Value) {
        self.lines.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrodesk_playback::Track;

    #[test]
    fn identical_scripts_produce_identical_transcripts() {
        let record = || {
            let mut transcript = Transcript::new();
            transcript.record_change(&PlaybackChange::Selected(Track::new(
                "/songs/a.mp3",
                "A",
            )));
            transcript.record_change(&PlaybackChange::PlayState(true));
            transcript.record_change(&PlaybackChange::Volume(0.5));
            transcript.as_jsonl()
        };
        assert_eq!(record(), record());
    }

    #[test]
    fn lines_are_one_json_object_each() {
        let mut transcript = Transcript::new();
        transcript.record_change(&PlaybackChange::RegistryChanged);
        transcript.record_change(&PlaybackChange::EngineError("boom".into()));
        let jsonl = transcript.as_jsonl();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"event":"registry_changed"}"#);
        assert!(lines[1].contains("boom"));
    }
}
