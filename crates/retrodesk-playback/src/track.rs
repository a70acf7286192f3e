#![forbid(unsafe_code)]

//! Track identity and the mounted-row registry.
//!
//! The registry's order is mount order; next/previous navigation walks it
//! by identity lookup at call time, so rows may mount and unmount between
//! calls without corrupting navigation.

/// Opaque locator for an audio resource.
///
/// The coordinator never validates or interprets it; equality is track
/// identity everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackSource(String);

impl TrackSource {
    /// Wrap a locator string.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The raw locator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackSource {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for TrackSource {
    fn from(source: String) -> Self {
        Self(source)
    }
}

/// A playable item: resource locator plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub source: TrackSource,
    pub title: String,
}

impl Track {
    /// Create a track.
    #[must_use]
    pub fn new(source: impl Into<TrackSource>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
        }
    }
}

/// Insertion-ordered collection of currently mounted track rows.
#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    tracks: Vec<Track>,
}

impl TrackRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True when no rows are mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in mount order.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// First mounted track, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Track> {
        self.tracks.first()
    }

    /// Look up a track by source identity.
    #[must_use]
    pub fn get(&self, source: &TrackSource) -> Option<&Track> {
        self.tracks.iter().find(|track| &track.source == source)
    }

    /// Mount-order index of a source, if mounted.
    #[must_use]
    pub fn position(&self, source: &TrackSource) -> Option<usize> {
        self.tracks.iter().position(|track| &track.source == source)
    }

    /// Append a track; duplicate sources are a no-op (double-insertion
    /// guard). Returns whether the track was added.
    pub fn register(&mut self, track: Track) -> bool {
        if self.position(&track.source).is_some() {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove a track by source. Returns whether anything was removed.
    pub fn unregister(&mut self, source: &TrackSource) -> bool {
        match self.position(source) {
            Some(index) => {
                self.tracks.remove(index);
                true
            }
            None => false,
        }
    }

    /// The track after `current` in mount order, wrapping at the end.
    ///
    /// With no current selection (or one that has since unmounted) the
    /// walk starts before the first row, so the successor is the first
    /// track. Empty registry: `None`.
    #[must_use]
    pub fn next_after(&self, current: Option<&TrackSource>) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let index = current.and_then(|source| self.position(source));
        let next = match index {
            Some(index) => (index + 1) % self.tracks.len(),
            None => 0,
        };
        self.tracks.get(next)
    }

    /// The track before `current` in mount order, wrapping at the start.
    ///
    /// With no current selection the predecessor is the last track.
    #[must_use]
    pub fn prev_before(&self, current: Option<&TrackSource>) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let prev = match current.and_then(|source| self.position(source)) {
            Some(index) if index > 0 => index - 1,
            _ => self.tracks.len() - 1,
        };
        self.tracks.get(prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_abc() -> TrackRegistry {
        let mut registry = TrackRegistry::new();
        registry.register(Track::new("/songs/a.mp3", "A"));
        registry.register(Track::new("/songs/b.mp3", "B"));
        registry.register(Track::new("/songs/c.mp3", "C"));
        registry
    }

    #[test]
    fn tracks_build_from_borrowed_and_owned_sources() {
        let borrowed = Track::new("/songs/a.mp3", "A");
        let owned = Track::new(format!("/songs/{}.mp3", "a"), "A");
        assert_eq!(borrowed.source, owned.source);
    }

    #[test]
    fn register_dedupes_by_source() {
        let mut registry = registry_abc();
        assert!(!registry.register(Track::new("/songs/a.mp3", "A again")));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(&"/songs/a.mp3".into()).expect("a mounted").title, "A");
    }

    #[test]
    fn unregister_removes_only_the_matching_source() {
        let mut registry = registry_abc();
        assert!(registry.unregister(&"/songs/b.mp3".into()));
        assert!(!registry.unregister(&"/songs/b.mp3".into()));
        let titles: Vec<&str> = registry.iter().map(|track| track.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn next_and_prev_wrap_at_both_ends() {
        let registry = registry_abc();
        let c = TrackSource::new("/songs/c.mp3");
        let a = TrackSource::new("/songs/a.mp3");
        assert_eq!(registry.next_after(Some(&c)).expect("wraps").title, "A");
        assert_eq!(registry.prev_before(Some(&a)).expect("wraps").title, "C");
    }

    #[test]
    fn navigation_with_no_selection_starts_at_the_edges() {
        let registry = registry_abc();
        assert_eq!(registry.next_after(None).expect("first").title, "A");
        assert_eq!(registry.prev_before(None).expect("last").title, "C");
    }

    #[test]
    fn navigation_from_an_unmounted_selection_recovers() {
        let mut registry = registry_abc();
        let b = TrackSource::new("/songs/b.mp3");
        registry.unregister(&b);
        // Identity lookup fails, so the walk restarts from the edges.
        assert_eq!(registry.next_after(Some(&b)).expect("first").title, "A");
        assert_eq!(registry.prev_before(Some(&b)).expect("last").title, "C");
    }

    #[test]
    fn empty_registry_navigation_is_none() {
        let registry = TrackRegistry::new();
        assert!(registry.next_after(None).is_none());
        assert!(registry.prev_before(None).is_none());
    }

    #[test]
    fn next_cycles_through_every_track_exactly_once() {
        let registry = registry_abc();
        let mut current = TrackSource::new("/songs/b.mp3");
        let mut seen = Vec::new();
        for _ in 0..registry.len() {
            let next = registry.next_after(Some(&current)).expect("non-empty").clone();
            seen.push(next.title.clone());
            current = next.source;
        }
        assert_eq!(seen, vec!["C", "A", "B"]);
    }
}
