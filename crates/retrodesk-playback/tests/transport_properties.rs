#![forbid(unsafe_code)]

//! Property tests for transport navigation over the mounted-row registry.

use proptest::prelude::*;

use retrodesk_playback::{
    EngineFactory, PlaybackCoordinator, PlaybackEngine, Track, TrackSource,
};

#[derive(Default)]
struct NullEngine {
    playing: bool,
}

impl PlaybackEngine for NullEngine {
    fn load(&mut self, _source: &TrackSource) {}

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> f64 {
        0.0
    }

    fn set_volume(&mut self, _volume: f64) {}
}

struct NullFactory;

impl EngineFactory for NullFactory {
    type Engine = NullEngine;

    fn create(&mut self) -> NullEngine {
        NullEngine::default()
    }
}

fn coordinator_with_tracks(count: usize) -> PlaybackCoordinator<NullFactory> {
    let mut coordinator = PlaybackCoordinator::new(NullFactory);
    for index in 0..count {
        coordinator.register_track(Track::new(
            format!("/songs/{index}.mp3"),
            format!("Track {index}"),
        ));
    }
    coordinator
}

proptest! {
    /// Repeated next() from any starting track visits every registered
    /// track exactly once before returning to the start.
    #[test]
    fn next_visits_every_track_exactly_once(count in 1usize..12, start in 0usize..12) {
        let start = start % count;
        let mut coordinator = coordinator_with_tracks(count);
        coordinator.select(Track::new(
            format!("/songs/{start}.mp3"),
            format!("Track {start}"),
        ));
        let mut seen = Vec::new();
        for _ in 0..count {
            prop_assert!(coordinator.next());
            seen.push(coordinator.current().expect("selected").source.clone());
        }
        let mut unique = seen.clone();
        unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique.dedup();
        prop_assert_eq!(unique.len(), count);
        prop_assert_eq!(
            seen.last().expect("non-empty").as_str(),
            format!("/songs/{start}.mp3")
        );
    }

    /// previous() undoes next() for any registry size and position.
    #[test]
    fn previous_is_the_inverse_of_next(count in 1usize..12, start in 0usize..12) {
        let start = start % count;
        let mut coordinator = coordinator_with_tracks(count);
        coordinator.select(Track::new(
            format!("/songs/{start}.mp3"),
            format!("Track {start}"),
        ));
        prop_assert!(coordinator.next());
        prop_assert!(coordinator.previous());
        prop_assert_eq!(
            coordinator.current().expect("selected").source.as_str(),
            format!("/songs/{start}.mp3")
        );
    }

    /// Any interleaving of transport calls keeps the selection inside
    /// the registry.
    #[test]
    fn selection_always_names_a_registered_track(
        count in 1usize..8,
        ops in proptest::collection::vec(0u8..3, 1..40),
    ) {
        let mut coordinator = coordinator_with_tracks(count);
        for op in ops {
            match op {
                0 => { coordinator.next(); }
                1 => { coordinator.previous(); }
                _ => { coordinator.toggle_play_pause(); }
            }
            if let Some(current) = coordinator.current() {
                prop_assert!(coordinator.registry().get(&current.source).is_some());
            }
        }
    }
}
