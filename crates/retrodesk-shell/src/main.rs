#![forbid(unsafe_code)]

//! Scripted demo session.
//!
//! Drives the shell through a short visit: open a few panels, drag the
//! player around, start the album, skip a track, then print the session
//! snapshot a host would persist.

use tracing::info;

use retrodesk_core::{InputFocus, KeyCode, KeyEvent, Point, PointerEvent, PointerPhase, Viewport};
use retrodesk_playback::{EngineEvent, EngineFactory, PlaybackEngine, TrackSource};
use retrodesk_shell::{SessionSnapshot, Shell};
use retrodesk_windowing::HitRegion;

/// Stand-in engine for the demo; a real host wires an audio element.
#[derive(Default)]
struct DemoEngine {
    playing: bool,
    volume: f64,
}

impl PlaybackEngine for DemoEngine {
    fn load(&mut self, source: &TrackSource) {
        info!(%source, "demo engine loading");
    }

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

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
}

struct DemoFactory;

impl EngineFactory for DemoFactory {
    type Engine = DemoEngine;

    fn create(&mut self) -> DemoEngine {
        DemoEngine::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut shell = Shell::new(DemoFactory, Viewport::new(1280.0, 800.0))?;

    shell.desktop_mut().open("about");
    shell.desktop_mut().open("player");

    // Drag the player by its title bar.
    shell.pointer_on_panel(
        "player",
        PointerEvent::mouse(Point::new(60.0, 155.0), PointerPhase::Down),
        HitRegion::TitleBar,
    );
    shell.pointer_on_desktop(PointerEvent::mouse(
        Point::new(400.0, 300.0),
        PointerPhase::Move,
    ));
    shell.pointer_on_desktop(PointerEvent::mouse(Point::new(400.0, 300.0), PointerPhase::Up));

    // Space starts the album from the top; the engine reports ready.
    shell.key(KeyEvent::new(KeyCode::Space), InputFocus::None);
    let seq = shell.playback().engine_seq();
    shell.engine_event(seq, EngineEvent::Ready { duration: 214.0 });

    // Skip forward once.
    shell.key(KeyEvent::new(KeyCode::ArrowRight), InputFocus::None);

    for change in shell.drain_changes() {
        info!(?change, "playback change");
    }

    let order: Vec<&str> = shell
        .desktop()
        .stacking_order()
        .iter()
        .map(|id| id.as_str())
        .collect();
    info!(?order, "stacking order");

    let snapshot = SessionSnapshot::capture(&shell);
    println!("{}", snapshot.to_json()?);
    Ok(())
}
