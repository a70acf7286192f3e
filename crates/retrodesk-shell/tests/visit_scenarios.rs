#![forbid(unsafe_code)]

//! End-to-end visits over the built-in catalogs, driven the way a host
//! would: gestures, keys, and engine events.

use retrodesk_core::{InputFocus, KeyCode, KeyEvent, Point, Viewport};
use retrodesk_harness::{Gesture, ScriptedFactory, Transcript, apply_gesture};
use retrodesk_playback::{EngineEvent, KeyDisposition};
use retrodesk_shell::Shell;
use retrodesk_windowing::HitRegion;

fn scripted_shell() -> Shell<ScriptedFactory> {
    Shell::new(ScriptedFactory::new(), Viewport::new(1280.0, 800.0)).expect("valid catalog")
}

#[test]
fn dragging_the_about_panel_keeps_it_inside_the_viewport() {
    let mut shell = scripted_shell();
    shell.desktop_mut().open("about");
    let gesture = Gesture::press("about", HitRegion::TitleBar, Point::new(210.0, 105.0))
        .drag_through(Point::new(4000.0, 4000.0), 8);
    apply_gesture(shell.desktop_mut(), &gesture);
    let about = shell.desktop().panel("about").expect("exists");
    // 600x500 panel in a 1280x800 viewport: max legal origin.
    assert_eq!(about.position(), Point::new(680.0, 300.0));
    assert!(shell
        .desktop()
        .viewport()
        .fully_contains(about.position(), about.size()));
}

#[test]
fn album_walkthrough_with_a_mid_session_row_unmount() {
    let mut shell = scripted_shell();

    // Space with nothing selected starts the album from the top.
    assert_eq!(
        shell.key(KeyEvent::new(KeyCode::Space), InputFocus::None),
        KeyDisposition::Handled
    );
    assert_eq!(
        shell.playback().current().expect("selected").title,
        "MILLIONAIRE"
    );

    // Arrow twice: Interlude.
    shell.key(KeyEvent::new(KeyCode::ArrowRight), InputFocus::None);
    shell.key(KeyEvent::new(KeyCode::ArrowRight), InputFocus::None);
    assert_eq!(
        shell.playback().current().expect("selected").title,
        "3. Interlude"
    );

    // The interlude row unmounts while selected; navigation recovers
    // from the registry edges.
    let interlude = shell
        .playback()
        .current()
        .expect("selected")
        .source
        .clone();
    shell.playback_mut().unregister_track(&interlude);
    shell.key(KeyEvent::new(KeyCode::ArrowLeft), InputFocus::None);
    assert_eq!(
        shell.playback().current().expect("selected").title,
        "7. You Had It Coming"
    );
}

#[test]
fn engine_ready_after_track_change_plays_the_new_track_only() {
    let mut shell = scripted_shell();
    shell.playback_mut().toggle_play_pause();
    let stale = shell.playback().engine_seq();
    shell.key(KeyEvent::new(KeyCode::ArrowRight), InputFocus::None);
    let live = shell.playback().engine_seq();

    // The first engine's late ready event is discarded.
    shell.engine_event(stale, EngineEvent::Ready { duration: 120.0 });
    assert_eq!(shell.playback().duration(), 0.0);

    shell.engine_event(live, EngineEvent::Ready { duration: 184.0 });
    assert_eq!(shell.playback().duration(), 184.0);
    let current = shell.playback().current().expect("selected").source.clone();
    assert!(shell.playback().row_state(&current).playing);
}

#[test]
fn change_stream_transcript_is_deterministic() {
    let run = || {
        let mut shell = scripted_shell();
        let mut transcript = Transcript::new();
        shell.playback_mut().toggle_play_pause();
        shell.key(KeyEvent::new(KeyCode::ArrowRight), InputFocus::None);
        shell.playback_mut().set_volume(0.3);
        let changes = shell.drain_changes();
        transcript.record_changes(&changes);
        transcript.record_stacking(shell.desktop());
        transcript.as_jsonl()
    };
    let first = run();
    assert_eq!(first, run());
    assert!(first.lines().count() >= 4);
}

#[test]
fn typing_in_the_contact_form_never_drives_the_transport() {
    let mut shell = scripted_shell();
    shell.desktop_mut().open("contact");
    for focus in [InputFocus::TextInput, InputFocus::TextArea, InputFocus::ContentEditable] {
        assert_eq!(
            shell.key(KeyEvent::new(KeyCode::Space), focus),
            KeyDisposition::Ignored
        );
    }
    assert!(shell.playback().current().is_none());
}
