#![forbid(unsafe_code)]

//! Property tests for gesture replay against the desktop manager.

use proptest::prelude::*;

use retrodesk_core::{Point, Size, Viewport};
use retrodesk_harness::{Gesture, apply_gesture};
use retrodesk_windowing::{DesktopManager, HitRegion, PanelSpec};

fn manager() -> DesktopManager {
    let specs = [PanelSpec::new(
        "notes",
        "notes.txt",
        Size::new(300.0, 180.0),
        Point::new(100.0, 100.0),
        1,
    )];
    DesktopManager::new(&specs, Viewport::new(1280.0, 800.0)).expect("valid catalog")
}

proptest! {
    /// No matter where a scripted drag wanders, the panel ends fully
    /// inside the viewport and the drag is disarmed.
    #[test]
    fn replayed_drags_never_strand_the_panel(
        waypoints in proptest::collection::vec((-3000.0f64..3000.0, -3000.0f64..3000.0), 1..20),
        cancel in any::<bool>(),
    ) {
        let mut desk = manager();
        desk.open("notes");
        let mut gesture = Gesture::press("notes", HitRegion::TitleBar, Point::new(110.0, 110.0));
        for (x, y) in waypoints {
            gesture = gesture.drag_to(Point::new(x, y));
        }
        if cancel {
            gesture = gesture.cancelled();
        }
        apply_gesture(&mut desk, &gesture);
        let panel = desk.panel("notes").expect("exists");
        prop_assert!(desk.viewport().fully_contains(panel.position(), panel.size()));
        prop_assert!(!desk.is_dragging());
    }
}
