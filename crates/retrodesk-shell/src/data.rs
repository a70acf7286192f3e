#![forbid(unsafe_code)]

//! The site's fixed catalogs: seven panels, seven tracks.

use retrodesk_core::{Point, Size};
use retrodesk_playback::Track;
use retrodesk_windowing::PanelSpec;

/// Every panel the desktop can show, closed by default.
///
/// The folder panel carries no bespoke geometry; it uses the shared
/// window defaults and sits below every other panel until first raised.
#[must_use]
pub fn panel_catalog() -> Vec<PanelSpec> {
    vec![
        PanelSpec::new(
            "player",
            "Player",
            Size::new(420.0, 180.0),
            Point::new(50.0, 150.0),
            10,
        )
        .compact_size(Size::new(320.0, 160.0))
        .fixed_content(),
        PanelSpec::new(
            "about",
            "About Julian Munyard",
            Size::new(600.0, 500.0),
            Point::new(200.0, 100.0),
            5,
        )
        .compact_size(Size::new(340.0, 400.0)),
        PanelSpec::new(
            "contact",
            "Contact Info",
            Size::new(300.0, 180.0),
            Point::new(300.0, 250.0),
            6,
        ),
        PanelSpec::new(
            "mixer",
            "Munyard Mixer",
            Size::new(400.0, 300.0),
            Point::new(150.0, 200.0),
            7,
        ),
        PanelSpec::new(
            "instagram",
            "Instagram",
            Size::new(420.0, 700.0),
            Point::new(400.0, 150.0),
            8,
        ),
        PanelSpec::new(
            "video",
            "Video Player",
            Size::new(400.0, 400.0),
            Point::new(100.0, 200.0),
            9,
        )
        .fixed_content(),
        PanelSpec::new(
            "folder",
            "Folder",
            Size::new(400.0, 300.0),
            Point::new(100.0, 100.0),
            4,
        ),
    ]
}

/// The album playlist in player order.
#[must_use]
pub fn playlist() -> Vec<Track> {
    vec![
        Track::new("/songs/millionaire.mp3", "MILLIONAIRE"),
        Track::new("/songs/do-it-again.mp3", "2. Do It Again"),
        Track::new("/songs/interlude.mp3", "3. Interlude"),
        Track::new("/songs/more-than-a-friend.mp3", "4. More Than a Friend"),
        Track::new(
            "/songs/never-gonna-(give-you-up).mp3",
            "5. Never Gonna (Give You Up)",
        ),
        Track::new(
            "/songs/the-rain-(its-pouring).mp3",
            "6. The Rain (It's Pouring)",
        ),
        Track::new("/songs/you-had-it-coming.mp3", "7. You Had It Coming"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrodesk_core::Viewport;
    use retrodesk_windowing::DesktopManager;

    #[test]
    fn catalog_constructs_a_valid_manager() {
        let manager = DesktopManager::new(&panel_catalog(), Viewport::new(1280.0, 800.0));
        assert!(manager.is_ok());
    }

    #[test]
    fn catalog_z_order_puts_player_on_top_and_folder_on_the_bottom() {
        let manager = DesktopManager::new(&panel_catalog(), Viewport::new(1280.0, 800.0))
            .expect("valid catalog");
        let order = manager.stacking_order();
        assert_eq!(order.first().expect("seven panels").as_str(), "folder");
        assert_eq!(order.last().expect("seven panels").as_str(), "player");
    }

    #[test]
    fn playlist_has_seven_distinct_sources() {
        let playlist = playlist();
        assert_eq!(playlist.len(), 7);
        let mut sources: Vec<&str> = playlist.iter().map(|t| t.source.as_str()).collect();
        sources.sort_unstable();
        sources.dedup();
        assert_eq!(sources.len(), 7);
    }
}
