#![forbid(unsafe_code)]

//! Reference shell for the retrodesk crates.
//!
//! Wires the panel catalog, the playlist, the cursor trail, and session
//! snapshots into one [`Shell`] a host can drive with raw input events.
//! Everything visual stays with the host; the shell only keeps state.

pub mod data;
pub mod shell;
pub mod snapshot;
pub mod trail;

pub use data::{panel_catalog, playlist};
pub use shell::Shell;
pub use snapshot::{PanelSnapshot, PlaybackSnapshot, SessionSnapshot, SnapshotError};
pub use trail::{CursorTrail, TRAIL_CAP, TRAIL_DECAY_INTERVAL};
