#![forbid(unsafe_code)]

//! Single source of truth for "what track is selected and whether it is
//! playing".
//!
//! Many independently mounted row components and one transport bar share
//! one [`PlaybackCoordinator`]. The coordinator owns the only playback
//! engine instance; selecting a different track tears the engine down and
//! builds a fresh one, so two engines can never coexist and late events
//! from a torn-down engine are discarded by generation stamp.
//!
//! State changes are published on a change queue the host drains after
//! each input ([`PlaybackCoordinator::drain_changes`]). Hosts that want
//! the original fixed-interval row reconciliation instead can poll
//! [`PlaybackCoordinator::row_state`] on a [`ReconcileClock`] tick.

pub mod coordinator;
pub mod engine;
pub mod keyboard;
pub mod marquee;
pub mod reconcile;
pub mod track;

pub use coordinator::{PlaybackChange, PlaybackCoordinator, RowState};
pub use engine::{EngineEvent, EngineFactory, EngineSeq, PlaybackEngine};
pub use keyboard::{KeyDisposition, handle_key};
pub use marquee::{MarqueeMetrics, measure};
pub use reconcile::{RECONCILE_INTERVAL, ReconcileClock};
pub use track::{Track, TrackRegistry, TrackSource};
