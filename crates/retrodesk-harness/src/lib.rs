#![forbid(unsafe_code)]

//! Deterministic test fixtures for the retrodesk crates.
//!
//! Downstream tests get a scripted playback engine whose call history is
//! inspectable from outside the coordinator, a pointer gesture builder
//! that turns "drag this panel here" into the raw event sequence hosts
//! would deliver, and a JSONL transcript recorder for golden comparisons.

pub mod engine;
pub mod gesture;
pub mod transcript;

pub use engine::{EngineProbe, ScriptedEngine, ScriptedFactory};
pub use gesture::{Gesture, apply_gesture};
pub use transcript::Transcript;
