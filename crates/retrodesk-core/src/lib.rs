#![forbid(unsafe_code)]

//! Shared primitives for the retrodesk crates.
//!
//! This crate defines the pixel-space geometry and the canonical input
//! events consumed by the windowing and playback crates. It carries no
//! policy: clamping, stacking, and transport rules live downstream.

pub mod event;
pub mod geometry;

pub use event::{InputFocus, KeyCode, KeyEvent, Modifiers, PointerEvent, PointerPhase, PointerSource};
pub use geometry::{Point, Rect, Size, Viewport};
