#![forbid(unsafe_code)]

//! Floating panel management for a desktop-style page.
//!
//! A [`DesktopManager`] owns a fixed catalog of named panels and their
//! open/closed state, screen position, and stacking order. It provides
//! drag-to-move with viewport clamping, click-to-raise, and passive
//! re-clamping when the viewport shrinks. Rendering is a host concern:
//! the manager holds state and policy only.
//!
//! # Lifecycle
//!
//! Panels exist for the whole session regardless of open state. Closing a
//! panel preserves its position and z-index; reopening restores them. The
//! first open places the panel at its catalog position.

mod manager;
mod panel;

pub use manager::{CatalogError, DesktopManager, clamp_position};
pub use panel::{HitRegion, Panel, PanelId, PanelSpec};
