//! State Module - Runtime state for the three scroll surfaces
//!
//! This module contains the systems that power carousel interactivity:
//!
//! - **Scroll** - Offset access, max-scroll math, clamped nudges
//! - **Sync** - The drive-state machine and the 2:1 mirror rule
//! - **Drag** - Pointer sessions over the surface regions
//! - **Input** - Terminal event conversion and polling

pub mod drag;
pub mod input;
pub mod scroll;
pub mod sync;
