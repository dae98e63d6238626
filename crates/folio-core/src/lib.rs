//! Page navigation and touch-gesture transitions for the folio site.
//!
//! The crate is clock-free: every entry point takes `now_ms` and the host
//! drives it from its own frame loop.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod catalog;
pub mod gesture;
pub mod hint;
pub mod hooks;
pub mod input;
pub mod intent;
pub mod motion;
pub mod nav;
pub mod surface;
