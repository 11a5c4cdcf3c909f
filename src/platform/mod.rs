//! Platform abstraction layer
//!
//! Converts host events into simulation updates. Everything here is plain
//! data so it can be exercised without a browser.

pub mod input;

pub use input::SurfaceBounds;
