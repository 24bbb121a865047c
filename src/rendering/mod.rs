//! # Rendering Module
//!
//! Plain-text views of generated layouts for the command line and debugging.
//! On-screen tile rendering belongs to whoever binds the tile layers.

pub mod ascii;

pub use ascii::*;
