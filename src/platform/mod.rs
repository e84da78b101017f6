//! Platform abstraction layer
//!
//! Translates raw platform events into simulation intent. Everything here is
//! free of browser types so native drivers and tests can feed it directly.

pub mod input;

pub use input::InputAdapter;
