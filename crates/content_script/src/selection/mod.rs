//! Multi-selection mode: while a tracked modifier key is held, copy buttons
//! contribute their text instead of writing it, and releasing the key writes
//! everything collected as one clipboard entry.

pub mod controller;
pub mod key_observer;

pub use controller::{SelectionController, SelectionMode};
