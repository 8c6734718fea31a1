//! Interactive application state shared by the terminal and headless runners.
//!
//! [`App`] owns the deformer, renderer, camera, and preset library. Input
//! arrives as [`Action`]s between frames and is translated into
//! [`ControlEvent`]s, so every frame sees a consistent deformer state.

mod actions;
mod core;

pub use self::core::{App, Flow};
