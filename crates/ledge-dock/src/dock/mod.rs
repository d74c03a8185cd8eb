//! Dock controller module
//!
//! Orchestrates position and background state, the entry registry, and
//! layout recomputation, and pushes the results to the presentation
//! surface.

mod controller;

pub use controller::DockController;
