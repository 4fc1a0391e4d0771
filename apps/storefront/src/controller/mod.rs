//! Controller layer: terminal command parsing and dispatch onto the catalog controller.

pub mod commands;
pub mod orchestration;
