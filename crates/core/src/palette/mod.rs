//! Palette module - fixed color families used by groups and allocations.

mod palette_model;
mod palette_model_tests;

pub use palette_model::{family, resolve_shade, ColorFamily, PALETTE};
