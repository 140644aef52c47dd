//! Polygon tessellation for overlay fills
//!
//! Converts polygon rings into triangle vertex data for GPU rendering. The
//! triangulation itself is delegated to the `earcutr` ear-clipping crate;
//! this module owns the marshalling into and out of it.
//!
//! # Submodules
//! - `flat` - Flat 2D tessellator with the renderer's 3-component output layout

mod flat;

pub use flat::FlatTessellator;
