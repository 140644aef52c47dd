//! Rubber band overlay geometry for an interactive map canvas
//!
//! This crate builds the scene subtree for a transient "rubber band" overlay:
//! the uncommitted shape that follows pointer input while the user digitizes
//! on the map. Given an ordered point sequence, a geometry kind, and a style,
//! it produces a line-strip outline and, for polygons, an earcut-triangulated
//! fill, as GPU-ready vertex buffers. Built subtrees can be handed to the
//! rendering frontend as JSON or a compact binary blob.
//!
//! The build is synchronous and infallible: degenerate input narrows what is
//! drawn instead of failing.

pub mod geometry;
pub mod rubberband;
pub mod scene;
pub mod tessellation;

pub use geometry::{color_from_u8, Color, GeometryKind, MapPoint, Polygon, Ring};
pub use rubberband::Rubberband;
pub use scene::{
    DrawingMode, FlatColorMaterial, GeometryNode, OverlayBinary, OverlayJson, SceneGeometry,
    Vertex2D,
};
pub use tessellation::FlatTessellator;
