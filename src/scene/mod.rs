//! Drawable-tree node types and renderer hand-off
//!
//! A minimal scene-graph surface for overlay subtrees: geometry buffers with
//! a drawing mode, a shared flat-color material, and nodes that own their
//! buffers. Ownership is structural (a parent owns its children through a
//! `Vec`, a node owns its buffer by value), so destruction cascades without
//! explicit ownership flags.
//!
//! # Submodules
//! - `geometry` - Vertex buffers and drawing modes
//! - `material` - Shared flat-color material
//! - `node` - Geometry nodes (one drawable each)
//! - `encode` - JSON and binary encodings for the rendering frontend

mod encode;
mod geometry;
mod material;
mod node;

pub use encode::{OverlayBinary, OverlayGeometry, OverlayJson};
pub use geometry::{DrawingMode, SceneGeometry, Vertex2D};
pub use material::FlatColorMaterial;
pub use node::GeometryNode;
