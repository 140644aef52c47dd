//! Geometry types for map-canvas overlay construction
//!
//! This module provides the map-space primitives consumed by the rubber band
//! builder and the tessellator: points, rings, polygons, and colors.
//!
//! # Submodules
//! - `types` - Core primitives (MapPoint, GeometryKind, Ring, Polygon, Color)

mod types;

pub use types::{color_from_u8, Color, GeometryKind, MapPoint, Polygon, Ring};
