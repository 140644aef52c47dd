//! Shared flat-color material

use crate::geometry::Color;

/// The uniform style applied to every drawable a builder produces.
///
/// One instance is shared by reference (`Rc`) across all drawables of a
/// single build and must outlive them. Single-threaded sharing only: the
/// subtree stays on the render thread that built it.
#[derive(Debug)]
pub struct FlatColorMaterial {
    color: Color,
}

impl FlatColorMaterial {
    pub fn new(color: Color) -> Self {
        FlatColorMaterial { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
