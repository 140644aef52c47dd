//! Geometry nodes

use std::rc::Rc;

use super::geometry::SceneGeometry;
use super::material::FlatColorMaterial;

/// One drawable: a geometry buffer plus the material it is drawn with.
///
/// The node exclusively owns its buffer; dropping the node drops the buffer.
/// The material is the shared style of the owning subtree.
#[derive(Debug)]
pub struct GeometryNode {
    geometry: SceneGeometry,
    material: Rc<FlatColorMaterial>,
}

impl GeometryNode {
    pub fn new(geometry: SceneGeometry, material: Rc<FlatColorMaterial>) -> Self {
        GeometryNode { geometry, material }
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    pub fn material(&self) -> &FlatColorMaterial {
        &self.material
    }
}
