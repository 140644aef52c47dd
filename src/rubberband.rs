//! Rubber band overlay construction
//!
//! A rubber band is the transient overlay shape that follows pointer input on
//! the map canvas: a line strip along the digitized points, plus a
//! triangulated fill when the shape is a polygon. [`Rubberband::new`] builds
//! the whole subtree in one synchronous pass; there is no incremental update,
//! a changed point sequence means building a new subtree.

use std::rc::Rc;

use log::debug;

use crate::geometry::{Color, GeometryKind, MapPoint, Polygon, Ring};
use crate::scene::{DrawingMode, FlatColorMaterial, GeometryNode, SceneGeometry};
use crate::tessellation::FlatTessellator;

/// The parent subtree node for one rubber band: it owns the shared material
/// and 0-2 child drawables.
#[derive(Debug)]
pub struct Rubberband {
    material: Rc<FlatColorMaterial>,
    nodes: Vec<GeometryNode>,
}

impl Rubberband {
    /// Build the overlay subtree for `points`.
    ///
    /// The point sequence is borrowed, not retained. `width` is the stroke
    /// width for line-strip geometry and is passed through unvalidated.
    /// Empty input, point geometry (not drawn yet), and unknown/null
    /// geometry all yield an empty subtree.
    pub fn new(points: &[MapPoint], kind: GeometryKind, color: Color, width: f64) -> Self {
        let mut band = Rubberband {
            material: Rc::new(FlatColorMaterial::new(color)),
            nodes: Vec::new(),
        };

        if points.is_empty() {
            return band;
        }

        match kind {
            GeometryKind::Point => {
                // TODO: draw point markers
            }

            GeometryKind::Line => {
                let outline = band.line_geometry(points, width);
                band.nodes.push(outline);
            }

            GeometryKind::Polygon => {
                let outline = band.line_geometry(points, width);
                band.nodes.push(outline);
                let fill = band.polygon_geometry(points);
                band.nodes.push(fill);
            }

            GeometryKind::Unknown | GeometryKind::Null => {}
        }

        debug!(
            "rubber band built: kind={:?} points={} drawables={}",
            kind,
            points.len(),
            band.nodes.len()
        );
        band
    }

    /// The child drawables, in draw order (outline before fill).
    pub fn nodes(&self) -> &[GeometryNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The style shared by every drawable of this subtree.
    pub fn material(&self) -> &Rc<FlatColorMaterial> {
        &self.material
    }

    /// Line-strip outline mirroring the input points exactly: same count,
    /// same order, z dropped. Closure, if wanted, is the caller's job via the
    /// input sequence.
    fn line_geometry(&self, points: &[MapPoint], width: f64) -> GeometryNode {
        let mut geometry = SceneGeometry::new(DrawingMode::LineStrip, points.len());
        for (vertex, point) in geometry.vertices_mut().iter_mut().zip(points) {
            vertex.set(point.x as f32, point.y as f32);
        }
        geometry.set_line_width(width as f32);
        GeometryNode::new(geometry, Rc::clone(&self.material))
    }

    /// Triangulated fill for the ring bounded by the input points.
    ///
    /// With fewer than 3 points the tessellator is never invoked, so the
    /// buffer stays empty. Line width is not set: it has no meaning for
    /// filled triangles.
    fn polygon_geometry(&self, points: &[MapPoint]) -> GeometryNode {
        let polygon = Polygon::new(Ring::new(points.to_vec()).closed());
        let mut tessellator = FlatTessellator::new(0.0, 0.0);
        if points.len() > 2 {
            tessellator.add_polygon(&polygon);
        }

        let data = tessellator.data();
        let mut geometry = SceneGeometry::new(DrawingMode::Triangles, tessellator.data_vertex_count());
        // Tessellator output is (x, z, y) triples: index 3k+1 is the unused
        // flat-mode z and index 3k+2 holds the negated map-space y.
        for (k, vertex) in geometry.vertices_mut().iter_mut().enumerate() {
            vertex.set(data[3 * k], -data[3 * k + 2]);
        }
        GeometryNode::new(geometry, Rc::clone(&self.material))
    }
}
