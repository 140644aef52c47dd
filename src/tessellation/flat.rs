//! Flat 2D polygon tessellation over earcut
//!
//! The renderer consumes tessellator output in the layout of its 3D terrain
//! pipeline even for flat overlays: three floats per vertex, where the middle
//! component is an unused z (always 0 in flat mode) and the third component is
//! the map-space y negated. [`FlatTessellator`] reproduces that contract on
//! top of `earcutr`.

use log::warn;

use crate::geometry::{MapPoint, Polygon, Ring};

/// Tessellates polygons into a flat triangle buffer.
///
/// Configured with a coordinate-origin offset that is subtracted from every
/// input coordinate. There is no extrusion and no normal generation: output
/// is strictly 2D data in the 3-component layout described in the module
/// docs.
pub struct FlatTessellator {
    origin_x: f64,
    origin_y: f64,
    data: Vec<f32>,
}

impl FlatTessellator {
    pub fn new(origin_x: f64, origin_y: f64) -> Self {
        FlatTessellator {
            origin_x,
            origin_y,
            data: Vec::new(),
        }
    }

    /// Tessellate `polygon` and append the resulting triangles to the output
    /// buffer.
    ///
    /// Rings with fewer than 3 distinct points contribute nothing, as does
    /// input the ear-clipper rejects; the tessellator itself never fails.
    pub fn add_polygon(&mut self, polygon: &Polygon) {
        let outer = open_ring(polygon.exterior());
        if outer.len() < 3 {
            return;
        }

        // Flat f64 coordinate array in earcut's layout: outer ring first,
        // then each hole, with hole start offsets recorded separately.
        let mut coords: Vec<f64> = Vec::with_capacity(outer.len() * 2);
        let mut hole_indices: Vec<usize> = Vec::new();

        for p in outer {
            coords.push(p.x - self.origin_x);
            coords.push(p.y - self.origin_y);
        }

        for hole in polygon.interiors() {
            let hole_points = open_ring(hole);
            if hole_points.len() < 3 {
                continue; // Skip degenerate holes
            }
            hole_indices.push(coords.len() / 2);
            for p in hole_points {
                coords.push(p.x - self.origin_x);
                coords.push(p.y - self.origin_y);
            }
        }

        let indices = match earcutr::earcut(&coords, &hole_indices, 2) {
            Ok(indices) => indices,
            Err(_) => {
                warn!(
                    "earcut rejected polygon ring ({} outer points, {} holes)",
                    outer.len(),
                    hole_indices.len()
                );
                return;
            }
        };

        for idx in indices {
            // Output layout: x, unused z, negated y.
            self.data.push(coords[2 * idx] as f32);
            self.data.push(0.0);
            self.data.push(-(coords[2 * idx + 1] as f32));
        }
    }

    /// The flat output buffer: 3 floats per vertex, 9 per triangle.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Number of vertices in [`data`](Self::data).
    pub fn data_vertex_count(&self) -> usize {
        self.data.len() / 3
    }

    /// Number of emitted triangles.
    pub fn triangle_count(&self) -> usize {
        self.data_vertex_count() / 3
    }
}

/// A ring without its duplicated closing point, which earcut does not expect.
fn open_ring(ring: &Ring) -> &[MapPoint] {
    let points = ring.points();
    if points.len() >= 2 && ring.is_closed() {
        &points[..points.len() - 1]
    } else {
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;

    fn square_ring(size: f64) -> Ring {
        Ring::new(vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(size, 0.0),
            MapPoint::new(size, size),
            MapPoint::new(0.0, size),
        ])
    }

    #[test]
    fn test_square_tessellation() {
        let mut t = FlatTessellator::new(0.0, 0.0);
        t.add_polygon(&Polygon::new(square_ring(4.0).closed()));

        assert_eq!(t.triangle_count(), 2);
        assert_eq!(t.data_vertex_count(), 6);
        assert_eq!(t.data().len(), 18);

        let corners = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let data = t.data();
        for k in 0..t.data_vertex_count() {
            // Middle component is the unused z, third is the negated y
            assert_eq!(data[3 * k + 1], 0.0);
            let decoded = (data[3 * k], -data[3 * k + 2]);
            assert!(
                corners.contains(&decoded),
                "vertex {} = {:?} is not a corner of the input square",
                k,
                decoded
            );
        }
    }

    #[test]
    fn test_open_and_closed_rings_tessellate_identically() {
        let mut open = FlatTessellator::new(0.0, 0.0);
        open.add_polygon(&Polygon::new(square_ring(2.0)));

        let mut closed = FlatTessellator::new(0.0, 0.0);
        closed.add_polygon(&Polygon::new(square_ring(2.0).closed()));

        assert_eq!(open.data(), closed.data());
    }

    #[test]
    fn test_origin_offset() {
        let mut shifted = FlatTessellator::new(10.0, -5.0);
        shifted.add_polygon(&Polygon::new(square_ring(4.0).closed()));

        let mut reference = FlatTessellator::new(0.0, 0.0);
        reference.add_polygon(&Polygon::new(square_ring(4.0).closed()));

        assert_eq!(shifted.data().len(), reference.data().len());

        let decode = |t: &FlatTessellator| {
            let mut verts: Vec<(f32, f32)> = (0..t.data_vertex_count())
                .map(|k| (t.data()[3 * k], -t.data()[3 * k + 2]))
                .collect();
            verts.sort_by(|a, b| a.partial_cmp(b).unwrap());
            verts
        };

        let expected: Vec<(f32, f32)> = decode(&reference)
            .into_iter()
            .map(|(x, y)| (x - 10.0, y + 5.0))
            .collect();
        assert_eq!(decode(&shifted), expected);
    }

    #[test]
    fn test_degenerate_rings_produce_nothing() {
        let mut t = FlatTessellator::new(0.0, 0.0);
        t.add_polygon(&Polygon::new(Ring::new(vec![])));
        t.add_polygon(&Polygon::new(Ring::new(vec![MapPoint::new(1.0, 1.0)])));
        t.add_polygon(&Polygon::new(Ring::new(vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(1.0, 1.0),
        ])));
        assert_eq!(t.data_vertex_count(), 0);
        assert_eq!(t.triangle_count(), 0);
    }

    #[test]
    fn test_polygon_with_hole() {
        let outer = square_ring(10.0);
        let hole = Ring::new(vec![
            MapPoint::new(4.0, 4.0),
            MapPoint::new(6.0, 4.0),
            MapPoint::new(6.0, 6.0),
            MapPoint::new(4.0, 6.0),
        ]);
        let mut t = FlatTessellator::new(0.0, 0.0);
        t.add_polygon(&Polygon::with_holes(outer, vec![hole]));

        assert!(t.triangle_count() > 2);
        assert_eq!(t.data().len() % 9, 0);
        // No triangle vertex may land strictly inside the hole
        let data = t.data();
        for k in 0..t.data_vertex_count() {
            let (x, y) = (data[3 * k], -data[3 * k + 2]);
            assert!(!(x > 4.0 && x < 6.0 && y > 4.0 && y < 6.0));
        }
    }
}
