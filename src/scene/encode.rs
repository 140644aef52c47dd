//! Renderer hand-off encodings for built overlay subtrees
//!
//! The rendering frontend consumes a built subtree either as JSON (debugging
//! and inspection, vertex data base64-encoded) or as a compact binary blob
//! (the production path). Both flatten the subtree into per-drawable records.

use base64::{engine::general_purpose, Engine as _};
use serde::{Serialize, Serializer};

use crate::geometry::Color;
use crate::rubberband::Rubberband;

use super::geometry::DrawingMode;
use super::node::GeometryNode;

/// Serialize Vec<f32> as a base64 string of little-endian floats.
fn serialize_f32_vec_base64<S>(data: &Vec<f32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut bytes = Vec::with_capacity(data.len() * 4);
    for &value in data {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// One drawable, flattened for the frontend.
#[derive(Serialize, Clone)]
pub struct OverlayGeometry {
    /// Base64-encoded Float32 vertex data (x, y, x, y, ...)
    #[serde(rename = "vertexData", serialize_with = "serialize_f32_vec_base64")]
    pub vertex_data: Vec<f32>,

    /// Number of vertices (not floats)
    #[serde(rename = "vertexCount")]
    pub vertex_count: usize,

    /// "lineStrip" or "triangles"
    #[serde(rename = "drawingMode")]
    pub drawing_mode: &'static str,

    /// Stroke width; meaningful for line strips only
    #[serde(rename = "lineWidth")]
    pub line_width: f32,

    pub color: Color,
}

impl OverlayGeometry {
    fn from_node(node: &GeometryNode) -> Self {
        let geometry = node.geometry();
        let mut vertex_data = Vec::with_capacity(geometry.vertex_count() * 2);
        for vertex in geometry.vertices() {
            vertex_data.push(vertex.x);
            vertex_data.push(vertex.y);
        }

        OverlayGeometry {
            vertex_data,
            vertex_count: geometry.vertex_count(),
            drawing_mode: match geometry.mode() {
                DrawingMode::LineStrip => "lineStrip",
                DrawingMode::Triangles => "triangles",
            },
            line_width: geometry.line_width(),
            color: node.material().color(),
        }
    }
}

/// JSON form of a built overlay subtree.
#[derive(Serialize, Clone)]
pub struct OverlayJson {
    pub geometries: Vec<OverlayGeometry>,
}

impl OverlayJson {
    pub fn from_rubberband(band: &Rubberband) -> Self {
        OverlayJson {
            geometries: band.nodes().iter().map(OverlayGeometry::from_node).collect(),
        }
    }
}

/// Binary form of a built overlay subtree.
///
/// Layout (all little-endian, 4-byte aligned throughout):
/// - magic "RBBNDG01" (8 bytes)
/// - drawable count (u32)
/// - per drawable:
///   - mode tag (u8: 0 = line strip, 1 = triangles) + 3 padding bytes
///   - vertex count (u32)
///   - line width (f32)
///   - color (4 x f32)
///   - vertex data (vertex count x 2 x f32, x/y interleaved)
pub struct OverlayBinary {
    data: Vec<u8>,
}

impl OverlayBinary {
    pub const MAGIC: &'static [u8; 8] = b"RBBNDG01";

    pub fn from_rubberband(band: &Rubberband) -> Self {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(Self::MAGIC);
        buffer.extend_from_slice(&(band.nodes().len() as u32).to_le_bytes());

        for node in band.nodes() {
            let geometry = node.geometry();
            let mode_tag: u8 = match geometry.mode() {
                DrawingMode::LineStrip => 0,
                DrawingMode::Triangles => 1,
            };
            buffer.push(mode_tag);
            // Padding to keep the f32/u32 fields 4-byte aligned
            buffer.extend_from_slice(&[0u8, 0u8, 0u8]);

            buffer.extend_from_slice(&(geometry.vertex_count() as u32).to_le_bytes());
            buffer.extend_from_slice(&geometry.line_width().to_le_bytes());
            for &channel in &node.material().color() {
                buffer.extend_from_slice(&channel.to_le_bytes());
            }
            for vertex in geometry.vertices() {
                buffer.extend_from_slice(&vertex.x.to_le_bytes());
                buffer.extend_from_slice(&vertex.y.to_le_bytes());
            }
        }

        OverlayBinary { data: buffer }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryKind, MapPoint};

    fn sample_band() -> Rubberband {
        let points = [MapPoint::new(0.0, 0.0), MapPoint::new(3.0, 4.0)];
        Rubberband::new(&points, GeometryKind::Line, [1.0, 0.0, 0.0, 0.5], 2.0)
    }

    #[test]
    fn test_overlay_json_serialization() {
        let json = serde_json::to_string(&OverlayJson::from_rubberband(&sample_band())).unwrap();
        assert!(json.contains("vertexData"));
        assert!(json.contains("vertexCount"));
        assert!(json.contains("drawingMode"));
        assert!(json.contains("lineStrip"));
        assert!(json.contains("lineWidth"));
    }

    #[test]
    fn test_overlay_json_base64_vertex_data() {
        let overlay = OverlayJson::from_rubberband(&sample_band());
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&overlay).unwrap()).unwrap();
        let encoded = value["geometries"][0]["vertexData"].as_str().unwrap();
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();

        // 2 vertices x 2 floats x 4 bytes
        assert_eq!(bytes.len(), 16);
        let x0 = f32::from_le_bytes(bytes[0..4].try_into().unwrap());
        let y1 = f32::from_le_bytes(bytes[12..16].try_into().unwrap());
        assert_eq!(x0, 0.0);
        assert_eq!(y1, 4.0);
    }

    #[test]
    fn test_overlay_binary_layout() {
        let binary = OverlayBinary::from_rubberband(&sample_band());
        let bytes = binary.as_bytes();

        assert_eq!(&bytes[0..8], &OverlayBinary::MAGIC[..]);
        let count = u32::from_le_bytes(bytes[8..12].try_into().unwrap());
        assert_eq!(count, 1);

        assert_eq!(bytes[12], 0); // line strip
        let vertex_count = u32::from_le_bytes(bytes[16..20].try_into().unwrap());
        assert_eq!(vertex_count, 2);
        let line_width = f32::from_le_bytes(bytes[20..24].try_into().unwrap());
        assert_eq!(line_width, 2.0);
        let red = f32::from_le_bytes(bytes[24..28].try_into().unwrap());
        assert_eq!(red, 1.0);

        // Vertex data starts after the 16-byte color block
        let x0 = f32::from_le_bytes(bytes[40..44].try_into().unwrap());
        let y0 = f32::from_le_bytes(bytes[44..48].try_into().unwrap());
        assert_eq!((x0, y0), (0.0, 0.0));
        let x1 = f32::from_le_bytes(bytes[48..52].try_into().unwrap());
        let y1 = f32::from_le_bytes(bytes[52..56].try_into().unwrap());
        assert_eq!((x1, y1), (3.0, 4.0));
        assert_eq!(bytes.len(), 56);
    }
}
