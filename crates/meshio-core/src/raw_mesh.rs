//! Raw transfer object: the format-agnostic intermediate mesh
//! representation at the codec boundary.
//!
//! A `RawMesh` is transient and exclusively owned by one read or one write
//! call. It keys per-vertex float arrays by [`AttributeKind`] (only present
//! attributes appear) and holds a flat triangle index array; non-triangle
//! topologies must be expanded before crossing this boundary.

use std::collections::BTreeMap;

use crate::attribute::{AttributeKind, AttributeLayout};
use crate::error::{MeshIoError, MeshResult};

#[derive(Debug, Clone, Default)]
pub struct RawMesh {
    vertex_count: usize,
    attributes: BTreeMap<AttributeKind, Vec<f32>>,
    indices: Vec<u32>,
}

impl RawMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Sets the vertex count, resizing any attribute arrays already present.
    /// Growth zero-fills.
    pub fn set_vertex_count(&mut self, vertex_count: usize) {
        self.vertex_count = vertex_count;
        for values in self.attributes.values_mut() {
            values.resize(vertex_count, 0.0);
        }
    }

    /// Sets one attribute datum, materialising the attribute's array on
    /// first use.
    pub fn set_attribute_datum(
        &mut self,
        kind: AttributeKind,
        vertex: usize,
        datum: f32,
    ) -> MeshResult<()> {
        if vertex >= self.vertex_count {
            return Err(MeshIoError::new(format!(
                "vertex index {} out of range ({} vertices)",
                vertex, self.vertex_count
            )));
        }
        let values = self
            .attributes
            .entry(kind)
            .or_insert_with(|| vec![0.0; self.vertex_count]);
        values[vertex] = datum;
        Ok(())
    }

    /// Per-vertex values for one attribute, if present.
    pub fn attribute(&self, kind: AttributeKind) -> Option<&[f32]> {
        self.attributes.get(&kind).map(Vec::as_slice)
    }

    pub fn attribute_datum(&self, kind: AttributeKind, vertex: usize) -> Option<f32> {
        self.attributes.get(&kind).and_then(|v| v.get(vertex)).copied()
    }

    /// Layout of the present attributes, in canonical kind order.
    pub fn layout(&self) -> AttributeLayout {
        let mut layout = AttributeLayout::new();
        for &kind in self.attributes.keys() {
            layout.push(kind);
        }
        layout
    }

    /// Stores one triangle, growing the index array as needed.
    pub fn set_triangle(&mut self, face: usize, corners: [u32; 3]) {
        let end = (face + 1) * 3;
        if self.indices.len() < end {
            self.indices.resize(end, 0);
        }
        self.indices[face * 3..end].copy_from_slice(&corners);
    }

    pub fn triangle(&self, face: usize) -> [u32; 3] {
        let at = face * 3;
        [self.indices[at], self.indices[at + 1], self.indices[at + 2]]
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flat triangle index array, length `3 * triangle_count`.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_scatter() {
        let mut raw = RawMesh::new();
        raw.set_vertex_count(2);
        raw.set_attribute_datum(AttributeKind::PositionX, 1, 3.5).unwrap();
        assert_eq!(raw.attribute(AttributeKind::PositionX), Some([0.0, 3.5].as_slice()));
        assert_eq!(raw.attribute(AttributeKind::PositionY), None);
    }

    #[test]
    fn test_out_of_range_vertex_fails() {
        let mut raw = RawMesh::new();
        raw.set_vertex_count(1);
        let err = raw
            .set_attribute_datum(AttributeKind::PositionX, 1, 0.0)
            .unwrap_err();
        assert!(err.message().contains("out of range"));
    }

    #[test]
    fn test_layout_is_canonical_order() {
        let mut raw = RawMesh::new();
        raw.set_vertex_count(1);
        raw.set_attribute_datum(AttributeKind::TextureU, 0, 0.0).unwrap();
        raw.set_attribute_datum(AttributeKind::PositionZ, 0, 0.0).unwrap();
        let layout = raw.layout();
        assert_eq!(layout.kinds(), &[AttributeKind::PositionZ, AttributeKind::TextureU]);
    }

    #[test]
    fn test_triangles() {
        let mut raw = RawMesh::new();
        raw.set_triangle(1, [3, 4, 5]);
        raw.set_triangle(0, [0, 1, 2]);
        assert_eq!(raw.triangle_count(), 2);
        assert_eq!(raw.triangle(0), [0, 1, 2]);
        assert_eq!(raw.triangle(1), [3, 4, 5]);
        assert_eq!(raw.indices(), &[0, 1, 2, 3, 4, 5]);
    }
}
