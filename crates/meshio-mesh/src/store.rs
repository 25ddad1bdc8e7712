//! Dense, resizable mesh storage under a selectable attribute layout,
//! index topology and index wire type.

use meshio_core::attribute::{AttributeKind, AttributeLayout};
use meshio_core::error::{MeshIoError, MeshResult};
use meshio_core::raw_mesh::RawMesh;
use meshio_core::topology::IndexTopology;
use meshio_core::traits::{MeshBuilder, MeshSaver};
use meshio_core::wire_type::IndexWireType;

/// Mutable mesh store.
///
/// Attribute values live in one dense row-major table (rows = vertices,
/// columns = layout order); face indices live in another (rows = faces,
/// columns = topology slots). Every mutation re-derives the table sizes, so
/// `table len == count * row width` holds after each call: growth
/// zero-fills, shrinking discards the out-of-range cells, and values
/// addressed by an unchanged (vertex, attribute) or (face, slot) identity
/// survive layout and topology changes.
#[derive(Debug, Clone, Default)]
pub struct MeshStore {
    vertex_count: usize,
    face_count: usize,
    layout: AttributeLayout,
    topology: IndexTopology,
    index_type: IndexWireType,
    vertex_data: Vec<f32>,
    index_data: Vec<u32>,
}

impl MeshStore {
    /// Creates an empty store: no attributes, triangle topology, 16-bit
    /// unsigned indices.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn set_vertex_count(&mut self, vertex_count: usize) {
        self.vertex_count = vertex_count;
        self.vertex_data.resize(vertex_count * self.layout.len(), 0.0);
    }

    pub fn face_count(&self) -> usize {
        self.face_count
    }

    pub fn set_face_count(&mut self, face_count: usize) {
        self.face_count = face_count;
        self.index_data.resize(face_count * self.topology.slot_count(), 0);
    }

    pub fn layout(&self) -> &AttributeLayout {
        &self.layout
    }

    /// Replaces the attribute layout, carrying over values of attributes
    /// present in both layouts and zero-filling new columns.
    pub fn set_layout(&mut self, layout: AttributeLayout) {
        let new_width = layout.len();
        let mut table = vec![0.0; self.vertex_count * new_width];
        for vertex in 0..self.vertex_count {
            for (column, &kind) in layout.kinds().iter().enumerate() {
                if let Some(old_column) = self.layout.index_of(kind) {
                    table[vertex * new_width + column] =
                        self.vertex_data[vertex * self.layout.len() + old_column];
                }
            }
        }
        self.layout = layout;
        self.vertex_data = table;
    }

    pub fn topology(&self) -> IndexTopology {
        self.topology
    }

    /// Replaces the index topology, carrying over the slots shared by the
    /// old and new slot counts and zero-filling any new slots.
    pub fn set_topology(&mut self, topology: IndexTopology) {
        let old_slots = self.topology.slot_count();
        let new_slots = topology.slot_count();
        if old_slots != new_slots {
            let shared = old_slots.min(new_slots);
            let mut table = vec![0; self.face_count * new_slots];
            for face in 0..self.face_count {
                for slot in 0..shared {
                    table[face * new_slots + slot] = self.index_data[face * old_slots + slot];
                }
            }
            self.index_data = table;
        }
        self.topology = topology;
    }

    pub fn index_type(&self) -> IndexWireType {
        self.index_type
    }

    /// Replaces the index wire type. Indices are held widened in memory, so
    /// only validity and the on-wire encoding change.
    pub fn set_index_type(&mut self, index_type: IndexWireType) {
        self.index_type = index_type;
    }

    /// A mesh is valid when its index wire type can address every vertex.
    pub fn is_valid(&self) -> bool {
        self.vertex_count as u64 <= self.index_type.max_vertex_count()
    }

    /// One attribute datum at (vertex, kind).
    pub fn attribute(&self, vertex: usize, kind: AttributeKind) -> MeshResult<f32> {
        let at = self.attribute_offset(vertex, kind)?;
        Ok(self.vertex_data[at])
    }

    pub fn set_attribute(&mut self, vertex: usize, kind: AttributeKind, datum: f32) -> MeshResult<()> {
        let at = self.attribute_offset(vertex, kind)?;
        self.vertex_data[at] = datum;
        Ok(())
    }

    /// One vertex's attribute values in layout order.
    pub fn vertex_row(&self, vertex: usize) -> MeshResult<&[f32]> {
        self.check_vertex(vertex)?;
        let width = self.layout.len();
        Ok(&self.vertex_data[vertex * width..(vertex + 1) * width])
    }

    /// Replaces one vertex's attribute row. `row` must match the layout
    /// width.
    pub fn set_vertex_row(&mut self, vertex: usize, row: &[f32]) -> MeshResult<()> {
        self.check_vertex(vertex)?;
        let width = self.layout.len();
        if row.len() != width {
            return Err(MeshIoError::new(format!(
                "vertex row has {} values, layout has {} attributes",
                row.len(),
                width
            )));
        }
        self.vertex_data[vertex * width..(vertex + 1) * width].copy_from_slice(row);
        Ok(())
    }

    /// All index slots of one face.
    pub fn face_slots(&self, face: usize) -> MeshResult<&[u32]> {
        self.check_face(face)?;
        let slots = self.topology.slot_count();
        Ok(&self.index_data[face * slots..(face + 1) * slots])
    }

    /// Replaces all index slots of one face. `slots` must match the
    /// topology's slot count.
    pub fn set_face_slots(&mut self, face: usize, slots: &[u32]) -> MeshResult<()> {
        self.check_face(face)?;
        let width = self.topology.slot_count();
        if slots.len() != width {
            return Err(MeshIoError::new(format!(
                "face has {} slots, topology {} expects {}",
                slots.len(),
                self.topology.name(),
                width
            )));
        }
        self.index_data[face * width..(face + 1) * width].copy_from_slice(slots);
        Ok(())
    }

    /// Resets the store to its newly-created state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshots the store as a raw transfer object, expanding the active
    /// topology into triangles.
    pub fn to_raw(&self) -> MeshResult<RawMesh> {
        let mut raw = RawMesh::new();
        raw.set_vertex_count(self.vertex_count);
        for vertex in 0..self.vertex_count {
            let row = self.vertex_row(vertex)?;
            for (column, &kind) in self.layout.kinds().iter().enumerate() {
                raw.set_attribute_datum(kind, vertex, row[column])?;
            }
        }
        let mut indices = Vec::with_capacity(self.face_count * self.topology.triangle_count() * 3);
        for face in 0..self.face_count {
            self.topology.expand(self.face_slots(face)?, &mut indices);
        }
        for (triangle, corners) in indices.chunks_exact(3).enumerate() {
            raw.set_triangle(triangle, [corners[0], corners[1], corners[2]]);
        }
        Ok(raw)
    }

    fn attribute_offset(&self, vertex: usize, kind: AttributeKind) -> MeshResult<usize> {
        self.check_vertex(vertex)?;
        let column = self.layout.index_of(kind).ok_or_else(|| {
            MeshIoError::new(format!(
                "attribute {} out of range: not in layout",
                kind.property_name()
            ))
        })?;
        Ok(vertex * self.layout.len() + column)
    }

    fn check_vertex(&self, vertex: usize) -> MeshResult<()> {
        if vertex >= self.vertex_count {
            return Err(MeshIoError::new(format!(
                "vertex index {} out of range ({} vertices)",
                vertex, self.vertex_count
            )));
        }
        Ok(())
    }

    fn check_face(&self, face: usize) -> MeshResult<()> {
        if face >= self.face_count {
            return Err(MeshIoError::new(format!(
                "face index {} out of range ({} faces)",
                face, self.face_count
            )));
        }
        Ok(())
    }
}

impl MeshBuilder for MeshStore {
    type Mesh = MeshStore;

    fn clear(&mut self) {
        MeshStore::clear(self);
    }

    fn set_vertex_count(&mut self, vertex_count: usize) {
        MeshStore::set_vertex_count(self, vertex_count);
    }

    fn set_face_count(&mut self, face_count: usize) {
        MeshStore::set_face_count(self, face_count);
    }

    fn set_layout(&mut self, layout: &AttributeLayout) {
        MeshStore::set_layout(self, layout.clone());
    }

    fn set_vertex_datum(&mut self, vertex: usize, kind: AttributeKind, datum: f32) -> MeshResult<()> {
        self.set_attribute(vertex, kind, datum)
    }

    fn set_face(&mut self, face: usize, corners: [u32; 3]) -> MeshResult<()> {
        self.set_face_slots(face, &corners)
    }

    fn build(&mut self) -> MeshStore {
        self.clone()
    }
}

impl MeshSaver for MeshStore {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn face_count(&self) -> usize {
        self.face_count
    }

    fn layout(&self) -> &AttributeLayout {
        &self.layout
    }

    fn vertex_row(&self, vertex: usize) -> Vec<f32> {
        let width = self.layout.len();
        self.vertex_data[vertex * width..(vertex + 1) * width].to_vec()
    }

    fn face(&self, face: usize) -> [u32; 3] {
        debug_assert_eq!(self.topology, IndexTopology::Triangle);
        let at = face * self.topology.slot_count();
        [
            self.index_data[at],
            self.index_data[at + 1],
            self.index_data[at + 2],
        ]
    }
}

/// The trivial saver: an always-valid mesh with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMesh;

static EMPTY_LAYOUT: AttributeLayout = AttributeLayout::new();

impl NullMesh {
    pub fn is_valid(&self) -> bool {
        true
    }
}

impl MeshSaver for NullMesh {
    fn vertex_count(&self) -> usize {
        0
    }

    fn face_count(&self) -> usize {
        0
    }

    fn layout(&self) -> &AttributeLayout {
        &EMPTY_LAYOUT
    }

    fn vertex_row(&self, _vertex: usize) -> Vec<f32> {
        Vec::new()
    }

    fn face(&self, _face: usize) -> [u32; 3] {
        [0, 0, 0]
    }
}
