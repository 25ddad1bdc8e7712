//! Builder and saver contracts consumed by format engines.
//!
//! A format engine never sees a concrete mesh representation; on the read
//! side it drives a [`MeshBuilder`], on the write side it drains a
//! [`MeshSaver`]. Both contracts speak triangles: whatever topology a
//! concrete store uses internally must be expanded before it crosses this
//! boundary.

use crate::attribute::{AttributeKind, AttributeLayout};
use crate::error::MeshResult;

/// Capability set a reader uses to assemble a mesh.
pub trait MeshBuilder {
    /// The mesh type this builder produces.
    type Mesh;

    /// Resets the builder to an empty triangle mesh.
    fn clear(&mut self);

    fn set_vertex_count(&mut self, vertex_count: usize);

    fn set_face_count(&mut self, face_count: usize);

    fn set_layout(&mut self, layout: &AttributeLayout);

    /// Sets one attribute datum. The layout and counts must already be set;
    /// an address outside them is an out-of-range error.
    fn set_vertex_datum(&mut self, vertex: usize, kind: AttributeKind, datum: f32)
        -> MeshResult<()>;

    /// Sets the three corners of one triangle.
    fn set_face(&mut self, face: usize, corners: [u32; 3]) -> MeshResult<()>;

    /// Finalizes the assembled data into a mesh.
    fn build(&mut self) -> Self::Mesh;
}

/// Capability set a writer uses to drain a mesh.
///
/// All accessors are infallible under the documented contract: `vertex` and
/// `face` arguments are below the respective counts, and faces are
/// triangles. Writing a non-triangle store without expanding it first is a
/// contract violation, not a silent truncation.
pub trait MeshSaver {
    fn vertex_count(&self) -> usize;

    fn face_count(&self) -> usize;

    fn layout(&self) -> &AttributeLayout;

    /// One vertex's attribute values in layout order.
    fn vertex_row(&self, vertex: usize) -> Vec<f32>;

    /// The three corners of one triangle.
    fn face(&self, face: usize) -> [u32; 3];
}
