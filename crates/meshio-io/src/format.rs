//! The format engine contract and the transfer bridge between raw mesh
//! data and the builder/saver capability sets.
//!
//! Engines are object-safe and speak [`RawMesh`] only; the generic
//! builder/saver plumbing lives in the free functions here, so a registry
//! can hold `Box<dyn MeshFormat>` while callers keep their concrete mesh
//! types.

use std::io::{BufRead, Write};

use meshio_core::error::MeshResult;
use meshio_core::raw_mesh::RawMesh;
use meshio_core::traits::{MeshBuilder, MeshSaver};

/// One on-disk mesh encoding.
pub trait MeshFormat {
    /// File extension this format registers under, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Decodes one stream into a raw transfer object.
    fn read_raw(&self, input: &mut dyn BufRead) -> MeshResult<RawMesh>;

    /// Encodes one raw transfer object into a stream.
    fn write_raw(&self, raw: &RawMesh, output: &mut dyn Write) -> MeshResult<()>;
}

/// Reads one mesh from `input`, assembling it through `builder`.
pub fn read_mesh<B: MeshBuilder>(
    format: &dyn MeshFormat,
    builder: &mut B,
    input: &mut dyn BufRead,
) -> MeshResult<B::Mesh> {
    let raw = format.read_raw(input)?;
    build_mesh(builder, &raw)
}

/// Writes one mesh drained from `saver` to `output`.
pub fn write_mesh<S: MeshSaver>(
    format: &dyn MeshFormat,
    saver: &S,
    output: &mut dyn Write,
) -> MeshResult<()> {
    let raw = raw_from_saver(saver)?;
    format.write_raw(&raw, output)
}

/// Replays a raw transfer object into a builder.
pub fn build_mesh<B: MeshBuilder>(builder: &mut B, raw: &RawMesh) -> MeshResult<B::Mesh> {
    builder.clear();
    builder.set_vertex_count(raw.vertex_count());
    builder.set_face_count(raw.triangle_count());
    let layout = raw.layout();
    builder.set_layout(&layout);
    for &kind in layout.kinds() {
        if let Some(values) = raw.attribute(kind) {
            for (vertex, &datum) in values.iter().enumerate() {
                builder.set_vertex_datum(vertex, kind, datum)?;
            }
        }
    }
    for face in 0..raw.triangle_count() {
        builder.set_face(face, raw.triangle(face))?;
    }
    Ok(builder.build())
}

/// Snapshots a saver into a raw transfer object.
pub fn raw_from_saver<S: MeshSaver>(saver: &S) -> MeshResult<RawMesh> {
    let mut raw = RawMesh::new();
    raw.set_vertex_count(saver.vertex_count());
    let layout = saver.layout().clone();
    for vertex in 0..saver.vertex_count() {
        let row = saver.vertex_row(vertex);
        for (column, &kind) in layout.kinds().iter().enumerate() {
            raw.set_attribute_datum(kind, vertex, row[column])?;
        }
    }
    for face in 0..saver.face_count() {
        raw.set_triangle(face, saver.face(face));
    }
    Ok(raw)
}
