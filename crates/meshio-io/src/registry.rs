//! Extension-to-format dispatch.
//!
//! A [`MeshIo`] is populated once at startup and read-only afterwards;
//! concurrent readers are fine, there is no locking. Files are closed on
//! every exit path by drop; close failures are best-effort and never
//! escalated.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use meshio_core::error::{MeshIoError, MeshResult};
use meshio_core::traits::{MeshBuilder, MeshSaver};

use crate::format::{self, MeshFormat};
use crate::ply::PlyFormat;

/// Maps file extensions to format engines.
pub struct MeshIo {
    formats: HashMap<String, Box<dyn MeshFormat>>,
}

impl MeshIo {
    /// Creates a registry with the stock formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
        };
        registry.register(Box::new(PlyFormat::ascii_1_0()));
        registry
    }

    /// Registers a format under its file extension, replacing any format
    /// previously registered for that extension.
    pub fn register(&mut self, format: Box<dyn MeshFormat>) {
        self.formats.insert(format.file_extension().to_string(), format);
    }

    pub fn format_for_extension(&self, extension: &str) -> MeshResult<&dyn MeshFormat> {
        self.formats
            .get(extension)
            .map(|format| format.as_ref())
            .ok_or_else(|| {
                MeshIoError::new(format!(
                    "cannot find mesh format from extension: {extension}"
                ))
            })
    }

    pub fn format_for_path(&self, path: &Path) -> MeshResult<&dyn MeshFormat> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .ok_or_else(|| {
                MeshIoError::new(format!(
                    "cannot find mesh extension in path: {}",
                    path.display()
                ))
            })?;
        self.format_for_extension(extension)
    }

    /// Reads the mesh at `path` through `builder`.
    pub fn read<B: MeshBuilder, P: AsRef<Path>>(
        &self,
        builder: &mut B,
        path: P,
    ) -> MeshResult<B::Mesh> {
        let path = path.as_ref();
        let format = self.format_for_path(path)?;
        let file = File::open(path).map_err(|_| {
            MeshIoError::new(format!("cannot read from file at path: {}", path.display()))
        })?;
        let mut input = BufReader::new(file);
        format::read_mesh(format, builder, &mut input)
    }

    /// Writes the mesh drained from `saver` to `path`.
    pub fn write<S: MeshSaver, P: AsRef<Path>>(&self, saver: &S, path: P) -> MeshResult<()> {
        let path = path.as_ref();
        let format = self.format_for_path(path)?;
        let file = File::create(path).map_err(|_| {
            MeshIoError::new(format!("cannot write to file at path: {}", path.display()))
        })?;
        let mut output = BufWriter::new(file);
        format::write_mesh(format, saver, &mut output)?;
        output.flush()?;
        Ok(())
    }
}

impl Default for MeshIo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshio_core::attribute::{AttributeKind, AttributeLayout};
    use meshio_mesh::{MeshStore, NullMesh};

    fn triangle_store() -> MeshStore {
        let mut store = MeshStore::new();
        store.set_layout(
            AttributeLayout::with_kinds(&[
                AttributeKind::PositionX,
                AttributeKind::PositionY,
                AttributeKind::PositionZ,
            ])
            .unwrap(),
        );
        store.set_vertex_count(3);
        store.set_face_count(1);
        store.set_vertex_row(1, &[1.0, 0.0, 0.0]).unwrap();
        store.set_vertex_row(2, &[0.0, 1.0, 0.0]).unwrap();
        store.set_face_slots(0, &[0, 1, 2]).unwrap();
        store
    }

    #[test]
    fn test_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.ply");
        let registry = MeshIo::new();
        let store = triangle_store();

        registry.write(&store, &path).unwrap();
        let mut builder = MeshStore::new();
        let back = registry.read(&mut builder, &path).unwrap();
        assert_eq!(back.vertex_count(), 3);
        assert_eq!(back.face_count(), 1);
        assert_eq!(back.vertex_row(1).unwrap(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unregistered_extension() {
        let registry = MeshIo::new();
        let err = registry.write(&NullMesh, "mesh.obj").unwrap_err();
        assert!(err.message().contains("extension"), "{err}");
    }

    #[test]
    fn test_path_without_extension() {
        let registry = MeshIo::new();
        let mut builder = MeshStore::new();
        let err = registry.read(&mut builder, "meshfile").unwrap_err();
        assert!(err.message().contains("extension"), "{err}");
    }

    #[test]
    fn test_unopenable_file() {
        let registry = MeshIo::new();
        let mut builder = MeshStore::new();
        let err = registry.read(&mut builder, "no/such/dir/mesh.ply").unwrap_err();
        assert!(err.message().contains("cannot read from file"), "{err}");
    }

    #[test]
    fn test_registration_replaces() {
        let mut registry = MeshIo::new();
        registry.register(Box::new(PlyFormat::binary_little_endian_1_0()));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.ply");
        registry.write(&triangle_store(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = String::from_utf8_lossy(&bytes);
        assert!(header.starts_with("ply\nformat binary_little_endian 1.0\n"));
    }
}
