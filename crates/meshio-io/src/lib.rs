//! Format engines and dispatch for the meshio interchange library.
//!
//! # Supported formats
//!
//! | Format                  | Read | Write |
//! |-------------------------|------|-------|
//! | PLY ascii 1.0           | ✓    | ✓     |
//! | PLY binary (LE/BE) 1.0  | ✓    | ✓     |
//!
//! # Reading and writing
//!
//! Engines never see a concrete mesh type; they drive the
//! [`MeshBuilder`](meshio_core::MeshBuilder) and
//! [`MeshSaver`](meshio_core::MeshSaver) contracts through the raw
//! transfer object:
//!
//! ```ignore
//! use meshio_io::MeshIo;
//! use meshio_mesh::MeshStore;
//!
//! let registry = MeshIo::new();
//! let mut builder = MeshStore::new();
//! let mesh = registry.read(&mut builder, "model.ply")?;
//! registry.write(&mesh, "copy.ply")?;
//! ```
//!
//! Streams work too, without touching the filesystem:
//!
//! ```ignore
//! use meshio_io::{read_mesh, PlyFormat};
//!
//! let mesh = read_mesh(&PlyFormat::ascii_1_0(), &mut builder, &mut input)?;
//! ```
//!
//! New formats implement [`MeshFormat`] and register with one
//! [`MeshIo::register`] call.

pub mod format;
pub mod ply;
pub mod registry;

pub use format::{build_mesh, raw_from_saver, read_mesh, write_mesh, MeshFormat};
pub use ply::PlyFormat;
pub use registry::MeshIo;
