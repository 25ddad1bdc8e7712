//! Mutable mesh storage for the meshio interchange library.
//!
//! [`MeshStore`] is the concrete, editable mesh: a dense per-vertex
//! attribute table and a dense per-face index table under a selectable
//! attribute layout, index topology and index wire type. It implements the
//! [`MeshBuilder`](meshio_core::MeshBuilder) and
//! [`MeshSaver`](meshio_core::MeshSaver) contracts, so any format engine
//! can read into or write out of it without depending on this crate.

pub mod store;

pub use store::{MeshStore, NullMesh};
