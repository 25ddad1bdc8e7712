//! Core data model for the meshio interchange library.
//!
//! This crate holds everything the format engines and mesh stores share:
//! the single error kind, the scalar wire types and their token registry,
//! the quantization codec, the closed attribute and topology registries,
//! the raw transfer object, and the builder/saver contracts.
//!
//! All registries here are closed sets baked into the types; they are
//! effectively populated once at compile time and safe for concurrent
//! readers.

pub mod attribute;
pub mod error;
pub mod quantize;
pub mod raw_mesh;
pub mod topology;
pub mod traits;
pub mod wire_type;

pub use attribute::{AttributeKind, AttributeLayout};
pub use error::{MeshIoError, MeshResult};
pub use raw_mesh::RawMesh;
pub use topology::IndexTopology;
pub use traits::{MeshBuilder, MeshSaver};
pub use wire_type::{IndexWireType, ScalarWireType};
