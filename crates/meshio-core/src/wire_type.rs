//! Scalar wire types: the fixed-width physical encodings a scalar can take
//! in a file, plus the token registry used by header grammars.

use crate::error::{MeshIoError, MeshResult};

/// Physical encoding of one scalar on the wire.
///
/// Integer widths are restricted to 1, 2 and 4 bytes; every integer type
/// carries an exact representable range used by the quantization codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarWireType {
    Float32,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
}

impl ScalarWireType {
    /// Width of one encoded scalar in bytes.
    pub fn byte_width(self) -> usize {
        match self {
            ScalarWireType::Int8 | ScalarWireType::Uint8 => 1,
            ScalarWireType::Int16 | ScalarWireType::Uint16 => 2,
            ScalarWireType::Float32 | ScalarWireType::Int32 | ScalarWireType::Uint32 => 4,
        }
    }

    /// Exact integer range `[min, max]`, or `None` for `Float32`.
    pub fn integer_range(self) -> Option<(f64, f64)> {
        match self {
            ScalarWireType::Float32 => None,
            ScalarWireType::Int8 => Some((i8::MIN as f64, i8::MAX as f64)),
            ScalarWireType::Uint8 => Some((0.0, u8::MAX as f64)),
            ScalarWireType::Int16 => Some((i16::MIN as f64, i16::MAX as f64)),
            ScalarWireType::Uint16 => Some((0.0, u16::MAX as f64)),
            ScalarWireType::Int32 => Some((i32::MIN as f64, i32::MAX as f64)),
            ScalarWireType::Uint32 => Some((0.0, u32::MAX as f64)),
        }
    }

    /// Canonical PLY header token for this type.
    pub fn token(self) -> &'static str {
        match self {
            ScalarWireType::Float32 => "float",
            ScalarWireType::Int8 => "char",
            ScalarWireType::Uint8 => "uchar",
            ScalarWireType::Int16 => "short",
            ScalarWireType::Uint16 => "ushort",
            ScalarWireType::Int32 => "int",
            ScalarWireType::Uint32 => "uint",
        }
    }

    /// Resolves a header token to a wire type.
    ///
    /// Both the classic PLY names (`uchar`, `int`, ...) and the sized
    /// spellings (`uint8`, `int32`, ...) are recognised.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "float" | "float32" => Some(ScalarWireType::Float32),
            "char" | "int8" => Some(ScalarWireType::Int8),
            "uchar" | "uint8" => Some(ScalarWireType::Uint8),
            "short" | "int16" => Some(ScalarWireType::Int16),
            "ushort" | "uint16" => Some(ScalarWireType::Uint16),
            "int" | "int32" => Some(ScalarWireType::Int32),
            "uint" | "uint32" => Some(ScalarWireType::Uint32),
            _ => None,
        }
    }
}

/// Wire type used for one vertex index.
///
/// Constructed only from integer wire types; the width of the type bounds
/// the number of vertices a mesh may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWireType(ScalarWireType);

impl IndexWireType {
    /// Wraps an integer wire type. `Float32` is rejected here, at registry
    /// construction time, so per-index encoding never has to re-check.
    pub fn new(wire_type: ScalarWireType) -> MeshResult<Self> {
        if wire_type.integer_range().is_none() {
            return Err(MeshIoError::new(format!(
                "non-integer index wire type: {}",
                wire_type.token()
            )));
        }
        Ok(Self(wire_type))
    }

    /// The underlying scalar wire type.
    pub fn scalar(self) -> ScalarWireType {
        self.0
    }

    /// Maximum vertex count a mesh using this index type may hold: the
    /// largest encodable index value plus one.
    pub fn max_vertex_count(self) -> u64 {
        let (_, max) = self
            .0
            .integer_range()
            .expect("constructor rejects non-integer types");
        max as u64 + 1
    }
}

impl Default for IndexWireType {
    fn default() -> Self {
        Self(ScalarWireType::Uint16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_widths() {
        assert_eq!(ScalarWireType::Float32.byte_width(), 4);
        assert_eq!(ScalarWireType::Int8.byte_width(), 1);
        assert_eq!(ScalarWireType::Uint8.byte_width(), 1);
        assert_eq!(ScalarWireType::Int16.byte_width(), 2);
        assert_eq!(ScalarWireType::Uint16.byte_width(), 2);
        assert_eq!(ScalarWireType::Int32.byte_width(), 4);
        assert_eq!(ScalarWireType::Uint32.byte_width(), 4);
    }

    #[test]
    fn test_token_round_trip() {
        let all = [
            ScalarWireType::Float32,
            ScalarWireType::Int8,
            ScalarWireType::Uint8,
            ScalarWireType::Int16,
            ScalarWireType::Uint16,
            ScalarWireType::Int32,
            ScalarWireType::Uint32,
        ];
        for ty in all {
            assert_eq!(ScalarWireType::from_token(ty.token()), Some(ty));
        }
    }

    #[test]
    fn test_sized_aliases() {
        assert_eq!(
            ScalarWireType::from_token("uint8"),
            Some(ScalarWireType::Uint8)
        );
        assert_eq!(
            ScalarWireType::from_token("float32"),
            Some(ScalarWireType::Float32)
        );
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(ScalarWireType::from_token("double"), None);
        assert_eq!(ScalarWireType::from_token("int64"), None);
        assert_eq!(ScalarWireType::from_token(""), None);
    }

    #[test]
    fn test_index_wire_type_rejects_float() {
        assert!(IndexWireType::new(ScalarWireType::Float32).is_err());
        assert!(IndexWireType::new(ScalarWireType::Uint8).is_ok());
    }

    #[test]
    fn test_max_vertex_count() {
        let uchar = IndexWireType::new(ScalarWireType::Uint8).unwrap();
        assert_eq!(uchar.max_vertex_count(), 256);
        let short = IndexWireType::new(ScalarWireType::Int16).unwrap();
        assert_eq!(short.max_vertex_count(), 32768);
        let uint = IndexWireType::new(ScalarWireType::Uint32).unwrap();
        assert_eq!(uint.max_vertex_count(), 4_294_967_296);
    }
}
