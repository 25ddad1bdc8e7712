//! Per-vertex attribute kinds and ordered attribute layouts.

use crate::error::{MeshIoError, MeshResult};

/// One named per-vertex scalar channel.
///
/// The set is closed; the derived `Ord` gives the canonical order used when
/// a layout is rebuilt from an attribute map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKind {
    PositionX,
    PositionY,
    PositionZ,
    NormalX,
    NormalY,
    NormalZ,
    ColorR,
    ColorG,
    ColorB,
    TextureU,
    TextureV,
}

impl AttributeKind {
    /// All kinds in canonical order.
    pub const ALL: [AttributeKind; 11] = [
        AttributeKind::PositionX,
        AttributeKind::PositionY,
        AttributeKind::PositionZ,
        AttributeKind::NormalX,
        AttributeKind::NormalY,
        AttributeKind::NormalZ,
        AttributeKind::ColorR,
        AttributeKind::ColorG,
        AttributeKind::ColorB,
        AttributeKind::TextureU,
        AttributeKind::TextureV,
    ];

    /// PLY property name for this kind.
    pub fn property_name(self) -> &'static str {
        match self {
            AttributeKind::PositionX => "x",
            AttributeKind::PositionY => "y",
            AttributeKind::PositionZ => "z",
            AttributeKind::NormalX => "nx",
            AttributeKind::NormalY => "ny",
            AttributeKind::NormalZ => "nz",
            AttributeKind::ColorR => "red",
            AttributeKind::ColorG => "green",
            AttributeKind::ColorB => "blue",
            AttributeKind::TextureU => "u",
            AttributeKind::TextureV => "v",
        }
    }

    /// Resolves a PLY property name to a kind.
    pub fn from_property_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(AttributeKind::PositionX),
            "y" => Some(AttributeKind::PositionY),
            "z" => Some(AttributeKind::PositionZ),
            "nx" => Some(AttributeKind::NormalX),
            "ny" => Some(AttributeKind::NormalY),
            "nz" => Some(AttributeKind::NormalZ),
            "red" => Some(AttributeKind::ColorR),
            "green" => Some(AttributeKind::ColorG),
            "blue" => Some(AttributeKind::ColorB),
            "u" => Some(AttributeKind::TextureU),
            "v" => Some(AttributeKind::TextureV),
            _ => None,
        }
    }
}

/// Ordered, duplicate-free set of attribute kinds.
///
/// Order is significant: it fixes the column order of dense vertex rows and
/// the property order of fixed encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeLayout {
    kinds: Vec<AttributeKind>,
}

impl AttributeLayout {
    /// Creates an empty layout.
    pub const fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Creates a layout from the given kinds, rejecting duplicates.
    pub fn with_kinds(kinds: &[AttributeKind]) -> MeshResult<Self> {
        let mut layout = Self::new();
        for &kind in kinds {
            if !layout.push(kind) {
                return Err(MeshIoError::new(format!(
                    "duplicate attribute in layout: {}",
                    kind.property_name()
                )));
            }
        }
        Ok(layout)
    }

    /// Appends a kind. Returns false (and leaves the layout unchanged) if
    /// the kind is already present.
    pub fn push(&mut self, kind: AttributeKind) -> bool {
        if self.contains(kind) {
            return false;
        }
        self.kinds.push(kind);
        true
    }

    /// Number of attributes, i.e. the width of one dense vertex row.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Column index of a kind within a vertex row.
    pub fn index_of(&self, kind: AttributeKind) -> Option<usize> {
        self.kinds.iter().position(|&k| k == kind)
    }

    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.index_of(kind).is_some()
    }

    /// Kinds in layout order.
    pub fn kinds(&self) -> &[AttributeKind] {
        &self.kinds
    }
}
