//! Index topologies: how one face record's index slots expand into
//! triangles.
//!
//! The registry is the enum itself; adding a topology means adding one
//! variant and one arm in each table below.

/// Named face-record pattern with a fixed slot count and a pure
/// slot-to-triangle expansion rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexTopology {
    /// Three slots, one triangle.
    #[default]
    Triangle,
    /// Four slots, fanned into two triangles: (0,1,2) and (0,2,3).
    Quad,
}

impl IndexTopology {
    pub fn name(self) -> &'static str {
        match self {
            IndexTopology::Triangle => "triangle",
            IndexTopology::Quad => "quad",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "triangle" => Some(IndexTopology::Triangle),
            "quad" => Some(IndexTopology::Quad),
            _ => None,
        }
    }

    /// Index slots in one face record. Always at least 3.
    pub fn slot_count(self) -> usize {
        match self {
            IndexTopology::Triangle => 3,
            IndexTopology::Quad => 4,
        }
    }

    /// Triangles produced by one face record.
    pub fn triangle_count(self) -> usize {
        match self {
            IndexTopology::Triangle => 1,
            IndexTopology::Quad => 2,
        }
    }

    /// Expands one face record into flat triangle indices.
    ///
    /// `slots` must hold exactly [`slot_count`](Self::slot_count) entries.
    pub fn expand(self, slots: &[u32], out: &mut Vec<u32>) {
        debug_assert_eq!(slots.len(), self.slot_count());
        match self {
            IndexTopology::Triangle => out.extend_from_slice(slots),
            IndexTopology::Quad => {
                out.extend_from_slice(&[slots[0], slots[1], slots[2]]);
                out.extend_from_slice(&[slots[0], slots[2], slots[3]]);
            }
        }
    }
}
