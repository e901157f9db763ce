use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Number of sample points per tile.
pub const KEY_BITS: usize = 8;

/// Edge sample points, in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Corner sample points, in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Tile-relative pixel sampled for this edge.
    pub fn offset(self) -> (u32, u32) {
        match self {
            Edge::Top => (8, 0),
            Edge::Right => (15, 8),
            Edge::Bottom => (8, 15),
            Edge::Left => (0, 8),
        }
    }

    /// Position of this edge's character in the key (0..4).
    pub fn position(self) -> usize {
        self as usize
    }
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Tile-relative pixel sampled for this corner.
    pub fn offset(self) -> (u32, u32) {
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (15, 0),
            Corner::BottomRight => (15, 15),
            Corner::BottomLeft => (0, 15),
        }
    }

    /// Position of this corner's character in the key (4..8).
    pub fn position(self) -> usize {
        4 + self as usize
    }
}

/// Tile-relative sample offsets in key order: four edges, then four corners.
pub fn sample_offsets() -> [(u32, u32); KEY_BITS] {
    let mut out = [(0, 0); KEY_BITS];
    for e in Edge::ALL {
        out[e.position()] = e.offset();
    }
    for c in Corner::ALL {
        out[c.position()] = c.offset();
    }
    out
}

/// Solidity signature of one tile.
///
/// Written as 8 characters of `0`/`1`. The first character is the most
/// significant bit, so ordering keys compares their base-2 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolidityKey(u8);

impl SolidityKey {
    /// Build a key from solid flags in key order.
    pub fn from_bits(bits: [bool; KEY_BITS]) -> Self {
        let v = bits
            .iter()
            .fold(0u8, |acc, &solid| (acc << 1) | u8::from(solid));
        Self(v)
    }

    /// Numeric value of the key read as a base-2 integer.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether the character at `position` (0 = leftmost) is `1`.
    pub fn bit(self, position: usize) -> bool {
        assert!(position < KEY_BITS);
        (self.0 >> (KEY_BITS - 1 - position)) & 1 == 1
    }

    pub fn edge(self, edge: Edge) -> bool {
        self.bit(edge.position())
    }

    pub fn corner(self, corner: Corner) -> bool {
        self.bit(corner.position())
    }
}

impl fmt::Display for SolidityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

impl FromStr for SolidityKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, KeyError> {
        let len = s.chars().count();
        if len != KEY_BITS {
            return Err(KeyError::BadLength(len));
        }
        let mut bits = [false; KEY_BITS];
        for (i, c) in s.chars().enumerate() {
            bits[i] = match c {
                '0' => false,
                '1' => true,
                other => return Err(KeyError::InvalidChar(other, i)),
            };
        }
        Ok(Self::from_bits(bits))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SolidityKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SolidityKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
