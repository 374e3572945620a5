use core::fmt;

/// Byte order of every multi-byte value written to or read from one bundle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Tag byte written in front of a nested big-endian bundle.
    pub const BIG_ENDIAN_TAG: u8 = 1;
    /// Tag byte written in front of a nested little-endian bundle.
    pub const LITTLE_ENDIAN_TAG: u8 = 2;

    /// The tag byte identifying this order inside a parent bundle.
    pub fn tag(self) -> u8 {
        match self {
            Self::BigEndian => Self::BIG_ENDIAN_TAG,
            Self::LittleEndian => Self::LITTLE_ENDIAN_TAG,
        }
    }

    /// Maps a tag byte back to an order. Returns `None` for anything but `1` and `2`.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            Self::BIG_ENDIAN_TAG => Some(Self::BigEndian),
            Self::LITTLE_ENDIAN_TAG => Some(Self::LittleEndian),
            _ => None,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BigEndian => f.write_str("BigEndian"),
            Self::LittleEndian => f.write_str("LittleEndian"),
        }
    }
}
