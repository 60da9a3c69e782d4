//! Byte order selection for multi-byte encode/decode.

/// The byte sequencing convention used for multi-byte integers.
///
/// Fixed at buffer construction; [`LittleEndian`](ByteOrder::LittleEndian)
/// is the default.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least-significant byte first.
    #[default]
    LittleEndian = 0,
    /// Most-significant byte first.
    BigEndian = 1,
}

impl ByteOrder {
    /// Decode a raw byte order value.
    ///
    /// `0` selects little endian and `1` big endian. Any other value is
    /// ignored and the default (little endian) stays in effect rather than
    /// being rejected.
    #[inline]
    #[must_use]
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => ByteOrder::BigEndian,
            _ => ByteOrder::LittleEndian,
        }
    }

    /// The raw wire value of this byte order.
    #[inline]
    #[must_use]
    pub fn as_raw(self) -> u8 {
        self as u8
    }
}
