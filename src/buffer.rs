//! Fixed-capacity buffer with a read/write cursor.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use snafu::prelude::*;

use crate::endian::ByteOrder;
use crate::error::{InvalidTextSnafu, OutOfBoundsSnafu, Result};

/// A fixed-capacity byte buffer with cursor-based sequential access.
///
/// The storage is allocated once at construction and never grows. Every
/// read and write starts at the cursor and advances it; [`seek`] moves it
/// explicitly. Multi-byte integers follow the buffer's [`ByteOrder`].
///
/// ```
/// use binbuf::BinaryBuffer;
///
/// let mut buf = BinaryBuffer::new(8);
/// assert!(buf.write_u32(0xDEAD_BEEF));
///
/// buf.seek(0);
/// assert_eq!(buf.read_u32(), Ok(0xDEAD_BEEF));
/// assert_eq!(buf.bytes_remaining(), 4);
/// ```
///
/// [`seek`]: Self::seek
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryBuffer {
    data: Box<[u8]>,
    position: usize,
    order: ByteOrder,
}

impl BinaryBuffer {
    /// Create a zero-filled buffer of `capacity` bytes, little endian.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_order(capacity, ByteOrder::LittleEndian)
    }

    /// Create a zero-filled buffer of `capacity` bytes with the given
    /// byte order.
    #[must_use]
    pub fn with_order(capacity: usize, order: ByteOrder) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            position: 0,
            order,
        }
    }

    /// Create a buffer by copying `bytes`, little endian.
    ///
    /// The capacity equals the input length and the cursor starts at zero.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with_order(bytes, ByteOrder::LittleEndian)
    }

    /// Create a buffer by copying `bytes` with the given byte order.
    #[must_use]
    pub fn from_bytes_with_order(bytes: &[u8], order: ByteOrder) -> Self {
        Self {
            data: Box::from(bytes),
            position: 0,
            order,
        }
    }

    /// Move the cursor to `position`.
    ///
    /// No bounds validation is performed. A position past the end leaves
    /// zero bytes remaining, so every subsequent read fails until the
    /// cursor is moved back in range.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Current cursor position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes available between the cursor and the end of the buffer.
    #[inline]
    #[must_use]
    pub fn bytes_remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Total capacity in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has zero capacity.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The byte order multi-byte values are encoded with.
    #[inline]
    #[must_use]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// The full underlying storage, regardless of cursor position.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, yielding its storage.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_vec()
    }

    // -----------------------------------------------------------------
    // Writes: bool result, no mutation on failure
    // -----------------------------------------------------------------

    /// Write one byte at the cursor.
    ///
    /// Returns `false` without writing if the cursor is at or past the
    /// end of the buffer.
    #[inline]
    #[must_use]
    pub fn write_u8(&mut self, byte: u8) -> bool {
        if self.position >= self.data.len() {
            return false;
        }
        self.data[self.position] = byte;
        self.position += 1;
        true
    }

    /// Write a 16-bit integer at the cursor in the buffer's byte order.
    ///
    /// Returns `false` without writing if fewer than 2 bytes remain.
    #[must_use]
    pub fn write_u16(&mut self, value: u16) -> bool {
        if self.bytes_remaining() < 2 {
            return false;
        }
        let [a, b] = match self.order {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        };
        self.write_u8(a) && self.write_u8(b)
    }

    /// Write a 32-bit integer at the cursor in the buffer's byte order.
    ///
    /// Returns `false` without writing if fewer than 4 bytes remain.
    #[must_use]
    pub fn write_u32(&mut self, value: u32) -> bool {
        if self.bytes_remaining() < 4 {
            return false;
        }
        let [a, b, c, d] = match self.order {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        };
        self.write_u8(a) && self.write_u8(b) && self.write_u8(c) && self.write_u8(d)
    }

    /// Write the UTF-8 bytes of `text` at the cursor.
    ///
    /// Returns `false` without writing if fewer than `text.len()` bytes
    /// remain.
    #[must_use]
    pub fn write_str(&mut self, text: &str) -> bool {
        if self.bytes_remaining() < text.len() {
            return false;
        }
        text.bytes().all(|byte| self.write_u8(byte))
    }

    // -----------------------------------------------------------------
    // Reads: cursor advances only on success
    // -----------------------------------------------------------------

    /// Read one byte at the cursor.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        let byte = self.data[self.position];
        self.position += 1;
        Ok(byte)
    }

    /// Read one byte at the cursor as a signed value.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a 16-bit integer at the cursor in the buffer's byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.require(2)?;
        let raw = [self.data[self.position], self.data[self.position + 1]];
        self.position += 2;
        Ok(match self.order {
            ByteOrder::LittleEndian => u16::from_le_bytes(raw),
            ByteOrder::BigEndian => u16::from_be_bytes(raw),
        })
    }

    /// Read a 16-bit integer at the cursor as a signed value.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read a 32-bit integer at the cursor in the buffer's byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.require(4)?;
        let raw = [
            self.data[self.position],
            self.data[self.position + 1],
            self.data[self.position + 2],
            self.data[self.position + 3],
        ];
        self.position += 4;
        Ok(match self.order {
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
        })
    }

    /// Read a 32-bit integer at the cursor as a signed value.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read `len` bytes at the cursor as UTF-8 text.
    ///
    /// Fails with [`ReadError::InvalidText`] if the bytes are not valid
    /// UTF-8; the cursor is left unchanged on any failure.
    ///
    /// [`ReadError::InvalidText`]: crate::ReadError::InvalidText
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        self.require(len)?;
        if len == 0 {
            // The cursor may sit past the end after a seek; there is
            // nothing to slice there.
            return Ok(String::new());
        }
        let end = self.position + len;
        let text = core::str::from_utf8(&self.data[self.position..end])
            .ok()
            .context(InvalidTextSnafu {
                position: self.position,
            })?
            .to_string();
        self.position = end;
        Ok(text)
    }

    // -----------------------------------------------------------------
    // Offset-qualified reads
    // -----------------------------------------------------------------

    /// Read one byte at `offset`.
    ///
    /// Seeks to `offset` first, but only if a whole byte fits there.
    /// An out-of-range offset is silently ignored and the read proceeds
    /// from the current cursor instead; the seek sticks even when the
    /// read itself then fails.
    pub fn read_u8_at(&mut self, offset: usize) -> Result<u8> {
        self.seek_if_fits(offset, 1);
        self.read_u8()
    }

    /// Signed variant of [`read_u8_at`](Self::read_u8_at).
    pub fn read_i8_at(&mut self, offset: usize) -> Result<i8> {
        self.seek_if_fits(offset, 1);
        self.read_i8()
    }

    /// Read a 16-bit integer at `offset`.
    ///
    /// Offsets where 2 bytes no longer fit are ignored and the read
    /// proceeds from the current cursor, as in
    /// [`read_u8_at`](Self::read_u8_at).
    pub fn read_u16_at(&mut self, offset: usize) -> Result<u16> {
        self.seek_if_fits(offset, 2);
        self.read_u16()
    }

    /// Signed variant of [`read_u16_at`](Self::read_u16_at).
    pub fn read_i16_at(&mut self, offset: usize) -> Result<i16> {
        self.seek_if_fits(offset, 2);
        self.read_i16()
    }

    /// Read a 32-bit integer at `offset`.
    ///
    /// Offsets where 4 bytes no longer fit are ignored and the read
    /// proceeds from the current cursor, as in
    /// [`read_u8_at`](Self::read_u8_at).
    pub fn read_u32_at(&mut self, offset: usize) -> Result<u32> {
        self.seek_if_fits(offset, 4);
        self.read_u32()
    }

    /// Signed variant of [`read_u32_at`](Self::read_u32_at).
    pub fn read_i32_at(&mut self, offset: usize) -> Result<i32> {
        self.seek_if_fits(offset, 4);
        self.read_i32()
    }

    /// Read `len` bytes at `offset` as UTF-8 text.
    ///
    /// Offsets where `len` bytes no longer fit are ignored and the read
    /// proceeds from the current cursor, as in
    /// [`read_u8_at`](Self::read_u8_at).
    pub fn read_string_at(&mut self, offset: usize, len: usize) -> Result<String> {
        self.seek_if_fits(offset, len);
        self.read_string(len)
    }

    // -----------------------------------------------------------------

    /// Fail with `OutOfBounds` unless `needed` bytes remain at the cursor.
    fn require(&self, needed: usize) -> Result<()> {
        let available = self.bytes_remaining();
        ensure!(needed <= available, OutOfBoundsSnafu { needed, available });
        Ok(())
    }

    /// Seek to `offset` only if a span of `needed` bytes fits there.
    fn seek_if_fits(&mut self, offset: usize, needed: usize) {
        let fits = offset
            .checked_add(needed)
            .is_some_and(|end| end <= self.data.len());
        if fits {
            self.seek(offset);
        }
    }
}
