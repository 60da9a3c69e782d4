//! A fixed-capacity binary buffer with cursor-based, endian-aware reads
//! and writes.
//!
//! [`BinaryBuffer`] owns a heap allocation of fixed capacity and a cursor
//! that every read and write advances. Multi-byte integers are encoded and
//! decoded according to a [`ByteOrder`] chosen at construction. There is no
//! resizing: callers that need framing or growth compose this buffer as a
//! primitive.
//!
//! # Writing
//!
//! Writes return `false` when the value no longer fits, without touching
//! the storage:
//!
//! ```
//! use binbuf::{BinaryBuffer, ByteOrder};
//!
//! let mut buf = BinaryBuffer::with_order(4, ByteOrder::BigEndian);
//! assert!(buf.write_u16(0x1234));
//! assert!(buf.write_u16(0x5678));
//! assert!(!buf.write_u8(0xFF)); // full
//! assert_eq!(buf.as_bytes(), [0x12, 0x34, 0x56, 0x78]);
//! ```
//!
//! # Reading
//!
//! Reads fail loudly with [`ReadError::OutOfBounds`] when the requested
//! span passes the end of the buffer:
//!
//! ```
//! use binbuf::BinaryBuffer;
//!
//! let mut buf = BinaryBuffer::from_bytes(&[0x34, 0x12]);
//! assert_eq!(buf.read_u16(), Ok(0x1234)); // little endian by default
//! assert!(buf.read_u8().is_err());
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod buffer;
mod endian;
mod error;


pub use buffer::BinaryBuffer;
pub use endian::ByteOrder;
pub use error::{ReadError, Result};
