//! Byte-grid editing core.
//!
//! Provides a line-of-bytes buffer with a tape-style cursor, plus the
//! load/save routines that move it to and from disk.

mod buffer;
pub mod persist;

pub use buffer::{ByteGrid, Cursor, DEFAULT_FILLER, Direction, Line, NEWLINE, Slot};
pub use persist::PersistError;
