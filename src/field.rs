//! # Field Buffer
//!
//! Bounded accumulator for the field currently being received.

use heapless::Vec;

/// Storage capacity of a field, counting the slot reserved for its terminator.
///
/// At most `FIELD_CAPACITY - 1` data characters are retained; the rest of an
/// over-long field is dropped. The interpreter still sees the truncated field.
pub const FIELD_CAPACITY: usize = 15;

/// The characters of one field, truncated silently at [`FIELD_CAPACITY`].
#[derive(Debug, Default, Clone)]
pub struct FieldBuffer {
    bytes: Vec<u8, FIELD_CAPACITY>,
}

impl FieldBuffer {
    pub const fn new() -> Self {
        FieldBuffer { bytes: Vec::new() }
    }

    /// Appends `byte` if there is room for it, otherwise drops it.
    pub fn push(&mut self, byte: u8) {
        if self.bytes.len() < FIELD_CAPACITY - 1 {
            // Cannot fail: the length was checked against a smaller bound.
            let _ = self.bytes.push(byte);
        }
    }

    /// Whether the field still has room for its terminator.
    ///
    /// A field that fills the whole storage is treated as unterminated and is
    /// never handed to the interpreter.
    pub fn is_terminated(&self) -> bool {
        self.bytes.len() < FIELD_CAPACITY
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
