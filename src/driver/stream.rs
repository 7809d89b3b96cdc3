use std::fmt;
use std::io::{Cursor, Read};

/// Character data as a readable stream plus a length that may be unknown.
/// Used by the streaming bind variant when a driver prefers chunked transfer
/// over materializing the whole value.
pub struct CharacterStream {
    reader: Box<dyn Read + Send>,
    length: Option<u64>,
}

impl CharacterStream {
    /// Stream over an in-memory string; character length is known up front.
    pub fn from_string(value: String) -> Self {
        let length = Some(value.chars().count() as u64);
        Self {
            reader: Box::new(Cursor::new(value.into_bytes())),
            length,
        }
    }

    /// Stream over an arbitrary reader; length is reported as unknown.
    pub fn from_reader(reader: Box<dyn Read + Send>) -> Self {
        Self {
            reader,
            length: None,
        }
    }

    /// Character length if known at construction time, `None` otherwise.
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    /// Drain the stream into a string. Drivers without native stream support
    /// fall back to this before binding the value directly.
    pub fn read_into_string(mut self) -> std::io::Result<String> {
        let mut buf = String::new();
        self.reader.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

impl Read for CharacterStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for CharacterStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterStream")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}
