//! Position-tracking little-endian writer for RIFF chunks.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

/// Wraps a sink and counts every byte written through it.
///
/// All multi-byte integers go out little-endian, as RIFF requires.
#[derive(Debug)]
pub(crate) struct ChunkWriter<W> {
    inner: W,
    position: usize,
}

impl<W: Write> ChunkWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Bytes written so far.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Writes a four-character ASCII chunk tag.
    pub(crate) fn tag(&mut self, tag: &[u8; 4]) -> io::Result<()> {
        self.inner.write_all(tag)?;
        self.position += tag.len();
        Ok(())
    }

    pub(crate) fn u16(&mut self, value: u16) -> io::Result<()> {
        self.inner.write_u16::<LittleEndian>(value)?;
        self.position += 2;
        Ok(())
    }

    pub(crate) fn u32(&mut self, value: u32) -> io::Result<()> {
        self.inner.write_u32::<LittleEndian>(value)?;
        self.position += 4;
        Ok(())
    }

    pub(crate) fn i16(&mut self, value: i16) -> io::Result<()> {
        self.inner.write_i16::<LittleEndian>(value)?;
        self.position += 2;
        Ok(())
    }

    pub(crate) fn into_inner(self) -> W {
        self.inner
    }
}
