use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// A forward reader over a buffered `_sav` file.
///
/// Words are stored high byte first. The only backwards movement is
/// [`unread`](Cursor::unread) and [`rewind`](Cursor::rewind) to a
/// previously taken [`Mark`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

/// A saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Cursor<'a> {
        Cursor { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.remaining() == 0
    }

    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.bytes.len() {
            return Err(Error::UnexpectedEof {
                offset: self.bytes.len(),
                needed: offset - self.bytes.len(),
            });
        }
        self.pos = offset;
        Ok(())
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.pos);
        self.pos = mark.0;
    }

    /// Push back the byte just read.
    pub fn unread(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos = self.pos.saturating_sub(1);
    }

    fn need(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            Err(Error::UnexpectedEof {
                offset: self.pos,
                needed: n - self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    pub fn byte(&mut self) -> Result<u8> {
        self.need(1)?;
        let b = self.bytes[self.pos];
        self.pos += 1;
        Ok(b)
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Signed 16-bit value, high byte first on every host.
    pub fn word(&mut self) -> Result<i16> {
        self.need(2)?;
        let w = i16::from_be_bytes([self.bytes[self.pos], self.bytes[self.pos + 1]]);
        self.pos += 2;
        Ok(w)
    }

    /// The same two bytes as [`word`](Cursor::word), for counts and lengths.
    pub fn uword(&mut self) -> Result<u16> {
        self.word().map(|w| w as u16)
    }

    pub fn long(&mut self) -> Result<u32> {
        let high = self.uword()? as u32;
        let low = self.uword()? as u32;
        Ok(high << 16 | low)
    }

    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.need(n)?;
        let s = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(s)
    }

    /// Takes up to `n` bytes, fewer at end of file.
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let n = n.min(self.remaining());
        let s = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        s
    }

    /// Skips the pad byte that follows odd-length data.
    pub fn pad(&mut self, len: usize) -> Result<()> {
        if len & 1 == 1 {
            self.byte()?;
        }
        Ok(())
    }
}
