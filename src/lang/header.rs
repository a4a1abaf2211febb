use super::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

pub const MAGIC: [u8; 2] = *b"Q1";

/// Flag bytes written by the known `QSAVE` variants.
pub const FLAGS: [(u8, u8); 4] = [(0, 0), (0, 128), (2, 192), (3, 128)];

/// The fixed part at the start of every `_sav` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub flags: (u8, u8),
    pub name_entries: u16,
    pub name_table_length: u16,
    pub program_lines: u16,
}

impl Header {
    pub const LEN: usize = 10;

    pub fn read(cursor: &mut Cursor) -> Result<Header> {
        let head = cursor.bytes(4)?;
        let bytes = [head[0], head[1], head[2], head[3]];
        let flags = (bytes[2], bytes[3]);
        if bytes[..2] != MAGIC || !FLAGS.contains(&flags) {
            return Err(Error::InvalidHeader { bytes });
        }
        Ok(Header {
            flags,
            name_entries: cursor.uword()?,
            name_table_length: cursor.uword()?,
            program_lines: cursor.uword()?,
        })
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Header Flags..........: {},{}", self.flags.0, self.flags.1)?;
        writeln!(f, "Name Table Entries....: {:5}", self.name_entries)?;
        writeln!(f, "Name Table Length.....: {:5}", self.name_table_length)?;
        write!(f, "Program Lines.........: {:5}", self.program_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(a: u8, b: u8, c: u8, d: u8) -> Vec<u8> {
        vec![a, b, c, d, 0x00, 0x03, 0x00, 0x1C, 0x01, 0x2C]
    }

    #[test]
    fn test_known_flags() {
        for &(x, y) in FLAGS.iter() {
            let bytes = header(b'Q', b'1', x, y);
            let mut c = Cursor::new(&bytes);
            let h = Header::read(&mut c).unwrap();
            assert_eq!(h.flags, (x, y));
            assert_eq!(h.name_entries, 3);
            assert_eq!(h.name_table_length, 28);
            assert_eq!(h.program_lines, 300);
            assert_eq!(c.position(), Header::LEN);
        }
    }

    #[test]
    fn test_unknown_flags() {
        for &(x, y) in [(0u8, 1u8), (1, 128), (2, 128), (3, 192), (128, 0)].iter() {
            let bytes = header(b'Q', b'1', x, y);
            let r = Header::read(&mut Cursor::new(&bytes));
            assert_eq!(
                r,
                Err(Error::InvalidHeader {
                    bytes: [b'Q', b'1', x, y]
                })
            );
        }
    }

    #[test]
    fn test_bad_magic() {
        let bytes = header(b'Q', b'2', 0, 0);
        assert!(matches!(
            Header::read(&mut Cursor::new(&bytes)),
            Err(Error::InvalidHeader { .. })
        ));
        let bytes = header(b'q', b'1', 0, 0);
        assert!(matches!(
            Header::read(&mut Cursor::new(&bytes)),
            Err(Error::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_truncated() {
        let bytes = [b'Q', b'1', 0, 0, 0, 1];
        assert_eq!(
            Header::read(&mut Cursor::new(&bytes)),
            Err(Error::UnexpectedEof {
                offset: 6,
                needed: 2
            })
        );
    }
}
