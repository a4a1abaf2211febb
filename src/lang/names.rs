use super::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// Names at or above this length do not fit the table.
pub const MAX_NAME_LEN: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Procedure,
    FunctionString,
    Function,
    FunctionInteger,
    Other(u16),
}

impl From<u16> for NameKind {
    fn from(tag: u16) -> NameKind {
        use NameKind::*;
        match tag {
            0x1402 => Procedure,
            0x1501 => FunctionString,
            0x1502 => Function,
            0x1503 => FunctionInteger,
            _ => Other(tag),
        }
    }
}

impl NameKind {
    pub fn tag(self) -> u16 {
        use NameKind::*;
        match self {
            Procedure => 0x1402,
            FunctionString => 0x1501,
            Function => 0x1502,
            FunctionInteger => 0x1503,
            Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use NameKind::*;
        match self {
            Procedure => write!(f, "PROCedure"),
            FunctionString => write!(f, "FuNction$"),
            Function => write!(f, "FuNction"),
            FunctionInteger => write!(f, "FuNction%"),
            Other(_) => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub offset: usize,
    pub kind: NameKind,
    pub line_number: i16,
    pub name: Vec<u8>,
}

impl std::fmt::Display for NameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tag = self.kind.tag();
        write!(
            f,
            "Name Type: {:5} (${:04X}), Line Number: {:5}, Name: Size = {:3}, {}",
            tag,
            tag,
            self.line_number,
            self.name.len(),
            String::from_utf8_lossy(&self.name)
        )
    }
}

/// Procedure and function names in definition order.
///
/// Name tokens in the program body refer to entries by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: Vec<NameEntry>,
    length: usize,
}

/// Number of entries of each defined kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameCounts {
    pub procedures: usize,
    pub string_functions: usize,
    pub functions: usize,
    pub integer_functions: usize,
    pub other: usize,
}

impl NameTable {
    pub fn read(cursor: &mut Cursor, count: u16) -> Result<NameTable> {
        let start = cursor.position();
        let mut entries = Vec::with_capacity(count as usize);
        for index in 0..count as usize {
            let offset = cursor.position();
            let kind = NameKind::from(cursor.uword()?);
            let line_number = cursor.word()?;
            let length = cursor.uword()?;
            if length >= MAX_NAME_LEN {
                let partial = cursor.take((MAX_NAME_LEN - 1) as usize).to_vec();
                return Err(Error::NameTooLong {
                    offset,
                    index,
                    length,
                    partial,
                });
            }
            let name = cursor.bytes(length as usize)?.to_vec();
            cursor.pad(length as usize)?;
            entries.push(NameEntry {
                offset,
                kind,
                line_number,
                name,
            });
        }
        Ok(NameTable {
            entries,
            length: cursor.position() - start,
        })
    }

    pub fn get(&self, index: usize) -> Option<&NameEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameEntry> {
        self.entries.iter()
    }

    /// Bytes the table occupied in the file.
    pub fn byte_length(&self) -> usize {
        self.length
    }

    pub fn counts(&self) -> NameCounts {
        let mut counts = NameCounts::default();
        for entry in &self.entries {
            match entry.kind {
                NameKind::Procedure => counts.procedures += 1,
                NameKind::FunctionString => counts.string_functions += 1,
                NameKind::Function => counts.functions += 1,
                NameKind::FunctionInteger => counts.integer_functions += 1,
                NameKind::Other(_) => counts.other += 1,
            }
        }
        counts
    }
}
