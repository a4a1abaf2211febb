use thiserror::Error;

/// Every structural problem in a `_sav` file is fatal; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("INVALID HEADER {}", header_bytes(.bytes))]
    InvalidHeader { bytes: [u8; 4] },

    #[error("UNEXPECTED END OF FILE at offset {offset} (${offset:08X}); {needed} more byte(s) required")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error(
        "NAME TOO LONG at offset {offset} (${offset:08X}); entry {index} declares {length} characters, starts '{}'",
        String::from_utf8_lossy(.partial)
    )]
    NameTooLong {
        offset: usize,
        index: usize,
        length: u16,
        partial: Vec<u8>,
    },

    #[error("OUT OF SYNC at offset {offset} (${offset:08X}); expected ${expected:04X}, found ${found:04X}")]
    OutOfSync {
        offset: usize,
        expected: u16,
        found: u16,
    },

    #[error("UNKNOWN TOKEN at offset {offset} (${offset:08X}); type ${tag:02X}{}", index_suffix(.index))]
    UnknownTokenTag {
        offset: usize,
        tag: u8,
        index: Option<u16>,
    },
}

fn header_bytes(bytes: &[u8; 4]) -> String {
    format!(
        "[\"{}{}\",{},{}]",
        char::from(bytes[0]),
        char::from(bytes[1]),
        bytes[2],
        bytes[3]
    )
}

fn index_suffix(index: &Option<u16>) -> String {
    match index {
        Some(index) => format!(", index {}", index),
        None => String::new(),
    }
}

impl Error {
    /// Byte offset of the field that failed to decode.
    pub fn offset(&self) -> usize {
        use Error::*;
        match self {
            InvalidHeader { .. } => 0,
            UnexpectedEof { offset, .. }
            | NameTooLong { offset, .. }
            | OutOfSync { offset, .. }
            | UnknownTokenTag { offset, .. } => *offset,
        }
    }
}
