/*!
# Rust Language Module

This Rust module decodes the tokenized SuperBASIC programs written by
`QSAVE` and renders them back into source listings.

*/

mod cursor;
mod decode;
mod error;
mod header;
mod line;
mod listing;
mod names;

pub mod float;
pub mod token;

pub use cursor::{Cursor, Mark};
pub use decode::{decode, Decoder, Options, Program, StatementMode};
pub use error::Error;
pub use header::Header;
pub use line::{ProgramLine, Statement, Terminator};
pub use listing::Listing;
pub use names::{NameCounts, NameEntry, NameKind, NameTable, MAX_NAME_LEN};
