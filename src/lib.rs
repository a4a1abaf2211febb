//! # QL SAV
//!
//! Lists SuperBASIC programs saved with `QSAVE`.
//!
//! A `_sav` file holds a program after the interpreter has tokenized it:
//! a short header, the table of procedure and function names, then each
//! line as a stream of typed tokens. This crate reads that stream back
//! and writes the program out as text.
//!
//! ```
//! let bytes = [
//!     b'Q', b'1', 0, 0, // magic and flags
//!     0, 0, 0, 0, 0, 1, // names, name table length, lines
//!     0, 8, 0x8D, 0x00, 0, 10, // size, line number marker, 10
//!     0x81, 0x01, 0x84, 0x0A, // END, end of line
//! ];
//! let program = sav::lang::decode(&bytes, Default::default()).unwrap();
//! assert_eq!(sav::lang::Listing::new(&program).to_string(), "10 END \n");
//! ```

pub mod lang;
pub mod term;
