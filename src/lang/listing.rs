use super::decode::Program;
use super::line::{ProgramLine, Statement};
use super::token::Token;
use std::io::{self, Write};

/// Renders a decoded program as SuperBASIC source text.
///
/// Names, strings and text are written as the bytes stored in the file.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    program: &'a Program,
    width: usize,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Listing<'a> {
        Listing { program, width: 0 }
    }

    /// Right-align line numbers in `width` columns.
    pub fn width(self, width: usize) -> Listing<'a> {
        Listing { width, ..self }
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for line in &self.program.lines {
            self.write_line(w, line)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut v = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.write_to(&mut v);
        v
    }

    pub fn write_line<W: Write>(&self, w: &mut W, line: &ProgramLine) -> io::Result<()> {
        write!(w, "{:>width$} ", line.number, width = self.width)?;
        for statement in &line.statements {
            self.write_statement(w, statement)?;
        }
        Ok(())
    }

    fn write_statement<W: Write>(&self, w: &mut W, statement: &Statement) -> io::Result<()> {
        for token in &statement.tokens {
            self.write_token(w, token)?;
        }
        write!(w, "{}", statement.terminator.symbol())
    }

    pub fn write_token<W: Write>(&self, w: &mut W, token: &Token) -> io::Result<()> {
        use Token::*;
        match token {
            Spaces(n) => write!(w, "{s:>n$}", s = "", n = *n as usize),
            Keyword(k) => write!(w, "{}", k),
            Symbol(s) => write!(w, "{}", s),
            Operator(o) => write!(w, "{}", o),
            Monadic(m) => write!(w, "{}", m),
            // The decoder only yields indices inside the name table; a
            // program built by hand may not.
            Name(index) => match self.program.names.get(*index as usize) {
                Some(entry) => w.write_all(&entry.name),
                None => write!(w, "<name ${:04X}>", index),
            },
            String { delimiter, bytes } => {
                w.write_all(&[*delimiter])?;
                w.write_all(bytes)?;
                w.write_all(&[*delimiter])
            }
            Text(bytes) => w.write_all(bytes),
            Separator(s) => write!(w, "{}", s),
            Float(f) => write!(w, "{}", f),
        }
    }
}

impl std::fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}
