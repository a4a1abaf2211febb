use super::float::QlFloat;
use super::line::{ProgramLine, Statement, Terminator};
use super::token::*;
use super::{Cursor, Error, Header, NameTable};

type Result<T> = std::result::Result<T, Error>;

/// How the decoder finds the end of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementMode {
    /// Any number of tokens up to a colon or end of line symbol.
    Tokens,
    /// Exactly one token, then the terminator symbol is required.
    Strict,
}

impl Default for StatementMode {
    fn default() -> Self {
        StatementMode::Tokens
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: StatementMode,
}

/// A fully decoded `_sav` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub header: Header,
    pub names: NameTable,
    pub body_offset: usize,
    pub lines: Vec<ProgramLine>,
    /// Final running total of the line size words.
    pub size: i64,
    /// Stray bytes after the last line, too short for a size word.
    pub trailing: usize,
}

impl Program {
    /// The header's line count is advisory; decoding runs to end of file.
    pub fn line_count_matches(&self) -> bool {
        self.lines.len() == self.header.program_lines as usize
    }
}

/// Header, name table and program body in one pass.
pub fn decode(bytes: &[u8], options: Options) -> Result<Program> {
    let mut cursor = Cursor::new(bytes);
    let header = Header::read(&mut cursor)?;
    let names = NameTable::read(&mut cursor, header.name_entries)?;
    let body_offset = cursor.position();
    Decoder::new(bytes, names, options).program(header, body_offset)
}

/// Walks the program body: line, statement, token.
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    names: NameTable,
    mode: StatementMode,
    size: i64,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8], names: NameTable, options: Options) -> Decoder<'a> {
        Decoder {
            cursor: Cursor::new(bytes),
            names,
            mode: options.mode,
            size: 0,
        }
    }

    pub fn program(mut self, header: Header, body_offset: usize) -> Result<Program> {
        self.cursor.seek(body_offset)?;
        let mut lines = vec![];
        while let Some(line) = self.line()? {
            lines.push(line);
        }
        Ok(Program {
            header,
            names: self.names,
            body_offset,
            lines,
            size: self.size,
            trailing: self.cursor.remaining(),
        })
    }

    /// `None` once the size word can no longer be read.
    pub fn line(&mut self) -> Result<Option<ProgramLine>> {
        if self.cursor.remaining() < 2 {
            return Ok(None);
        }
        let offset = self.cursor.position();
        self.size += self.cursor.word()? as i64;

        let marker_offset = self.cursor.position();
        let marker = self.cursor.uword()?;
        if marker != TYPE_LINE_NUMBER {
            return Err(Error::OutOfSync {
                offset: marker_offset,
                expected: TYPE_LINE_NUMBER,
                found: marker,
            });
        }
        let number = self.cursor.uword()?;

        let mut statements = vec![];
        loop {
            let statement = self.statement()?;
            let done = statement.terminator == Terminator::EndOfLine;
            statements.push(statement);
            if done {
                break;
            }
        }
        Ok(Some(ProgramLine {
            offset,
            number,
            size: self.size,
            statements,
        }))
    }

    fn statement(&mut self) -> Result<Statement> {
        let mut tokens = vec![];
        match self.mode {
            StatementMode::Tokens => loop {
                if let Some(terminator) = self.terminator()? {
                    return Ok(Statement { tokens, terminator });
                }
                self.token(&mut tokens)?;
            },
            StatementMode::Strict => {
                self.token(&mut tokens)?;
                let offset = self.cursor.position();
                let tag = self.cursor.byte()?;
                if tag != TYPE_SYMBOL {
                    return Err(Error::OutOfSync {
                        offset,
                        expected: TYPE_SYMBOL as u16,
                        found: tag as u16,
                    });
                }
                match self.end_of_statement()? {
                    Some(terminator) => Ok(Statement { tokens, terminator }),
                    None => Err(Error::OutOfSync {
                        offset,
                        expected: (TYPE_SYMBOL as u16) << 8 | Symbol::END_OF_LINE.index() as u16,
                        found: (TYPE_SYMBOL as u16) << 8 | self.cursor.peek().unwrap_or(0) as u16,
                    }),
                }
            }
        }
    }

    fn terminator(&mut self) -> Result<Option<Terminator>> {
        let mark = self.cursor.mark();
        if self.cursor.byte()? != TYPE_SYMBOL {
            self.cursor.rewind(mark);
            return Ok(None);
        }
        let terminator = self.end_of_statement()?;
        if terminator.is_none() {
            self.cursor.rewind(mark);
        }
        Ok(terminator)
    }

    // Called just past a symbol type byte. Peeks the symbol and, if it is a
    // colon or end of line, pushes it back and decodes it as a symbol.
    // Otherwise the cursor is left on the symbol byte.
    fn end_of_statement(&mut self) -> Result<Option<Terminator>> {
        let value = self.cursor.byte()?;
        self.cursor.unread();
        let terminator = if value == Symbol::COLON.index() {
            Terminator::Colon
        } else if value == Symbol::END_OF_LINE.index() {
            Terminator::EndOfLine
        } else {
            return Ok(None);
        };
        self.symbol()?;
        Ok(Some(terminator))
    }

    fn token(&mut self, tokens: &mut Vec<Token>) -> Result<()> {
        let offset = self.cursor.position();
        let tag = self.cursor.byte()?;
        let token = match tag {
            TYPE_SPACES => Token::Spaces(self.cursor.byte()?),
            TYPE_KEYWORD => {
                let keyword = self.index(TYPE_KEYWORD, Keyword::from_index)?;
                if keyword.takes_text() {
                    tokens.push(Token::Keyword(keyword));
                    self.rest_of_line()?
                } else {
                    Token::Keyword(keyword)
                }
            }
            TYPE_SYMBOL => Token::Symbol(self.symbol()?),
            TYPE_OPERATOR => Token::Operator(self.index(TYPE_OPERATOR, Operator::from_index)?),
            TYPE_MONADIC => Token::Monadic(self.index(TYPE_MONADIC, Monadic::from_index)?),
            TYPE_NAME => self.name()?,
            TYPE_STRING => self.string()?,
            TYPE_TEXT => self.text()?,
            TYPE_SEPARATOR => Token::Separator(self.index(TYPE_SEPARATOR, Separator::from_index)?),
            TYPE_FLOAT_MIN..=0xFF => {
                self.cursor.unread();
                Token::Float(QlFloat::read(&mut self.cursor)?)
            }
            _ => {
                return Err(Error::UnknownTokenTag {
                    offset,
                    tag,
                    index: None,
                })
            }
        };
        tokens.push(token);
        Ok(())
    }

    fn index<T, F>(&mut self, tag: u8, lookup: F) -> Result<T>
    where
        F: Fn(u8) -> Option<T>,
    {
        let offset = self.cursor.position() - 1;
        let index = self.cursor.byte()?;
        lookup(index).ok_or(Error::UnknownTokenTag {
            offset,
            tag,
            index: Some(index as u16),
        })
    }

    fn symbol(&mut self) -> Result<Symbol> {
        self.index(TYPE_SYMBOL, Symbol::from_index)
    }

    fn rest_of_line(&mut self) -> Result<Token> {
        let offset = self.cursor.position();
        let tag = self.cursor.byte()?;
        if tag != TYPE_TEXT {
            return Err(Error::OutOfSync {
                offset,
                expected: TYPE_TEXT as u16,
                found: tag as u16,
            });
        }
        self.text()
    }

    fn name(&mut self) -> Result<Token> {
        let offset = self.cursor.position() - 1;
        self.cursor.byte()?;
        let index = self.cursor.uword()?;
        if self.names.get(index as usize).is_none() {
            return Err(Error::UnknownTokenTag {
                offset,
                tag: TYPE_NAME,
                index: Some(index),
            });
        }
        Ok(Token::Name(index))
    }

    fn string(&mut self) -> Result<Token> {
        let delimiter = self.cursor.byte()?;
        let bytes = self.counted()?;
        Ok(Token::String { delimiter, bytes })
    }

    fn text(&mut self) -> Result<Token> {
        self.cursor.byte()?;
        Ok(Token::Text(self.counted()?))
    }

    fn counted(&mut self) -> Result<Vec<u8>> {
        let len = self.cursor.uword()? as usize;
        let bytes = self.cursor.bytes(len)?.to_vec();
        self.cursor.pad(len)?;
        Ok(bytes)
    }
}
