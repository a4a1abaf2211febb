use super::token::{Symbol, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    Colon,
    EndOfLine,
}

impl Terminator {
    pub fn symbol(self) -> Symbol {
        match self {
            Terminator::Colon => Symbol::COLON,
            Terminator::EndOfLine => Symbol::END_OF_LINE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub tokens: Vec<Token>,
    pub terminator: Terminator,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramLine {
    /// Offset of the line's size word.
    pub offset: usize,
    pub number: u16,
    /// Running total of the size words up to and including this line.
    pub size: i64,
    pub statements: Vec<Statement>,
}

impl ProgramLine {
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.statements.iter().flat_map(|s| s.tokens.iter())
    }
}
