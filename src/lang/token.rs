use super::float::QlFloat;

pub const TYPE_SPACES: u8 = 0x80;
pub const TYPE_KEYWORD: u8 = 0x81;
pub const TYPE_SYMBOL: u8 = 0x84;
pub const TYPE_OPERATOR: u8 = 0x85;
pub const TYPE_MONADIC: u8 = 0x86;
pub const TYPE_NAME: u8 = 0x88;
pub const TYPE_STRING: u8 = 0x8B;
pub const TYPE_TEXT: u8 = 0x8C;
pub const TYPE_LINE_NUMBER: u16 = 0x8D00;
pub const TYPE_SEPARATOR: u8 = 0x8E;
pub const TYPE_FLOAT_MIN: u8 = 0xD0;

const KEYWORDS: [&str; 31] = [
    "END",
    "FOR",
    "IF",
    "REPeat",
    "SELect",
    "WHEN",
    "DEFine",
    "PROCedure",
    "FuNction",
    "GO",
    "TO",
    "SUB",
    "",
    "ERRor",
    "",
    "",
    "RESTORE",
    "NEXT",
    "EXIT",
    "ELSE",
    "ON",
    "RETurn",
    "REMAINDER",
    "DATA",
    "DIM",
    "LOCal",
    "LET",
    "THEN",
    "STEP",
    "REMark",
    "MISTAKE",
];

const SYMBOLS: &[u8; 10] = b"=:#,(){} \n";

const OPERATORS: [&str; 22] = [
    "+", "-", "*", "/", ">=", ">", "==", "=", "<>", "<=", "<", "||", "&&", "^^", "^", "&", "OR",
    "AND", "XOR", "MOD", "DIV", "INSTR",
];

const MONADICS: [&str; 4] = ["+", "-", "~~", "NOT"];

const SEPARATORS: [&str; 5] = [",", ";", "\\", "!", "TO"];

// Table lookups keep the 1-based index from the file. An index of zero or
// past the end of its table is rejected at construction.
macro_rules! table_index {
    ($name:ident, $table:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(u8);

        impl $name {
            pub fn from_index(index: u8) -> Option<$name> {
                if index >= 1 && (index as usize) <= $table.len() {
                    Some($name(index))
                } else {
                    None
                }
            }

            pub fn index(self) -> u8 {
                self.0
            }
        }
    };
}

table_index!(Keyword, KEYWORDS);
table_index!(Symbol, SYMBOLS);
table_index!(Operator, OPERATORS);
table_index!(Monadic, MONADICS);
table_index!(Separator, SEPARATORS);

impl Keyword {
    pub const REMARK: Keyword = Keyword(0x1e);
    pub const MISTAKE: Keyword = Keyword(0x1f);

    pub fn as_str(self) -> &'static str {
        KEYWORDS[self.0 as usize - 1]
    }

    /// REMark and MISTAKE take the rest of the line as plain text.
    pub fn takes_text(self) -> bool {
        self == Keyword::REMARK || self == Keyword::MISTAKE
    }
}

impl Symbol {
    pub const EQUALS: Symbol = Symbol(1);
    pub const COLON: Symbol = Symbol(2);
    pub const END_OF_LINE: Symbol = Symbol(10);

    pub fn as_char(self) -> char {
        char::from(SYMBOLS[self.0 as usize - 1])
    }
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        OPERATORS[self.0 as usize - 1]
    }
}

impl Monadic {
    pub fn as_str(self) -> &'static str {
        MONADICS[self.0 as usize - 1]
    }
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        SEPARATORS[self.0 as usize - 1]
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Monadic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One element of a tokenized statement.
///
/// Names, strings and text are kept as the bytes stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Spaces(u8),
    Keyword(Keyword),
    Symbol(Symbol),
    Operator(Operator),
    Monadic(Monadic),
    Name(u16),
    String { delimiter: u8, bytes: Vec<u8> },
    Text(Vec<u8>),
    Separator(Separator),
    Float(QlFloat),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        assert_eq!(Symbol::from_index(1).unwrap().as_char(), '=');
        assert_eq!(Symbol::from_index(2), Some(Symbol::COLON));
        assert_eq!(Symbol::from_index(10), Some(Symbol::END_OF_LINE));
        assert_eq!(Symbol::END_OF_LINE.as_char(), '\n');
        assert_eq!(Symbol::from_index(9).unwrap().as_char(), ' ');
        assert_eq!(Symbol::from_index(0), None);
        assert_eq!(Symbol::from_index(11), None);
    }

    #[test]
    fn test_keyword_table() {
        assert_eq!(Keyword::from_index(1).unwrap().as_str(), "END");
        assert_eq!(Keyword::from_index(7).unwrap().to_string(), "DEFine ");
        assert_eq!(Keyword::from_index(13).unwrap().as_str(), "");
        assert_eq!(Keyword::from_index(0x1e), Some(Keyword::REMARK));
        assert_eq!(Keyword::REMARK.as_str(), "REMark");
        assert_eq!(Keyword::MISTAKE.as_str(), "MISTAKE");
        assert!(Keyword::MISTAKE.takes_text());
        assert!(!Keyword::from_index(2).unwrap().takes_text());
        assert_eq!(Keyword::from_index(32), None);
    }

    #[test]
    fn test_small_tables() {
        assert_eq!(Operator::from_index(22).unwrap().as_str(), "INSTR");
        assert_eq!(Operator::from_index(23), None);
        assert_eq!(Monadic::from_index(4).unwrap().as_str(), "NOT");
        assert_eq!(Monadic::from_index(5), None);
        assert_eq!(Separator::from_index(3).unwrap().as_str(), "\\");
        assert_eq!(Separator::from_index(5).unwrap().as_str(), "TO");
        assert_eq!(Separator::from_index(6), None);
    }
}
