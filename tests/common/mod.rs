#![allow(dead_code)]

/// Builds `_sav` files for tests.
pub struct Sav {
    flags: (u8, u8),
    entries: u16,
    names: Vec<u8>,
    lines: u16,
    declared_lines: Option<u16>,
    body: Vec<u8>,
    last_len: i16,
}

impl Sav {
    pub fn new() -> Sav {
        Sav {
            flags: (0, 0),
            entries: 0,
            names: vec![],
            lines: 0,
            declared_lines: None,
            body: vec![],
            last_len: 0,
        }
    }

    pub fn flags(mut self, a: u8, b: u8) -> Sav {
        self.flags = (a, b);
        self
    }

    pub fn name(mut self, tag: u16, line: i16, name: &[u8]) -> Sav {
        self.entries += 1;
        self.names.extend_from_slice(&tag.to_be_bytes());
        self.names.extend_from_slice(&line.to_be_bytes());
        self.names.extend_from_slice(&(name.len() as u16).to_be_bytes());
        self.names.extend_from_slice(name);
        if name.len() & 1 == 1 {
            self.names.push(0);
        }
        self
    }

    pub fn declared_lines(mut self, n: u16) -> Sav {
        self.declared_lines = Some(n);
        self
    }

    /// `tokens` must end with a terminator, usually `eol()`.
    pub fn line(mut self, number: u16, tokens: &[u8]) -> Sav {
        let len = tokens.len() as i16 + 4;
        self.body.extend_from_slice(&(len - self.last_len).to_be_bytes());
        self.body.extend_from_slice(&[0x8D, 0x00]);
        self.body.extend_from_slice(&number.to_be_bytes());
        self.body.extend_from_slice(tokens);
        self.last_len = len;
        self.lines += 1;
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Sav {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn body_offset(&self) -> usize {
        10 + self.names.len()
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut v = vec![b'Q', b'1', self.flags.0, self.flags.1];
        v.extend_from_slice(&self.entries.to_be_bytes());
        v.extend_from_slice(&(self.names.len() as u16).to_be_bytes());
        v.extend_from_slice(&self.declared_lines.unwrap_or(self.lines).to_be_bytes());
        v.extend_from_slice(&self.names);
        v.extend_from_slice(&self.body);
        v
    }
}

pub fn spaces(n: u8) -> Vec<u8> {
    vec![0x80, n]
}

pub fn keyword(index: u8) -> Vec<u8> {
    vec![0x81, index]
}

pub fn symbol(index: u8) -> Vec<u8> {
    vec![0x84, index]
}

pub fn colon() -> Vec<u8> {
    symbol(2)
}

pub fn eol() -> Vec<u8> {
    symbol(10)
}

pub fn operator(index: u8) -> Vec<u8> {
    vec![0x85, index]
}

pub fn monadic(index: u8) -> Vec<u8> {
    vec![0x86, index]
}

pub fn name(index: u16) -> Vec<u8> {
    let mut v = vec![0x88, 0x00];
    v.extend_from_slice(&index.to_be_bytes());
    v
}

fn counted(tag: u8, second: u8, s: &[u8]) -> Vec<u8> {
    let mut v = vec![tag, second];
    v.extend_from_slice(&(s.len() as u16).to_be_bytes());
    v.extend_from_slice(s);
    if s.len() & 1 == 1 {
        v.push(0);
    }
    v
}

pub fn string(delimiter: u8, s: &[u8]) -> Vec<u8> {
    counted(0x8B, delimiter, s)
}

pub fn text(s: &[u8]) -> Vec<u8> {
    counted(0x8C, 0x00, s)
}

pub fn separator(index: u8) -> Vec<u8> {
    vec![0x8E, index]
}

/// `origin` is the top nibble: 0xD binary, 0xE hex, 0xF decimal.
pub fn float(origin: u8, exponent: u16, mantissa: u32) -> Vec<u8> {
    let mut v = ((origin as u16) << 12 | exponent & 0x0fff)
        .to_be_bytes()
        .to_vec();
    v.extend_from_slice(&mantissa.to_be_bytes());
    v
}
