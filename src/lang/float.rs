/*!
QL floating point.

A QL float is six bytes: a 16-bit exponent word followed by a 32-bit
two's complement mantissa. Inside a tokenized program the top nibble of
the exponent word records how the literal was written (`%` binary, `$`
hexadecimal, or decimal) and only the low 12 bits are the exponent.

[`ql_to_f64`] is a literal port of the C68 library routine `qlfp_to_d`.
Its output is kept bit-for-bit, including what it does with negative
mantissas, so listings match the ones QDOS tools produce.
*/

use super::{Cursor, Error};

/// How a numeric literal was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatOrigin {
    Binary,
    Hexadecimal,
    Decimal,
}

impl FloatOrigin {
    /// Origin for a float type byte, `0xD0..=0xFF`.
    pub fn from_tag(tag: u8) -> Option<FloatOrigin> {
        match tag >> 4 {
            0xD => Some(FloatOrigin::Binary),
            0xE => Some(FloatOrigin::Hexadecimal),
            0xF => Some(FloatOrigin::Decimal),
            _ => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            FloatOrigin::Binary => "%",
            FloatOrigin::Hexadecimal => "$",
            FloatOrigin::Decimal => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QlFloat {
    pub origin: FloatOrigin,
    pub exponent: i16,
    pub mantissa: u32,
}

impl QlFloat {
    /// Reads the six byte record; the type byte is the first byte of it.
    pub fn read(cursor: &mut Cursor) -> Result<QlFloat, Error> {
        let offset = cursor.position();
        let tag = cursor.peek().unwrap_or(0);
        let origin = match FloatOrigin::from_tag(tag) {
            Some(origin) => origin,
            None => {
                return Err(Error::UnknownTokenTag {
                    offset,
                    tag,
                    index: None,
                })
            }
        };
        let exponent = cursor.word()?;
        let mantissa = cursor.long()?;
        Ok(QlFloat {
            origin,
            exponent,
            mantissa,
        })
    }

    pub fn value(&self) -> f64 {
        ql_to_f64(self.exponent, self.mantissa)
    }
}

impl std::fmt::Display for QlFloat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let value = self.value();
        if value.is_nan() {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            write!(f, "{}{}nan", self.origin.prefix(), sign)
        } else {
            write!(f, "{}{:.6}", self.origin.prefix(), value)
        }
    }
}

pub fn ql_to_f64(exponent: i16, mantissa: u32) -> f64 {
    // Drop the literal origin nibble.
    let mut exponent = exponent as u16 as u32 & 0x0fff;
    if exponent == 0 && mantissa == 0 {
        return 0.0;
    }

    let sign = mantissa & 0x8000_0000;
    if sign != 0 {
        exponent = exponent.wrapping_neg();
        if mantissa & 0x4000_0000 != 0 {
            exponent = exponent.wrapping_add(1);
        }
    }
    let exponent = exponent.wrapping_sub(0x402) << 20 | sign;

    // Sign and implied bit fall off the top. The low 12 bits, taken through
    // a 16-bit short, become the top of the low word.
    let mantissa = mantissa << 2;
    let temp = (mantissa as u16 as i16 as i32 as u32) << 20;
    let high = mantissa >> 12 | exponent;

    f64::from_bits((high as u64) << 32 | temp as u64)
}
