use crate::lang::{Header, NameTable, Program};
use ansi_term::Style;
use std::fmt;
use std::path::Path;

/// What was found ahead of the program body: file, header and name table.
///
/// Printed before the body is decoded, so a body error still shows the
/// header and names that led up to it.
pub struct Report<'a> {
    file: &'a Path,
    size: usize,
    crc: u32,
    header: &'a Header,
    names: &'a NameTable,
    style: Style,
}

/// Outcome of decoding the program body.
pub struct Summary<'a> {
    program: &'a Program,
    style: Style,
}

fn style(on: bool) -> Style {
    if on {
        Style::new().bold()
    } else {
        Style::new()
    }
}

fn heading(f: &mut fmt::Formatter, style: Style, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", style.paint(title))?;
    writeln!(f, "{}", "=".repeat(title.len()))?;
    writeln!(f)
}

fn warning(f: &mut fmt::Formatter, style: Style, message: String) -> fmt::Result {
    writeln!(f, "{}", style.paint(format!("WARNING: {}", message)))
}

impl<'a> Report<'a> {
    pub fn new(
        file: &'a Path,
        bytes: &[u8],
        header: &'a Header,
        names: &'a NameTable,
    ) -> Report<'a> {
        Report {
            file,
            size: bytes.len(),
            crc: crc::crc32::checksum_ieee(bytes),
            header,
            names,
            style: Style::new(),
        }
    }

    pub fn styled(self, on: bool) -> Report<'a> {
        Report {
            style: style(on),
            ..self
        }
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = self.header;
        let names = self.names;
        writeln!(f, "SAV File..............: {}", self.file.display())?;
        writeln!(
            f,
            "File Size.............: {:5} (CRC-32 ${:08X})",
            self.size, self.crc
        )?;

        heading(f, self.style, "HEADER DETAILS")?;
        writeln!(f, "{}", header)?;

        heading(f, self.style, "NAME TABLE")?;
        let counts = names.counts();
        writeln!(f, "Number of Procedures..: {:4}", counts.procedures)?;
        writeln!(f, "Number of Function$...: {:4}", counts.string_functions)?;
        writeln!(f, "Number of Function....: {:4}", counts.functions)?;
        writeln!(f, "Number of Function%...: {:4}", counts.integer_functions)?;
        if counts.other > 0 {
            writeln!(f, "Number of Others......: {:4}", counts.other)?;
        }
        writeln!(f)?;
        for (index, entry) in names.iter().enumerate() {
            writeln!(
                f,
                "{:04X}: NameTable[{:4}]: {} {}",
                entry.offset, index, entry, entry.kind
            )?;
        }
        if names.byte_length() != header.name_table_length as usize {
            warning(
                f,
                self.style,
                format!(
                    "name table occupies {} bytes, header declares {}.",
                    names.byte_length(),
                    header.name_table_length
                ),
            )?;
        }
        Ok(())
    }
}

impl<'a> Summary<'a> {
    pub fn new(program: &'a Program) -> Summary<'a> {
        Summary {
            program,
            style: Style::new(),
        }
    }

    pub fn styled(self, on: bool) -> Summary<'a> {
        Summary {
            style: style(on),
            ..self
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let program = self.program;
        heading(f, self.style, "PROGRAM")?;
        writeln!(
            f,
            "Program Offset........: {} (${:08X})",
            program.body_offset, program.body_offset
        )?;
        writeln!(f, "Lines Decoded.........: {:5}", program.lines.len())?;
        writeln!(f, "Size Total............: {:5}", program.size)?;
        if !program.line_count_matches() {
            warning(
                f,
                self.style,
                format!(
                    "header declares {} lines, decoded {}.",
                    program.header.program_lines,
                    program.lines.len()
                ),
            )?;
        }
        if program.trailing > 0 {
            warning(
                f,
                self.style,
                format!("{} byte(s) after the last line ignored.", program.trailing),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{decode, Options};

    const BYTES: [u8; 18] = [
        b'Q', b'1', 0, 0, 0, 0, 0, 0, 0, 2, 0x00, 0x06, 0x8D, 0x00, 0x00, 0x0A, 0x84, 0x0A,
    ];

    #[test]
    fn test_report_header_and_names() {
        let program = decode(&BYTES, Options::default()).unwrap();
        let report = Report::new(Path::new("test_sav"), &BYTES, &program.header, &program.names);
        assert_eq!(report.crc(), crc::crc32::checksum_ieee(&BYTES));
        let text = report.to_string();
        assert!(text.contains("SAV File..............: test_sav"));
        assert!(text.contains("HEADER DETAILS"));
        assert!(text.contains("Program Lines.........:     2"));
        assert!(!text.contains("name table occupies"));
        assert!(!text.contains("PROGRAM\n"));
    }

    #[test]
    fn test_summary_mismatch() {
        let program = decode(&BYTES, Options::default()).unwrap();
        let text = Summary::new(&program).to_string();
        assert!(text.contains("Lines Decoded.........:     1"));
        assert!(text.contains("WARNING: header declares 2 lines, decoded 1."));
    }
}
