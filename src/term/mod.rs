/*!
## Rust Terminal Module

Command line front end: decodes one `_sav` file, writes the listing and
prints a report of what was found to standard error.

*/

extern crate ansi_term;
use crate::lang::{Cursor, Decoder, Header, Listing, NameTable, Options, StatementMode};
use ansi_term::Style;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

mod report;
pub use report::{Report, Summary};

#[derive(Debug, Parser)]
#[command(name = "savlist", version, about = "List a QL SuperBASIC _sav file")]
pub struct Args {
    /// The _sav file written by QSAVE
    pub file: PathBuf,

    /// Listing file [default: the input name with LST in place of SAV]
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the listing to standard output
    #[arg(long)]
    pub stdout: bool,

    /// Allow only one token per statement
    #[arg(long)]
    pub strict: bool,

    /// Right-align line numbers in N columns
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub width: usize,

    /// Do not print the report
    #[arg(short, long)]
    pub quiet: bool,

    /// No bold or underline in messages
    #[arg(long)]
    pub plain: bool,
}

pub fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        let style = if args.plain {
            Style::new()
        } else {
            Style::new().bold()
        };
        eprintln!("{}", style.paint(format!("FATAL ERROR: {:#}", error)));
        std::process::exit(1);
    }
}

pub fn run(args: &Args) -> Result<()> {
    let stderr = std::io::stderr();
    let mut log = stderr.lock();
    run_to(args, &mut log)
}

/// As [`run`], with the report written to `log`.
pub fn run_to<W: Write>(args: &Args, log: &mut W) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("cannot open SAV file '{}'", args.file.display()))?;
    let options = Options {
        mode: if args.strict {
            StatementMode::Strict
        } else {
            StatementMode::Tokens
        },
    };
    let context = || format!("cannot decode '{}'", args.file.display());

    let mut cursor = Cursor::new(&bytes);
    let header = Header::read(&mut cursor).with_context(context)?;
    let names = NameTable::read(&mut cursor, header.name_entries).with_context(context)?;
    if !args.quiet {
        let report = Report::new(&args.file, &bytes, &header, &names).styled(!args.plain);
        write!(log, "{}", report)?;
    }
    let body_offset = cursor.position();
    let program = Decoder::new(&bytes, names, options)
        .program(header, body_offset)
        .with_context(context)?;
    if !args.quiet {
        write!(log, "{}", Summary::new(&program).styled(!args.plain))?;
    }

    let listing = Listing::new(&program).width(args.width);
    if args.stdout {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        listing.write_to(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let path = match &args.output {
        Some(path) => path.clone(),
        None => listing_path(&args.file),
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create listing file '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    listing
        .write_to(&mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("cannot write listing file '{}'", path.display()))?;
    if !args.quiet {
        writeln!(log, "Listing File..........: {}", path.display())?;
    }
    Ok(())
}

/// `PROG_sav` and `GAME_SAV` become `PROG_LST` and `GAME_LST`. A dotted
/// suffix keeps its case, so `prog.sav` becomes `prog.lst`. Names without a
/// three letter suffix get `_lst` appended.
pub fn listing_path(file: &Path) -> PathBuf {
    let name = match file.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return file.join("listing_lst"),
    };
    let chars: Vec<char> = name.chars().collect();
    let n = chars.len();
    let mut new_name = format!("{}_lst", name);
    if n > 4 && (chars[n - 4] == '_' || chars[n - 4] == '.') {
        let stem: String = chars[..n - 3].iter().collect();
        let lower = chars[n - 4] == '.' && !chars[n - 3..].iter().all(|c| c.is_ascii_uppercase());
        let swapped = format!("{}{}", stem, if lower { "lst" } else { "LST" });
        if swapped != name {
            new_name = swapped;
        }
    }
    file.with_file_name(new_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_path() {
        assert_eq!(
            listing_path(Path::new("flp1_PROG_sav")),
            PathBuf::from("flp1_PROG_LST")
        );
        assert_eq!(listing_path(Path::new("PROG_sav")), PathBuf::from("PROG_LST"));
        assert_eq!(listing_path(Path::new("PROG.SAV")), PathBuf::from("PROG.LST"));
        assert_eq!(
            listing_path(Path::new("dir/GAME_SAV")),
            PathBuf::from("dir/GAME_LST")
        );
        assert_eq!(
            listing_path(Path::new("prog.sav")),
            PathBuf::from("prog.lst")
        );
        assert_eq!(listing_path(Path::new("prog")), PathBuf::from("prog_lst"));
        assert_eq!(
            listing_path(Path::new("prog_LST")),
            PathBuf::from("prog_LST_lst")
        );
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["savlist", "--strict", "--width", "5", "x_sav"]);
        assert!(args.strict);
        assert_eq!(args.width, 5);
        assert_eq!(args.file, PathBuf::from("x_sav"));
        assert!(Args::try_parse_from(["savlist"]).is_err());
        assert!(Args::try_parse_from(["savlist", "a_sav", "b_sav"]).is_err());
        assert!(Args::try_parse_from(["savlist", "-o", "x", "--stdout", "a_sav"]).is_err());
    }
}
