//! # savlist
//!
//! Lists a QL SuperBASIC program saved with `QSAVE`.
//!

fn main() {
    sav::term::main();
}
