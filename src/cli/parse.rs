use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "unicode-lines",
    version,
    about = "Redraw ASCII line art (-, |, +, *) with Unicode box-drawing glyphs"
)]
pub struct Cli {
    /// Files to convert, printed in order (use `-` for stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
