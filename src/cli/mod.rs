mod handlers;
pub mod parse;

use std::io::stdout;

use clap::Parser;
pub use handlers::{convert_files, read_input};
pub use parse::Cli;

use crate::core::{config::Config, error::Error};

pub fn run() -> Result<(), Error> {
    let cli = parse::Cli::parse();
    handlers::convert_files(&cli.files, &Config::default(), stdout().lock())
}
