use std::process;

use clap::Parser;

use twinrun::{Cli, Output};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        Output::new(false, false).error(&format!("{err:#}"));
        process::exit(1);
    }
}
