use std::process::ExitCode;

use clap::Parser;
use i18n_typegen::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match i18n_typegen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
