use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use minic::run;

/// minic is a tree-walking interpreter for a miniature C-style language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the minic source file to execute.
    path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Ok(source) = fs::read_to_string(&args.path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.path.display());
        return ExitCode::FAILURE;
    };

    if let Err(e) = run(&source) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
