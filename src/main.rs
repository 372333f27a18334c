use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use assign_interpreter::execute;
use clap::Parser;

/// Evaluates a program of integer assignment statements, printing each
/// variable as it is assigned.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print how long the run took once the program finishes.
    #[arg(short, long)]
    time: bool,

    /// Path of the program to run.
    source: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.source).unwrap_or_else(|err| {
        eprintln!(
            "Bad source file. Unable to read from: {} ({})",
            args.source.display(),
            err
        );
        process::exit(1);
    });

    let start = Instant::now();

    if let Err(err) = execute(&source) {
        eprintln!("{}", err);
        process::exit(1);
    }

    if args.time {
        println!("Successfully Executed: Took {} ms.", start.elapsed().as_millis());
    }
}
