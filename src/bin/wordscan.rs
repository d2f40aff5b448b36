//! Wordscan CLI binary.

use clap::Parser;
use std::process;
use wordscan::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = WordscanArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
