use std::path::PathBuf;

use clap::Parser;

/// Handle CLI arguments for bfrun
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The Brainfuck program to execute
    #[clap(name = "PROGRAM")]
    pub program: Option<PathBuf>,

    /// After each ',' read, discard input through the next newline.
    ///
    /// Handy when typing input at a terminal: ',' sees one keystroke
    /// per line and the Enter key is swallowed. Leave it off for piped
    /// input, where every byte counts.
    #[clap(short = 'd', long)]
    pub drain_input: bool,
}
