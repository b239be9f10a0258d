use bfrun_interp::{InputMode, Machine};
use bfrun_types::Program;
use clap::Parser;
use std::error::Error;
use std::io;

mod cli;
use cli::Cli;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("bfrun: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let Some(path) = args.program else {
        println!("Please provide the path to a Brainfuck program");
        return Ok(());
    };

    let program = Program::from_file(&path)?;

    let input_mode = if args.drain_input {
        InputMode::DrainAfterRead
    } else {
        InputMode::ByteExact
    };
    log::debug!("input mode: {:?}", input_mode);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut machine = Machine::new(
        program,
        Box::new(stdin.lock()),
        Box::new(stdout.lock()),
        input_mode,
    );
    machine.run()?;

    Ok(())
}
