use crate::command::{Command, SourcedCommand};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::{Path, PathBuf},
};

/// Errors raised while loading a program from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no such file: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),
}

/// A compacted Brainfuck program.
///
/// Holds the commands extracted from the source in their original
/// left-to-right order. Bracket balance is deliberately not checked
/// here; unmatched brackets surface as runtime errors in the machine.
#[derive(Debug)]
pub struct Program {
    commands: Vec<SourcedCommand>,
}

impl Program {
    /// Loads a program from a file path.
    ///
    /// A missing path is reported as [`LoadError::FileNotFound`] so
    /// the entry point can distinguish it from a read failure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io(e),
        })?;
        let program = Self::from_reader(file)?;
        log::info!(
            "loaded {} commands from {}",
            program.len(),
            path.display()
        );
        Ok(program)
    }

    /// Loads a program from any byte source.
    ///
    /// Keeps a byte if and only if it is one of the eight command
    /// characters; everything else, including whitespace and comments,
    /// is dropped without error. An empty program is valid.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let commands = Self::read_commands(reader)?;
        Ok(Program { commands })
    }

    fn read_commands<R: Read>(reader: R) -> io::Result<Vec<SourcedCommand>> {
        let mut commands: Vec<SourcedCommand> = Vec::new();
        let mut line = 0;
        let mut column = 0;

        // Byte-based scan so non-UTF-8 sources load fine. Only '\n'
        // counts as a line break.
        for byte in BufReader::new(reader).bytes() {
            let byte = byte?;
            if byte == b'\n' {
                line += 1;
                column = 0;
                continue;
            }
            if let Some(command) = Command::from_byte(byte) {
                let sourced = SourcedCommand::new(command, line, column, commands.len());
                commands.push(sourced);
            }
            column += 1;
        }

        Ok(commands)
    }

    pub fn commands(&self) -> &[SourcedCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
