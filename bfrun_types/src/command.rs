use core::fmt;

// Enum for the eight Brainfuck commands
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Command {
    IncrementPointer, // >
    DecrementPointer, // <
    IncrementByte,    // +
    DecrementByte,    // -
    OutputByte,       // .
    InputByte,        // ,
    JumpForward,      // [
    JumpBackward,     // ]
}

impl Command {
    /// Maps a source byte to a command. Every byte outside the
    /// eight-character alphabet yields `None` and is dropped by the
    /// loader.
    pub fn from_byte(byte: u8) -> Option<Command> {
        match byte {
            b'>' => Some(Command::IncrementPointer),
            b'<' => Some(Command::DecrementPointer),
            b'+' => Some(Command::IncrementByte),
            b'-' => Some(Command::DecrementByte),
            b'.' => Some(Command::OutputByte),
            b',' => Some(Command::InputByte),
            b'[' => Some(Command::JumpForward),
            b']' => Some(Command::JumpBackward),
            _ => None,
        }
    }

    /// The character this command was written as.
    pub fn as_char(self) -> char {
        match self {
            Command::IncrementPointer => '>',
            Command::DecrementPointer => '<',
            Command::IncrementByte => '+',
            Command::DecrementByte => '-',
            Command::OutputByte => '.',
            Command::InputByte => ',',
            Command::JumpForward => '[',
            Command::JumpBackward => ']',
        }
    }
}

// Corresponding display strings
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::IncrementPointer => write!(f, "Increment Pointer (>)"),
            Command::DecrementPointer => write!(f, "Decrement Pointer (<)"),
            Command::IncrementByte => write!(f, "Increment Byte (+)"),
            Command::DecrementByte => write!(f, "Decrement Byte (-)"),
            Command::OutputByte => write!(f, "Output Byte (.)"),
            Command::InputByte => write!(f, "Input Byte (,)"),
            Command::JumpForward => write!(f, "Jump Forward ([)"),
            Command::JumpBackward => write!(f, "Jump Backward (])"),
        }
    }
}

/// A command together with where it sat in the source file: 1-based
/// line and column, plus its index in the compacted sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SourcedCommand {
    command: Command,
    line: usize,
    column: usize,
    index: usize,
}

impl SourcedCommand {
    pub(crate) fn new(command: Command, line: usize, column: usize, index: usize) -> Self {
        SourcedCommand {
            command,
            line: line + 1,
            column: column + 1,
            index,
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

// Nice display string, used verbatim in runtime diagnostics
impl fmt::Display for SourcedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.command)
    }
}
