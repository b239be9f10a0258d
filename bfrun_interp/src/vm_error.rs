use bfrun_types::SourcedCommand;
use std::io;

/// Errors the machine can hit while executing a program.
///
/// None of these is recoverable: the machine stops at the first one
/// and the entry point turns it into a nonzero exit.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// `>` at the last cell or `<` at the first.
    #[error("pointer out of bounds (pointer: {pointer}, tape size: {tape_len}) at {command}")]
    PointerOutOfBounds {
        pointer: usize,
        tape_len: usize,
        command: SourcedCommand,
    },

    /// A `[` whose forward scan ran off the end of the program.
    #[error("unmatched '[' at {command}: no closing bracket before end of program")]
    UnmatchedForward { command: SourcedCommand },

    /// A `]` reached with no open `[` on the bracket stack.
    #[error("unmatched ']' at {command}: no open bracket to close")]
    UnmatchedBackward { command: SourcedCommand },

    /// Read or write failure on the machine's input or output stream.
    #[error("I/O error at {command}: {source}")]
    Io {
        command: SourcedCommand,
        source: io::Error,
    },
}
