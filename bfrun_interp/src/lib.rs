//! # Brainfuck Tape Machine
//!
//! Executes a compacted [`bfrun_types::Program`] against a 30 000-cell
//! byte tape, reading and writing through the streams handed to the
//! machine. Bracket pairs are resolved at run time with a forward scan
//! for skipped loops and a stack of open `[` positions for re-entry.

pub mod vm;
pub mod vm_error;

pub use vm::{InputMode, Machine, TAPE_LEN};
pub use vm_error::RuntimeError;
