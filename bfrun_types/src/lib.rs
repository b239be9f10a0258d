//! # Brainfuck Program Representation
//!
//! Provides the command alphabet and the program loader. The loader
//! turns an arbitrary byte source into a compacted sequence of the
//! eight Brainfuck commands, remembering where in the source each one
//! came from so that runtime errors can point back at it.

// The eight-command alphabet and source-position bookkeeping.
pub mod command;

// Reading and compacting Brainfuck programs from files or readers.
pub mod program;

pub use command::{Command, SourcedCommand};
pub use program::{LoadError, Program};
