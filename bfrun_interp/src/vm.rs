use crate::vm_error::RuntimeError;
use bfrun_types::{Command, Program, SourcedCommand};
use std::io::{self, Read, Write};

/// Number of cells on the tape. Fixed; the tape never grows.
pub const TAPE_LEN: usize = 30_000;

/// How `,` treats input that follows the byte it consumed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Consume exactly one byte per `,`. The right choice for piped
    /// input, and the default.
    #[default]
    ByteExact,
    /// After each read, discard input through the next newline. Makes
    /// `,` read a single keystroke per line when input comes from a
    /// terminal.
    DrainAfterRead,
}

// The tape machine. Owns the program, the 30 000-cell tape, the data
// pointer, and the stack of open '[' positions; drives the input and
// output streams handed to it.
pub struct Machine<'io> {
    program: Program,
    tape: Vec<u8>,
    pointer: usize,
    instruction_index: usize,
    loop_stack: Vec<usize>,
    input: Box<dyn Read + 'io>,
    output: Box<dyn Write + 'io>,
    input_mode: InputMode,
}

impl<'io> Machine<'io> {
    pub fn new(
        program: Program,
        input: Box<dyn Read + 'io>,
        output: Box<dyn Write + 'io>,
        input_mode: InputMode,
    ) -> Self {
        Machine {
            program,
            tape: vec![0; TAPE_LEN],
            pointer: 0,
            instruction_index: 0,
            loop_stack: Vec::new(),
            input,
            output,
            input_mode,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Runs the program to completion or to the first error.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.instruction_index < self.program.len() {
            self.step()?;
        }
        Ok(())
    }

    /// Executes the command under the instruction pointer and advances
    /// it, either by one or to a jump target.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        let sourced = self.program.commands()[self.instruction_index];
        let mut next_index = self.instruction_index + 1;
        log::debug!("executing {}", sourced);

        match sourced.command() {
            Command::IncrementPointer => {
                if self.pointer + 1 == TAPE_LEN {
                    return Err(self.pointer_error(sourced));
                }
                self.pointer += 1;
            }
            Command::DecrementPointer => {
                if self.pointer == 0 {
                    return Err(self.pointer_error(sourced));
                }
                self.pointer -= 1;
            }
            Command::IncrementByte => {
                self.tape[self.pointer] = self.tape[self.pointer].wrapping_add(1);
            }
            Command::DecrementByte => {
                self.tape[self.pointer] = self.tape[self.pointer].wrapping_sub(1);
            }
            Command::OutputByte => {
                let byte = self.tape[self.pointer];
                self.output
                    .write_all(&[byte])
                    .map_err(|source| RuntimeError::Io {
                        command: sourced,
                        source,
                    })?;
            }
            Command::InputByte => {
                self.read_into_cell(sourced)?;
            }
            Command::JumpForward => {
                if self.tape[self.pointer] == 0 {
                    next_index = self.matching_close(sourced)? + 1;
                    log::debug!("loop skipped, jumping to {}", next_index);
                } else {
                    self.loop_stack.push(self.instruction_index);
                }
            }
            Command::JumpBackward => {
                let open = *self
                    .loop_stack
                    .last()
                    .ok_or(RuntimeError::UnmatchedBackward { command: sourced })?;
                if self.tape[self.pointer] != 0 {
                    // Re-enter the loop body; the '[' stays on the stack
                    next_index = open + 1;
                } else {
                    self.loop_stack.pop();
                }
            }
        }

        self.instruction_index = next_index;
        Ok(())
    }

    /// Scans forward from a `[` for its matching `]`, counting bracket
    /// depth. Returns the index of the `]`.
    fn matching_close(&self, open: SourcedCommand) -> Result<usize, RuntimeError> {
        let commands = self.program.commands();
        let mut depth = 1usize;
        let mut scan = open.index();

        while depth != 0 {
            scan += 1;
            match commands.get(scan).map(|c| c.command()) {
                Some(Command::JumpForward) => depth += 1,
                Some(Command::JumpBackward) => depth -= 1,
                Some(_) => {}
                None => return Err(RuntimeError::UnmatchedForward { command: open }),
            }
        }

        Ok(scan)
    }

    // One byte per ',' into the current cell; end of input stores 0.
    // In drain mode, anything up to the next newline is discarded
    // afterwards so a terminal user's Enter key is not seen by the
    // next ','.
    fn read_into_cell(&mut self, sourced: SourcedCommand) -> Result<(), RuntimeError> {
        let io_error = |source| RuntimeError::Io {
            command: sourced,
            source,
        };

        let mut buf = [0u8; 1];
        let byte = match self.input.read(&mut buf).map_err(io_error)? {
            0 => 0,
            _ => buf[0],
        };
        self.tape[self.pointer] = byte;

        if self.input_mode == InputMode::DrainAfterRead && byte != b'\n' {
            self.drain_line().map_err(io_error)?;
        }
        Ok(())
    }

    fn drain_line(&mut self) -> io::Result<()> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf)? {
                0 => return Ok(()),
                _ if buf[0] == b'\n' => return Ok(()),
                _ => {}
            }
        }
    }

    fn pointer_error(&self, command: SourcedCommand) -> RuntimeError {
        RuntimeError::PointerOutOfBounds {
            pointer: self.pointer,
            tape_len: TAPE_LEN,
            command,
        }
    }
}
