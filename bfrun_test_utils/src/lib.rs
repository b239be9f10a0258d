use std::io::{self, Read, Seek, SeekFrom, Write};
use tempfile::NamedTempFile;

const TEST_FILE_CONTENT: &str = "+[-[<<[+[--->]-[<<<]]]>>>-]";
// writeln! appends a newline, but the loader drops it so only the
// command characters count
pub const TEST_FILE_NUM_COMMANDS: usize = TEST_FILE_CONTENT.len();

/// A named temporary file holding a known Brainfuck program, usable
/// anywhere a `Read` or a path is expected.
pub struct TestFile {
    file: NamedTempFile,
}

impl TestFile {
    pub fn new() -> io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", TEST_FILE_CONTENT)?;

        // Seek back to the start so reads see the whole program
        file.seek(SeekFrom::Start(0))?;
        Ok(TestFile { file })
    }
}

impl Read for TestFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.as_file_mut().read(buf)
    }
}

/// A sink that discards everything written to it.
pub struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
