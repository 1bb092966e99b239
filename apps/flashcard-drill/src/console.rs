//! Line-oriented console with a session transcript.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Shared, in-memory record of the session.
///
/// Clones share one buffer, so the logging layer and the console can both
/// append to it.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buffer: Arc<Mutex<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a line.
    pub fn record(&self, line: &str) {
        let mut buffer = self.lock();
        buffer.push_str(line);
        buffer.push('\n');
    }

    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let contents = self.contents();
        std::fs::write(path, contents)
    }
}

/// Writer handed to the tracing layer.
pub struct TranscriptWriter {
    transcript: Transcript,
}

impl Write for TranscriptWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.transcript
            .lock()
            .push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Transcript {
    type Writer = TranscriptWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TranscriptWriter {
            transcript: self.clone(),
        }
    }
}

/// Console that mirrors everything it prints and reads into a transcript.
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, transcript: Transcript) -> Self {
        Self {
            input,
            output,
            transcript,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Print a message line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        let line = message.to_string();
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        self.transcript.record(&line);
        Ok(())
    }

    /// Read one line, trimmed. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        self.transcript.record(line);
        Ok(Some(line.trim().to_string()))
    }

    /// Print a prompt and read the reply.
    pub fn ask(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
