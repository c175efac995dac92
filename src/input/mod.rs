mod completer;

use std::io::{BufRead, Write};

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

pub use completer::{CommandCompleter, ShellCompleter};

use crate::core::config::Config;
use crate::error::ShellError;

pub const INTERRUPT_HINT: &str = "Use 'quit' to exit";

/// Where command lines come from.
pub trait LineSource {
    /// Shows `prompt` and blocks for one line. `Ok(None)` is end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        (**self).read_line(prompt)
    }
}

/// Plain buffered reading, used when stdin is not a terminal and in tests.
pub struct StreamSource<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StreamSource { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> LineSource for StreamSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Line editing with history, completion and highlighting.
pub struct EditorSource {
    editor: Editor<ShellCompleter, DefaultHistory>,
    quiet: bool,
}

impl EditorSource {
    pub fn new(config: &Config, commands: &[&'static str], quiet: bool) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(commands, config.color)));
        editor.set_auto_add_history(true);
        editor.set_max_history_size(config.history_size)?;

        Ok(EditorSource { editor, quiet })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // An empty line re-prompts.
            Err(ReadlineError::Interrupted) => {
                if !self.quiet {
                    println!("{}", INTERRUPT_HINT);
                }
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

pub fn stdin_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}
