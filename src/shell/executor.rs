use std::io::Write;

use crate::core::commands::{CommandError, CommandLine, Context, Flow};
use crate::input::LineSource;

const TRAILING_WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

pub trait CommandHandler {
    /// Handles one raw input line and says whether the loop goes on.
    fn handle_line(&mut self, line: &str) -> Flow;
}

impl<I: LineSource, O: Write, E: Write> CommandHandler for super::Shell<I, O, E> {
    fn handle_line(&mut self, line: &str) -> Flow {
        let line = line.trim_end_matches(TRAILING_WHITESPACE);
        let Some(command) = CommandLine::parse(line, self.config.max_tokens) else {
            return Flow::Continue;
        };

        let result = {
            let mut ctx = Context {
                current_dir: self.session.current_dir(),
                limits: &self.config.limits,
                out: &mut self.out,
            };
            self.executor.execute(&command, &mut ctx)
        };

        let flow = match result {
            Ok(flow) => flow,
            Err(e) => {
                report(&mut self.out, &mut self.err, &e);
                Flow::Continue
            }
        };
        let _ = self.out.flush();

        if flow == Flow::Continue {
            self.session.resync(self.working_dir.as_ref());
        }
        flow
    }
}

/// Usage errors go to stdout as `Error: ...`; OS failures go to stderr as
/// `<path>: <reason>`.
fn report(out: &mut dyn Write, err: &mut dyn Write, error: &CommandError) {
    let _ = match error {
        CommandError::InvalidOption | CommandError::UnknownCommand(_) => {
            writeln!(out, "Error: {}", error)
        }
        CommandError::ListFailed { .. } | CommandError::Io(_) => writeln!(err, "{}", error),
    };
}
