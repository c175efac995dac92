use std::borrow::Cow;

use super::command::CommandCompleter;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(commands: &[&'static str], color: bool) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands),
            highlighter: SyntaxHighlighter::new(commands, color),
        }
    }

    /// Returns the start of the word under the cursor and its candidates.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.ends_with([' ', '\t']) {
            words.push("");
        }

        match words.as_slice() {
            [] => (0, self.command_completer.complete_command("")),
            [word] => {
                let start = pos - word.len();
                (start, self.command_completer.complete_command(word))
            }
            // Only the first argument takes an option.
            [command, word] => {
                let start = pos - word.len();
                (start, self.command_completer.complete_option(command, word))
            }
            _ => (pos, Vec::new()),
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.highlighter.is_enabled() {
            Cow::Owned(self.highlighter.highlight_command(line))
        } else {
            Cow::Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}
