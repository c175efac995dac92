use std::collections::BTreeMap;
use std::io::{self, Write};

use log::debug;
use thiserror::Error;

mod ls;
mod quit;

pub use ls::{Entry, EntryKind, Listing, LsCommand};
pub use quit::QuitCommand;

use crate::error::os_reason;
use crate::path::PathLimits;

pub const DEFAULT_MAX_TOKENS: usize = 64;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid option")]
    InvalidOption,
    #[error("unknown command")]
    UnknownCommand(String),
    #[error("{}: {}", .path, os_reason(.source))]
    ListFailed { path: String, source: io::Error },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a command may look at or write to while it runs.
pub struct Context<'a> {
    pub current_dir: &'a str,
    pub limits: &'a PathLimits,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<Flow, CommandError>;
}

/// One input line split into tokens. Token 0 is the command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Splits on runs of spaces and tabs, keeping at most `max_tokens`
    /// tokens. Returns `None` for a blank line.
    pub fn parse(line: &'a str, max_tokens: usize) -> Option<Self> {
        let tokens: Vec<&str> = line
            .split([' ', '\t'])
            .filter(|token| !token.is_empty())
            .take(max_tokens)
            .collect();

        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn name(&self) -> &'a str {
        self.tokens[0]
    }

    pub fn args(&self) -> &[&'a str] {
        &self.tokens[1..]
    }
}

#[derive(Clone)]
enum CommandType {
    Ls(LsCommand),
    Quit(QuitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(args, ctx),
            CommandType::Quit(cmd) => cmd.execute(args, ctx),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("ls", CommandType::Ls(LsCommand::new()));
        commands.insert("quit", CommandType::Quit(QuitCommand::new()));

        Self { commands }
    }

    pub fn execute(
        &self,
        line: &CommandLine<'_>,
        ctx: &mut Context<'_>,
    ) -> Result<Flow, CommandError> {
        let name = line.name();
        match self.commands.get(name) {
            Some(cmd) => {
                debug!("dispatching {} {:?} in {}", name, line.args(), ctx.current_dir);
                cmd.execute(line.args(), ctx)
            }
            None => Err(CommandError::UnknownCommand(name.to_string())),
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }
}
