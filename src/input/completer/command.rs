use std::collections::BTreeMap;

use rustyline::completion::Pair;

/// Completes command names and the options each command accepts.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeMap<&'static str, &'static [&'static str]>,
}

impl CommandCompleter {
    pub fn new(commands: &[&'static str]) -> Self {
        let commands = commands
            .iter()
            .map(|&name| (name, options_for(name)))
            .collect();
        Self { commands }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let input = input.trim();
        self.commands
            .keys()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }

    pub fn complete_option(&self, command: &str, input: &str) -> Vec<Pair> {
        let Some(options) = self.commands.get(command) else {
            return Vec::new();
        };

        options
            .iter()
            .filter(|option| option.starts_with(input))
            .map(|option| Pair {
                display: option.to_string(),
                replacement: option.to_string(),
            })
            .collect()
    }
}

fn options_for(command: &str) -> &'static [&'static str] {
    match command {
        "ls" => &["-d"],
        _ => &[],
    }
}
