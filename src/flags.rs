use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
    start_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn new(short: &str, long: &str, description: &str, takes_value: bool) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag::new("-h", "--help", "Print this help message", false),
        );
        flags.insert(
            "version".to_string(),
            Flag::new("-v", "--version", "Show version information", false),
        );
        flags.insert(
            "config".to_string(),
            Flag::new("-c", "--config", "Read settings from FILE", true),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::new("-q", "--quiet", "Suppress hints and warnings", false),
        );
        flags.insert(
            "debug".to_string(),
            Flag::new("-D", "--debug", "Enable debug output", false),
        );

        Flags {
            flags,
            start_path: None,
        }
    }

    /// Parses `args` (without the program name). The first argument that is
    /// not a flag becomes the starting directory; later ones are ignored.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        let mut options_done = false;

        while i < args.len() {
            let arg = &args[i];

            if !options_done && arg == "--" {
                options_done = true;
                i += 1;
                continue;
            }

            let matched = if options_done {
                None
            } else {
                self.flags
                    .values_mut()
                    .find(|flag| arg == &flag.short || arg == &flag.long)
            };

            match matched {
                Some(flag) if flag.takes_value => {
                    let value = args.get(i + 1).ok_or_else(|| {
                        ShellError::Flag(format!("Flag {} requires a value", arg))
                    })?;
                    flag.value = Some(value.clone());
                    i += 1;
                }
                Some(flag) => flag.value = Some("true".to_string()),
                None if !options_done && arg.len() > 1 && arg.starts_with('-') => {
                    return Err(ShellError::Flag(format!("Unknown flag {}", arg)));
                }
                None => {
                    if self.start_path.is_none() {
                        self.start_path = Some(arg.clone());
                    }
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn start_path(&self) -> Option<&str> {
        self.start_path.as_deref()
    }

    pub fn print_help(&self) {
        println!("Usage: explorer [OPTIONS] [PATH]");
        println!("\nOptions:");

        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            let long = if flag.takes_value {
                format!("{} <FILE>", flag.long)
            } else {
                flag.long.clone()
            };
            println!("  {}, {:<17} {}", flag.short, long, flag.description);
        }
    }
}
