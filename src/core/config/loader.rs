use std::{fs, io};

use log::{debug, warn};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let path = &self.paths.rc_path;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.paths.required => {
                debug!("no config at {}", path.display());
                return Ok(());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        debug!("loading config from {}", path.display());
        for (index, line) in content.lines().enumerate() {
            self.process_line(index + 1, line, config);
        }
        Ok(())
    }

    /// Bad lines are reported and skipped; they never abort loading.
    fn process_line(&self, number: usize, line: &str, config: &mut Config) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!(
                "{}:{}: expected `key = value`",
                self.paths.rc_path.display(),
                number
            );
            return;
        };

        if let Err(e) = config.set(key.trim(), strip_quotes(value.trim())) {
            warn!("{}:{}: {}", self.paths.rc_path.display(), number, e);
        }
    }
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
