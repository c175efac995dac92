use super::ConfigError;
use std::path::{Path, PathBuf};

pub const RC_FILE: &str = ".explorerrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// A missing file is an error only when the user named it.
    pub required: bool,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(ConfigPaths {
            rc_path: home.join(RC_FILE),
            required: false,
        })
    }

    pub fn explicit(path: &Path) -> Self {
        ConfigPaths {
            rc_path: path.to_path_buf(),
            required: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rc_path() {
        if let Ok(paths) = ConfigPaths::new() {
            assert!(paths.rc_path.ends_with(RC_FILE));
            assert!(!paths.required);
        }
    }

    #[test]
    fn test_explicit_path() {
        let paths = ConfigPaths::explicit(Path::new("/etc/explorer.conf"));
        assert_eq!(paths.rc_path, PathBuf::from("/etc/explorer.conf"));
        assert!(paths.required);
    }
}
