use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_MAX_PATH_LEN: usize = 4095;
pub const DEFAULT_MAX_COMPONENTS: usize = 4096;
pub const DEFAULT_MAX_COMPONENT_LEN: usize = 4095;

/// Bounds applied whenever a path string is built or rebuilt.
///
/// All lengths are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    pub max_path_len: usize,
    pub max_components: usize,
    pub max_component_len: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
            max_components: DEFAULT_MAX_COMPONENTS,
            max_component_len: DEFAULT_MAX_COMPONENT_LEN,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path too long ({len} bytes, limit {max})")]
    TooLong { len: usize, max: usize },
}

pub fn check_len(len: usize, limits: &PathLimits) -> Result<(), PathError> {
    if len > limits.max_path_len {
        return Err(PathError::TooLong {
            len,
            max: limits.max_path_len,
        });
    }
    Ok(())
}

/// Builds `base/name`, refusing results longer than `max_path_len`.
pub fn join_child(base: &str, name: &OsStr, limits: &PathLimits) -> Result<PathBuf, PathError> {
    check_len(base.len() + 1 + name.len(), limits)?;
    Ok(Path::new(base).join(name))
}
