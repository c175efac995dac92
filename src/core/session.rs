use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::os_reason;

/// Placeholder used when the working directory cannot be queried.
pub const UNKNOWN_DIR: &str = ".";

/// Access to the directory the process is "in".
pub trait WorkingDir {
    fn current_dir(&self) -> io::Result<PathBuf>;
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
}

/// The real process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDir;

impl WorkingDir for ProcessDir {
    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }
}

/// Per-session state threaded through every dispatch step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_dir: String,
}

impl Session {
    pub fn new(current_dir: impl Into<String>) -> Self {
        Self {
            current_dir: current_dir.into(),
        }
    }

    /// Moves into `start` when it names a directory. Otherwise reports
    /// `<path>: <reason>` on `err` and keeps the current working directory.
    pub fn start(start: Option<&str>, working_dir: &dyn WorkingDir, err: &mut dyn Write) -> Self {
        if let Some(path) = start {
            let entered = check_directory(Path::new(path))
                .and_then(|()| working_dir.set_current_dir(Path::new(path)));
            match entered {
                Ok(()) => debug!("starting in {}", path),
                Err(e) => {
                    let _ = writeln!(err, "{}: {}", path, os_reason(&e));
                    debug!("falling back to the process working directory");
                }
            }
        }

        let mut session = Self::new(UNKNOWN_DIR);
        session.resync(working_dir);
        session
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    /// Re-reads the working directory; commands may have moved it.
    pub fn resync(&mut self, working_dir: &dyn WorkingDir) {
        self.current_dir = match working_dir.current_dir() {
            Ok(dir) => dir.to_string_lossy().into_owned(),
            Err(e) => {
                debug!("cannot read working directory: {}", e);
                UNKNOWN_DIR.to_string()
            }
        };
    }
}

/// `lstat` based: a symlink is never a directory here.
fn check_directory(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        Ok(())
    } else {
        Err(io::Error::from_raw_os_error(libc::ENOTDIR))
    }
}
