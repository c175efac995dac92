use std::ffi::CStr;
use std::io;

use thiserror::Error;

use crate::core::config::ConfigError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Flag error: {0}")]
    Flag(String),
    #[error("Ctrl-C error: {0}")]
    CtrlC(#[from] ctrlc::Error),
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// The OS description of `err`, the way `perror` prints it.
pub fn os_reason(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => {
            // strerror returns a NUL-terminated message owned by libc.
            let message = unsafe { CStr::from_ptr(libc::strerror(code)) };
            message.to_string_lossy().into_owned()
        }
        None => err.to_string(),
    }
}
