mod limits;
mod normalizer;

pub use limits::{check_len, join_child, PathError, PathLimits};
pub use normalizer::{normalize, NormalizedPath, Normalizer};

pub const SEPARATOR: char = '/';
