use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};

use log::debug;

use super::{Command, CommandError, Context, Flow};
use crate::path::{join_child, PathLimits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    DirectoriesOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Other,
}

/// One name yielded while enumerating a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    /// Type as reported by the enumeration itself, when it is known.
    pub kind: Option<EntryKind>,
}

impl Entry {
    fn from_dir_entry(entry: &fs::DirEntry) -> Self {
        let kind = entry.file_type().ok().map(|file_type| {
            if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            }
        });

        Self {
            name: entry.file_name(),
            kind,
        }
    }

    fn is_dot_entry(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_options(args: &[&str]) -> Result<Listing, CommandError> {
        match args {
            [] => Ok(Listing::All),
            ["-d"] => Ok(Listing::DirectoriesOnly),
            _ => Err(CommandError::InvalidOption),
        }
    }

    /// Writes the names in `dir`, one per line, in whatever order the OS
    /// enumerates them. `.` and `..` are never listed.
    pub fn list(
        &self,
        dir: &str,
        listing: Listing,
        limits: &PathLimits,
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        let list_failed = |source: io::Error| CommandError::ListFailed {
            path: dir.to_string(),
            source,
        };

        // The handle is dropped on every return path below.
        let entries = fs::read_dir(dir).map_err(list_failed)?;

        for entry in entries {
            let entry = Entry::from_dir_entry(&entry.map_err(list_failed)?);
            if entry.is_dot_entry() {
                continue;
            }
            if listing == Listing::DirectoriesOnly && !is_directory(dir, &entry, limits) {
                continue;
            }
            writeln!(out, "{}", entry.name.to_string_lossy())?;
        }
        Ok(())
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let listing = Self::parse_options(args)?;
        self.list(ctx.current_dir, listing, ctx.limits, ctx.out)?;
        Ok(Flow::Continue)
    }
}

/// Uses the enumeration's type hint, falling back to `lstat` on the child
/// path. Entries whose path would exceed the length bound are skipped.
fn is_directory(dir: &str, entry: &Entry, limits: &PathLimits) -> bool {
    let path = match join_child(dir, &entry.name, limits) {
        Ok(path) => path,
        Err(e) => {
            debug!("skipping {:?}: {}", entry.name, e);
            return false;
        }
    };

    match entry.kind {
        Some(kind) => kind == EntryKind::Directory,
        None => fs::symlink_metadata(&path)
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::Path;

    fn listed(dir: &Path, listing: Listing, limits: &PathLimits) -> BTreeSet<String> {
        let mut out = Vec::new();
        LsCommand::new()
            .list(dir.to_str().unwrap(), listing, limits, &mut out)
            .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(LsCommand::parse_options(&[]).unwrap(), Listing::All);
        assert_eq!(
            LsCommand::parse_options(&["-d"]).unwrap(),
            Listing::DirectoriesOnly
        );
        assert!(matches!(
            LsCommand::parse_options(&["-x"]),
            Err(CommandError::InvalidOption)
        ));
        assert!(matches!(
            LsCommand::parse_options(&["-d", "-d"]),
            Err(CommandError::InvalidOption)
        ));
        assert!(matches!(
            LsCommand::parse_options(&["somewhere"]),
            Err(CommandError::InvalidOption)
        ));
    }

    #[test]
    fn test_list_all_entries() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("x"), "").unwrap();
        fs::write(temp.path().join("y"), "").unwrap();

        let names = listed(temp.path(), Listing::All, &PathLimits::default());
        assert_eq!(names, set(&["x", "y"]));
    }

    #[test]
    fn test_list_includes_hidden_but_not_dot_entries() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".hidden"), "").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let names = listed(temp.path(), Listing::All, &PathLimits::default());
        assert_eq!(names, set(&[".hidden", "sub"]));
    }

    #[test]
    fn test_list_directories_only() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("d")).unwrap();
        fs::write(temp.path().join("f"), "").unwrap();

        let names = listed(temp.path(), Listing::DirectoriesOnly, &PathLimits::default());
        assert_eq!(names, set(&["d"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_not_a_directory() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let names = listed(temp.path(), Listing::DirectoriesOnly, &PathLimits::default());
        assert_eq!(names, set(&["real"]));
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_type_hint_falls_back_to_lstat() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        fs::write(temp.path().join("plain"), "").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();
        let dir = temp.path().to_str().unwrap();
        let limits = PathLimits::default();
        let unhinted = |name: &str| Entry {
            name: OsString::from(name),
            kind: None,
        };

        assert!(is_directory(dir, &unhinted("real"), &limits));
        assert!(!is_directory(dir, &unhinted("plain"), &limits));
        assert!(!is_directory(dir, &unhinted("link"), &limits));
        assert!(!is_directory(dir, &unhinted("missing"), &limits));
    }

    #[test]
    fn test_type_hint_wins_over_lstat() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        let dir = temp.path().to_str().unwrap();
        let entry = Entry {
            name: OsString::from("real"),
            kind: Some(EntryKind::Other),
        };

        assert!(!is_directory(dir, &entry, &PathLimits::default()));
    }

    #[test]
    fn test_directories_with_overlong_path_are_skipped() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("much-longer-name")).unwrap();
        let base_len = temp.path().to_str().unwrap().len();
        let limits = PathLimits {
            max_path_len: base_len + 2,
            ..PathLimits::default()
        };

        let names = listed(temp.path(), Listing::DirectoriesOnly, &limits);
        assert_eq!(names, set(&["a"]));
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let mut out = Vec::new();
        let result = LsCommand::new().list(
            "/definitely/not/here",
            Listing::All,
            &PathLimits::default(),
            &mut out,
        );

        match result {
            Err(CommandError::ListFailed { path, source }) => {
                assert_eq!(path, "/definitely/not/here");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_rejects_bad_option_without_listing() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("x"), "").unwrap();
        let limits = PathLimits::default();
        let mut out = Vec::new();

        let result = {
            let mut ctx = Context {
                current_dir: temp.path().to_str().unwrap(),
                limits: &limits,
                out: &mut out,
            };
            LsCommand::new().execute(&["-x"], &mut ctx)
        };

        assert!(matches!(result, Err(CommandError::InvalidOption)));
        assert!(out.is_empty());
    }
}
