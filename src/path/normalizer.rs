use std::fmt;

use super::{PathLimits, SEPARATOR};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// A path reduced to its components, without `.`, `..` or empty parts.
///
/// Built purely from the string; the filesystem is never consulted, so
/// symbolic links are not resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPath {
    absolute: bool,
    components: Vec<String>,
}

impl NormalizedPath {
    pub fn parse(path: &str, limits: &PathLimits) -> Self {
        let absolute = path.starts_with(SEPARATOR);
        let mut components: Vec<String> = Vec::new();

        for part in path.split(SEPARATOR) {
            match part {
                "" | CURRENT_DIR => {}
                // Going above the root (or the relative origin) is a no-op.
                PARENT_DIR => {
                    components.pop();
                }
                _ if components.len() >= limits.max_components => {}
                _ => {
                    let part = truncate(part, limits.max_component_len);
                    // A truncated component can collapse into a special name.
                    if !matches!(part, "" | CURRENT_DIR | PARENT_DIR) {
                        components.push(part.to_string());
                    }
                }
            }
        }

        Self {
            absolute,
            components,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Reassembles the path, keeping at most `max_len` bytes.
    ///
    /// Stops at the first component that does not fit. The root `/` and the
    /// relative placeholder `.` are always emitted.
    pub fn render(&self, max_len: usize) -> String {
        let mut out = String::new();
        if self.absolute {
            out.push(SEPARATOR);
        }

        for (i, component) in self.components.iter().enumerate() {
            let separator = usize::from(i > 0);
            if out.len() + separator + component.len() > max_len {
                break;
            }
            if i > 0 {
                out.push(SEPARATOR);
            }
            out.push_str(component);
        }

        if out.is_empty() {
            out.push_str(CURRENT_DIR);
        }
        out
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(usize::MAX))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    limits: PathLimits,
}

impl Normalizer {
    pub fn new(limits: PathLimits) -> Self {
        Self { limits }
    }

    pub fn normalize(&self, path: &str) -> String {
        NormalizedPath::parse(path, &self.limits).render(self.limits.max_path_len)
    }
}

/// Normalizes `path` with the default [`PathLimits`].
pub fn normalize(path: &str) -> String {
    Normalizer::default().normalize(path)
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "/",
        ".",
        "..",
        "//",
        "/a/./b",
        "/a/b/../c",
        "a/../../b",
        "/a//b///c",
        "a/..",
        "../../x/./y/",
        "/../..",
        "./a/b/c/../../d/",
        "/home/user/./docs/../pics//2024/",
        "a/b/c",
        "/élan/ñ/../ü",
    ];

    #[test]
    fn test_collapses_current_dir() {
        assert_eq!(normalize("/a/./b"), "/a/b");
        assert_eq!(normalize("./a/."), "a");
    }

    #[test]
    fn test_resolves_parent_dir() {
        assert_eq!(normalize("/a/b/../c"), "/a/c");
        assert_eq!(normalize("a/../../b"), "b");
        assert_eq!(normalize("/../../etc"), "/etc");
    }

    #[test]
    fn test_collapses_redundant_separators() {
        assert_eq!(normalize("/a//b///c"), "/a/b/c");
        assert_eq!(normalize("a/b/"), "a/b");
        assert_eq!(normalize("///"), "/");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("."), ".");
        assert_eq!(normalize("a/.."), ".");
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("/a/.."), "/");
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_never_emits_parent_dir() {
        for sample in SAMPLES {
            let parsed = NormalizedPath::parse(sample, &PathLimits::default());
            assert!(parsed.components().iter().all(|c| c != ".." && c != "."));
        }
    }

    #[test]
    fn test_absolute_flag_preserved() {
        let parsed = NormalizedPath::parse("/../a", &PathLimits::default());
        assert!(parsed.is_absolute());
        assert_eq!(parsed.components(), ["a"]);

        let parsed = NormalizedPath::parse("a/../..", &PathLimits::default());
        assert!(!parsed.is_absolute());
        assert!(parsed.components().is_empty());
    }

    #[test]
    fn test_component_count_bound() {
        let normalizer = Normalizer::new(PathLimits {
            max_components: 2,
            ..PathLimits::default()
        });

        assert_eq!(normalizer.normalize("/a/b/c/d"), "/a/b");
        // `..` still pops once the bound is reached.
        assert_eq!(normalizer.normalize("/a/b/c/../d"), "/a/d");
    }

    #[test]
    fn test_total_length_bound() {
        let normalizer = Normalizer::new(PathLimits {
            max_path_len: 8,
            ..PathLimits::default()
        });

        assert_eq!(normalizer.normalize("/abc/def/ghi"), "/abc/def");
        assert_eq!(normalizer.normalize("abc/defgh/i"), "abc");
        assert_eq!(normalizer.normalize("/abcdefghij"), "/");
        assert_eq!(normalizer.normalize("abcdefghij"), ".");
    }

    #[test]
    fn test_component_length_bound() {
        let normalizer = Normalizer::new(PathLimits {
            max_component_len: 3,
            ..PathLimits::default()
        });

        assert_eq!(normalizer.normalize("/abcdef/gh"), "/abc/gh");
        assert_eq!(normalizer.normalize("/ééé"), "/é");
    }

    #[test]
    fn test_truncated_component_never_becomes_special() {
        let normalizer = Normalizer::new(PathLimits {
            max_component_len: 2,
            ..PathLimits::default()
        });

        assert_eq!(normalizer.normalize("/a/..hidden"), "/a");
        assert_eq!(normalizer.normalize("/a/.x"), "/a/.x");
    }

    #[test]
    fn test_bounded_output_is_idempotent() {
        let normalizer = Normalizer::new(PathLimits {
            max_path_len: 10,
            max_components: 3,
            max_component_len: 4,
        });

        for sample in SAMPLES.iter().chain(&["/abcdefgh/ijklmnop/qr/st/uv", "x/yyyyyy/zz"]) {
            let once = normalizer.normalize(sample);
            assert!(once.len() <= 10, "{:?} -> {:?}", sample, once);
            assert_eq!(normalizer.normalize(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_display_is_unbounded() {
        let parsed = NormalizedPath::parse("/a/./b/../c", &PathLimits::default());
        assert_eq!(parsed.to_string(), "/a/c");
    }
}
