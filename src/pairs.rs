//! Source/destination README pairs.

use std::path::{Path, PathBuf};

/// One unit of work: a source README and where its localized copy goes.
///
/// Both paths are relative to the repository root given at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePair {
    pub source: &'static str,
    pub destination: &'static str,
}

impl FilePair {
    /// Resolve both paths against `root`.
    pub fn resolve(&self, root: &Path) -> (PathBuf, PathBuf) {
        (root.join(self.source), root.join(self.destination))
    }
}

/// Top-level READMEs and their copies under the locale doc directories.
pub fn readme_pairs() -> Vec<FilePair> {
    vec![
        FilePair {
            source: "README.md",
            destination: "docs/en_US/README.md",
        },
        FilePair {
            source: "README-CN.md",
            destination: "docs/zh_CN/README.md",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_root() {
        let pair = readme_pairs()[1];
        let (src, dst) = pair.resolve(Path::new("/repo"));
        assert_eq!(src, PathBuf::from("/repo/README-CN.md"));
        assert_eq!(dst, PathBuf::from("/repo/docs/zh_CN/README.md"));
    }

    #[test]
    fn english_readme_comes_first() {
        let pairs = readme_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].source, "README.md");
        assert_eq!(pairs[0].destination, "docs/en_US/README.md");
    }
}
