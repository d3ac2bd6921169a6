use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const HEADER_SUFFIX: &str = ".h";
pub const SOURCE_SUFFIX: &str = ".cpp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Header,
    Source,
    Ignored,
}

/// Decides what a discovered path is by its suffix. Sources whose file name
/// is in `excluded` (typically the program entry point) are ignored.
pub fn classify(path: &Path, excluded: &HashSet<String>) -> FileKind {
    let text = path.to_string_lossy();

    if text.ends_with(HEADER_SUFFIX) {
        FileKind::Header
    } else if text.ends_with(SOURCE_SUFFIX) && !is_excluded(path, excluded) {
        FileKind::Source
    } else {
        FileKind::Ignored
    }
}

fn is_excluded(path: &Path, excluded: &HashSet<String>) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| excluded.contains(n))
}

/// Headers and sources, each kept in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifiedFiles {
    pub headers: Vec<PathBuf>,
    pub sources: Vec<PathBuf>,
}

impl ClassifiedFiles {
    pub fn partition(files: &[PathBuf], excluded: &HashSet<String>) -> Self {
        let mut classified = Self::default();

        for path in files {
            match classify(path, excluded) {
                FileKind::Header => classified.headers.push(path.clone()),
                FileKind::Source => classified.sources.push(path.clone()),
                FileKind::Ignored => {}
            }
        }

        classified
    }

    /// All headers, then all sources.
    pub fn in_amalgamation_order(&self) -> impl Iterator<Item = &PathBuf> {
        self.headers.iter().chain(self.sources.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_excluded() -> HashSet<String> {
        HashSet::from(["main.cpp".to_string()])
    }

    #[test]
    fn classifies_by_suffix() {
        let excluded = main_excluded();
        assert_eq!(classify(Path::new("src/a.h"), &excluded), FileKind::Header);
        assert_eq!(classify(Path::new("src/a.cpp"), &excluded), FileKind::Source);
        assert_eq!(classify(Path::new("src/a.hpp"), &excluded), FileKind::Ignored);
        assert_eq!(classify(Path::new("src/a.c"), &excluded), FileKind::Ignored);
        assert_eq!(classify(Path::new("README.md"), &excluded), FileKind::Ignored);
    }

    #[test]
    fn excludes_sources_by_file_name() {
        let excluded = main_excluded();
        assert_eq!(classify(Path::new("src/main.cpp"), &excluded), FileKind::Ignored);
        assert_eq!(classify(Path::new("src/app/main.cpp"), &excluded), FileKind::Ignored);
        assert_eq!(classify(Path::new("src/domain.cpp"), &excluded), FileKind::Source);
        assert_eq!(classify(Path::new("src/main.cpp"), &HashSet::new()), FileKind::Source);
    }

    #[test]
    fn keeps_discovery_order_without_dedup() {
        let files: Vec<PathBuf> = ["z.cpp", "b.h", "x.txt", "a.h", "main.cpp", "a.h"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let classified = ClassifiedFiles::partition(&files, &main_excluded());

        assert_eq!(
            classified.headers,
            vec![PathBuf::from("b.h"), PathBuf::from("a.h"), PathBuf::from("a.h")]
        );
        assert_eq!(classified.sources, vec![PathBuf::from("z.cpp")]);

        let ordered: Vec<_> = classified.in_amalgamation_order().cloned().collect();
        assert_eq!(ordered.last(), Some(&PathBuf::from("z.cpp")));
    }

    #[test]
    fn partition_is_idempotent() {
        let files: Vec<PathBuf> = ["a.cpp", "b.h", "main.cpp", "c.h", "d.cpp"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let first = ClassifiedFiles::partition(&files, &main_excluded());
        let second = ClassifiedFiles::partition(&files, &main_excluded());
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
