//! Textual include-directive deduplication.
//!
//! System includes (`#include <...>`) are hoisted out of every file into one
//! shared [`IncludeSet`]; project-local includes (`#include "..."`) are dropped
//! because the files they name are already part of the amalgamation. Nothing
//! here understands the preprocessor: lines are matched as plain text.

use log::debug;
use std::collections::HashSet;

pub const SYSTEM_INCLUDE_MARKER: &str = "#include <";
pub const LOCAL_INCLUDE_MARKER: &str = "#include \"";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    SystemInclude,
    LocalInclude,
    Code,
}

/// System includes win over local ones when a line somehow has both markers.
pub fn classify_line(line: &str) -> LineKind {
    if line.contains(SYSTEM_INCLUDE_MARKER) {
        LineKind::SystemInclude
    } else if line.contains(LOCAL_INCLUDE_MARKER) {
        LineKind::LocalInclude
    } else {
        LineKind::Code
    }
}

/// System include lines in first-seen order, unique by exact text.
///
/// Identity ignores the trailing line terminator but nothing else, so
/// `#include <vector>` and `  #include <vector>` are two different entries.
#[derive(Debug, Default, Clone)]
pub struct IncludeSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl IncludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `line` unless an identical line is already present. Returns
    /// whether it was new.
    pub fn insert(&mut self, line: &str) -> bool {
        let key = line.strip_suffix('\n').unwrap_or(line);

        if !self.seen.insert(key.to_owned()) {
            return false;
        }

        self.ordered.push(key.to_owned());
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Every include on its own line, in first-seen order.
    pub fn to_block(&self) -> String {
        let mut block = String::new();
        for line in self.iter() {
            block.push_str(line);
            block.push('\n');
        }
        block
    }
}

/// Strips include directives out of `text`, feeding system includes into
/// `includes`, and returns the remaining lines verbatim.
pub fn strip_includes(text: &str, includes: &mut IncludeSet) -> String {
    let mut body = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        match classify_line(line) {
            LineKind::SystemInclude => {
                if includes.insert(line) {
                    debug!("New include: {}", line.trim_end());
                }
            }
            LineKind::LocalInclude => {}
            LineKind::Code => body.push_str(line),
        }
    }

    body
}
