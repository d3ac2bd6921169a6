use crate::boxed::boxed;
use crate::classify::ClassifiedFiles;
use crate::includes::{IncludeSet, strip_includes};
use anyhow::{Context, Result, bail};
use content_inspector::{ContentType, inspect};
use log::{debug, info};
use memmap2::MmapOptions;
use std::fs::File;
use std::path::Path;
use std::str;

/// What the title box says about the library.
#[derive(Debug, Clone)]
pub struct Title {
    pub library_name: String,
    pub author: String,
}

impl Title {
    fn render(&self, headers: usize, sources: usize) -> String {
        format!(
            "\nAn amalgamation of the {} library\nBy {}\n{headers} .h\n{sources} .cpp\n",
            self.library_name, self.author
        )
    }
}

/// The assembled single-file document plus the numbers that went into it.
#[derive(Debug, Clone)]
pub struct Amalgamation {
    pub document: String,
    pub headers: usize,
    pub sources: usize,
    pub includes: usize,
}

/// Reads a source file as UTF-8 text. Binary content is rejected.
pub fn read_source(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat file: {}", path.display()))?
        .len();

    if len == 0 {
        debug!("File '{}' is empty", path.display());
        return Ok(String::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe {
        MmapOptions::new()
            .map(&file)
            .with_context(|| format!("Failed to mmap file: {}", path.display()))?
    };

    let sample_size = std::cmp::min(8192, mmap.len());
    if inspect(&mmap[..sample_size]) == ContentType::BINARY {
        bail!("Refusing to amalgamate binary file: {}", path.display());
    }

    let text = str::from_utf8(&mmap)
        .with_context(|| format!("Invalid UTF-8 in {}", path.display()))?;

    Ok(text.to_owned())
}

/// Builds the document from already loaded `(path, contents)` pairs, given in
/// amalgamation order.
pub fn assemble_texts<P: AsRef<Path>>(
    title: &Title,
    headers: usize,
    sources: usize,
    files: &[(P, String)],
) -> Amalgamation {
    let mut includes = IncludeSet::new();
    let mut segments = String::new();

    for (path, text) in files {
        segments.push('\n');
        segments.push_str(&boxed(&format!("Start of {}", path.as_ref().display())));
        segments.push('\n');
        segments.push_str(&strip_includes(text, &mut includes));
    }

    if includes.is_empty() {
        debug!("No system includes found");
    }

    let mut document = boxed(&title.render(headers, sources));
    document.push('\n');
    document.push_str(&includes.to_block());
    document.push('\n');
    document.push_str(&segments);

    Amalgamation {
        document,
        headers,
        sources,
        includes: includes.len(),
    }
}

/// Reads every classified file, headers first, and assembles the document.
pub fn assemble(classified: &ClassifiedFiles, title: &Title) -> Result<Amalgamation> {
    let mut files = Vec::with_capacity(classified.headers.len() + classified.sources.len());

    for path in classified.in_amalgamation_order() {
        debug!("Reading: {}", path.display());
        files.push((path.as_path(), read_source(path)?));
    }

    let amalgamation = assemble_texts(
        title,
        classified.headers.len(),
        classified.sources.len(),
        &files,
    );

    info!(
        "Assembled {} headers and {} sources with {} distinct includes",
        amalgamation.headers, amalgamation.sources, amalgamation.includes
    );

    Ok(amalgamation)
}
