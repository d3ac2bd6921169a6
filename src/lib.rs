//! # amalgamate Library
//!
//! Turns a C++ source tree into one self-contained header:
//!
//! - walk the tree and collect `.h` and `.cpp` files
//! - hoist system includes (`#include <...>`) into one deduplicated block
//! - drop project-local includes (`#include "..."`)
//! - concatenate every file behind a boxed `Start of <path>` comment
//!
//! ## Usage
//!
//! ```rust,no_run
//! use amalgamate::{Config, run_amalgamate};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config {
//!         project_root: PathBuf::from("src"),
//!         output_path: PathBuf::from("dist/task_manager.hpp"),
//!         ..Config::default()
//!     };
//!
//!     let report = run_amalgamate(config).await?;
//!     println!("{} headers, {} sources", report.headers, report.sources);
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod boxed;
pub mod classify;
pub mod cli;
pub mod filewalker;
pub mod includes;
pub mod logging;
pub mod writer;

pub use assembler::{Amalgamation, Title, assemble};
pub use classify::{ClassifiedFiles, FileKind};
pub use cli::Config;
pub use filewalker::find_files;
pub use includes::IncludeSet;
pub use writer::WriteMode;

use anyhow::Result;
use chrono::Local;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output_path: PathBuf,
    pub headers: usize,
    pub sources: usize,
    pub includes: usize,
    pub mode: WriteMode,
}

/// Amalgamates `config.project_root` into `config.output_path` and prints a
/// completion line.
pub async fn run_amalgamate(config: Config) -> Result<Report> {
    let files = find_files(&config.project_root, config.max_depth, config.sort)?;
    let files = without_output(files, &config.output_path);

    let classified = ClassifiedFiles::partition(&files, &config.excluded);
    info!(
        "Found {} files: {} headers, {} sources",
        files.len(),
        classified.headers.len(),
        classified.sources.len()
    );

    if classified.is_empty() {
        warn!(
            "No .h or .cpp files under {}",
            config.project_root.display()
        );
    }

    let title = Title {
        library_name: config.library_name.clone(),
        author: config.author.clone(),
    };
    let amalgamation = assemble(&classified, &title)?;

    let mode = writer::write_document(&config.output_path, &amalgamation.document).await?;
    info!("Wrote {} ({mode})", config.output_path.display());

    println!("{}", writer::completion_message(Local::now()));

    Ok(Report {
        output_path: config.output_path,
        headers: amalgamation.headers,
        sources: amalgamation.sources,
        includes: amalgamation.includes,
        mode,
    })
}

/// Drops the output file from the discovered set so a previous amalgamation
/// never feeds into the next one.
fn without_output(files: Vec<PathBuf>, output_path: &Path) -> Vec<PathBuf> {
    let Ok(output) = output_path.canonicalize() else {
        return files;
    };

    files
        .into_iter()
        .filter(|path| {
            let is_output = path.canonicalize().is_ok_and(|p| p == output);
            if is_output {
                debug!("Skipping previous output: {}", path.display());
            }
            !is_output
        })
        .collect()
}
