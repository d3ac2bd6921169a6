use crate::filewalker::DEFAULT_MAX_DEPTH;
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_OUTPUT: &str = "src/task_manager.hpp";
pub const DEFAULT_EXCLUDED: &[&str] = &["main.cpp"];
pub const DEFAULT_LIBRARY_NAME: &str = "task_manager";
pub const DEFAULT_AUTHOR: &str = "Christian";

/// Everything one amalgamation run needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_root: PathBuf,
    pub output_path: PathBuf,
    /// Source file names left out of the amalgamation.
    pub excluded: HashSet<String>,
    pub max_depth: usize,
    pub library_name: String,
    pub author: String,
    /// List each directory by name instead of filesystem order.
    pub sort: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from(DEFAULT_ROOT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            sort: false,
            verbosity: 0,
        }
    }
}

fn command() -> Command {
    Command::new("amalgamate")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Christian")
        .about("Concatenates a C++ source tree into a single header")
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Source directory to walk")
                .default_value(DEFAULT_ROOT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Sets the amalgamated output file path")
                .default_value(DEFAULT_OUTPUT)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .value_name("NAME")
                .help("Source file name to leave out (repeatable, replaces the default main.cpp)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .value_name("N")
                .help("Maximum directory depth to descend")
                .default_value("4")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("LIBRARY")
                .help("Library name shown in the title box")
                .default_value(DEFAULT_LIBRARY_NAME),
        )
        .arg(
            Arg::new("author")
                .short('a')
                .long("author")
                .value_name("AUTHOR")
                .help("Author shown in the title box")
                .default_value(DEFAULT_AUTHOR),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Visit directory entries in file-name order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> Result<Config> {
    config_from_matches(&command().get_matches())
}

/// Parses an explicit argument list; the first item is the program name.
pub fn parse_args_from<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    config_from_matches(&command().try_get_matches_from(args)?)
}

fn config_from_matches(matches: &ArgMatches) -> Result<Config> {
    let defaults = Config::default();

    let excluded = matches
        .get_many::<String>("exclude")
        .map(|vals| vals.cloned().collect())
        .unwrap_or(defaults.excluded);

    Ok(Config {
        project_root: matches
            .get_one::<PathBuf>("root")
            .cloned()
            .unwrap_or(defaults.project_root),
        output_path: matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or(defaults.output_path),
        excluded,
        max_depth: matches
            .get_one::<usize>("depth")
            .copied()
            .unwrap_or(defaults.max_depth),
        library_name: matches
            .get_one::<String>("name")
            .cloned()
            .unwrap_or(defaults.library_name),
        author: matches
            .get_one::<String>("author")
            .cloned()
            .unwrap_or(defaults.author),
        sort: matches.get_flag("sort"),
        verbosity: matches.get_count("verbose"),
    })
}
