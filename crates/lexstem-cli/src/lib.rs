// lexstem-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use lexstem_core::RuleTableError;
use lexstem_lang::MorphologyRegistry;
use lexstem_lang::registry::BUILTIN_LANGUAGES;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a directory of rule table overrides.
const DATA_PATH_ENV: &str = "LEXSTEM_DATA_PATH";

/// Per-user data directory name under `$HOME`.
const HOME_DATA_DIR: &str = ".lexstem";

/// Build a registry from the built-in tables plus any `<lang>.json`
/// overrides found on the search path.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `LEXSTEM_DATA_PATH` environment variable
/// 3. `~/.lexstem`
/// 4. Current working directory
///
/// The first directory holding at least one override supplies all of them.
pub fn load_registry(data_path: Option<&str>) -> Result<MorphologyRegistry, String> {
    if let Some(dir) = data_path.filter(|dir| !Path::new(dir).is_dir()) {
        return Err(format!("data directory {dir} does not exist"));
    }

    let mut registry = MorphologyRegistry::with_builtin();
    for dir in build_search_paths(data_path) {
        let loaded = load_overrides(&mut registry, &dir)
            .map_err(|e| format!("failed to load rule table: {e}"))?;
        if loaded > 0 {
            tracing::debug!(dir = %dir.display(), loaded, "loaded rule table overrides");
            break;
        }
    }
    Ok(registry)
}

/// Load `<lang>.json` for every supported language present in `dir`.
fn load_overrides(registry: &mut MorphologyRegistry, dir: &Path) -> Result<usize, RuleTableError> {
    let mut loaded = 0;
    for language in BUILTIN_LANGUAGES {
        let path = dir.join(format!("{language}.json"));
        if path.is_file() {
            registry.load_file(&path)?;
            loaded += 1;
        }
    }
    Ok(loaded)
}

/// Build the list of directories to search for rule tables.
pub fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_DATA_DIR));
    }

    // fallback for local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--NAME=VALUE`, `--NAME VALUE` or `-S VALUE` option out of `args`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn parse_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long_flag = format!("--{long}");
    let long_prefix = format!("--{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_prefix) {
            value = Some(val.to_string());
        } else if *arg == long_flag || (!short.is_empty() && arg == short) {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a numeric option value, exiting on garbage.
pub fn parse_count(name: &str, value: Option<String>, default: usize) -> usize {
    match value {
        None => default,
        Some(v) => v
            .parse()
            .unwrap_or_else(|_| fatal(&format!("--{name} expects a number, got {v:?}"))),
    }
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
