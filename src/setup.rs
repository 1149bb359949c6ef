// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Program setup functions.

use std::{
  fs,
  io::Write,
  path::{Path, PathBuf},
};

use env_logger::Builder;
use log::LevelFilter;
use serde::Deserialize;

/// Name of the settings file under `XDG_CONFIG_HOME/namedate`.
const SETTINGS_FILE: &str = "config.json";

/// Defaults for a run, overridden by command line flags.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
  /// Path to the `ExifTool` executable.
  pub exiftool: Option<PathBuf>,
  /// Directory receiving copied or moved files.
  pub destination: Option<PathBuf>,
  pub move_files: bool,
  pub in_place: bool,
  pub replace_existing: bool,
}

/// Sets up `env_logger` with the format "LEVEL message" (e.g. "WARN something
/// went wrong").
///
/// Log levels:
/// Error: Files that failed, and fatal errors.
/// Info: One line per file, and the run summary.
/// Debug: Extracted dates and parse failures.
/// Trace: `ExifTool` output.
pub fn configure_logging(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  Builder::new()
    .filter_level(level)
    .format(|buf, record| {
      let style = buf.default_level_style(record.level());
      writeln!(buf, "{style}{}{style:#}\t{}", record.level(), record.args())
    })
    .init();
}

/// Reads settings from `XDG_CONFIG_HOME/namedate/config.json`, if present.
pub fn load_settings() -> Result<Settings, String> {
  let xdg_dirs = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"));

  match xdg_dirs.find_config_file(SETTINGS_FILE) {
    Some(path) => {
      log::debug!("Reading settings from {}.", path.display());
      read_settings(path)
    }
    None => Ok(Settings::default()),
  }
}

/// Parses the JSON settings file at `path`.
pub fn read_settings(path: impl AsRef<Path>) -> Result<Settings, String> {
  let path = path.as_ref();

  let contents = fs::read(path)
    .map_err(|e| format!("{}: Failed to read settings ({e}).", path.display()))?;

  serde_json::from_slice(&contents)
    .map_err(|e| format!("{}: Failed to parse settings ({e}).", path.display()))
}
