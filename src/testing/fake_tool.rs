// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Scripted stand-in for `ExifTool`.

use std::{
  cell::RefCell,
  collections::HashSet,
  fs,
  path::{Path, PathBuf},
};

use chrono::NaiveDateTime;

use crate::io::MetadataTool;

/// Answers queries from sets of file names, and records writes instead of
/// changing files. A write still fails if the file does not exist, as
/// `ExifTool` would.
#[derive(Default)]
pub struct FakeTool {
  with_dates: HashSet<&'static str>,
  read_errors: HashSet<&'static str>,
  write_errors: HashSet<&'static str>,
  queried: RefCell<Vec<PathBuf>>,
  written: RefCell<Vec<(PathBuf, NaiveDateTime)>>,
}

impl FakeTool {
  /// Reports these file names as already having dates.
  pub fn with_dates(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
    self.with_dates.extend(names);
    self
  }

  /// Fails queries for these file names.
  pub fn with_read_errors(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
    self.read_errors.extend(names);
    self
  }

  /// Fails writes for these file names.
  pub fn with_write_errors(mut self, names: impl IntoIterator<Item = &'static str>) -> Self {
    self.write_errors.extend(names);
    self
  }

  /// Every path queried, in order.
  pub fn queried(&self) -> Vec<PathBuf> {
    self.queried.borrow().clone()
  }

  /// Every successful write, in order.
  pub fn written(&self) -> Vec<(PathBuf, NaiveDateTime)> {
    self.written.borrow().clone()
  }
}

fn name_of(file: &Path) -> &str {
  file.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

impl MetadataTool for FakeTool {
  fn has_dates(&self, file: &Path) -> Result<bool, String> {
    self.queried.borrow_mut().push(file.to_path_buf());

    if self.read_errors.contains(name_of(file)) {
      return Err(format!("{}: Scripted read failure.", file.display()));
    }

    Ok(self.with_dates.contains(name_of(file)))
  }

  fn write_dates(&self, file: &Path, date_time: &NaiveDateTime) -> Result<(), String> {
    if self.write_errors.contains(name_of(file)) || fs::metadata(file).is_err() {
      return Err(format!("{}: Scripted write failure.", file.display()));
    }

    self
      .written
      .borrow_mut()
      .push((file.to_path_buf(), *date_time));

    Ok(())
  }
}
