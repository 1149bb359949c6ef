// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Counters summarizing a run.

use std::fmt;

use serde::Serialize;

/// How processing of a single file ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
  /// Dates written to a file that had none.
  Changed,
  /// Dates written over a file's existing dates.
  Replaced,
  /// No usable date in the file name.
  SkippedNoDate,
  /// File already has dates, and replacing them is disabled.
  SkippedExistingMetadata,
  /// Reading, placing or writing the file failed.
  Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
  pub total_files: usize,
  pub files_changed: usize,
  pub files_metadata_replaced: usize,
  pub files_skipped_no_date: usize,
  pub files_skipped_existing_metadata: usize,
  pub files_error: usize,
}

impl RunStatistics {
  /// Counts one more file as ending in `outcome`.
  pub fn record(&mut self, outcome: Outcome) {
    self.total_files += 1;

    let counter = match outcome {
      Outcome::Changed => &mut self.files_changed,
      Outcome::Replaced => &mut self.files_metadata_replaced,
      Outcome::SkippedNoDate => &mut self.files_skipped_no_date,
      Outcome::SkippedExistingMetadata => &mut self.files_skipped_existing_metadata,
      Outcome::Error => &mut self.files_error,
    };
    *counter += 1;
  }

  /// Sum of all per-outcome counters. Always equals `total_files`.
  pub fn outcomes(&self) -> usize {
    self.files_changed
      + self.files_metadata_replaced
      + self.files_skipped_no_date
      + self.files_skipped_existing_metadata
      + self.files_error
  }
}

impl fmt::Display for RunStatistics {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Total files processed: {}", self.total_files)?;
    writeln!(f, "Files with metadata changed: {}", self.files_changed)?;
    writeln!(f, "Files with metadata replaced: {}", self.files_metadata_replaced)?;
    writeln!(f, "Files skipped (no date found): {}", self.files_skipped_no_date)?;
    writeln!(
      f,
      "Files skipped (existing metadata): {}",
      self.files_skipped_existing_metadata
    )?;
    write!(f, "Files with errors: {}", self.files_error)
  }
}
