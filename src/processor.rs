// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Assigns capture dates to every file in a directory based on its name.
//!
//! Each file goes through the same steps, stopping at the first that settles
//! its `Outcome`:
//! 1. Infer a date from the file name, else skip.
//! 2. Query the *source* file for existing dates, and skip unless replacing.
//! 3. Copy or move into the destination directory (unless in place).
//! 4. Write the dates to the placed file.
//!
//! Failures only end the current file. Nothing is rolled back, so a file that
//! was moved but could not be written stays moved.

use std::{fs, path::Path};

use crate::{
  io::{self, MetadataTool},
  prim::{self, Outcome, PlacementMode, RunConfig, RunStatistics},
};

/// Processes every entry directly within `dir_src`, returning counts of how
/// each ended. Only errors listing `dir_src` or creating the destination
/// directory end the run early.
pub fn process_directory(
  dir_src: impl AsRef<Path>,
  config: &RunConfig,
  tool: &impl MetadataTool,
) -> Result<RunStatistics, String> {
  let dir_src = dir_src.as_ref();
  log::info!("Processing {}.", dir_src.display());

  if config.placement != PlacementMode::InPlace {
    fs::create_dir_all(&config.dir_dst).map_err(|e| {
      format!(
        "{}: Could not create destination directory ({e}).",
        config.dir_dst.display()
      )
    })?;
  }

  let mut stats = RunStatistics::default();

  for file_src in io::list_dir(dir_src)? {
    stats.record(process_file(&file_src, config, tool));
  }
  debug_assert_eq!(stats.outcomes(), stats.total_files);

  Ok(stats)
}

/// Processes a single file, logging a line describing the outcome.
fn process_file(file_src: &Path, config: &RunConfig, tool: &impl MetadataTool) -> Outcome {
  let file_name = file_src
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default();

  let file_dst = match config.output_path(file_src) {
    Ok(file_dst) => file_dst,
    Err(e) => {
      log::error!("{e}");
      return Outcome::Error;
    }
  };

  let Some(date_time) = prim::extract_date_time(&file_name) else {
    log::info!("{file_name}: Couldn't extract date. Skipping.");
    return Outcome::SkippedNoDate;
  };
  log::debug!("{file_name}: Extracted {date_time}.");

  // Must query before placement, while the source is still where it was.
  let had_dates = match tool.has_dates(file_src) {
    Ok(had_dates) => had_dates,
    Err(e) => {
      log::error!("{file_name}: Could not read existing metadata.\n{e}");
      return Outcome::Error;
    }
  };

  if had_dates && !config.replace_existing {
    log::info!("{file_name}: Date metadata already exists. Skipping.");
    return Outcome::SkippedExistingMetadata;
  }

  let placed = match config.placement {
    PlacementMode::InPlace => Ok(()),
    PlacementMode::Copy => io::copy_file(file_src, &file_dst).inspect(|_| {
      log::info!("{file_name}: Copied to {}.", config.dir_dst.display());
    }),
    PlacementMode::Move => io::move_file(file_src, &file_dst).inspect(|_| {
      log::info!("{file_name}: Moved to {}.", config.dir_dst.display());
    }),
  };
  if let Err(e) = placed {
    log::error!("{e}");
    return Outcome::Error;
  }

  if let Err(e) = tool.write_dates(&file_dst, &date_time) {
    log::error!("{file_name}: Could not write metadata.\n{e}");
    return Outcome::Error;
  }

  if had_dates {
    log::info!("{file_name}: Replaced existing metadata.");
    Outcome::Replaced
  } else {
    log::info!("{file_name}: Updated metadata.");
    Outcome::Changed
  }
}
