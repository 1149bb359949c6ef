// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Per-run processing options.

use std::path::{Path, PathBuf};

/// Where a file ends up before its dates are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementMode {
  /// Write to the original file.
  InPlace,
  /// Duplicate into the destination directory, keeping the original.
  Copy,
  /// Relocate into the destination directory.
  Move,
}

#[derive(Clone, Debug)]
pub struct RunConfig {
  /// Ignored for `PlacementMode::InPlace`.
  pub dir_dst: PathBuf,
  pub placement: PlacementMode,
  /// Overwrite dates on files that already have them, instead of skipping.
  pub replace_existing: bool,
}

impl RunConfig {
  /// `in_place` takes priority over `move_files`.
  pub fn new(
    dir_dst: impl Into<PathBuf>,
    move_files: bool,
    in_place: bool,
    replace_existing: bool,
  ) -> Self {
    let placement = if in_place {
      PlacementMode::InPlace
    } else if move_files {
      PlacementMode::Move
    } else {
      PlacementMode::Copy
    };

    Self {
      dir_dst: dir_dst.into(),
      placement,
      replace_existing,
    }
  }

  /// Path the file at `file_src` will have its dates written to.
  pub fn output_path(&self, file_src: impl AsRef<Path>) -> Result<PathBuf, String> {
    let file_src = file_src.as_ref();

    if self.placement == PlacementMode::InPlace {
      return Ok(file_src.to_path_buf());
    }

    file_src
      .file_name()
      .map(|name| self.dir_dst.join(name))
      .ok_or(format!("{}: Path has no file name.", file_src.display()))
  }
}
