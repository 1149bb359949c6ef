// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Functions for manipulating files and their metadata.

use std::{
  ffi::{OsStr, OsString},
  fs,
  io::ErrorKind,
  path::{Path, PathBuf},
  process::Command,
};

use chrono::NaiveDateTime;
use filetime::FileTime;

/// Value written to both date tags. Only the date is kept; the time is always
/// midnight, even when the file name carried one.
const DATE_WRITE_FORMAT: &str = "%Y:%m:%d 00:00:00";

/// Tags checked for, and written with, the inferred date.
const DATE_TAGS: [&str; 2] = ["CreateDate", "DateTimeOriginal"];

/// Minimum supported version of `ExifTool`.
const EXIFTOOL_MIN_VERSION: (u32, u32) = (10, 0);

/// Reads and writes the capture date tags of a file.
pub trait MetadataTool {
  /// Returns whether `file` already has any capture date tag.
  fn has_dates(&self, file: &Path) -> Result<bool, String>;

  /// Sets all capture date tags of `file` to the date of `date_time`,
  /// overwriting the file.
  fn write_dates(&self, file: &Path, date_time: &NaiveDateTime) -> Result<(), String>;
}

/// `MetadataTool` backed by the `ExifTool` executable.
#[derive(Clone, Debug)]
pub struct ExifTool {
  program: PathBuf,
}

impl Default for ExifTool {
  /// Uses `exiftool` from `PATH`.
  fn default() -> Self {
    Self::new("exiftool")
  }
}

impl ExifTool {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }

  /// Check that `ExifTool` is present and new enough.
  pub fn check(&self) -> Result<(), String> {
    version_check(
      &run_exiftool(&self.program, ["-ver"])?,
      EXIFTOOL_MIN_VERSION,
    )
  }
}

impl MetadataTool for ExifTool {
  fn has_dates(&self, file: &Path) -> Result<bool, String> {
    let stdout = run_exiftool(&self.program, make_read_args(file))?;

    Ok(!String::from_utf8_lossy(&stdout).trim().is_empty())
  }

  fn write_dates(&self, file: &Path, date_time: &NaiveDateTime) -> Result<(), String> {
    run_exiftool(&self.program, make_write_args(file, date_time)).map(|_| ())
  }
}

/// Copies `file_src` to `file_dst`, keeping permissions as well as access and
/// modification times. Refuses to copy a file onto itself.
pub fn copy_file(file_src: impl AsRef<Path>, file_dst: impl AsRef<Path>) -> Result<(), String> {
  let file_src = file_src.as_ref();
  let file_dst = file_dst.as_ref();

  if is_same_file(file_src, file_dst) {
    return Err(format!(
      "{}: Source and destination are the same file.",
      file_src.display()
    ));
  }

  let metadata = fs::metadata(file_src)
    .map_err(|e| format!("{}: Could not read file attributes ({e}).", file_src.display()))?;

  fs::copy(file_src, file_dst).map_err(|e| {
    format!(
      "{}: Could not copy to {} ({e}).",
      file_src.display(),
      file_dst.display()
    )
  })?;

  filetime::set_file_times(
    file_dst,
    FileTime::from_last_access_time(&metadata),
    FileTime::from_last_modification_time(&metadata),
  )
  .map_err(|e| format!("{}: Could not set file times ({e}).", file_dst.display()))
}

/// Whether both paths exist and resolve to the same file.
fn is_same_file(file_a: &Path, file_b: &Path) -> bool {
  match (file_a.canonicalize(), file_b.canonicalize()) {
    (Ok(a), Ok(b)) => a == b,
    _ => false,
  }
}

/// Lists the entries directly within `dir`, sorted by name. The listing is
/// complete before returning, so files later added to `dir` are not included.
pub fn list_dir(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, String> {
  let dir = dir.as_ref();

  let mut paths = fs::read_dir(dir)
    .map_err(|e| format!("{}: Could not read directory ({e}).", dir.display()))?
    .map(|entry| entry.map(|e| e.path()))
    .collect::<Result<Vec<_>, _>>()
    .map_err(|e| format!("{}: Could not read directory entry ({e}).", dir.display()))?;

  paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

  Ok(paths)
}

/// Moves `file_src` to `file_dst`. Falls back to copying and removing when the
/// two are on different file systems.
pub fn move_file(file_src: impl AsRef<Path>, file_dst: impl AsRef<Path>) -> Result<(), String> {
  let file_src = file_src.as_ref();
  let file_dst = file_dst.as_ref();

  match fs::rename(file_src, file_dst) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == ErrorKind::CrossesDevices => {
      log::debug!(
        "{}: Rename crosses file systems. Copying instead.",
        file_src.display()
      );
      copy_file(file_src, file_dst)?;
      fs::remove_file(file_src)
        .map_err(|e| format!("{}: Could not remove after copy ({e}).", file_src.display()))
    }
    Err(e) => Err(format!(
      "{}: Could not move to {} ({e}).",
      file_src.display(),
      file_dst.display()
    )),
  }
}

/// Runs `ExifTool` at `program` with `args`, returning stdout.
pub fn run_exiftool<I: IntoIterator<Item = S>, S: AsRef<OsStr>>(
  program: impl AsRef<Path>,
  args: I,
) -> Result<Vec<u8>, String> {
  let mut cmd = Command::new(program.as_ref());
  cmd.args(args);

  let output = cmd.output().map_err(|e| {
    format!(
      "ExifTool failed to run.\nArgs:\n{}\nError:\n{e}",
      join_args(&cmd),
    )
  })?;

  log::trace!(
    "ExifTool output:\n{}",
    String::from_utf8_lossy(&output.stdout)
  );

  if !output.status.success() {
    return Err(format!(
      "ExifTool did not run successfully.\nArgs:\n{}\nstderr:\n{}",
      join_args(&cmd),
      String::from_utf8_lossy(&output.stderr)
    ));
  }

  Ok(output.stdout)
}

fn join_args(cmd: &Command) -> String {
  cmd
    .get_args()
    .map(OsStr::to_string_lossy)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Arguments printing the date tags of `file` as bare values (`-s -s -s`), so
/// any output at all means a date is present.
fn make_read_args(file: &Path) -> Vec<OsString> {
  let mut args = DATE_TAGS
    .map(|tag| OsString::from(format!("-{tag}")))
    .to_vec();
  args.extend(["-s", "-s", "-s"].map(OsString::from));
  args.push(file.as_os_str().to_os_string());

  args
}

/// Arguments setting every date tag of `file` to the date of `date_time`.
fn make_write_args(file: &Path, date_time: &NaiveDateTime) -> Vec<OsString> {
  let value = date_time.format(DATE_WRITE_FORMAT);

  let mut args = vec![OsString::from("-overwrite_original")];
  args.extend(DATE_TAGS.map(|tag| OsString::from(format!("-{tag}={value}"))));
  args.push(file.as_os_str().to_os_string());

  args
}

/// Returns whether `version` is as new or newer than `version_required_min`,
/// where `version` is from `ExifTool`'s stdout.
fn version_check(version: &[u8], version_required_min: (u32, u32)) -> Result<(), String> {
  let version = String::from_utf8_lossy(version);
  let Some((major, minor)) = version.trim().split_once('.') else {
    return Err(format!("Unexpected ExifTool version string: \"{version}\""));
  };

  let major = major.parse::<u32>();
  let minor = minor.parse::<u32>();
  let (Ok(major), Ok(minor)) = (major, minor) else {
    return Err(format!("Unexpected ExifTool version: {version}"));
  };

  if major > version_required_min.0
    || (major == version_required_min.0 && minor >= version_required_min.1)
  {
    Ok(())
  } else {
    Err(format!(
      "ExifTool version {major}.{minor} is too old (needs {}.{} or newer).",
      version_required_min.0, version_required_min.1
    ))
  }
}
