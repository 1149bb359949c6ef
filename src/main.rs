// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Assigns capture dates to photos based on their file names, acting as a
//! wrapper around `ExifTool`.

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};

mod io;
mod prim;
mod processor;
mod setup;
#[cfg(test)]
mod testing;

#[derive(Parser)]
#[command(version, about)]
struct Args {
  /// Directory of images to process. Subdirectories are not descended into.
  source: PathBuf,

  /// Directory to place processed images in. Default: SOURCE/processed.
  #[arg(short, long)]
  destination: Option<PathBuf>,

  /// Move images into the destination instead of copying.
  #[arg(short, long = "move")]
  move_files: bool,

  /// Write to the original images. Ignores --destination and --move.
  #[arg(short, long)]
  in_place: bool,

  /// Overwrite dates on images that already have them.
  #[arg(short, long)]
  replace: bool,

  /// Path to the ExifTool executable. Default: `exiftool` on PATH.
  #[arg(long)]
  exiftool: Option<PathBuf>,

  /// Print statistics as JSON.
  #[arg(long)]
  json: bool,

  /// Verbosity level. Max: 2.
  #[arg(short, action = ArgAction::Count)]
  verbose: u8,
}

fn main() -> ExitCode {
  let args = Args::parse();
  setup::configure_logging(args.verbose);

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      log::error!("{e}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: Args) -> Result<(), String> {
  let settings = setup::load_settings()?;

  let tool = match args.exiftool.or(settings.exiftool) {
    Some(program) => io::ExifTool::new(program),
    None => io::ExifTool::default(),
  };
  tool.check()?;

  let dir_dst = args
    .destination
    .or(settings.destination)
    .unwrap_or_else(|| args.source.join("processed"));

  let config = prim::RunConfig::new(
    dir_dst,
    args.move_files || settings.move_files,
    args.in_place || settings.in_place,
    args.replace || settings.replace_existing,
  );

  let stats = processor::process_directory(&args.source, &config, &tool)?;

  if args.json {
    println!(
      "{}",
      serde_json::to_string_pretty(&stats)
        .map_err(|e| format!("Failed to serialize statistics ({e})."))?
    );
  } else {
    log::info!("Processing complete.\n{stats}");
  }

  Ok(())
}
