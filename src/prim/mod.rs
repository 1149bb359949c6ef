// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Primitive types for a run: the date inferred from a file name, the options
//! controlling where files go, and the resulting counts.

mod file_name_date;
mod run_config;
mod stats;

pub use file_name_date::*;
pub use run_config::*;
pub use stats::*;
