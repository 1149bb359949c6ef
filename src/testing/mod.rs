// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Test-only utilities.

mod dates;
mod fake_tool;
mod test_dir;

pub use dates::*;
pub use fake_tool::*;
pub use test_dir::*;

pub use crate::{assert_dir, assert_err, test_dir, test_path};

pub fn type_of<T>(_: T) -> &'static str {
  std::any::type_name::<T>()
}
