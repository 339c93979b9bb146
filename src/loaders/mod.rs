//! Readers that fill a fridge or recipe collection from data files.
//!
//! Loading is all-or-nothing: when any record fails, nothing is added.

mod fridge_csv;
mod recipe_json;

pub use self::fridge_csv::{fill_fridge_from_csv_file, fill_fridge_from_reader};
pub use self::recipe_json::{
    fill_recipe_collection_from_json_file, fill_recipe_collection_from_json_str,
};

use std::fs::File;
use std::path::Path;

use crate::error::FinderError;

fn open_input(path: &Path) -> Result<File, FinderError> {
    File::open(path).map_err(|source| FinderError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}
