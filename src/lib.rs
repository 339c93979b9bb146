pub mod clock;
pub mod config;
pub mod error;
pub mod fridge;
pub mod loaders;
pub mod model;

use std::path::Path;

use log::debug;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::FinderConfig;
pub use crate::error::{FinderError, ValidationError};
pub use crate::fridge::Fridge;
pub use crate::model::{
    FridgeIngredient, Ingredient, IngredientInfo, Recipe, RecipeCollection, UnitOfMeasure,
};

/// Load recipes from a JSON file and fridge contents from a CSV file, then
/// return the name of the recipe to cook, if any.
///
/// # Errors
/// Returns `FinderError` when either file cannot be read or holds invalid data.
pub fn find_recipe_in_files(
    recipes_path: impl AsRef<Path>,
    fridge_path: impl AsRef<Path>,
    clock: Box<dyn Clock>,
) -> Result<Option<String>, FinderError> {
    let mut recipes = RecipeCollection::new();
    loaders::fill_recipe_collection_from_json_file(&mut recipes, recipes_path)?;

    let mut fridge = Fridge::with_clock(clock);
    loaders::fill_fridge_from_csv_file(&mut fridge, fridge_path)?;

    debug!(
        "Matching {} recipe(s) against {} fridge item(s)",
        recipes.len(),
        fridge.len()
    );
    Ok(fridge.find_recipe(&recipes).map(|recipe| recipe.name().to_string()))
}
