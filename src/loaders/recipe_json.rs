use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use super::open_input;
use crate::error::{FinderError, ValidationError};
use crate::model::{AmountValue, Ingredient, Recipe, RecipeCollection};

#[derive(Debug, Deserialize)]
struct RecipeEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<IngredientEntry>>,
}

#[derive(Debug, Deserialize)]
struct IngredientEntry {
    #[serde(default)]
    item: Option<String>,
    #[serde(default)]
    amount: Option<AmountValue>,
    #[serde(default)]
    unit: Option<String>,
}

impl TryFrom<IngredientEntry> for Ingredient {
    type Error = ValidationError;

    fn try_from(entry: IngredientEntry) -> Result<Self, Self::Error> {
        Ingredient::new(
            entry.item.unwrap_or_default(),
            entry.amount.unwrap_or(AmountValue::Other(Value::Null)),
            entry.unit.as_deref().unwrap_or_default(),
        )
    }
}

/// Fill `collection` from a JSON file. See [`fill_recipe_collection_from_json_str`].
pub fn fill_recipe_collection_from_json_file(
    collection: &mut RecipeCollection,
    path: impl AsRef<Path>,
) -> Result<usize, FinderError> {
    let path = path.as_ref();
    let mut file = open_input(path)?;
    debug!("Reading recipes from {}", path.display());

    let mut json = String::new();
    file.read_to_string(&mut json)
        .map_err(|e| FinderError::JsonImport(e.to_string()))?;

    fill_recipe_collection_from_json_str(collection, &json)
}

/// Fill `collection` from a JSON array of
/// `{"name": ..., "ingredients": [{"item": ..., "amount": ..., "unit": ...}]}`.
///
/// Entries with a missing or empty ingredient list are skipped. Returns the
/// number of recipes added.
pub fn fill_recipe_collection_from_json_str(
    collection: &mut RecipeCollection,
    json: &str,
) -> Result<usize, FinderError> {
    let entries: Vec<RecipeEntry> =
        serde_json::from_str(json).map_err(|e| FinderError::JsonImport(e.to_string()))?;

    let recipes = entries
        .into_iter()
        .filter_map(|entry| match entry.ingredients {
            Some(ingredients) if !ingredients.is_empty() => Some((entry.name, ingredients)),
            _ => {
                debug!(
                    "Skipping recipe '{}' without ingredients",
                    entry.name.as_deref().unwrap_or_default()
                );
                None
            }
        })
        .map(|(name, ingredients)| build_recipe(name.unwrap_or_default(), ingredients))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FinderError::JsonImport(e.to_string()))?;

    let count = recipes.len();
    for recipe in recipes {
        collection.add_recipe(recipe);
    }

    info!("Loaded {} recipe(s)", count);
    Ok(count)
}

fn build_recipe(name: String, entries: Vec<IngredientEntry>) -> Result<Recipe, ValidationError> {
    let mut recipe = Recipe::new(name, Vec::<Ingredient>::new())?;
    for entry in entries {
        recipe.add_ingredient(Ingredient::try_from(entry)?);
    }
    Ok(recipe)
}
