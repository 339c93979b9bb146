use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::model::{FridgeIngredient, IngredientInfo, Recipe, RecipeCollection};

/// Fridge contents keyed by ingredient name
#[derive(Debug)]
pub struct Fridge {
    items: HashMap<String, FridgeIngredient>,
    clock: Box<dyn Clock>,
}

impl Default for Fridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Fridge {
    /// Create an empty fridge that checks expiry against the local date
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create an empty fridge that asks `clock` for today's date
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Fridge {
            items: HashMap::new(),
            clock,
        }
    }

    /// Store an item. An existing item with the same name is replaced, not topped up.
    pub fn add_item(&mut self, item: FridgeIngredient) {
        let name = item.name().to_string();
        if let Some(previous) = self.items.insert(name, item) {
            debug!("Replaced '{}' already in the fridge", previous.name());
        }
    }

    pub fn get(&self, name: &str) -> Option<&FridgeIngredient> {
        self.items.get(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the fridge holds enough of `ingredient`, in the same unit, and
    /// it has not expired. Units are never converted.
    pub fn has_unexpired_item<I>(&self, ingredient: &I) -> bool
    where
        I: IngredientInfo + ?Sized,
    {
        let Some(item) = self.items.get(ingredient.name()) else {
            return false;
        };

        item.amount() >= ingredient.amount()
            && item.unit() == ingredient.unit()
            && !item.has_expired_on(self.clock.today())
    }

    /// Pick the recipe that can be cooked with what is in the fridge.
    ///
    /// Every ingredient of a recipe must be available and unexpired. When
    /// several recipes qualify, the one whose soonest use-by date is earliest
    /// wins; on equal dates the recipe found first is kept.
    pub fn find_recipe<'a>(&self, recipes: &'a RecipeCollection) -> Option<&'a Recipe> {
        if recipes.is_empty() {
            debug!("No recipes to choose from");
            return None;
        }

        let mut best: Option<(&Recipe, NaiveDate)> = None;

        for recipe in recipes {
            if recipe.is_empty() {
                debug!("Skipping '{}': it has no ingredients", recipe.name());
                continue;
            }

            let Some(closest) = self.closest_use_by(recipe) else {
                continue;
            };

            match best {
                Some((_, best_use_by)) if closest >= best_use_by => {}
                _ => {
                    debug!("'{}' is the best match so far (use by {})", recipe.name(), closest);
                    best = Some((recipe, closest));
                }
            }
        }

        match best {
            Some((recipe, use_by)) => {
                info!("Selected '{}' (use by {})", recipe.name(), use_by);
                Some(recipe)
            }
            None => {
                info!("No recipe can be made from the fridge contents");
                None
            }
        }
    }

    /// Earliest use-by date among the items a recipe needs, or `None` as
    /// soon as one of them is missing, short, in another unit or expired.
    fn closest_use_by(&self, recipe: &Recipe) -> Option<NaiveDate> {
        let mut closest: Option<NaiveDate> = None;

        for ingredient in recipe.ingredients() {
            if !self.has_unexpired_item(ingredient) {
                debug!(
                    "Skipping '{}': not enough fresh {}",
                    recipe.name(),
                    ingredient.name()
                );
                return None;
            }

            let use_by = self.items.get(ingredient.name())?.use_by_date();
            closest = Some(closest.map_or(use_by, |current| current.min(use_by)));
        }

        closest
    }
}
