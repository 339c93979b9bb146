use crate::error::ValidationError;
use crate::model::Ingredient;

/// A named dish and the ingredients it needs, in the order given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create a recipe, appending `ingredients` in order.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyRecipeName` if `name` is empty.
    pub fn new<I>(name: impl Into<String>, ingredients: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<Ingredient>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyRecipeName);
        }

        let mut recipe = Recipe {
            name,
            ingredients: Vec::new(),
        };
        for ingredient in ingredients {
            recipe.add_ingredient(ingredient);
        }
        Ok(recipe)
    }

    pub fn add_ingredient(&mut self, ingredient: impl Into<Ingredient>) {
        self.ingredients.push(ingredient.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// A recipe without ingredients can never be chosen
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Recipes in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Iterate in insertion order. Each call starts from the first recipe.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

impl IntoIterator for RecipeCollection {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.into_iter()
    }
}

impl FromIterator<Recipe> for RecipeCollection {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        RecipeCollection {
            recipes: iter.into_iter().collect(),
        }
    }
}
