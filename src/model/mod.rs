mod ingredient;
mod recipe;
mod units;

pub use self::ingredient::{
    parse_use_by_date, AmountValue, FridgeIngredient, Ingredient, IngredientInfo,
    USE_BY_DATE_FORMAT,
};
pub use self::recipe::{Recipe, RecipeCollection};
pub use self::units::UnitOfMeasure;
