use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::model::UnitOfMeasure;

/// Textual layout of use-by dates in fridge data
pub const USE_BY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Read access shared by recipe ingredients and fridge stock
pub trait IngredientInfo {
    fn name(&self) -> &str;
    fn amount(&self) -> i64;
    fn unit(&self) -> UnitOfMeasure;
}

/// An amount as supplied by a caller or a data file, before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Integer(i64),
    // only whole values such as 2.0 are accepted
    Float(f64),
    Text(String),
    // booleans, null, nested values: always rejected
    Other(serde_json::Value),
}

impl AmountValue {
    fn to_integer(&self) -> Option<i64> {
        match self {
            AmountValue::Integer(value) => Some(*value),
            AmountValue::Float(value) => whole_float(*value),
            AmountValue::Text(text) => parse_integer_text(text),
            AmountValue::Other(_) => None,
        }
    }
}

impl From<i64> for AmountValue {
    fn from(value: i64) -> Self {
        AmountValue::Integer(value)
    }
}

impl From<i32> for AmountValue {
    fn from(value: i32) -> Self {
        AmountValue::Integer(value.into())
    }
}

impl From<&str> for AmountValue {
    fn from(value: &str) -> Self {
        AmountValue::Text(value.to_string())
    }
}

impl From<String> for AmountValue {
    fn from(value: String) -> Self {
        AmountValue::Text(value)
    }
}

fn whole_float(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Accepts an optional sign and decimal digits, ignoring surrounding
/// whitespace. Leading zeros are only allowed for a lone `0`.
fn parse_integer_text(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    trimmed.parse().ok()
}

/// A named amount of something, as required by a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    name: String,
    amount: i64,
    unit: UnitOfMeasure,
}

impl Ingredient {
    /// Validates the name, amount and unit, in that order.
    ///
    /// # Errors
    /// Returns the `ValidationError` for the first field that is invalid.
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<AmountValue>,
        unit: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyItemName);
        }

        let amount = amount
            .into()
            .to_integer()
            .ok_or(ValidationError::AmountNotInteger)?;
        let unit = unit.parse::<UnitOfMeasure>()?;

        Ok(Ingredient { name, amount, unit })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }
}

impl IngredientInfo for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn amount(&self) -> i64 {
        self.amount
    }

    fn unit(&self) -> UnitOfMeasure {
        self.unit
    }
}

/// Stock held in the fridge: an ingredient plus the day it must be used by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FridgeIngredient {
    ingredient: Ingredient,
    use_by: NaiveDate,
}

impl FridgeIngredient {
    /// Builds the ingredient, then parses `use_by` as `DD/MM/YYYY`.
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<AmountValue>,
        unit: &str,
        use_by: &str,
    ) -> Result<Self, ValidationError> {
        let ingredient = Ingredient::new(name, amount, unit)?;
        let use_by = parse_use_by_date(use_by)?;

        Ok(FridgeIngredient { ingredient, use_by })
    }

    pub fn ingredient(&self) -> &Ingredient {
        &self.ingredient
    }

    pub fn use_by_date(&self) -> NaiveDate {
        self.use_by
    }

    /// True once `today` is past the use-by day. Food is still good on
    /// the use-by day itself.
    pub fn has_expired_on(&self, today: NaiveDate) -> bool {
        self.use_by < today
    }

    /// Checks against the local date at the moment of the call.
    pub fn has_expired(&self) -> bool {
        self.has_expired_on(SystemClock.today())
    }
}

impl IngredientInfo for FridgeIngredient {
    fn name(&self) -> &str {
        self.ingredient.name()
    }

    fn amount(&self) -> i64 {
        self.ingredient.amount()
    }

    fn unit(&self) -> UnitOfMeasure {
        self.ingredient.unit()
    }
}

impl From<FridgeIngredient> for Ingredient {
    fn from(item: FridgeIngredient) -> Self {
        item.ingredient
    }
}

/// Day and month of one or two digits, year of exactly four, no sign
fn use_by_date_regex() -> Option<&'static Regex> {
    static USE_BY_DATE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    USE_BY_DATE_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").ok())
        .as_ref()
}

/// Parse a `DD/MM/YYYY` date. Impossible dates such as 31/02 are rejected.
pub fn parse_use_by_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let well_formed = use_by_date_regex().is_some_and(|re| re.is_match(text));
    if !well_formed {
        return Err(ValidationError::UnsupportedDateFormat);
    }

    NaiveDate::parse_from_str(text, USE_BY_DATE_FORMAT)
        .map_err(|_| ValidationError::UnsupportedDateFormat)
}
