use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing ingredients and recipes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Ingredient name was empty
    #[error("Item name cannot be empty.")]
    EmptyItemName,

    /// Ingredient amount is not a whole number
    #[error("Item amount must be an integer value.")]
    AmountNotInteger,

    /// Unit name is not one of the known units of measure
    #[error("Units of measure {0} is not supported.")]
    UnsupportedUnit(String),

    /// Use-by date is not in DD/MM/YYYY form
    #[error("Use by date format is not supported.")]
    UnsupportedDateFormat,

    /// Recipe name was empty
    #[error("Recipe name cannot be empty.")]
    EmptyRecipeName,
}

/// Errors that can occur while loading input data and finding a recipe
#[derive(Error, Debug)]
pub enum FinderError {
    /// Input file is missing or unreadable
    #[error(
        "Cannot open {}. The file does not exist or you do not have permissions to access it.",
        .path.display()
    )]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fridge CSV record could not be turned into an ingredient
    #[error("CSV file import error on line {line}: {message}")]
    CsvImport { line: u64, message: String },

    /// Recipe JSON was malformed or held an invalid recipe
    #[error("JSON file import error: {0}")]
    JsonImport(String),

    /// Invalid value passed directly to the model
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
