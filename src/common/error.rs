/// Failures of the key-value store or of encoding a collection for it.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("io error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("failed to encode collection '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed document under key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store lock poisoned")]
    Poisoned,
}

/// User input that cannot be turned into a record.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("fill in all fields: {0} is required")]
    MissingField(&'static str),
    #[error("enter a valid amount: '{0}' is not a number")]
    InvalidAmount(String),
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(String),
    #[error("amount {0} is above the largest accepted amount")]
    AmountTooLarge(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("no record with id '{0}'")]
    NotFound(String),
    #[error("failed to read config file: {0}")]
    ConfigIo(#[source] std::io::Error),
    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
