use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserbaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, UserbaseError>;
