use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("invalid center count '{0}'")]
    InvalidCount(String),

    #[error("invalid graph mode '{0}'")]
    InvalidGraphMode(String),

    #[error("offset {offset} cannot advance by {count} more centers")]
    OffsetOverflow { offset: u64, count: u64 },

    #[error("backend rejected center request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
