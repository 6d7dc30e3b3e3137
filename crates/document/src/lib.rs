mod encode;
mod types;

pub use encode::OutputFormat;
pub use types::{FontStyle, Scope, ThemeDocument, ThemeKind, TokenRule, TokenSettings, UiColors};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Duplicate color key: {0}")]
    DuplicateKey(String),

    #[error("Unknown font style: {0}")]
    UnknownFontStyle(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Property list encoding failed: {0}")]
    Plist(#[from] plist::Error),

    #[error("Property list is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
