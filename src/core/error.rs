use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigInvalidJson,
    ConfigInvalidValue,

    ValidationInvalidArgument,

    FilesystemError,

    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalidJson => "config.invalid_json",
            ErrorCode::ConfigInvalidValue => "config.invalid_value",

            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::FilesystemError => "filesystem.io_error",

            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesystemErrorDetails {
    pub operation: String,
    pub path: String,
    pub kind: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    /// Wrap an `io::Error` raised while touching `path`.
    ///
    /// `operation` is a short verb phrase ("read", "rename") used in the
    /// message so a failure on stderr names what was attempted.
    pub fn filesystem(
        err: &std::io::Error,
        operation: impl Into<String>,
        path: impl AsRef<std::path::Path>,
    ) -> Self {
        let operation = operation.into();
        let path = path.as_ref().display().to_string();
        let message = format!("Failed to {} {}: {}", operation, path, err);
        let details = serde_json::to_value(FilesystemErrorDetails {
            operation,
            path,
            kind: format!("{:?}", err.kind()),
            error: err.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        let error = Self::new(ErrorCode::FilesystemError, message, details);
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                error.with_hint("Run from the book root or pass --base <dir>")
            }
            _ => error,
        }
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = serde_json::to_value(ConfigInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ConfigInvalidJson,
            "Invalid JSON in configuration",
            details,
        )
    }

    pub fn config_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(ConfigInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ConfigInvalidValue,
            "Invalid configuration value",
            details,
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalJsonErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    /// Whether the underlying failure was a missing path.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::FilesystemError
            && self.details.get("kind").and_then(Value::as_str) == Some("NotFound")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn filesystem_error_carries_path_and_operation() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::filesystem(&io_err, "read", "src/SUMMARY.md");

        assert_eq!(err.code.as_str(), "filesystem.io_error");
        assert_eq!(err.details["operation"], "read");
        assert_eq!(err.details["path"], "src/SUMMARY.md");
        assert_eq!(err.details["kind"], "PermissionDenied");
        assert!(err.message.contains("src/SUMMARY.md"));
        assert!(err.hints.is_empty());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_error_gets_hint() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = Error::filesystem(&io_err, "list", "src");

        assert!(err.is_not_found());
        assert_eq!(err.hints.len(), 1);
        assert!(err.hints[0].message.contains("--base"));
    }

    #[test]
    fn config_invalid_json_records_path() {
        let json_err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err = Error::config_invalid_json("chapterfix.json", json_err);

        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
        assert_eq!(err.details["path"], "chapterfix.json");
    }
}
