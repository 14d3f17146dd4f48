use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Invalid protection level {value:?} on permission {permission}: {reason}")]
    InvalidProtectionLevel {
        permission: String,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to start extraction workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid config: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Invalid skip pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse file: {path} - {message}")]
    ParseError { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_not_found() {
        let err = AuditError::FileNotFound("/path/to/all_comp.json".to_string());
        assert_eq!(err.to_string(), "File not found: /path/to/all_comp.json");
    }

    #[test]
    fn test_error_display_read_error() {
        let err = AuditError::ReadError {
            path: "/path/to/file".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read file: /path/to/file");
    }

    #[test]
    fn test_error_display_not_a_directory() {
        let err = AuditError::NotADirectory("/path/to/file".to_string());
        assert_eq!(err.to_string(), "Path is not a directory: /path/to/file");
    }

    #[test]
    fn test_error_display_invalid_protection_level() {
        let err = AuditError::InvalidProtectionLevel {
            permission: "com.example.PERM".to_string(),
            value: "signature".to_string(),
            reason: "not a hex number",
        };
        assert_eq!(
            err.to_string(),
            "Invalid protection level \"signature\" on permission com.example.PERM: not a hex number"
        );
    }

    #[test]
    fn test_error_display_parse_error() {
        let err = AuditError::ParseError {
            path: "/path/to/file".to_string(),
            message: "invalid JSON".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse file: /path/to/file - invalid JSON"
        );
    }
}
