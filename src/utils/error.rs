use thiserror::Error;

/// 설정 누락 시 클라이언트에 그대로 전달되는 메시지
pub const MISSING_CONFIG_MESSAGE: &str = "API 키 또는 데이터베이스 ID가 설정되지 않았습니다";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid request body: {message}")]
    BodyError { message: String },

    #[error("{0}")]
    TransportError(#[from] reqwest::Error),

    #[error("노션 API 오류: {message}")]
    NotionApiError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RelayError {
    pub fn missing_config() -> Self {
        RelayError::ConfigError {
            message: MISSING_CONFIG_MESSAGE.to_string(),
        }
    }

    /// Short label used in log fields.
    pub fn category(&self) -> &'static str {
        match self {
            RelayError::ConfigError { .. } | RelayError::InvalidConfigValueError { .. } => {
                "configuration"
            }
            RelayError::ParseError(_) | RelayError::BodyError { .. } => "parse",
            RelayError::TransportError(_) => "transport",
            RelayError::NotionApiError { .. } => "remote_api",
            RelayError::IoError(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notion_error_message_is_prefixed() {
        let err = RelayError::NotionApiError {
            status: 400,
            message: "invalid database_id".to_string(),
        };
        assert_eq!(err.to_string(), "노션 API 오류: invalid database_id");
        assert_eq!(err.category(), "remote_api");
    }

    #[test]
    fn test_missing_config_message() {
        let err = RelayError::missing_config();
        assert_eq!(err.to_string(), MISSING_CONFIG_MESSAGE);
        assert_eq!(err.category(), "configuration");
    }
}
