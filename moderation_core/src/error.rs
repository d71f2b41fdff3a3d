use thiserror::Error;

/// Message shown when the service gives no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please enter a token")]
    MissingToken,
    #[error("Please select an image")]
    MissingFile,
    #[error("File type not allowed: {0}. Allowed types: image/jpeg, image/png, image/gif")]
    UnsupportedMediaType(String),
    #[error("File size of {0} bytes exceeds maximum allowed size of 5MB")]
    FileTooLarge(u64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Server responded with status {status}: {}", .detail.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Server { status: u16, detail: Option<String> },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// The text a user sees for this error.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Server { detail: None, .. } | ClientError::Http(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ClientError::MissingToken.display_message(),
            "Please enter a token"
        );
        assert_eq!(
            ClientError::MissingFile.display_message(),
            "Please select an image"
        );
    }

    #[test]
    fn test_server_detail_or_fallback() {
        let with_detail = ClientError::Server {
            status: 401,
            detail: Some("invalid token".to_string()),
        };
        assert_eq!(with_detail.display_message(), "invalid token");

        let without_detail = ClientError::Server {
            status: 500,
            detail: None,
        };
        assert_eq!(without_detail.display_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            without_detail.to_string(),
            "Server responded with status 500: An error occurred"
        );
    }
}
