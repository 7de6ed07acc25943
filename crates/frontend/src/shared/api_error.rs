use gloo_net::http::Response;
use thiserror::Error;

/// Errors surfaced by the REST API layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never reached the server or the connection dropped
    #[error("Tidak dapat menghubungi server: {0}")]
    Transport(String),

    /// Server refused the mutation because rows are still referenced
    #[error("{0}")]
    Conflict(String),

    /// Any other non-success HTTP status
    #[error("Permintaan gagal ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Respons server tidak dapat dibaca: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

/// Fallback text for 409 responses without a body
const CONFLICT_MESSAGE: &str = "Data tidak dapat dihapus karena masih dipakai dokumen lain";

/// Pull the human message out of a JSON error body, if there is one
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}

/// Map a non-success response to the matching error
pub async fn read_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = body_message(&body).unwrap_or_else(|| body.trim().to_string());
    if status == 409 {
        let message = if message.is_empty() {
            CONFLICT_MESSAGE.to_string()
        } else {
            message
        };
        return ApiError::Conflict(message);
    }
    let message = if message.is_empty() {
        response.status_text()
    } else {
        message
    };
    ApiError::Status { status, message }
}

/// Pass a success response through, map everything else to an error
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(read_error(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display() {
        let err = ApiError::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "Tidak dapat menghubungi server: connection refused"
        );
    }

    #[test]
    fn test_status_display_carries_code() {
        let err = ApiError::Status {
            status: 500,
            message: "internal".into(),
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_conflict_detection() {
        assert!(ApiError::Conflict("dipakai".into()).is_conflict());
        assert!(!ApiError::transport("x").is_conflict());
    }

    #[test]
    fn test_body_message_reads_json_error_field() {
        assert_eq!(
            body_message(r#"{"error":"Kode sudah dipakai"}"#),
            Some("Kode sudah dipakai".to_string())
        );
        assert_eq!(
            body_message(r#"{"message":"Tidak ditemukan"}"#),
            Some("Tidak ditemukan".to_string())
        );
    }

    #[test]
    fn test_body_message_ignores_plain_text() {
        assert_eq!(body_message("Internal Server Error"), None);
        assert_eq!(body_message(""), None);
        assert_eq!(body_message(r#"{"detail":42}"#), None);
    }
}
