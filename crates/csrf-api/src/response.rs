//! JSON bodies exchanged with clients

use serde::Serialize;

/// Body of every rejection: `{status, message, code}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub code: &'static str,
}

/// Body returned by the issuance endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfTokenResponse {
    pub csrf_token: String,
    /// Raw companion value. The cookie carrying it is HttpOnly, so the client
    /// echoes this field back as `x-csrf-raw`.
    pub cookie: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_field_names() {
        let body = serde_json::to_value(CsrfTokenResponse {
            csrf_token: "token".to_string(),
            cookie: "raw".to_string(),
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "csrfToken": "token", "cookie": "raw" }));
    }
}
