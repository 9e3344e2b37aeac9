use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const JSON: &str = "application/json";
pub const FORM: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
}

impl Comment {
    /// Decodes a request body. A missing content type is treated as JSON.
    pub fn decode(content_type: Option<&str>, body: &[u8]) -> Result<Self, DecodeError> {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "" | JSON => Ok(serde_json::from_slice(body)?),
            FORM => url::form_urlencoded::parse(body)
                .find(|(name, _)| name == "text")
                .map(|(_, value)| Comment {
                    text: value.into_owned(),
                })
                .ok_or(DecodeError::MissingField("text")),
            _ => Err(DecodeError::UnsupportedContentType(mime)),
        }
    }

    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
