//! Gallery Errors

use thiserror::Error;

use crate::models::GalleryKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Non-success response (`status` set) or transport failure
    #[error("request to {url} failed{}: {message}", status_suffix(.status))]
    Network {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// Body is not JSON, has the wrong shape, or breaks a data invariant
    #[error("malformed gallery data: {0}")]
    Parse(String),

    /// A single image failed; handled locally with the fallback asset
    #[error("image {src} failed to load")]
    ImageLoad { src: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" with status {}", s)).unwrap_or_default()
}

impl GalleryError {
    pub fn http(url: &str, status: u16, status_text: &str) -> Self {
        GalleryError::Network {
            url: url.to_string(),
            status: Some(status),
            message: status_text.to_string(),
        }
    }

    pub fn transport(url: &str, message: impl Into<String>) -> Self {
        GalleryError::Network {
            url: url.to_string(),
            status: None,
            message: message.into(),
        }
    }

    /// Text shown in place of the grid
    pub fn user_message(&self, kind: GalleryKind) -> String {
        format!("Unable to load {}. Please try again later.", kind.noun())
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(e: serde_json::Error) -> Self {
        GalleryError::Parse(e.to_string())
    }
}
