//! Image analysis inputs and results.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prompt used when the user leaves the prompt box empty.
pub const DEFAULT_VISION_PROMPT: &str = "Describe this image in detail.";

/// Errors building an [`ImageInput`].
#[derive(Debug, Error)]
pub enum VisionInputError {
    /// The file or data URL is not an image.
    #[error("Please upload an image file")]
    NotAnImage { mime_type: String },

    /// A `data:` URL that is not `data:<mime>;base64,<payload>`.
    #[error("Malformed data URL: {0}")]
    MalformedDataUrl(String),

    /// The image file could not be read.
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// An image ready to be sent inline to the model: mime type plus base64 data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInput {
    pub mime_type: String,
    /// Standard base64, without any `data:` prefix.
    pub data: String,
}

impl ImageInput {
    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Result<Self, VisionInputError> {
        let mime_type = mime_type.into();
        ensure_image(&mime_type)?;
        Ok(Self {
            mime_type,
            data: STANDARD.encode(bytes),
        })
    }

    /// Parse a `data:image/png;base64,....` URL, keeping only the payload.
    pub fn from_data_url(url: &str) -> Result<Self, VisionInputError> {
        let malformed = || VisionInputError::MalformedDataUrl(truncate(url));

        let rest = url.strip_prefix("data:").ok_or_else(malformed)?;
        let (header, payload) = rest.split_once(',').ok_or_else(malformed)?;
        let mime_type = header.strip_suffix(";base64").ok_or_else(malformed)?;

        ensure_image(mime_type)?;
        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }

    /// Read an image file, inferring the mime type from its extension.
    pub async fn load(path: &Path) -> Result<Self, VisionInputError> {
        let mime_type = mime_for_path(path).ok_or_else(|| VisionInputError::NotAnImage {
            mime_type: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_string(),
        })?;

        let bytes = tokio::fs::read(path).await?;
        tracing::debug!(path = %path.display(), mime_type, bytes = bytes.len(), "Loaded image");
        Self::from_bytes(mime_type, &bytes)
    }

    /// Size of the decoded image in bytes (approximate for padded input).
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        self.data.len() / 4 * 3
    }
}

/// A link the model cited while describing an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub title: String,
    pub uri: String,
}

/// Result of analyzing an image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionResult {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_links: Vec<RelatedLink>,
}

/// The prompt actually sent: the user's, or [`DEFAULT_VISION_PROMPT`] when blank.
#[must_use]
pub fn effective_prompt(prompt: &str) -> &str {
    if prompt.trim().is_empty() {
        DEFAULT_VISION_PROMPT
    } else {
        prompt
    }
}

fn ensure_image(mime_type: &str) -> Result<(), VisionInputError> {
    if mime_type.starts_with("image/") {
        Ok(())
    } else {
        Err(VisionInputError::NotAnImage {
            mime_type: mime_type.to_string(),
        })
    }
}

fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime)
}

fn truncate(s: &str) -> String {
    s.chars().take(32).collect()
}
