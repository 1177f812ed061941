// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the wallpaper generation backend.
//!
//! One endpoint: `POST {base}/api/wallpaper/generate` with the prompt, the
//! aspect-ratio wire value, and an optional style label. The backend answers
//! with a `success` flag and an image URL, which is then fetched separately
//! as bytes and decoded into an Iced image handle.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Request timeout matching the backend's worst-case generation time.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("WallForge/", env!("CARGO_PKG_VERSION"));

/// Aspect ratio options understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// 9:16, phone portrait, the backend default.
    #[default]
    Portrait,
    /// 16:9, landscape.
    Landscape,
    /// 1:1, square.
    Square,
    /// 3:4, classic portrait.
    Classic,
}

impl AspectRatio {
    /// Options offered in the studio form.
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Portrait,
        AspectRatio::Landscape,
        AspectRatio::Square,
        AspectRatio::Classic,
    ];

    /// The wire value sent to the backend.
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9:16",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Square => "1:1",
            AspectRatio::Classic => "3:4",
        }
    }

    /// Parses a wire value, falling back to the default ratio.
    #[must_use]
    pub fn from_api_value(value: &str) -> Self {
        match value.trim() {
            "16:9" => AspectRatio::Landscape,
            "1:1" => AspectRatio::Square,
            "3:4" => AspectRatio::Classic,
            _ => AspectRatio::Portrait,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_value())
    }
}

/// Style vocabulary understood by the backend.
///
/// `Auto` sends no style at all and lets the backend pick from the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleKind {
    #[default]
    Auto,
    Nature,
    City,
    Abstract,
    Space,
    Dark,
    Minimal,
}

impl StyleKind {
    /// Options offered in the studio form.
    pub const ALL: [StyleKind; 7] = [
        StyleKind::Auto,
        StyleKind::Nature,
        StyleKind::City,
        StyleKind::Abstract,
        StyleKind::Space,
        StyleKind::Dark,
        StyleKind::Minimal,
    ];

    /// The wire value sent to the backend; `None` for `Auto`.
    #[must_use]
    pub fn api_value(self) -> Option<&'static str> {
        match self {
            StyleKind::Auto => None,
            StyleKind::Nature => Some("nature"),
            StyleKind::City => Some("city"),
            StyleKind::Abstract => Some("abstract"),
            StyleKind::Space => Some("space"),
            StyleKind::Dark => Some("dark"),
            StyleKind::Minimal => Some("minimal"),
        }
    }

    /// Parses a style label, falling back to `Auto`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "nature" => StyleKind::Nature,
            "city" => StyleKind::City,
            "abstract" => StyleKind::Abstract,
            "space" => StyleKind::Space,
            "dark" => StyleKind::Dark,
            "minimal" => StyleKind::Minimal,
            _ => StyleKind::Auto,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleKind::Auto => "Auto",
            StyleKind::Nature => "Nature",
            StyleKind::City => "City",
            StyleKind::Abstract => "Abstract",
            StyleKind::Space => "Space",
            StyleKind::Dark => "Dark",
            StyleKind::Minimal => "Minimal",
        };
        write!(f, "{name}")
    }
}

/// Request body for `POST /api/wallpaper/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub aspect_ratio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl GenerationRequest {
    /// Builds a request from form selections.
    #[must_use]
    pub fn new(prompt: impl Into<String>, aspect_ratio: AspectRatio, style: StyleKind) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: aspect_ratio.api_value().to_string(),
            style: style.api_value().map(str::to_string),
        }
    }
}

/// Response body from `POST /api/wallpaper/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    pub prompt: String,
    pub aspect_ratio: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// A fetched wallpaper: decoded dimensions, display handle, and raw bytes
/// kept around so a later save writes exactly what the backend produced.
#[derive(Debug, Clone)]
pub struct Wallpaper {
    pub url: String,
    pub handle: Handle,
    pub bytes: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

/// Sends a generation request to the backend.
pub async fn generate(base_url: String, request: GenerationRequest) -> Result<GenerationResponse> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let url = endpoint_url(&base_url);
    let response = client.post(&url).json(&request).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    response
        .json::<GenerationResponse>()
        .await
        .map_err(|e| Error::Api(e.to_string()))
}

/// Fetches the generated image and decodes it into a display handle.
pub async fn fetch_image(url: String) -> Result<Wallpaper> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response.bytes().await?.to_vec();

    // Decode once to validate the payload and learn the pixel dimensions.
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = (decoded.width(), decoded.height());

    let handle = Handle::from_bytes(bytes.clone());

    Ok(Wallpaper {
        url,
        handle,
        bytes: Arc::new(bytes),
        width,
        height,
    })
}

fn endpoint_url(base_url: &str) -> String {
    format!(
        "{}/api/wallpaper/generate",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_fields() {
        let request = GenerationRequest::new(
            "Beautiful sunset over mountains",
            AspectRatio::Portrait,
            StyleKind::Nature,
        );
        let value = serde_json::to_value(&request).expect("serialization should succeed");

        assert_eq!(value["prompt"], "Beautiful sunset over mountains");
        assert_eq!(value["aspect_ratio"], "9:16");
        assert_eq!(value["style"], "nature");
    }

    #[test]
    fn auto_style_is_omitted_from_the_request() {
        let request = GenerationRequest::new("Anything", AspectRatio::Square, StyleKind::Auto);
        let value = serde_json::to_value(&request).expect("serialization should succeed");

        assert_eq!(value["aspect_ratio"], "1:1");
        assert!(value.get("style").is_none());
    }

    #[test]
    fn response_deserializes_success_payload() {
        let json = r#"{
            "success": true,
            "image_url": "https://images.example/photo.webp",
            "prompt": "sunset",
            "aspect_ratio": "9:16"
        }"#;

        let response: GenerationResponse =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert!(response.success);
        assert_eq!(
            response.image_url.as_deref(),
            Some("https://images.example/photo.webp")
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn response_deserializes_error_payload() {
        let json = r#"{
            "success": false,
            "prompt": "sunset",
            "aspect_ratio": "9:16",
            "error": "generation backend unavailable"
        }"#;

        let response: GenerationResponse =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert!(!response.success);
        assert!(response.image_url.is_none());
        assert_eq!(
            response.error.as_deref(),
            Some("generation backend unavailable")
        );
    }

    #[test]
    fn aspect_ratio_wire_values_round_trip() {
        for ratio in AspectRatio::ALL {
            assert_eq!(AspectRatio::from_api_value(ratio.api_value()), ratio);
        }
    }

    #[test]
    fn unknown_aspect_ratio_falls_back_to_portrait() {
        assert_eq!(AspectRatio::from_api_value("21:9"), AspectRatio::Portrait);
    }

    #[test]
    fn style_labels_round_trip() {
        for style in StyleKind::ALL {
            match style.api_value() {
                Some(label) => assert_eq!(StyleKind::from_label(label), style),
                None => assert_eq!(style, StyleKind::Auto),
            }
        }
    }

    #[test]
    fn unknown_style_falls_back_to_auto() {
        assert_eq!(StyleKind::from_label("vaporwave"), StyleKind::Auto);
    }

    #[test]
    fn endpoint_url_handles_trailing_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8001/"),
            "http://localhost:8001/api/wallpaper/generate"
        );
        assert_eq!(
            endpoint_url("http://localhost:8001"),
            "http://localhost:8001/api/wallpaper/generate"
        );
    }
}
