// Gateway traits for the three external capabilities the acquisition
// workflow sequences: the native picker, the image resizer, and the
// filesystem reader. Each is a black-box async operation; hosts plug in
// platform implementations, tests plug in mocks.

use crate::models::{PhotoFormat, PickerOutcome, PickerRequest, ResizedImage};
use async_trait::async_trait;

/// Error type for the resize and read gateways
#[derive(Debug)]
pub enum GatewayError {
    InvalidDataUri(String),
    ImageDecode(String),
    ImageEncode(String),
    Io(std::io::Error),
    Other(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::InvalidDataUri(msg) => write!(f, "Invalid data URI: {}", msg),
            GatewayError::ImageDecode(msg) => write!(f, "Image decode error: {}", msg),
            GatewayError::ImageEncode(msg) => write!(f, "Image encode error: {}", msg),
            GatewayError::Io(e) => write!(f, "IO error: {}", e),
            GatewayError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::Io(err)
    }
}

/// Presents a native selection UI and resolves to one picker outcome
///
/// Cancellation and picker-side errors are outcome variants, not trait
/// errors, so a single return value carries every way a presentation
/// can end.
#[async_trait]
pub trait PickerGateway: Send + Sync {
    async fn present(&self, request: &PickerRequest) -> PickerOutcome;
}

/// Transforms a base64 data URI into a resized image at a new location
#[async_trait]
pub trait ResizeGateway: Send + Sync {
    async fn resize(
        &self,
        source_data_uri: &str,
        height: u32,
        width: u32,
        format: PhotoFormat,
        quality: u8,
    ) -> Result<ResizedImage, GatewayError>;
}

/// Reads a local file and returns its contents base64-encoded
#[async_trait]
pub trait FileReadGateway: Send + Sync {
    async fn read_as_base64(&self, path: &str) -> Result<String, GatewayError>;
}
