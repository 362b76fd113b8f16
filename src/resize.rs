//! Built-in resize gateway backed by the `image` crate.
//!
//! Decodes the base64 data URI, resizes aspect-preserving, encodes in the
//! requested format, and writes the result under the configured storage
//! directory with a fresh UUID filename. The pixel work runs on a
//! blocking thread so the async runtime stays responsive.

use crate::gateway::{GatewayError, ResizeGateway};
use crate::models::{PhotoFormat, ResizedImage};
use async_trait::async_trait;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops::FilterType, ImageFormat};
use std::io::Cursor;
use std::path::PathBuf;

/// Resize gateway writing its output into a local storage directory
pub struct ImageResizer {
    storage_dir: PathBuf,
}

impl ImageResizer {
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
        }
    }
}

/// Extract the raw bytes from a `data:<mime>;base64,<payload>` URI
fn decode_data_uri(source: &str) -> Result<Vec<u8>, GatewayError> {
    let rest = source
        .strip_prefix("data:")
        .ok_or_else(|| GatewayError::InvalidDataUri("missing data: scheme".to_string()))?;

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| GatewayError::InvalidDataUri("missing payload separator".to_string()))?;

    if !meta.ends_with(";base64") {
        return Err(GatewayError::InvalidDataUri(
            "payload is not base64-encoded".to_string(),
        ));
    }

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| GatewayError::InvalidDataUri(format!("base64 decode failed: {}", e)))
}

fn encode_image(
    img: &image::DynamicImage,
    format: PhotoFormat,
    quality: u8,
) -> Result<Vec<u8>, GatewayError> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        PhotoFormat::Jpeg => {
            // JPEG carries no alpha channel
            let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
            img.to_rgb8().write_with_encoder(encoder).map_err(|e| {
                GatewayError::ImageEncode(format!("Failed to write JPEG: {}", e))
            })?;
        }
        PhotoFormat::Png => {
            img.write_to(&mut buffer, ImageFormat::Png).map_err(|e| {
                GatewayError::ImageEncode(format!("Failed to write PNG: {}", e))
            })?;
        }
        PhotoFormat::Webp => {
            img.write_to(&mut buffer, ImageFormat::WebP).map_err(|e| {
                GatewayError::ImageEncode(format!("Failed to write WebP: {}", e))
            })?;
        }
    }

    Ok(buffer.into_inner())
}

#[async_trait]
impl ResizeGateway for ImageResizer {
    async fn resize(
        &self,
        source_data_uri: &str,
        height: u32,
        width: u32,
        format: PhotoFormat,
        quality: u8,
    ) -> Result<ResizedImage, GatewayError> {
        let source = source_data_uri.to_string();
        let storage_dir = self.storage_dir.clone();

        tokio::task::spawn_blocking(move || {
            let bytes = decode_data_uri(&source)?;

            let img = image::load_from_memory(&bytes)
                .map_err(|e| GatewayError::ImageDecode(format!("Failed to load image: {}", e)))?;

            log::debug!(
                "resizing {}x{} image to fit {}x{}",
                img.width(),
                img.height(),
                width,
                height
            );

            let resized = img.resize(width, height, FilterType::Lanczos3);
            let encoded = encode_image(&resized, format, quality)?;

            std::fs::create_dir_all(&storage_dir)?;
            let filename = format!("{}.{}", uuid::Uuid::new_v4(), format.extension());
            let output_path = storage_dir.join(&filename);
            std::fs::write(&output_path, encoded)?;

            log::debug!("resized image written: {:?}", output_path);

            Ok(ResizedImage {
                uri: format!("file://{}", output_path.display()),
            })
        })
        .await
        .map_err(|e| GatewayError::Other(format!("Task join error: {}", e)))?
    }
}
