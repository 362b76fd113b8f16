// Built-in file-read gateway: async read of a local path, returned as a
// base64 string.

use crate::gateway::{FileReadGateway, GatewayError};
use async_trait::async_trait;
use base64::Engine;

/// File reader backed by `tokio::fs`
pub struct Base64FileReader;

#[async_trait]
impl FileReadGateway for Base64FileReader {
    async fn read_as_base64(&self, path: &str) -> Result<String, GatewayError> {
        // On non-Android platforms the resize step hands over a
        // file://-scheme URI; the filesystem wants the plain path
        let path = path.strip_prefix("file://").unwrap_or(path);
        let bytes = tokio::fs::read(path).await?;
        log::debug!("read {} bytes from {}", bytes.len(), path);
        Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
    }
}
