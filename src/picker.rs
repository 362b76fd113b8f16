// Picker error type and the stub gateway for platforms without a native
// picker. Real hosts supply their own PickerGateway implementation; the
// stub keeps the workflow runnable everywhere with a well-formed failure.

use crate::gateway::PickerGateway;
use crate::models::{PickerOutcome, PickerRequest};
use async_trait::async_trait;

/// Error reported by a native picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    PermissionDenied(String),
    Timeout(String),
    PlatformNotSupported(String),
    Other(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            PickerError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            PickerError::PlatformNotSupported(msg) => {
                write!(f, "Platform not supported: {}", msg)
            }
            PickerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {}

/// Picker gateway for platforms without a native picker integration
///
/// Every presentation resolves to `Failed(PlatformNotSupported)`.
pub struct UnsupportedPicker;

#[async_trait]
impl PickerGateway for UnsupportedPicker {
    async fn present(&self, _request: &PickerRequest) -> PickerOutcome {
        PickerOutcome::Failed(PickerError::PlatformNotSupported(
            "Image picker not available on this platform".to_string(),
        ))
    }
}
